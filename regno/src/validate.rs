// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::fields::Field;
use crate::{format, parse, Error};

const REQUIRED: &str = "Regimental number is required";
const REQUIRED_SUGGESTION: &str = "Enter your NCC regimental number as provided by your unit";
const INCOMPLETE: &str = "Regimental number appears incomplete";
const INCOMPLETE_SUGGESTION: &str = "Please enter your complete regimental number";
const INVALID: &str = "Invalid regimental number";
const INVALID_FORMAT: &str = "Invalid regimental number format";
const VERIFY_SUGGESTION: &str = "Please verify your regimental number with your unit";

/// Outcome of validating the text of an input field.
///
/// On success `suggestion` holds the formatted number with its decoded names;
/// on failure `error` and `suggestion` hold messages for the user.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct InputValidation {
    pub is_valid: bool,
    pub error: String,
    pub suggestion: String,
}

impl InputValidation {
    fn accepted(suggestion: String) -> Self {
        Self {
            is_valid: true,
            error: String::new(),
            suggestion,
        }
    }

    fn rejected(error: &str, suggestion: &str) -> Self {
        Self {
            is_valid: false,
            error: error.to_string(),
            suggestion: suggestion.to_string(),
        }
    }
}

/// Validates a regimental number while it is being typed.
///
/// Only empty and incomplete input get a specific message. All invalid
/// state, year, division or wing fields share one message, and anything
/// else, i.e. the serial number, reports an invalid format.
///
/// ```
/// let validation = regno::validate_input("");
///
/// assert!(!validation.is_valid);
/// assert_eq!(validation.error, "Regimental number is required");
/// ```
pub fn validate_input(input: &str) -> InputValidation {
    if input.trim().is_empty() {
        return InputValidation::rejected(REQUIRED, REQUIRED_SUGGESTION);
    }

    let code = parse(input);
    if code.is_valid {
        return InputValidation::accepted(format(&code));
    }

    match code.validate() {
        Err(Error::Empty | Error::TooShort { .. }) => {
            InputValidation::rejected(INCOMPLETE, INCOMPLETE_SUGGESTION)
        }
        Err(err)
            if matches!(
                err.field(),
                Some(Field::State | Field::Year | Field::Division | Field::Wing)
            ) =>
        {
            InputValidation::rejected(INVALID, VERIFY_SUGGESTION)
        }
        _ => InputValidation::rejected(INVALID_FORMAT, VERIFY_SUGGESTION),
    }
}
