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

use log::debug;

use crate::fields::{division_name, full_year, state_name, wing_name};
use crate::record::{normalize, Segments};
use crate::{Error, RegimentalNumber};

/// The fields of a regimental number as entered by the user.
///
/// An identity code is built fresh from the raw input on every keystroke.
/// The fields are only trustworthy if [`is_valid`](IdentityCode::is_valid)
/// is `true`; otherwise they hold whatever could be extracted, or nothing at
/// all if the input was too short.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct IdentityCode {
    pub raw: String,
    pub state_code: String,
    pub year: String,
    pub division: String,
    pub wing: String,
    pub serial_number: String,
    pub is_valid: bool,
}

impl IdentityCode {
    /// Extracts and validates the fields of a raw regimental number.
    ///
    /// This never fails: invalid input yields a code with `is_valid` set to
    /// `false`. Use [`validate`](IdentityCode::validate) to find out why.
    pub fn parse(raw: &str) -> Self {
        let mut code = Self {
            raw: raw.to_string(),
            ..Self::default()
        };

        let normalized = normalize(raw);
        let segments = match Segments::split(&normalized) {
            Ok(segments) => segments,
            Err(err) => {
                debug!("regimental number rejected: {err}");
                return code;
            }
        };

        code.state_code = segments.state.to_string();
        code.year = segments.year.to_string();
        code.division = segments.division.to_string();
        code.wing = segments.wing.to_string();
        code.serial_number = segments.serial.to_string();

        match segments.validate() {
            Ok(_) => code.is_valid = true,
            Err(err) => debug!("regimental number {normalized} is invalid: {err}"),
        }

        code
    }

    /// Validates the raw input again and returns the typed number.
    ///
    /// # Errors
    ///
    /// Returns the reason why the code is not valid.
    pub fn validate(&self) -> Result<RegimentalNumber, Error> {
        self.raw.parse()
    }

    /// Returns the extracted fields concatenated without whitespace.
    pub fn code(&self) -> String {
        [
            self.state_code.as_str(),
            self.year.as_str(),
            self.division.as_str(),
            self.wing.as_str(),
            self.serial_number.as_str(),
        ]
        .concat()
    }
}

/// Parses a regimental number.
///
/// Shorthand for [`IdentityCode::parse`].
pub fn parse(raw: &str) -> IdentityCode {
    IdentityCode::parse(raw)
}

/// Formats a valid code with its decoded names.
///
/// Returns an empty string if the code is not valid.
///
/// ```
/// let code = regno::parse("MH2023SDA014262");
///
/// assert_eq!(
///     regno::format(&code),
///     "MH2023SDA014262 (Maharashtra, Senior Division (Male), Army Wing, 2023)"
/// );
/// ```
pub fn format(code: &IdentityCode) -> String {
    if !code.is_valid {
        return String::new();
    }

    let year = full_year(&code.year).map_or_else(|| code.year.clone(), |year| year.to_string());

    format!(
        "{} ({}, {}, {}, {year})",
        code.code(),
        state_name(&code.state_code),
        division_name(&code.division),
        wing_name(&code.wing),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Field;

    #[test]
    fn parses_example() {
        let code = parse("MH2023SDA014262");

        assert_eq!(
            code,
            IdentityCode {
                raw: "MH2023SDA014262".to_string(),
                state_code: "MH".to_string(),
                year: "2023".to_string(),
                division: "SD".to_string(),
                wing: "A".to_string(),
                serial_number: "014262".to_string(),
                is_valid: true,
            }
        );
    }

    #[test]
    fn keeps_fields_of_invalid_code() {
        let code = parse("ZZ2023SDA014262");

        assert!(!code.is_valid);
        assert_eq!(code.state_code, "ZZ");
        assert_eq!(code.serial_number, "014262");
        assert_eq!(
            code.validate().map_err(|err| err.field()),
            Err(Some(Field::State))
        );
    }

    #[test]
    fn short_code_has_no_fields() {
        let code = parse("MH2023");

        assert_eq!(code.raw, "MH2023");
        assert_eq!(code.code(), "");
        assert!(!code.is_valid);
        assert_eq!(code.validate(), Err(Error::TooShort { actual: 6 }));
    }

    #[test]
    fn formats_air_force() {
        let code = parse("up 2015 jw af 00x1");

        assert!(code.is_valid);
        assert_eq!(
            format(&code),
            "UP2015JWAF00X1 (Uttar Pradesh, Junior Wing (Female), Air Force Wing, 2015)"
        );
    }

    #[test]
    fn invalid_code_formats_empty() {
        assert_eq!(format(&parse("MH2023SDA01-4262")), "");
        assert_eq!(format(&IdentityCode::default()), "");
    }
}
