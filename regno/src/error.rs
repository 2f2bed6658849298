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

use std::error;
use std::fmt;

use crate::fields::Field;

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    Empty,
    TooShort {
        actual: usize,
    },
    InvalidFieldLength {
        field: Field,
        expected: usize,
        actual: usize,
    },
    InvalidVariant {
        field: Field,
        value: String,
    },
    NotANumber {
        field: Field,
        value: String,
    },
    OutOfRange {
        field: Field,
        value: u16,
        min: u16,
        max: u16,
    },
    InvalidCharacter {
        field: Field,
        ch: char,
    },
}

impl Error {
    /// The field that failed validation.
    ///
    /// Returns `None` if the number was rejected as a whole, i.e. it is empty
    /// or too short to hold all fields.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Empty | Self::TooShort { .. } => None,
            Self::InvalidFieldLength { field, .. }
            | Self::InvalidVariant { field, .. }
            | Self::NotANumber { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::InvalidCharacter { field, .. } => Some(*field),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "regimental number is empty"),
            Self::TooShort { actual } => write!(
                f,
                "regimental number should be at least {} characters long but is {actual}",
                crate::MIN_LENGTH
            ),
            Self::InvalidFieldLength {
                field,
                expected,
                actual,
            } => {
                write!(f, "{field} should be {expected} characters long but is {actual}")
            }
            Self::InvalidVariant { field, value } => {
                write!(f, "found \"{value}\" in {field} but should be {}", field.expected())
            }
            Self::NotANumber { field, value } => {
                write!(f, "{field} should be a number but is \"{value}\"")
            }
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(f, "{field} is {value} but should be within {min} and {max}")
            }
            Self::InvalidCharacter { field, ch } => {
                write!(f, "{field} contains \"{ch}\" but should be {}", field.expected())
            }
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_failing_field() {
        let err = Error::InvalidVariant {
            field: Field::State,
            value: "ZZ".to_string(),
        };
        assert_eq!(err.field(), Some(Field::State));
        assert_eq!(Error::TooShort { actual: 3 }.field(), None);
    }

    #[test]
    fn displays_reason() {
        let err = Error::OutOfRange {
            field: Field::Year,
            value: 1999,
            min: 2000,
            max: 2030,
        };
        assert_eq!(
            err.to_string(),
            "year is 1999 but should be within 2000 and 2030"
        );

        let err = Error::InvalidCharacter {
            field: Field::Serial,
            ch: '-',
        };
        assert_eq!(
            err.to_string(),
            "serial number contains \"-\" but should be letters A-Z or digits 0-9"
        );
    }
}
