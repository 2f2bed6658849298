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

use std::fmt;
use std::str::FromStr;

use crate::fields::Field;
use crate::Error;

/// The per-cadet remainder after the fixed fields.
///
/// A serial number is non-empty and contains only the characters `A-Z` and
/// `0-9`.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Serial(String);

impl Serial {
    /// Returns the serial number as string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Serial {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::InvalidFieldLength {
                field: Field::Serial,
                expected: 1,
                actual: 0,
            });
        }

        match s
            .chars()
            .find(|ch| !(ch.is_ascii_uppercase() || ch.is_ascii_digit()))
        {
            Some(ch) => Err(Error::InvalidCharacter {
                field: Field::Serial,
                ch,
            }),
            None => Ok(Self(s.to_string())),
        }
    }
}

impl TryFrom<String> for Serial {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Serial> for String {
    fn from(serial: Serial) -> Self {
        serial.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphanumeric_only() {
        assert_eq!("014262".parse::<Serial>().map(String::from), Ok("014262".to_string()));
        assert!("A1B2".parse::<Serial>().is_ok());

        for serial in ["01-4262", "01 4262", "0142_62", "abc", "01426É"] {
            assert!(
                matches!(
                    serial.parse::<Serial>(),
                    Err(Error::InvalidCharacter { field: Field::Serial, .. })
                ),
                "{serial} should be rejected"
            );
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_serial_is_checked() {
        assert_eq!(
            serde_json::from_str::<Serial>(r#""014262""#).map(String::from).ok(),
            Some("014262".to_string())
        );
        assert!(serde_json::from_str::<Serial>(r#""a-b""#).is_err());
        assert!(serde_json::from_str::<Serial>(r#""""#).is_err());
    }

    #[test]
    fn empty_serial() {
        assert!(matches!(
            "".parse::<Serial>(),
            Err(Error::InvalidFieldLength { actual: 0, .. })
        ));
    }
}
