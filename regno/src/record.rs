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

use log::trace;

use crate::fields::*;
use crate::{Error, Fields, FixedField};

/// The minimum length of a regimental number in characters, not counting
/// whitespace.
pub const MIN_LENGTH: usize = 12;

/// Removes all whitespace and converts the remainder to uppercase.
///
/// Whitespace is the set a browser strips with `\s`: Unicode white space and
/// the byte order mark, but not the next line control `U+0085`.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !is_space(*ch))
        .flat_map(char::to_uppercase)
        .collect()
}

fn is_space(ch: char) -> bool {
    match ch {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        ch => ch.is_whitespace(),
    }
}

/// The unvalidated fields of a normalized regimental number.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct Segments<'a> {
    pub state: &'a str,
    pub year: &'a str,
    pub division: &'a str,
    pub wing: &'a str,
    pub serial: &'a str,
}

impl<'a> Segments<'a> {
    /// Splits a normalized regimental number at its field positions.
    ///
    /// # Errors
    ///
    /// Returns an error if the number is empty or shorter than
    /// [`MIN_LENGTH`].
    pub fn split(normalized: &'a str) -> Result<Self, Error> {
        let actual = normalized.chars().count();

        if actual == 0 {
            return Err(Error::Empty);
        }

        if actual < MIN_LENGTH {
            return Err(Error::TooShort { actual });
        }

        let mut fields = Fields::new(normalized);
        let state = fields.take(State::LENGTH);
        let year = fields.take(Year::LENGTH);
        let division = fields.take(Division::LENGTH);

        // The wing is the only field without a fixed width. The two character
        // Air Force code must be checked before taking a single character.
        let wing = if fields.peek(AIR_FORCE_SENTINEL.len()) == AIR_FORCE_SENTINEL {
            trace!("wing at offset 8 is {AIR_FORCE_SENTINEL}");
            fields.take(AIR_FORCE_SENTINEL.len())
        } else {
            fields.take(1)
        };

        let serial = fields.rest();

        Ok(Self {
            state,
            year,
            division,
            wing,
            serial,
        })
    }

    /// Validates the fields in the order they are written.
    ///
    /// # Errors
    ///
    /// Returns the error of the first invalid field.
    pub fn validate(&self) -> Result<RegimentalNumber, Error> {
        Ok(RegimentalNumber {
            state: State::from_field(self.state)?,
            year: Year::from_field(self.year)?,
            division: Division::from_field(self.division)?,
            wing: self.wing.parse()?,
            serial: self.serial.parse()?,
        })
    }
}

/// A validated NCC regimental number.
///
/// A regimental number is written as state, year, division, wing and serial
/// number without separators, e.g. `MH2023SDA014262`. The only way to obtain a
/// value is by parsing it:
///
/// ```
/// use regno::{Division, RegimentalNumber, State, Wing};
///
/// # fn main() -> Result<(), regno::Error> {
/// let number: RegimentalNumber = "wb 2021 jd af 123456".parse()?;
///
/// assert_eq!(number.state(), State::WestBengal);
/// assert_eq!(number.year().get(), 2021);
/// assert_eq!(number.division(), Division::JuniorDivision);
/// assert_eq!(number.wing(), Wing::AirForce);
/// assert_eq!(number.serial().as_str(), "123456");
/// assert_eq!(number.to_string(), "WB2021JDAF123456");
/// #     Ok(())
/// # }
/// ```
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct RegimentalNumber {
    state: State,
    year: Year,
    division: Division,
    wing: Wing,
    serial: Serial,
}

impl RegimentalNumber {
    pub fn state(&self) -> State {
        self.state
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn division(&self) -> Division {
        self.division
    }

    pub fn wing(&self) -> Wing {
        self.wing
    }

    pub fn serial(&self) -> &Serial {
        &self.serial
    }
}

impl FromStr for RegimentalNumber {
    type Err = Error;

    /// Parses a regimental number ignoring whitespace and case.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid [`Field`] or if the number
    /// is empty or too short.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Segments::split(&normalized)?.validate()
    }
}

impl TryFrom<String> for RegimentalNumber {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RegimentalNumber> for String {
    fn from(number: RegimentalNumber) -> Self {
        number.to_string()
    }
}

impl fmt::Display for RegimentalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.state, self.year, self.division, self.wing, self.serial
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_whitespace_and_case() {
        assert_eq!(normalize(" mh 2023\tsda\n014262 "), "MH2023SDA014262");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn strips_byte_order_mark() {
        assert_eq!(normalize("\u{FEFF}MH2023SDA014262"), "MH2023SDA014262");
        assert_eq!(normalize("MH\u{00A0}2023\u{2003}SDA014262"), "MH2023SDA014262");
        assert_eq!(normalize("MH2023SDA01426\u{0085}2"), "MH2023SDA01426\u{0085}2");
    }

    #[test]
    fn splits_single_character_wing() {
        let segments = Segments::split("MH2023SDA014262").expect("number should split");
        assert_eq!(
            segments,
            Segments {
                state: "MH",
                year: "2023",
                division: "SD",
                wing: "A",
                serial: "014262",
            }
        );
    }

    #[test]
    fn splits_air_force_wing() {
        let segments = Segments::split("MH2023SDAF014262").expect("number should split");
        assert_eq!(segments.wing, "AF");
        assert_eq!(segments.serial, "014262");

        // "A" followed by anything but "F" is the Army
        let segments = Segments::split("MH2023SDAG014262").expect("number should split");
        assert_eq!(segments.wing, "A");
        assert_eq!(segments.serial, "G014262");
    }

    #[test]
    fn rejects_short_numbers() {
        assert_eq!(Segments::split(""), Err(Error::Empty));
        assert_eq!(
            Segments::split("MH2023SDA01"),
            Err(Error::TooShort { actual: 11 })
        );
        assert!(Segments::split("MH2023SDA014").is_ok());
    }

    #[test]
    fn validates_in_order() {
        // state and year are both invalid but the state is reported
        let err = "ZZ1999SDA014262"
            .parse::<RegimentalNumber>()
            .expect_err("state should be invalid");
        assert_eq!(err.field(), Some(Field::State));

        let err = "MH2023SDX014262"
            .parse::<RegimentalNumber>()
            .expect_err("wing should be invalid");
        assert_eq!(
            err,
            Error::InvalidVariant {
                field: Field::Wing,
                value: "X".to_string()
            }
        );
    }

    #[test]
    fn displays_canonical_code() {
        let number: RegimentalNumber = "ka 2010 swn 0077ab".parse().expect("number should parse");
        assert_eq!(number.to_string(), "KA2010SWN0077AB");
        assert_eq!(number.wing(), Wing::Naval);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_code() {
        let number: RegimentalNumber = "MH2023SDAF014262".parse().expect("number should parse");
        let json = serde_json::to_string(&number).expect("number should serialize");
        assert_eq!(json, r#""MH2023SDAF014262""#);

        let back: RegimentalNumber = serde_json::from_str(&json).expect("number should deserialize");
        assert_eq!(back, number);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializing_validates() {
        for json in [
            r#""MH1999SDA014262""#,
            r#""MH2023SDAa-b""#,
            r#""ZZ2023SDA014262""#,
            r#""MH2023""#,
            r#"{"state":"MH","year":1999,"division":"SD","wing":"A","serial":"a-b"}"#,
        ] {
            assert!(
                serde_json::from_str::<RegimentalNumber>(json).is_err(),
                "{json} should be rejected"
            );
        }
    }
}
