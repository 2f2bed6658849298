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

use crate::fields::Field;
use crate::{parse_digits, Error, FixedField};

/// Year of enrollment.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
pub struct Year(u16);

impl Year {
    /// The earliest accepted year.
    pub const MIN: u16 = 2000;

    /// The latest accepted year.
    pub const MAX: u16 = 2030;

    /// Returns the year as a number.
    #[inline]
    pub fn get(&self) -> u16 {
        self.0
    }
}

impl FixedField for Year {
    const FIELD: Field = Field::Year;
    const LENGTH: usize = 4;

    fn from_field(s: &str) -> Result<Self, Error> {
        Self::check_length(s)?;
        parse_digits(Field::Year, s)?.try_into()
    }
}

impl TryFrom<u16> for Year {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::OutOfRange {
                field: Field::Year,
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Returns the numeric value of a year field.
///
/// The value is not range checked. Returns `None` if the field is not a
/// number.
pub fn full_year(year: &str) -> Option<u16> {
    parse_digits(Field::Year, year).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_bounds() {
        assert_eq!(Year::from_field("2000").map(|y| y.get()), Ok(2000));
        assert_eq!(Year::from_field("2030").map(|y| y.get()), Ok(2030));
        assert!(matches!(
            Year::from_field("1999"),
            Err(Error::OutOfRange { value: 1999, .. })
        ));
        assert!(matches!(
            Year::from_field("2031"),
            Err(Error::OutOfRange { value: 2031, .. })
        ));
    }

    #[test]
    fn letters_are_not_a_year() {
        assert!(matches!(
            Year::from_field("20XX"),
            Err(Error::NotANumber { field: Field::Year, .. })
        ));
        assert!(matches!(
            Year::from_field("SD20"),
            Err(Error::NotANumber { .. })
        ));
    }

    #[test]
    fn year_from_number() {
        assert_eq!(Year::try_from(2030).map(u16::from), Ok(2030));
        assert!(matches!(
            Year::try_from(1999),
            Err(Error::OutOfRange { value: 1999, .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_year_is_range_checked() {
        assert_eq!(serde_json::from_str::<Year>("2023").map(u16::from).ok(), Some(2023));
        assert!(serde_json::from_str::<Year>("1999").is_err());
        assert_eq!(
            serde_json::to_string(&Year::try_from(2000).expect("year should be valid")).ok(),
            Some("2000".to_string())
        );
    }

    #[test]
    fn full_year_of_field() {
        assert_eq!(full_year("2023"), Some(2023));
        assert_eq!(full_year("ABCD"), None);
    }
}
