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
use crate::Error;

/// A fixed-length field of a regimental number.
///
/// This trait is implemented by all fields with a fixed width. Each field is
/// created [`from_field`](FixedField::from_field) and owns its decoded value.
pub trait FixedField: Sized {
    /// The field within the regimental number.
    const FIELD: Field;

    /// The fixed length of this field in characters.
    const LENGTH: usize;

    /// Parse this field from its characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not [`LENGTH`](FixedField::LENGTH)
    /// characters long or contains an invalid value.
    fn from_field(s: &str) -> Result<Self, Error>;

    /// Checks that the field has exactly [`LENGTH`](FixedField::LENGTH)
    /// characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFieldLength`] otherwise.
    fn check_length(s: &str) -> Result<(), Error> {
        let actual = s.chars().count();
        if actual == Self::LENGTH {
            Ok(())
        } else {
            Err(Error::InvalidFieldLength {
                field: Self::FIELD,
                expected: Self::LENGTH,
                actual,
            })
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Cursor over the characters of a normalized regimental number.
///
/// Positions are counted in characters, never in bytes, so a field never
/// splits a multi-byte character.
pub(crate) struct Fields<'a> {
    s: &'a str,
    index: usize,
}

impl<'a> Fields<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, index: 0 }
    }

    /// Returns the next `n` characters without advancing the position.
    ///
    /// Fewer characters are returned if the input ends before.
    #[inline]
    pub fn peek(&self, n: usize) -> &'a str {
        let rest = &self.s[self.index..];
        let end = rest.char_indices().nth(n).map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    }

    /// Reads the next `n` characters, and advances the position past them.
    #[inline]
    pub fn take(&mut self, n: usize) -> &'a str {
        let field = self.peek(n);
        self.index += field.len();
        field
    }

    /// Reads everything that is left.
    #[inline]
    pub fn rest(&mut self) -> &'a str {
        let rest = &self.s[self.index..];
        self.index = self.s.len();
        rest
    }
}

/// Parses a field of ASCII digits.
///
/// # Errors
///
/// Returns [`Error::NotANumber`] if the field is empty, contains anything but
/// digits or does not fit into a `u16`.
pub(crate) fn parse_digits(field: Field, s: &str) -> Result<u16, Error> {
    let not_a_number = || Error::NotANumber {
        field,
        value: s.to_string(),
    };

    if s.is_empty() {
        return Err(not_a_number());
    }

    s.bytes().try_fold(0u16, |acc, byte| {
        if byte.is_ascii_digit() {
            acc.checked_mul(10)
                .and_then(|acc| acc.checked_add(u16::from(byte & 0x0F)))
                .ok_or_else(not_a_number)
        } else {
            Err(not_a_number())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_reads_characters() {
        let mut fields = Fields::new("MH2023SDA014262");
        assert_eq!(fields.take(2), "MH");
        assert_eq!(fields.peek(4), "2023");
        assert_eq!(fields.take(4), "2023");
        assert_eq!(fields.take(2), "SD");
        assert_eq!(fields.rest(), "A014262");
        assert_eq!(fields.take(1), "");
    }

    #[test]
    fn cursor_respects_char_boundaries() {
        let mut fields = Fields::new("ÄÖ2023");
        assert_eq!(fields.take(2), "ÄÖ");
        assert_eq!(fields.take(10), "2023");
    }

    #[test]
    fn parses_digits() {
        assert_eq!(parse_digits(Field::Year, "2023"), Ok(2023));
        assert_eq!(parse_digits(Field::Year, "0007"), Ok(7));
        assert!(matches!(
            parse_digits(Field::Year, "20A3"),
            Err(Error::NotANumber { .. })
        ));
        assert!(parse_digits(Field::Year, "").is_err());
        assert!(parse_digits(Field::Year, "99999999").is_err());
    }
}
