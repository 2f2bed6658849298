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
use crate::{Error, FixedField};

code_table! {
    /// Training tier of the cadet.
    pub enum Division(Field::Division) {
        JuniorDivision = "JD" => "Junior Division (Male)",
        JuniorWing = "JW" => "Junior Wing (Female)",
        SeniorDivision = "SD" => "Senior Division (Male)",
        SeniorWing = "SW" => "Senior Wing (Female)",
    }
}

impl FixedField for Division {
    const FIELD: Field = Field::Division;
    const LENGTH: usize = 2;

    fn from_field(s: &str) -> Result<Self, Error> {
        Self::check_length(s)?;
        s.parse()
    }
}

/// Returns the division's name or `"Unknown Division"`.
pub fn division_name(code: &str) -> &'static str {
    Division::from_code(code).map_or("Unknown Division", |division| division.name())
}
