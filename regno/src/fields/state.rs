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
    /// State or union territory that issued the regimental number.
    pub enum State(Field::State) {
        AndamanNicobar = "AN" => "Andaman and Nicobar Islands",
        AndhraPradesh = "AP" => "Andhra Pradesh",
        ArunachalPradesh = "AR" => "Arunachal Pradesh",
        Assam = "AS" => "Assam",
        Bihar = "BR" => "Bihar",
        Chandigarh = "CH" => "Chandigarh",
        Chhattisgarh = "CG" => "Chhattisgarh",
        DadraNagarHaveli = "DN" => "Dadra and Nagar Haveli",
        DamanDiu = "DD" => "Daman and Diu",
        Delhi = "DL" => "Delhi",
        Goa = "GA" => "Goa",
        Gujarat = "GJ" => "Gujarat",
        Haryana = "HR" => "Haryana",
        HimachalPradesh = "HP" => "Himachal Pradesh",
        JammuKashmir = "JK" => "Jammu and Kashmir",
        Jharkhand = "JH" => "Jharkhand",
        Karnataka = "KA" => "Karnataka",
        Kerala = "KL" => "Kerala",
        Ladakh = "LA" => "Ladakh",
        Lakshadweep = "LD" => "Lakshadweep",
        MadhyaPradesh = "MP" => "Madhya Pradesh",
        Maharashtra = "MH" => "Maharashtra",
        Manipur = "MN" => "Manipur",
        Meghalaya = "ML" => "Meghalaya",
        Mizoram = "MZ" => "Mizoram",
        Nagaland = "NL" => "Nagaland",
        Odisha = "OD" => "Odisha",
        Puducherry = "PY" => "Puducherry",
        Punjab = "PB" => "Punjab",
        Rajasthan = "RJ" => "Rajasthan",
        Sikkim = "SK" => "Sikkim",
        TamilNadu = "TN" => "Tamil Nadu",
        Telangana = "TG" => "Telangana",
        Tripura = "TR" => "Tripura",
        UttarPradesh = "UP" => "Uttar Pradesh",
        Uttarakhand = "UT" => "Uttarakhand",
        WestBengal = "WB" => "West Bengal",
    }
}

/// Codes of all states in the order of the table.
pub const STATE_CODES: [&str; 37] = {
    let mut codes = [""; 37];
    let mut i = 0;
    while i < codes.len() {
        codes[i] = State::ALL[i].code();
        i += 1;
    }
    codes
};

impl FixedField for State {
    const FIELD: Field = Field::State;
    const LENGTH: usize = 2;

    fn from_field(s: &str) -> Result<Self, Error> {
        Self::check_length(s)?;
        s.parse()
    }
}

/// Returns the state's name or the code itself if the state is unknown.
pub fn state_name(code: &str) -> &str {
    State::from_code(code).map_or(code, |state| state.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_complete() {
        assert_eq!(State::ALL.len(), STATE_CODES.len());
        assert_eq!(STATE_CODES[0], "AN");
        assert_eq!(STATE_CODES[36], "WB");

        for state in State::ALL {
            assert_eq!(State::from_code(state.code()), Some(*state));
        }
    }

    #[test]
    fn unknown_state_falls_back_to_code() {
        assert_eq!(state_name("MH"), "Maharashtra");
        assert_eq!(state_name("ZZ"), "ZZ");
        assert_eq!(state_name(""), "");
    }

    #[test]
    fn state_field() {
        assert_eq!(State::from_field("KL"), Ok(State::Kerala));
        assert_eq!(
            State::from_field("ZZ"),
            Err(Error::InvalidVariant {
                field: Field::State,
                value: "ZZ".to_string()
            })
        );
        assert!(matches!(
            State::from_field("M"),
            Err(Error::InvalidFieldLength { actual: 1, .. })
        ));
    }
}
