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

//! The fields of a regimental number and their code tables.

use std::fmt;

mod division;
mod serial;
mod state;
mod wing;
mod year;

pub use division::{division_name, Division};
pub use serial::Serial;
pub use state::{state_name, State, STATE_CODES};
pub use wing::{wing_name, Wing, AIR_FORCE_SENTINEL};
pub use year::{full_year, Year};

/// A field of a regimental number in the order it is written.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Field {
    State,
    Year,
    Division,
    Wing,
    Serial,
}

impl Field {
    /// Describes the values a field accepts.
    pub(crate) fn expected(&self) -> &'static str {
        match self {
            Self::State => "a state code such as MH or WB",
            Self::Year => "a year from 2000 to 2030",
            Self::Division => "one of JD, JW, SD or SW",
            Self::Wing => "one of A, N or AF",
            Self::Serial => "letters A-Z or digits 0-9",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::State => "state code",
            Self::Year => "year",
            Self::Division => "division",
            Self::Wing => "wing",
            Self::Serial => "serial number",
        })
    }
}
