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

//! NCC regimental number parser.
//!
//! A cadet of the National Cadet Corps proves enrollment with a regimental
//! number like `MH2023SDA014262`. It is made of fixed-width [fields]:
//!
//! | Field    | Width | Example | Values                         |
//! |----------|-------|---------|--------------------------------|
//! | State    | 2     | `MH`    | see [`State`]                  |
//! | Year     | 4     | `2023`  | 2000 to 2030                   |
//! | Division | 2     | `SD`    | `JD`, `JW`, `SD`, `SW`         |
//! | Wing     | 1-2   | `A`     | `A`, `N`, `AF`                 |
//! | Serial   | rest  | `014262`| `A-Z` and `0-9`                |
//!
//! # Examples
//!
//! Interactive forms validate the input on every keystroke and show the
//! decoded number once it is valid:
//!
//! ```
//! let validation = regno::validate_input("MH2023SDA014262");
//!
//! assert!(validation.is_valid);
//! assert_eq!(
//!     validation.suggestion,
//!     "MH2023SDA014262 (Maharashtra, Senior Division (Male), Army Wing, 2023)"
//! );
//! ```
//!
//! Callers that want to know why a number is invalid parse it into a
//! [`RegimentalNumber`]:
//!
//! ```
//! use regno::{Field, RegimentalNumber};
//!
//! let err = "MH2031SDA014262".parse::<RegimentalNumber>().unwrap_err();
//! assert_eq!(err.field(), Some(Field::Year));
//! ```
//!
//! [fields]: crate::fields

#[macro_use]
mod macros;

mod code;
mod error;
mod field;
mod record;
mod validate;

pub(crate) use field::{parse_digits, Fields};

pub mod fields;
pub mod verification;

pub use code::{format, parse, IdentityCode};
pub use error::Error;
pub use field::FixedField;
pub use fields::{
    division_name, full_year, state_name, wing_name, Division, Field, Serial, State, Wing, Year,
    STATE_CODES,
};
pub use record::{normalize, RegimentalNumber, MIN_LENGTH};
pub use validate::{validate_input, InputValidation};
pub use verification::{verify, VerificationResult, VerificationStatus};
