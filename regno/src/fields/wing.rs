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

/// The only wing code that is two characters wide.
pub const AIR_FORCE_SENTINEL: &str = "AF";

code_table! {
    /// Branch of service.
    ///
    /// Unlike the other fields the wing has no fixed width: Army and Navy
    /// take one character, the Air Force takes two.
    pub enum Wing(Field::Wing) {
        Army = "A" => "Army Wing",
        Naval = "N" => "Naval Wing",
        AirForce = "AF" => "Air Force Wing",
    }
}

/// Returns the wing's name or `"Unknown Wing"`.
pub fn wing_name(code: &str) -> &'static str {
    Wing::from_code(code).map_or("Unknown Wing", |wing| wing.name())
}
