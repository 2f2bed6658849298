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

//! WebAssembly bindings of the regimental number parser.
//!
//! Records cross the boundary as plain JavaScript objects with camelCase
//! fields, e.g. `validateInput("MH2023SDA014262")` returns
//! `{ isValid: true, error: "", suggestion: "MH2023SDA014262 (...)" }`.

use wasm_bindgen::prelude::*;

mod logger;
mod regimental;

pub use logger::set_log_level;
pub use regimental::*;

/// Installs the panic hook and the console logger.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init();
}
