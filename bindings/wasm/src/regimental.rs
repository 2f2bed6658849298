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

use regno::{IdentityCode, RegimentalNumber};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = validateInput)]
pub fn validate_input(raw: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&regno::validate_input(raw))?)
}

#[wasm_bindgen(js_name = parseRegimentalNumber)]
pub fn parse(raw: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&regno::parse(raw))?)
}

/// Formats a code returned by `parseRegimentalNumber`.
#[wasm_bindgen(js_name = formatRegimentalNumber)]
pub fn format(code: JsValue) -> Result<String, JsValue> {
    let code: IdentityCode = serde_wasm_bindgen::from_value(code)?;
    Ok(regno::format(&code))
}

/// Returns the verification record or `undefined` if the number is invalid.
#[wasm_bindgen]
pub fn verify(raw: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&regno::verify(raw))?)
}

#[wasm_bindgen(js_name = stateName)]
pub fn state_name(code: &str) -> String {
    regno::state_name(code).to_string()
}

#[wasm_bindgen(js_name = divisionName)]
pub fn division_name(code: &str) -> String {
    regno::division_name(code).to_string()
}

#[wasm_bindgen(js_name = wingName)]
pub fn wing_name(code: &str) -> String {
    regno::wing_name(code).to_string()
}

#[wasm_bindgen(js_name = stateCodes)]
pub fn state_codes() -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&regno::STATE_CODES[..])?)
}

#[wasm_bindgen(js_name = RegimentalNumber)]
pub struct JsRegimentalNumber {
    inner: RegimentalNumber,
}

#[wasm_bindgen(js_class = RegimentalNumber)]
impl JsRegimentalNumber {
    /// Parses a regimental number or throws why it is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(raw: &str) -> Result<Self, JsError> {
        let inner = raw.parse::<RegimentalNumber>()?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(getter, js_name = stateCode)]
    pub fn state_code(&self) -> String {
        self.inner.state().code().to_string()
    }

    #[wasm_bindgen(getter, js_name = stateName)]
    pub fn state_name(&self) -> String {
        self.inner.state().name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn year(&self) -> u16 {
        self.inner.year().get()
    }

    #[wasm_bindgen(getter)]
    pub fn division(&self) -> String {
        self.inner.division().code().to_string()
    }

    #[wasm_bindgen(getter, js_name = divisionName)]
    pub fn division_name(&self) -> String {
        self.inner.division().name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn wing(&self) -> String {
        self.inner.wing().code().to_string()
    }

    #[wasm_bindgen(getter, js_name = wingName)]
    pub fn wing_name(&self) -> String {
        self.inner.wing().name().to_string()
    }

    #[wasm_bindgen(getter, js_name = serialNumber)]
    pub fn serial_number(&self) -> String {
        self.inner.serial().to_string()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}

impl From<JsRegimentalNumber> for RegimentalNumber {
    fn from(value: JsRegimentalNumber) -> Self {
        value.inner
    }
}

impl From<RegimentalNumber> for JsRegimentalNumber {
    fn from(value: RegimentalNumber) -> Self {
        Self { inner: value }
    }
}
