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

//! Verification records of cadets.
//!
//! A valid regimental number yields a [`VerificationResult`] that is attached
//! to the cadet's registration. The registration then awaits an admin review
//! tracked by [`VerificationStatus`].

use std::fmt;

use log::debug;

use crate::fields::{division_name, state_name, wing_name};
use crate::{parse, IdentityCode};

/// Decoded regimental number of a verified cadet.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VerificationResult {
    pub regimental_number: String,
    pub is_verified: bool,
    pub state_code: String,
    pub year: String,
    pub division: String,
    pub wing: String,
    pub serial_number: String,
    pub state_name: String,
    pub division_name: String,
    pub wing_name: String,
}

impl VerificationResult {
    /// Creates the result of a parsed code.
    ///
    /// Returns `None` if the code is not valid.
    pub fn from_code(code: &IdentityCode) -> Option<Self> {
        if !code.is_valid {
            return None;
        }

        Some(Self {
            regimental_number: code.code(),
            is_verified: true,
            state_code: code.state_code.clone(),
            year: code.year.clone(),
            division: code.division.clone(),
            wing: code.wing.clone(),
            serial_number: code.serial_number.clone(),
            state_name: state_name(&code.state_code).to_string(),
            division_name: division_name(&code.division).to_string(),
            wing_name: wing_name(&code.wing).to_string(),
        })
    }
}

/// Parses and decodes a regimental number.
///
/// ```
/// let result = regno::verify("mh 2023 sda 014262").expect("number should be valid");
///
/// assert_eq!(result.regimental_number, "MH2023SDA014262");
/// assert_eq!(result.state_name, "Maharashtra");
/// ```
pub fn verify(raw: &str) -> Option<VerificationResult> {
    let result = VerificationResult::from_code(&parse(raw));

    if let Some(result) = &result {
        debug!(
            "verified {} ({}, {}, {})",
            result.regimental_number, result.state_name, result.division_name, result.wing_name
        );
    }

    result
}

/// Review state of a cadet's registration.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VerificationStatus {
    /// Registered but not yet reviewed by an admin.
    #[default]
    Pending,
    /// Approved by an admin.
    Verified,
    /// Turned down by an admin; the cadet may not log in.
    Rejected,
}

impl VerificationStatus {
    /// Returns the status after an admin review.
    ///
    /// A review may overrule an earlier one.
    pub fn review(self, approved: bool) -> Self {
        let status = if approved {
            Self::Verified
        } else {
            Self::Rejected
        };
        debug!("verification reviewed: {self} -> {status}");
        status
    }

    /// Whether the cadet has been verified.
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }

    /// Whether a cadet with this status may log in.
    ///
    /// Pending cadets may log in while they await the review.
    pub fn allows_login(&self) -> bool {
        !matches!(self, Self::Rejected)
    }

    /// Message shown to the cadet.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Pending => "Verification pending admin approval.",
            Self::Verified => "Cadet verified successfully!",
            Self::Rejected => "Verification rejected. Please contact admin.",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_valid_number() {
        let result = verify("mh 2023 sda 014262").expect("number should be valid");

        assert_eq!(
            result,
            VerificationResult {
                regimental_number: "MH2023SDA014262".to_string(),
                is_verified: true,
                state_code: "MH".to_string(),
                year: "2023".to_string(),
                division: "SD".to_string(),
                wing: "A".to_string(),
                serial_number: "014262".to_string(),
                state_name: "Maharashtra".to_string(),
                division_name: "Senior Division (Male)".to_string(),
                wing_name: "Army Wing".to_string(),
            }
        );
    }

    #[test]
    fn invalid_number_is_not_verified() {
        assert_eq!(verify("ZZ2023SDA014262"), None);
        assert_eq!(verify(""), None);
        assert_eq!(VerificationResult::from_code(&IdentityCode::default()), None);
    }

    #[test]
    fn review_status() {
        let status = VerificationStatus::default();
        assert_eq!(status, VerificationStatus::Pending);
        assert!(status.allows_login());
        assert!(!status.is_verified());

        let rejected = status.review(false);
        assert_eq!(rejected, VerificationStatus::Rejected);
        assert!(!rejected.allows_login());
        assert_eq!(
            rejected.message(),
            "Verification rejected. Please contact admin."
        );

        let verified = rejected.review(true);
        assert!(verified.is_verified());
        assert_eq!(verified.message(), "Cadet verified successfully!");
        assert_eq!(verified.to_string(), "verified");
    }
}
