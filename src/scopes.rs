// ABOUTME: AuthSCH scope identifiers and their wire names
// ABOUTME: Selects which profile fields the provider releases to the client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kir-Dev

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scopes the AuthSCH provider understands.
///
/// Each scope unlocks a set of profile fields. The `openid` scope the
/// provider requires on every request is appended automatically at
/// authorization-URL build time and is not part of this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthSchScope {
    /// Internal identifier of the user
    #[serde(rename = "basic")]
    Basic,
    /// Full display name
    #[serde(rename = "displayName")]
    DisplayName,
    /// Family name
    #[serde(rename = "sn")]
    LastName,
    /// Given name
    #[serde(rename = "givenName")]
    FirstName,
    /// E-mail address
    #[serde(rename = "mail")]
    Email,
    /// Neptun code. Requires a special request: the client must be created by KSZK.
    #[serde(rename = "niifPersonOrgID")]
    Neptun,
    /// Linked BME, schacc and PéK accounts
    #[serde(rename = "linkedAccounts")]
    LinkedAccounts,
    /// PéK group memberships
    #[serde(rename = "eduPersonEntitlement")]
    GroupMemberships,
    /// Mobile phone number
    #[serde(rename = "mobile")]
    Mobile,
    /// Attended course codes
    #[serde(rename = "niifEduPersonAttendedCourse")]
    AttendedCourses,
    /// BME unit status flags
    #[serde(rename = "bmeunitscope")]
    BmeStatus,
    /// Permanent address
    #[serde(rename = "permanentaddress")]
    Address,
    /// PéK entrant records
    #[serde(rename = "entrants")]
    Entrants,
}

impl AuthSchScope {
    /// Wire name sent in the `scope` parameter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::DisplayName => "displayName",
            Self::LastName => "sn",
            Self::FirstName => "givenName",
            Self::Email => "mail",
            Self::Neptun => "niifPersonOrgID",
            Self::LinkedAccounts => "linkedAccounts",
            Self::GroupMemberships => "eduPersonEntitlement",
            Self::Mobile => "mobile",
            Self::AttendedCourses => "niifEduPersonAttendedCourse",
            Self::BmeStatus => "bmeunitscope",
            Self::Address => "permanentaddress",
            Self::Entrants => "entrants",
        }
    }
}

impl fmt::Display for AuthSchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
