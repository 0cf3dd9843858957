// ABOUTME: Stable normalized profile shape produced from both provider schema variants
// ABOUTME: Value objects for identity fields, linked accounts, memberships and status flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kir-Dev

//! Profile model and normalizers
//!
//! The provider exposes two incompatible raw profile schemas: the legacy
//! profile API and the current OIDC userinfo endpoint. Each variant has its
//! own raw document type and a pure normalization into the one stable
//! [`AuthSchProfile`] shape. The variant is selected by configuration,
//! never auto-detected.
//!
//! Normalization trusts the provider: fields are mapped by structural
//! presence only, absent optional fields become absent or empty output
//! fields, and unknown enum values are preserved verbatim instead of
//! failing.

pub mod legacy;
pub mod oidc;

pub use legacy::RawLegacyProfile;
pub use oidc::RawOidcProfile;

use serde::{Deserialize, Serialize};

/// Stable internal profile record.
///
/// Immutable value object. Only ever constructed from a raw profile that
/// was fetched with an access token obtained through a successful code
/// exchange. Fields not covered by the granted scopes (or by the selected
/// schema variant) are absent or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSchProfile {
    /// Provider-wide stable identifier of the user
    pub auth_sch_id: String,
    /// Full display name
    pub display_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Given name
    pub first_name: Option<String>,
    /// Birth date as reported by the provider
    pub birthdate: Option<String>,
    /// E-mail address
    pub email: Option<String>,
    /// Whether the provider verified the e-mail address
    pub email_verified: Option<bool>,
    /// Linked federated account identifiers
    pub linked_accounts: LinkedAccounts,
    /// PéK group memberships with temporal validity
    pub group_memberships: Vec<GroupMembership>,
    /// PéK entrant records
    pub entrants: Vec<Entrant>,
    /// BME unit status flags
    pub bme_status: Vec<BmeUnitScope>,
    /// Directory group names (OIDC variant only)
    pub directory_groups: Vec<String>,
    /// Provider-assigned roles (OIDC variant only)
    pub roles: Vec<String>,
    /// Permanent address
    pub address: Option<String>,
    /// Attended BME course codes
    pub attended_course_codes: Vec<String>,
    /// Mobile phone number
    pub mobile: Option<String>,
    /// Whether the provider verified the phone number
    pub mobile_verified: Option<bool>,
    /// Neptun code
    pub neptun: Option<String>,
}

/// Identifiers of accounts linked to the AuthSCH account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedAccounts {
    /// BME directory identifier
    pub bme: Option<String>,
    /// Schönherz account name
    pub schacc: Option<String>,
    /// PéK user name
    pub pek_username: Option<String>,
}

/// One PéK group membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembership {
    /// PéK group identifier
    pub pek_group_id: u32,
    /// Group name
    pub group_name: String,
    /// Membership status within the group
    pub status: MembershipStatus,
    /// Posts (titles) held in the group
    pub posts: Vec<String>,
    /// Membership start date
    pub start: Option<String>,
    /// Membership end date, absent while the membership is active
    pub end: Option<String>,
}

/// Membership status wire values used by PéK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MembershipStatus {
    /// Group leader (`körvezető`)
    Leader,
    /// Active member (`tag`)
    Member,
    /// Alumni member (`öregtag`)
    Alumni,
    /// Value this crate does not know about, preserved verbatim
    Other(String),
}

impl MembershipStatus {
    /// Wire name of the status
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Leader => "körvezető",
            Self::Member => "tag",
            Self::Alumni => "öregtag",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for MembershipStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "körvezető" => Self::Leader,
            "tag" => Self::Member,
            "öregtag" => Self::Alumni,
            _ => Self::Other(value),
        }
    }
}

impl From<MembershipStatus> for String {
    fn from(status: MembershipStatus) -> Self {
        status.as_str().to_owned()
    }
}

/// One PéK entrant record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrant {
    /// PéK group identifier
    pub pek_group_id: u32,
    /// Group name
    pub group_name: String,
    /// Entrant award type
    pub entrant_type: EntrantType,
}

/// Entrant award types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntrantType {
    /// `AB` entrant
    Ab,
    /// `KB` entrant
    Kb,
    /// Value this crate does not know about, preserved verbatim
    Other(String),
}

impl EntrantType {
    /// Wire name of the entrant type
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ab => "AB",
            Self::Kb => "KB",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for EntrantType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "AB" => Self::Ab,
            "KB" => Self::Kb,
            _ => Self::Other(value),
        }
    }
}

impl From<EntrantType> for String {
    fn from(entrant_type: EntrantType) -> Self {
        entrant_type.as_str().to_owned()
    }
}

/// BME unit status flags released under the `bmeunitscope` scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[allow(missing_docs)]
pub enum BmeUnitScope {
    Bme,
    BmeNewbie,
    BmeVik,
    BmeVikActive,
    BmeVikNewbie,
    BmeVbk,
    BmeVbkActive,
    BmeVbkNewbie,
    /// Value this crate does not know about, preserved verbatim
    Other(String),
}

impl BmeUnitScope {
    /// Wire name of the flag
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bme => "BME",
            Self::BmeNewbie => "BME_NEWBIE",
            Self::BmeVik => "BME_VIK",
            Self::BmeVikActive => "BME_VIK_ACTIVE",
            Self::BmeVikNewbie => "BME_VIK_NEWBIE",
            Self::BmeVbk => "BME_VBK",
            Self::BmeVbkActive => "BME_VBK_ACTIVE",
            Self::BmeVbkNewbie => "BME_VBK_NEWBIE",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for BmeUnitScope {
    fn from(value: String) -> Self {
        match value.as_str() {
            "BME" => Self::Bme,
            "BME_NEWBIE" => Self::BmeNewbie,
            "BME_VIK" => Self::BmeVik,
            "BME_VIK_ACTIVE" => Self::BmeVikActive,
            "BME_VIK_NEWBIE" => Self::BmeVikNewbie,
            "BME_VBK" => Self::BmeVbk,
            "BME_VBK_ACTIVE" => Self::BmeVbkActive,
            "BME_VBK_NEWBIE" => Self::BmeVbkNewbie,
            _ => Self::Other(value),
        }
    }
}

impl From<BmeUnitScope> for String {
    fn from(scope: BmeUnitScope) -> Self {
        scope.as_str().to_owned()
    }
}

/// Raw entrant sub-record, shared by both schema variants.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntrant {
    /// PéK group identifier
    #[serde(rename = "groupId")]
    pub group_id: u32,
    /// Group name
    #[serde(rename = "groupName")]
    pub group_name: String,
    /// Entrant award type
    #[serde(rename = "entrantType")]
    pub entrant_type: EntrantType,
}

impl From<RawEntrant> for Entrant {
    fn from(raw: RawEntrant) -> Self {
        Self {
            pek_group_id: raw.group_id,
            group_name: raw.group_name,
            entrant_type: raw.entrant_type,
        }
    }
}

/// Split a delimiter-joined scalar field into a sequence, dropping empty
/// segments.
pub(crate) fn split_list(raw: &str, delimiter: char) -> Vec<String> {
    raw.split(delimiter)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}
