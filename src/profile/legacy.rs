// ABOUTME: Legacy profile API raw document and its normalization
// ABOUTME: Maps the flat api/profile schema into the stable AuthSchProfile shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kir-Dev

use super::{
    split_list, AuthSchProfile, BmeUnitScope, Entrant, GroupMembership, LinkedAccounts,
    MembershipStatus, RawEntrant,
};
use serde::Deserialize;

/// Raw document returned by the legacy profile API.
///
/// Every field is scope-gated: the provider omits what the granted scopes
/// do not cover, so everything is optional here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLegacyProfile {
    /// Stable internal identifier
    pub internal_id: Option<String>,
    /// Full display name
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    /// Family name
    pub sn: Option<String>,
    /// Given name
    #[serde(rename = "givenName")]
    pub given_name: Option<String>,
    /// E-mail address
    pub mail: Option<String>,
    /// Neptun code
    #[serde(rename = "niifPersonOrgID")]
    pub niif_person_org_id: Option<String>,
    /// Neptun code under its alternate key
    pub neptun: Option<String>,
    /// Linked account identifiers
    #[serde(rename = "linkedAccounts")]
    pub linked_accounts: Option<RawLinkedAccounts>,
    /// PéK group memberships
    #[serde(rename = "eduPersonEntitlement")]
    pub edu_person_entitlement: Vec<RawGroupMembership>,
    /// PéK entrant records
    pub entrants: Vec<RawEntrant>,
    /// BME unit status flags
    #[serde(rename = "bmeunitscope")]
    pub bme_unit_scope: Vec<BmeUnitScope>,
    /// Permanent address
    #[serde(rename = "permanentaddress")]
    pub permanent_address: Option<String>,
    /// Attended BME course codes, semicolon-joined
    #[serde(rename = "niifEduPersonAttendedCourse")]
    pub attended_courses: Option<String>,
    /// Mobile phone number
    pub mobile: Option<String>,
}

/// Linked accounts as the legacy API reports them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLinkedAccounts {
    /// BME directory identifier
    pub bme: Option<String>,
    /// Schönherz account name
    pub schacc: Option<String>,
    /// PéK numeric identifier, unused by the normalized shape
    pub vir: Option<u32>,
    /// PéK user name
    #[serde(rename = "virUid")]
    pub vir_uid: Option<String>,
}

/// Group membership sub-record of the legacy API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGroupMembership {
    /// PéK group identifier
    pub id: u32,
    /// Group name
    pub name: String,
    /// Membership status
    pub status: MembershipStatus,
    /// Posts held in the group
    #[serde(default)]
    pub title: Vec<String>,
    /// Membership start date
    #[serde(default)]
    pub start: Option<String>,
    /// Membership end date
    #[serde(default)]
    pub end: Option<String>,
}

impl From<RawGroupMembership> for GroupMembership {
    fn from(raw: RawGroupMembership) -> Self {
        Self {
            pek_group_id: raw.id,
            group_name: raw.name,
            status: raw.status,
            posts: raw.title,
            start: raw.start,
            end: raw.end,
        }
    }
}

impl From<RawLegacyProfile> for AuthSchProfile {
    fn from(raw: RawLegacyProfile) -> Self {
        let linked = raw.linked_accounts.unwrap_or_default();
        Self {
            auth_sch_id: raw.internal_id.unwrap_or_default(),
            display_name: raw.display_name,
            last_name: raw.sn,
            first_name: raw.given_name,
            birthdate: None,
            email: raw.mail,
            email_verified: None,
            linked_accounts: LinkedAccounts {
                bme: linked.bme,
                schacc: linked.schacc,
                pek_username: linked.vir_uid,
            },
            group_memberships: raw
                .edu_person_entitlement
                .into_iter()
                .map(GroupMembership::from)
                .collect(),
            entrants: raw.entrants.into_iter().map(Entrant::from).collect(),
            bme_status: raw.bme_unit_scope,
            directory_groups: Vec::new(),
            roles: Vec::new(),
            address: raw.permanent_address,
            attended_course_codes: raw
                .attended_courses
                .as_deref()
                .map(|joined| split_list(joined, ';'))
                .unwrap_or_default(),
            mobile: raw.mobile,
            mobile_verified: None,
            neptun: raw.niif_person_org_id.or(raw.neptun),
        }
    }
}
