// ABOUTME: OIDC userinfo raw document and its normalization
// ABOUTME: Flattens namespaced claims into the stable AuthSchProfile shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kir-Dev

use super::{
    split_list, AuthSchProfile, BmeUnitScope, Entrant, GroupMembership, LinkedAccounts,
    MembershipStatus, RawEntrant,
};
use serde::Deserialize;

/// Raw document returned by the OIDC userinfo endpoint.
///
/// Provider-specific claims are namespaced (`bme.hu:`, `pek.sch.bme.hu:`,
/// `directory.sch.bme.hu:`) and versioned with a `/v1` suffix. Everything
/// is scope-gated and therefore optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOidcProfile {
    /// Subject identifier
    pub sub: Option<String>,
    /// Full display name
    pub name: Option<String>,
    /// Family name
    pub family_name: Option<String>,
    /// Given name
    pub given_name: Option<String>,
    /// Birth date
    pub birthdate: Option<String>,
    /// E-mail address
    pub email: Option<String>,
    /// E-mail verification flag
    pub email_verified: Option<bool>,
    /// Phone number
    pub phone_number: Option<String>,
    /// Phone number verification flag
    pub phone_number_verified: Option<bool>,
    /// Structured address claim
    pub address: Option<RawOidcAddress>,
    /// Provider-assigned roles
    pub roles: Vec<String>,
    /// BME directory identifier
    #[serde(rename = "bme.hu:eduPersonPrincipalName")]
    pub edu_person_principal_name: Option<String>,
    /// Neptun code
    #[serde(rename = "bme.hu:niifPersonOrgID")]
    pub niif_person_org_id: Option<String>,
    /// Attended BME course codes, semicolon-joined
    #[serde(rename = "bme.hu:niifEduPersonAttendedCourse/v1")]
    pub attended_courses: Option<String>,
    /// BME unit status flags, space-joined
    #[serde(rename = "meta.bme.hu:unitScope")]
    pub unit_scope: Option<String>,
    /// Schönherz account name
    #[serde(rename = "directory.sch.bme.hu:sAMAccountName")]
    pub sch_account_name: Option<String>,
    /// Directory group names
    #[serde(rename = "directory.sch.bme.hu:groups/v1")]
    pub directory_groups: Vec<String>,
    /// PéK user name
    #[serde(rename = "pek.sch.bme.hu:uid")]
    pub pek_uid: Option<String>,
    /// Groups the user leads
    #[serde(rename = "pek.sch.bme.hu:executiveAt/v1")]
    pub executive_at: Vec<RawPekMembership>,
    /// Active group memberships
    #[serde(rename = "pek.sch.bme.hu:activeMemberships/v1")]
    pub active_memberships: Vec<RawPekMembership>,
    /// Alumni group memberships
    #[serde(rename = "pek.sch.bme.hu:alumniMemberships/v1")]
    pub alumni_memberships: Vec<RawPekMembership>,
    /// PéK entrant records
    #[serde(rename = "pek.sch.bme.hu:entrants/v1")]
    pub entrants: Vec<RawEntrant>,
}

/// OIDC address claim.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOidcAddress {
    /// Formatted postal address
    pub formatted: Option<String>,
}

/// PéK membership sub-record of the userinfo document.
///
/// The same shape backs the executive, active and alumni claims; which
/// claim a record arrived under decides the membership status.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPekMembership {
    /// PéK group identifier
    pub id: u32,
    /// Group name
    pub name: String,
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

impl RawPekMembership {
    fn into_membership(self, status: MembershipStatus) -> GroupMembership {
        GroupMembership {
            pek_group_id: self.id,
            group_name: self.name,
            status,
            posts: self.title,
            start: self.start,
            end: self.end,
        }
    }
}

impl From<RawOidcProfile> for AuthSchProfile {
    fn from(raw: RawOidcProfile) -> Self {
        let mut group_memberships = Vec::with_capacity(
            raw.executive_at.len() + raw.active_memberships.len() + raw.alumni_memberships.len(),
        );
        group_memberships.extend(
            raw.executive_at
                .into_iter()
                .map(|m| m.into_membership(MembershipStatus::Leader)),
        );
        group_memberships.extend(
            raw.active_memberships
                .into_iter()
                .map(|m| m.into_membership(MembershipStatus::Member)),
        );
        group_memberships.extend(
            raw.alumni_memberships
                .into_iter()
                .map(|m| m.into_membership(MembershipStatus::Alumni)),
        );

        Self {
            auth_sch_id: raw.sub.unwrap_or_default(),
            display_name: raw.name,
            last_name: raw.family_name,
            first_name: raw.given_name,
            birthdate: raw.birthdate,
            email: raw.email,
            email_verified: raw.email_verified,
            linked_accounts: LinkedAccounts {
                bme: raw.edu_person_principal_name,
                schacc: raw.sch_account_name,
                pek_username: raw.pek_uid,
            },
            group_memberships,
            entrants: raw.entrants.into_iter().map(Entrant::from).collect(),
            bme_status: raw
                .unit_scope
                .as_deref()
                .map(|joined| {
                    split_list(joined, ' ')
                        .into_iter()
                        .map(BmeUnitScope::from)
                        .collect()
                })
                .unwrap_or_default(),
            directory_groups: raw.directory_groups,
            roles: raw.roles,
            address: raw.address.and_then(|address| address.formatted),
            attended_course_codes: raw
                .attended_courses
                .as_deref()
                .map(|joined| split_list(joined, ';'))
                .unwrap_or_default(),
            mobile: raw.phone_number,
            mobile_verified: raw.phone_number_verified,
            neptun: raw.niif_person_org_id,
        }
    }
}
