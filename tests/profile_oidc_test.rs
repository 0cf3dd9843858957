// ABOUTME: Normalization tests for the OIDC userinfo schema
// ABOUTME: Covers namespaced claim flattening, membership merging and absent fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kir-Dev
#![allow(missing_docs)]

use authsch::{AuthSchProfile, BmeUnitScope, EntrantType, MembershipStatus, RawOidcProfile};

fn normalize(raw_json: &str) -> AuthSchProfile {
    let raw: RawOidcProfile = serde_json::from_str(raw_json).expect("raw userinfo parses");
    AuthSchProfile::from(raw)
}

#[test]
fn normalizes_namespaced_claims() {
    let profile = normalize(
        r#"{
            "sub": "u1",
            "name": "Teszt Elek",
            "family_name": "Teszt",
            "given_name": "Elek",
            "birthdate": "1999-08-20",
            "email": "elek@sch.bme.hu",
            "email_verified": true,
            "phone_number": "+36301234567",
            "phone_number_verified": false,
            "address": {"formatted": "1117 Budapest, Irinyi József u. 42."},
            "roles": ["student"],
            "bme.hu:eduPersonPrincipalName": "elek@bme.hu",
            "bme.hu:niifPersonOrgID": "NEPTUN",
            "bme.hu:niifEduPersonAttendedCourse/v1": "BMETE90AX00;BMETE90AX01",
            "meta.bme.hu:unitScope": "BME BME_VIK BME_VIK_ACTIVE",
            "directory.sch.bme.hu:sAMAccountName": "teszte",
            "directory.sch.bme.hu:groups/v1": ["kir-dev", "dezsoe"],
            "pek.sch.bme.hu:uid": "teszt.elek"
        }"#,
    );

    assert_eq!(profile.auth_sch_id, "u1");
    assert_eq!(profile.display_name.as_deref(), Some("Teszt Elek"));
    assert_eq!(profile.last_name.as_deref(), Some("Teszt"));
    assert_eq!(profile.first_name.as_deref(), Some("Elek"));
    assert_eq!(profile.birthdate.as_deref(), Some("1999-08-20"));
    assert_eq!(profile.email_verified, Some(true));
    assert_eq!(profile.mobile.as_deref(), Some("+36301234567"));
    assert_eq!(profile.mobile_verified, Some(false));
    assert_eq!(
        profile.address.as_deref(),
        Some("1117 Budapest, Irinyi József u. 42.")
    );
    assert_eq!(profile.roles, vec!["student"]);
    assert_eq!(profile.linked_accounts.bme.as_deref(), Some("elek@bme.hu"));
    assert_eq!(profile.linked_accounts.schacc.as_deref(), Some("teszte"));
    assert_eq!(
        profile.linked_accounts.pek_username.as_deref(),
        Some("teszt.elek")
    );
    assert_eq!(profile.neptun.as_deref(), Some("NEPTUN"));
    assert_eq!(profile.directory_groups, vec!["kir-dev", "dezsoe"]);
    assert_eq!(
        profile.attended_course_codes,
        vec!["BMETE90AX00", "BMETE90AX01"]
    );
    assert_eq!(
        profile.bme_status,
        vec![
            BmeUnitScope::Bme,
            BmeUnitScope::BmeVik,
            BmeUnitScope::BmeVikActive
        ]
    );
}

#[test]
fn merges_pek_membership_claims() {
    let profile = normalize(
        r#"{
            "sub": "u1",
            "pek.sch.bme.hu:executiveAt/v1": [
                {"id": 18, "name": "Kir-Dev"}
            ],
            "pek.sch.bme.hu:activeMemberships/v1": [
                {"id": 21, "name": "Schönherz", "title": ["fejlesztő"], "start": "2022-09-01"}
            ],
            "pek.sch.bme.hu:alumniMemberships/v1": [
                {"id": 7, "name": "G", "start": "2016-09-01", "end": "2019-06-30"}
            ],
            "pek.sch.bme.hu:entrants/v1": [
                {"groupId": 21, "groupName": "Schönherz", "entrantType": "AB"}
            ]
        }"#,
    );

    assert_eq!(profile.group_memberships.len(), 3);

    let executive = &profile.group_memberships[0];
    assert_eq!(executive.pek_group_id, 18);
    assert_eq!(executive.status, MembershipStatus::Leader);
    assert!(executive.posts.is_empty());

    let active = &profile.group_memberships[1];
    assert_eq!(active.pek_group_id, 21);
    assert_eq!(active.status, MembershipStatus::Member);
    assert_eq!(active.posts, vec!["fejlesztő"]);
    assert_eq!(active.start.as_deref(), Some("2022-09-01"));

    let alumni = &profile.group_memberships[2];
    assert_eq!(alumni.pek_group_id, 7);
    assert_eq!(alumni.status, MembershipStatus::Alumni);
    assert_eq!(alumni.start.as_deref(), Some("2016-09-01"));
    assert_eq!(alumni.end.as_deref(), Some("2019-06-30"));

    assert_eq!(profile.entrants.len(), 1);
    assert_eq!(profile.entrants[0].entrant_type, EntrantType::Ab);
}

#[test]
fn absent_claims_normalize_to_empty() {
    let profile = normalize("{}");

    assert_eq!(profile.auth_sch_id, "");
    assert_eq!(profile.display_name, None);
    assert_eq!(profile.email_verified, None);
    assert!(profile.group_memberships.is_empty());
    assert!(profile.directory_groups.is_empty());
    assert!(profile.roles.is_empty());
    assert!(profile.bme_status.is_empty());
    assert!(profile.attended_course_codes.is_empty());
    assert_eq!(profile.address, None);
}

#[test]
fn address_without_formatted_field_is_absent() {
    let profile = normalize(r#"{"address": {}}"#);
    assert_eq!(profile.address, None);
}

#[test]
fn unit_scope_tokens_are_split_on_spaces() {
    let profile = normalize(r#"{"meta.bme.hu:unitScope": "BME  BME_GTK"}"#);
    assert_eq!(
        profile.bme_status,
        vec![BmeUnitScope::Bme, BmeUnitScope::Other("BME_GTK".into())]
    );
}
