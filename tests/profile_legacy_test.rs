// ABOUTME: Normalization tests for the legacy profile API schema
// ABOUTME: Covers full documents, absent optional fields and unknown enum values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kir-Dev
#![allow(missing_docs)]

use authsch::{
    AuthSchProfile, BmeUnitScope, EntrantType, MembershipStatus, RawLegacyProfile,
};

fn normalize(raw_json: &str) -> AuthSchProfile {
    let raw: RawLegacyProfile = serde_json::from_str(raw_json).expect("raw profile parses");
    AuthSchProfile::from(raw)
}

#[test]
fn normalizes_a_typical_profile() {
    let profile = normalize(
        r#"{
            "internal_id": "u1",
            "displayName": "A B",
            "sn": "B",
            "givenName": "A",
            "mail": "a@b.hu",
            "eduPersonEntitlement": [
                {"id": 7, "name": "G", "status": "tag", "title": ["tag"], "start": "2020-01-01"}
            ],
            "bmeunitscope": ["BME"],
            "niifEduPersonAttendedCourse": "BMETE90AX00;BMETE90AX01",
            "mobile": "+361234"
        }"#,
    );

    assert_eq!(profile.auth_sch_id, "u1");
    assert_eq!(profile.display_name.as_deref(), Some("A B"));
    assert_eq!(profile.last_name.as_deref(), Some("B"));
    assert_eq!(profile.first_name.as_deref(), Some("A"));
    assert_eq!(profile.email.as_deref(), Some("a@b.hu"));
    assert_eq!(profile.mobile.as_deref(), Some("+361234"));
    assert_eq!(profile.bme_status, vec![BmeUnitScope::Bme]);
    assert_eq!(
        profile.attended_course_codes,
        vec!["BMETE90AX00", "BMETE90AX01"]
    );

    assert_eq!(profile.group_memberships.len(), 1);
    let membership = &profile.group_memberships[0];
    assert_eq!(membership.pek_group_id, 7);
    assert_eq!(membership.group_name, "G");
    assert_eq!(membership.status, MembershipStatus::Member);
    assert_eq!(membership.posts, vec!["tag"]);
    assert_eq!(membership.start.as_deref(), Some("2020-01-01"));
    assert_eq!(membership.end, None);
}

#[test]
fn normalizes_every_optional_field() {
    let profile = normalize(
        r#"{
            "internal_id": "u2",
            "displayName": "Teszt Elek",
            "sn": "Teszt",
            "givenName": "Elek",
            "mail": "elek@sch.bme.hu",
            "niifPersonOrgID": "NEPTUN",
            "linkedAccounts": {
                "bme": "elek@bme.hu",
                "schacc": "teszte",
                "vir": 42,
                "virUid": "teszt.elek"
            },
            "eduPersonEntitlement": [
                {
                    "id": 18,
                    "name": "Kir-Dev",
                    "status": "körvezető",
                    "title": ["projektvezető", "fejlesztő"],
                    "start": "2019-09-01",
                    "end": "2021-06-30"
                }
            ],
            "entrants": [
                {"groupId": 18, "groupName": "Kir-Dev", "entrantType": "KB"}
            ],
            "bmeunitscope": ["BME", "BME_VIK", "BME_VIK_ACTIVE"],
            "permanentaddress": "1117 Budapest, Irinyi József u. 42.",
            "niifEduPersonAttendedCourse": "BMEVIAUAC00",
            "mobile": "+36301234567"
        }"#,
    );

    assert_eq!(profile.auth_sch_id, "u2");
    assert_eq!(profile.neptun.as_deref(), Some("NEPTUN"));
    assert_eq!(profile.linked_accounts.bme.as_deref(), Some("elek@bme.hu"));
    assert_eq!(profile.linked_accounts.schacc.as_deref(), Some("teszte"));
    assert_eq!(
        profile.linked_accounts.pek_username.as_deref(),
        Some("teszt.elek")
    );

    let membership = &profile.group_memberships[0];
    assert_eq!(membership.status, MembershipStatus::Leader);
    assert_eq!(membership.posts, vec!["projektvezető", "fejlesztő"]);
    assert_eq!(membership.end.as_deref(), Some("2021-06-30"));

    assert_eq!(profile.entrants.len(), 1);
    assert_eq!(profile.entrants[0].pek_group_id, 18);
    assert_eq!(profile.entrants[0].group_name, "Kir-Dev");
    assert_eq!(profile.entrants[0].entrant_type, EntrantType::Kb);

    assert_eq!(
        profile.bme_status,
        vec![
            BmeUnitScope::Bme,
            BmeUnitScope::BmeVik,
            BmeUnitScope::BmeVikActive
        ]
    );
    assert_eq!(
        profile.address.as_deref(),
        Some("1117 Budapest, Irinyi József u. 42.")
    );
    assert_eq!(profile.attended_course_codes, vec!["BMEVIAUAC00"]);
}

#[test]
fn absent_fields_normalize_to_empty() {
    let profile = normalize("{}");

    assert_eq!(profile.auth_sch_id, "");
    assert_eq!(profile.display_name, None);
    assert_eq!(profile.email, None);
    assert_eq!(profile.linked_accounts.bme, None);
    assert!(profile.group_memberships.is_empty());
    assert!(profile.entrants.is_empty());
    assert!(profile.bme_status.is_empty());
    assert!(profile.attended_course_codes.is_empty());
    assert_eq!(profile.address, None);
    assert_eq!(profile.mobile, None);
    assert_eq!(profile.neptun, None);
}

#[test]
fn neptun_falls_back_to_alternate_key() {
    let profile = normalize(r#"{"neptun": "ABC123"}"#);
    assert_eq!(profile.neptun.as_deref(), Some("ABC123"));
}

#[test]
fn unknown_enum_values_are_preserved() {
    let profile = normalize(
        r#"{
            "eduPersonEntitlement": [
                {"id": 1, "name": "G", "status": "mentor", "title": [], "start": "2024-01-01"}
            ],
            "bmeunitscope": ["BME_GTK"]
        }"#,
    );

    assert_eq!(
        profile.group_memberships[0].status,
        MembershipStatus::Other("mentor".into())
    );
    assert_eq!(
        profile.bme_status,
        vec![BmeUnitScope::Other("BME_GTK".into())]
    );
}

#[test]
fn empty_course_segments_are_dropped() {
    let profile = normalize(r#"{"niifEduPersonAttendedCourse": "BMETE90AX00;;BMETE90AX01;"}"#);
    assert_eq!(
        profile.attended_course_codes,
        vec!["BMETE90AX00", "BMETE90AX01"]
    );
}
