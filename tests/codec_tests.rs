// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Format-specific behavior through the public API.
//!
//! Tests cover:
//! - Detection of serialized output, including `.txt` disambiguation
//! - ACE integrity checks and empty container omission
//! - Positional validation of Dynon numbering
//! - ForeFlight encryption
//! - Garmin Pilot live-data items
//! - Legacy JSON input

mod common;

use common::{all_items, simple_file, FixtureBuilder};
use efiscodec::io::formats::foreflight;
use efiscodec::io::formats::{AceCodec, ForeFlightCodec, JsonCodec, TextCodec};
use efiscodec::{
    detect_format, global_registry, AsyncCodec, ChecklistItem, CodecError, Format, GroupCategory,
    SyncCodec,
};

// ============================================================================
// Detection
// ============================================================================

#[tokio::test]
async fn test_detects_serialized_output() {
    let file = simple_file();
    let registry = global_registry();
    for format in [Format::Ace, Format::Json, Format::Dynon, Format::ForeFlight, Format::GarminPilot] {
        let bytes = registry.serialize(&file, format).await.unwrap().into_bytes();
        let name = format!("upload.{}", format.extension());
        assert_eq!(detect_format(&name, Some(&bytes)), Some(format));
    }
}

#[tokio::test]
async fn test_txt_files_are_told_apart_by_content() {
    let file = simple_file();
    let registry = global_registry();

    let grt = registry.serialize(&file, Format::Grt).await.unwrap().into_bytes();
    assert_eq!(detect_format("export.txt", Some(&grt)), Some(Format::Grt));
    let parsed = registry.parse(&grt, "export.txt").await.unwrap();
    assert_eq!(parsed.format, Format::Grt);

    let dynon = registry.serialize(&file, Format::Dynon).await.unwrap().into_bytes();
    assert_eq!(detect_format("export.txt", Some(&dynon)), Some(Format::Dynon));
    let parsed = registry.parse(&dynon, "export.txt").await.unwrap();
    assert_eq!(parsed.format, Format::Dynon);
}

#[test]
fn test_extension_without_content() {
    assert_eq!(detect_format("C172.ACE", None), Some(Format::Ace));
    assert_eq!(detect_format("a/b/list.gplt", None), Some(Format::GarminPilot));
    assert_eq!(detect_format("notes.docx", None), None);
}

// ============================================================================
// ACE
// ============================================================================

#[test]
fn test_ace_rejects_corruption() {
    let bytes = AceCodec.serialize(&simple_file()).unwrap().into_bytes();

    let mut flipped = bytes.clone();
    let middle = flipped.len() / 2;
    flipped[middle] ^= 0x20;
    assert!(matches!(
        AceCodec.parse(&flipped, "c172.ace"),
        Err(CodecError::ChecksumMismatch { .. })
    ));

    let mut bad_magic = bytes.clone();
    bad_magic[0] = 0x00;
    assert!(matches!(
        AceCodec.parse(&bad_magic, "c172.ace"),
        Err(CodecError::MalformedHeader { .. })
    ));

    assert!(matches!(
        AceCodec.parse(&bytes[..4], "c172.ace"),
        Err(CodecError::TruncatedInput { .. })
    ));

    assert!(efiscodec::io::formats::ace::verify_checksum(&bytes).is_ok());
}

#[test]
fn test_ace_omits_empty_containers() {
    let file = FixtureBuilder::new("gaps")
        .checklist("Normal", GroupCategory::Normal, "Empty", vec![])
        .checklist(
            "Normal",
            GroupCategory::Normal,
            "Full",
            vec![ChecklistItem::challenge("Doors")],
        )
        .checklist("Hollow", GroupCategory::Normal, "Nothing", vec![])
        .build();

    let bytes = AceCodec.serialize(&file).unwrap().into_bytes();
    let back = AceCodec.parse(&bytes, "gaps.ace").unwrap();
    assert_eq!(back.groups.len(), 1);
    assert_eq!(back.groups[0].name, "Normal");
    let names: Vec<&str> = back.groups[0]
        .checklists
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Full"]);
}

#[test]
fn test_ace_replaces_characters_outside_latin1() {
    let file = FixtureBuilder::new("intl")
        .checklist(
            "Normal",
            GroupCategory::Normal,
            "Checks",
            vec![ChecklistItem::challenge_response("Température", "OK ✓")],
        )
        .build();
    let bytes = AceCodec.serialize(&file).unwrap().into_bytes();
    let back = AceCodec.parse(&bytes, "intl.ace").unwrap();
    assert_eq!(
        all_items(&back),
        vec![ChecklistItem::challenge_response("Température", "OK ?")]
    );
}

// ============================================================================
// Dynon Positional Validation
// ============================================================================

#[test]
fn test_dynon_checklist_numbers_must_be_sequential() {
    let text = "CHKLST0.TITLE,Normal: Start\nCHKLST0.LINE0,\nCHKLST0.LINE1,Brakes - SET\nCHKLST2.TITLE,Normal: Taxi\n";
    let err = TextCodec::dynon().parse(text.as_bytes(), "x.afd").unwrap_err();
    match err {
        CodecError::PositionalValidationFailure { line, content, .. } => {
            assert_eq!(line, 4);
            assert!(content.contains("CHKLST2"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_dynon_item_numbers_must_be_sequential() {
    let text = "CHKLST0.TITLE,Normal: Start\nCHKLST0.LINE0,\nCHKLST0.LINE2,Brakes - SET\n";
    assert!(matches!(
        TextCodec::dynon().parse(text.as_bytes(), "x.afd"),
        Err(CodecError::PositionalValidationFailure { line: 3, .. })
    ));
}

#[test]
fn test_dynon_tolerates_comments_and_crlf() {
    let text = "# exported\r\n\r\nCHKLST0.TITLE,Normal: Start\r\nCHKLST0.LINE0,\r\nCHKLST0.LINE1,Brakes - SET\r\n";
    let parsed = TextCodec::dynon().parse(text.as_bytes(), "x.afd").unwrap();
    assert_eq!(
        all_items(&parsed),
        vec![ChecklistItem::challenge_response("Brakes", "SET")]
    );
}

// ============================================================================
// ForeFlight
// ============================================================================

#[test]
fn test_foreflight_output_is_encrypted() {
    let file = simple_file();
    let a = ForeFlightCodec.serialize(&file).unwrap().into_bytes();
    let b = ForeFlightCodec.serialize(&file).unwrap().into_bytes();

    assert_ne!(a, b, "each export uses a fresh IV");
    assert!(!String::from_utf8_lossy(&a).contains("Fuel Selector"));
    assert_eq!((a.len() - 16) % 16, 0);

    let plain = foreflight::decrypt(&a).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&plain).unwrap();
    assert_eq!(json["type"], "checklist");
}

#[test]
fn test_foreflight_rejects_garbage() {
    assert!(matches!(
        ForeFlightCodec.parse(&[0u8; 8], "x.fmd"),
        Err(CodecError::TruncatedInput { .. })
    ));
    assert!(matches!(
        ForeFlightCodec.parse(&[0u8; 40], "x.fmd"),
        Err(CodecError::DecryptionFailure { .. })
    ));

    let shapeless = foreflight::encrypt(br#"{"type":"other"}"#).unwrap();
    assert!(matches!(
        ForeFlightCodec.parse(&shapeless, "x.fmd"),
        Err(CodecError::SchemaViolation { .. })
    ));

    let export = ForeFlightCodec.serialize(&simple_file()).unwrap().into_bytes();
    let mut json: serde_json::Value =
        serde_json::from_slice(&foreflight::decrypt(&export).unwrap()).unwrap();
    json["type"] = serde_json::Value::from("other");
    let retyped = foreflight::encrypt(&serde_json::to_vec(&json).unwrap()).unwrap();
    assert!(matches!(
        ForeFlightCodec.parse(&retyped, "x.fmd"),
        Err(CodecError::MalformedHeader { .. })
    ));
}

// ============================================================================
// Garmin Pilot
// ============================================================================

#[tokio::test]
async fn test_garmin_pilot_live_data_items() {
    use efiscodec::io::formats::GarminPilotCodec;

    let items = vec![
        ChecklistItem::challenge_response("Altimeter", "%LOCAL_ALTIMETER%"),
        ChecklistItem::challenge_response("ATIS", "%DEPARTURE_ATIS_FREQ%"),
        ChecklistItem::challenge_response("Flaps", "UP"),
    ];
    let file = FixtureBuilder::new("live")
        .checklist("Before Takeoff", GroupCategory::Normal, "Radios", items.clone())
        .build();

    let bytes = GarminPilotCodec.serialize(&file).await.unwrap().into_bytes();
    let back = GarminPilotCodec.parse(&bytes, "live.gplt").await.unwrap();
    assert_eq!(all_items(&back), items);
    assert_eq!(back.groups[0].name, "Before Takeoff");
}

#[tokio::test]
async fn test_garmin_pilot_unknown_group_lands_in_other() {
    use efiscodec::io::formats::GarminPilotCodec;

    let file = FixtureBuilder::new("odd")
        .checklist("Avionics", GroupCategory::Abnormal, "Screen", vec![ChecklistItem::challenge("Reset")])
        .build();
    let bytes = GarminPilotCodec.serialize(&file).await.unwrap().into_bytes();
    let back = GarminPilotCodec.parse(&bytes, "odd.gplt").await.unwrap();
    assert_eq!(back.groups[0].name, "Other");
    assert_eq!(back.groups[0].category, GroupCategory::Abnormal);
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_legacy_json_input() {
    let legacy = br#"{
        "groups": [{
            "title": "Emergency",
            "category": "emergency",
            "checklists": [{
                "title": "Engine Fire",
                "items": [
                    {"type": "ITEM_CHALLENGE_RESPONSE", "prompt": "Mixture", "expectation": "CUTOFF"},
                    {"type": "ITEM_SPACE"},
                    {"type": "ITEM_WARNING", "prompt": "Do not restart", "indent": 1}
                ]
            }]
        }],
        "metadata": {"name": "Old Export", "makeAndModel": "PA-28", "aircraftInfo": "N28PA", "copyrightInfo": ""}
    }"#;
    let parsed = JsonCodec.parse(legacy, "old.json").unwrap();
    assert_eq!(parsed.name, "Old Export");
    assert_eq!(parsed.metadata.make_model, "PA-28");
    assert_eq!(parsed.metadata.aircraft_registration, "N28PA");
    assert_eq!(parsed.groups[0].category, GroupCategory::Emergency);
    assert_eq!(
        all_items(&parsed),
        vec![
            ChecklistItem::challenge_response("Mixture", "CUTOFF"),
            ChecklistItem::warning("Do not restart").with_indent(1),
        ]
    );

    // Written back out in the own schema
    let out = JsonCodec.serialize(&parsed.into_file()).unwrap();
    let value: serde_json::Value = serde_json::from_str(out.as_text().unwrap()).unwrap();
    assert_eq!(value["groups"][0]["name"], "Emergency");
    assert_eq!(
        value["groups"][0]["checklists"][0]["items"][1]["type"],
        "warning"
    );
}

#[test]
fn test_legacy_unknown_item_is_rejected() {
    let legacy = br#"{"groups":[{"title":"G","checklists":[{"title":"C","items":[{"type":"ITEM_UNKNOWN"}]}]}]}"#;
    assert!(matches!(
        JsonCodec.parse(legacy, "old.json"),
        Err(CodecError::SchemaViolation { .. })
    ));
}
