//! Tests for the session interchange format.

use std::collections::BTreeMap;

use gfs_persistence::{PAYLOAD_VERSION, SessionError, SessionSnapshot, decode, encode};

fn sheet(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn round_trip_preserves_answers_and_step() {
    let answers = sheet(&[("step-0-nombre", "Acme"), ("step-1-meta", "Grow 2x")]);
    let snapshot = SessionSnapshot::new(1, answers.clone());

    let json = encode(&snapshot).expect("encode");
    let restored = decode(&json, 2).expect("decode");

    assert_eq!(restored.answers, answers);
    assert_eq!(restored.step, 1);
}

#[test]
fn round_trip_of_single_answer_is_exact() {
    // Exporting one answered field yields a document whose answers contain
    // exactly that entry, and re-importing restores it alone.
    let answers = sheet(&[("step-0-nombre", "Acme")]);
    let snapshot = SessionSnapshot::new(0, answers.clone());

    let json = encode(&snapshot).expect("encode");
    let restored = decode(&json, 2).expect("decode");

    assert_eq!(restored.answers.len(), 1);
    assert_eq!(restored.answers, answers);
    assert_eq!(restored.step, 0);
}

#[test]
fn envelope_carries_version_and_timestamp() {
    let snapshot = SessionSnapshot::new(0, BTreeMap::new());
    assert_eq!(snapshot.version, PAYLOAD_VERSION);
    assert!(snapshot.exported_at().is_some());
}

#[test]
fn import_rejects_non_json_text() {
    let err = decode("<answers/>", 3).unwrap_err();
    assert!(matches!(err, SessionError::InvalidFormat { .. }));
}

#[test]
fn import_rejects_scalar_root() {
    let err = decode("42", 3).unwrap_err();
    assert!(matches!(err, SessionError::InvalidFormat { .. }));
}

#[test]
fn import_rejects_document_without_answers() {
    let err = decode(r#"{"version": 1, "currentStep": 0}"#, 3).unwrap_err();
    assert!(matches!(err, SessionError::InvalidFormat { .. }));
}

#[test]
fn import_drops_non_string_answer_values() {
    // Matches the documented sanitization example: the numeric entry is
    // dropped and the out-of-range step clamps to page_count.
    let raw = r#"{"answers": {"x": "y", "z": 42}, "currentStep": 99}"#;
    let restored = decode(raw, 3).expect("decode");

    assert_eq!(restored.answers, sheet(&[("x", "y")]));
    assert_eq!(restored.step, 3);
}

#[test]
fn import_drops_nested_and_null_values() {
    let raw = r#"{
        "answers": {
            "keep": "text",
            "obj": {"a": 1},
            "arr": [1, 2],
            "null": null,
            "flag": true
        }
    }"#;
    let restored = decode(raw, 5).expect("decode");
    assert_eq!(restored.answers, sheet(&[("keep", "text")]));
}

#[test]
fn import_defaults_step_when_missing_or_non_numeric() {
    let restored = decode(r#"{"answers": {}}"#, 3).expect("decode");
    assert_eq!(restored.step, 0);

    let restored = decode(r#"{"answers": {}, "currentStep": "two"}"#, 3).expect("decode");
    assert_eq!(restored.step, 0);

    let restored = decode(r#"{"answers": {}, "currentStep": null}"#, 3).expect("decode");
    assert_eq!(restored.step, 0);
}

#[test]
fn import_clamps_negative_step() {
    let restored = decode(r#"{"answers": {}, "currentStep": -7}"#, 3).expect("decode");
    assert_eq!(restored.step, 0);
}

#[test]
fn import_tolerates_non_object_answers() {
    // Entries of a non-object degrade to none; the document is still valid.
    let restored = decode(r#"{"answers": 42, "currentStep": 1}"#, 3).expect("decode");
    assert!(restored.answers.is_empty());
    assert_eq!(restored.step, 1);
}

#[test]
fn import_ignores_unknown_envelope_fields() {
    let raw = r#"{"answers": {"a": "b"}, "currentStep": 1, "extra": {"deep": true}}"#;
    let restored = decode(raw, 3).expect("decode");
    assert_eq!(restored.answers, sheet(&[("a", "b")]));
    assert_eq!(restored.step, 1);
}
