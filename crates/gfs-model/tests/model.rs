//! Tests for gfs-model types.

use gfs_model::{AnswerSheet, FormDefinition, StepCursor, field_id};

// --- field identifier tests ---

#[test]
fn field_id_is_deterministic() {
    let a = field_id(2, "What is the main goal?");
    let b = field_id(2, "What is the main goal?");
    assert_eq!(a, b);
    assert_eq!(a, "step-2-what-is-the-main-goal");
}

#[test]
fn field_id_depends_on_page_index() {
    assert_ne!(field_id(0, "Name"), field_id(1, "Name"));
}

#[test]
fn field_id_strips_diacritics() {
    assert_eq!(field_id(0, "Nombre"), "step-0-nombre");
    assert_eq!(field_id(1, "¿Cuál es la meta?"), "step-1-cual-es-la-meta");
}

#[test]
fn field_id_collapses_symbol_runs() {
    assert_eq!(
        field_id(4, "Budget (EUR) -- total?"),
        "step-4-budget-eur-total"
    );
}

#[test]
fn field_id_degenerate_slug_keeps_prefix() {
    assert_eq!(field_id(7, "!!!"), "step-7-");
    assert_eq!(field_id(7, ""), "step-7-");
}

// --- answer sheet tests ---

#[test]
fn missing_answer_reads_as_empty() {
    let sheet = AnswerSheet::new();
    assert_eq!(sheet.answer("step-0-nombre"), "");
    assert!(sheet.is_empty());
}

#[test]
fn set_upserts_verbatim() {
    let mut sheet = AnswerSheet::new();
    sheet.set("step-0-nombre", "Acme");
    sheet.set("step-0-nombre", "Acme Corp");
    assert_eq!(sheet.answer("step-0-nombre"), "Acme Corp");
    assert_eq!(sheet.len(), 1);

    // Empty strings are stored, not rejected.
    sheet.set("step-0-nombre", "");
    assert_eq!(sheet.answer("step-0-nombre"), "");
    assert_eq!(sheet.len(), 1);
}

#[test]
fn replace_all_discards_previous_entries() {
    let mut sheet = AnswerSheet::new();
    sheet.set("step-0-a", "old");
    sheet.set("step-1-b", "old");

    let mut imported = std::collections::BTreeMap::new();
    imported.insert("step-2-c".to_string(), "new".to_string());
    sheet.replace_all(imported);

    assert_eq!(sheet.answer("step-0-a"), "");
    assert_eq!(sheet.answer("step-2-c"), "new");
    assert_eq!(sheet.len(), 1);
}

// --- step cursor tests ---

#[test]
fn go_to_clamps_any_input() {
    let mut cursor = StepCursor::new(3);
    cursor.go_to(99);
    assert_eq!(cursor.current(), 3);
    cursor.go_to(-5);
    assert_eq!(cursor.current(), 0);
    cursor.go_to(i64::MIN);
    assert_eq!(cursor.current(), 0);
    cursor.go_to(i64::MAX);
    assert_eq!(cursor.current(), 3);
}

#[test]
fn back_at_zero_stays_at_zero() {
    let mut cursor = StepCursor::new(2);
    cursor.back();
    assert_eq!(cursor.current(), 0);
}

#[test]
fn next_stops_at_summary() {
    let mut cursor = StepCursor::new(2);
    cursor.next();
    cursor.next();
    assert!(cursor.is_summary());
    cursor.next();
    assert_eq!(cursor.current(), 2);
}

#[test]
fn summary_can_navigate_backward() {
    let mut cursor = StepCursor::new(2);
    cursor.go_to(2);
    assert!(cursor.is_summary());
    cursor.back();
    assert_eq!(cursor.current(), 1);
}

#[test]
fn progress_tracks_position() {
    let mut cursor = StepCursor::new(4);
    assert_eq!(cursor.progress_percent(), 0.0);
    cursor.go_to(1);
    assert_eq!(cursor.progress_percent(), 25.0);
    cursor.go_to(4);
    assert_eq!(cursor.progress_percent(), 100.0);
}

#[test]
fn progress_of_empty_definition_is_complete() {
    let cursor = StepCursor::new(0);
    assert!(cursor.is_summary());
    assert_eq!(cursor.progress_percent(), 100.0);
}

#[test]
fn primary_label_is_context_sensitive() {
    let mut cursor = StepCursor::new(3);
    assert_eq!(cursor.primary_label(), "Next");
    cursor.go_to(2);
    assert_eq!(cursor.primary_label(), "View summary");
    cursor.go_to(3);
    assert_eq!(cursor.primary_label(), "Download summary");
}

// --- definition tests ---

#[test]
fn definition_parses_with_defaults() {
    let raw = r#"{
        "pages": [
            {
                "title": "Basics",
                "items": [
                    { "question": "What is the name of your project?" },
                    { "area": "Identity", "question": "Who is the contact?", "help": "Full name" }
                ]
            },
            { "title": "Empty page" }
        ]
    }"#;

    let definition = FormDefinition::from_json(raw).expect("parse definition");
    assert_eq!(definition.page_count(), 2);

    let first = definition.page(0).expect("first page");
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.items[0].area, "");
    assert_eq!(first.items[0].help, "");
    assert_eq!(first.items[1].area, "Identity");

    assert!(definition.page(1).expect("second page").items.is_empty());
    assert!(definition.page(2).is_none());
}

#[test]
fn definition_rejects_malformed_json() {
    assert!(FormDefinition::from_json("not json").is_err());
    assert!(FormDefinition::from_json(r#"{"pages": 3}"#).is_err());
}
