use super::*;

// =============================================================
// SectionStatus
// =============================================================

#[test]
fn section_status_parses_wire_strings() {
    for (raw, expected) in [
        ("\"waiting\"", SectionStatus::Waiting),
        ("\"text_complete\"", SectionStatus::TextComplete),
        ("\"complete\"", SectionStatus::Complete),
    ] {
        let parsed: SectionStatus = serde_json::from_str(raw).expect("status parses");
        assert_eq!(parsed, expected);
    }
}

#[test]
fn section_status_ordering_matches_progress() {
    assert!(SectionStatus::Waiting < SectionStatus::TextComplete);
    assert!(SectionStatus::TextComplete < SectionStatus::Complete);
}

#[test]
fn section_optional_fields_default() {
    let section: Section = serde_json::from_str(
        r#"{"section_id": "s1", "title": "Intro", "status": "waiting"}"#,
    )
    .expect("section parses");
    assert!(section.learning_goals.is_empty());
    assert!(section.content_points.is_none());
}

// =============================================================
// Defaulting on sparse payloads
// =============================================================

#[test]
fn progress_response_defaults_to_incomplete_empty() {
    let resp: ProgressResponse = serde_json::from_str("{}").expect("parses");
    assert_eq!(resp.completed_sections, "");
    assert!(!resp.is_complete);
}

#[test]
fn diagram_response_missing_topics_defaults_to_empty() {
    let resp: DiagramResponse =
        serde_json::from_str(r#"{"diagram": "graph TD"}"#).expect("parses");
    assert_eq!(resp.diagram, "graph TD");
    assert!(resp.related_topics.is_empty());
}

#[test]
fn section_progress_response_defaults() {
    let resp: SectionProgressResponse = serde_json::from_str("{}").expect("parses");
    assert!(resp.sections.is_empty());
    assert!(!resp.is_complete);
}

#[test]
fn answer_response_defaults_to_no_explanation() {
    let resp: AnswerResponse = serde_json::from_str("{}").expect("parses");
    assert!(resp.explanation.is_none());
    assert!(resp.error.is_none());
}

#[test]
fn login_response_without_user_id_is_a_failure_shape() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"error": "bad credentials"}"#).expect("parses");
    assert!(resp.user_id.is_none());
    assert_eq!(resp.error.as_deref(), Some("bad credentials"));
}

#[test]
fn note_folder_parses_recursively() {
    let resp: NoteFolder = serde_json::from_str(
        r#"{
            "folder_name": "root",
            "files": ["a.md"],
            "subfolders": [{"folder_name": "phys", "files": ["b.md"], "subfolders": []}]
        }"#,
    )
    .expect("parses");
    assert_eq!(resp.subfolders.len(), 1);
    assert_eq!(resp.subfolders[0].files, vec!["b.md"]);
}

#[test]
fn explanation_record_defaults_counters() {
    let record: ExplanationRecord = serde_json::from_str(
        r#"{"conversation_id": "c1", "user_id": "u1", "topic": "entropy"}"#,
    )
    .expect("parses");
    assert_eq!(record.word_count, 0);
    assert_eq!(record.estimated_reading_time, 0);
    assert_eq!(record.generated_at, "");
}
