use super::*;

fn record(conversation_id: &str, generated_at: &str) -> ExplanationRecord {
    ExplanationRecord {
        conversation_id: conversation_id.to_owned(),
        user_id: "u1".to_owned(),
        topic: "topic".to_owned(),
        generated_at: generated_at.to_owned(),
        word_count: 100,
        estimated_reading_time: 1,
    }
}

// =============================================================
// Archive ordering
// =============================================================

#[test]
fn newest_explanation_sorts_first() {
    let sorted = sort_newest_first(vec![
        record("old", "2026-01-02T08:00:00Z"),
        record("new", "2026-03-01T12:30:00Z"),
        record("mid", "2026-02-10T09:15:00Z"),
    ]);
    let order: Vec<_> = sorted.iter().map(|r| r.conversation_id.as_str()).collect();
    assert_eq!(order, vec!["new", "mid", "old"]);
}

#[test]
fn empty_archive_sorts_to_empty() {
    assert!(sort_newest_first(Vec::new()).is_empty());
}

#[test]
fn missing_timestamps_sort_last() {
    let sorted = sort_newest_first(vec![
        record("untimed", ""),
        record("timed", "2026-01-01T00:00:00Z"),
    ]);
    assert_eq!(sorted[0].conversation_id, "timed");
    assert_eq!(sorted[1].conversation_id, "untimed");
}
