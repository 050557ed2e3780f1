use super::*;

// =============================================================
// Phase mapping from stream payloads
// =============================================================

#[test]
fn outline_marker_maps_to_outline() {
    assert_eq!(
        phase_for_message("Starting Outline generation for topic X"),
        Some(GenerationPhase::Outline)
    );
}

#[test]
fn section_marker_maps_to_sections() {
    assert_eq!(
        phase_for_message("Starting Section generation (3 of 5)"),
        Some(GenerationPhase::Sections)
    );
}

#[test]
fn completion_marker_maps_to_ready() {
    assert_eq!(
        phase_for_message("Generation complete"),
        Some(GenerationPhase::Ready)
    );
}

#[test]
fn unknown_payloads_leave_the_phase_unchanged() {
    assert_eq!(phase_for_message("heartbeat"), None);
    assert_eq!(phase_for_message(""), None);
    assert_eq!(phase_for_message("{\"tokens\": 512}"), None);
}

// =============================================================
// GenerationPhase helpers
// =============================================================

#[test]
fn default_phase_is_idle() {
    assert_eq!(GenerationPhase::default(), GenerationPhase::Idle);
}

#[test]
fn running_phases_report_running() {
    assert!(GenerationPhase::Starting.is_running());
    assert!(GenerationPhase::Outline.is_running());
    assert!(GenerationPhase::Sections.is_running());
}

#[test]
fn settled_phases_do_not_report_running() {
    assert!(!GenerationPhase::Idle.is_running());
    assert!(!GenerationPhase::Ready.is_running());
    assert!(!GenerationPhase::Failed("x".to_owned()).is_running());
}

#[test]
fn failed_label_carries_the_message() {
    let phase = GenerationPhase::Failed("stream closed".to_owned());
    assert_eq!(phase.label(), "stream closed");
}

#[test]
fn every_running_phase_has_a_label() {
    for phase in [GenerationPhase::Starting, GenerationPhase::Outline, GenerationPhase::Sections] {
        assert!(!phase.label().is_empty());
    }
}
