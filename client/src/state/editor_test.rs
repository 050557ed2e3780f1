use super::*;

fn concept(surface: &str, mode: ConceptMode) -> Concept {
    Concept {
        surface: surface.to_owned(),
        explanation: format!("about {surface}"),
        tag: "physics".to_owned(),
        mode,
    }
}

// =============================================================
// Draft editing
// =============================================================

#[test]
fn default_editor_is_clean() {
    let state = EditorState::default();
    assert!(!state.dirty);
    assert!(state.concepts.is_empty());
}

#[test]
fn edit_marks_dirty() {
    let mut state = EditorState::default();
    state.edit("# Notes".to_owned());
    assert!(state.dirty);
    assert_eq!(state.content, "# Notes");
}

#[test]
fn identical_edit_does_not_mark_dirty() {
    let mut state = EditorState { content: "same".to_owned(), ..Default::default() };
    state.edit("same".to_owned());
    assert!(!state.dirty);
}

#[test]
fn mark_saved_clears_dirty() {
    let mut state = EditorState::default();
    state.edit("draft".to_owned());
    state.mark_saved();
    assert!(!state.dirty);
}

// =============================================================
// Concepts
// =============================================================

#[test]
fn add_concept_appends_new_records() {
    let mut state = EditorState::default();
    state.add_concept(concept("entropy", ConceptMode::Quick));
    state.add_concept(concept("enthalpy", ConceptMode::Quick));
    assert_eq!(state.concepts.len(), 2);
}

#[test]
fn add_concept_replaces_same_surface_and_mode() {
    let mut state = EditorState::default();
    state.add_concept(concept("entropy", ConceptMode::Quick));
    let mut updated = concept("entropy", ConceptMode::Quick);
    updated.explanation = "better".to_owned();
    state.add_concept(updated);
    assert_eq!(state.concepts.len(), 1);
    assert_eq!(state.concepts[0].explanation, "better");
}

#[test]
fn same_surface_different_mode_is_kept_separately() {
    let mut state = EditorState::default();
    state.add_concept(concept("entropy", ConceptMode::Quick));
    state.add_concept(concept("entropy", ConceptMode::Deep));
    assert_eq!(state.concepts.len(), 2);
}
