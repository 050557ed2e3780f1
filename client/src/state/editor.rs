//! Note-editor state: the markdown draft plus concept records attached to
//! spans of the note.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use serde::{Deserialize, Serialize};

/// How a concept explanation was generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptMode {
    /// One-paragraph gloss.
    #[default]
    Quick,
    /// Full explanation with examples.
    Deep,
}

/// A generated explanation attached to a span of note text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// The note text the concept was generated for.
    pub surface: String,
    pub explanation: String,
    pub tag: String,
    pub mode: ConceptMode,
}

/// In-memory editor state for one open note.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
    pub path: String,
    pub content: String,
    pub concepts: Vec<Concept>,
    pub dirty: bool,
}

impl EditorState {
    /// Replace the draft text and mark the note dirty.
    pub fn edit(&mut self, content: String) {
        if content != self.content {
            self.content = content;
            self.dirty = true;
        }
    }

    /// Attach a concept record; duplicates (same surface and mode) are
    /// replaced rather than appended.
    pub fn add_concept(&mut self, concept: Concept) {
        if let Some(existing) = self
            .concepts
            .iter_mut()
            .find(|c| c.surface == concept.surface && c.mode == concept.mode)
        {
            *existing = concept;
        } else {
            self.concepts.push(concept);
        }
    }

    /// Mark the current draft as saved.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}
