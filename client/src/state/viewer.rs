//! Viewer-page state: document sync, section progress, and the concept-map
//! diagram lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The viewer runs two independent polling loops (document text and section
//! progress) plus a one-shot diagram generation guard. The state transitions
//! live here as pure functions; the async drivers in `net::sync` apply them.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::net::types::{Section, SectionStatus};
use crate::util::markup::Expansion;

/// Where the viewed document comes from.
///
/// `Generation` documents are still being produced and are polled for
/// partial text; `Explanations` documents are finished archive entries
/// fetched exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Generation,
    Explanations,
}

impl SourceKind {
    /// Parse the `:source` route segment. Anything that is not the archive
    /// keyword is treated as a live generation view.
    #[must_use]
    pub fn from_route(param: &str) -> Self {
        if param == "explanations" {
            Self::Explanations
        } else {
            Self::Generation
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generation => "generation",
            Self::Explanations => "explanations",
        }
    }
}

/// Lifecycle of a polling synchronizer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SyncStatus {
    #[default]
    Idle,
    Fetching,
    /// Partial content has been applied; more polls are scheduled.
    Streaming,
    /// The backend reported completion.
    Complete,
    /// Terminal failure (archive fetch failed; no retry).
    Failed(String),
    /// The polling policy exhausted its attempt budget.
    GaveUp,
}

impl SyncStatus {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Failed(_) | Self::GaveUp)
    }
}

/// Expanded document text plus sync lifecycle for one viewing session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentState {
    pub expansion: Expansion,
    pub status: SyncStatus,
}

/// Section progress plus sync lifecycle for one viewing session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionsState {
    pub sections: Vec<Section>,
    pub is_complete: bool,
    pub status: SyncStatus,
}

/// Merge a freshly polled section list into the known one.
///
/// Statuses are clamped monotonic: a known section never moves backwards
/// even if the backend reports a downgrade. New sections are accepted in
/// the incoming order; sections the backend stopped reporting are kept.
#[must_use]
pub fn merge_sections(known: &[Section], incoming: Vec<Section>) -> Vec<Section> {
    let mut merged: Vec<Section> = incoming;
    for section in &mut merged {
        if let Some(prev) = known.iter().find(|k| k.section_id == section.section_id) {
            section.status = section.status.max(prev.status);
        }
    }
    for prev in known {
        if !merged.iter().any(|s| s.section_id == prev.section_id) {
            merged.push(prev.clone());
        }
    }
    merged
}

/// A generated concept-map diagram plus related topics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagramResult {
    pub diagram: String,
    pub related_topics: Vec<String>,
}

/// Diagram generation lifecycle. `result` is set at most once per viewing
/// session; `in_flight` suppresses duplicate requests while one is pending.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiagramState {
    pub result: Option<DiagramResult>,
    pub in_flight: bool,
}

/// Guard for the one-shot diagram fetch: true iff the section list is
/// non-empty, every section is complete, no result is stored, and no
/// request is currently pending.
#[must_use]
pub fn should_generate_diagram(sections: &[Section], has_result: bool, in_flight: bool) -> bool {
    !sections.is_empty()
        && sections.iter().all(|s| s.status == SectionStatus::Complete)
        && !has_result
        && !in_flight
}

/// Strip code-fence markers and zero-width characters from a generated
/// diagram definition.
#[must_use]
pub fn sanitize_diagram(raw: &str) -> String {
    raw.replace("```mermaid", "")
        .replace("```", "")
        .chars()
        .filter(|c| !matches!(c, '\u{200B}'..='\u{200D}' | '\u{FEFF}'))
        .collect::<String>()
        .trim()
        .to_owned()
}
