//! Generation-flow state: the phase indicator driven by the backend's
//! event stream while an explanation is being produced.

#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

/// Client-side phase of a running generation, derived from stream payloads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GenerationPhase {
    #[default]
    Idle,
    /// The request has been submitted; no phase marker seen yet.
    Starting,
    Outline,
    Sections,
    /// The article is ready to view.
    Ready,
    Failed(String),
}

impl GenerationPhase {
    /// Short label for the phase indicator overlay.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Starting => "Contacting the tutor…",
            Self::Outline => "Generating outline…",
            Self::Sections => "Writing sections…",
            Self::Ready => "Ready",
            Self::Failed(message) => message,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Starting | Self::Outline | Self::Sections)
    }
}

/// State for one generation attempt: the phase plus the conversation the
/// stream belongs to, used for navigation once the article is ready.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationState {
    pub phase: GenerationPhase,
    pub conversation_id: Option<String>,
}

/// Map one stream message payload to a phase, if it carries a known marker.
///
/// Payloads are matched against known substrings; anything unrecognized
/// leaves the current phase unchanged (`None`).
#[must_use]
pub fn phase_for_message(data: &str) -> Option<GenerationPhase> {
    if data.contains("Starting Outline generation") {
        Some(GenerationPhase::Outline)
    } else if data.contains("Starting Section generation") {
        Some(GenerationPhase::Sections)
    } else if data.contains("Generation complete") {
        Some(GenerationPhase::Ready)
    } else {
        None
    }
}
