//! Wire types for the backend JSON contract.
//!
//! Field shapes follow the backend exactly; optional fields default rather
//! than error so a sparse payload never breaks a page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Completion state of one document section. Ordered so that progress
/// comparisons can clamp monotonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Waiting,
    TextComplete,
    Complete,
}

/// One logical subdivision of a generated document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub section_id: String,
    pub title: String,
    #[serde(default)]
    pub learning_goals: Vec<String>,
    pub status: SectionStatus,
    #[serde(default)]
    pub content_points: Option<Vec<String>>,
}

/// Partial-progress payload for a document still being generated.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProgressResponse {
    #[serde(default)]
    pub completed_sections: String,
    #[serde(default)]
    pub is_complete: bool,
}

/// Finished-article payload for an archive view.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ContentResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Section list plus the overall completion flag.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SectionProgressResponse {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub is_complete: bool,
}

/// Generated diagram definition plus related topics.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DiagramResponse {
    #[serde(default)]
    pub diagram: String,
    #[serde(default)]
    pub related_topics: Vec<String>,
}

/// Answer to an in-section question.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AnswerResponse {
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Login result. `user_id` present means success.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Registration result.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One archived explanation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ExplanationRecord {
    pub conversation_id: String,
    pub user_id: String,
    pub topic: String,
    #[serde(default)]
    pub generated_at: String,
    #[serde(default)]
    pub word_count: u64,
    #[serde(default)]
    pub estimated_reading_time: u64,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ExplanationsData {
    #[serde(default)]
    pub articles: Vec<ExplanationRecord>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ExplanationsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<ExplanationsData>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Recursive folder node in the user's note tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NoteFolder {
    #[serde(default)]
    pub folder_name: String,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub subfolders: Vec<NoteFolder>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NotesTreeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub folder_tree: Option<NoteFolder>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NoteContentResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic success/message payload shared by mutation endpoints.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AckResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// One vectorized reference book.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BookRecord {
    pub book_id: String,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct BooksData {
    #[serde(default)]
    pub books: Vec<BookRecord>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct BooksResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<BooksData>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Concept explanation generated for the note editor.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConceptResponse {
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Checkout-session payload from the subscription flow.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CheckoutResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub checkout_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
