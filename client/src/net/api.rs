//! REST API bindings for the two backend services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics; failures are
//! surfaced as inline page text or fed to the polling policy, never thrown.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AckResponse, AnswerResponse, BooksResponse, CheckoutResponse, ConceptResponse,
    ContentResponse, DiagramResponse, ExplanationsResponse, LoginResponse, NoteContentResponse,
    NotesTreeResponse, ProgressResponse, SectionProgressResponse, SignupResponse,
};

/// Explanation-generation backend (documents, sections, diagrams, auth).
const EXPLAIN_API_BASE: &str = "https://backend-aec-experimental.onrender.com";
/// Archive/notes backend (finished articles, note tree, concepts).
const NOTES_API_BASE: &str = "https://backend-ai-cloud-explains.onrender.com";

#[cfg(any(test, feature = "hydrate"))]
fn explain_url(path: &str) -> String {
    format!("{EXPLAIN_API_BASE}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn notes_url(path: &str) -> String {
    format!("{NOTES_API_BASE}{path}")
}

/// URL of the generation event stream. The free-text parameters are
/// percent-encoded here; ids are passed through as-is.
#[cfg(any(test, feature = "hydrate"))]
pub fn generate_stream_url(user_id: &str, conversation_id: &str, query: &str, mode: &str, books: &str) -> String {
    format!(
        "{EXPLAIN_API_BASE}/generate_explanation_stream?user_id={user_id}&conversation_id={conversation_id}&query={}&mode={mode}&books={}",
        urlencoding::encode(query),
        urlencoding::encode(books),
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// POST a JSON payload and decode a JSON response.
#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(
    url: &str,
    payload: &serde_json::Value,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch partial document progress for a running generation.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_progress(user_id: &str, conversation_id: &str) -> Result<ProgressResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "user_id": user_id, "conversation_id": conversation_id });
        post_json(&explain_url("/get_progress"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, conversation_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch the finished article for an archive view.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn fetch_markdown_content(user_id: &str, conversation_id: &str) -> Result<ContentResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "user_id": user_id, "conversation_id": conversation_id });
        post_json(&notes_url("/get_markdown_content"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, conversation_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch the section list and overall completion flag.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn fetch_section_progress(user_id: &str, conversation_id: &str) -> Result<SectionProgressResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "user_id": user_id, "conversation_id": conversation_id });
        post_json(&explain_url("/get_section_progress"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, conversation_id);
        Err("not available on server".to_owned())
    }
}

/// Generate the concept-map diagram and related topics for a finished
/// document.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn generate_diagram_and_topics(user_id: &str, conversation_id: &str) -> Result<DiagramResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "user_id": user_id, "conversation_id": conversation_id });
        post_json(&explain_url("/generate_diagram_and_topics"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, conversation_id);
        Err("not available on server".to_owned())
    }
}

/// Ask a question attached to a document section.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn ask_section_question(user_id: &str, conversation_id: &str, question: &str) -> Result<AnswerResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "user_id": user_id,
            "conversation_id": conversation_id,
            "question": question,
        });
        post_json(&explain_url("/ask_in_section_question"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, conversation_id, question);
        Err("not available on server".to_owned())
    }
}

/// Log in with email and password.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status; a rejected
/// login is a success shape with `user_id` absent.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        post_json(&explain_url("/login"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Register a new account.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn signup(first_name: &str, last_name: &str, email: &str, password: &str) -> Result<SignupResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "firstName": first_name,
            "lastName": last_name,
            "email": email,
            "password": password,
        });
        post_json(&explain_url("/register"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (first_name, last_name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the user's generated-explanation archive.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn fetch_explanations(user_id: &str) -> Result<ExplanationsResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "user_id": user_id });
        post_json(&notes_url("/get_generated_explanations"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the user's note folder tree.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn fetch_note_tree(user_id: &str) -> Result<NotesTreeResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "user_id": user_id });
        post_json(&notes_url("/note/get_user_note_tree"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err("not available on server".to_owned())
    }
}

/// Load one note's markdown content.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn fetch_note_content(user_id: &str, path: &str) -> Result<NoteContentResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "user_id": user_id, "path": path });
        post_json(&notes_url("/note/get_note_content"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, path);
        Err("not available on server".to_owned())
    }
}

/// Save a note's markdown content.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn save_note(user_id: &str, path: &str, content: &str) -> Result<AckResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "user_id": user_id, "path": path, "content": content });
        post_json(&notes_url("/note/save_note"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, path, content);
        Err("not available on server".to_owned())
    }
}

/// Generate an explanation for a span of note text.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn explain_concept(user_id: &str, surface: &str, mode: &str) -> Result<ConceptResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "user_id": user_id, "text": surface, "mode": mode });
        post_json(&notes_url("/note/explain_concept"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, surface, mode);
        Err("not available on server".to_owned())
    }
}

/// Fetch the user's vectorized reference books.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn fetch_vectorized_books(user_id: &str) -> Result<BooksResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "user_id": user_id });
        post_json(&explain_url("/get_vectorized_books"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err("not available on server".to_owned())
    }
}

/// Upload a reference book as multipart form data.
///
/// Hydrate-only: the payload is a browser `File`, so there is no SSR stub;
/// callers live inside hydrate-gated blocks.
///
/// # Errors
///
/// Returns an error string if the form cannot be built, the HTTP request
/// fails, or the server responds with a non-OK status.
#[cfg(feature = "hydrate")]
pub async fn upload_reference_book(user_id: &str, file: &web_sys::File) -> Result<AckResponse, String> {
    let form = web_sys::FormData::new().map_err(|_| "could not build form data".to_owned())?;
    form.append_with_str("user_id", user_id)
        .map_err(|_| "could not build form data".to_owned())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "could not build form data".to_owned())?;
    let resp = gloo_net::http::Request::post(&explain_url("/upload_reference_book"))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<AckResponse>().await.map_err(|e| e.to_string())
}

/// Remove a vectorized reference book.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn delete_reference_book(user_id: &str, book_id: &str) -> Result<AckResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "user_id": user_id, "book_id": book_id });
        post_json(&explain_url("/delete_reference_book"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, book_id);
        Err("not available on server".to_owned())
    }
}

/// Create a checkout session for a subscription plan.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn start_checkout(user_id: &str, plan_id: &str, yearly: bool) -> Result<CheckoutResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "user_id": user_id,
            "plan_id": plan_id,
            "billing_cycle": if yearly { "yearly" } else { "monthly" },
        });
        post_json(&explain_url("/create_checkout_session"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, plan_id, yearly);
        Err("not available on server".to_owned())
    }
}
