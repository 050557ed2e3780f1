//! Polling sync drivers for the viewer page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two independent loops poll the backend while a generation is running:
//! one for partial document text, one for section progress. They share the
//! polling policy and the cooperative-cancellation idiom (an alive flag
//! checked after every suspension point; `on_cleanup` clears it and stale
//! timers fire into no-ops). In-flight requests are not aborted; a dead
//! loop simply discards their results.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::RwSignal;

use super::poll::PollPolicy;
use super::types::{ProgressResponse, SectionProgressResponse};
use crate::state::viewer::{
    DocumentState, SectionsState, SourceKind, SyncStatus, merge_sections,
};
use crate::util::markup;

/// Cooperative stop flag for one sync loop. Dropping the handle does not
/// stop the loop; call [`StopHandle::stop`] from `on_cleanup`.
#[derive(Clone, Debug)]
pub struct StopHandle {
    alive: Arc<AtomicBool>,
}

impl StopHandle {
    fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[cfg(feature = "hydrate")]
    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// Apply one document-progress response. Non-empty partial text is expanded
/// and displayed immediately, before completion. Returns whether another
/// poll should be scheduled.
pub fn apply_progress(
    doc: &mut DocumentState,
    resp: &ProgressResponse,
    conversation_id: &str,
) -> bool {
    let has_text = !resp.completed_sections.trim().is_empty();
    if has_text {
        doc.expansion = markup::expand(&resp.completed_sections, conversation_id);
    }
    doc.status = if resp.is_complete {
        SyncStatus::Complete
    } else if has_text {
        SyncStatus::Streaming
    } else {
        SyncStatus::Fetching
    };
    !resp.is_complete
}

/// Apply one section-progress response through the monotonic merge. The
/// completion flag latches. Returns whether another poll should be
/// scheduled.
pub fn apply_section_progress(state: &mut SectionsState, resp: SectionProgressResponse) -> bool {
    state.sections = merge_sections(&state.sections, resp.sections);
    state.is_complete = state.is_complete || resp.is_complete;
    state.status = if state.is_complete {
        SyncStatus::Complete
    } else {
        SyncStatus::Streaming
    };
    !state.is_complete
}

/// Start the document synchronizer for one viewing session.
///
/// `Explanations` sources issue exactly one fetch of the finished article;
/// a failure there is terminal. `Generation` sources poll partial progress
/// under `policy` until the backend reports completion, the policy budget
/// runs out (`GaveUp`), or the view is torn down.
pub fn start_document_sync(
    source: SourceKind,
    user_id: String,
    conversation_id: String,
    doc: RwSignal<DocumentState>,
    policy: PollPolicy,
) -> StopHandle {
    let handle = StopHandle::new();

    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::Update;

        let handle = handle.clone();
        leptos::task::spawn_local(async move {
            doc.update(|d| d.status = SyncStatus::Fetching);

            if source == SourceKind::Explanations {
                let outcome = super::api::fetch_markdown_content(&user_id, &conversation_id).await;
                if !handle.is_alive() {
                    return;
                }
                doc.update(|d| match outcome {
                    Ok(resp) if resp.success && resp.content.is_some() => {
                        let content = resp.content.unwrap_or_default();
                        d.expansion = markup::expand(&content, &conversation_id);
                        d.status = SyncStatus::Complete;
                    }
                    Ok(resp) => {
                        let message =
                            resp.error.unwrap_or_else(|| "failed to load content".to_owned());
                        d.status = SyncStatus::Failed(message);
                    }
                    Err(e) => d.status = SyncStatus::Failed(e),
                });
                return;
            }

            let mut attempts: u32 = 0;
            let mut failures: u32 = 0;
            loop {
                if !handle.is_alive() {
                    return;
                }
                attempts += 1;
                let keep_polling =
                    match super::api::fetch_progress(&user_id, &conversation_id).await {
                        Ok(resp) => {
                            failures = 0;
                            if !handle.is_alive() {
                                return;
                            }
                            let mut more = false;
                            doc.update(|d| more = apply_progress(d, &resp, &conversation_id));
                            more
                        }
                        Err(e) => {
                            failures += 1;
                            leptos::logging::warn!("document poll failed: {e}");
                            true
                        }
                    };
                if !keep_polling {
                    return;
                }
                if policy.gave_up(attempts) {
                    if handle.is_alive() {
                        doc.update(|d| d.status = SyncStatus::GaveUp);
                    }
                    return;
                }
                gloo_timers::future::sleep(policy.delay_for(failures)).await;
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (source, user_id, conversation_id, doc, policy);
    }

    handle
}

/// Start the section-progress tracker for one viewing session.
///
/// `Explanations` sources are single-shot: the first response is applied
/// and the tracker never reschedules. `Generation` sources poll under
/// `policy` until the overall completion flag is observed.
pub fn start_section_sync(
    source: SourceKind,
    user_id: String,
    conversation_id: String,
    sections: RwSignal<SectionsState>,
    policy: PollPolicy,
) -> StopHandle {
    let handle = StopHandle::new();

    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::Update;

        let handle = handle.clone();
        leptos::task::spawn_local(async move {
            sections.update(|s| s.status = SyncStatus::Fetching);

            if source == SourceKind::Explanations {
                let outcome =
                    super::api::fetch_section_progress(&user_id, &conversation_id).await;
                if !handle.is_alive() {
                    return;
                }
                sections.update(|s| match outcome {
                    Ok(resp) => {
                        let _ = apply_section_progress(s, resp);
                        // Archive views never reschedule; the first read is final.
                        s.status = SyncStatus::Complete;
                    }
                    Err(e) => s.status = SyncStatus::Failed(e),
                });
                return;
            }

            let mut attempts: u32 = 0;
            let mut failures: u32 = 0;
            loop {
                if !handle.is_alive() {
                    return;
                }
                attempts += 1;
                let keep_polling =
                    match super::api::fetch_section_progress(&user_id, &conversation_id).await {
                        Ok(resp) => {
                            failures = 0;
                            if !handle.is_alive() {
                                return;
                            }
                            let mut more = false;
                            sections.update(|s| more = apply_section_progress(s, resp));
                            more
                        }
                        Err(e) => {
                            failures += 1;
                            leptos::logging::warn!("section poll failed: {e}");
                            true
                        }
                    };
                if !keep_polling {
                    return;
                }
                if policy.gave_up(attempts) {
                    if handle.is_alive() {
                        sections.update(|s| s.status = SyncStatus::GaveUp);
                    }
                    return;
                }
                gloo_timers::future::sleep(policy.delay_for(failures)).await;
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (source, user_id, conversation_id, sections, policy);
    }

    handle
}
