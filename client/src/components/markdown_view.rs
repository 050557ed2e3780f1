//! Expanded-document renderer: markdown runs interleaved with Q&A widgets.

use leptos::prelude::*;

use crate::components::qa_block::QaBlock;
use crate::state::viewer::{DocumentState, SyncStatus};
use crate::util::markup::{self, Segment};

/// Render the synchronized document. Placeholder slots produced by the
/// tag-expansion pass are swapped for [`QaBlock`] widgets by id lookup;
/// everything else renders as markdown.
#[component]
pub fn MarkdownView(
    doc: RwSignal<DocumentState>,
    user_id: String,
    conversation_id: String,
) -> impl IntoView {
    let user_id = StoredValue::new(user_id);
    let conversation_id = StoredValue::new(conversation_id);

    view! {
        <div class="markdown-view">
            {move || {
                let state = doc.get();
                match state.status {
                    SyncStatus::Failed(message) => {
                        view! { <p class="markdown-view__error">{message}</p> }.into_any()
                    }
                    SyncStatus::GaveUp => {
                        view! {
                            <p class="markdown-view__error">
                                "Generation is taking too long. Come back to this page later."
                            </p>
                        }
                        .into_any()
                    }
                    _ if state.expansion.text.is_empty() => {
                        view! { <p class="markdown-view__loading">"Loading content..."</p> }
                            .into_any()
                    }
                    _ => {
                        let widgets = state.expansion.widgets;
                        markup::segments(&state.expansion.text)
                            .into_iter()
                            .map(|segment| match segment {
                                Segment::Markdown(md) => {
                                    let html = markup::render_markdown(&md);
                                    view! { <div class="markdown-body" inner_html=html/> }
                                        .into_any()
                                }
                                Segment::Widget(id) => widgets
                                    .iter()
                                    .find(|w| w.id == id)
                                    .map(|w| {
                                        view! {
                                            <QaBlock
                                                question=w.question.clone()
                                                answer=w.answer.clone()
                                                user_id=user_id.get_value()
                                                conversation_id=conversation_id.get_value()
                                            />
                                        }
                                        .into_any()
                                    })
                                    .unwrap_or_else(|| view! { <span></span> }.into_any()),
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
