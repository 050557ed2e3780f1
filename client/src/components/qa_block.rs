//! Interactive question/answer widget substituted for a document
//! placeholder.
//!
//! The first activation with no cached answer fetches one; afterwards
//! clicks toggle visibility without refetching. A failed fetch renders an
//! inline error and the next click retries.

use leptos::prelude::*;

use crate::util::markup;

/// One expanded question block. `answer` may be empty, in which case the
/// widget fetches its answer on first interaction.
#[component]
pub fn QaBlock(
    question: String,
    answer: String,
    user_id: String,
    conversation_id: String,
) -> impl IntoView {
    let cached = RwSignal::new(if answer.trim().is_empty() { None } else { Some(answer) });
    let visible = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let question_html = markup::render_markdown(&question);
    let question = StoredValue::new(question);
    let user_id = StoredValue::new(user_id);
    let conversation_id = StoredValue::new(conversation_id);

    let on_click = move |_| {
        if loading.get() {
            return;
        }
        if cached.get().is_some() {
            visible.update(|v| *v = !*v);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::ask_section_question(
                    &user_id.get_value(),
                    &conversation_id.get_value(),
                    &question.get_value(),
                )
                .await;
                match outcome {
                    Ok(resp) => {
                        if let Some(explanation) = resp.explanation {
                            cached.set(Some(explanation));
                            visible.set(true);
                        } else {
                            let message = resp
                                .error
                                .unwrap_or_else(|| "no answer came back".to_owned());
                            error.set(Some(message));
                        }
                    }
                    Err(e) => {
                        leptos::logging::warn!("answer fetch failed: {e}");
                        error.set(Some("couldn't load the answer".to_owned()));
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&question, &user_id, &conversation_id);
        }
    };

    view! {
        <div class="qa-block">
            <button class="qa-block__question" class:qa-block__question--open=move || visible.get() on:click=on_click>
                <div class="qa-block__question-text" inner_html=question_html/>
                {move || loading.get().then(|| view! { <span class="qa-block__spinner" aria-label="loading"></span> })}
            </button>
            {move || {
                error.get().map(|message| {
                    view! {
                        <div class="qa-block__error">
                            {message}
                            " — click the question to retry."
                        </div>
                    }
                })
            }}
            {move || {
                if !visible.get() {
                    return None;
                }
                cached.get().map(|answer| {
                    let html = markup::render_markdown(&answer);
                    view! { <div class="qa-block__answer" inner_html=html/> }
                })
            }}
        </div>
    }
}
