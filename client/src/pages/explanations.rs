//! Explanations archive page.

#[cfg(test)]
#[path = "explanations_test.rs"]
mod explanations_test;

use leptos::prelude::*;

use crate::components::layout::MainLayout;
use crate::net::types::ExplanationRecord;
use crate::state::session::SessionState;

/// Sort archive entries newest-first by their `generated_at` timestamp.
/// Timestamps are ISO-8601 strings, so lexicographic order is time order.
pub fn sort_newest_first(mut articles: Vec<ExplanationRecord>) -> Vec<ExplanationRecord> {
    articles.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
    articles
}

/// Explanations page — the archive of generated articles.
#[component]
pub fn ExplanationsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let explanations = LocalResource::new(move || {
        let user = session.get().user_id;
        async move {
            let Some(user_id) = user else {
                return Err("Sign in to see your explanations.".to_owned());
            };
            match crate::net::api::fetch_explanations(&user_id).await {
                Ok(resp) if resp.success => {
                    Ok(sort_newest_first(resp.data.map(|d| d.articles).unwrap_or_default()))
                }
                Ok(resp) => {
                    Err(resp.message.unwrap_or_else(|| "failed to fetch explanations".to_owned()))
                }
                Err(e) => Err(e),
            }
        }
    });

    view! {
        <MainLayout>
            <main class="explanations-page">
                <h1>"Explanations"</h1>
                <Suspense fallback=move || {
                    view! { <p>"Loading explanations..."</p> }
                }>
                    {move || {
                        explanations.get().map(|outcome| match outcome {
                            Err(message) => {
                                view! { <p class="explanations-page__error">{message}</p> }
                                    .into_any()
                            }
                            Ok(items) if items.is_empty() => {
                                view! {
                                    <p class="explanations-page__empty">
                                        "No explanations yet — start one from the search page."
                                    </p>
                                }
                                .into_any()
                            }
                            Ok(items) => items
                                .into_iter()
                                .map(|item| {
                                    let href = format!(
                                        "/viewer/explanations/{}/{}",
                                        item.user_id, item.conversation_id,
                                    );
                                    view! {
                                        <a class="explanations-page__card" href=href>
                                            <span class="explanations-page__topic">
                                                {item.topic}
                                            </span>
                                            <span class="explanations-page__meta">
                                                {format!(
                                                    "{} · {} words · {} min read",
                                                    item.generated_at,
                                                    item.word_count,
                                                    item.estimated_reading_time,
                                                )}
                                            </span>
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any(),
                        })
                    }}
                </Suspense>
            </main>
        </MainLayout>
    }
}
