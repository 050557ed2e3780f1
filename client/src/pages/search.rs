//! Search page — the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts the generation entry point: a query input with a normal/pro mode
//! switch, an optional reference-book selection panel, and recent
//! explanations. Starting a generation opens the backend event stream and
//! drives the phase indicator until the article is ready to view.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::MainLayout;
use crate::net::types::BookRecord;
use crate::pages::explanations::sort_newest_first;
use crate::state::generation::{GenerationPhase, GenerationState};
use crate::state::session::SessionState;

/// Greeting shown above the search card, by local hour.
fn greeting_for_hour(hour: u32) -> &'static str {
    if (5..18).contains(&hour) {
        "Good morning. What would you like to learn today?"
    } else {
        "Good evening. What would you like to learn today?"
    }
}

/// Toggle a book id in the ordered selection list.
fn toggle_selection(selected: &mut Vec<String>, book_id: &str) {
    if let Some(pos) = selected.iter().position(|b| b == book_id) {
        selected.remove(pos);
    } else {
        selected.push(book_id.to_owned());
    }
}

fn current_hour() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        12
    }
}

/// Search page — greeting, query input, book panel, and recent items.
#[component]
pub fn SearchPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let generation = expect_context::<RwSignal<GenerationState>>();
    let navigate = use_navigate();

    let query = RwSignal::new(String::new());
    let pro_mode = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let show_books = RwSignal::new(false);
    let books = RwSignal::new(Vec::<BookRecord>::new());
    let books_loading = RwSignal::new(false);
    let books_error = RwSignal::new(None::<String>);
    let books_fetched = StoredValue::new(false);
    let book_filter = RwSignal::new(String::new());
    let selected_books = RwSignal::new(Vec::<String>::new());

    #[cfg(feature = "hydrate")]
    let stream = StoredValue::new_local(None::<crate::net::stream::GenerationStream>);

    let greeting = greeting_for_hour(current_hour());

    // Fetch the book list the first time the panel opens.
    Effect::new(move || {
        if !show_books.get() || books_fetched.get_value() {
            return;
        }
        let Some(user_id) = session.get_untracked().user_id else {
            books_error.set(Some("Sign in to load your reference books.".to_owned()));
            return;
        };
        books_fetched.set_value(true);
        books_loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_vectorized_books(&user_id).await {
                    Ok(resp) if resp.success => {
                        books.set(resp.data.map(|d| d.books).unwrap_or_default());
                    }
                    Ok(resp) => {
                        let message =
                            resp.message.unwrap_or_else(|| "failed to fetch books".to_owned());
                        books_error.set(Some(message));
                    }
                    Err(e) => books_error.set(Some(e)),
                }
                books_loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
        }
    });

    let start_search = move || {
        let topic = query.get();
        if topic.trim().is_empty() {
            return;
        }
        let Some(user_id) = session.get().user_id else {
            error.set(Some("Sign in before starting a generation.".to_owned()));
            return;
        };
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let conversation_id = uuid::Uuid::new_v4().to_string();
            generation.set(GenerationState {
                phase: GenerationPhase::Starting,
                conversation_id: Some(conversation_id.clone()),
            });
            let mode = if pro_mode.get() { "pro" } else { "normal" };
            let url = crate::net::api::generate_stream_url(
                &user_id,
                &conversation_id,
                topic.trim(),
                mode,
                &selected_books.get().join(","),
            );
            match crate::net::stream::open_generation_stream(&url, generation) {
                Ok(open) => stream.set_value(Some(open)),
                Err(e) => {
                    generation.set(GenerationState::default());
                    error.set(Some(e));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
        }
    };

    // Navigate to the viewer once the stream reports the article is ready.
    let navigate_ready = navigate.clone();
    Effect::new(move || {
        let state = generation.get();
        if state.phase != GenerationPhase::Ready {
            return;
        }
        let Some(user_id) = session.get_untracked().user_id else {
            return;
        };
        let Some(conversation_id) = state.conversation_id else {
            return;
        };
        #[cfg(feature = "hydrate")]
        stream.set_value(None);
        session.update(|s| s.remember_conversation(conversation_id.clone()));
        generation.set(GenerationState::default());
        navigate_ready(
            &format!("/viewer/generation/{user_id}/{conversation_id}"),
            NavigateOptions::default(),
        );
    });

    let cancel_generation = move |_| {
        #[cfg(feature = "hydrate")]
        stream.set_value(None);
        generation.set(GenerationState::default());
    };

    let recent = LocalResource::new(move || {
        let user = session.get().user_id;
        async move {
            let Some(user_id) = user else {
                return Vec::new();
            };
            match crate::net::api::fetch_explanations(&user_id).await {
                Ok(resp) if resp.success => {
                    let articles = resp.data.map(|d| d.articles).unwrap_or_default();
                    sort_newest_first(articles).into_iter().take(5).collect()
                }
                _ => Vec::new(),
            }
        }
    });

    let filtered_books = move || {
        let filter = book_filter.get().to_lowercase();
        books
            .get()
            .into_iter()
            .filter(|book| {
                filter.is_empty()
                    || book.book_id.to_lowercase().contains(&filter)
                    || book
                        .author
                        .as_deref()
                        .is_some_and(|a| a.to_lowercase().contains(&filter))
            })
            .collect::<Vec<_>>()
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            start_search();
        }
    };

    view! {
        <MainLayout>
            <main class="search-page">
                <h1 class="search-page__greeting">{greeting}</h1>

                <div class="search-page__card">
                    <div class="search-page__mode-switch">
                        <button
                            class="search-page__mode"
                            class:search-page__mode--active=move || !pro_mode.get()
                            on:click=move |_| pro_mode.set(false)
                        >
                            "Normal"
                        </button>
                        <button
                            class="search-page__mode"
                            class:search-page__mode--active=move || pro_mode.get()
                            on:click=move |_| pro_mode.set(true)
                        >
                            "Pro"
                        </button>
                    </div>

                    <div class="search-page__input-row">
                        <input
                            class="search-page__input"
                            type="text"
                            placeholder="What do you want explained?"
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button class="btn btn--primary" on:click=move |_| start_search()>
                            "Explain"
                        </button>
                        <button
                            class="btn"
                            class:btn--active=move || show_books.get()
                            title="Use reference books"
                            on:click=move |_| show_books.update(|v| *v = !*v)
                        >
                            "Books"
                        </button>
                    </div>

                    {move || {
                        error.get().map(|message| {
                            view! { <p class="search-page__error">{message}</p> }
                        })
                    }}

                    <Show when=move || show_books.get()>
                        <div class="search-page__books">
                            <input
                                class="search-page__book-filter"
                                type="text"
                                placeholder="Search books..."
                                prop:value=move || book_filter.get()
                                on:input=move |ev| book_filter.set(event_target_value(&ev))
                            />
                            {move || {
                                if books_loading.get() {
                                    return view! {
                                        <p class="search-page__books-note">"Loading books..."</p>
                                    }
                                    .into_any();
                                }
                                if let Some(message) = books_error.get() {
                                    return view! {
                                        <p class="search-page__books-error">{message}</p>
                                    }
                                    .into_any();
                                }
                                let list = filtered_books();
                                if list.is_empty() {
                                    return view! {
                                        <p class="search-page__books-note">"No matching books."</p>
                                    }
                                    .into_any();
                                }
                                list.into_iter()
                                    .map(|book| {
                                        let id = book.book_id.clone();
                                        let selected = move || {
                                            selected_books.get().iter().any(|b| *b == id)
                                        };
                                        let toggle_id = book.book_id.clone();
                                        let author = book
                                            .author
                                            .unwrap_or_else(|| "Unknown Author".to_owned());
                                        view! {
                                            <button
                                                class="search-page__book"
                                                class:search-page__book--selected=selected
                                                on:click=move |_| {
                                                    selected_books
                                                        .update(|list| toggle_selection(list, &toggle_id));
                                                }
                                            >
                                                <span class="search-page__book-title">
                                                    {book.book_id}
                                                </span>
                                                <span class="search-page__book-author">{author}</span>
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }}
                        </div>
                    </Show>
                </div>

                {move || {
                    let phase = generation.get().phase;
                    phase.is_running().then(|| {
                        view! {
                            <div class="search-page__progress">
                                <span class="search-page__progress-label">
                                    {phase.label().to_owned()}
                                </span>
                                <button class="btn" on:click=cancel_generation>
                                    "Cancel"
                                </button>
                            </div>
                        }
                    })
                }}

                <div class="search-page__recent">
                    <h2>"Recent Explanations"</h2>
                    <Suspense fallback=move || {
                        view! { <p>"Loading history..."</p> }
                    }>
                        {move || {
                            recent.get().map(|items| {
                                if items.is_empty() {
                                    view! {
                                        <p class="search-page__recent-empty">
                                            "Nothing generated yet."
                                        </p>
                                    }
                                    .into_any()
                                } else {
                                    items
                                        .into_iter()
                                        .map(|item| {
                                            let href = format!(
                                                "/viewer/explanations/{}/{}",
                                                item.user_id, item.conversation_id,
                                            );
                                            view! {
                                                <a class="search-page__recent-item" href=href>
                                                    <span class="search-page__recent-topic">
                                                        {item.topic}
                                                    </span>
                                                    <span class="search-page__recent-meta">
                                                        {format!(
                                                            "{} words · {} min",
                                                            item.word_count,
                                                            item.estimated_reading_time,
                                                        )}
                                                    </span>
                                                </a>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                            })
                        }}
                    </Suspense>
                </div>
            </main>
        </MainLayout>
    }
}
