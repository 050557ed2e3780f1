//! Note editor page — markdown draft with live preview and concept records.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::layout::MainLayout;
use crate::state::editor::{Concept, ConceptMode, EditorState};
use crate::state::session::SessionState;
use crate::util::markup;

/// Note editor keyed by the `path` query parameter.
#[component]
pub fn NoteEditorPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();

    let editor = RwSignal::new(EditorState::default());
    let status = RwSignal::new(None::<String>);
    let concept_input = RwSignal::new(String::new());
    let concept_mode = RwSignal::new(ConceptMode::Quick);
    let concept_busy = RwSignal::new(false);

    let note_path = Memo::new(move |_| query.read().get("path").unwrap_or_default());

    // Load the note whenever the path changes.
    Effect::new(move || {
        let path = note_path.get();
        if path.is_empty() {
            return;
        }
        let Some(user_id) = session.get_untracked().user_id else {
            status.set(Some("Sign in to edit notes.".to_owned()));
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_note_content(&user_id, &path).await {
                    Ok(resp) if resp.success => {
                        editor.set(EditorState { path, content: resp.content, ..Default::default() });
                        status.set(None);
                    }
                    Ok(resp) => {
                        let message =
                            resp.message.unwrap_or_else(|| "failed to load the note".to_owned());
                        status.set(Some(message));
                    }
                    Err(e) => status.set(Some(e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
        }
    });

    let on_save = move |_| {
        let state = editor.get();
        if state.path.is_empty() {
            return;
        }
        let Some(user_id) = session.get().user_id else {
            status.set(Some("Sign in to save notes.".to_owned()));
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::save_note(&user_id, &state.path, &state.content).await {
                    Ok(resp) if resp.success => {
                        editor.update(EditorState::mark_saved);
                        status.set(Some("Saved.".to_owned()));
                    }
                    Ok(resp) => {
                        let message =
                            resp.message.unwrap_or_else(|| "failed to save the note".to_owned());
                        status.set(Some(message));
                    }
                    Err(e) => status.set(Some(e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, state);
        }
    };

    let on_explain = move |_| {
        let surface = concept_input.get().trim().to_owned();
        if surface.is_empty() || concept_busy.get() {
            return;
        }
        let Some(user_id) = session.get().user_id else {
            status.set(Some("Sign in to generate concepts.".to_owned()));
            return;
        };
        let mode = concept_mode.get();
        concept_busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let mode_param = match mode {
                    ConceptMode::Quick => "quick",
                    ConceptMode::Deep => "deep",
                };
                match crate::net::api::explain_concept(&user_id, &surface, mode_param).await {
                    Ok(resp) => {
                        if let Some(explanation) = resp.explanation {
                            editor.update(|e| {
                                e.add_concept(Concept {
                                    surface,
                                    explanation,
                                    tag: resp.tag.unwrap_or_default(),
                                    mode,
                                });
                            });
                            concept_input.set(String::new());
                        } else {
                            let message = resp
                                .error
                                .unwrap_or_else(|| "no explanation came back".to_owned());
                            status.set(Some(message));
                        }
                    }
                    Err(e) => status.set(Some(e)),
                }
                concept_busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, surface, mode);
        }
    };

    view! {
        <MainLayout>
            <main class="editor-page">
                <div class="editor-page__header">
                    <h1>{move || {
                        let path = note_path.get();
                        if path.is_empty() { "New note".to_owned() } else { path }
                    }}</h1>
                    <div class="editor-page__actions">
                        {move || {
                            editor
                                .get()
                                .dirty
                                .then(|| view! { <span class="editor-page__dirty">"unsaved"</span> })
                        }}
                        <button class="btn btn--primary" on:click=on_save>
                            "Save"
                        </button>
                    </div>
                </div>

                {move || status.get().map(|message| view! { <p class="editor-page__status">{message}</p> })}

                <div class="editor-page__columns">
                    <textarea
                        class="editor-page__textarea"
                        prop:value=move || editor.get().content
                        on:input=move |ev| {
                            editor.update(|e| e.edit(event_target_value(&ev)));
                        }
                    ></textarea>
                    <div
                        class="editor-page__preview markdown-body"
                        inner_html=move || markup::render_markdown(&editor.get().content)
                    ></div>
                    <aside class="editor-page__concepts">
                        <h2>"Concepts"</h2>
                        <div class="editor-page__concept-input">
                            <input
                                type="text"
                                placeholder="Term to explain..."
                                prop:value=move || concept_input.get()
                                on:input=move |ev| concept_input.set(event_target_value(&ev))
                            />
                            <select on:change=move |ev| {
                                concept_mode
                                    .set(
                                        if event_target_value(&ev) == "deep" {
                                            ConceptMode::Deep
                                        } else {
                                            ConceptMode::Quick
                                        },
                                    );
                            }>
                                <option value="quick">"Quick"</option>
                                <option value="deep">"Deep"</option>
                            </select>
                            <button class="btn" on:click=on_explain disabled=move || concept_busy.get()>
                                {move || if concept_busy.get() { "Working..." } else { "Explain" }}
                            </button>
                        </div>
                        <div class="editor-page__concept-list">
                            {move || {
                                editor
                                    .get()
                                    .concepts
                                    .into_iter()
                                    .map(|concept| {
                                        view! {
                                            <div class="editor-page__concept">
                                                <span class="editor-page__concept-surface">
                                                    {concept.surface}
                                                </span>
                                                {(!concept.tag.is_empty())
                                                    .then(|| {
                                                        view! {
                                                            <span class="editor-page__concept-tag">
                                                                {concept.tag.clone()}
                                                            </span>
                                                        }
                                                    })}
                                                <p class="editor-page__concept-text">
                                                    {concept.explanation}
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </aside>
                </div>
            </main>
        </MainLayout>
    }
}
