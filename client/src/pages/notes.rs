//! Notes explorer page — the user's note folder tree.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use leptos::prelude::*;

use crate::components::layout::MainLayout;
use crate::net::types::NoteFolder;
use crate::state::session::SessionState;

/// Join a folder path and a child name with `/`, skipping an empty base.
fn join_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_owned()
    } else {
        format!("{base}/{name}")
    }
}

/// Editor link for a note path.
fn editor_href(path: &str) -> String {
    format!("/notes/editor?path={}", urlencoding::encode(path))
}

/// Notes page — collapsible folder tree; files open in the editor.
#[component]
pub fn NotesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let tree = LocalResource::new(move || {
        let user = session.get().user_id;
        async move {
            let Some(user_id) = user else {
                return Err("Sign in to see your notes.".to_owned());
            };
            match crate::net::api::fetch_note_tree(&user_id).await {
                Ok(resp) if resp.success => Ok(resp.folder_tree.unwrap_or_default()),
                Ok(resp) => {
                    Err(resp.message.unwrap_or_else(|| "failed to fetch notes".to_owned()))
                }
                Err(e) => Err(e),
            }
        }
    });

    view! {
        <MainLayout>
            <main class="notes-page">
                <h1>"Notes"</h1>
                <Suspense fallback=move || {
                    view! { <p>"Loading notes..."</p> }
                }>
                    {move || {
                        tree.get().map(|outcome| match outcome {
                            Err(message) => {
                                view! { <p class="notes-page__error">{message}</p> }.into_any()
                            }
                            Ok(root) => {
                                if root.files.is_empty() && root.subfolders.is_empty() {
                                    view! {
                                        <p class="notes-page__empty">"No notes yet."</p>
                                    }
                                    .into_any()
                                } else {
                                    folder_view(root, String::new())
                                }
                            }
                        })
                    }}
                </Suspense>
            </main>
        </MainLayout>
    }
}

/// Render one folder level; recurses into subfolders.
fn folder_view(folder: NoteFolder, base: String) -> AnyView {
    let open = RwSignal::new(true);
    let name = folder.folder_name.clone();
    let files = folder.files;
    let subfolders = folder.subfolders;
    let base_for_children = if name.is_empty() { base } else { join_path(&base, &name) };

    view! {
        <div class="notes-page__folder">
            {(!name.is_empty())
                .then(|| {
                    view! {
                        <button
                            class="notes-page__folder-name"
                            on:click=move |_| open.update(|v| *v = !*v)
                        >
                            {move || if open.get() { "▾ " } else { "▸ " }}
                            {name.clone()}
                        </button>
                    }
                })}
            <Show when=move || open.get()>
                <div class="notes-page__folder-body">
                    {files
                        .iter()
                        .map(|file| {
                            let path = join_path(&base_for_children, file);
                            view! {
                                <a class="notes-page__file" href=editor_href(&path)>
                                    {file.clone()}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    {subfolders
                        .iter()
                        .map(|sub| folder_view(sub.clone(), base_for_children.clone()))
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}
