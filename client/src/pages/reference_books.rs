//! Reference books page — list, upload, delete.

use leptos::prelude::*;

use crate::components::layout::MainLayout;
use crate::state::session::SessionState;

/// Reference books page. Uploads go up as multipart form data; the list
/// refetches after every successful mutation.
#[component]
pub fn ReferenceBooksPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let status = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let books = LocalResource::new(move || {
        let user = session.get().user_id;
        async move {
            let Some(user_id) = user else {
                return Err("Sign in to manage your reference books.".to_owned());
            };
            match crate::net::api::fetch_vectorized_books(&user_id).await {
                Ok(resp) if resp.success => Ok(resp.data.map(|d| d.books).unwrap_or_default()),
                Ok(resp) => {
                    Err(resp.message.unwrap_or_else(|| "failed to fetch books".to_owned()))
                }
                Err(e) => Err(e),
            }
        }
    });

    let on_upload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(user_id) = session.get().user_id else {
                status.set(Some("Sign in to upload books.".to_owned()));
                return;
            };
            let Some(input) = file_input.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                status.set(Some("Choose a file first.".to_owned()));
                return;
            };
            uploading.set(true);
            status.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_reference_book(&user_id, &file).await {
                    Ok(resp) if resp.success => {
                        status.set(Some("Book uploaded — vectorization starts shortly.".to_owned()));
                        books.refetch();
                    }
                    Ok(resp) => {
                        let message =
                            resp.message.unwrap_or_else(|| "upload failed".to_owned());
                        status.set(Some(message));
                    }
                    Err(e) => status.set(Some(e)),
                }
                uploading.set(false);
            });
        }
    };

    let on_delete = move |book_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let Some(user_id) = session.get().user_id else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_reference_book(&user_id, &book_id).await {
                    Ok(resp) if resp.success => books.refetch(),
                    Ok(resp) => {
                        let message =
                            resp.message.unwrap_or_else(|| "delete failed".to_owned());
                        status.set(Some(message));
                    }
                    Err(e) => status.set(Some(e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = book_id;
        }
    };

    view! {
        <MainLayout>
            <main class="books-page">
                <h1>"Reference Books"</h1>

                <div class="books-page__upload">
                    <input type="file" accept=".pdf,.epub" node_ref=file_input/>
                    <button
                        class="btn btn--primary"
                        on:click=on_upload
                        disabled=move || uploading.get()
                    >
                        {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                    </button>
                </div>

                {move || status.get().map(|message| view! { <p class="books-page__status">{message}</p> })}

                <Suspense fallback=move || {
                    view! { <p>"Loading books..."</p> }
                }>
                    {move || {
                        books.get().map(|outcome| match outcome {
                            Err(message) => {
                                view! { <p class="books-page__error">{message}</p> }.into_any()
                            }
                            Ok(items) if items.is_empty() => {
                                view! {
                                    <p class="books-page__empty">"No reference books yet."</p>
                                }
                                .into_any()
                            }
                            Ok(items) => items
                                .into_iter()
                                .map(|book| {
                                    let id = book.book_id.clone();
                                    let author = book
                                        .author
                                        .unwrap_or_else(|| "Unknown Author".to_owned());
                                    view! {
                                        <div class="books-page__row">
                                            <div class="books-page__info">
                                                <span class="books-page__title">
                                                    {book.book_id}
                                                </span>
                                                <span class="books-page__author">{author}</span>
                                            </div>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| on_delete(id.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </div>
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
