//! Application chrome: left navigation sidebar wrapped around page content.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Main layout for all non-viewer pages: navigation sidebar plus content.
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let display_name = move || {
        session
            .get()
            .display_name
            .unwrap_or_else(|| "Guest".to_owned())
    };

    let on_sign_out = move |_| {
        session.update(SessionState::sign_out);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="main-layout">
            <nav class="main-layout__sidebar">
                <a class="main-layout__brand" href="/">
                    "Notewise"
                </a>
                <a class="main-layout__link" href="/">
                    "Search"
                </a>
                <a class="main-layout__link" href="/notes">
                    "Notes"
                </a>
                <a class="main-layout__link" href="/explanations">
                    "Explanations"
                </a>
                <a class="main-layout__link" href="/reference-books">
                    "Reference Books"
                </a>
                <a class="main-layout__link" href="/subscription">
                    "Subscription"
                </a>
                <div class="main-layout__account">
                    <span class="main-layout__user">{display_name}</span>
                    <Show
                        when=move || session.get().is_logged_in()
                        fallback=|| {
                            view! {
                                <a class="main-layout__link" href="/login">
                                    "Sign in"
                                </a>
                            }
                        }
                    >
                        <button class="main-layout__signout" on:click=on_sign_out.clone()>
                            "Sign out"
                        </button>
                    </Show>
                </div>
            </nav>
            <div class="main-layout__content">{children()}</div>
        </div>
    }
}
