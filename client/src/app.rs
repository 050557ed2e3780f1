//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    explanations::ExplanationsPage, login::LoginPage, note_editor::NoteEditorPage,
    notes::NotesPage, reference_books::ReferenceBooksPage, search::SearchPage,
    signup::SignupPage, subscription::SubscriptionPage, viewer::ViewerPage,
};
use crate::state::generation::GenerationState;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session once from the persistent store, provides shared state
/// contexts, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::load());
    let generation = RwSignal::new(GenerationState::default());

    provide_context(session);
    provide_context(generation);

    // Mirror every session change back to the persistent store so a reload
    // recovers identity and the current conversation pointer.
    Effect::new(move || {
        session.get().persist();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/notewise.css"/>
        <Title text="Notewise"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("") view=SearchPage/>
                <Route path=StaticSegment("explanations") view=ExplanationsPage/>
                <Route path=StaticSegment("notes") view=NotesPage/>
                <Route
                    path=(StaticSegment("notes"), StaticSegment("editor"))
                    view=NoteEditorPage
                />
                <Route path=StaticSegment("reference-books") view=ReferenceBooksPage/>
                <Route path=StaticSegment("subscription") view=SubscriptionPage/>
                <Route
                    path=(
                        StaticSegment("viewer"),
                        ParamSegment("source"),
                        ParamSegment("user_id"),
                        ParamSegment("conversation_id"),
                    )
                    view=ViewerPage
                />
            </Routes>
        </Router>
    }
}
