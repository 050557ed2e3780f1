//! Markdown viewer page — the streaming document view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes the section panel, the expanded markdown content, and the
//! concept-map panel. Owns the two polling loops and the diagram trigger
//! for the `(source, user_id, conversation_id)` in the route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::diagram_panel::DiagramPanel;
use crate::components::markdown_view::MarkdownView;
use crate::components::sections_panel::SectionsPanel;
use crate::components::toolbar::Toolbar;
use crate::net::poll::PollPolicy;
use crate::net::sync::{self, StopHandle};
use crate::state::session::SessionState;
use crate::state::viewer::{
    DiagramState, DocumentState, SectionsState, SourceKind, should_generate_diagram,
};

/// Viewer page keyed by `/viewer/:source/:user_id/:conversation_id`.
#[component]
pub fn ViewerPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let doc = RwSignal::new(DocumentState::default());
    let sections = RwSignal::new(SectionsState::default());
    let diagram = RwSignal::new(DiagramState::default());
    let zoom = RwSignal::new(100.0_f64);

    let route = Memo::new(move |_| {
        let p = params.read();
        (
            p.get("source").unwrap_or_default(),
            p.get("user_id").unwrap_or_default(),
            p.get("conversation_id").unwrap_or_default(),
        )
    });

    // Restart both polling loops whenever the route changes; the previous
    // loops are stopped and their late timers fire into no-ops.
    let handles = StoredValue::new(Vec::<StopHandle>::new());
    Effect::new(move || {
        let (source_param, user_id, conversation_id) = route.get();

        for handle in handles.get_value() {
            handle.stop();
        }
        handles.set_value(Vec::new());
        doc.set(DocumentState::default());
        sections.set(SectionsState::default());
        diagram.set(DiagramState::default());

        if user_id.is_empty() || conversation_id.is_empty() {
            return;
        }
        let source = SourceKind::from_route(&source_param);
        session.update(|s| s.remember_conversation(conversation_id.clone()));

        let policy = PollPolicy::default();
        let doc_handle = sync::start_document_sync(
            source,
            user_id.clone(),
            conversation_id.clone(),
            doc,
            policy,
        );
        let section_handle =
            sync::start_section_sync(source, user_id, conversation_id, sections, policy);
        handles.set_value(vec![doc_handle, section_handle]);
    });

    on_cleanup(move || {
        for handle in handles.get_value() {
            handle.stop();
        }
    });

    // Diagram trigger: re-evaluated on every section-list update. Tracks
    // only the section signal; a stored result or an in-flight request
    // keeps the guard false without re-triggering on their own changes.
    Effect::new(move || {
        let state = sections.get();
        let diag = diagram.get_untracked();
        if !should_generate_diagram(&state.sections, diag.result.is_some(), diag.in_flight) {
            return;
        }
        let (_, user_id, conversation_id) = route.get_untracked();
        if user_id.is_empty() || conversation_id.is_empty() {
            return;
        }
        diagram.update(|d| d.in_flight = true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::generate_diagram_and_topics(&user_id, &conversation_id)
                    .await
                {
                    Ok(resp) => diagram.update(|d| {
                        d.in_flight = false;
                        d.result = Some(crate::state::viewer::DiagramResult {
                            diagram: crate::state::viewer::sanitize_diagram(&resp.diagram),
                            related_topics: resp.related_topics,
                        });
                    }),
                    Err(e) => {
                        leptos::logging::warn!("diagram generation failed: {e}");
                        diagram.update(|d| d.in_flight = false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, conversation_id);
        }
    });

    let on_back = Callback::new(move |()| {
        let (source_param, _, _) = route.get_untracked();
        let target = if SourceKind::from_route(&source_param) == SourceKind::Explanations {
            "/explanations"
        } else {
            "/"
        };
        navigate(target, NavigateOptions::default());
    });

    let missing_ids = move || {
        let (_, user_id, conversation_id) = route.get();
        user_id.is_empty() || conversation_id.is_empty()
    };

    view! {
        <div class="viewer-page">
            <Toolbar zoom on_back/>
            <Show
                when=move || !missing_ids()
                fallback=|| {
                    view! {
                        <p class="viewer-page__error">
                            "Missing user or conversation — open a document from the explanations page."
                        </p>
                    }
                }
            >
                <div class="viewer-page__columns">
                    <div class="viewer-page__sections">
                        <SectionsPanel sections/>
                    </div>
                    <div
                        class="viewer-page__content"
                        style:zoom=move || format!("{:.0}%", zoom.get())
                    >
                        {move || {
                            let (_, user_id, conversation_id) = route.get();
                            view! { <MarkdownView doc user_id conversation_id/> }
                        }}
                        <DiagramPanel diagram/>
                    </div>
                </div>
            </Show>
        </div>
    }
}
