//! Section progress panel shown beside the document.

use leptos::prelude::*;

use crate::net::types::{Section, SectionStatus};
use crate::state::viewer::{SectionsState, SyncStatus};

/// Document-sections panel: one row per section with its completion state
/// and learning goals.
#[component]
pub fn SectionsPanel(sections: RwSignal<SectionsState>) -> impl IntoView {
    view! {
        <div class="sections-panel">
            <div class="sections-panel__header">"Document Sections"</div>
            <div class="sections-panel__list">
                {move || {
                    let state = sections.get();
                    match state.status {
                        SyncStatus::Failed(message) => {
                            view! { <p class="sections-panel__error">{message}</p> }.into_any()
                        }
                        _ if state.sections.is_empty() => {
                            view! { <p class="sections-panel__note">"Loading sections..."</p> }
                                .into_any()
                        }
                        _ => state
                            .sections
                            .into_iter()
                            .map(|section| view! { <SectionRow section/> })
                            .collect::<Vec<_>>()
                            .into_any(),
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn SectionRow(section: Section) -> impl IntoView {
    let (marker, modifier) = match section.status {
        SectionStatus::Waiting => ("○", "waiting"),
        SectionStatus::TextComplete => ("◐", "text-complete"),
        SectionStatus::Complete => ("●", "complete"),
    };
    let goals = section.learning_goals;

    view! {
        <div class=format!("sections-panel__row sections-panel__row--{modifier}")>
            <span class="sections-panel__marker">{marker}</span>
            <div class="sections-panel__body">
                <span class="sections-panel__title">{section.title}</span>
                {(!goals.is_empty())
                    .then(|| {
                        view! {
                            <ul class="sections-panel__goals">
                                {goals
                                    .into_iter()
                                    .map(|goal| view! { <li>{goal}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                    })}
            </div>
        </div>
    }
}
