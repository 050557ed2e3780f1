//! Viewer toolbar: back navigation, content zoom, print.

use leptos::prelude::*;

/// Content zoom limits for the document pane, in percent.
const MIN_CONTENT_ZOOM: f64 = 50.0;
const MAX_CONTENT_ZOOM: f64 = 200.0;
const CONTENT_ZOOM_STEP: f64 = 10.0;

/// Viewer toolbar. `zoom` is the document pane's zoom percentage.
#[component]
pub fn Toolbar(zoom: RwSignal<f64>, on_back: Callback<()>) -> impl IntoView {
    let zoom_in = move |_| {
        zoom.update(|z| *z = (*z + CONTENT_ZOOM_STEP).min(MAX_CONTENT_ZOOM));
    };
    let zoom_out = move |_| {
        zoom.update(|z| *z = (*z - CONTENT_ZOOM_STEP).max(MIN_CONTENT_ZOOM));
    };

    let on_print = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.print();
            }
        }
    };

    view! {
        <div class="viewer-toolbar">
            <button class="btn" on:click=move |_| on_back.run(())>
                "← Back"
            </button>
            <div class="viewer-toolbar__zoom">
                <button class="btn" title="Zoom out" on:click=zoom_out>
                    "−"
                </button>
                <span class="viewer-toolbar__zoom-level">
                    {move || format!("{:.0}%", zoom.get())}
                </span>
                <button class="btn" title="Zoom in" on:click=zoom_in>
                    "+"
                </button>
            </div>
            <button class="btn" title="Print" on:click=on_print>
                "Print"
            </button>
        </div>
    }
}
