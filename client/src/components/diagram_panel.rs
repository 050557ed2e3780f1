//! Concept-map panel: related topics plus the rendered diagram with
//! pan/zoom.
//!
//! SYSTEM CONTEXT
//! ==============
//! The diagram definition is rendered once per result by the external
//! diagramming library; pan and zoom are applied as a CSS transform owned
//! by a `viewport::camera::Camera` signal. During a drag the transform is
//! written straight to the element for immediate feedback and reconciled
//! into the signal on pointer release.

use leptos::prelude::*;
use viewport::camera::{Camera, Point};

use crate::state::viewer::DiagramState;

#[cfg(feature = "hydrate")]
mod mermaid_js {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        /// `mermaid.render(id, definition)` from the page-level script.
        /// Resolves to an object carrying the rendered `svg` markup.
        #[wasm_bindgen(js_namespace = mermaid, catch)]
        pub fn render(id: &str, definition: &str) -> Result<js_sys::Promise, JsValue>;
    }
}

#[cfg(feature = "hydrate")]
async fn render_diagram(definition: &str) -> Result<String, String> {
    let promise = mermaid_js::render("concept-map-svg", definition)
        .map_err(|_| "diagram library unavailable".to_owned())?;
    let rendered = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| format!("{e:?}"))?;
    js_sys::Reflect::get(&rendered, &wasm_bindgen::JsValue::from_str("svg"))
        .ok()
        .and_then(|v| v.as_string())
        .ok_or_else(|| "diagram library returned no svg".to_owned())
}

/// Concept-map panel. Hidden until a diagram result or an in-flight
/// generation exists.
#[component]
pub fn DiagramPanel(diagram: RwSignal<DiagramState>) -> impl IntoView {
    let camera = RwSignal::new(Camera::default());
    let surface_ref = NodeRef::<leptos::html::Div>::new();
    let content_ref = NodeRef::<leptos::html::Div>::new();
    // (camera at grab time, pointer position at grab time)
    let drag = StoredValue::new(None::<(Camera, Point)>);

    // Render the definition once per stored result.
    #[cfg(feature = "hydrate")]
    {
        let rendered = StoredValue::new(false);
        Effect::new(move || {
            let Some(result) = diagram.get().result else {
                return;
            };
            let Some(host) = content_ref.get() else {
                return;
            };
            if rendered.get_value() {
                return;
            }
            rendered.set_value(true);
            leptos::task::spawn_local(async move {
                match render_diagram(&result.diagram).await {
                    Ok(svg) => host.set_inner_html(&svg),
                    Err(e) => {
                        leptos::logging::warn!("diagram render failed: {e}");
                        host.set_inner_html(
                            r#"<p class="diagram-panel__error">The concept map could not be rendered.</p>"#,
                        );
                    }
                }
            });
        });
    }

    // Write a camera straight to the element, bypassing the signal. Used
    // for per-pointer-move feedback during a drag.
    let apply_direct = move |cam: Camera| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(host) = content_ref.get_untracked() {
                let _ = host.style().set_property("transform", &cam.css_transform());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = cam;
        }
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        let start = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        drag.set_value(Some((camera.get_untracked(), start)));
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let Some((base, start)) = drag.get_value() else {
            return;
        };
        let current = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        apply_direct(base.dragged(start, current));
    };

    let end_drag = move |ev: leptos::ev::PointerEvent| {
        let Some((base, start)) = drag.get_value() else {
            return;
        };
        drag.set_value(None);
        let current = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        camera.set(base.dragged(start, current));
    };

    let on_wheel = move |ev: leptos::ev::WheelEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let Some(surface) = surface_ref.get_untracked() else {
                return;
            };
            let rect = surface.get_bounding_client_rect();
            let cursor = Point::new(
                f64::from(ev.client_x()) - rect.left(),
                f64::from(ev.client_y()) - rect.top(),
            );
            camera.update(|c| c.wheel_zoom(ev.delta_y() < 0.0, cursor));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="diagram-panel">
            {move || {
                let state = diagram.get();
                state
                    .result
                    .map(|result| {
                        view! {
                            {(!result.related_topics.is_empty())
                                .then(|| {
                                    view! {
                                        <div class="diagram-panel__topics">
                                            <h3>"Related Topics"</h3>
                                            <div class="diagram-panel__topic-list">
                                                {result
                                                    .related_topics
                                                    .iter()
                                                    .map(|topic| {
                                                        view! {
                                                            <span class="diagram-panel__topic">
                                                                {topic.clone()}
                                                            </span>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        </div>
                                    }
                                })}
                            <div class="diagram-panel__map">
                                <div class="diagram-panel__controls">
                                    <h3>"Concept Map"</h3>
                                    <div class="diagram-panel__buttons">
                                        <button
                                            class="btn"
                                            title="Zoom out"
                                            on:click=move |_| camera.update(Camera::zoom_out)
                                        >
                                            "−"
                                        </button>
                                        <button
                                            class="btn"
                                            title="Reset view"
                                            on:click=move |_| camera.set(Camera::default())
                                        >
                                            {move || format!("{:.0}%", camera.get().zoom)}
                                        </button>
                                        <button
                                            class="btn"
                                            title="Zoom in"
                                            on:click=move |_| camera.update(Camera::zoom_in)
                                        >
                                            "+"
                                        </button>
                                    </div>
                                </div>
                                <div
                                    class="diagram-panel__surface"
                                    node_ref=surface_ref
                                    on:pointerdown=on_pointer_down
                                    on:pointermove=on_pointer_move
                                    on:pointerup=end_drag
                                    on:pointerleave=end_drag
                                    on:wheel=on_wheel
                                >
                                    <div
                                        class="diagram-panel__content"
                                        node_ref=content_ref
                                        style:transform=move || camera.get().css_transform()
                                        style:transform-origin="top left"
                                    ></div>
                                </div>
                            </div>
                        }
                    })
            }}
            {move || {
                diagram
                    .get()
                    .in_flight
                    .then(|| {
                        view! {
                            <div class="diagram-panel__pending">
                                "Generating concept map..."
                            </div>
                        }
                    })
            }}
        </div>
    }
}
