//! Event-stream consumer for the live generation flow.
//!
//! The backend emits progress messages over Server-Sent Events while an
//! explanation is being generated; payloads are matched against known phase
//! markers to drive the search page's phase indicator. All of this is gated
//! behind `hydrate` since `EventSource` only exists in the browser.

#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "hydrate")]
use crate::state::generation::{GenerationPhase, GenerationState, phase_for_message};

/// An open generation stream. The browser `EventSource` reconnects on
/// transient errors by itself; dropping this handle closes the stream and
/// releases the message callbacks.
#[cfg(feature = "hydrate")]
pub struct GenerationStream {
    source: web_sys::EventSource,
    _on_message: Closure<dyn FnMut(web_sys::MessageEvent)>,
    _on_error: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(feature = "hydrate")]
impl GenerationStream {
    pub fn close(&self) {
        self.source.close();
    }
}

#[cfg(feature = "hydrate")]
impl Drop for GenerationStream {
    fn drop(&mut self) {
        self.source.close();
    }
}

/// Open the generation event stream and feed phase updates into
/// `generation`.
///
/// # Errors
///
/// Returns an error string if the browser refuses to open the stream
/// (malformed URL or blocked request).
#[cfg(feature = "hydrate")]
pub fn open_generation_stream(
    url: &str,
    generation: RwSignal<GenerationState>,
) -> Result<GenerationStream, String> {
    let source =
        web_sys::EventSource::new(url).map_err(|_| "could not open event stream".to_owned())?;

    let on_message = Closure::wrap(Box::new(move |ev: web_sys::MessageEvent| {
        let Some(data) = ev.data().as_string() else {
            return;
        };
        if let Some(phase) = phase_for_message(&data) {
            generation.update(|g| g.phase = phase);
        }
    }) as Box<dyn FnMut(web_sys::MessageEvent)>);
    source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

    let source_for_error = source.clone();
    let on_error = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
        // Transient drops reconnect automatically; only a closed stream
        // while a generation is still running is surfaced as a failure.
        if source_for_error.ready_state() == web_sys::EventSource::CLOSED {
            generation.update(|g| {
                if g.phase.is_running() {
                    g.phase =
                        GenerationPhase::Failed("connection to the generator was lost".to_owned());
                }
            });
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    source.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    Ok(GenerationStream { source, _on_message: on_message, _on_error: on_error })
}
