//! # glimmer-panel-leptos
//!
//! Client-side rendered control panel for the glimmer light, compiled to
//! wasm and served as static assets by the HTTP adapter.
//!
//! Two controls: a power toggle and a color picker. The panel reflects the
//! device state fetched from `./state` and pushes user changes back through
//! fire-and-forget requests, rate-limited by a leading-edge debounce so the
//! first change is sent immediately and rapid follow-ups (e.g. dragging the
//! color slider) are suppressed.

use leptos::prelude::*;
use leptos::task::spawn_local;

pub mod api;
mod components;
pub mod debounce;
pub mod poll;

use components::{ColorPicker, PowerToggle};
use glimmer_domain::light::LightState;

/// The page's query string (`window.location.search`), empty outside a
/// browser context.
fn location_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Root application component.
///
/// Fetches the device state once on mount and, when the page was loaded with
/// a `watch` query parameter, keeps refreshing it every second for the
/// lifetime of the page.
#[component]
pub fn App() -> impl IntoView {
    let initial = LightState::default();
    let (power, set_power) = signal(initial.power);
    let (color_hex, set_color_hex) = signal(initial.color.to_hex());

    let refresh = move || async move {
        match api::fetch_state().await {
            Ok(state) => {
                set_power.set(state.power);
                set_color_hex.set(state.color.to_hex());
            }
            Err(err) => leptos::logging::warn!("failed to refresh state: {err}"),
        }
    };

    spawn_local(refresh());

    if poll::watch_requested(&location_query()) {
        poll::start_polling(refresh);
    }

    view! {
        <main class="panel">
            <h1>"glimmer"</h1>
            <PowerToggle checked=power/>
            <ColorPicker value=color_hex/>
        </main>
    }
}
