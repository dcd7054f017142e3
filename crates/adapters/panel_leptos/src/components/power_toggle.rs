//! Power toggle — a checkbox mirroring the device's power flag.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::debounce::debounce_leading;

/// Checkbox that requests a power toggle on click.
///
/// The checked state follows the last polled device state; a click flips the
/// checkbox optimistically and fires a `toggle_power` request through the
/// debounced dispatcher, so rapid clicking sends at most one request per
/// quiet window.
#[component]
pub fn PowerToggle(checked: ReadSignal<bool>) -> impl IntoView {
    let dispatch = debounce_leading(|| {
        spawn_local(async {
            if let Err(err) = api::toggle_power().await {
                leptos::logging::warn!("toggle_power request failed: {err}");
            }
        });
    });

    view! {
        <label class="control power-control">
            <input
                id="powerToggle"
                type="checkbox"
                prop:checked=move || checked.get()
                on:click=move |_| dispatch()
            />
            <span>"Power"</span>
        </label>
    }
}
