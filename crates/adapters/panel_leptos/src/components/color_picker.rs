//! Color picker — a color input mirroring the device's RGB color.

use leptos::prelude::*;
use leptos::task::spawn_local;

use glimmer_domain::color::Rgb;

use crate::api;
use crate::debounce::debounce_leading;

/// Color input that requests a color change on input.
///
/// The value follows the last polled device state. On input the *current*
/// `#rrggbb` value is read back from the control at dispatch time (not from
/// the triggering event — suppressed events would otherwise be lost) and
/// sent as path-encoded components. Dragging the picker produces a stream of
/// input events; the debounced dispatcher forwards the first one immediately
/// and drops the rest of the burst.
#[component]
pub fn ColorPicker(value: ReadSignal<String>) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let dispatch = debounce_leading(move || {
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        match input.value().parse::<Rgb>() {
            Ok(color) => spawn_local(async move {
                if let Err(err) = api::set_color(color).await {
                    leptos::logging::warn!("set_color request failed: {err}");
                }
            }),
            Err(err) => leptos::logging::warn!("ignoring malformed color value: {err}"),
        }
    });

    view! {
        <label class="control color-control">
            <input
                node_ref=input_ref
                id="colorPicker"
                type="color"
                prop:value=move || value.get()
                on:input=move |_| dispatch()
            />
            <span>"Color"</span>
        </label>
    }
}
