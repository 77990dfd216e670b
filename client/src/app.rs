use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::bridge;
use crate::marker_info::{MarkerInfo, MarkerInfoState};

/// Root component: owns the widget state handle and performs the initial
/// marker snapshot load. All later updates are pushed by the map controller
/// through the bridge.
#[component]
pub fn App() -> impl IntoView {
    let info = MarkerInfoState::new();
    provide_context(info);

    // Register the JS-facing entry points before any controller call can land.
    bridge::install(info);

    Effect::new(move || {
        spawn_local(async move {
            match api::fetch_markers().await {
                Ok(markers) => info.update_stats(markers),
                Err(err) => {
                    web_sys::console::error_1(&format!("marker load failed: {err}").into());
                }
            }
        });
    });

    view! { <MarkerInfo /> }
}
