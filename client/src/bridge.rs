use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use pinmap_shared::Marker;

use crate::marker_info::MarkerInfoState;

thread_local! {
    static WIDGET: RefCell<Option<MarkerInfoState>> = const { RefCell::new(None) };
}

/// Called from `App` on mount; a remount replaces the handle.
pub(crate) fn install(state: MarkerInfoState) {
    WIDGET.with(|slot| *slot.borrow_mut() = Some(state));
}

fn with_widget(f: impl FnOnce(MarkerInfoState)) {
    WIDGET.with(|slot| {
        if let Some(state) = *slot.borrow() {
            f(state);
        }
    });
}

/// Replace the marker snapshot behind the stats block.
///
/// Entry point for the host page's map controller. Calls before the app is
/// mounted are dropped.
#[wasm_bindgen(js_name = updateStats)]
pub fn update_stats(markers: JsValue) -> Result<(), JsValue> {
    let markers: Vec<Marker> = serde_wasm_bindgen::from_value(markers).map_err(JsValue::from)?;
    with_widget(|state| state.update_stats(markers));
    Ok(())
}

/// Replace the current selection; `null` or `undefined` clears it and hides
/// the detail panel.
#[wasm_bindgen(js_name = updateCurrentMarker)]
pub fn update_current_marker(marker: JsValue) -> Result<(), JsValue> {
    let marker: Option<Marker> = if marker.is_null() || marker.is_undefined() {
        None
    } else {
        Some(serde_wasm_bindgen::from_value(marker).map_err(JsValue::from)?)
    };
    with_widget(|state| state.update_current_marker(marker));
    Ok(())
}
