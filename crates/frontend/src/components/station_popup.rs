use dioxus::prelude::*;

use seismap_shared::models::{StationMarker, PHASE_PICKS, P_WAVE_PICKS, S_WAVE_PICKS};

/// Popup panel for one station, anchored above its marker. `x`/`y` are the
/// marker's container-pixel position.
#[component]
pub fn StationPopup(marker: StationMarker, x: f64, y: f64, on_close: EventHandler<()>) -> Element {
    let detail_url = marker.detail_url();
    let style = format!("left:{x}px;top:{}px;", y - 24.0);

    rsx! {
        div { class: "station-popup", style: "{style}",
            button {
                class: "popup-close",
                "aria-label": "Close popup",
                onclick: move |_| on_close.call(()),
                "×"
            }
            b { "{marker.name}" }
            br {}
            "Network: {marker.code}"
            br {}
            if let Some(elevation) = marker.elevation {
                "Elevation: {elevation} m"
                br {}
            }
            "Phase: {PHASE_PICKS} picks"
            br {}
            "P-wave: {P_WAVE_PICKS} picks"
            br {}
            "S-wave: {S_WAVE_PICKS} picks"
            br {}
            a { target: "_blank", href: "{detail_url}", "View details" }
        }
    }
}
