use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;

use seismap_shared::layers::{LayerRegistry, MapLayer};
use seismap_shared::models::{collect_station_layer, StationMarker};
use seismap_shared::overlay::{parse_feature_collection, style_overlay};
use seismap_shared::style::{fault_style, StyleProvider};

use crate::api;
use crate::components::map_view::MapView;
use crate::components::north_arrow::NorthArrow;
use crate::coords::INITIAL_VIEW;

/// Fault traces shipped with the application; rendered with the fixed
/// preset whether or not the remote resources load.
const FAULT_LINES_GEOJSON: &str = include_str!("../data/faults.geojson");

#[component]
pub fn StationMap() -> Element {
    // The embedded fault overlay exists before any fetch resolves
    let mut registry = use_signal(|| {
        let mut layers = LayerRegistry::new();
        match parse_feature_collection(FAULT_LINES_GEOJSON) {
            Ok(collection) => {
                let overlay = style_overlay(&collection, &StyleProvider::Fixed(fault_style()));
                layers.add(MapLayer::Overlay(overlay));
            }
            Err(e) => error!("fault overlay unavailable: {e}"),
        }
        layers
    });
    let view = use_signal(|| INITIAL_VIEW);
    let open_popup = use_signal(|| None::<StationMarker>);

    // Station markers and depth-colored event polygons load independently.
    // They write disjoint layers, so completion order does not matter.
    let _stations = use_resource(move || async move {
        match api::fetch_stations().await {
            Ok(collection) => {
                let (markers, labels, skipped) = collect_station_layer(&collection);
                for code in &skipped {
                    warn!("skipping invalid station: {code}");
                }
                registry.write().add(MapLayer::Stations { markers, labels });
            }
            Err(e) => error!("error loading stations: {e}"),
        }
    });

    let _event_depths = use_resource(move || async move {
        match api::fetch_event_depths().await {
            Ok(collection) => {
                let overlay = style_overlay(&collection, &StyleProvider::DepthColored);
                registry.write().add(MapLayer::Overlay(overlay));
            }
            Err(e) => error!("error loading event depths: {e}"),
        }
    });

    rsx! {
        div { class: "map-page",
            MapView {
                registry: registry,
                view: view,
                open_popup: open_popup,
            }
            NorthArrow {}
        }
    }
}
