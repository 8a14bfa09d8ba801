use dioxus::html::geometry::WheelDelta;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

use seismap_shared::layers::{LayerRegistry, MapLayer};
use seismap_shared::models::{StationLabel, StationMarker};
use seismap_shared::overlay::{GeoOverlay, PathKind};
use seismap_shared::projection::{visible_tiles, TileCoord};

use crate::components::station_popup::StationPopup;
use crate::coords::{self, ViewState, INITIAL_VIEW};

pub const MAP_CONTAINER_ID: &str = "stations-map";

/// Drag threshold in pixels; movement below this is treated as a click.
const DRAG_THRESHOLD: f64 = 3.0;

/// Distance threshold in pixels for resolving a click to a station marker.
const MARKER_HIT_THRESHOLD: f64 = 14.0;

/// Canvas dimensions assumed before the container has been measured.
const REFERENCE_WIDTH: f64 = 960.0;
const REFERENCE_HEIGHT: f64 = 600.0;

// --- Station glyph geometry (triangle anchored at its base center) ---

const MARKER_COLOR: &str = "#344CB7";
const MARKER_HALF_WIDTH: f64 = 10.0;
const MARKER_HEIGHT: f64 = 20.0;

/// Vertical offset of the permanent code label baseline below the anchor.
const LABEL_BASELINE_OFFSET: f64 = 20.0;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Current canvas size, falling back to the reference dimensions until the
/// container exists.
fn canvas_size() -> (f64, f64) {
    match coords::container_rect(MAP_CONTAINER_ID) {
        Some(rect) if rect.width() > 0.0 => (rect.width(), rect.height()),
        _ => (REFERENCE_WIDTH, REFERENCE_HEIGHT),
    }
}

// ---------------------------------------------------------------------------
// Basemap tiles
// ---------------------------------------------------------------------------

/// Esri World Ocean basemap tile URL.
fn basemap_tile_url(tile: &TileCoord) -> String {
    format!(
        "https://server.arcgisonline.com/ArcGIS/rest/services/Ocean/World_Ocean_Base/MapServer/tile/{}/{}/{}",
        tile.z, tile.y, tile.x
    )
}

const BASEMAP_ATTRIBUTION: &str = "Esri, GEBCO, NOAA, National Geographic";

// ---------------------------------------------------------------------------
// SVG builders (pure, easily testable)
// ---------------------------------------------------------------------------

/// SVG path data for one lat/lon path at the current view.
fn path_data(path: &[(f64, f64)], view: &ViewState, width: f64, height: f64, close: bool) -> String {
    let mut data = String::with_capacity(path.len() * 16);
    for (i, (lat, lon)) in path.iter().enumerate() {
        let (x, y) = coords::lat_lon_to_screen(*lat, *lon, view, width, height);
        let op = if i == 0 { 'M' } else { 'L' };
        data.push_str(&format!("{op}{x:.1} {y:.1} "));
    }
    if close {
        data.push('Z');
    }
    data
}

fn build_overlay_paths(
    svg: &mut String,
    overlay: &GeoOverlay,
    view: &ViewState,
    width: f64,
    height: f64,
) {
    for feature in &overlay.features {
        let style = &feature.style;
        let close = feature.kind == PathKind::Ring;
        let fill = if close {
            format!(
                r#"fill="{}" fill-opacity="{}""#,
                style.fill(),
                style.fill_opacity
            )
        } else {
            r#"fill="none""#.to_string()
        };
        for path in &feature.paths {
            if path.is_empty() {
                continue;
            }
            let d = path_data(path, view, width, height, close);
            svg.push_str(&format!(
                r#"<path d="{d}" stroke="{}" stroke-width="{}" stroke-opacity="{}" {fill}/>"#,
                style.color, style.weight, style.opacity
            ));
        }
    }
}

fn build_station_markers(
    svg: &mut String,
    markers: &[StationMarker],
    view: &ViewState,
    width: f64,
    height: f64,
) {
    for marker in markers {
        let (x, y) = coords::lat_lon_to_screen(marker.lat, marker.lon, view, width, height);
        let left = x - MARKER_HALF_WIDTH;
        let right = x + MARKER_HALF_WIDTH;
        let top = y - MARKER_HEIGHT;
        svg.push_str(&format!(
            r#"<polygon points="{left:.1},{y:.1} {right:.1},{y:.1} {x:.1},{top:.1}" fill="{MARKER_COLOR}"><title>{}</title></polygon>"#,
            marker.name
        ));
    }
}

fn build_station_labels(
    svg: &mut String,
    labels: &[StationLabel],
    view: &ViewState,
    width: f64,
    height: f64,
) {
    for label in labels {
        let (x, y) = coords::lat_lon_to_screen(label.lat, label.lon, view, width, height);
        let baseline = y + LABEL_BASELINE_OFFSET;
        svg.push_str(&format!(
            r#"<text x="{x:.1}" y="{baseline:.1}" class="station-code" text-anchor="middle" font-size="12" font-weight="700">{}</text>"#,
            label.code
        ));
    }
}

/// Build the full overlay SVG content. Overlay paths draw first so station
/// markers and labels stay on top regardless of layer insertion order.
fn build_svg_content(
    registry: &LayerRegistry,
    view: &ViewState,
    width: f64,
    height: f64,
) -> String {
    let mut svg = String::with_capacity(8192);
    for layer in registry.iter() {
        if let MapLayer::Overlay(overlay) = layer {
            build_overlay_paths(&mut svg, overlay, view, width, height);
        }
    }
    for layer in registry.iter() {
        if let MapLayer::Stations { markers, labels } = layer {
            build_station_markers(&mut svg, markers, view, width, height);
            build_station_labels(&mut svg, labels, view, width, height);
        }
    }
    svg
}

// ---------------------------------------------------------------------------
// Marker hit testing
// ---------------------------------------------------------------------------

/// Find the index of the nearest position within `threshold` (Euclidean
/// distance).
fn find_nearest(positions: &[(f64, f64)], click: (f64, f64), threshold: f64) -> Option<usize> {
    let mut best_idx = None;
    let mut best_dist = threshold;
    for (i, pos) in positions.iter().enumerate() {
        let dx = pos.0 - click.0;
        let dy = pos.1 - click.1;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < best_dist {
            best_dist = dist;
            best_idx = Some(i);
        }
    }
    best_idx
}

/// Station markers with their current screen positions, in draw order.
fn stations_on_screen(
    registry: &LayerRegistry,
    view: &ViewState,
    width: f64,
    height: f64,
) -> Vec<(StationMarker, f64, f64)> {
    let mut out = Vec::new();
    for layer in registry.iter() {
        if let MapLayer::Stations { markers, .. } = layer {
            for marker in markers {
                let (x, y) =
                    coords::lat_lon_to_screen(marker.lat, marker.lon, view, width, height);
                out.push((marker.clone(), x, y));
            }
        }
    }
    out
}

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like
/// value.
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

#[component]
pub fn MapView(
    registry: Signal<LayerRegistry>,
    view: Signal<ViewState>,
    open_popup: Signal<Option<StationMarker>>,
) -> Element {
    // Mutable bindings for signal writes (Signal is Copy)
    let mut view = view;
    let mut open_popup = open_popup;

    // Drag state
    let mut is_dragging = use_signal(|| false);
    let mut did_drag = use_signal(|| false);
    let mut drag_start_x = use_signal(|| 0.0_f64);
    let mut drag_start_y = use_signal(|| 0.0_f64);

    // Overlay SVG only rebuilds when layers or the view change
    let svg_html = use_memo(move || {
        let reg = registry.read();
        let v = *view.read();
        let (w, h) = canvas_size();
        let content = build_svg_content(&reg, &v, w, h);
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" style="position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;z-index:10;">{content}</svg>"#
        )
    });

    let cur_view = *view.read();
    let (width, height) = canvas_size();
    let (center_x, center_y) = cur_view.center_world();
    let tiles: Vec<(String, f64, f64)> = visible_tiles(center_x, center_y, cur_view.zoom, width, height)
        .iter()
        .map(|(tile, sx, sy)| (basemap_tile_url(tile), *sx, *sy))
        .collect();

    // Popup anchor tracks the marker across pan and zoom
    let popup = open_popup.read().clone().map(|marker| {
        let (x, y) =
            coords::lat_lon_to_screen(marker.lat, marker.lon, &cur_view, width, height);
        (marker, x, y)
    });

    let container_class = if *is_dragging.read() {
        "map-container dragging"
    } else {
        "map-container"
    };

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "{container_class}",

            onwheel: move |evt: Event<WheelData>| {
                evt.prevent_default();
                let delta_y = wheel_delta_y(evt.data().delta());
                if delta_y == 0.0 {
                    return;
                }
                let Some(rect) = coords::container_rect(MAP_CONTAINER_ID) else {
                    return;
                };
                let client = evt.data().client_coordinates();
                let cx = client.x - rect.left();
                let cy = client.y - rect.top();
                let v = *view.read();
                view.set(coords::zoom_view(
                    &v,
                    delta_y < 0.0,
                    cx,
                    cy,
                    rect.width(),
                    rect.height(),
                ));
            },

            onmousedown: move |evt: Event<MouseData>| {
                if evt.trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                let client = evt.client_coordinates();
                is_dragging.set(true);
                did_drag.set(false);
                drag_start_x.set(client.x);
                drag_start_y.set(client.y);
            },

            onmousemove: move |evt: Event<MouseData>| {
                if !*is_dragging.read() {
                    return;
                }
                let client = evt.client_coordinates();
                let dx = client.x - *drag_start_x.read();
                let dy = client.y - *drag_start_y.read();

                if !*did_drag.read() && (dx.abs() > DRAG_THRESHOLD || dy.abs() > DRAG_THRESHOLD) {
                    did_drag.set(true);
                }
                if *did_drag.read() {
                    let v = *view.read();
                    view.set(coords::pan_view(&v, dx, dy));
                    drag_start_x.set(client.x);
                    drag_start_y.set(client.y);
                }
            },

            onmouseup: move |evt: Event<MouseData>| {
                let was_dragging = *is_dragging.read();
                let was_drag = *did_drag.read();
                is_dragging.set(false);

                // A mouseup without drag movement = a click
                if was_dragging && !was_drag {
                    let Some(rect) = coords::container_rect(MAP_CONTAINER_ID) else {
                        return;
                    };
                    let client = evt.client_coordinates();
                    let click = (client.x - rect.left(), client.y - rect.top());
                    let v = *view.read();
                    let stations = stations_on_screen(&registry.read(), &v, rect.width(), rect.height());
                    let positions: Vec<(f64, f64)> =
                        stations.iter().map(|(_, x, y)| (*x, *y)).collect();
                    match find_nearest(&positions, click, MARKER_HIT_THRESHOLD) {
                        Some(idx) => open_popup.set(Some(stations[idx].0.clone())),
                        None => open_popup.set(None),
                    }
                }
            },

            onmouseleave: move |_| {
                is_dragging.set(false);
            },

            ondoubleclick: move |evt: Event<MouseData>| {
                evt.prevent_default();
                view.set(INITIAL_VIEW);
            },

            // Basemap tile layer
            for (src, sx, sy) in tiles {
                img {
                    class: "basemap-tile",
                    src: "{src}",
                    style: "left:{sx}px;top:{sy}px;",
                    draggable: "false",
                }
            }

            // Data overlay
            div {
                dangerous_inner_html: "{svg_html}",
                style: "position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;",
            }

            if let Some((marker, px, py)) = popup {
                StationPopup {
                    marker: marker,
                    x: px,
                    y: py,
                    on_close: move |_| open_popup.set(None),
                }
            }

            div { class: "attribution", "{BASEMAP_ATTRIBUTION}" }
        }
    }
}
