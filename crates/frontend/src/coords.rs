use seismap_shared::projection;

/// Geographic view state of the map canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

/// Initial view over the monitoring network.
pub const INITIAL_VIEW: ViewState = ViewState {
    center_lat: -2.5,
    center_lon: 120.0,
    zoom: 6,
};

/// Basemap tile service zoom limits.
pub const ZOOM_MIN: u8 = 2;
pub const ZOOM_MAX: u8 = 16;

impl ViewState {
    /// World-pixel position of the view center at the current zoom.
    pub fn center_world(&self) -> (f64, f64) {
        projection::lat_lon_to_world(self.center_lat, self.center_lon, self.zoom)
    }
}

/// Project geographic coordinates to container pixels.
pub fn lat_lon_to_screen(
    lat: f64,
    lon: f64,
    view: &ViewState,
    width: f64,
    height: f64,
) -> (f64, f64) {
    let (cx, cy) = view.center_world();
    let (x, y) = projection::lat_lon_to_world(lat, lon, view.zoom);
    (x - cx + width / 2.0, y - cy + height / 2.0)
}

/// Convert a container-pixel position back to geographic coordinates.
pub fn screen_to_lat_lon(
    x: f64,
    y: f64,
    view: &ViewState,
    width: f64,
    height: f64,
) -> (f64, f64) {
    let (cx, cy) = view.center_world();
    projection::world_to_lat_lon(cx + x - width / 2.0, cy + y - height / 2.0, view.zoom)
}

/// Pan the view by a screen-pixel delta (drag gesture).
pub fn pan_view(view: &ViewState, dx: f64, dy: f64) -> ViewState {
    let (cx, cy) = view.center_world();
    let (lat, lon) = projection::world_to_lat_lon(cx - dx, cy - dy, view.zoom);
    ViewState {
        center_lat: projection::clamp_lat(lat),
        center_lon: projection::normalize_lon(lon),
        zoom: view.zoom,
    }
}

/// Step the zoom by one level, keeping the geographic point under the
/// cursor at the same screen position.
pub fn zoom_view(
    view: &ViewState,
    zoom_in: bool,
    cursor_x: f64,
    cursor_y: f64,
    width: f64,
    height: f64,
) -> ViewState {
    let new_zoom = if zoom_in {
        (view.zoom + 1).min(ZOOM_MAX)
    } else {
        view.zoom.saturating_sub(1).max(ZOOM_MIN)
    };
    if new_zoom == view.zoom {
        return *view;
    }

    // The geographic point under the cursor before the step must project
    // back to the cursor afterwards.
    let (anchor_lat, anchor_lon) = screen_to_lat_lon(cursor_x, cursor_y, view, width, height);
    let (ax, ay) = projection::lat_lon_to_world(anchor_lat, anchor_lon, new_zoom);
    let (lat, lon) = projection::world_to_lat_lon(
        ax - cursor_x + width / 2.0,
        ay - cursor_y + height / 2.0,
        new_zoom,
    );
    ViewState {
        center_lat: projection::clamp_lat(lat),
        center_lon: projection::normalize_lon(lon),
        zoom: new_zoom,
    }
}

/// Get the bounding client rect of an element by id.
pub fn container_rect(container_id: &str) -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    Some(element.get_bounding_client_rect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 960.0;
    const H: f64 = 600.0;

    #[test]
    fn test_center_projects_to_screen_center() {
        let (x, y) = lat_lon_to_screen(-2.5, 120.0, &INITIAL_VIEW, W, H);
        assert!((x - W / 2.0).abs() < 1e-6);
        assert!((y - H / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_screen_round_trip() {
        let (x, y) = lat_lon_to_screen(-8.64, 122.24, &INITIAL_VIEW, W, H);
        let (lat, lon) = screen_to_lat_lon(x, y, &INITIAL_VIEW, W, H);
        assert!((lat - (-8.64)).abs() < 1e-9);
        assert!((lon - 122.24).abs() < 1e-9);
    }

    #[test]
    fn test_east_is_right_and_north_is_up() {
        let (east_x, _) = lat_lon_to_screen(-2.5, 121.0, &INITIAL_VIEW, W, H);
        let (_, north_y) = lat_lon_to_screen(-1.5, 120.0, &INITIAL_VIEW, W, H);
        assert!(east_x > W / 2.0);
        assert!(north_y < H / 2.0);
    }

    #[test]
    fn test_pan_moves_center_opposite_to_drag() {
        // Dragging the map east (positive dx) reveals territory to the west
        let panned = pan_view(&INITIAL_VIEW, 100.0, 0.0);
        assert!(panned.center_lon < INITIAL_VIEW.center_lon);
        assert_eq!(panned.zoom, INITIAL_VIEW.zoom);

        let panned = pan_view(&INITIAL_VIEW, 0.0, -50.0);
        assert!(panned.center_lat < INITIAL_VIEW.center_lat);
    }

    #[test]
    fn test_pan_round_trip_restores_center() {
        let panned = pan_view(&pan_view(&INITIAL_VIEW, 120.0, -80.0), -120.0, 80.0);
        assert!((panned.center_lat - INITIAL_VIEW.center_lat).abs() < 1e-9);
        assert!((panned.center_lon - INITIAL_VIEW.center_lon).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_in_keeps_cursor_anchor_fixed() {
        let cursor = (700.0, 150.0);
        let (anchor_lat, anchor_lon) = screen_to_lat_lon(cursor.0, cursor.1, &INITIAL_VIEW, W, H);
        let zoomed = zoom_view(&INITIAL_VIEW, true, cursor.0, cursor.1, W, H);
        assert_eq!(zoomed.zoom, INITIAL_VIEW.zoom + 1);
        let (x, y) = lat_lon_to_screen(anchor_lat, anchor_lon, &zoomed, W, H);
        assert!((x - cursor.0).abs() < 1e-6);
        assert!((y - cursor.1).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_out_keeps_cursor_anchor_fixed() {
        let cursor = (200.0, 420.0);
        let (anchor_lat, anchor_lon) = screen_to_lat_lon(cursor.0, cursor.1, &INITIAL_VIEW, W, H);
        let zoomed = zoom_view(&INITIAL_VIEW, false, cursor.0, cursor.1, W, H);
        assert_eq!(zoomed.zoom, INITIAL_VIEW.zoom - 1);
        let (x, y) = lat_lon_to_screen(anchor_lat, anchor_lon, &zoomed, W, H);
        assert!((x - cursor.0).abs() < 1e-6);
        assert!((y - cursor.1).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_clamps_at_limits() {
        let mut view = INITIAL_VIEW;
        view.zoom = ZOOM_MAX;
        let zoomed = zoom_view(&view, true, W / 2.0, H / 2.0, W, H);
        assert_eq!(zoomed, view);

        view.zoom = ZOOM_MIN;
        let zoomed = zoom_view(&view, false, W / 2.0, H / 2.0, W, H);
        assert_eq!(zoomed, view);
    }
}
