//! Web Mercator projection and slippy-tile math for the basemap grid.

use std::f64::consts::PI;

/// Basemap tile edge length in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the Web Mercator projection.
pub const LAT_MAX: f64 = 85.051_128_78;

/// Side length of the world in pixels at an integer zoom level.
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom)
}

/// Clamp latitude to the projectable range.
pub fn clamp_lat(lat: f64) -> f64 {
    lat.clamp(-LAT_MAX, LAT_MAX)
}

/// Normalize longitude into [-180, 180].
pub fn normalize_lon(mut lon: f64) -> f64 {
    while lon > 180.0 {
        lon -= 360.0;
    }
    while lon < -180.0 {
        lon += 360.0;
    }
    lon
}

/// Project geographic coordinates to world pixels at `zoom`.
pub fn lat_lon_to_world(lat: f64, lon: f64, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let lat_rad = clamp_lat(lat).to_radians();
    let x = (normalize_lon(lon) + 180.0) / 360.0 * size;
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

/// Inverse of [`lat_lon_to_world`].
pub fn world_to_lat_lon(x: f64, y: f64, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let lon = x / size * 360.0 - 180.0;
    let n = PI * (1.0 - 2.0 * y / size);
    let lat = n.sinh().atan().to_degrees();
    (lat, lon)
}

/// One slippy-map tile address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

/// Tiles covering a `width` x `height` viewport centered on world position
/// `(center_x, center_y)`, each with its screen top-left corner.
///
/// Columns wrap across the antimeridian; rows outside the projection are
/// dropped.
pub fn visible_tiles(
    center_x: f64,
    center_y: f64,
    zoom: u8,
    width: f64,
    height: f64,
) -> Vec<(TileCoord, f64, f64)> {
    let tiles_per_side = i64::from(1u32 << zoom);
    let left = center_x - width / 2.0;
    let top = center_y - height / 2.0;
    let first_col = (left / TILE_SIZE).floor() as i64;
    let first_row = (top / TILE_SIZE).floor() as i64;
    let last_col = ((left + width) / TILE_SIZE).floor() as i64;
    let last_row = ((top + height) / TILE_SIZE).floor() as i64;

    let mut tiles = Vec::new();
    for row in first_row..=last_row {
        if row < 0 || row >= tiles_per_side {
            continue;
        }
        for col in first_col..=last_col {
            let wrapped = col.rem_euclid(tiles_per_side) as u32;
            let screen_x = col as f64 * TILE_SIZE - left;
            let screen_y = row as f64 * TILE_SIZE - top;
            tiles.push((
                TileCoord {
                    x: wrapped,
                    y: row as u32,
                    z: zoom,
                },
                screen_x,
                screen_y,
            ));
        }
    }
    tiles
}
