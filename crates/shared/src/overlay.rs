use geojson::{FeatureCollection, GeoJson, Value};

use crate::style::{PathStyle, StyleProvider};

/// Whether a styled path draws closed (polygon ring) or open (line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Ring,
    Line,
}

/// One renderable overlay feature: lat/lon paths plus a resolved style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledFeature {
    pub kind: PathKind,
    /// Each path is a sequence of (lat, lon) vertices.
    pub paths: Vec<Vec<(f64, f64)>>,
    pub style: PathStyle,
    pub depth: Option<f64>,
}

/// A styled geographic overlay layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeoOverlay {
    pub features: Vec<StyledFeature>,
}

/// Parse a GeoJSON document into a feature collection.
pub fn parse_feature_collection(json: &str) -> Result<FeatureCollection, String> {
    match json.parse::<GeoJson>() {
        Ok(GeoJson::FeatureCollection(collection)) => Ok(collection),
        Ok(_) => Err("expected a FeatureCollection document".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Numeric DEPTH property of a feature, if present.
fn feature_depth(feature: &geojson::Feature) -> Option<f64> {
    feature.properties.as_ref()?.get("DEPTH")?.as_f64()
}

/// GeoJSON positions are `[lon, lat, ...]`; rendering wants (lat, lon).
fn positions_to_path(positions: &[Vec<f64>]) -> Vec<(f64, f64)> {
    positions
        .iter()
        .filter(|p| p.len() >= 2)
        .map(|p| (p[1], p[0]))
        .collect()
}

/// Convert a feature collection into a styled overlay.
///
/// Polygon and line geometries render; point and other geometry kinds are
/// skipped. Each feature's style comes from the provider, consulting the
/// feature's DEPTH property where the provider is data-driven.
pub fn style_overlay(collection: &FeatureCollection, provider: &StyleProvider) -> GeoOverlay {
    let mut features = Vec::new();
    for feature in &collection.features {
        let Some(geometry) = feature.geometry.as_ref() else {
            continue;
        };
        let (kind, paths) = match &geometry.value {
            Value::Polygon(rings) => (
                PathKind::Ring,
                rings.iter().map(|r| positions_to_path(r)).collect(),
            ),
            Value::MultiPolygon(polygons) => (
                PathKind::Ring,
                polygons
                    .iter()
                    .flatten()
                    .map(|r| positions_to_path(r))
                    .collect(),
            ),
            Value::LineString(line) => (PathKind::Line, vec![positions_to_path(line)]),
            Value::MultiLineString(lines) => (
                PathKind::Line,
                lines.iter().map(|l| positions_to_path(l)).collect(),
            ),
            _ => continue,
        };

        let depth = feature_depth(feature);
        features.push(StyledFeature {
            kind,
            paths,
            style: provider.style_for(depth),
            depth,
        });
    }
    GeoOverlay { features }
}
