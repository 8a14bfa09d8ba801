use serde::Deserialize;

/// Placeholder pick statistics shown in every station popup. The upstream
/// feed has no per-station pick counts yet, so these are fixed display
/// values.
pub const PHASE_PICKS: u32 = 9171;
pub const P_WAVE_PICKS: u32 = 8945;
pub const S_WAVE_PICKS: u32 = 226;

/// Station resource payload. The `features` array is mandatory; a payload
/// without it fails to decode, which aborts station layer composition.
#[derive(Debug, Clone, Deserialize)]
pub struct StationCollection {
    pub features: Vec<StationFeature>,
}

/// A single station record. Geometry and coordinates are optional so one
/// malformed record cannot poison the whole collection.
#[derive(Debug, Clone, Deserialize)]
pub struct StationFeature {
    #[serde(default)]
    pub geometry: Option<StationGeometry>,
    pub properties: StationProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationGeometry {
    /// Ordered `[lon, lat, elevation]`; elevation may be absent.
    #[serde(default)]
    pub coordinates: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationProperties {
    pub code: String,
    pub name: String,
}

/// Interactive marker artifact for one valid station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationMarker {
    pub code: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub elevation: Option<f64>,
}

impl StationMarker {
    /// Relative URL of the station detail view.
    pub fn detail_url(&self) -> String {
        format!("/seismic/stations/{}", self.code)
    }

    /// Popup body lines in display order, excluding the detail link.
    pub fn popup_lines(&self) -> Vec<String> {
        let mut lines = vec![self.name.clone(), format!("Network: {}", self.code)];
        if let Some(elevation) = self.elevation {
            lines.push(format!("Elevation: {} m", elevation));
        }
        lines.push(format!("Phase: {} picks", PHASE_PICKS));
        lines.push(format!("P-wave: {} picks", P_WAVE_PICKS));
        lines.push(format!("S-wave: {} picks", S_WAVE_PICKS));
        lines
    }
}

/// Non-interactive permanent label showing the station code next to the
/// marker.
#[derive(Debug, Clone, PartialEq)]
pub struct StationLabel {
    pub code: String,
    pub lat: f64,
    pub lon: f64,
}

/// Convert one station record into its marker + label pair.
///
/// Returns `None` when geometry or coordinates are absent or carry fewer
/// than two ordinates; the caller decides how to report the skip.
/// Coordinates are ordered `[lon, lat, elevation]`; the marker position is
/// `(lat, lon)`.
pub fn station_to_markers(feature: &StationFeature) -> Option<(StationMarker, StationLabel)> {
    let coordinates = feature.geometry.as_ref()?.coordinates.as_ref()?;
    if coordinates.len() < 2 {
        return None;
    }

    let lon = coordinates[0];
    let lat = coordinates[1];
    let elevation = coordinates.get(2).copied();

    let marker = StationMarker {
        code: feature.properties.code.clone(),
        name: feature.properties.name.clone(),
        lat,
        lon,
        elevation,
    };
    let label = StationLabel {
        code: feature.properties.code.clone(),
        lat,
        lon,
    };
    Some((marker, label))
}

/// Transform a whole collection. Returns the kept marker/label pairs plus
/// the codes of the skipped records, one entry per warning the caller
/// should emit.
pub fn collect_station_layer(
    collection: &StationCollection,
) -> (Vec<StationMarker>, Vec<StationLabel>, Vec<String>) {
    let mut markers = Vec::new();
    let mut labels = Vec::new();
    let mut skipped = Vec::new();
    for feature in &collection.features {
        match station_to_markers(feature) {
            Some((marker, label)) => {
                markers.push(marker);
                labels.push(label);
            }
            None => skipped.push(feature.properties.code.clone()),
        }
    }
    (markers, labels, skipped)
}
