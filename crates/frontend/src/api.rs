use dioxus::prelude::*;
use geojson::FeatureCollection;
use seismap_shared::models::StationCollection;
use seismap_shared::overlay::parse_feature_collection;

/// Station resource bundled with the application and fetched at page load.
const STATIONS_RESOURCE: Asset = asset!("/assets/data/stations.geojson");

/// Seismic-event depth resource consumed by the colored overlay.
const EVENT_DEPTHS_RESOURCE: Asset = asset!("/assets/data/event_depths.geojson");

fn resource_url(path: &str) -> String {
    // In production, same origin. In dev, might be different.
    let window = web_sys::window().unwrap();
    let origin = window.location().origin().unwrap();
    format!("{}{}", origin, path)
}

/// Fetch and decode the station resource.
///
/// A payload without the top-level `features` array fails to decode; the
/// caller treats that as fatal for the station layer.
pub async fn fetch_stations() -> Result<StationCollection, String> {
    let resp = reqwest::get(resource_url(&STATIONS_RESOURCE.to_string()))
        .await
        .map_err(|e| e.to_string())?;
    resp.json::<StationCollection>()
        .await
        .map_err(|e| e.to_string())
}

/// Fetch the depth-annotated seismic event collection.
pub async fn fetch_event_depths() -> Result<FeatureCollection, String> {
    fetch_feature_collection(&EVENT_DEPTHS_RESOURCE.to_string()).await
}

/// Generic loader for geographic feature collections.
pub async fn fetch_feature_collection(path: &str) -> Result<FeatureCollection, String> {
    let resp = reqwest::get(resource_url(path))
        .await
        .map_err(|e| e.to_string())?;
    let body = resp.text().await.map_err(|e| e.to_string())?;
    parse_feature_collection(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seismap_shared::models::collect_station_layer;

    // The bundled sample resources must decode with the production types.

    #[test]
    fn test_bundled_station_resource_decodes() {
        let json = include_str!("../assets/data/stations.geojson");
        let collection: StationCollection = serde_json::from_str(json).unwrap();
        assert!(!collection.features.is_empty());
        let (markers, labels, skipped) = collect_station_layer(&collection);
        assert_eq!(markers.len(), collection.features.len());
        assert_eq!(markers.len(), labels.len());
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_bundled_event_depth_resource_parses() {
        let json = include_str!("../assets/data/event_depths.geojson");
        let collection = parse_feature_collection(json).unwrap();
        assert!(!collection.features.is_empty());
        // Every event feature carries the DEPTH property the stylist reads
        for feature in &collection.features {
            let depth = feature
                .properties
                .as_ref()
                .and_then(|p| p.get("DEPTH"))
                .and_then(|d| d.as_f64());
            assert!(depth.is_some());
        }
    }

    #[test]
    fn test_station_decode_without_features_fails() {
        let result = serde_json::from_str::<StationCollection>(r#"{"type":"FeatureCollection"}"#);
        assert!(result.is_err());
    }
}
