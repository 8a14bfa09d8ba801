use crate::models::{StationLabel, StationMarker};
use crate::overlay::GeoOverlay;

/// Opaque handle to a layer in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerHandle(u64);

/// A visual layer owned by the map page.
#[derive(Debug, Clone, PartialEq)]
pub enum MapLayer {
    /// Station markers plus their permanent code labels.
    Stations {
        markers: Vec<StationMarker>,
        labels: Vec<StationLabel>,
    },
    /// A styled geographic overlay (event polygons, fault lines).
    Overlay(GeoOverlay),
}

/// Registry of the layers composing the map view.
///
/// Layers draw in insertion order. Handles stay valid across removals of
/// other layers, so a layer can be queried, replaced, or dropped later.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerRegistry {
    next_id: u64,
    layers: Vec<(LayerHandle, MapLayer)>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer, returning its handle.
    pub fn add(&mut self, layer: MapLayer) -> LayerHandle {
        let handle = LayerHandle(self.next_id);
        self.next_id += 1;
        self.layers.push((handle, layer));
        handle
    }

    /// Remove a layer by handle.
    pub fn remove(&mut self, handle: LayerHandle) -> Option<MapLayer> {
        let index = self.layers.iter().position(|(h, _)| *h == handle)?;
        Some(self.layers.remove(index).1)
    }

    pub fn get(&self, handle: LayerHandle) -> Option<&MapLayer> {
        self.layers
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, layer)| layer)
    }

    /// Layers in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &MapLayer> {
        self.layers.iter().map(|(_, layer)| layer)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay_layer() -> MapLayer {
        MapLayer::Overlay(GeoOverlay::default())
    }

    fn stations_layer() -> MapLayer {
        MapLayer::Stations {
            markers: vec![],
            labels: vec![],
        }
    }

    #[test]
    fn test_add_returns_distinct_handles() {
        let mut registry = LayerRegistry::new();
        let a = registry.add(overlay_layer());
        let b = registry.add(stations_layer());
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_layers_iterate_in_insertion_order() {
        let mut registry = LayerRegistry::new();
        registry.add(overlay_layer());
        registry.add(stations_layer());
        let kinds: Vec<bool> = registry
            .iter()
            .map(|l| matches!(l, MapLayer::Overlay(_)))
            .collect();
        assert_eq!(kinds, vec![true, false]);
    }

    #[test]
    fn test_remove_by_handle() {
        let mut registry = LayerRegistry::new();
        let a = registry.add(overlay_layer());
        let b = registry.add(stations_layer());
        assert!(registry.remove(a).is_some());
        assert_eq!(registry.len(), 1);
        // The other handle is unaffected
        assert!(registry.get(b).is_some());
        // Removing twice is a no-op
        assert!(registry.remove(a).is_none());
    }

    #[test]
    fn test_handles_are_not_reused_after_removal() {
        let mut registry = LayerRegistry::new();
        let a = registry.add(overlay_layer());
        registry.remove(a);
        let b = registry.add(overlay_layer());
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_registry() {
        let registry = LayerRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }
}
