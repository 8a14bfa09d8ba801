use crate::color;

/// Style descriptor applied to one overlay feature.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    /// Fill falls back to `color` when unset.
    pub fill_color: Option<String>,
    pub fill_opacity: f64,
}

impl PathStyle {
    /// Resolved fill color.
    pub fn fill(&self) -> &str {
        self.fill_color.as_deref().unwrap_or(&self.color)
    }
}

/// Fixed style preset for the fault-line overlay.
pub fn fault_style() -> PathStyle {
    PathStyle {
        color: "#000000".to_string(),
        weight: 1.0,
        opacity: 1.0,
        fill_color: Some("#000000".to_string()),
        fill_opacity: 0.2,
    }
}

/// How an overlay derives per-feature styles. Closed set: either
/// data-driven depth coloring or one fixed descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleProvider {
    /// Color each feature by its DEPTH property via the depth scale.
    DepthColored,
    /// Apply the same descriptor to every feature.
    Fixed(PathStyle),
}

impl StyleProvider {
    /// Resolve the style for a feature carrying the given depth property.
    pub fn style_for(&self, depth: Option<f64>) -> PathStyle {
        match self {
            StyleProvider::DepthColored => PathStyle {
                color: color::depth_color_opt(depth).to_string(),
                weight: 2.0,
                opacity: 1.0,
                fill_color: None,
                fill_opacity: 0.5,
            },
            StyleProvider::Fixed(style) => style.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{depth_color, FALLBACK_COLOR};

    #[test]
    fn test_depth_colored_delegates_to_scale() {
        let style = StyleProvider::DepthColored.style_for(Some(55.0));
        assert_eq!(style.color, depth_color(55.0));
        assert!((style.weight - 2.0).abs() < 1e-9);
        assert!((style.fill_opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_depth_colored_without_depth_uses_fallback() {
        let style = StyleProvider::DepthColored.style_for(None);
        assert_eq!(style.color, FALLBACK_COLOR);
    }

    #[test]
    fn test_fixed_ignores_depth() {
        let provider = StyleProvider::Fixed(fault_style());
        assert_eq!(provider.style_for(Some(300.0)), provider.style_for(None));
        assert_eq!(provider.style_for(None).color, "#000000");
    }

    #[test]
    fn test_fault_preset_shape() {
        let style = fault_style();
        assert!((style.weight - 1.0).abs() < 1e-9);
        assert!((style.opacity - 1.0).abs() < 1e-9);
        assert_eq!(style.fill(), "#000000");
    }

    #[test]
    fn test_fill_falls_back_to_stroke_color() {
        let style = StyleProvider::DepthColored.style_for(Some(10.0));
        assert_eq!(style.fill(), style.color);
    }
}
