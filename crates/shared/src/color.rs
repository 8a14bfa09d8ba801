//! Depth color scale for seismic event visualization.
//!
//! Eleven inclusive depth bands (km), shallow red through deep green.
//! Declaration order is the tie-break for boundary values shared by
//! adjacent bands.

/// One inclusive depth band and its display color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCategory {
    pub range: [f64; 2],
    pub color: &'static str,
}

pub const DEPTH_CATEGORIES: [ColorCategory; 11] = [
    ColorCategory { range: [0.0, 20.0], color: "rgb(245,0,0)" },
    ColorCategory { range: [20.0, 40.0], color: "rgb(250,75,0)" },
    ColorCategory { range: [40.0, 60.0], color: "rgb(252,118,0)" },
    ColorCategory { range: [60.0, 80.0], color: "rgb(253,160,0)" },
    ColorCategory { range: [80.0, 100.0], color: "rgb(250,160,0)" },
    ColorCategory { range: [100.0, 120.0], color: "rgb(245,245,0)" },
    ColorCategory { range: [120.0, 200.0], color: "rgb(210,247,0)" },
    ColorCategory { range: [200.0, 300.0], color: "rgb(169,247,0)" },
    ColorCategory { range: [300.0, 400.0], color: "rgb(128,247,0)" },
    ColorCategory { range: [400.0, 500.0], color: "rgb(86,247,0)" },
    ColorCategory { range: [500.0, 660.0], color: "rgb(0,245,0)" },
];

/// Color used when a depth matches no band (negative, beyond 660, or NaN).
pub const FALLBACK_COLOR: &str = "rgba(255,255,255,0.8)";

/// Map a depth value to its display color. First matching band wins.
pub fn depth_color(depth: f64) -> &'static str {
    for category in &DEPTH_CATEGORIES {
        if depth >= category.range[0] && depth <= category.range[1] {
            return category.color;
        }
    }
    FALLBACK_COLOR
}

/// Like [`depth_color`], for features that may not carry a depth at all.
pub fn depth_color_opt(depth: Option<f64>) -> &'static str {
    match depth {
        Some(d) => depth_color(d),
        None => FALLBACK_COLOR,
    }
}
