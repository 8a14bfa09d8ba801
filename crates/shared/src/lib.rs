pub mod color;
pub mod layers;
pub mod models;
pub mod overlay;
pub mod projection;
pub mod style;
