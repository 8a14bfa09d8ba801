pub mod map_view;
pub mod north_arrow;
pub mod station_popup;
