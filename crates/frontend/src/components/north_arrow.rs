use dioxus::prelude::*;

const NORTH_ARROW: Asset = asset!("/assets/north_arrow.svg");

/// Fixed decorative north-arrow control at the top right of the canvas.
#[component]
pub fn NorthArrow() -> Element {
    rsx! {
        img { class: "north-arrow", src: NORTH_ARROW, alt: "North" }
    }
}
