//! Viewer pane: toolbar, zoomable image and previous / next overlay.

mod image_stage;
mod navigation_overlay;
mod no_image_selected;
mod viewer_toolbar;

use dioxus::prelude::*;

use crate::components::viewer::image_stage::ImageStage;
use crate::components::viewer::navigation_overlay::NavigationOverlay;
use crate::components::viewer::viewer_toolbar::ViewerToolbar;

#[component]
pub fn ViewerPane() -> Element {
    rsx! {
        ViewerToolbar {}
        div {
            style: "
                width: 100%;
                height: 100%;
                max-width: 1024px;
                display: flex;
                justify-content: center;
                align-items: center;
            ",
            ImageStage {}
            NavigationOverlay {}
        }
    }
}
