//! Displayed image, scaled by the current zoom factor.

use dioxus::prelude::*;

use crate::components::viewer::no_image_selected::NoImageSelected;
use crate::data_definitions::viewer_control::ViewerControl;

#[component]
pub fn ImageStage() -> Element {
    let view = use_context::<ViewerControl>().view;
    let image_url = use_memo(move || view.read().current_image_url.clone());
    let alt_text = use_memo(move || view.read().current_caption.clone().unwrap_or_else(|| "Selected".to_string()));
    let zoom_factor = use_memo(move || view.read().zoom_factor);
    let has_selection = use_memo(move || view.read().has_selection);

    rsx! {
        // clicks pass through to the navigation overlay
        div {
            style: "
                position: relative;
                display: flex;
                justify-content: center;
                align-items: center;
                overflow: auto;
                width: 100%;
                height: 100%;
                pointer-events: none;
            ",
            img {
                class: "media-zoom-image",
                src: "{image_url}",
                alt: "{alt_text}",
                style: "
                    width: 100%;
                    height: auto;
                    max-height: 87vh;
                    object-fit: contain;
                    border-radius: 4px;
                    transform: scale({zoom_factor});
                ",
            }
            if !has_selection() {
                NoImageSelected {}
            }
        }
    }
}
