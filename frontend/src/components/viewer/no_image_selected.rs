//! Hint shown over the placeholder image when nothing is selected.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_image_icons::MdImage;

#[component]
pub fn NoImageSelected() -> Element {
    rsx! {
        div {
            style: "
                position: absolute;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                text-align: center;
                gap: 12px;
                width: 310px;
                padding: 16px;
                border-radius: 12px;
                background-color: rgba(0, 0, 0, 0.55);
            ",
            Icon {
                icon: MdImage,
                style: "width: 96px; height: 96px; color:rgba(255, 255, 255, 0.6);",
            }
            div {
                style: "font-size: 24px; font-weight: 500; color: white;",
                "No image selected"
            }
            div {
                style: "font-size: 16px; font-weight: 400; color:rgba(255, 255, 255, 0.7);",
                "Open a section in the sidebar and pick a photo to display it here."
            }
        }
    }
}
