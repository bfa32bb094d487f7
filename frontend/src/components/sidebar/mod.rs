//! Sidebar: cover image and the collapsible section list.

mod section_list_item;
mod thumbnail_list;

use dioxus::prelude::*;

use crate::components::sidebar::section_list_item::SectionListItem;
use crate::data_definitions::viewer_control::{CatalogContext, ViewerControl};

#[component]
pub fn SidebarNavigator() -> Element {
    let catalog = use_context::<CatalogContext>();
    let control = use_context::<ViewerControl>();
    let cover_image_url = catalog.0.cover_image_url().map(str::to_string);
    let rows = use_memo(move || control.view.read().sections.clone());

    rsx! {
        {cover_image_url.map(|cover_image_url| rsx! {
            div {
                style: "margin-bottom: 16px; padding-bottom: 8px;",
                img {
                    src: "{cover_image_url}",
                    alt: "Property",
                    style: "width: 100%; border-radius: 4px;",
                }
            }
        })}
        for row in rows() {
            SectionListItem { key: "{row.id}", row }
        }
    }
}
