//! Thumbnails of an expanded section. Clicking one displays it.

use common::{SectionId, Selection, ViewerAction};
use dioxus::prelude::*;

use crate::data_definitions::viewer_control::{CatalogContext, ViewerControl};

#[component]
pub fn ThumbnailList(section_id: ReadSignal<SectionId>) -> Element {
    let catalog = use_context::<CatalogContext>();
    let control = use_context::<ViewerControl>();
    let selection = use_memo(move || control.view.read().selection);
    let Some(section) = catalog.0.section(section_id()) else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "margin-top: 8px;",
            for (index, attachment) in section.attachments.iter().enumerate() {
                div {
                    key: "{attachment.id}",
                    style: "margin-top: 8px; cursor: pointer;",
                    onclick: move |_| {
                        control.dispatch.call(ViewerAction::SelectImage { section: section_id(), index });
                    },
                    img {
                        class: "media-thumbnail",
                        src: "{attachment.url}",
                        alt: "{attachment.caption}",
                        title: "{attachment.caption}",
                        style: "
                            width: 100%;
                            height: 128px;
                            object-fit: cover;
                            border-radius: 4px;
                            border: 2px solid {thumbnail_border(selection(), section_id(), index)};
                        ",
                    }
                }
            }
        }
    }
}

fn thumbnail_border(selection: Option<Selection>, section: SectionId, index: usize) -> &'static str {
    if selection == Some(Selection { section, index }) { "#3B82F6" } else { "transparent" }
}
