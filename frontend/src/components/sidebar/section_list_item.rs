//! One collapsible section header in the sidebar.

use common::{SectionRow, ViewerAction};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdChevronRight;

use crate::components::sidebar::thumbnail_list::ThumbnailList;
use crate::data_definitions::viewer_control::ViewerControl;

#[component]
pub fn SectionListItem(row: ReadSignal<SectionRow>) -> Element {
    let control = use_context::<ViewerControl>();
    let chevron_rotation = use_memo(move || if row.read().expanded { "90deg" } else { "0deg" });

    rsx! {
        div {
            style: "
                margin-bottom: 16px;
                padding-bottom: 8px;
                border-bottom: 1px solid #374151;
            ",
            div {
                class: "media-hover-shadow-background",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    control.dispatch.call(ViewerAction::ToggleSection(row.read().id));
                },
                p {
                    style: "display: flex; align-items: center; font-weight: 600; margin: 0;",
                    Icon {
                        icon: MdChevronRight,
                        style: "width: 16px; height: 16px; margin-right: 8px; transform: rotate({chevron_rotation}); transition: transform 150ms;",
                    }
                    "{row.read().name}"
                }
                span {
                    style: "margin-right: 4px;",
                    "{row.read().attachment_count}"
                }
            }
            if row.read().expanded {
                ThumbnailList { section_id: row.read().id }
            }
        }
    }
}
