//! Top header bar shared by all pages.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_image_icons::MdPhotoLibrary;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::viewer_control::CatalogContext;
use crate::routes::Route;

pub const HEADER_HEIGHT_PX: u32 = 64;

/// Header with the catalog title above the routed page.
#[component]
pub fn HeaderBar() -> Element {
    let catalog = use_context::<CatalogContext>();
    let title = catalog.0.title().unwrap_or_default().to_string();

    rsx! {
        div {
            id: "x-header-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",

            header {
                id: "x-header-bar",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    flex-shrink: 0;
                    height: {HEADER_HEIGHT_PX}px;
                    padding: 0 16px;
                    background-color: #111827;
                    color: white;
                ",
                Link {
                    to: Route::MediaBrowserPage {},
                    span {
                        style: "color: white; display: flex;",
                        Icon { icon: MdPhotoLibrary, style: "width: 32px; height: 32px;" }
                    }
                }
                div {
                    style: "flex-grow: 1; text-align: center; font-size: 18px;",
                    "{title}"
                }
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-height: 0;",
                GlobalErrorBoundary {
                    boundary_name: "HeaderBar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}
