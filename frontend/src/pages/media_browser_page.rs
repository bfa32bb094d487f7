//! Media browser page: sidebar navigator next to the image viewer.

use common::{DisplayFallback, ViewerAction, ViewerSession, ViewerState, ViewerView};
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::components::sidebar::SidebarNavigator;
use crate::components::viewer::ViewerPane;
use crate::data_definitions::viewer_control::{CatalogContext, ViewerControl};

pub const SIDEBAR_WIDTH_PX: u32 = 256;
const PLACEHOLDER_IMAGE: Asset = asset!("/assets/placeholder.svg");

fn display_fallback() -> DisplayFallback {
    DisplayFallback {
        placeholder_image_url: PLACEHOLDER_IMAGE.to_string(),
        ..DisplayFallback::default()
    }
}

#[component]
pub fn MediaBrowserPage() -> Element {
    let catalog = use_context::<CatalogContext>();
    let mut session = use_signal(move || {
        let mut session = ViewerSession::new(catalog.0.clone(), display_fallback());
        session.subscribe(|state: &ViewerState, view: &ViewerView| {
            tracing::info!(
                "Showing {} ({:?}) at {}x",
                view.current_section_name,
                state.selection(),
                view.zoom_factor
            );
        });
        session
    });
    let view = use_memo(move || session.read().view());

    use_context_provider(move || ViewerControl {
        view: view.into(),
        dispatch: Callback::new(move |action: ViewerAction| {
            if let Err(e) = session.write().dispatch(action) {
                tracing::error!("Viewer action {:?} rejected: {}", action, e);
            }
        }),
    });

    rsx! {
        Title { "Media Browser: {view.read().current_section_name}" }
        div {
            id: "x-media-browser-root",
            style: "
                display: flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",
            aside {
                id: "x-media-browser-sidebar",
                style: "
                    width: {SIDEBAR_WIDTH_PX}px;
                    flex-shrink: 0;
                    height: 100%;
                    overflow-y: auto;
                    padding: 16px;
                    background-color: #1F2937;
                    color: white;
                ",
                SidebarNavigator {}
            }
            main {
                id: "x-media-browser-viewer",
                style: "
                    flex-grow: 1;
                    min-width: 0;
                    height: 100%;
                    padding: 4px;
                    position: relative;
                    overflow: hidden;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    background-color: #374151;
                ",
                ViewerPane {}
            }
        }
    }
}
