use std::sync::Arc;

use dioxus::prelude::*;

use crate::components::error_boundary::{ComponentErrorDisplay, GlobalErrorBoundary};
use crate::data_definitions::bundled_catalog::load_bundled_catalog;
use crate::data_definitions::viewer_control::CatalogContext;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let catalog = use_hook(|| {
        load_bundled_catalog().map(Arc::new).map_err(|e| {
            dioxus::logger::tracing::error!("{e:#}");
            format!("{e:#}")
        })
    });

    rsx! {
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: "https://fonts.googleapis.com/css2?family=Roboto:ital,wght@0,100..900;1,100..900&display=swap" }

        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            {
                match catalog.clone() {
                    Ok(catalog) => rsx! {
                        CatalogProvider { catalog: CatalogContext(catalog) }
                    },
                    Err(error_txt) => rsx! {
                        ComponentErrorDisplay { title: "Catalog Error".to_string(), error_txt }
                    },
                }
            }
        }
    }
}

#[component]
fn CatalogProvider(catalog: CatalogContext) -> Element {
    use_context_provider(move || catalog.clone());
    rsx! {
        Router::<Route> {}
    }
}
