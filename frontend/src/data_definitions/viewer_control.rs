//! Context handed to every viewer component.

use std::sync::Arc;

use common::{Catalog, ViewerAction, ViewerView};
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq, Copy)]
pub struct ViewerControl {
    pub view: ReadSignal<ViewerView>,
    pub dispatch: Callback<ViewerAction>,
}

/// Catalog provided once by the app root.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogContext(pub Arc<Catalog>);
