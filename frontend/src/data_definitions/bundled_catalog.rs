//! Catalog shipped with the application.

use anyhow::Context;
use common::Catalog;

const BUNDLED_CATALOG_JSON: &str = include_str!("../../assets/catalog.json");

pub fn load_bundled_catalog() -> anyhow::Result<Catalog> {
    Catalog::from_json_str(BUNDLED_CATALOG_JSON).context("Failed to load bundled catalog (assets/catalog.json)")
}
