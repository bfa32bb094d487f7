//! Data plumbing between the viewer core and the components.

pub mod bundled_catalog;
pub mod viewer_control;
