pub mod error_boundary;
pub mod header_bar;
pub mod sidebar;
pub mod viewer;
