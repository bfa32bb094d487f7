//! Fixed limits and default display values for the image viewer.

/// Natural, un-zoomed size.
pub const ZOOM_MIN_PERCENT: u16 = 100;
/// Largest magnification the viewer allows, regardless of image resolution.
pub const ZOOM_MAX_PERCENT: u16 = 300;
/// One zoom-in / zoom-out click.
pub const ZOOM_STEP_PERCENT: u16 = 20;

pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str = "/property.jpg";
pub const DEFAULT_NO_SELECTION_LABEL: &str = "Select an Image";
