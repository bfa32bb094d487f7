//! Media browser core shared by the frontend: catalog model and viewer state machine.

extern crate serde;


pub mod catalog;
pub mod error;
pub mod viewer_action;
pub mod viewer_const;
pub mod viewer_session;
pub mod viewer_state;
pub mod viewer_view;
pub mod zoom;

pub use catalog::{Attachment, AttachmentId, Catalog, CatalogData, Section, SectionId};
pub use error::{CatalogError, ViewerError};
pub use viewer_action::{Transition, ViewerAction};
pub use viewer_session::{ViewerObserver, ViewerSession};
pub use viewer_state::{Selection, ViewerState};
pub use viewer_view::{DisplayFallback, NavControls, SectionRow, ViewerView};
pub use zoom::Zoom;
