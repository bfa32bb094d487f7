//! User-triggered viewer actions and their outcome.

use serde::{Deserialize, Serialize};

use crate::catalog::SectionId;

/// One user interaction with the sidebar or the viewer controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewerAction {
    ToggleSection(SectionId),
    SelectImage { section: SectionId, index: usize },
    PrevImage,
    NextImage,
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

/// Whether a transition modified the state. `Unchanged` covers boundary no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Transition {
    Changed,
    Unchanged,
}

impl Transition {
    pub fn is_changed(self) -> bool {
        self == Transition::Changed
    }

    pub(crate) fn from_changed(changed: bool) -> Self {
        if changed { Transition::Changed } else { Transition::Unchanged }
    }
}
