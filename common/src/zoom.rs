//! Saturating zoom factor in `[1.0, 3.0]`.

use serde::{Deserialize, Serialize};

use crate::viewer_const::{ZOOM_MAX_PERCENT, ZOOM_MIN_PERCENT, ZOOM_STEP_PERCENT};

/// Zoom kept in whole percent so repeated steps never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub struct Zoom(u16);

impl Default for Zoom {
    fn default() -> Self {
        Self::NATURAL
    }
}

impl From<u16> for Zoom {
    fn from(percent: u16) -> Self {
        Self::from_percent(percent)
    }
}

impl From<Zoom> for u16 {
    fn from(zoom: Zoom) -> Self {
        zoom.0
    }
}

impl Zoom {
    pub const NATURAL: Zoom = Zoom(ZOOM_MIN_PERCENT);
    pub const MAX: Zoom = Zoom(ZOOM_MAX_PERCENT);

    /// Clamps into the allowed range and snaps to the nearest step.
    pub fn from_percent(percent: u16) -> Self {
        let above_min = percent.clamp(ZOOM_MIN_PERCENT, ZOOM_MAX_PERCENT) - ZOOM_MIN_PERCENT;
        let steps = (above_min + ZOOM_STEP_PERCENT / 2) / ZOOM_STEP_PERCENT;
        Self(ZOOM_MIN_PERCENT + steps * ZOOM_STEP_PERCENT)
    }

    pub fn percent(self) -> u16 {
        self.0
    }

    /// Scale factor for rendering, e.g. `1.4`.
    pub fn factor(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn stepped_in(self) -> Self {
        Self(self.0.saturating_add(ZOOM_STEP_PERCENT).min(ZOOM_MAX_PERCENT))
    }

    pub fn stepped_out(self) -> Self {
        Self(self.0.saturating_sub(ZOOM_STEP_PERCENT).max(ZOOM_MIN_PERCENT))
    }

    pub fn is_natural(self) -> bool {
        self == Self::NATURAL
    }

    pub fn is_max(self) -> bool {
        self == Self::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_steps_in_is_exactly_one_point_four() {
        let zoom = Zoom::NATURAL.stepped_in().stepped_in();
        assert_eq!(zoom.factor(), 1.4);
    }

    #[test]
    fn saturates_at_both_ends() {
        assert_eq!(Zoom::NATURAL.stepped_out(), Zoom::NATURAL);
        assert_eq!(Zoom::MAX.stepped_in(), Zoom::MAX);
        assert_eq!(Zoom::MAX.factor(), 3.0);
        let mut zoom = Zoom::NATURAL;
        for _ in 0..10 {
            zoom = zoom.stepped_in();
        }
        assert!(zoom.is_max());
    }

    #[test]
    fn from_percent_clamps() {
        assert_eq!(Zoom::from_percent(0), Zoom::NATURAL);
        assert_eq!(Zoom::from_percent(1000), Zoom::MAX);
        assert_eq!(Zoom::from_percent(240).percent(), 240);
        assert_eq!(Zoom::from_percent(251).percent(), 260);
    }
}
