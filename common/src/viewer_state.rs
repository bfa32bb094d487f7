//! Viewer state machine: sidebar expansion, displayed image and zoom.
//!
//! Every transition borrows the [`Catalog`] the state was created for, runs to
//! completion and reports a [`Transition`]. Selecting or moving to another
//! image always drops back to natural zoom.

use serde::{Deserialize, Serialize};

use crate::catalog::{Attachment, Catalog, Section, SectionId};
use crate::error::ViewerError;
use crate::viewer_action::{Transition, ViewerAction};
use crate::zoom::Zoom;

/// Displayed image: a section of the catalog and an index into its attachments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub section: SectionId,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewerState {
    expanded_section: Option<SectionId>,
    selection: Option<Selection>,
    zoom: Zoom,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded_section(&self) -> Option<SectionId> {
        self.expanded_section
    }

    pub fn is_expanded(&self, section: SectionId) -> bool {
        self.expanded_section == Some(section)
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Index into the selected section; 0 while nothing is selected.
    pub fn selected_index(&self) -> usize {
        self.selection.map(|s| s.index).unwrap_or(0)
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn apply(&mut self, catalog: &Catalog, action: ViewerAction) -> Result<Transition, ViewerError> {
        let transition = match action {
            ViewerAction::ToggleSection(section) => self.toggle_section(section),
            ViewerAction::SelectImage { section, index } => self.select_image(catalog, section, index)?,
            ViewerAction::PrevImage => self.prev_image(catalog),
            ViewerAction::NextImage => self.next_image(catalog),
            ViewerAction::ZoomIn => self.zoom_in(),
            ViewerAction::ZoomOut => self.zoom_out(),
            ViewerAction::ResetZoom => self.reset_zoom(),
        };
        if transition.is_changed() {
            tracing::debug!("viewer {:?} -> {:?}", action, self);
        } else {
            tracing::trace!("viewer {:?} left state unchanged", action);
        }
        Ok(transition)
    }

    /// Expands `section`, or collapses it when it is already the expanded one.
    pub fn toggle_section(&mut self, section: SectionId) -> Transition {
        self.expanded_section = if self.expanded_section == Some(section) { None } else { Some(section) };
        Transition::Changed
    }

    pub fn select_image(&mut self, catalog: &Catalog, section: SectionId, index: usize) -> Result<Transition, ViewerError> {
        let Some(found) = catalog.section(section) else {
            tracing::warn!("select_image: unknown section {}", section);
            return Err(ViewerError::UnknownSection(section));
        };
        if index >= found.len() {
            tracing::warn!("select_image: index {} out of range for section {} ({} attachments)", index, section, found.len());
            return Err(ViewerError::IndexOutOfRange {
                section,
                index,
                len: found.len(),
            });
        }
        Ok(self.show(Selection { section, index }))
    }

    pub fn prev_image(&mut self, catalog: &Catalog) -> Transition {
        let Some((selection, _)) = self.resolved_selection(catalog) else {
            return Transition::Unchanged;
        };
        if selection.index == 0 {
            return Transition::Unchanged;
        }
        self.show(Selection {
            index: selection.index - 1,
            ..selection
        })
    }

    pub fn next_image(&mut self, catalog: &Catalog) -> Transition {
        let Some((selection, section)) = self.resolved_selection(catalog) else {
            return Transition::Unchanged;
        };
        if selection.index + 1 >= section.len() {
            return Transition::Unchanged;
        }
        self.show(Selection {
            index: selection.index + 1,
            ..selection
        })
    }

    pub fn zoom_in(&mut self) -> Transition {
        self.set_zoom(self.zoom.stepped_in())
    }

    pub fn zoom_out(&mut self) -> Transition {
        self.set_zoom(self.zoom.stepped_out())
    }

    pub fn reset_zoom(&mut self) -> Transition {
        self.set_zoom(Zoom::NATURAL)
    }

    pub fn current_section<'c>(&self, catalog: &'c Catalog) -> Option<&'c Section> {
        self.resolved_selection(catalog).map(|(_, section)| section)
    }

    pub fn current_attachment<'c>(&self, catalog: &'c Catalog) -> Option<&'c Attachment> {
        self.resolved_selection(catalog)
            .and_then(|(selection, section)| section.attachment(selection.index))
    }

    /// URL to open in a new viewing context. `None` while nothing is selected,
    /// so a placeholder is never opened.
    pub fn full_size_url<'c>(&self, catalog: &'c Catalog) -> Option<&'c str> {
        self.current_attachment(catalog).map(|a| a.url.as_str())
    }

    fn show(&mut self, selection: Selection) -> Transition {
        let changed = self.selection != Some(selection) || !self.zoom.is_natural();
        self.selection = Some(selection);
        self.zoom = Zoom::NATURAL;
        Transition::from_changed(changed)
    }

    fn set_zoom(&mut self, zoom: Zoom) -> Transition {
        let changed = self.zoom != zoom;
        self.zoom = zoom;
        Transition::from_changed(changed)
    }

    fn resolved_selection<'c>(&self, catalog: &'c Catalog) -> Option<(Selection, &'c Section)> {
        let selection = self.selection?;
        let section = catalog.section(selection.section)?;
        (selection.index < section.len()).then_some((selection, section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Attachment, AttachmentId};

    fn catalog() -> Catalog {
        let section = |id: u64, count: u64| Section {
            id: SectionId(id),
            name: format!("section {id}"),
            attachments: (0..count)
                .map(|n| Attachment {
                    id: AttachmentId(id * 100 + n),
                    url: format!("https://img.example/{id}/{n}.jpg"),
                    caption: format!("photo {n}"),
                })
                .collect(),
        };
        Catalog::new(vec![section(1, 1), section(2, 2), section(3, 3)]).expect("valid catalog")
    }

    #[test]
    fn starts_empty() {
        let state = ViewerState::new();
        assert_eq!(state.expanded_section(), None);
        assert_eq!(state.selection(), None);
        assert_eq!(state.selected_index(), 0);
        assert!(state.zoom().is_natural());
    }

    #[test]
    fn toggle_expands_then_collapses() {
        let mut state = ViewerState::new();
        assert!(state.toggle_section(SectionId(2)).is_changed());
        assert!(state.is_expanded(SectionId(2)));
        let _ = state.toggle_section(SectionId(3));
        assert_eq!(state.expanded_section(), Some(SectionId(3)));
        let _ = state.toggle_section(SectionId(3));
        assert_eq!(state.expanded_section(), None);
    }

    #[test]
    fn toggling_another_section_twice_collapses_everything() {
        let mut state = ViewerState::new();
        let _ = state.toggle_section(SectionId(2));
        let _ = state.toggle_section(SectionId(1));
        let _ = state.toggle_section(SectionId(1));
        assert_eq!(state.expanded_section(), None);
    }

    #[test]
    fn empty_section_rejects_any_index() {
        let catalog = Catalog::new(vec![Section {
            id: SectionId(4),
            name: "empty".to_string(),
            attachments: Vec::new(),
        }])
        .expect("valid catalog");
        let mut state = ViewerState::new();
        assert_eq!(
            state.select_image(&catalog, SectionId(4), 0),
            Err(ViewerError::IndexOutOfRange { section: SectionId(4), index: 0, len: 0 })
        );
        assert_eq!(state, ViewerState::new());
        assert_eq!(state.next_image(&catalog), Transition::Unchanged);
    }

    #[test]
    fn select_resets_zoom_and_keeps_sidebar() {
        let catalog = catalog();
        let mut state = ViewerState::new();
        let _ = state.toggle_section(SectionId(1));
        let _ = state.zoom_in();
        let transition = state.select_image(&catalog, SectionId(3), 2).expect("valid selection");
        assert_eq!(transition, Transition::Changed);
        assert_eq!(state.selection(), Some(Selection { section: SectionId(3), index: 2 }));
        assert!(state.zoom().is_natural());
        assert_eq!(state.expanded_section(), Some(SectionId(1)));
    }

    #[test]
    fn reselecting_same_image_at_natural_zoom_is_unchanged() {
        let catalog = catalog();
        let mut state = ViewerState::new();
        let _ = state.select_image(&catalog, SectionId(2), 1).expect("valid");
        assert_eq!(state.select_image(&catalog, SectionId(2), 1), Ok(Transition::Unchanged));
        let _ = state.zoom_in();
        assert_eq!(state.select_image(&catalog, SectionId(2), 1), Ok(Transition::Changed));
    }

    #[test]
    fn select_rejects_bad_arguments_without_touching_state() {
        let catalog = catalog();
        let mut state = ViewerState::new();
        let _ = state.select_image(&catalog, SectionId(2), 0).expect("valid");
        let _ = state.zoom_in();
        let before = state.clone();

        assert_eq!(
            state.select_image(&catalog, SectionId(9), 0),
            Err(ViewerError::UnknownSection(SectionId(9)))
        );
        assert_eq!(
            state.select_image(&catalog, SectionId(2), 2),
            Err(ViewerError::IndexOutOfRange { section: SectionId(2), index: 2, len: 2 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn navigation_without_selection_is_a_no_op() {
        let catalog = catalog();
        let mut state = ViewerState::new();
        assert_eq!(state.next_image(&catalog), Transition::Unchanged);
        assert_eq!(state.prev_image(&catalog), Transition::Unchanged);
        assert_eq!(state, ViewerState::new());
    }

    #[test]
    fn navigation_moves_within_section_and_resets_zoom() {
        let catalog = catalog();
        let mut state = ViewerState::new();
        let _ = state.select_image(&catalog, SectionId(3), 0).expect("valid");
        let _ = state.zoom_in();
        assert!(state.next_image(&catalog).is_changed());
        assert_eq!(state.selected_index(), 1);
        assert!(state.zoom().is_natural());
        let _ = state.next_image(&catalog);
        assert_eq!(state.next_image(&catalog), Transition::Unchanged);
        assert_eq!(state.selected_index(), 2);
        let _ = state.zoom_in();
        assert!(state.prev_image(&catalog).is_changed());
        assert_eq!(state.selected_index(), 1);
        assert!(state.zoom().is_natural());
    }

    #[test]
    fn boundary_navigation_keeps_zoom() {
        let catalog = catalog();
        let mut state = ViewerState::new();
        let _ = state.select_image(&catalog, SectionId(2), 0).expect("valid");
        let _ = state.zoom_in();
        assert_eq!(state.prev_image(&catalog), Transition::Unchanged);
        assert_eq!(state.zoom().percent(), 120);
    }

    #[test]
    fn zoom_does_not_touch_selection() {
        let catalog = catalog();
        let mut state = ViewerState::new();
        let _ = state.select_image(&catalog, SectionId(2), 1).expect("valid");
        let _ = state.zoom_in();
        let _ = state.zoom_in();
        let _ = state.zoom_out();
        assert_eq!(state.selection(), Some(Selection { section: SectionId(2), index: 1 }));
        assert_eq!(state.zoom().factor(), 1.2);
        assert!(state.reset_zoom().is_changed());
        assert_eq!(state.reset_zoom(), Transition::Unchanged);
    }

    #[test]
    fn full_size_url_only_for_a_real_selection() {
        let catalog = catalog();
        let mut state = ViewerState::new();
        assert_eq!(state.full_size_url(&catalog), None);
        let _ = state.select_image(&catalog, SectionId(2), 1).expect("valid");
        assert_eq!(state.full_size_url(&catalog), Some("https://img.example/2/1.jpg"));
    }

    #[test]
    fn apply_dispatches_actions() {
        let catalog = catalog();
        let mut state = ViewerState::new();
        let steps = [
            ViewerAction::ToggleSection(SectionId(3)),
            ViewerAction::SelectImage { section: SectionId(3), index: 1 },
            ViewerAction::ZoomIn,
            ViewerAction::NextImage,
            ViewerAction::ZoomIn,
            ViewerAction::ZoomOut,
            ViewerAction::ZoomIn,
            ViewerAction::ResetZoom,
            ViewerAction::PrevImage,
        ];
        for action in steps {
            assert_eq!(state.apply(&catalog, action), Ok(Transition::Changed), "{action:?}");
        }
        assert_eq!(state.selection(), Some(Selection { section: SectionId(3), index: 1 }));
        assert!(state.apply(&catalog, ViewerAction::SelectImage { section: SectionId(1), index: 4 }).is_err());
    }
}
