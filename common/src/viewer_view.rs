//! Render-ready values derived from a [`ViewerState`] and its [`Catalog`].

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, SectionId};
use crate::viewer_const::{DEFAULT_NO_SELECTION_LABEL, DEFAULT_PLACEHOLDER_IMAGE_URL};
use crate::viewer_state::{Selection, ViewerState};

/// What to show while nothing is selected. Supplied by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFallback {
    pub placeholder_image_url: String,
    pub no_selection_label: String,
}

impl Default for DisplayFallback {
    fn default() -> Self {
        Self {
            placeholder_image_url: DEFAULT_PLACEHOLDER_IMAGE_URL.to_string(),
            no_selection_label: DEFAULT_NO_SELECTION_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRow {
    pub id: SectionId,
    pub name: String,
    pub attachment_count: usize,
    pub expanded: bool,
}

/// Previous / next controls. Only produced for sections with more than one attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavControls {
    pub can_prev: bool,
    pub can_next: bool,
    /// 1-based position of the displayed attachment.
    pub position: usize,
    pub len: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerView {
    pub current_image_url: String,
    pub current_section_name: String,
    pub current_caption: Option<String>,
    pub has_selection: bool,
    pub selection: Option<Selection>,
    pub zoom_factor: f64,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    pub sections: Vec<SectionRow>,
    pub nav: Option<NavControls>,
    pub full_size_url: Option<String>,
}

impl ViewerState {
    pub fn current_image_url<'a>(&self, catalog: &'a Catalog, fallback: &'a DisplayFallback) -> &'a str {
        self.current_attachment(catalog)
            .map(|a| a.url.as_str())
            .unwrap_or(fallback.placeholder_image_url.as_str())
    }

    pub fn current_section_name<'a>(&self, catalog: &'a Catalog, fallback: &'a DisplayFallback) -> &'a str {
        self.current_section(catalog)
            .map(|s| s.name.as_str())
            .unwrap_or(fallback.no_selection_label.as_str())
    }

    pub fn current_caption<'c>(&self, catalog: &'c Catalog) -> Option<&'c str> {
        self.current_attachment(catalog).map(|a| a.caption.as_str())
    }

    pub fn nav_controls(&self, catalog: &Catalog) -> Option<NavControls> {
        let section = self.current_section(catalog)?;
        if section.len() <= 1 {
            return None;
        }
        let index = self.selected_index();
        Some(NavControls {
            can_prev: index > 0,
            can_next: index + 1 < section.len(),
            position: index + 1,
            len: section.len(),
        })
    }

    pub fn section_rows(&self, catalog: &Catalog) -> Vec<SectionRow> {
        catalog
            .sections()
            .iter()
            .map(|section| SectionRow {
                id: section.id,
                name: section.name.clone(),
                attachment_count: section.len(),
                expanded: self.is_expanded(section.id),
            })
            .collect()
    }

    pub fn view(&self, catalog: &Catalog, fallback: &DisplayFallback) -> ViewerView {
        let zoom = self.zoom();
        ViewerView {
            current_image_url: self.current_image_url(catalog, fallback).to_string(),
            current_section_name: self.current_section_name(catalog, fallback).to_string(),
            current_caption: self.current_caption(catalog).map(str::to_string),
            has_selection: self.current_attachment(catalog).is_some(),
            selection: self.current_attachment(catalog).and(self.selection()),
            zoom_factor: zoom.factor(),
            can_zoom_in: !zoom.is_max(),
            can_zoom_out: !zoom.is_natural(),
            sections: self.section_rows(catalog),
            nav: self.nav_controls(catalog),
            full_size_url: self.full_size_url(catalog).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Attachment, AttachmentId, Section};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Section {
                id: SectionId(10),
                name: "Inspection Property".to_string(),
                attachments: vec![Attachment {
                    id: AttachmentId(1),
                    url: "https://img.example/front.jpg".to_string(),
                    caption: "Front".to_string(),
                }],
            },
            Section {
                id: SectionId(20),
                name: "Rooms".to_string(),
                attachments: (2..5)
                    .map(|n| Attachment {
                        id: AttachmentId(n),
                        url: format!("https://img.example/room-{n}.jpg"),
                        caption: format!("Room {n}"),
                    })
                    .collect(),
            },
        ])
        .expect("valid catalog")
    }

    #[test]
    fn empty_selection_uses_fallbacks() {
        let catalog = catalog();
        let fallback = DisplayFallback {
            placeholder_image_url: "/blank.png".to_string(),
            no_selection_label: "Nothing yet".to_string(),
        };
        let view = ViewerState::new().view(&catalog, &fallback);
        assert_eq!(view.current_image_url, "/blank.png");
        assert_eq!(view.current_section_name, "Nothing yet");
        assert_eq!(view.current_caption, None);
        assert!(!view.has_selection);
        assert_eq!(view.selection, None);
        assert_eq!(view.full_size_url, None);
        assert_eq!(view.nav, None);
        assert_eq!(view.zoom_factor, 1.0);
        assert!(view.can_zoom_in);
        assert!(!view.can_zoom_out);
    }

    #[test]
    fn default_fallback_matches_constants() {
        let fallback = DisplayFallback::default();
        assert_eq!(fallback.placeholder_image_url, DEFAULT_PLACEHOLDER_IMAGE_URL);
        assert_eq!(fallback.no_selection_label, DEFAULT_NO_SELECTION_LABEL);
    }

    #[test]
    fn rows_report_counts_and_expansion() {
        let catalog = catalog();
        let mut state = ViewerState::new();
        let _ = state.toggle_section(SectionId(20));
        let rows = state.section_rows(&catalog);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].attachment_count, rows[0].expanded), (1, false));
        assert_eq!((rows[1].attachment_count, rows[1].expanded), (3, true));
    }

    #[test]
    fn single_attachment_section_never_exposes_navigation() {
        let catalog = catalog();
        let mut state = ViewerState::new();
        let _ = state.select_image(&catalog, SectionId(10), 0).expect("valid");
        assert_eq!(state.nav_controls(&catalog), None);
        let _ = state.next_image(&catalog);
        assert_eq!(state.nav_controls(&catalog), None);
    }

    #[test]
    fn navigation_enablement_follows_index() {
        let catalog = catalog();
        let mut state = ViewerState::new();
        let _ = state.select_image(&catalog, SectionId(20), 0).expect("valid");
        assert_eq!(
            state.nav_controls(&catalog),
            Some(NavControls { can_prev: false, can_next: true, position: 1, len: 3 })
        );
        let _ = state.next_image(&catalog);
        let _ = state.next_image(&catalog);
        assert_eq!(
            state.nav_controls(&catalog),
            Some(NavControls { can_prev: true, can_next: false, position: 3, len: 3 })
        );
    }

    #[test]
    fn selected_view_reports_image_and_section() {
        let catalog = catalog();
        let mut state = ViewerState::new();
        let _ = state.select_image(&catalog, SectionId(20), 1).expect("valid");
        let _ = state.zoom_in();
        let view = state.view(&catalog, &DisplayFallback::default());
        assert_eq!(view.current_image_url, "https://img.example/room-3.jpg");
        assert_eq!(view.current_section_name, "Rooms");
        assert_eq!(view.selection, Some(Selection { section: SectionId(20), index: 1 }));
        assert_eq!(view.current_caption.as_deref(), Some("Room 3"));
        assert_eq!(view.full_size_url.as_deref(), Some("https://img.example/room-3.jpg"));
        assert_eq!(view.zoom_factor, 1.2);
        assert!(view.can_zoom_out);
    }
}
