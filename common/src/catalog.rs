//! Read-only section / attachment hierarchy shown by the media browser.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentId(pub u64);

impl Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for AttachmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: AttachmentId,
    pub url: String,
    pub caption: String,
}

/// A named group of attachments. Attachment order is the previous / next order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub name: String,
    pub attachments: Vec<Attachment>,
}

impl Section {
    pub fn len(&self) -> usize {
        self.attachments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }

    pub fn attachment(&self, index: usize) -> Option<&Attachment> {
        self.attachments.get(index)
    }
}

/// Serialized shape of a catalog, before id validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogData {
    pub title: Option<String>,
    pub cover_image_url: Option<String>,
    pub sections: Vec<Section>,
}

/// Validated, immutable catalog. Section and attachment ids are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogData", into = "CatalogData")]
pub struct Catalog {
    title: Option<String>,
    cover_image_url: Option<String>,
    sections: Vec<Section>,
    position_by_id: HashMap<SectionId, usize>,
}

impl Catalog {
    pub fn new(sections: Vec<Section>) -> Result<Self, CatalogError> {
        Self::try_from(CatalogData {
            sections,
            ..Default::default()
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::try_from(data)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_cover_image_url(mut self, url: impl Into<String>) -> Self {
        self.cover_image_url = Some(url.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn cover_image_url(&self) -> Option<&str> {
        self.cover_image_url.as_deref()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.position_by_id.get(&id).map(|&pos| &self.sections[pos])
    }

    pub fn contains_section(&self, id: SectionId) -> bool {
        self.position_by_id.contains_key(&id)
    }
}

impl TryFrom<CatalogData> for Catalog {
    type Error = CatalogError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        let mut position_by_id = HashMap::with_capacity(data.sections.len());
        let mut seen_attachments = HashSet::new();
        for (pos, section) in data.sections.iter().enumerate() {
            if position_by_id.insert(section.id, pos).is_some() {
                tracing::warn!("duplicate section id {} in catalog", section.id);
                return Err(CatalogError::DuplicateSectionId(section.id));
            }
            for attachment in &section.attachments {
                if !seen_attachments.insert(attachment.id) {
                    tracing::warn!("duplicate attachment id {} in section {}", attachment.id, section.id);
                    return Err(CatalogError::DuplicateAttachmentId {
                        attachment: attachment.id,
                        section: section.id,
                    });
                }
            }
        }
        tracing::debug!(
            "catalog loaded: {} sections, {} attachments",
            data.sections.len(),
            seen_attachments.len()
        );
        Ok(Self {
            title: data.title,
            cover_image_url: data.cover_image_url,
            sections: data.sections,
            position_by_id,
        })
    }
}

impl From<Catalog> for CatalogData {
    fn from(catalog: Catalog) -> Self {
        Self {
            title: catalog.title,
            cover_image_url: catalog.cover_image_url,
            sections: catalog.sections,
        }
    }
}
