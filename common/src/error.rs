//! Error types for catalog loading and viewer transitions.

use thiserror::Error;

use crate::catalog::{AttachmentId, SectionId};

/// Raised once, when a catalog is built or parsed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog invalid: section id {0} appears more than once")]
    DuplicateSectionId(SectionId),

    #[error("catalog invalid: attachment id {attachment} appears more than once (second time in section {section})")]
    DuplicateAttachmentId {
        attachment: AttachmentId,
        section: SectionId,
    },

    #[error("catalog invalid: failed to parse catalog json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A transition was asked to do something that does not fit the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ViewerError {
    #[error("invalid argument: section {0} is not part of the catalog")]
    UnknownSection(SectionId),

    #[error("invalid argument: index {index} out of range for section {section} with {len} attachments")]
    IndexOutOfRange {
        section: SectionId,
        index: usize,
        len: usize,
    },
}
