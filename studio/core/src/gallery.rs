//! Session Gallery
//!
//! In-memory, session-only record of generated images, newest first. Records
//! accumulate for the lifetime of the owning [`crate::Studio`]; there is no
//! deletion path and no persistence of the records themselves.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::haiku::Haiku;

// =============================================================================
// Image Reference
// =============================================================================

/// A displayable reference to generated image bytes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum ImageReference {
    /// Vendor output persisted to the media directory
    File(PathBuf),
    /// A remote reference, used by the placeholder fallback
    Url(String),
}

impl std::fmt::Display for ImageReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

// =============================================================================
// Generated Image Record
// =============================================================================

/// One generated image in the session gallery
///
/// Created on successful generation (or fallback). The optional haiku
/// attachment happens later, as a side effect of generating a poem while an
/// image already exists. Optional association, not inheritance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Originating prompt text, without the style suffix
    pub prompt: String,
    /// Where the image bytes live
    pub reference: ImageReference,
    /// Style id selected for generation
    pub style: String,
    /// Unix-millis creation timestamp
    pub created_at_ms: u64,
    /// Haiku attached after the fact, if any
    pub haiku: Option<Haiku>,
}

impl GeneratedImage {
    /// Create a new record with a fresh id and current timestamp
    #[must_use]
    pub fn new(prompt: impl Into<String>, style: impl Into<String>, reference: ImageReference) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            prompt: prompt.into(),
            reference,
            style: style.into(),
            created_at_ms: crate::haiku::now_ms(),
            haiku: None,
        }
    }
}

// =============================================================================
// Gallery
// =============================================================================

/// Session-scoped image records, newest first
///
/// Plain owned struct with single-caller discipline; owned by one
/// [`crate::Studio`]. No removal.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    images: Vec<GeneratedImage>,
}

impl Gallery {
    /// Create an empty gallery
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record at the front (newest first)
    pub fn add(&mut self, image: GeneratedImage) {
        self.images.insert(0, image);
    }

    /// The newest record, if any
    #[must_use]
    pub fn latest(&self) -> Option<&GeneratedImage> {
        self.images.first()
    }

    /// Mutable access to the newest record, if any
    pub fn latest_mut(&mut self) -> Option<&mut GeneratedImage> {
        self.images.first_mut()
    }

    /// Attach a haiku to the newest record
    ///
    /// Returns whether anything was attached; an empty gallery attaches
    /// nothing. Only the latest record ever receives the attachment.
    pub fn attach_haiku(&mut self, haiku: &Haiku) -> bool {
        match self.latest_mut() {
            Some(image) => {
                image.haiku = Some(haiku.clone());
                true
            }
            None => false,
        }
    }

    /// Look up a record by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GeneratedImage> {
        self.images.iter().find(|i| i.id == id)
    }

    /// Iterate newest first
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedImage> {
        self.images.iter()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the gallery holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
