use serde::{Deserialize, Serialize};

use crate::filename::derive_filename;

/// One card scraped from a listing page.
///
/// Produced from a single card container and consumed straight away by the
/// downloader. Titles are not unique: two entries deriving the same filename
/// will overwrite each other on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    /// Human-readable title from the card link (e.g. "Pikachu · Prismatic Evolutions (PRE) #001").
    pub title: String,
    /// Absolute URL of the card image.
    pub image_url: String,
}

impl CardEntry {
    pub fn new(title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
        }
    }

    /// Filename for this card under the default filename policy.
    pub fn filename(&self) -> String {
        derive_filename(&self.title)
    }
}
