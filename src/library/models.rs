//! Data models for the photo album library.
//!
//! This module defines the core data structures shared between the album
//! sources, the application state, and the UI: `Album` and `Photo`.

use serde::{Deserialize, Serialize};

/// Represents a single photo inside an album.
///
/// Only the name is modeled; it is unique within its album and is used both
/// for display and as the navigation key of the photo detail page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Photo {
    /// Photo name (e.g. "sunset.jpg").
    pub name: String,
}

impl Photo {
    /// Creates a new photo with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Represents a named collection of photos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Album {
    /// Album name, used as the lookup key.
    pub name: String,
    /// Photos in display order.
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl Album {
    /// Creates a new album.
    ///
    /// # Arguments
    ///
    /// * `name` - Album name
    /// * `photos` - Photos in display order
    ///
    /// # Returns
    ///
    /// A new `Album` instance.
    pub fn new(name: impl Into<String>, photos: Vec<Photo>) -> Self {
        Self {
            name: name.into(),
            photos,
        }
    }

    /// Returns the number of photos in the album.
    #[must_use]
    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }
}
