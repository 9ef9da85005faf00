//! Album sources feeding the albums view-model.
//!
//! This module provides the `AlbumSource` trait and its two implementations:
//! the built-in sample catalogue and a JSON catalogue file on disk.

use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use {
    serde::{Deserialize, Serialize},
    serde_json::from_str,
    tracing::debug,
};

use crate::{
    error::LibraryError,
    library::{fixtures::sample_albums, models::Album},
};

/// Provider of the album catalogue.
///
/// Implementations are called from a blocking worker thread, so they may
/// perform synchronous I/O.
pub trait AlbumSource: Send + Sync {
    /// Fetches every album in catalogue order.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError` if the catalogue cannot be read or is invalid.
    fn fetch_albums(&self) -> Result<Vec<Album>, LibraryError>;
}

/// Source returning the built-in sample albums.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleAlbumSource;

impl AlbumSource for SampleAlbumSource {
    fn fetch_albums(&self) -> Result<Vec<Album>, LibraryError> {
        Ok(sample_albums())
    }
}

/// On-disk catalogue layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AlbumCatalogue {
    /// Albums in display order.
    pub albums: Vec<Album>,
}

/// Source reading an `AlbumCatalogue` from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonAlbumSource {
    path: PathBuf,
}

impl JsonAlbumSource {
    /// Creates a new JSON source for the given catalogue path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON catalogue file
    ///
    /// # Returns
    ///
    /// A new `JsonAlbumSource` instance.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Gets the catalogue path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AlbumSource for JsonAlbumSource {
    fn fetch_albums(&self) -> Result<Vec<Album>, LibraryError> {
        debug!("Reading album catalogue from {:?}", self.path);
        let contents = read_to_string(&self.path)?;
        let catalogue: AlbumCatalogue = from_str(&contents)?;

        if let Some(index) = catalogue
            .albums
            .iter()
            .position(|album| album.name.trim().is_empty())
        {
            return Err(LibraryError::InvalidData {
                reason: format!("album at index {index} has an empty name"),
            });
        }

        debug!(
            "Loaded {} albums ({} photos) from catalogue",
            catalogue.albums.len(),
            catalogue.albums.iter().map(Album::photo_count).sum::<usize>()
        );
        Ok(catalogue.albums)
    }
}
