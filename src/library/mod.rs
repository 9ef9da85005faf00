//! Photo album library: models and album sources.
//!
//! This module provides the album and photo data structures plus the
//! sources the albums view-model loads them from.

pub mod fixtures;
pub mod models;
pub mod source;

pub use models::{Album, Photo};
pub use source::{AlbumCatalogue, AlbumSource, JsonAlbumSource, SampleAlbumSource};
