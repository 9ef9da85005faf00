//! Photo Album - album photo grid viewer
//!
//! A small Libadwaita photo album: it loads an album catalogue into shared,
//! observable state and shows the photos of one album in a fixed two-column
//! grid, with a loading overlay while the catalogue is being fetched and a
//! detail page for every photo.

pub mod config;
pub mod error;
pub mod i18n;
pub mod library;
pub mod navigation;
pub mod state;
pub mod ui;

#[cfg(test)]
mod test_support;

// Re-export key types for convenience
pub use {
    config::{SettingsManager, UserSettings},
    error::{LibraryError, LookupError, UiError},
    i18n::Localizer,
    library::{Album, AlbumSource, Photo},
    navigation::{NavigationRequest, Navigator},
    state::{AlbumState, AlbumsViewModel, AppState, AppStateEvent},
    ui::PhotoAlbumApplication,
};
