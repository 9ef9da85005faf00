//! Content selection for the photo list screen.
//!
//! Turns an album state snapshot into what the screen must show for one
//! album: its photos and whether the loading view is visible.

use crate::{error::LookupError, library::Photo, state::AlbumState};

/// What the photo list screen renders for one state snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenContent {
    /// Whether the loading view is shown.
    pub show_loading: bool,
    /// Photos of the selected album, in album order.
    pub photos: Vec<Photo>,
}

impl ScreenContent {
    /// Gets the number of tiles the grid will contain.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.photos.len()
    }
}

/// Selects the content of the photo list screen for `album_name`.
///
/// The loading view does not suppress the grid: while `is_loading` is set
/// both are shown, the loading view on top.
///
/// # Arguments
///
/// * `album_name` - Album the screen was opened for
/// * `state` - Current album state snapshot
///
/// # Errors
///
/// Returns `LookupError::AlbumNotFound` if no album has that name.
pub fn select_content(album_name: &str, state: &AlbumState) -> Result<ScreenContent, LookupError> {
    let album = state.find_album(album_name)?;

    Ok(ScreenContent {
        show_loading: state.is_loading,
        photos: album.photos.clone(),
    })
}
