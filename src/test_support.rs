//! Shared helpers for unit tests.

use std::cell::RefCell;

use crate::{
    library::{Album, Photo},
    navigation::{NavigationRequest, Navigator},
    state::AlbumState,
};

/// Navigator that records every request it receives.
#[derive(Default)]
pub struct RecordingNavigator {
    requests: RefCell<Vec<NavigationRequest>>,
}

impl RecordingNavigator {
    /// Gets the requests received so far, oldest first.
    pub fn requests(&self) -> Vec<NavigationRequest> {
        self.requests.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, request: NavigationRequest) {
        self.requests.borrow_mut().push(request);
    }
}

/// Builds an album whose photos are named `<album>-<n>.jpg`.
pub fn album_with_photos(name: &str, count: usize) -> Album {
    Album::new(
        name,
        (0..count)
            .map(|index| Photo::new(format!("{name}-{index}.jpg")))
            .collect(),
    )
}

/// Builds a state snapshot from albums.
pub fn album_state(albums: Vec<Album>, is_loading: bool) -> AlbumState {
    AlbumState { albums, is_loading }
}
