//! Sample album catalogue used when no catalogue file is configured.

use crate::library::models::{Album, Photo};

/// Number of photos in each sample album.
const SAMPLE_PHOTOS_PER_ALBUM: usize = 6;

/// Builds the sample photo list shared by all sample albums.
///
/// # Returns
///
/// Photos named `photo 1.jpg` through `photo N.jpg`.
#[must_use]
pub fn sample_photos() -> Vec<Photo> {
    (1..=SAMPLE_PHOTOS_PER_ALBUM)
        .map(|index| Photo::new(format!("photo {index}.jpg")))
        .collect()
}

/// Builds the sample album catalogue.
///
/// The last album is intentionally empty so the empty grid can be seen
/// without a catalogue file.
#[must_use]
pub fn sample_albums() -> Vec<Album> {
    vec![
        Album::new("album 1", sample_photos()),
        Album::new("album 2", sample_photos().into_iter().rev().collect()),
        Album::new("album 3", Vec::new()),
    ]
}
