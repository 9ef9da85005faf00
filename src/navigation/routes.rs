//! Route encoding for the screens reachable by navigation.
//!
//! Routes are rendered as slash-separated paths and used as navigation page
//! tags, so each segment is percent-encoded to keep album and photo names
//! containing `/` from splitting the path.

use std::fmt::{Display, Formatter, Result as FmtResult};

use urlencoding::encode;

/// Path prefix of the photo list screen.
pub const PHOTO_LIST_ROUTE: &str = "photo_list";
/// Path prefix of the photo detail screen.
pub const PHOTO_DETAIL_ROUTE: &str = "photo_detail";

/// A screen reachable by navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Grid of the photos in one album.
    PhotoList { album_name: String },
    /// A single photo of an album.
    PhotoDetail {
        album_name: String,
        photo_name: String,
    },
}

impl Route {
    /// Renders the route as a path such as `photo_detail/Trip/sunset.jpg`.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::PhotoList { album_name } => {
                format!("{PHOTO_LIST_ROUTE}/{}", encode_segment(album_name))
            }
            Route::PhotoDetail {
                album_name,
                photo_name,
            } => format!(
                "{PHOTO_DETAIL_ROUTE}/{}/{}",
                encode_segment(album_name),
                encode_segment(photo_name)
            ),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.path())
    }
}

/// Percent-encodes one path segment.
fn encode_segment(segment: &str) -> String {
    encode(segment).into_owned()
}
