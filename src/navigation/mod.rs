//! Navigation between screens.
//!
//! Screens never hold a router: they receive a `Navigator` capability and hand
//! it `NavigationRequest`s. The concrete `NavigationController` turns requests
//! into pages pushed on a Libadwaita navigation view.

pub mod controller;
pub mod routes;

pub use {controller::NavigationController, routes::Route};

/// Request to open the detail page of one photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationRequest {
    /// Album containing the photo.
    pub album_name: String,
    /// Photo to open.
    pub photo_name: String,
}

impl NavigationRequest {
    /// Creates a new navigation request.
    pub fn new(album_name: impl Into<String>, photo_name: impl Into<String>) -> Self {
        Self {
            album_name: album_name.into(),
            photo_name: photo_name.into(),
        }
    }

    /// Gets the route this request resolves to.
    #[must_use]
    pub fn route(&self) -> Route {
        Route::PhotoDetail {
            album_name: self.album_name.clone(),
            photo_name: self.photo_name.clone(),
        }
    }
}

/// Capability to perform navigation.
///
/// Dispatch is fire-and-forget: implementations must not call back into the
/// screen that issued the request.
pub trait Navigator {
    /// Navigates to the screen described by `request`.
    fn navigate(&self, request: NavigationRequest);
}
