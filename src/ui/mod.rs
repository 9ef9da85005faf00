//! GNOME HIG-compliant user interface built entirely with Libadwaita.
//!
//! This module provides the application window, the header bar, reusable
//! components and the album views.

pub mod application;
pub mod components;
pub mod header_bar;
pub mod styles;
pub mod views;

pub use {
    application::PhotoAlbumApplication,
    components::{LoadingView, PhotoTile},
    header_bar::HeaderBar,
    views::{PhotoDetailPage, PhotoGrid, PhotoListScreen},
};
