//! Shared album state and the view-model that writes it.
//!
//! This module provides the observable state container read by the screens
//! and the view-model that keeps it up to date.

pub mod app_state;
pub mod view_model;

pub use {
    app_state::{AlbumState, AppState, AppStateEvent},
    view_model::AlbumsViewModel,
};
