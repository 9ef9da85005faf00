//! Reusable UI components following GNOME HIG guidelines.
//!
//! This module provides the building blocks of the album screen: the loading
//! placeholder and the clickable photo tile.

pub mod loading_view;
pub mod photo_tile;

pub use {loading_view::LoadingView, photo_tile::PhotoTile};
