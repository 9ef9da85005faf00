//! Album screen views.
//!
//! This module provides the photo list screen with its fixed two-column photo
//! grid, the content selection it renders from, and the photo detail page
//! reached from a tile.


pub mod content;
pub mod photo_detail;
pub mod photo_grid;
pub mod photo_list;

pub use {
    content::{ScreenContent, select_content},
    photo_detail::PhotoDetailPage,
    photo_grid::{GridLayout, PHOTO_GRID_LAYOUT, PhotoGrid},
    photo_list::PhotoListScreen,
};
