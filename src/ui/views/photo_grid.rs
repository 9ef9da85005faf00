//! Fixed two-column grid of photo tiles.
//!
//! This module implements the `PhotoGrid` view that lays out one `PhotoTile`
//! per photo in row-major order, and the `GridLayout` describing its geometry.

use std::rc::Rc;

use {
    libadwaita::{
        gtk::{
            AccessibleRole::Grid as GridRole,
            Align::Start,
            Grid,
            PolicyType::{Automatic, Never},
            ScrolledWindow, Widget,
        },
        prelude::{Cast, GridExt, WidgetExt},
    },
    tracing::debug,
};

use crate::{library::Photo, navigation::Navigator, ui::components::PhotoTile};

/// Geometry of a fixed-column grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of columns, independent of the viewport width.
    pub columns: usize,
    /// Gap between rows and between columns.
    pub spacing: i32,
    /// Padding around the grid edge.
    pub padding: i32,
}

/// Layout of the album photo grid.
pub const PHOTO_GRID_LAYOUT: GridLayout = GridLayout {
    columns: 2,
    spacing: 5,
    padding: 5,
};

impl GridLayout {
    /// Gets the `(column, row)` cell of the item at `index` (row-major).
    #[must_use]
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index % self.columns, index / self.columns)
    }

    /// Gets the number of rows needed for `item_count` items.
    #[must_use]
    pub fn row_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.columns)
    }
}

/// Scrollable grid of photo tiles for one album.
pub struct PhotoGrid {
    /// The underlying GTK widget (scrolled window).
    pub widget: Widget,
    /// The grid container holding the tiles.
    pub grid: Grid,
    /// Tiles currently displayed, in photo order.
    pub tiles: Vec<PhotoTile>,
    /// Geometry used to place tiles.
    pub layout: GridLayout,
    album_name: String,
    navigator: Rc<dyn Navigator>,
}

impl PhotoGrid {
    /// Creates a new, empty PhotoGrid.
    ///
    /// # Arguments
    ///
    /// * `album_name` - Album whose photos are displayed
    /// * `navigator` - Navigator handed to every tile
    ///
    /// # Returns
    ///
    /// A new `PhotoGrid` instance.
    pub fn new(album_name: impl Into<String>, navigator: Rc<dyn Navigator>) -> Self {
        let layout = PHOTO_GRID_LAYOUT;

        let grid = Grid::builder()
            .column_homogeneous(true)
            .row_spacing(layout.spacing)
            .column_spacing(layout.spacing)
            .margin_top(layout.padding)
            .margin_bottom(layout.padding)
            .margin_start(layout.padding)
            .margin_end(layout.padding)
            .valign(Start)
            .hexpand(true)
            .accessible_role(GridRole)
            .css_classes(["photo-grid"])
            .build();

        let scrolled_window = ScrolledWindow::builder()
            .hscrollbar_policy(Never)
            .vscrollbar_policy(Automatic)
            .hexpand(true)
            .vexpand(true)
            .child(&grid)
            .build();

        Self {
            widget: scrolled_window.upcast::<Widget>(),
            grid,
            tiles: Vec::new(),
            layout,
            album_name: album_name.into(),
            navigator,
        }
    }

    /// Replaces the displayed photos.
    ///
    /// # Arguments
    ///
    /// * `photos` - Photos in display order; empty renders an empty grid
    pub fn set_photos(&mut self, photos: &[Photo]) {
        self.clear();

        for (index, photo) in photos.iter().enumerate() {
            let tile = PhotoTile::builder(photo.clone(), self.album_name.as_str())
                .navigator(Rc::clone(&self.navigator))
                .build();

            let (column, row) = self.layout.position(index);
            self.grid
                .attach(&tile.widget, column as i32, row as i32, 1, 1);
            self.tiles.push(tile);
        }

        debug!(
            "PhotoGrid: {} tiles in {} rows for album '{}'",
            self.tiles.len(),
            self.layout.row_count(self.tiles.len()),
            self.album_name
        );
    }

    /// Removes every tile.
    pub fn clear(&mut self) {
        while let Some(child) = self.grid.first_child() {
            self.grid.remove(&child);
        }
        self.tiles.clear();
    }

    /// Gets the number of displayed tiles.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}
