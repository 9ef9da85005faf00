//! Header bar showing the current album.
//!
//! This module implements the header bar placed at the top of the photo list
//! screen: the album name as title and a refresh action.

use libadwaita::{
    HeaderBar as LibadwaitaHeaderBar, WindowTitle,
    gtk::Button,
};

/// Basic header bar with the album title and a refresh button.
pub struct HeaderBar {
    /// The underlying Libadwaita header bar widget.
    pub widget: LibadwaitaHeaderBar,
    /// Title widget holding the album name.
    pub title: WindowTitle,
    /// Refresh button; the app shell connects it to the albums view-model.
    pub refresh_button: Button,
}

impl HeaderBar {
    /// Creates a new header bar instance.
    ///
    /// # Arguments
    ///
    /// * `title` - Text shown as the header title
    ///
    /// # Returns
    ///
    /// A new `HeaderBar` instance.
    pub fn new(title: &str) -> Self {
        let title = WindowTitle::new(title, "");

        let refresh_button = Button::builder()
            .icon_name("view-refresh-symbolic")
            .tooltip_text("Refresh")
            .build();

        let widget = LibadwaitaHeaderBar::builder()
            .title_widget(&title)
            .build();
        widget.pack_end(&refresh_button);

        Self {
            widget,
            title,
            refresh_button,
        }
    }
}

#[cfg(test)]
mod tests {
    use libadwaita::prelude::ButtonExt;

    use crate::ui::header_bar::HeaderBar;

    #[test]
    #[ignore = "Requires GTK display for UI testing"]
    fn test_header_bar_creation() {
        let header_bar = HeaderBar::new("Trip");

        assert_eq!(header_bar.title.title().as_str(), "Trip");
        assert_eq!(
            header_bar.refresh_button.icon_name().as_deref(),
            Some("view-refresh-symbolic")
        );
    }
}
