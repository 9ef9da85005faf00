//! Photo tile component shown in the album photo grid.
//!
//! This module implements the `PhotoTile` component: a clickable card holding
//! a fixed-size rounded placeholder for one photo. Activating the card hands
//! a navigation request to the injected `Navigator`.

use std::rc::Rc;

use {
    libadwaita::{
        gtk::{
            AccessibleRole::Button as AccessibleButton, Align::Center, Box as GtkBox, Button,
            Orientation::Vertical, Overflow::Hidden, Widget,
        },
        prelude::{BoxExt, ButtonExt, Cast},
    },
    tracing::debug,
};

use crate::{
    library::Photo,
    navigation::{NavigationRequest, Navigator},
};

/// Edge length of the square photo placeholder.
pub const TILE_SIZE: i32 = 224;

/// Builder pattern for configuring PhotoTile components.
///
/// The photo and its album are required and passed to `PhotoTile::builder`;
/// the navigator is optional.
pub struct PhotoTileBuilder {
    photo: Photo,
    album_name: String,
    navigator: Option<Rc<dyn Navigator>>,
}

impl PhotoTileBuilder {
    /// Sets the navigator receiving activation requests.
    ///
    /// # Arguments
    ///
    /// * `navigator` - Navigation capability
    ///
    /// # Returns
    ///
    /// The builder instance for method chaining.
    pub fn navigator(mut self, navigator: Rc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Builds the PhotoTile component.
    ///
    /// A tile built without a navigator renders normally but ignores
    /// activation.
    ///
    /// # Returns
    ///
    /// A new `PhotoTile` instance.
    pub fn build(self) -> PhotoTile {
        PhotoTile::new(self.photo, self.album_name, self.navigator)
    }
}

/// Clickable card with a rounded photo placeholder.
pub struct PhotoTile {
    /// The underlying GTK widget (card button).
    pub widget: Widget,
    /// The card button receiving clicks and keyboard activation.
    pub button: Button,
    /// The colored placeholder standing in for the image.
    pub placeholder: GtkBox,
    /// Photo shown by this tile.
    pub photo: Photo,
    /// Album the photo belongs to.
    pub album_name: String,
}

impl PhotoTile {
    /// Creates a new PhotoTile component.
    ///
    /// # Arguments
    ///
    /// * `photo` - The photo to display
    /// * `album_name` - Album the photo belongs to
    /// * `navigator` - Optional navigator receiving activation requests
    ///
    /// # Returns
    ///
    /// A new `PhotoTile` instance.
    pub fn new(photo: Photo, album_name: String, navigator: Option<Rc<dyn Navigator>>) -> Self {
        let placeholder = GtkBox::builder()
            .width_request(TILE_SIZE)
            .height_request(TILE_SIZE)
            .halign(Center)
            .valign(Center)
            .overflow(Hidden)
            .css_classes(["photo-placeholder"])
            .build();

        let column = GtkBox::builder()
            .orientation(Vertical)
            .halign(Center)
            .build();
        column.append(&placeholder);

        let button = Button::builder()
            .child(&column)
            .hexpand(true)
            .accessible_role(AccessibleButton)
            .tooltip_text(photo.name.as_str())
            .css_classes(["card", "photo-tile"])
            .build();

        if let Some(navigator) = navigator {
            let album_name = album_name.clone();
            let photo = photo.clone();
            button.connect_clicked(move |_| {
                Self::dispatch(navigator.as_ref(), &album_name, &photo);
            });
        }

        Self {
            widget: button.clone().upcast::<Widget>(),
            button,
            placeholder,
            photo,
            album_name,
        }
    }

    /// Creates a PhotoTile builder for configuration.
    ///
    /// # Arguments
    ///
    /// * `photo` - The photo to display
    /// * `album_name` - Album the photo belongs to, carried in navigation requests
    ///
    /// # Returns
    ///
    /// A new `PhotoTileBuilder` instance.
    pub fn builder(photo: Photo, album_name: impl Into<String>) -> PhotoTileBuilder {
        PhotoTileBuilder {
            photo,
            album_name: album_name.into(),
            navigator: None,
        }
    }

    /// Sends the activation request of `photo` to `navigator`.
    ///
    /// This is what a click or keyboard activation of a tile runs.
    pub fn dispatch(navigator: &dyn Navigator, album_name: &str, photo: &Photo) {
        debug!("Photo tile activated: {album_name}/{}", photo.name);
        navigator.navigate(NavigationRequest::new(album_name, photo.name.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use libadwaita::prelude::{ButtonExt, WidgetExt};

    use crate::{
        library::Photo,
        navigation::NavigationRequest,
        test_support::RecordingNavigator,
        ui::components::photo_tile::{PhotoTile, TILE_SIZE},
    };

    #[test]
    fn test_dispatch_sends_single_request() {
        let navigator = RecordingNavigator::default();

        PhotoTile::dispatch(&navigator, "Trip", &Photo::new("sunset.jpg"));

        assert_eq!(
            navigator.requests(),
            vec![NavigationRequest::new("Trip", "sunset.jpg")]
        );
    }

    #[test]
    #[ignore = "Requires GTK display for UI testing"]
    fn test_photo_tile_click_navigates() {
        let navigator = Rc::new(RecordingNavigator::default());
        let tile = PhotoTile::builder(Photo::new("sunset.jpg"), "Trip")
            .navigator(navigator.clone())
            .build();

        assert_eq!(tile.placeholder.width_request(), TILE_SIZE);
        assert_eq!(tile.placeholder.height_request(), TILE_SIZE);
        assert!(tile.button.has_css_class("card"));

        tile.button.emit_clicked();

        assert_eq!(
            navigator.requests(),
            vec![NavigationRequest::new("Trip", "sunset.jpg")]
        );
    }

    #[test]
    #[ignore = "Requires GTK display for UI testing"]
    fn test_photo_tile_without_navigator_ignores_clicks() {
        let tile = PhotoTile::builder(Photo::new("sunset.jpg"), "Trip").build();

        tile.button.emit_clicked();

        assert_eq!(tile.photo.name, "sunset.jpg");
        assert_eq!(tile.album_name, "Trip");
    }
}
