//! Photo detail page pushed when a photo tile is activated.

use libadwaita::{
    HeaderBar as LibadwaitaHeaderBar, NavigationPage, ToolbarView, WindowTitle,
    gtk::{Align::Center, Box as GtkBox, Orientation::Vertical},
    prelude::BoxExt,
};

use crate::{
    i18n::Localizer, navigation::NavigationRequest, ui::components::photo_tile::TILE_SIZE,
};

/// Placeholder edge length on the detail page.
const DETAIL_PLACEHOLDER_SIZE: i32 = TILE_SIZE * 2;

/// Navigation page showing a single photo.
pub struct PhotoDetailPage {
    /// The navigation page pushed on the navigation view.
    pub page: NavigationPage,
    /// Title widget (photo name, album subtitle).
    pub title: WindowTitle,
}

impl PhotoDetailPage {
    /// Creates the detail page for `request`.
    ///
    /// The page tag is the request's route path, so an already open detail
    /// page can be found again by tag.
    pub fn new(request: &NavigationRequest, localizer: &Localizer) -> Self {
        let subtitle =
            localizer.tr_args("photo-detail-subtitle", &[("album", &request.album_name)]);
        let title = WindowTitle::new(&request.photo_name, &subtitle);

        let header_bar = LibadwaitaHeaderBar::builder().title_widget(&title).build();

        let placeholder = GtkBox::builder()
            .width_request(DETAIL_PLACEHOLDER_SIZE)
            .height_request(DETAIL_PLACEHOLDER_SIZE)
            .halign(Center)
            .valign(Center)
            .css_classes(["photo-placeholder"])
            .build();

        let content = GtkBox::builder()
            .orientation(Vertical)
            .halign(Center)
            .valign(Center)
            .margin_top(12)
            .margin_bottom(12)
            .margin_start(12)
            .margin_end(12)
            .build();
        content.append(&placeholder);

        let toolbar_view = ToolbarView::builder().content(&content).build();
        toolbar_view.add_top_bar(&header_bar);

        let page = NavigationPage::builder()
            .title(request.photo_name.as_str())
            .tag(request.route().path())
            .child(&toolbar_view)
            .build();

        Self { page, title }
    }
}

#[cfg(test)]
mod tests {
    use libadwaita::prelude::NavigationPageExt;

    use crate::{
        i18n::Localizer, navigation::NavigationRequest, ui::views::photo_detail::PhotoDetailPage,
    };

    #[test]
    #[ignore = "Requires GTK display for UI testing"]
    fn test_detail_page_tag_and_title() {
        let localizer = Localizer::new(Some("en-US")).unwrap();
        let request = NavigationRequest::new("Trip", "sunset.jpg");
        let detail = PhotoDetailPage::new(&request, &localizer);

        assert_eq!(detail.page.tag().as_deref(), Some("photo_detail/Trip/sunset.jpg"));
        assert_eq!(detail.title.title().as_str(), "sunset.jpg");
        assert_eq!(detail.title.subtitle().as_str(), "Photo in Trip");
    }
}
