//! Loading placeholder shown while album content is being fetched.
//!
//! This module implements the stateless `LoadingView` component: a centered
//! column with a localized message and an indeterminate spinner.

use libadwaita::{
    Spinner,
    gtk::{
        AccessibleRole::Status,
        Align::{Center, Fill},
        Box as GtkBox,
        Justification::Center as JustifyCenter,
        Label,
        Orientation::Vertical,
        Widget,
    },
    prelude::{BoxExt, Cast},
};

/// Gap between the message and the spinner.
pub const LOADING_SPACING: i32 = 5;

/// Spinner edge length in pixels.
const SPINNER_SIZE: i32 = 32;

/// Loading placeholder with a message and an indeterminate spinner.
#[derive(Clone)]
pub struct LoadingView {
    /// The underlying GTK widget container.
    pub widget: Widget,
    /// Message label.
    pub message_label: Label,
    /// Indeterminate progress indicator.
    pub spinner: Spinner,
}

impl LoadingView {
    /// Creates a new LoadingView component.
    ///
    /// # Arguments
    ///
    /// * `message` - Already localized loading message
    ///
    /// # Returns
    ///
    /// A new `LoadingView` instance.
    pub fn new(message: &str) -> Self {
        let message_label = Label::builder()
            .label(message)
            .halign(Center)
            .wrap(true)
            .justify(JustifyCenter)
            .css_classes(["title-4"])
            .build();

        let spinner = Spinner::builder()
            .width_request(SPINNER_SIZE)
            .height_request(SPINNER_SIZE)
            .halign(Center)
            .build();

        let column = GtkBox::builder()
            .orientation(Vertical)
            .halign(Center)
            .valign(Center)
            .spacing(LOADING_SPACING)
            .build();
        column.append(&message_label);
        column.append(&spinner);

        let container = GtkBox::builder()
            .orientation(Vertical)
            .halign(Fill)
            .valign(Fill)
            .hexpand(true)
            .vexpand(true)
            .accessible_role(Status)
            .css_classes(["loading-overlay"])
            .build();
        container.append(&column);

        Self {
            widget: container.upcast::<Widget>(),
            message_label,
            spinner,
        }
    }
}

#[cfg(test)]
mod tests {
    use libadwaita::prelude::WidgetExt;

    use crate::ui::components::loading_view::LoadingView;

    #[test]
    #[ignore = "Requires GTK display for UI testing"]
    fn test_loading_view_creation() {
        let view = LoadingView::new("Searching album content…");

        assert_eq!(
            view.message_label.label().as_str(),
            "Searching album content…"
        );
        assert!(view.widget.has_css_class("loading-overlay"));
        assert_eq!(view.spinner.width_request(), 32);
    }
}
