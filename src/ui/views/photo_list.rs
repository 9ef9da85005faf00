//! Album photo grid screen.
//!
//! This module implements the `PhotoListScreen`: a header bar titled with the
//! album name above the album's photo grid, with the loading view overlaid
//! while the albums view-model is fetching. The screen subscribes to
//! `AppState` when built and re-renders on every change notification until it
//! is unmounted.

use std::{cell::RefCell, rc::Rc};

use {
    libadwaita::{
        ToolbarView,
        glib::{JoinHandle, MainContext},
        gtk::{Overlay, Widget},
        prelude::{Cast, WidgetExt},
    },
    tokio::sync::broadcast::error::RecvError::{Closed, Lagged},
    tracing::debug,
};

use crate::{
    error::{ErrorReporter, LookupError, UiError},
    i18n::Localizer,
    navigation::Navigator,
    state::AppState,
    ui::{
        components::LoadingView,
        header_bar::HeaderBar,
        views::{
            content::{ScreenContent, select_content},
            photo_grid::PhotoGrid,
        },
    },
};

/// Message key of the loading view text.
pub const LOADING_MESSAGE_KEY: &str = "searching-album-content";

/// Builder pattern for configuring PhotoListScreen components.
#[derive(Default)]
pub struct PhotoListScreenBuilder {
    album_name: Option<String>,
    app_state: Option<AppState>,
    navigator: Option<Rc<dyn Navigator>>,
    localizer: Option<Rc<Localizer>>,
}

impl PhotoListScreenBuilder {
    /// Sets the album to display.
    ///
    /// # Arguments
    ///
    /// * `album_name` - Name of the album
    ///
    /// # Returns
    ///
    /// The builder instance for method chaining.
    pub fn album_name(mut self, album_name: impl Into<String>) -> Self {
        self.album_name = Some(album_name.into());
        self
    }

    /// Sets the shared state the screen observes.
    ///
    /// # Arguments
    ///
    /// * `app_state` - Shared album state
    ///
    /// # Returns
    ///
    /// The builder instance for method chaining.
    pub fn app_state(mut self, app_state: AppState) -> Self {
        self.app_state = Some(app_state);
        self
    }

    /// Sets the navigator receiving tile activations.
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

    /// Sets the localizer resolving the loading message.
    ///
    /// # Arguments
    ///
    /// * `localizer` - Loaded translations
    ///
    /// # Returns
    ///
    /// The builder instance for method chaining.
    pub fn localizer(mut self, localizer: Rc<Localizer>) -> Self {
        self.localizer = Some(localizer);
        self
    }

    /// Builds and mounts the PhotoListScreen.
    ///
    /// # Errors
    ///
    /// Returns `UiError::InitializationError` if a required part is missing,
    /// or `UiError::Lookup` if the album does not exist in the current state.
    pub fn build(self) -> Result<PhotoListScreen, UiError> {
        let missing = |part: &str| UiError::InitializationError(format!("{part} must be set"));

        PhotoListScreen::new(
            self.album_name.ok_or_else(|| missing("album name"))?,
            self.app_state.ok_or_else(|| missing("app state"))?,
            self.navigator.ok_or_else(|| missing("navigator"))?,
            &*self.localizer.ok_or_else(|| missing("localizer"))?,
        )
    }
}

/// Aborts the state-observing task when dropped.
pub struct StateSubscription {
    handle: JoinHandle<()>,
}

impl Drop for StateSubscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Screen showing the photos of one album.
pub struct PhotoListScreen {
    /// The underlying GTK widget (toolbar view).
    pub widget: Widget,
    /// Header bar titled with the album name.
    pub header_bar: HeaderBar,
    /// Loading view overlaid on the grid.
    pub loading_view: LoadingView,
    /// Photo grid of the album.
    pub grid: Rc<RefCell<PhotoGrid>>,
    album_name: String,
    app_state: AppState,
    subscription: RefCell<Option<StateSubscription>>,
}

impl PhotoListScreen {
    /// Creates the screen, renders the current state and subscribes to changes.
    ///
    /// # Arguments
    ///
    /// * `album_name` - Album to display
    /// * `app_state` - Shared album state to observe
    /// * `navigator` - Navigator receiving tile activations
    /// * `localizer` - Translations for the loading message
    ///
    /// # Errors
    ///
    /// Returns `UiError::Lookup` if `album_name` is not in the current state.
    pub fn new(
        album_name: String,
        app_state: AppState,
        navigator: Rc<dyn Navigator>,
        localizer: &Localizer,
    ) -> Result<Self, UiError> {
        let header_bar = HeaderBar::new(&album_name);
        let loading_view = LoadingView::new(&localizer.tr(LOADING_MESSAGE_KEY));
        let grid = Rc::new(RefCell::new(PhotoGrid::new(album_name.as_str(), navigator)));

        render(&album_name, &app_state, &grid, &loading_view)?;

        let overlay = Overlay::builder().child(&grid.borrow().widget).build();
        overlay.add_overlay(&loading_view.widget);

        let toolbar_view = ToolbarView::builder().content(&overlay).build();
        toolbar_view.add_top_bar(&header_bar.widget);

        let screen = Self {
            widget: toolbar_view.upcast::<Widget>(),
            header_bar,
            loading_view,
            grid,
            album_name,
            app_state,
            subscription: RefCell::new(None),
        };
        screen.mount();

        Ok(screen)
    }

    /// Creates a PhotoListScreen builder for configuration.
    ///
    /// # Returns
    ///
    /// A new `PhotoListScreenBuilder` instance.
    pub fn builder() -> PhotoListScreenBuilder {
        PhotoListScreenBuilder::default()
    }

    /// Gets the displayed album name.
    pub fn album_name(&self) -> &str {
        &self.album_name
    }

    /// Whether the screen is currently subscribed to state changes.
    pub fn is_mounted(&self) -> bool {
        self.subscription.borrow().is_some()
    }

    /// Re-renders from the current state snapshot.
    ///
    /// # Errors
    ///
    /// Returns `LookupError` if the album has disappeared from the state; the
    /// grid is cleared in that case.
    pub fn refresh(&self) -> Result<ScreenContent, LookupError> {
        render(&self.album_name, &self.app_state, &self.grid, &self.loading_view)
    }

    /// Stops observing state changes.
    pub fn unmount(&self) {
        if self.subscription.borrow_mut().take().is_some() {
            debug!("PhotoListScreen '{}': unmounted", self.album_name);
        }
    }

    fn mount(&self) {
        let mut receiver = self.app_state.subscribe();
        let album_name = self.album_name.clone();
        let app_state = self.app_state.clone();
        let grid = Rc::clone(&self.grid);
        let loading_view = self.loading_view.clone();

        debug!("PhotoListScreen '{album_name}': subscribing to AppState changes");
        let handle = MainContext::default().spawn_local(async move {
            loop {
                match receiver.recv().await {
                    Ok(event) => {
                        debug!("PhotoListScreen '{album_name}': {event:?}");
                    }
                    Err(Lagged(skipped)) => {
                        debug!("PhotoListScreen '{album_name}': skipped {skipped} events");
                    }
                    Err(Closed) => {
                        debug!("PhotoListScreen state subscription channel closed");
                        break;
                    }
                }

                if let Err(e) = render(&album_name, &app_state, &grid, &loading_view) {
                    ErrorReporter::lookup_failure(&e, &album_name);
                }
            }
        });

        *self.subscription.borrow_mut() = Some(StateSubscription { handle });
    }
}

impl Drop for PhotoListScreen {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Renders one state snapshot into the grid and loading view.
fn render(
    album_name: &str,
    app_state: &AppState,
    grid: &RefCell<PhotoGrid>,
    loading_view: &LoadingView,
) -> Result<ScreenContent, LookupError> {
    match select_content(album_name, &app_state.snapshot()) {
        Ok(content) => {
            grid.borrow_mut().set_photos(&content.photos);
            loading_view.widget.set_visible(content.show_loading);
            Ok(content)
        }
        Err(e) => {
            grid.borrow_mut().clear();
            loading_view.widget.set_visible(false);
            Err(e)
        }
    }
}
