//! Main application window and navigation structure.
//!
//! This module implements the `PhotoAlbumApplication` which serves as the
//! main entry point for the Libadwaita-based user interface.

use std::{cell::RefCell, rc::Rc, sync::Arc};

use {
    libadwaita::{
        Application, ApplicationWindow, NavigationPage, NavigationView, StatusPage,
        glib::{MainContext, Propagation},
        prelude::{
            AdwApplicationWindowExt, ApplicationExt, ApplicationExtManual, ButtonExt,
            GtkWindowExt, WidgetExt,
        },
    },
    tracing::{debug, info},
};

use crate::{
    config::{SettingsManager, UserSettings},
    error::{ErrorReporter, Result, ResultExt},
    i18n::Localizer,
    library::{AlbumSource, JsonAlbumSource, SampleAlbumSource},
    navigation::{NavigationController, Route},
    state::{AlbumState, AlbumsViewModel, AppState},
    ui::{
        components::LoadingView,
        styles::load_app_css,
        views::{PhotoListScreen, photo_list::LOADING_MESSAGE_KEY},
    },
};

/// Application identifier registered with GIO.
pub const APP_ID: &str = "com.example.photo_album";

/// Main application class with window management.
///
/// The `PhotoAlbumApplication` owns the settings, translations and shared
/// album state, and builds the main window on activation.
pub struct PhotoAlbumApplication {
    /// The main application instance.
    pub app: Application,
    /// Shared album state.
    pub app_state: AppState,
    /// View-model filling `app_state`.
    pub view_model: AlbumsViewModel,
    /// User settings manager.
    pub settings: SettingsManager,
    localizer: Rc<Localizer>,
}

impl PhotoAlbumApplication {
    /// Creates a new application instance.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `PhotoAlbumApplication` or an error.
    ///
    /// # Errors
    ///
    /// Returns an error if settings or translations cannot be loaded.
    pub fn new() -> Result<Self> {
        let settings = SettingsManager::new().add_context("Failed to initialize settings")?;

        let (localizer, source) = {
            let user_settings = settings.get_settings();
            let localizer = Localizer::new(user_settings.language.as_deref())
                .add_context("Failed to load translations")?;
            (localizer, album_source(&user_settings))
        };
        info!("Using locale {}", localizer.current_locale());

        let app_state = AppState::new();
        let view_model = AlbumsViewModel::new(app_state.clone(), source);

        let app = Application::builder().application_id(APP_ID).build();

        Ok(PhotoAlbumApplication {
            app,
            app_state,
            view_model,
            settings,
            localizer: Rc::new(localizer),
        })
    }

    /// Runs the application.
    ///
    /// This method starts the GTK main loop and displays the main window.
    pub fn run(&self) {
        self.app.connect_activate({
            let app_state = self.app_state.clone();
            let view_model = self.view_model.clone();
            let settings = self.settings.get_settings().clone();
            let localizer = Rc::clone(&self.localizer);

            move |app| {
                build_ui(app, &app_state, &view_model, &settings, &localizer);
            }
        });

        self.app.run();
    }
}

/// Picks the album source configured in `settings`.
fn album_source(settings: &UserSettings) -> Arc<dyn AlbumSource> {
    match &settings.catalogue_path {
        Some(path) => {
            let source = JsonAlbumSource::new(path);
            debug!("Reading albums from {}", source.path().display());
            Arc::new(source)
        }
        None => Arc::new(SampleAlbumSource),
    }
}

/// Gets the album opened at startup: the configured one, else the first.
fn startup_album(configured: Option<&str>, state: &AlbumState) -> Option<String> {
    configured
        .map(str::to_string)
        .or_else(|| state.albums.first().map(|album| album.name.clone()))
}

/// Builds the main user interface.
fn build_ui(
    app: &Application,
    app_state: &AppState,
    view_model: &AlbumsViewModel,
    settings: &UserSettings,
    localizer: &Rc<Localizer>,
) {
    if let Err(e) = load_app_css() {
        ErrorReporter::error(&e.into(), "Loading stylesheet");
    }

    let window = ApplicationWindow::builder()
        .application(app)
        .title(localizer.tr("app-title"))
        .default_width(settings.window_width)
        .default_height(settings.window_height)
        .build();

    let navigation_view = NavigationView::new();

    // Placeholder root page until the first refresh completes.
    let loading_view = LoadingView::new(&localizer.tr(LOADING_MESSAGE_KEY));
    navigation_view.add(
        &NavigationPage::builder()
            .title(localizer.tr("app-title"))
            .child(&loading_view.widget)
            .build(),
    );

    window.set_content(Some(&navigation_view));

    let current_screen: Rc<RefCell<Option<PhotoListScreen>>> = Rc::new(RefCell::new(None));

    window.connect_close_request({
        let current_screen = Rc::clone(&current_screen);
        move |_| {
            if let Some(screen) = current_screen.borrow_mut().take() {
                screen.unmount();
            }
            Propagation::Proceed
        }
    });

    window.present();

    MainContext::default().spawn_local({
        let app_state = app_state.clone();
        let view_model = view_model.clone();
        let initial_album = settings.initial_album.clone();
        let localizer = Rc::clone(localizer);

        async move {
            let refreshed = view_model.refresh().await;

            let Some(album_name) = startup_album(initial_album.as_deref(), &app_state.snapshot())
            else {
                let description = match refreshed {
                    Err(e) => ErrorReporter::to_user_message(&e.into()),
                    Ok(_) => localizer.tr("no-albums-description"),
                };
                show_status(&navigation_view, &localizer.tr("no-albums"), &description);
                return;
            };

            let navigator = Rc::new(NavigationController::new(
                navigation_view.clone(),
                Rc::clone(&localizer),
            ));

            let screen = match PhotoListScreen::builder()
                .album_name(album_name)
                .app_state(app_state)
                .navigator(navigator)
                .localizer(Rc::clone(&localizer))
                .build()
            {
                Ok(screen) => screen,
                Err(e) => {
                    let message = ErrorReporter::to_user_message(&e.into());
                    show_status(&navigation_view, &localizer.tr("album-unavailable"), &message);
                    return;
                }
            };

            screen
                .header_bar
                .refresh_button
                .set_tooltip_text(Some(&localizer.tr("refresh")));
            screen.header_bar.refresh_button.connect_clicked({
                let view_model = view_model.clone();
                move |_| {
                    let running = view_model.refreshes_in_flight();
                    if running > 0 {
                        debug!("Refresh requested with {running} refreshes still running");
                    }
                    let view_model = view_model.clone();
                    MainContext::default().spawn_local(async move {
                        if view_model.refresh().await.is_err() {
                            debug!("Manual refresh failed; keeping previous albums");
                        }
                    });
                }
            });

            let route = Route::PhotoList {
                album_name: screen.album_name().to_string(),
            };
            let root_page = NavigationPage::builder()
                .title(screen.album_name())
                .tag(route.path())
                .child(&screen.widget)
                .build();
            navigation_view.replace(&[root_page]);

            *current_screen.borrow_mut() = Some(screen);
        }
    });
}

/// Replaces the navigation stack with a status page.
fn show_status(navigation_view: &NavigationView, title: &str, description: &str) {
    let status_page = StatusPage::builder()
        .icon_name("image-missing-symbolic")
        .title(title)
        .description(description)
        .build();

    navigation_view.replace(&[NavigationPage::builder()
        .title(title)
        .child(&status_page)
        .build()]);
}

#[cfg(test)]
mod tests {
    use crate::{
        config::UserSettings,
        library::Album,
        test_support::album_state,
        ui::application::{album_source, startup_album},
    };

    #[test]
    fn test_startup_album_prefers_configured() {
        let state = album_state(vec![Album::new("Home", Vec::new())], false);

        assert_eq!(startup_album(Some("Trip"), &state).as_deref(), Some("Trip"));
        assert_eq!(startup_album(None, &state).as_deref(), Some("Home"));
        assert_eq!(startup_album(None, &album_state(Vec::new(), false)), None);
    }

    #[test]
    fn test_default_source_is_sample_catalogue() {
        let albums = album_source(&UserSettings::default()).fetch_albums().unwrap();

        assert_eq!(albums.len(), 3);
        assert_eq!(albums[0].name, "album 1");
    }
}
