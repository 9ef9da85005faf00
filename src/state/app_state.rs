//! Global album state with reactive update mechanisms.
//!
//! This module provides the central `AppState` container that holds the
//! album catalogue and the loading flag. The albums view-model is its only
//! writer; screens take snapshots and subscribe to change notifications.

use std::sync::Arc;

use {
    parking_lot::RwLock,
    tokio::sync::broadcast::{Receiver, Sender, channel},
    tracing::debug,
};

use crate::{error::LookupError, library::Album};

/// Capacity of the change notification channel.
const STATE_CHANNEL_CAPACITY: usize = 16;

/// Snapshot of the album catalogue as seen by the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumState {
    /// Albums in display order.
    pub albums: Vec<Album>,
    /// Whether a fetch is in progress.
    pub is_loading: bool,
}

impl AlbumState {
    /// Finds the album with the given name.
    ///
    /// Names are expected to be unique; if they are not, the first match wins.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::AlbumNotFound` if no album has that name.
    pub fn find_album(&self, name: &str) -> Result<&Album, LookupError> {
        self.albums
            .iter()
            .find(|album| album.name == name)
            .ok_or_else(|| LookupError::AlbumNotFound {
                name: name.to_string(),
            })
    }
}

/// Album state change events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppStateEvent {
    /// The album list was replaced.
    AlbumsChanged,
    /// The loading flag changed.
    LoadingChanged(bool),
}

/// Central state container with thread-safe access.
///
/// Cloning is cheap and every clone shares the same state and channel.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current album state.
    albums: Arc<RwLock<AlbumState>>,
    /// Broadcast channel for state change notifications.
    state_tx: Sender<AppStateEvent>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates an empty state container.
    pub fn new() -> Self {
        Self::with_state(AlbumState::default())
    }

    /// Creates a state container with an initial snapshot.
    ///
    /// # Arguments
    ///
    /// * `initial` - Initial album state
    ///
    /// # Returns
    ///
    /// A new `AppState` instance.
    pub fn with_state(initial: AlbumState) -> Self {
        let (state_tx, _) = channel(STATE_CHANNEL_CAPACITY);

        Self {
            albums: Arc::new(RwLock::new(initial)),
            state_tx,
        }
    }

    /// Gets a copy of the current album state.
    pub fn snapshot(&self) -> AlbumState {
        self.albums.read().clone()
    }

    /// Replaces the album list and notifies subscribers.
    ///
    /// # Arguments
    ///
    /// * `albums` - New album list
    pub fn update_albums(&self, albums: Vec<Album>) {
        debug!("AppState: albums replaced ({} albums)", albums.len());
        self.albums.write().albums = albums;
        self.notify(AppStateEvent::AlbumsChanged);
    }

    /// Sets the loading flag and notifies subscribers if it changed.
    ///
    /// # Arguments
    ///
    /// * `is_loading` - New loading flag
    pub fn set_loading(&self, is_loading: bool) {
        {
            let mut state = self.albums.write();
            if state.is_loading == is_loading {
                return;
            }
            state.is_loading = is_loading;
        }
        debug!("AppState: loading set to {is_loading}");
        self.notify(AppStateEvent::LoadingChanged(is_loading));
    }

    /// Replaces the whole album state and notifies subscribers.
    ///
    /// # Arguments
    ///
    /// * `album_state` - New album state
    pub fn update_album_state(&self, album_state: AlbumState) {
        let loading_changed = {
            let mut state = self.albums.write();
            let loading_changed = state.is_loading != album_state.is_loading;
            *state = album_state.clone();
            loading_changed
        };

        self.notify(AppStateEvent::AlbumsChanged);
        if loading_changed {
            self.notify(AppStateEvent::LoadingChanged(album_state.is_loading));
        }
    }

    /// Subscribes to album state changes.
    ///
    /// Dropping the receiver ends the subscription.
    ///
    /// # Returns
    ///
    /// A broadcast receiver for state change events.
    pub fn subscribe(&self) -> Receiver<AppStateEvent> {
        self.state_tx.subscribe()
    }

    /// Gets the number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.state_tx.receiver_count()
    }

    fn notify(&self, event: AppStateEvent) {
        // No receivers is not an error: nothing is mounted yet.
        let _ = self.state_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::broadcast::error::TryRecvError::Empty;

    use crate::{
        error::LookupError,
        library::{Album, Photo},
        state::app_state::{
            AlbumState, AppState,
            AppStateEvent::{AlbumsChanged, LoadingChanged},
        },
    };

    fn trip() -> Album {
        Album::new("Trip", vec![Photo::new("sunset.jpg")])
    }

    #[test]
    fn test_app_state_creation() {
        let app_state = AppState::new();
        let snapshot = app_state.snapshot();

        assert!(snapshot.albums.is_empty());
        assert!(!snapshot.is_loading);
        assert_eq!(app_state.subscriber_count(), 0);
    }

    #[test]
    fn test_find_album_first_match_wins() {
        let state = AlbumState {
            albums: vec![
                Album::new("Trip", vec![Photo::new("first.jpg")]),
                Album::new("Trip", vec![Photo::new("second.jpg")]),
            ],
            is_loading: false,
        };

        let album = state.find_album("Trip").unwrap();
        assert_eq!(album.photos[0].name, "first.jpg");
    }

    #[test]
    fn test_find_album_missing() {
        let state = AlbumState::default();
        assert_eq!(
            state.find_album("Trip"),
            Err(LookupError::AlbumNotFound {
                name: "Trip".to_string()
            })
        );
    }

    #[test]
    fn test_updates_notify_subscribers() {
        let app_state = AppState::new();
        let mut receiver = app_state.subscribe();

        app_state.set_loading(true);
        app_state.update_albums(vec![trip()]);
        app_state.set_loading(false);

        assert_eq!(receiver.try_recv().unwrap(), LoadingChanged(true));
        assert_eq!(receiver.try_recv().unwrap(), AlbumsChanged);
        assert_eq!(receiver.try_recv().unwrap(), LoadingChanged(false));
        assert_eq!(receiver.try_recv(), Err(Empty));

        assert_eq!(app_state.snapshot().albums, vec![trip()]);
    }

    #[test]
    fn test_set_loading_without_change_is_silent() {
        let app_state = AppState::new();
        let mut receiver = app_state.subscribe();

        app_state.set_loading(false);

        assert_eq!(receiver.try_recv(), Err(Empty));
    }

    #[test]
    fn test_update_album_state() {
        let app_state = AppState::new();
        let mut receiver = app_state.subscribe();

        app_state.update_album_state(AlbumState {
            albums: vec![trip()],
            is_loading: true,
        });

        assert_eq!(receiver.try_recv().unwrap(), AlbumsChanged);
        assert_eq!(receiver.try_recv().unwrap(), LoadingChanged(true));
        assert!(app_state.snapshot().is_loading);
    }

    #[test]
    fn test_dropping_receiver_unsubscribes() {
        let app_state = AppState::new();
        let receiver = app_state.subscribe();
        let clone = app_state.clone();
        assert_eq!(clone.subscriber_count(), 1);

        drop(receiver);
        assert_eq!(app_state.subscriber_count(), 0);
    }
}
