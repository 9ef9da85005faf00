//! Albums view-model driving the shared album state.
//!
//! The `AlbumsViewModel` is the only writer of `AppState`: it raises the
//! loading flag, fetches the catalogue from an `AlbumSource` on a blocking
//! worker, publishes the albums and clears the flag again. Refreshes may
//! overlap; the flag stays raised until the last one completes and a result
//! older than the one already published is dropped.

use std::sync::Arc;

use {
    parking_lot::Mutex,
    tokio::task::spawn_blocking,
    tracing::{debug, info},
};

use crate::{
    error::{ErrorReporter, LibraryError},
    library::source::AlbumSource,
    state::app_state::AppState,
};

/// Bookkeeping of running refreshes.
#[derive(Debug, Default)]
struct RefreshTracker {
    /// Refreshes started but not yet completed.
    in_flight: usize,
    /// Generation handed to the most recently started refresh.
    latest_started: u64,
    /// Generation of the albums currently published.
    latest_published: u64,
}

/// Loads albums into the shared state.
#[derive(Clone)]
pub struct AlbumsViewModel {
    app_state: AppState,
    source: Arc<dyn AlbumSource>,
    tracker: Arc<Mutex<RefreshTracker>>,
}

impl AlbumsViewModel {
    /// Creates a new view-model.
    ///
    /// # Arguments
    ///
    /// * `app_state` - Shared state to publish into
    /// * `source` - Where albums are fetched from
    ///
    /// # Returns
    ///
    /// A new `AlbumsViewModel` instance.
    pub fn new(app_state: AppState, source: Arc<dyn AlbumSource>) -> Self {
        Self {
            app_state,
            source,
            tracker: Arc::new(Mutex::new(RefreshTracker::default())),
        }
    }

    /// Gets the state this view-model publishes into.
    pub fn state(&self) -> &AppState {
        &self.app_state
    }

    /// Gets the number of refreshes currently running.
    pub fn refreshes_in_flight(&self) -> usize {
        self.tracker.lock().in_flight
    }

    /// Fetches the catalogue and publishes it.
    ///
    /// The loading flag is raised while any refresh is running and is cleared
    /// when the last one completes, on both success and failure. On failure
    /// the previous albums are left untouched. A result is only published if
    /// no newer refresh has published already.
    ///
    /// # Returns
    ///
    /// The number of albums fetched.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError` if the source fails or the worker task panics.
    pub async fn refresh(&self) -> Result<usize, LibraryError> {
        let generation = {
            let mut tracker = self.tracker.lock();
            tracker.in_flight += 1;
            tracker.latest_started += 1;
            self.app_state.set_loading(true);
            tracker.latest_started
        };
        debug!("AlbumsViewModel: refresh {generation} started");

        let source = Arc::clone(&self.source);
        let result = spawn_blocking(move || source.fetch_albums())
            .await
            .map_err(|e| LibraryError::TaskFailed(e.to_string()))
            .and_then(|fetched| fetched);

        let mut tracker = self.tracker.lock();
        tracker.in_flight -= 1;

        let outcome = match result {
            Ok(albums) => {
                let count = albums.len();
                if generation > tracker.latest_published {
                    tracker.latest_published = generation;
                    self.app_state.update_albums(albums);
                    info!("Loaded {count} albums");
                } else {
                    debug!("AlbumsViewModel: dropping stale refresh {generation}");
                }
                Ok(count)
            }
            Err(e) => {
                ErrorReporter::refresh_failure(&e);
                Err(e)
            }
        };

        if tracker.in_flight == 0 {
            self.app_state.set_loading(false);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering::SeqCst},
        mpsc::{Receiver, channel},
    };

    use {parking_lot::Mutex, tokio::task::yield_now};

    use crate::{
        error::LibraryError,
        library::{Album, Photo, SampleAlbumSource, fixtures::sample_albums, source::AlbumSource},
        state::{
            app_state::{
                AlbumState, AppState,
                AppStateEvent::{AlbumsChanged, LoadingChanged},
            },
            view_model::AlbumsViewModel,
        },
    };

    struct FailingSource;

    impl AlbumSource for FailingSource {
        fn fetch_albums(&self) -> Result<Vec<Album>, LibraryError> {
            Err(LibraryError::InvalidData {
                reason: "broken catalogue".to_string(),
            })
        }
    }

    /// First fetch blocks until the gate opens and returns "old"; later
    /// fetches return "new" immediately.
    struct GatedSource {
        calls: AtomicUsize,
        gate: Mutex<Receiver<()>>,
    }

    impl AlbumSource for GatedSource {
        fn fetch_albums(&self) -> Result<Vec<Album>, LibraryError> {
            if self.calls.fetch_add(1, SeqCst) == 0 {
                self.gate
                    .lock()
                    .recv()
                    .map_err(|e| LibraryError::TaskFailed(e.to_string()))?;
                return Ok(vec![Album::new("old", Vec::new())]);
            }
            Ok(vec![Album::new("new", Vec::new())])
        }
    }

    #[tokio::test]
    async fn test_refresh_publishes_albums_and_clears_loading() {
        let app_state = AppState::new();
        let mut receiver = app_state.subscribe();
        let view_model = AlbumsViewModel::new(app_state.clone(), Arc::new(SampleAlbumSource));

        let count = view_model.refresh().await.unwrap();

        assert_eq!(count, sample_albums().len());
        assert_eq!(receiver.recv().await.unwrap(), LoadingChanged(true));
        assert_eq!(receiver.recv().await.unwrap(), AlbumsChanged);
        assert_eq!(receiver.recv().await.unwrap(), LoadingChanged(false));

        let snapshot = view_model.state().snapshot();
        assert_eq!(snapshot.albums, sample_albums());
        assert!(!snapshot.is_loading);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_albums_and_clears_loading() {
        let previous = vec![Album::new("Trip", vec![Photo::new("sunset.jpg")])];
        let app_state = AppState::with_state(AlbumState {
            albums: previous.clone(),
            is_loading: false,
        });
        let view_model = AlbumsViewModel::new(app_state.clone(), Arc::new(FailingSource));

        let error = view_model.refresh().await.unwrap_err();

        assert_eq!(error.to_string(), "Invalid data: broken catalogue");
        let snapshot = app_state.snapshot();
        assert_eq!(snapshot.albums, previous);
        assert!(!snapshot.is_loading);
    }

    #[tokio::test]
    async fn test_overlapping_refreshes_keep_loading_until_last_completes() {
        let (open_gate, gate) = channel();
        let source = Arc::new(GatedSource {
            calls: AtomicUsize::new(0),
            gate: Mutex::new(gate),
        });
        let app_state = AppState::new();
        let view_model = AlbumsViewModel::new(app_state.clone(), source.clone());

        let slow = tokio::spawn({
            let view_model = view_model.clone();
            async move { view_model.refresh().await }
        });
        while source.calls.load(SeqCst) == 0 {
            yield_now().await;
        }

        assert_eq!(view_model.refresh().await.unwrap(), 1);

        let snapshot = app_state.snapshot();
        assert!(snapshot.is_loading, "loading cleared while a fetch is still blocked");
        assert_eq!(snapshot.albums, vec![Album::new("new", Vec::new())]);
        assert_eq!(view_model.refreshes_in_flight(), 1);

        open_gate.send(()).unwrap();
        slow.await.unwrap().unwrap();

        let snapshot = app_state.snapshot();
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.albums, vec![Album::new("new", Vec::new())]);
        assert_eq!(view_model.refreshes_in_flight(), 0);
    }
}
