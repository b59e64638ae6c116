//! Lazily refreshed marker snapshots.
//!
//! The store owns one published [`Snapshot`] behind an `Arc`. Reloads build
//! a complete new index off to the side and publish it with a single pointer
//! swap, so readers either see the old snapshot or the new one, never a
//! partially populated index. A reader that cloned the `Arc` before a swap
//! keeps a consistent view for as long as it holds it.
//!
//! Staleness is detected by comparing the source file's modification time
//! with the time recorded at the last successful load. A rewrite within the
//! filesystem's timestamp granularity is missed; in exchange every request
//! pays only for a `stat`.

use std::fs;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::SystemTime;

use markerutils_foundation::{Error, MarkerIndex, Result};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::source;

/// An immutable view of the markers from one successful load.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    generation: u64,
    markers: MarkerIndex,
    source_modified: Option<SystemTime>,
}

impl Snapshot {
    /// Returns the publication counter (0 for the empty startup snapshot).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the markers in this snapshot.
    #[must_use]
    pub fn markers(&self) -> &MarkerIndex {
        &self.markers
    }

    /// Returns the source modification time this snapshot was loaded from.
    #[must_use]
    pub fn source_modified(&self) -> Option<SystemTime> {
        self.source_modified
    }
}

/// Outcome of a staleness check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refresh {
    /// The source is unchanged since the last successful load.
    Fresh,
    /// The source changed and a new snapshot was published.
    Reloaded {
        /// Number of markers in the new snapshot.
        markers: usize,
    },
}

/// Bookkeeping shared by refreshers; guarded so one revision is parsed once.
#[derive(Debug, Default)]
struct RefreshState {
    /// Modification time recorded at the last successful load.
    loaded_modified: Option<SystemTime>,
    /// Number of successful loads.
    loads: u64,
}

/// Keeps a marker snapshot synchronized with the source document.
#[derive(Debug)]
pub struct MarkerStore {
    config: StoreConfig,
    current: RwLock<Arc<Snapshot>>,
    refresh: Mutex<RefreshState>,
}

impl MarkerStore {
    /// Creates a store with an empty snapshot. Nothing is read until the
    /// first refresh.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            current: RwLock::new(Arc::new(Snapshot::default())),
            refresh: Mutex::new(RefreshState::default()),
        }
    }

    /// Returns the store configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the latest published snapshot.
    ///
    /// Never waits for an in-progress load; the lock is only held for the
    /// pointer swap.
    #[must_use]
    pub fn current(&self) -> Arc<Snapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Returns the number of successful loads so far.
    #[must_use]
    pub fn load_count(&self) -> u64 {
        self.lock_refresh().loads
    }

    /// Reloads the source if its modification time changed since the last
    /// successful load.
    ///
    /// # Errors
    ///
    /// Returns a source error if the modification time cannot be read or the
    /// reload fails. The previous snapshot stays published either way, and
    /// the next call tries again.
    pub fn refresh_if_stale(&self) -> Result<Refresh> {
        let mut state = self.lock_refresh();
        let modified = self.source_modified()?;

        if state.loaded_modified == Some(modified) {
            debug!(path = %self.config.source_path.display(), "marker source unchanged");
            return Ok(Refresh::Fresh);
        }

        info!(path = %self.config.source_path.display(), "Updating markers");
        let snapshot = self.load_locked(&mut state, modified)?;
        Ok(Refresh::Reloaded {
            markers: snapshot.markers().len(),
        })
    }

    /// Reloads the source unconditionally and publishes the result.
    ///
    /// # Errors
    ///
    /// Returns a `SourceUnavailable` error if the file is missing or
    /// unreadable, or `SourceMalformed` if it has the wrong shape. The
    /// current snapshot is left untouched.
    pub fn load(&self) -> Result<Arc<Snapshot>> {
        let mut state = self.lock_refresh();
        let modified = self.source_modified()?;
        self.load_locked(&mut state, modified)
    }

    fn load_locked(&self, state: &mut RefreshState, modified: SystemTime) -> Result<Arc<Snapshot>> {
        let path = &self.config.source_path;
        let markers = source::read_markers(path).inspect_err(|err| {
            warn!(
                path = %path.display(),
                error = %err,
                "failed to load markers; keeping previous snapshot"
            );
        })?;

        state.loads += 1;
        let snapshot = Arc::new(Snapshot {
            generation: state.loads,
            markers,
            source_modified: Some(modified),
        });

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&snapshot);
        state.loaded_modified = Some(modified);

        info!(
            markers = snapshot.markers().len(),
            generation = snapshot.generation(),
            "published marker snapshot"
        );
        Ok(snapshot)
    }

    fn source_modified(&self) -> Result<SystemTime> {
        let path = &self.config.source_path;
        fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .map_err(|err| {
                warn!(path = %path.display(), error = %err, "cannot read marker source timestamp");
                Error::source_unavailable(path, err)
            })
    }

    fn lock_refresh(&self) -> MutexGuard<'_, RefreshState> {
        self.refresh.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
