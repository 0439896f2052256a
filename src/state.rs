use parking_lot::RwLock;
use std::sync::Arc;

use crate::config::{Config, DatasetSource};
use crate::directory::dataset::{self, CATALOG, LOCATIONS};
use crate::directory::WorkerDirectory;
use crate::error::DirectoryError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub directory: DirectoryHandle,
}

impl AppState {
    /// Build the worker snapshot described by `config`.
    pub fn new(config: Config) -> Result<Self, DirectoryError> {
        let workers = match config.dataset {
            DatasetSource::Generated => {
                dataset::generate(CATALOG, LOCATIONS, config.seed, config.workers_per_pair)
            }
            DatasetSource::Static => dataset::seed_workers(),
        };
        let directory =
            WorkerDirectory::new(workers, dataset::catalog_names(CATALOG), config.limits)?;

        Ok(Self::with_directory(config, directory))
    }

    pub fn with_directory(config: Config, directory: WorkerDirectory) -> Self {
        Self {
            config,
            directory: DirectoryHandle::new(directory),
        }
    }
}

/// Holds the current directory snapshot. Readers get their own `Arc` and
/// never hold the lock while working; a replacement swaps the whole
/// snapshot.
#[derive(Clone)]
pub struct DirectoryHandle {
    current: Arc<RwLock<Arc<WorkerDirectory>>>,
}

impl DirectoryHandle {
    pub fn new(directory: WorkerDirectory) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(directory))),
        }
    }

    pub fn snapshot(&self) -> Arc<WorkerDirectory> {
        self.current.read().clone()
    }

    /// Swap in a new snapshot, returning the previous one.
    pub fn replace(&self, directory: WorkerDirectory) -> Arc<WorkerDirectory> {
        let next = Arc::new(directory);
        std::mem::replace(&mut *self.current.write(), next)
    }
}
