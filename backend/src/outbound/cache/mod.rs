//! In-process bookkeeping for cached page invalidation.
//!
//! Implements the [`PathRevalidator`] port by bumping a generation counter
//! per path. Page rendering happens outside this crate; a renderer compares
//! the generation it read before rendering with the current one and discards
//! its result when they differ.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::domain::NavigationPath;
use crate::domain::ports::PathRevalidator;

/// Shared revalidation state; clone the surrounding `Arc` to share it.
#[derive(Debug, Default)]
pub struct InMemoryPathRevalidator {
    generations: Mutex<HashMap<String, u64>>,
}

impl InMemoryPathRevalidator {
    /// Create an instance with every path at generation 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, u64>> {
        self.generations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of times `path` has been revalidated.
    #[must_use]
    pub fn generation(&self, path: &str) -> u64 {
        self.lock().get(path).copied().unwrap_or_default()
    }
}

impl PathRevalidator for InMemoryPathRevalidator {
    fn revalidate_path(&self, path: &NavigationPath) {
        let mut generations = self.lock();
        let generation = generations.entry(path.as_ref().to_owned()).or_default();
        *generation = generation.wrapping_add(1);
        debug!(path = %path, generation = *generation, "path revalidated");
    }
}
