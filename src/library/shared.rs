//! A library shared between threads, with a single writer.
//!
//! Observations made through a [SharedLibrary] are explored under a read lock, and so any number of explorations may take place at once.
//! The best merge found is applied under a write lock, and only if the library has not changed since the exploration began.
//! Otherwise, the exploration is stale, and is redone.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    library::{ActionLibrary, Schema, SchemaKey},
    misc::log::targets::{self},
    reports::{self},
    structures::occurrence::ActionOccurrence,
};

struct Guarded {
    library: ActionLibrary,

    /// A count of changes made to the library.
    generation: usize,
}

/// A handle to a library, which may be cloned and sent between threads.
#[derive(Clone)]
pub struct SharedLibrary {
    inner: Arc<RwLock<Guarded>>,
}

impl SharedLibrary {
    pub fn new(library: ActionLibrary) -> Self {
        SharedLibrary {
            inner: Arc::new(RwLock::new(Guarded {
                library,
                generation: 0,
            })),
        }
    }

    /// Observes an occurrence, as [ActionLibrary::observe].
    pub fn observe(&self, observation: ActionOccurrence) -> reports::Observation {
        let observation = self.inner.read().library.prepare(observation);

        loop {
            let (generation, best) = {
                let guard = self.inner.read();
                (guard.generation, guard.library.explore(&observation))
            };

            let mut guard = self.inner.write();
            if guard.generation == generation {
                guard.generation += 1;
                return guard.library.apply(observation, best);
            }
            log::debug!(target: targets::LIBRARY, "Library changed during exploration of {}", observation.name());
        }
    }

    /// A copy of the schemas of the library, in order of insertion.
    pub fn snapshot(&self) -> Vec<(SchemaKey, Schema)> {
        self.inner
            .read()
            .library
            .iter()
            .map(|(key, schema)| (key, schema.clone()))
            .collect()
    }

    /// Calls `f` with the library, under a read lock.
    pub fn read<R>(&self, f: impl FnOnce(&ActionLibrary) -> R) -> R {
        f(&self.inner.read().library)
    }

    pub fn len(&self) -> usize {
        self.inner.read().library.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().library.is_empty()
    }

    /// The library, if this is the only handle to the library.
    pub fn try_unwrap(self) -> Result<ActionLibrary, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => Ok(lock.into_inner().library),
            Err(inner) => Err(SharedLibrary { inner }),
        }
    }
}

impl From<ActionLibrary> for SharedLibrary {
    fn from(library: ActionLibrary) -> Self {
        SharedLibrary::new(library)
    }
}
