//! Reading and writing a library, as JSON.
//!
//! A stored library is the schemas of the library in order of insertion, together with the count of observations made and a format version.
//! Configuration is not stored, and so a library is loaded with a configuration given by the caller.
//!
//! Stored occurrences are checked when read, as any occurrence built by other means.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::{
    context::Unifier,
    library::{ActionLibrary, Schema},
    misc::log::targets::{self},
    types::err::{self},
};

/// The version of the format written.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct StoredRef<'l> {
    version: u32,
    observed: usize,
    schemas: Vec<&'l Schema>,
}

#[derive(Deserialize)]
struct Stored {
    version: u32,
    #[serde(default)]
    observed: usize,
    schemas: Vec<Schema>,
}

impl ActionLibrary {
    /// Writes the library to `writer`.
    pub fn save<W: Write>(&self, writer: W) -> Result<(), err::StoreError> {
        let stored = StoredRef {
            version: FORMAT_VERSION,
            observed: self.observed,
            schemas: self.schemas.values().collect(),
        };
        serde_json::to_writer_pretty(writer, &stored)?;
        log::info!(target: targets::STORE, "Saved {} schemas", self.len());
        Ok(())
    }

    /// Reads a library from `reader`, to unify with the given unifier.
    pub fn load<R: Read>(reader: R, unifier: Unifier) -> Result<Self, err::StoreError> {
        let stored: Stored = serde_json::from_reader(reader)?;
        if stored.version != FORMAT_VERSION {
            return Err(err::StoreError::Version(stored.version));
        }

        let mut library = ActionLibrary::with_unifier(unifier);
        for schema in stored.schemas {
            library.schemas.insert(schema);
        }
        library.observed = stored.observed.max(library.len());

        log::info!(target: targets::STORE, "Loaded {} schemas", library.len());
        Ok(library)
    }
}
