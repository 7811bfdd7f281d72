use std::{fs::File, io::BufReader, path::Path};

use oaru::{
    context::Unifier,
    library::ActionLibrary,
    structures::occurrence::ActionOccurrence,
    types::err::{self},
};

/// Reads a single occurrence, as JSON.
pub fn load_occurrence(path: &Path) -> Result<ActionOccurrence, err::StoreError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Reads a sequence of observations, as a JSON array of occurrences.
pub fn load_observations(path: &Path) -> Result<Vec<ActionOccurrence>, err::StoreError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Reads a stored library, if a path is given, and otherwise returns an empty library.
pub fn load_library(
    path: Option<&Path>,
    unifier: Unifier,
) -> Result<ActionLibrary, err::StoreError> {
    match path {
        None => Ok(ActionLibrary::with_unifier(unifier)),
        Some(path) if !path.exists() => Ok(ActionLibrary::with_unifier(unifier)),
        Some(path) => ActionLibrary::load(BufReader::new(File::open(path)?), unifier),
    }
}

/// Prints an error of some file to stdout, and exits.
pub fn exit_with(path: &Path, e: err::StoreError) -> ! {
    match e {
        err::StoreError::Io(message) => println!("c Could not access {}: {message}", path.display()),
        err::StoreError::Format(message) => println!("c Malformed {}: {message}", path.display()),
        err::StoreError::Version(version) => {
            println!("c Unsupported version {version} of {}", path.display())
        }
    }
    std::process::exit(1)
}
