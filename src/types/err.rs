//! Error types used in the library.
//!
//! - Malformed input is reported when an [occurrence](crate::structures::occurrence) is built (or read from a store), and is never repaired.
//! - A search which runs out of budget is *not* an error, see [reports::Unify::TimeUp](crate::reports::Unify::TimeUp).
//! - Once inputs are valid, unification is total, and so the search has no errors of its own.
//!
//! Names of the error enums for the most part overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Occurrence(OccurrenceError),
    Parse(ParseError),
    Store(StoreError),
}

/// Noted errors in a configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// Discarding a literal must cost strictly more than a generic match.
    CostOrder,

    /// Some value outside of the range permitted by the option.
    OutOfRange(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Noted errors when building an action occurrence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OccurrenceError {
    /// An occurrence, object, or predicate with an empty name.
    EmptyName,

    /// The same object name was declared twice.
    DuplicateObject(String),

    /// A literal refers to an object which was not declared.
    UndeclaredObject { predicate: String, object: String },

    /// A predicate was used with a number of arguments other than its arity.
    ArityMismatch {
        predicate: String,
        expected: usize,
        found: usize,
    },

    /// A predicate absent from the vocabulary used to build the occurrence.
    UnknownPredicate(String),
}

impl From<OccurrenceError> for ErrorKind {
    fn from(e: OccurrenceError) -> Self {
        ErrorKind::Occurrence(e)
    }
}

/// Errors during parsing of a literal from a string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// An opening parenthesis without a matching close, or the reverse.
    Parenthesis,

    /// An empty argument at the given position, e.g. `at(x,,y)`.
    EmptyArgument(usize),

    /// Trailing characters after the closing parenthesis.
    Trailing(String),

    /// A section prefix other than `pre`, `add`, or `del`.
    Section(String),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when reading or writing a stored library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreError {
    /// Some issue with the reader/writer, as a message.
    Io(String),

    /// The stored data could not be (de)serialised, as a message.
    Format(String),

    /// The stored data was written in an unsupported format version.
    Version(u32),
}

impl From<StoreError> for ErrorKind {
    fn from(e: StoreError) -> Self {
        ErrorKind::Store(e)
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            serde_json::error::Category::Io => StoreError::Io(e.to_string()),
            _ => StoreError::Format(e.to_string()),
        }
    }
}

impl std::fmt::Display for OccurrenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "empty name"),
            Self::DuplicateObject(object) => write!(f, "object {object} declared twice"),
            Self::UndeclaredObject { predicate, object } => {
                write!(f, "{predicate} refers to undeclared object {object}")
            }
            Self::ArityMismatch {
                predicate,
                expected,
                found,
            } => write!(f, "{predicate} has arity {expected}, given {found} arguments"),
            Self::UnknownPredicate(predicate) => write!(f, "unknown predicate {predicate}"),
        }
    }
}
