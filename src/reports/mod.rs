/*!
Reports on unification and on observations made by a library.
*/

use crate::{config::Cost, library::SchemaKey, structures::unification::Unification};

/// The outcome of unifying two occurrences.
#[derive(Clone, Debug)]
pub enum Unify {
    /// A minimum cost unification, within the ceiling.
    Unified(Box<Unification>),

    /// Every unification costs more than the ceiling.
    AboveCeiling,

    /// A limit was reached before the search completed, and so no unification is known to be optimal.
    TimeUp,
}

impl Unify {
    /// The cost of the unification, if unified.
    pub fn cost(&self) -> Option<Cost> {
        self.unification().map(|u| u.cost())
    }

    pub fn unification(&self) -> Option<&Unification> {
        match self {
            Self::Unified(unification) => Some(unification),
            _ => None,
        }
    }

    pub fn into_unification(self) -> Option<Unification> {
        match self {
            Self::Unified(unification) => Some(*unification),
            _ => None,
        }
    }
}

impl std::fmt::Display for Unify {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unified(unification) => write!(f, "Unified at cost {}", unification.cost()),
            Self::AboveCeiling => write!(f, "Above ceiling"),
            Self::TimeUp => write!(f, "Time up"),
        }
    }
}

/// The outcome of an observation made by a library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    /// The observation was merged with the schema of the key.
    Merged {
        key: SchemaKey,
        cost: Cost,

        /// Whether the schema changed as a result of the merge.
        updated: bool,
    },

    /// The observation was inserted as a new schema.
    Inserted { key: SchemaKey },
}

impl Observation {
    /// The key of the schema the observation was merged with or inserted as.
    pub fn key(&self) -> SchemaKey {
        match self {
            Self::Merged { key, .. } | Self::Inserted { key } => *key,
        }
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merged {
                cost,
                updated: true,
                ..
            } => write!(f, "Merged at cost {cost}, updated"),
            Self::Merged { cost, .. } => write!(f, "Merged at cost {cost}"),
            Self::Inserted { .. } => write!(f, "Inserted"),
        }
    }
}
