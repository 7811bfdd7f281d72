//! The result of a successful unification.

use std::collections::BTreeMap;

use crate::{
    config::Cost,
    context::Counters,
    structures::{
        alignment::Alignment, correspondence::Correspondence, occurrence::ActionOccurrence,
    },
};

/// A minimum cost merge of two occurrences.
///
/// The total cost is the sum of the matching cost (paid object pairs) and the discard cost (discarded literals).
#[derive(Clone, Debug)]
pub struct Unification {
    /// The pairing of left objects with right objects.
    pub correspondence: Correspondence,

    /// The disposition of every literal.
    pub alignment: Alignment,

    /// The cost of the paid pairs of the correspondence.
    pub match_cost: Cost,

    /// The cost of the discarded literals of the alignment.
    pub discard_cost: Cost,

    /// The generalised occurrence, built from taken literals.
    pub schema: ActionOccurrence,

    /// The object of the schema each paired left object became.
    pub sigma_left: BTreeMap<String, String>,

    /// The object of the schema each paired right object became.
    pub sigma_right: BTreeMap<String, String>,

    /// Counts from the search.
    pub counters: Counters,
}

impl Unification {
    pub fn cost(&self) -> Cost {
        self.match_cost + self.discard_cost
    }
}
