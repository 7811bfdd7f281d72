use std::time::Duration;

/// Counts for various things which count during a search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of every node of the search visited, including leaves.
    pub nodes: usize,

    /// A count of nodes abandoned as the lower bound of the node exceeded the bound of the search.
    pub pruned: usize,

    /// A count of complete correspondences evaluated.
    pub leaves: usize,

    /// The number of times a better correspondence was found.
    pub improvements: usize,

    /// The time taken during a search.
    pub time: Duration,
}
