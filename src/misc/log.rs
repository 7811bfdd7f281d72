/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, each with one of the targets below.
This makes it easy to narrow output to, say, the search, by setting `RUST_LOG=search=trace`.

Note, no log implementation is provided.
The CLI installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [object matcher](crate::procedures::matcher).
    pub const MATCHER: &str = "matcher";

    /// Logs related to [literal alignment](crate::procedures::align).
    pub const ALIGNER: &str = "aligner";

    /// Logs related to the [broadphase filter](crate::procedures::broadphase).
    pub const BROADPHASE: &str = "broadphase";

    /// Logs related to the [relevance filter](crate::procedures::relevance).
    pub const RELEVANCE: &str = "relevance";

    /// Logs related to the [correspondence search](crate::procedures::search).
    pub const SEARCH: &str = "search";

    /// Logs related to [building a generalised schema](crate::procedures::generalise).
    pub const GENERALISE: &str = "generalise";

    /// Logs related to the [action library](crate::library).
    pub const LIBRARY: &str = "library";

    /// Logs related to reading and writing a stored library.
    pub const STORE: &str = "store";
}
