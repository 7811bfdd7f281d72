//! A library for learning generalised STRIPS action schemas from observed transitions.
//!
//! oaru implements *action unification*: given two action occurrences, each a named operator with objects and literals, find the least cost way to merge the occurrences into one generalised occurrence which explains both.
//! Repeated unification of observations against a growing collection of schemas is the OARU process, implemented by an [action library](crate::library).
//!
//! # Orientation
//!
//! The cost of a unification is the cost of pairing objects, together with the cost of discarding literals which cannot be paired.
//! - Objects known to be the same entity pair for free, and any other pair has a [generic cost](crate::config::Config::generic_match).
//! - Each literal without a partner is discarded at a [greater cost](crate::config::Config::discard).
//!
//! As the pairing of literals is determined by the pairing of objects, a unification is found by a [search](crate::procedures::search) over partial injective correspondences between objects.
//!
//! Useful starting points, then, may be:
//! - The [structures] to familiarise yourself with occurrences, correspondences, and alignments.
//! - The [unify procedure](crate::procedures::unify) for the steps of a unification.
//! - The [library] for the OARU loop.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Unify two occurrences which differ by the names of places.
//!
//! ```rust
//! # use oaru::builder::Builder;
//! # use oaru::config::Config;
//! # use oaru::context::Unifier;
//! # use oaru::reports::Unify;
//! let a = Builder::new("move")
//!     .parameter("x")
//!     .constant("p1")
//!     .constant("p2")
//!     .precondition("at", ["x", "p1"])
//!     .add("at", ["x", "p2"])
//!     .delete("at", ["x", "p1"])
//!     .build()
//!     .unwrap();
//!
//! let b = Builder::new("move")
//!     .parameter("x")
//!     .constant("q1")
//!     .constant("q2")
//!     .constant("q3")
//!     .precondition("at", ["x", "q1"])
//!     .precondition("holding", ["q3"])
//!     .add("at", ["x", "q2"])
//!     .delete("at", ["x", "q1"])
//!     .build()
//!     .unwrap();
//!
//! let unifier = Unifier::from_config(Config::default());
//!
//! let Unify::Unified(unification) = unifier.unify(&a, &b, 200) else {
//!     panic!("Unification within 200 is possible");
//! };
//!
//! // Two generic pairs, and holding(q3) discarded.
//! assert_eq!(unification.cost(), 120);
//! assert_eq!(unification.correspondence.get("p1"), Some("q1"));
//! assert_eq!(unification.schema.literal_count(), 3);
//! ```
//!
//! + Learn a library from a sequence of observations.
//!
//! ```rust
//! # use oaru::config::Config;
//! # use oaru::library::ActionLibrary;
//! # use oaru::structures::{occurrence::ActionOccurrence, state::State};
//! let mut library = ActionLibrary::from_config(Config::default());
//!
//! let states = [
//!     State::from_iter([("at", vec!["a", "p1"])]),
//!     State::from_iter([("at", vec!["a", "p2"])]),
//!     State::from_iter([("at", vec!["a", "p3"])]),
//! ];
//!
//! for pair in states.windows(2) {
//!     let observation = ActionOccurrence::from_transition("move", &pair[0], &pair[1]).unwrap();
//!     library.observe(observation);
//! }
//!
//! // The second move merges with the first, as two generic pairs are cheaper than the ceiling.
//! assert_eq!(library.len(), 1);
//! assert_eq!(library.observed(), 2);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with a variety of targets in order to help narrow output to relevant parts of the library.
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs of the search can be found with `RUST_LOG=search …` or,
//! - Merges and insertions of a library, without details of each unification, with `RUST_LOG=library=info …`

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod library;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
