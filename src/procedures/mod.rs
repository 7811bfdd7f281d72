//! Procedures of unification.
//!
//! For the most part each procedure is a step of [Unifier::unify](crate::context::Unifier::unify), and is placed here for documentation.
//! Though, [align](align::align), the [broadphase] and the [relevance] filter are also of use by themselves.

pub mod align;
pub mod broadphase;
pub mod generalise;
pub mod matcher;
pub mod relevance;
pub mod search;
pub mod unify;
