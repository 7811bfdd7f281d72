/*!
The context of unification: a configuration, together with a relation of free object pairs.

A [Unifier] is immutable once built, and may be shared between threads.
Each [unify](Unifier::unify) call keeps its own [Counters], which are returned as part of the [report](crate::reports::Unify).

# Example
```rust
# use oaru::builder::Builder;
# use oaru::config::Config;
# use oaru::context::Unifier;
# use oaru::reports::Unify;
let left = Builder::new("move")
    .parameter("x")
    .constant("p1")
    .constant("p2")
    .precondition("at", ["x", "p1"])
    .add("at", ["x", "p2"])
    .delete("at", ["x", "p1"])
    .build()
    .unwrap();

let unifier = Unifier::from_config(Config::default());

match unifier.unify(&left, &left, 0) {
    Unify::Unified(unification) => {
        assert_eq!(unification.cost(), 0);
        assert_eq!(unification.correspondence.get("p1"), Some("p1"));
    }
    _ => panic!("An occurrence always unifies with itself"),
}
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    procedures::matcher::{Compatibility, SameIdentity},
};

/// A configured unifier.
pub struct Unifier {
    /// The configuration of the unifier.
    pub config: Config,

    /// The relation of free object pairs.
    pub compatibility: Box<dyn Compatibility + Send + Sync>,
}

impl Unifier {
    /// Creates a unifier from some given configuration, with objects free when they share an identity.
    pub fn from_config(config: Config) -> Self {
        Unifier {
            config,
            compatibility: Box::new(SameIdentity),
        }
    }

    /// Replaces the relation of free object pairs.
    pub fn with_compatibility(mut self, compatibility: impl Compatibility + Send + Sync + 'static) -> Self {
        self.compatibility = Box::new(compatibility);
        self
    }
}

impl Default for Unifier {
    fn default() -> Self {
        Unifier::from_config(Config::default())
    }
}
