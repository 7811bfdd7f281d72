/*!
The action library, of generalised schemas refined by observation.

A library holds a collection of [Schema]s, each keyed by a [SchemaKey].
The library is created empty (or [loaded](ActionLibrary::load) from a store), and is only changed by an [observation](ActionLibrary::observe):
- If some schema unifies with the observation within the [cost ceiling](crate::config::Config::cost_ceiling), the observation is merged with the cheapest such schema.
- Otherwise, the observation is inserted as a new schema.

Schemas are never removed.

# Candidates

A schema is a candidate for merging with an observation when:
- The names of the schema and the observation match, as configured by [NameMatching].
- The observation has at least as many objects as the schema has parameters, so each parameter may be instantiated by some object of the observation.
- The [broadphase](crate::procedures::broadphase) filter passes.

Candidates are unified with the observation, in parallel if [configured](crate::config::Config::parallel).
Ties between candidates of equal cost go to the schema inserted first.
A search which reaches a limit is treated as though no unification was found.

# Merges

A merge replaces the occurrence of a schema with the generalised occurrence of the unification whenever the two differ.
As generalisation keeps the names of the objects of the schema, the occurrences differ only if the schema is widened to explain the observation.
Every merge is noted in the history of the schema, together with whether the occurrence was replaced.

# Example
```rust
# use oaru::builder::Builder;
# use oaru::config::Config;
# use oaru::library::ActionLibrary;
# use oaru::reports::Observation;
let mut library = ActionLibrary::from_config(Config::default());

let first = Builder::new("pick")
    .constant("a")
    .precondition("clear", ["a"])
    .add("held", ["a"])
    .delete("clear", ["a"])
    .build()
    .unwrap();
let second = Builder::new("pick")
    .constant("b")
    .precondition("clear", ["b"])
    .add("held", ["b"])
    .delete("clear", ["b"])
    .build()
    .unwrap();

assert!(matches!(library.observe(first), Observation::Inserted { .. }));
assert!(matches!(library.observe(second), Observation::Merged { cost: 10, updated: true, .. }));
assert_eq!(library.len(), 1);
```
*/

mod pddl;
mod shared;
pub use shared::SharedLibrary;
mod store;

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::{
    config::{Config, Cost, NameMatching},
    context::Unifier,
    misc::log::targets::{self},
    procedures::{broadphase, relevance::RelevanceFilter},
    reports::{self},
    structures::{occurrence::ActionOccurrence, unification::Unification},
};

slotmap::new_key_type! {
    /// The key of a schema in a library.
    pub struct SchemaKey;
}

/// A note of an observation merged with a schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRecord {
    /// The index of the observation, counting from zero.
    pub observation: usize,

    /// The cost of the unification.
    pub cost: Cost,

    /// Whether the occurrence of the schema was replaced.
    pub updated: bool,
}

/// A generalised occurrence, with a history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    occurrence: ActionOccurrence,

    /// The index of the observation inserted as the schema.
    origin: usize,

    /// The count of observations explained by the schema, including the origin.
    observations: usize,

    #[serde(default)]
    history: Vec<MergeRecord>,
}

impl Schema {
    fn new(occurrence: ActionOccurrence, origin: usize) -> Self {
        Schema {
            occurrence,
            origin,
            observations: 1,
            history: Vec::default(),
        }
    }

    pub fn occurrence(&self) -> &ActionOccurrence {
        &self.occurrence
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    pub fn observations(&self) -> usize {
        self.observations
    }

    pub fn history(&self) -> &[MergeRecord] {
        &self.history
    }
}

/// A collection of schemas, together with a unifier.
pub struct ActionLibrary {
    unifier: Unifier,
    schemas: SlotMap<SchemaKey, Schema>,

    /// The count of observations made.
    observed: usize,
}

impl ActionLibrary {
    /// Creates an empty library from some given configuration.
    pub fn from_config(config: Config) -> Self {
        ActionLibrary::with_unifier(Unifier::from_config(config))
    }

    /// Creates an empty library which unifies with the given unifier.
    pub fn with_unifier(unifier: Unifier) -> Self {
        ActionLibrary {
            unifier,
            schemas: SlotMap::with_key(),
            observed: 0,
        }
    }

    pub fn unifier(&self) -> &Unifier {
        &self.unifier
    }

    /// Observes an occurrence, and either merges the occurrence with some schema or inserts the occurrence as a schema.
    pub fn observe(&mut self, observation: ActionOccurrence) -> reports::Observation {
        let observation = self.prepare(observation);
        let best = self.explore(&observation);
        self.apply(observation, best)
    }

    pub fn get(&self, key: SchemaKey) -> Option<&Schema> {
        self.schemas.get(key)
    }

    /// The schemas of the library, in order of insertion.
    pub fn iter(&self) -> impl Iterator<Item = (SchemaKey, &Schema)> {
        self.schemas.iter()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// The count of observations made.
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Sets aside irrelevant literals of an observation, if configured.
    pub(crate) fn prepare(&self, observation: ActionOccurrence) -> ActionOccurrence {
        match self.unifier.config.relevance.value {
            true => RelevanceFilter::from_config(&self.unifier.config)
                .apply(&observation)
                .kept,
            false => observation,
        }
    }

    /// Whether a schema is a candidate for merging with an observation.
    fn is_candidate(&self, schema: &ActionOccurrence, observation: &ActionOccurrence) -> bool {
        let config = &self.unifier.config;
        let named = match config.name_matching.value {
            NameMatching::Exact => schema.name() == observation.name(),
            NameMatching::Any => true,
        };

        named
            && observation.objects().len() >= schema.arity()
            && broadphase::passes(schema, observation, config.cost_ceiling.value, config)
    }

    /// Finds the cheapest merge of an observation with some schema, without changing the library.
    pub(crate) fn explore(&self, observation: &ActionOccurrence) -> Option<(SchemaKey, Unification)> {
        let candidates = self
            .schemas
            .iter()
            .filter(|(_, schema)| self.is_candidate(&schema.occurrence, observation))
            .map(|(key, schema)| (key, &schema.occurrence))
            .collect::<Vec<_>>();

        log::trace!(target: targets::LIBRARY, "{} candidates for {}", candidates.len(), observation.name());

        let results = match self.unifier.config.parallel.value && candidates.len() > 1 {
            true => self.unify_parallel(&candidates, observation),
            false => self.unify_sequential(&candidates, observation),
        };

        // Results are in candidate order, so the first of the least cost is the earliest schema.
        let mut best: Option<(SchemaKey, Unification)> = None;
        for (key, unification) in results {
            if best
                .as_ref()
                .map_or(true, |(_, b)| unification.cost() < b.cost())
            {
                best = Some((key, unification));
            }
        }

        best
    }

    fn unify_with(
        &self,
        schema: &ActionOccurrence,
        observation: &ActionOccurrence,
    ) -> Option<Unification> {
        let ceiling = self.unifier.config.cost_ceiling.value;
        match self.unifier.unify(schema, observation, ceiling) {
            reports::Unify::Unified(unification) => Some(*unification),
            reports::Unify::AboveCeiling => None,
            reports::Unify::TimeUp => {
                log::info!(target: targets::LIBRARY, "Search limit reached unifying {}", schema.name());
                None
            }
        }
    }

    fn unify_sequential(
        &self,
        candidates: &[(SchemaKey, &ActionOccurrence)],
        observation: &ActionOccurrence,
    ) -> Vec<(SchemaKey, Unification)> {
        candidates
            .iter()
            .filter_map(|(key, schema)| self.unify_with(schema, observation).map(|u| (*key, u)))
            .collect()
    }

    /// Unifies candidates in chunks, one chunk to a thread.
    fn unify_parallel(
        &self,
        candidates: &[(SchemaKey, &ActionOccurrence)],
        observation: &ActionOccurrence,
    ) -> Vec<(SchemaKey, Unification)> {
        let threads = std::thread::available_parallelism()
            .map(|count| count.get())
            .unwrap_or(1);
        let chunk_size = candidates.len().div_ceil(threads);

        let scoped = crossbeam::thread::scope(|scope| {
            let handles = candidates
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move |_| self.unify_sequential(chunk, observation)))
                .collect::<Vec<_>>();

            let mut results = Vec::default();
            for handle in handles {
                match handle.join() {
                    Ok(mut chunk_results) => results.append(&mut chunk_results),
                    Err(panic) => return Err(panic),
                }
            }
            Ok(results)
        });

        // A panic in some worker is raised again on the calling thread.
        match scoped {
            Ok(Ok(results)) => results,
            Ok(Err(panic)) | Err(panic) => {
                log::error!(target: targets::LIBRARY, "Parallel unification panicked");
                std::panic::resume_unwind(panic)
            }
        }
    }

    /// Applies the best merge found for an observation to the library.
    pub(crate) fn apply(
        &mut self,
        observation: ActionOccurrence,
        best: Option<(SchemaKey, Unification)>,
    ) -> reports::Observation {
        let index = self.observed;
        self.observed += 1;

        if let Some((key, unification)) = best {
            if let Some(schema) = self.schemas.get_mut(key) {
                let cost = unification.cost();
                let updated = schema.occurrence != unification.schema;
                if updated {
                    schema.occurrence = unification.schema;
                }
                schema.observations += 1;
                schema.history.push(MergeRecord {
                    observation: index,
                    cost,
                    updated,
                });

                log::info!(target: targets::LIBRARY, "Observation {index} merged with {} at cost {cost}", schema.occurrence.name());
                return reports::Observation::Merged { key, cost, updated };
            }
        }

        log::info!(target: targets::LIBRARY, "Observation {index} inserted as {}", observation.name());
        let key = self.schemas.insert(Schema::new(observation, index));
        reports::Observation::Inserted { key }
    }
}
