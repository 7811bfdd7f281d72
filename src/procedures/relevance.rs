/*!
The relevance filter, a narrowing of the literals considered during alignment.

Some predicates are labelled *relevant*.
By default, these are the predicates of the effects of the occurrences under consideration.

A literal is kept if:
- Its predicate is relevant.
- Or, the literal has some argument and every argument is close to some relevant literal.

Closeness is distance in the object graph of the occurrence.
Objects of relevant literals are at distance zero, and any two objects which are arguments of a common literal are at distance one from each other.
The [distance](RelevanceFilter::max_distance) permitted is configurable, with a default of one.

Literals which are not kept are *set aside*.
A set aside literal is not aligned, is noted as [Ignored](crate::structures::alignment::Disposition::Ignored), and is not counted against a unification.
The occurrence as a whole may be [restored](Filtered::restore).
*/

use std::collections::{BTreeSet, HashMap};

use petgraph::{
    algo::dijkstra,
    graph::{NodeIndex, UnGraph},
};

use crate::{
    config::Config,
    misc::log::targets::{self},
    structures::{literal::Literal, occurrence::ActionOccurrence},
};

/// A relevance filter, with relevant predicates either given or taken from effects.
#[derive(Clone, Debug)]
pub struct RelevanceFilter {
    /// Relevant predicates, or `None` to use the predicates of effects.
    pub predicates: Option<BTreeSet<String>>,

    /// The greatest distance from a relevant object at which an object is relevant.
    pub max_distance: u32,
}

/// An occurrence with some literals set aside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filtered {
    pub kept: ActionOccurrence,
    pub set_aside: Vec<Literal>,
}

impl Filtered {
    /// The occurrence before filtering.
    pub fn restore(&self) -> ActionOccurrence {
        let literals = self
            .kept
            .literals()
            .chain(self.set_aside.iter())
            .cloned()
            .collect();
        ActionOccurrence::from_parts_unchecked(
            self.kept.name().to_string(),
            self.kept.objects().to_vec(),
            literals,
        )
    }

    /// An occurrence with nothing set aside.
    fn unfiltered(occurrence: &ActionOccurrence) -> Self {
        Filtered {
            kept: occurrence.clone(),
            set_aside: Vec::default(),
        }
    }
}

impl RelevanceFilter {
    /// A filter relevant to effects.
    pub fn effects(max_distance: u32) -> Self {
        RelevanceFilter {
            predicates: None,
            max_distance,
        }
    }

    /// A filter relevant to the given predicates.
    pub fn with_predicates<P: Into<String>>(
        predicates: impl IntoIterator<Item = P>,
        max_distance: u32,
    ) -> Self {
        RelevanceFilter {
            predicates: Some(predicates.into_iter().map(|p| p.into()).collect()),
            max_distance,
        }
    }

    /// A filter relevant to effects, at the configured distance.
    pub fn from_config(config: &Config) -> Self {
        RelevanceFilter::effects(config.relevance_distance.value)
    }

    /// The predicates relevant to the given occurrences.
    pub fn relevant_predicates<'o>(
        &self,
        occurrences: impl IntoIterator<Item = &'o ActionOccurrence>,
    ) -> BTreeSet<String> {
        match &self.predicates {
            Some(predicates) => predicates.clone(),
            None => occurrences
                .into_iter()
                .flat_map(|o| o.literals())
                .filter(|l| l.section().is_effect())
                .map(|l| l.predicate().to_string())
                .collect(),
        }
    }

    /// Filters an occurrence, with predicates relevant to the occurrence.
    pub fn apply(&self, occurrence: &ActionOccurrence) -> Filtered {
        let relevant = self.relevant_predicates([occurrence]);
        self.apply_with(occurrence, &relevant)
    }

    /// Filters a pair of occurrences, with predicates relevant to either occurrence.
    pub fn apply_pair(
        &self,
        left: &ActionOccurrence,
        right: &ActionOccurrence,
    ) -> (Filtered, Filtered) {
        let relevant = self.relevant_predicates([left, right]);
        (
            self.apply_with(left, &relevant),
            self.apply_with(right, &relevant),
        )
    }

    /// Filters an occurrence, with the given relevant predicates.
    pub fn apply_with(&self, occurrence: &ActionOccurrence, relevant: &BTreeSet<String>) -> Filtered {
        if occurrence
            .literals()
            .all(|l| relevant.contains(l.predicate()))
        {
            return Filtered::unfiltered(occurrence);
        }

        let mut graph: UnGraph<(), u32> = UnGraph::default();
        let root = graph.add_node(());
        let nodes: HashMap<&str, NodeIndex> = occurrence
            .objects()
            .iter()
            .map(|o| (o.name(), graph.add_node(())))
            .collect();

        for literal in occurrence.literals() {
            let arguments = literal
                .arguments()
                .iter()
                .filter_map(|a| nodes.get(a.as_str()).copied())
                .collect::<Vec<_>>();

            if relevant.contains(literal.predicate()) {
                for &node in &arguments {
                    graph.update_edge(root, node, 0);
                }
            }
            for (index, &a) in arguments.iter().enumerate() {
                for &b in &arguments[index + 1..] {
                    if a != b {
                        graph.update_edge(a, b, 1);
                    }
                }
            }
        }

        let distances = dijkstra(&graph, root, None, |edge| *edge.weight());
        let close = |name: &str| {
            nodes
                .get(name)
                .and_then(|node| distances.get(node))
                .is_some_and(|distance| *distance <= self.max_distance)
        };

        let (kept, set_aside) = occurrence.retain_literals(|literal| {
            relevant.contains(literal.predicate())
                || (literal.arity() > 0 && literal.arguments().iter().all(|a| close(a.as_str())))
        });

        log::trace!(target: targets::RELEVANCE, "Set aside {} literals of {}", set_aside.len(), occurrence.name());

        Filtered { kept, set_aside }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{literal::Section, object::Object};

    fn occurrence() -> ActionOccurrence {
        ActionOccurrence::new(
            "move",
            [
                Object::parameter("x"),
                Object::constant("p1"),
                Object::constant("p2"),
                Object::constant("p3"),
                Object::constant("p4"),
            ],
            [
                Literal::new(Section::Precondition, "at", ["x", "p1"]),
                Literal::new(Section::Precondition, "road", ["p1", "p2"]),
                Literal::new(Section::Precondition, "road", ["p2", "p3"]),
                Literal::new(Section::Precondition, "clear", ["p4"]),
                Literal::new(Section::Precondition, "day", Vec::<String>::new()),
                Literal::new(Section::Add, "at", ["x", "p2"]),
                Literal::new(Section::Delete, "at", ["x", "p1"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn effect_distance() {
        let occurrence = occurrence();

        let near = RelevanceFilter::effects(0).apply(&occurrence);
        // at is relevant, road(p1, p2) has both objects in relevant literals.
        assert_eq!(near.kept.literal_count(), 4);
        assert_eq!(near.set_aside.len(), 3);

        let far = RelevanceFilter::effects(1).apply(&occurrence);
        // p3 is one step from p2.
        assert_eq!(far.kept.literal_count(), 5);
        assert!(far
            .set_aside
            .contains(&Literal::new(Section::Precondition, "clear", ["p4"])));

        assert_eq!(far.restore(), occurrence);
    }

    #[test]
    fn given_predicates() {
        let occurrence = occurrence();
        let filter = RelevanceFilter::with_predicates(["day"], 5);
        let filtered = filter.apply(&occurrence);
        assert_eq!(filtered.kept.literal_count(), 1);
        assert_eq!(filtered.restore(), occurrence);
    }
}
