/*!
The object matcher: which pairs of objects may be made, and at what cost.

# Overview

Any left object may be paired with any right object, subject to the pair being permitted (e.g. by types).
Each permitted pair has a cost:
- Zero, if the objects are known to be the same entity, via a [Compatibility] relation.
- The [generic match](crate::config::Config::generic_match) cost, otherwise.

Unpaired objects cost nothing directly, though any literal mentioning an unpaired object must be discarded.

The matcher never runs by itself.
Rather, it supplies the [search](crate::procedures::search) with the candidate partners of each left object, and validates/prices correspondences.

# Candidates

A paid pair is only useful if it allows some pair of literals to be taken.
For this to be the case, the objects must fill the same argument position of some pair of literals with the same signature.
Paid pairs which are not *co-positioned* in this sense are never candidates, as removing such a pair from a correspondence lowers the cost without changing the alignment.

Free pairs are always candidates.
*/

use std::collections::BTreeSet;

use crate::{
    config::{Config, Cost},
    db::{ObjectIndex, ProblemDB},
    misc::log::targets::{self},
    structures::{correspondence::Correspondence, object::Object},
};

/// The zero-cost relation between left and right objects.
pub trait Compatibility {
    /// Whether `left` and `right` are known to be the same entity.
    fn is_free(&self, left: &Object, right: &Object) -> bool;
}

/// Objects are the same entity when their [identities](Object::identity) are equal.
#[derive(Clone, Copy, Debug, Default)]
pub struct SameIdentity;

impl Compatibility for SameIdentity {
    fn is_free(&self, left: &Object, right: &Object) -> bool {
        left.identity() == right.identity()
    }
}

/// An explicit list of free pairs, by name, in addition to pairs of the same identity.
#[derive(Clone, Debug, Default)]
pub struct ExplicitPairs {
    pairs: BTreeSet<(String, String)>,
}

impl ExplicitPairs {
    pub fn insert(&mut self, left: impl Into<String>, right: impl Into<String>) {
        self.pairs.insert((left.into(), right.into()));
    }
}

impl<L: Into<String>, R: Into<String>> FromIterator<(L, R)> for ExplicitPairs {
    fn from_iter<I: IntoIterator<Item = (L, R)>>(iter: I) -> Self {
        ExplicitPairs {
            pairs: iter
                .into_iter()
                .map(|(l, r)| (l.into(), r.into()))
                .collect(),
        }
    }
}

impl Compatibility for ExplicitPairs {
    fn is_free(&self, left: &Object, right: &Object) -> bool {
        SameIdentity.is_free(left, right)
            || self
                .pairs
                .contains(&(left.name().to_string(), right.name().to_string()))
    }
}

/// The swap of some relation, for unifying right with left.
pub struct Swapped<'c, C: ?Sized>(pub &'c C);

impl<C: Compatibility + ?Sized> Compatibility for Swapped<'_, C> {
    fn is_free(&self, left: &Object, right: &Object) -> bool {
        self.0.is_free(right, left)
    }
}

/// Costs of pairs and candidate partners for a [ProblemDB].
pub struct ObjectMatcher {
    /// Costs of pairs, indexed by left then right object, with `None` for pairs which are not permitted.
    costs: Vec<Vec<Option<Cost>>>,

    /// Candidates for each left object, ordered by cost and then by right object.
    candidates: Vec<Vec<(ObjectIndex, Cost)>>,
}

impl ObjectMatcher {
    pub fn new(
        db: &ProblemDB,
        config: &Config,
        compatibility: &(impl Compatibility + ?Sized),
    ) -> Self {
        let left_count = db.left.object_count();
        let right_count = db.right.object_count();

        let mut costs = vec![vec![None; right_count]; left_count];
        for (l, left) in db.left.objects.iter().enumerate() {
            for (r, right) in db.right.objects.iter().enumerate() {
                costs[l][r] = pair_cost(left, right, config, compatibility);
            }
        }

        let mut co_positioned = vec![vec![false; right_count]; left_count];
        for (bucket, left_literals) in db.left.by_bucket.iter().enumerate() {
            for &l_literal in left_literals {
                for &r_literal in &db.right.by_bucket[bucket] {
                    let left_arguments = &db.left.indexed[l_literal].arguments;
                    let right_arguments = &db.right.indexed[r_literal].arguments;
                    for (&l, &r) in left_arguments.iter().zip(right_arguments) {
                        co_positioned[l][r] = true;
                    }
                }
            }
        }

        let mut candidates = Vec::with_capacity(left_count);
        for l in 0..left_count {
            let mut partners = Vec::default();
            for r in 0..right_count {
                match costs[l][r] {
                    Some(0) => partners.push((r, 0)),
                    Some(cost) if co_positioned[l][r] => partners.push((r, cost)),
                    _ => {}
                }
            }
            // Objects are indexed by name, so this orders by cost then name.
            partners.sort();
            log::trace!(target: targets::MATCHER, "{} has {} candidates", db.left.objects[l].name(), partners.len());
            candidates.push(partners);
        }

        ObjectMatcher { costs, candidates }
    }

    /// The cost of pairing `left` with `right`, or `None` if the pair is not permitted.
    pub fn pair_cost(&self, left: ObjectIndex, right: ObjectIndex) -> Option<Cost> {
        self.costs.get(left).and_then(|row| row.get(right).copied().flatten())
    }

    /// Candidate partners of `left`, ordered by cost and then by right object.
    pub fn candidates(&self, left: ObjectIndex) -> &[(ObjectIndex, Cost)] {
        &self.candidates[left]
    }

    /// The direct cost of a correspondence, or `None` if the correspondence is not permitted.
    ///
    /// A correspondence is not permitted if it refers to an object absent from the relevant occurrence, or if it contains a pair which is not permitted.
    pub fn matching_cost(&self, db: &ProblemDB, correspondence: &Correspondence) -> Option<Cost> {
        let mut total = 0;
        for (left, right) in correspondence.iter() {
            let l = db.left.object_index(left)?;
            let r = db.right.object_index(right)?;
            total += self.pair_cost(l, r)?;
        }
        Some(total)
    }
}

/// The cost of pairing `left` with `right`, or `None` if the pair is not permitted.
pub fn pair_cost(
    left: &Object,
    right: &Object,
    config: &Config,
    compatibility: &(impl Compatibility + ?Sized),
) -> Option<Cost> {
    if config.typed_matching.value && left.type_name() != right.type_name() {
        return None;
    }

    let free_parameters =
        config.free_parameters.value && left.is_parameter() && right.is_parameter();

    match free_parameters || compatibility.is_free(left, right) {
        true => Some(0),
        false => Some(config.generic_match.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{
        literal::{Literal, Section},
        occurrence::ActionOccurrence,
    };

    fn occurrence(objects: &[Object], literals: &[(&str, &[&str])]) -> ActionOccurrence {
        ActionOccurrence::new(
            "a",
            objects.iter().cloned(),
            literals
                .iter()
                .map(|(p, args)| Literal::new(Section::Precondition, *p, args.iter().copied())),
        )
        .unwrap()
    }

    #[test]
    fn free_and_paid() {
        let left = occurrence(
            &[Object::parameter("x"), Object::constant("p1")],
            &[("at", &["x", "p1"])],
        );
        let right = occurrence(
            &[Object::parameter("x"), Object::constant("q1")],
            &[("at", &["x", "q1"])],
        );
        let db = ProblemDB::new(&left, &right);
        let matcher = ObjectMatcher::new(&db, &Config::default(), &SameIdentity);

        let x = db.left.object_index("x").unwrap();
        let p1 = db.left.object_index("p1").unwrap();
        let q1 = db.right.object_index("q1").unwrap();
        let rx = db.right.object_index("x").unwrap();

        assert_eq!(matcher.pair_cost(x, rx), Some(0));
        assert_eq!(matcher.pair_cost(p1, q1), Some(10));
        assert_eq!(matcher.candidates(x)[0], (rx, 0));
        // x and q1 are never co-positioned.
        assert!(!matcher.candidates(x).iter().any(|&(r, _)| r == q1));

        let correspondence = Correspondence::from_iter([("x", "x"), ("p1", "q1")]);
        assert_eq!(matcher.matching_cost(&db, &correspondence), Some(10));

        let missing = Correspondence::from_iter([("y", "x")]);
        assert_eq!(matcher.matching_cost(&db, &missing), None);
    }

    #[test]
    fn typed() {
        let left = occurrence(
            &[Object::parameter("x").with_type("truck")],
            &[("moving", &["x"])],
        );
        let right = occurrence(
            &[Object::parameter("y").with_type("plane")],
            &[("moving", &["y"])],
        );
        let db = ProblemDB::new(&left, &right);

        let mut config = Config::default();
        let matcher = ObjectMatcher::new(&db, &config, &SameIdentity);
        assert_eq!(matcher.pair_cost(0, 0), None);
        assert!(matcher.candidates(0).is_empty());

        config.typed_matching.value = false;
        let matcher = ObjectMatcher::new(&db, &config, &SameIdentity);
        assert_eq!(matcher.pair_cost(0, 0), Some(10));

        config.free_parameters.value = true;
        let matcher = ObjectMatcher::new(&db, &config, &SameIdentity);
        assert_eq!(matcher.pair_cost(0, 0), Some(0));
    }

    #[test]
    fn explicit_pairs() {
        let pairs = ExplicitPairs::from_iter([("p1", "q1")]);
        assert!(pairs.is_free(&Object::constant("p1"), &Object::constant("q1")));
        assert!(pairs.is_free(&Object::constant("p2"), &Object::constant("p2")));
        assert!(!pairs.is_free(&Object::constant("q1"), &Object::constant("p1")));
        assert!(Swapped(&pairs).is_free(&Object::constant("q1"), &Object::constant("p1")));
    }
}
