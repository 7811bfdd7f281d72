/*!
Unification of a pair of occurrences.

The procedure, in order:
1. If [relevance](crate::config::Config::relevance) is set, literals irrelevant to the effects of either occurrence are [set aside](crate::procedures::relevance).
2. The [broadphase](crate::procedures::broadphase) filter is checked.
3. The occurrences are indexed and [candidate](crate::procedures::matcher) pairs of objects are found.
4. The [search](crate::procedures::search) finds a minimum cost correspondence.
5. The correspondence is [aligned](crate::procedures::align) and [generalised](crate::procedures::generalise).
*/

use crate::{
    config::{Config, Cost},
    context::{Counters, Unifier},
    db::ProblemDB,
    misc::log::targets::{self},
    procedures::{
        align, broadphase,
        generalise::generalise,
        matcher::ObjectMatcher,
        relevance::RelevanceFilter,
        search::{search, SearchResult},
    },
    reports::{self},
    structures::{
        correspondence::Correspondence, literal::Literal, occurrence::ActionOccurrence,
        unification::Unification,
    },
};

impl Unifier {
    /// Unifies `left` with `right`, if some unification costs at most `ceiling`.
    pub fn unify(
        &self,
        left: &ActionOccurrence,
        right: &ActionOccurrence,
        ceiling: Cost,
    ) -> reports::Unify {
        match self.config.relevance.value {
            true => {
                let filter = RelevanceFilter::from_config(&self.config);
                let (left, right) = filter.apply_pair(left, right);
                self.unify_filtered(
                    &left.kept,
                    &right.kept,
                    &left.set_aside,
                    &right.set_aside,
                    ceiling,
                )
            }
            false => self.unify_filtered(left, right, &[], &[], ceiling),
        }
    }

    /// Unifies `left` with `right`, noting the given literals as ignored.
    pub(crate) fn unify_filtered(
        &self,
        left: &ActionOccurrence,
        right: &ActionOccurrence,
        ignored_left: &[Literal],
        ignored_right: &[Literal],
        ceiling: Cost,
    ) -> reports::Unify {
        if !broadphase::passes(left, right, ceiling, &self.config) {
            return reports::Unify::AboveCeiling;
        }

        let db = ProblemDB::new(left, right);
        let matcher = ObjectMatcher::new(&db, &self.config, self.compatibility.as_ref());
        let mut counters = Counters::default();

        let (assignment, partners, match_cost, discards) =
            match search(&db, &matcher, &self.config, ceiling, &mut counters) {
                SearchResult::Found {
                    assignment,
                    partners,
                    match_cost,
                    discards,
                } => (assignment, partners, match_cost, discards),
                SearchResult::AboveCeiling => return reports::Unify::AboveCeiling,
                SearchResult::TimeUp => return reports::Unify::TimeUp,
            };

        let correspondence = assignment
            .iter()
            .enumerate()
            .filter_map(|(l, r)| {
                r.map(|r| (db.left.objects[l].name(), db.right.objects[r].name()))
            })
            .collect::<Correspondence>();

        let alignment = align::alignment_of(&db, &partners, ignored_left, ignored_right);

        let generalised = generalise(
            left,
            right,
            &correspondence,
            &alignment,
            &self.config,
            self.compatibility.as_ref(),
        );

        let unification = Unification {
            correspondence,
            alignment,
            match_cost,
            discard_cost: self.config.discard.value.saturating_mul(discards as Cost),
            schema: generalised.schema,
            sigma_left: generalised.sigma_left,
            sigma_right: generalised.sigma_right,
            counters,
        };

        log::debug!(target: targets::SEARCH, "Unified {} with {} at cost {}", left.name(), right.name(), unification.cost());

        reports::Unify::Unified(Box::new(unification))
    }
}

/// Unifies `left` with `right` with the default configuration, if some unification costs at most `ceiling`.
///
/// ```rust
/// # use oaru::builder::Builder;
/// # use oaru::procedures::unify::unify;
/// let a = Builder::new("move")
///     .parameter("x")
///     .constant("p1")
///     .constant("p2")
///     .precondition("at", ["x", "p1"])
///     .add("at", ["x", "p2"])
///     .delete("at", ["x", "p1"])
///     .build()
///     .unwrap();
/// let b = Builder::new("move")
///     .parameter("x")
///     .constant("q1")
///     .constant("q2")
///     .precondition("at", ["x", "q1"])
///     .add("at", ["x", "q2"])
///     .delete("at", ["x", "q1"])
///     .build()
///     .unwrap();
///
/// assert_eq!(unify(&a, &b, 30).cost(), Some(20));
/// assert_eq!(unify(&a, &b, 19).cost(), None);
/// ```
pub fn unify(left: &ActionOccurrence, right: &ActionOccurrence, ceiling: Cost) -> reports::Unify {
    Unifier::from_config(Config::default()).unify(left, right, ceiling)
}
