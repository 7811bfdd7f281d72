/*!
The search for a minimum cost correspondence.

# Overview

As the [alignment](crate::procedures::align) of two occurrences is determined by a correspondence, the space searched is the space of partial injective correspondences between the objects of the occurrences.

The search is a depth-first branch and bound:
- Left objects are decided one at a time, in order of descending count of argument positions, with ties broken by name.
- Each decision pairs the left object with some [candidate](crate::procedures::matcher::ObjectMatcher::candidates) right object not yet paired, or leaves the left object unpaired.
  Candidates are tried cheapest first, and leaving the object unpaired is tried last.
- Each node has a lower bound, and a node whose lower bound exceeds the bound of the search is abandoned.

The bound of the search begins at the ceiling.
Whenever a complete correspondence of cost `c` is found, the bound is lowered to `c - 1`.
So, the first optimal correspondence found is returned, and as the search is deterministic so is the correspondence.

# Lower bounds

Given a partial correspondence, a left literal is *possible* if no argument has been left unpaired, and if every argument has been decided the image of the literal is a right literal.
A right literal is possible if each argument has either been paired or some left object remains undecided.

Taken literals are pairs of possible literals of the same signature.
So, if `possible_l(s)` and `possible_r(s)` are the counts of possible literals of signature `s`, at most `Σ min(possible_l(s), possible_r(s))` pairs may be taken.
The lower bound of a node is the cost of paid pairs so far, together with the cost of discarding every literal which could not be taken.

# Limits

A search may be limited by time or by a count of nodes.
If a limit is reached the search ends with [SearchResult::TimeUp], regardless of any correspondence found, as no correspondence found can be known to be optimal.
*/

use std::time::Instant;

use crate::{
    config::{Config, Cost},
    context::Counters,
    db::{LiteralIndex, ObjectIndex, ProblemDB},
    misc::log::targets::{self},
    procedures::{align, matcher::ObjectMatcher},
};

/// The number of nodes between checks of the time limit.
const TIME_CHECK_INTERVAL: usize = 64;

/// The result of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    /// A minimum cost correspondence, within the ceiling.
    Found {
        /// The right object paired with each left object, if any.
        assignment: Vec<Option<ObjectIndex>>,

        /// The partner of each left literal, if any.
        partners: Vec<Option<LiteralIndex>>,

        /// The cost of paid pairs.
        match_cost: Cost,

        /// The count of discarded literals.
        discards: usize,
    },

    /// Every correspondence costs more than the ceiling.
    AboveCeiling,

    /// A limit was reached before the search completed.
    TimeUp,
}

/// The state of a search.
struct Search<'s, 'o> {
    db: &'s ProblemDB<'o>,
    matcher: &'s ObjectMatcher,
    discard: Cost,

    /// The order in which left objects are decided.
    order: Vec<ObjectIndex>,

    /// The right object paired with each decided left object.
    assignment: Vec<Option<ObjectIndex>>,

    decided: Vec<bool>,

    right_used: Vec<bool>,

    /// The cost of paid pairs of the current assignment.
    paid: Cost,

    /// The count of decided left objects.
    depth: usize,

    /// For each depth, the index of the next choice to try, where the count of candidates is the choice to leave the object unpaired.
    next_choice: Vec<usize>,

    /// The greatest cost of interest.
    bound: Cost,

    best: Option<(Vec<Option<ObjectIndex>>, Cost, usize)>,

    /// A buffer for lookups of right literals.
    key: Vec<usize>,

    /// Buffers for counts of possible literals in each bucket.
    possible_left: Vec<usize>,
    possible_right: Vec<usize>,
}

/// Searches for a minimum cost correspondence of cost at most `ceiling`.
pub fn search(
    db: &ProblemDB,
    matcher: &ObjectMatcher,
    config: &Config,
    ceiling: Cost,
    counters: &mut Counters,
) -> SearchResult {
    let start = Instant::now();
    let time_limit = config.time_limit();
    let node_limit = config.node_limit();

    let mut order = (0..db.left.object_count()).collect::<Vec<_>>();
    order.sort_by(|a, b| db.left.occurrences[*b].cmp(&db.left.occurrences[*a]).then(a.cmp(b)));

    let mut the_search = Search {
        db,
        matcher,
        discard: config.discard.value,

        assignment: vec![None; db.left.object_count()],
        decided: vec![false; db.left.object_count()],
        right_used: vec![false; db.right.object_count()],
        paid: 0,

        depth: 0,
        next_choice: vec![0; order.len() + 1],
        order,

        bound: ceiling,
        best: None,

        key: Vec::default(),
        possible_left: vec![0; db.bucket_count()],
        possible_right: vec![0; db.bucket_count()],
    };

    'search_loop: loop {
        counters.nodes += 1;

        if node_limit.is_some_and(|limit| counters.nodes > limit) {
            counters.time = start.elapsed();
            log::info!(target: targets::SEARCH, "Node limit reached");
            return SearchResult::TimeUp;
        }
        if counters.nodes % TIME_CHECK_INTERVAL == 0 {
            counters.time = start.elapsed();
            if time_limit.is_some_and(|limit| counters.time > limit) {
                log::info!(target: targets::SEARCH, "Time limit reached");
                return SearchResult::TimeUp;
            }
        }

        let exhausted = match the_search.depth == the_search.order.len() {
            true => {
                counters.leaves += 1;
                if the_search.evaluate_leaf() {
                    counters.improvements += 1;
                }
                true
            }
            false => match the_search.lower_bound() > the_search.bound {
                true => {
                    counters.pruned += 1;
                    true
                }
                false => false,
            },
        };

        if the_search.optimal() {
            break 'search_loop;
        }

        if !exhausted && the_search.descend() {
            continue 'search_loop;
        }

        loop {
            if !the_search.ascend() {
                break 'search_loop;
            }
            if the_search.descend() {
                continue 'search_loop;
            }
        }
    }

    counters.time = start.elapsed();
    log::trace!(target: targets::SEARCH, "Nodes {}, pruned {}, leaves {}", counters.nodes, counters.pruned, counters.leaves);

    match the_search.best {
        Some((assignment, match_cost, discards)) => {
            let partners = align::partners(db, &assignment);
            SearchResult::Found {
                assignment,
                partners,
                match_cost,
                discards,
            }
        }
        None => SearchResult::AboveCeiling,
    }
}

impl Search<'_, '_> {
    /// Makes the next choice at the current depth, if some choice remains.
    fn descend(&mut self) -> bool {
        let depth = self.depth;
        let left = self.order[depth];
        let candidates = self.matcher.candidates(left);

        while self.next_choice[depth] <= candidates.len() {
            let choice = self.next_choice[depth];
            self.next_choice[depth] += 1;

            if choice == candidates.len() {
                self.assignment[left] = None;
            } else {
                let (right, cost) = candidates[choice];
                if self.right_used[right] || self.paid + cost > self.bound {
                    continue;
                }
                self.assignment[left] = Some(right);
                self.right_used[right] = true;
                self.paid += cost;
            }

            self.decided[left] = true;
            self.depth += 1;
            self.next_choice[self.depth] = 0;
            return true;
        }

        false
    }

    /// Undoes the choice of the previous depth, if there is some previous depth.
    fn ascend(&mut self) -> bool {
        if self.depth == 0 {
            return false;
        }
        self.depth -= 1;

        let left = self.order[self.depth];
        if let Some(right) = self.assignment[left].take() {
            self.right_used[right] = false;
            self.paid -= self.matcher.pair_cost(left, right).unwrap_or(0);
        }
        self.decided[left] = false;
        true
    }

    /// Whether no better correspondence can exist.
    fn optimal(&self) -> bool {
        matches!(self.best, Some((_, 0, 0)))
    }

    /// Evaluates a complete correspondence, and returns true if the correspondence improves on the best found.
    fn evaluate_leaf(&mut self) -> bool {
        let mut taken = 0;
        for literal in &self.db.left.indexed {
            let image = literal.arguments.iter().map(|a| self.assignment[*a]);
            if image.clone().all(|r| r.is_some()) {
                let arguments = image.flatten();
                if self
                    .db
                    .right_literal(literal.bucket, arguments, &mut self.key)
                    .is_some()
                {
                    taken += 1;
                }
            }
        }

        let discards = self.db.literal_total() - 2 * taken;
        let cost = self.paid + self.discard.saturating_mul(discards as Cost);
        if cost > self.bound {
            return false;
        }

        log::trace!(target: targets::SEARCH, "Found cost {cost} ({} paid, {discards} discards)", self.paid);
        self.best = Some((self.assignment.clone(), self.paid, discards));
        match cost.checked_sub(1) {
            Some(bound) => self.bound = bound,
            None => self.bound = 0,
        }
        true
    }

    /// A lower bound on the cost of any correspondence extending the current assignment.
    fn lower_bound(&mut self) -> Cost {
        let remaining = self.depth < self.order.len();

        self.possible_left.iter_mut().for_each(|count| *count = 0);
        self.possible_right.iter_mut().for_each(|count| *count = 0);

        for literal in &self.db.left.indexed {
            let mut complete = true;
            let mut possible = true;
            for &argument in &literal.arguments {
                if !self.decided[argument] {
                    complete = false;
                } else if self.assignment[argument].is_none() {
                    possible = false;
                    break;
                }
            }

            if possible && complete {
                let image = literal.arguments.iter().filter_map(|a| self.assignment[*a]);
                possible = self
                    .db
                    .right_literal(literal.bucket, image, &mut self.key)
                    .is_some();
            }

            if possible {
                self.possible_left[literal.bucket] += 1;
            }
        }

        for literal in &self.db.right.indexed {
            if literal
                .arguments
                .iter()
                .all(|argument| remaining || self.right_used[*argument])
            {
                self.possible_right[literal.bucket] += 1;
            }
        }

        let mut takeable = 0;
        for (left, right) in self.possible_left.iter().zip(&self.possible_right) {
            takeable += (*left).min(*right);
        }

        let discards = self.db.literal_total() - 2 * takeable;
        self.paid + self.discard.saturating_mul(discards as Cost)
    }
}
