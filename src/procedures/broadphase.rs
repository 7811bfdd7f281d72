/*!
The broadphase filter, a cheap check that a unification may fall within a ceiling.

Literals are only taken in pairs of the same signature, and so for each signature at least the difference in counts of literals with that signature must be discarded.
The sum of these differences, priced at the discard cost, is a lower bound on the cost of any unification.

A pair which does not pass the filter can never unify within the ceiling, though a pair which passes may not either.
*/

use crate::{
    config::{Config, Cost},
    misc::log::targets::{self},
    structures::occurrence::ActionOccurrence,
};

/// A lower bound on the cost of unifying `left` with `right`.
pub fn lower_bound(left: &ActionOccurrence, right: &ActionOccurrence, config: &Config) -> Cost {
    let left_counts = left.signature_counts();
    let mut right_counts = right.signature_counts();

    let mut unmatched = 0;
    for (signature, count) in left_counts {
        let other = right_counts.remove(&signature).unwrap_or(0);
        unmatched += count.abs_diff(other);
    }
    unmatched += right_counts.values().sum::<usize>();

    config.discard.value.saturating_mul(unmatched as Cost)
}

/// Whether a unification of `left` with `right` may cost at most `ceiling`.
pub fn passes(
    left: &ActionOccurrence,
    right: &ActionOccurrence,
    ceiling: Cost,
    config: &Config,
) -> bool {
    let bound = lower_bound(left, right, config);
    let pass = bound <= ceiling;
    if !pass {
        log::trace!(target: targets::BROADPHASE, "Rejected {} against {}: bound {bound} above {ceiling}", right.name(), left.name());
    }
    pass
}
