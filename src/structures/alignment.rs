/*!
Alignments of the literals of two occurrences.

For each literal on either side, an alignment records a [Disposition]:
- Taken with some partner literal on the other side.
- Discarded, at cost.
- Ignored, as the literal was set aside as irrelevant before alignment, at no cost.

An alignment is symmetric: if a left literal is taken with a right literal, the right literal is taken with the left literal.
*/

use serde::{Deserialize, Serialize};

use crate::structures::literal::Literal;

/// The fate of a literal in an alignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Paired with the given literal of the other occurrence.
    Taken(Literal),

    /// Not paired, and counted against the alignment.
    Discarded,

    /// Set aside before alignment, and not counted.
    Ignored,
}

/// Dispositions for every literal of a pair of occurrences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    pub left: Vec<(Literal, Disposition)>,
    pub right: Vec<(Literal, Disposition)>,
}

impl Alignment {
    /// Pairs of taken literals, ordered by left literal.
    pub fn taken(&self) -> impl Iterator<Item = (&Literal, &Literal)> {
        self.left.iter().filter_map(|(literal, disposition)| match disposition {
            Disposition::Taken(partner) => Some((literal, partner)),
            _ => None,
        })
    }

    pub fn taken_count(&self) -> usize {
        self.taken().count()
    }

    pub fn discarded_left(&self) -> impl Iterator<Item = &Literal> {
        Self::with_disposition(&self.left, Disposition::Discarded)
    }

    pub fn discarded_right(&self) -> impl Iterator<Item = &Literal> {
        Self::with_disposition(&self.right, Disposition::Discarded)
    }

    /// The count of discarded literals, on both sides.
    pub fn discard_count(&self) -> usize {
        self.discarded_left().count() + self.discarded_right().count()
    }

    /// The count of ignored literals, on both sides.
    pub fn ignored_count(&self) -> usize {
        Self::with_disposition(&self.left, Disposition::Ignored).count()
            + Self::with_disposition(&self.right, Disposition::Ignored).count()
    }

    /// The disposition of a left literal, if the literal is part of the alignment.
    pub fn disposition_left(&self, literal: &Literal) -> Option<&Disposition> {
        self.left
            .iter()
            .find(|(l, _)| l == literal)
            .map(|(_, disposition)| disposition)
    }

    /// The disposition of a right literal, if the literal is part of the alignment.
    pub fn disposition_right(&self, literal: &Literal) -> Option<&Disposition> {
        self.right
            .iter()
            .find(|(l, _)| l == literal)
            .map(|(_, disposition)| disposition)
    }

    /// The alignment from right to left.
    pub fn inverse(&self) -> Self {
        Alignment {
            left: self.right.clone(),
            right: self.left.clone(),
        }
    }

    fn with_disposition(
        side: &[(Literal, Disposition)],
        wanted: Disposition,
    ) -> impl Iterator<Item = &Literal> {
        side.iter()
            .filter(move |(_, disposition)| *disposition == wanted)
            .map(|(literal, _)| literal)
    }
}
