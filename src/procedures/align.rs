/*!
The literal aligner: the disposition of each literal under a fixed correspondence.

A left literal may be taken with a right literal exactly when:
- The literals share a [signature](crate::structures::literal::Signature).
- Each argument of the left literal is paired with the argument at the same position of the right literal.

As a correspondence is a function, each left literal has at most one legal partner.
And, as a correspondence is injective, each right literal has at most one legal partner.
So, there is nothing to decide: each literal with a legal partner is taken, and every other literal is discarded.

Literals set aside by a [relevance filter](crate::procedures::relevance) before alignment are noted as [Ignored](Disposition::Ignored).
*/

use crate::{
    db::{LiteralIndex, ObjectIndex, ProblemDB},
    misc::log::targets::{self},
    structures::{
        alignment::{Alignment, Disposition},
        correspondence::Correspondence,
        literal::Literal,
        occurrence::ActionOccurrence,
    },
};

/// The alignment of `left` with `right` under `correspondence`.
///
/// Pairs of the correspondence which refer to objects absent from the occurrences are ignored.
///
/// ```rust
/// # use oaru::builder::Builder;
/// # use oaru::procedures::align::align;
/// # use oaru::structures::correspondence::Correspondence;
/// let left = Builder::new("move")
///     .parameter("x")
///     .constant("p1")
///     .precondition("at", ["x", "p1"])
///     .build()
///     .unwrap();
/// let right = Builder::new("move")
///     .parameter("x")
///     .constant("q1")
///     .precondition("at", ["x", "q1"])
///     .build()
///     .unwrap();
///
/// let partial = align(&left, &right, &Correspondence::from_iter([("x", "x")]));
/// assert_eq!(partial.discard_count(), 2);
///
/// let full = align(&left, &right, &Correspondence::from_iter([("x", "x"), ("p1", "q1")]));
/// assert_eq!(full.taken_count(), 1);
/// assert_eq!(full.discard_count(), 0);
/// ```
pub fn align(
    left: &ActionOccurrence,
    right: &ActionOccurrence,
    correspondence: &Correspondence,
) -> Alignment {
    let db = ProblemDB::new(left, right);
    let assignment = assignment_of(&db, correspondence);
    let partners = partners(&db, &assignment);
    alignment_of(&db, &partners, &[], &[])
}

/// The correspondence as an assignment of right object indices to left object indices.
pub(crate) fn assignment_of(
    db: &ProblemDB,
    correspondence: &Correspondence,
) -> Vec<Option<ObjectIndex>> {
    let mut assignment = vec![None; db.left.object_count()];
    for (left, right) in correspondence.iter() {
        if let (Some(l), Some(r)) = (db.left.object_index(left), db.right.object_index(right)) {
            assignment[l] = Some(r);
        }
    }
    assignment
}

/// The partner of each left literal under a (complete) assignment.
pub(crate) fn partners(
    db: &ProblemDB,
    assignment: &[Option<ObjectIndex>],
) -> Vec<Option<LiteralIndex>> {
    let mut key = Vec::default();
    let mut partners = Vec::with_capacity(db.left.literal_count());

    for literal in &db.left.indexed {
        let mut image = Vec::with_capacity(literal.arguments.len());
        for &argument in &literal.arguments {
            match assignment[argument] {
                Some(r) => image.push(r),
                None => break,
            }
        }

        let partner = match image.len() == literal.arguments.len() {
            true => db.right_literal(literal.bucket, image.into_iter(), &mut key),
            false => None,
        };
        partners.push(partner);
    }

    partners
}

/// The alignment given by the partners of left literals, together with ignored literals of either side.
pub(crate) fn alignment_of(
    db: &ProblemDB,
    partners: &[Option<LiteralIndex>],
    ignored_left: &[Literal],
    ignored_right: &[Literal],
) -> Alignment {
    let mut right_partners: Vec<Option<LiteralIndex>> = vec![None; db.right.literal_count()];
    for (l, partner) in partners.iter().enumerate() {
        if let Some(r) = partner {
            right_partners[*r] = Some(l);
        }
    }

    let mut alignment = Alignment::default();

    for (literal, partner) in db.left.literals.iter().zip(partners) {
        let disposition = match partner {
            Some(r) => Disposition::Taken(db.right.literals[*r].clone()),
            None => Disposition::Discarded,
        };
        alignment.left.push(((*literal).clone(), disposition));
    }
    for literal in ignored_left {
        alignment.left.push((literal.clone(), Disposition::Ignored));
    }

    for (literal, partner) in db.right.literals.iter().zip(&right_partners) {
        let disposition = match partner {
            Some(l) => Disposition::Taken(db.left.literals[*l].clone()),
            None => Disposition::Discarded,
        };
        alignment.right.push(((*literal).clone(), disposition));
    }
    for literal in ignored_right {
        alignment.right.push((literal.clone(), Disposition::Ignored));
    }

    log::trace!(target: targets::ALIGNER, "Taken {}, discarded {}, ignored {}", alignment.taken_count(), alignment.discard_count(), alignment.ignored_count());

    alignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{literal::Section, object::Object};

    #[test]
    fn symmetric_dispositions() {
        let left = ActionOccurrence::new(
            "a",
            [Object::parameter("x"), Object::constant("p")],
            [
                Literal::new(Section::Precondition, "at", ["x", "p"]),
                Literal::new(Section::Add, "held", ["x"]),
            ],
        )
        .unwrap();
        let right = ActionOccurrence::new(
            "a",
            [Object::parameter("y"), Object::constant("q")],
            [
                Literal::new(Section::Precondition, "at", ["y", "q"]),
                Literal::new(Section::Add, "held", ["q"]),
            ],
        )
        .unwrap();

        let correspondence = Correspondence::from_iter([("x", "y"), ("p", "q")]);
        let alignment = align(&left, &right, &correspondence);

        assert_eq!(alignment.taken_count(), 1);
        assert_eq!(alignment.discard_count(), 2);

        let at_right = Literal::new(Section::Precondition, "at", ["y", "q"]);
        let at_left = Literal::new(Section::Precondition, "at", ["x", "p"]);
        assert_eq!(
            alignment.disposition_right(&at_right),
            Some(&Disposition::Taken(at_left))
        );

        let inverse = align(&right, &left, &correspondence.inverse());
        assert_eq!(inverse, alignment.inverse());
    }

    #[test]
    fn unknown_objects_are_ignored() {
        let left = ActionOccurrence::new(
            "a",
            [Object::parameter("x")],
            [Literal::new(Section::Add, "held", ["x"])],
        )
        .unwrap();

        let correspondence = Correspondence::from_iter([("x", "x"), ("z", "z")]);
        let alignment = align(&left, &left, &correspondence);
        assert_eq!(alignment.taken_count(), 1);
    }
}
