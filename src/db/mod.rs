/*!
Indexed views of a pair of occurrences, as used during a search.

Throughout a search objects and literals are referred to by index rather than by name.
- Objects of each side are indexed in name order.
- Literals of each side are indexed in canonical order.
- Signatures present on either side are indexed in canonical order, and called *buckets*.

In addition, right literals are stored in a map keyed by bucket and argument indices, so that the (unique) partner of a left literal under a complete correspondence may be found directly.
*/

use std::collections::{BTreeMap, HashMap};

use crate::structures::{
    literal::{Literal, Signature},
    object::Object,
    occurrence::ActionOccurrence,
};

/// The index of an object within one side of a [ProblemDB].
pub type ObjectIndex = usize;

/// The index of a literal within one side of a [ProblemDB].
pub type LiteralIndex = usize;

/// The index of a signature within a [ProblemDB].
pub type BucketIndex = usize;

/// A literal, with the bucket and arguments as indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedLiteral {
    pub bucket: BucketIndex,
    pub arguments: Vec<ObjectIndex>,
}

/// One side of a [ProblemDB].
pub struct SideDB<'o> {
    pub occurrence: &'o ActionOccurrence,

    /// Objects, in name order.
    pub objects: Vec<&'o Object>,

    /// Literals, in canonical order.
    pub literals: Vec<&'o Literal>,

    /// The indexed form of each literal, in the same order as `literals`.
    pub indexed: Vec<IndexedLiteral>,

    /// For each bucket, the literals of the bucket.
    pub by_bucket: Vec<Vec<LiteralIndex>>,

    /// For each object, the count of argument positions the object fills.
    pub occurrences: Vec<usize>,
}

impl<'o> SideDB<'o> {
    fn new(occurrence: &'o ActionOccurrence, buckets: &BTreeMap<Signature, BucketIndex>) -> Self {
        let mut objects = occurrence.objects().iter().collect::<Vec<_>>();
        objects.sort_by(|a, b| a.name().cmp(b.name()));

        let mut side = SideDB {
            occurrence,
            objects,
            literals: occurrence.literals().collect(),
            indexed: Vec::default(),
            by_bucket: vec![Vec::default(); buckets.len()],
            occurrences: Vec::default(),
        };
        side.occurrences = vec![0; side.objects.len()];

        for (index, literal) in side.literals.iter().enumerate() {
            // Every signature of the occurrence is a key of the bucket map.
            let bucket = buckets[&literal.signature()];
            let mut arguments = Vec::with_capacity(literal.arity());
            for argument in literal.arguments() {
                // An occurrence never refers to an undeclared object.
                let object = side.object_index(argument).unwrap_or_default();
                side.occurrences[object] += 1;
                arguments.push(object);
            }
            side.by_bucket[bucket].push(index);
            side.indexed.push(IndexedLiteral { bucket, arguments });
        }

        side
    }

    /// The index of the object with the given name.
    pub fn object_index(&self, name: &str) -> Option<ObjectIndex> {
        self.objects.binary_search_by(|o| o.name().cmp(name)).ok()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }
}

/// Indexed views of a left and a right occurrence.
pub struct ProblemDB<'o> {
    pub left: SideDB<'o>,
    pub right: SideDB<'o>,

    /// The signatures of the buckets.
    pub buckets: Vec<Signature>,

    /// A map from a bucket followed by argument indices to a right literal.
    right_lookup: HashMap<Vec<usize>, LiteralIndex>,
}

impl<'o> ProblemDB<'o> {
    pub fn new(left: &'o ActionOccurrence, right: &'o ActionOccurrence) -> Self {
        let mut bucket_map: BTreeMap<Signature, BucketIndex> = BTreeMap::default();
        for literal in left.literals().chain(right.literals()) {
            bucket_map.entry(literal.signature()).or_default();
        }
        for (index, (_, bucket)) in bucket_map.iter_mut().enumerate() {
            *bucket = index;
        }

        let left = SideDB::new(left, &bucket_map);
        let right = SideDB::new(right, &bucket_map);

        let mut right_lookup = HashMap::with_capacity(right.literal_count());
        for (index, literal) in right.indexed.iter().enumerate() {
            let mut key = Vec::with_capacity(literal.arguments.len() + 1);
            key.push(literal.bucket);
            key.extend_from_slice(&literal.arguments);
            right_lookup.insert(key, index);
        }

        ProblemDB {
            left,
            right,
            buckets: bucket_map.into_keys().collect(),
            right_lookup,
        }
    }

    /// The right literal of `bucket` with the given arguments, if one exists.
    ///
    /// `key` is used as a buffer.
    pub fn right_literal(
        &self,
        bucket: BucketIndex,
        arguments: impl Iterator<Item = ObjectIndex>,
        key: &mut Vec<usize>,
    ) -> Option<LiteralIndex> {
        key.clear();
        key.push(bucket);
        key.extend(arguments);
        self.right_lookup.get(key.as_slice()).copied()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// The count of literals, on both sides.
    pub fn literal_total(&self) -> usize {
        self.left.literal_count() + self.right.literal_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::Section;

    #[test]
    fn shared_buckets() {
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
                Literal::new(Section::Delete, "clear", ["q"]),
            ],
        )
        .unwrap();

        let db = ProblemDB::new(&left, &right);
        assert_eq!(db.bucket_count(), 3);
        assert_eq!(db.left.by_bucket.len(), 3);
        assert_eq!(db.left.object_index("x"), Some(1));
        assert_eq!(db.left.object_index("p"), Some(0));

        let at = db.left.indexed[0].clone();
        let mut key = Vec::default();
        // p ↦ q and x ↦ y preserve indices.
        let partner = db.right_literal(at.bucket, at.arguments.iter().copied(), &mut key);
        assert_eq!(partner, Some(0));
    }
}
