/*!
Abstract elements of unification, and their representation.

- [Objects](object) and [literals](literal) over objects.
- [Occurrences](occurrence) of actions, built from objects and literals.
- [States](state), from which occurrences may be derived.
- [Correspondences](correspondence) between the objects of two occurrences, and [alignments](alignment) of their literals.
- The [result](unification) of unifying two occurrences.
*/

pub mod alignment;
pub mod correspondence;
pub mod literal;
pub mod object;
pub mod occurrence;
pub mod state;
pub mod unification;
pub mod vocabulary;
