/*!
Tools for building action occurrences.

# Basic methods

An [ActionOccurrence] may be built directly with [ActionOccurrence::new], from objects and literals.
Though, a [Builder] is often more convenient:
- Objects are declared with [parameter](Builder::parameter) and [constant](Builder::constant), or their typed variants.
- Literals are added to a section with [precondition](Builder::precondition), [add](Builder::add), and [delete](Builder::delete), or [parsed](Builder::parsed) from text.
- The occurrence is checked and returned by [build](Builder::build), or by [build_with](Builder::build_with) to also check predicates against a [Vocabulary].

An occurrence may also be built from a pair of states, with [ActionOccurrence::from_transition].

# Examples

```rust
# use oaru::builder::Builder;
# use oaru::structures::literal::Section;
let occurrence = Builder::new("move")
    .parameter("x")
    .typed_constant("p1", "place")
    .typed_constant("p2", "place")
    .precondition("at", ["x", "p1"])
    .add("at", ["x", "p2"])
    .delete("at", ["x", "p1"])
    .build()
    .unwrap();

assert_eq!(occurrence.arity(), 1);
assert_eq!(occurrence.literals_in(Section::Add).count(), 1);
```

Malformed occurrences are rejected.

```rust
# use oaru::builder::Builder;
# use oaru::types::err::OccurrenceError;
let undeclared = Builder::new("move")
    .parameter("x")
    .precondition("at", ["x", "p1"])
    .build();

assert!(matches!(undeclared, Err(OccurrenceError::UndeclaredObject { .. })));
```
*/

mod parse;
pub use parse::{parse_atom, parse_literal};

use crate::{
    structures::{
        literal::{Literal, Section},
        object::Object,
        occurrence::ActionOccurrence,
        vocabulary::Vocabulary,
    },
    types::err::{self},
};

/// A builder of an occurrence.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    name: String,
    objects: Vec<Object>,
    literals: Vec<Literal>,
}

impl Builder {
    pub fn new(name: impl Into<String>) -> Self {
        Builder {
            name: name.into(),
            objects: Vec::default(),
            literals: Vec::default(),
        }
    }

    pub fn parameter(self, name: impl Into<String>) -> Self {
        self.object(Object::parameter(name))
    }

    pub fn typed_parameter(self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.object(Object::parameter(name).with_type(type_name))
    }

    pub fn constant(self, name: impl Into<String>) -> Self {
        self.object(Object::constant(name))
    }

    pub fn typed_constant(self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.object(Object::constant(name).with_type(type_name))
    }

    /// Declares an object, e.g. an object with an identity.
    pub fn object(mut self, object: Object) -> Self {
        self.objects.push(object);
        self
    }

    pub fn precondition<S: Into<String>>(
        self,
        predicate: impl Into<String>,
        arguments: impl IntoIterator<Item = S>,
    ) -> Self {
        self.literal(Literal::new(Section::Precondition, predicate, arguments))
    }

    pub fn add<S: Into<String>>(
        self,
        predicate: impl Into<String>,
        arguments: impl IntoIterator<Item = S>,
    ) -> Self {
        self.literal(Literal::new(Section::Add, predicate, arguments))
    }

    pub fn delete<S: Into<String>>(
        self,
        predicate: impl Into<String>,
        arguments: impl IntoIterator<Item = S>,
    ) -> Self {
        self.literal(Literal::new(Section::Delete, predicate, arguments))
    }

    pub fn literal(mut self, literal: Literal) -> Self {
        self.literals.push(literal);
        self
    }

    /// Adds a literal read from text, as [parse_literal].
    pub fn parsed(self, text: &str) -> Result<Self, err::ParseError> {
        Ok(self.literal(parse_literal(text)?))
    }

    /// Checks and returns the occurrence.
    pub fn build(self) -> Result<ActionOccurrence, err::OccurrenceError> {
        ActionOccurrence::new(self.name, self.objects, self.literals)
    }

    /// Checks and returns the occurrence, with the additional check that each predicate is declared by `vocabulary` with the arity used.
    pub fn build_with(
        self,
        vocabulary: &Vocabulary,
    ) -> Result<ActionOccurrence, err::OccurrenceError> {
        let occurrence = self.build()?;
        vocabulary.check(&occurrence)?;
        Ok(occurrence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsed_literals() {
        let occurrence = Builder::new("move")
            .parameter("x")
            .constant("p1")
            .parsed("pre:at(x, p1)")
            .and_then(|b| b.parsed("del:at(x, p1)"))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(occurrence.literal_count(), 2);
    }

    #[test]
    fn vocabulary() {
        let vocabulary = Vocabulary::from_iter([("at", 2)]);

        let good = Builder::new("move")
            .parameter("x")
            .constant("p1")
            .precondition("at", ["x", "p1"])
            .build_with(&vocabulary);
        assert!(good.is_ok());

        let unknown = Builder::new("move")
            .parameter("x")
            .add("held", ["x"])
            .build_with(&vocabulary);
        assert_eq!(
            unknown,
            Err(err::OccurrenceError::UnknownPredicate("held".to_string()))
        );

        let arity = Builder::new("move")
            .parameter("x")
            .add("at", ["x"])
            .build_with(&vocabulary);
        assert!(matches!(
            arity,
            Err(err::OccurrenceError::ArityMismatch { expected: 2, found: 1, .. })
        ));
    }
}
