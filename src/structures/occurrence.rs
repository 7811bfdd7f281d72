/*!
Action occurrences.

An action occurrence is a name, a collection of objects, and a set of literals over those objects.
Occurrences are immutable once built, and every occurrence is well-formed:
- Names (of the occurrence, objects, and predicates) are non-empty.
- Object names are unique.
- Every argument of every literal is a declared object.
- Each predicate is used with a single arity.

Malformed input is rejected with an [OccurrenceError](crate::types::err::OccurrenceError).

The objects of an occurrence are its parameters (in declared order) followed by its constants (in declared order).
The arity of an occurrence is its count of parameters.

Occurrences are most easily built with a [Builder](crate::builder::Builder).
*/

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::{
    structures::{
        literal::{Literal, Section, Signature},
        object::{Object, ObjectKind},
        state::State,
    },
    types::err::{self},
};

/// A single operator instance, with objects and precondition/add/delete literals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OccurrenceData", into = "OccurrenceData")]
pub struct ActionOccurrence {
    name: String,
    objects: Vec<Object>,
    literals: BTreeSet<Literal>,
}

/// The serialised form of an occurrence, checked on conversion.
#[derive(Serialize, Deserialize)]
struct OccurrenceData {
    name: String,
    #[serde(default)]
    objects: Vec<Object>,
    #[serde(default)]
    literals: Vec<Literal>,
}

impl TryFrom<OccurrenceData> for ActionOccurrence {
    type Error = err::OccurrenceError;

    fn try_from(data: OccurrenceData) -> Result<Self, Self::Error> {
        ActionOccurrence::new(data.name, data.objects, data.literals)
    }
}

impl From<ActionOccurrence> for OccurrenceData {
    fn from(occurrence: ActionOccurrence) -> Self {
        OccurrenceData {
            name: occurrence.name,
            objects: occurrence.objects,
            literals: occurrence.literals.into_iter().collect(),
        }
    }
}

impl ActionOccurrence {
    /// Builds an occurrence, checking the occurrence is well-formed.
    ///
    /// Duplicate literals are merged.
    pub fn new(
        name: impl Into<String>,
        objects: impl IntoIterator<Item = Object>,
        literals: impl IntoIterator<Item = Literal>,
    ) -> Result<Self, err::OccurrenceError> {
        let name = name.into();
        if name.is_empty() {
            return Err(err::OccurrenceError::EmptyName);
        }

        let (mut parameters, mut constants): (Vec<Object>, Vec<Object>) =
            objects.into_iter().partition(|o| o.is_parameter());

        let mut declared = BTreeSet::new();
        for object in parameters.iter().chain(constants.iter()) {
            if object.name().is_empty() || object.type_name().is_empty() {
                return Err(err::OccurrenceError::EmptyName);
            }
            if !declared.insert(object.name().to_string()) {
                return Err(err::OccurrenceError::DuplicateObject(
                    object.name().to_string(),
                ));
            }
        }

        let mut arities: HashMap<String, usize> = HashMap::default();
        let mut literal_set = BTreeSet::new();
        for literal in literals {
            if literal.predicate().is_empty() {
                return Err(err::OccurrenceError::EmptyName);
            }

            match arities.get(literal.predicate()) {
                Some(&expected) if expected != literal.arity() => {
                    return Err(err::OccurrenceError::ArityMismatch {
                        predicate: literal.predicate().to_string(),
                        expected,
                        found: literal.arity(),
                    });
                }
                Some(_) => {}
                None => {
                    arities.insert(literal.predicate().to_string(), literal.arity());
                }
            }

            if let Some(missing) = literal.arguments().iter().find(|a| !declared.contains(*a)) {
                return Err(err::OccurrenceError::UndeclaredObject {
                    predicate: literal.predicate().to_string(),
                    object: missing.clone(),
                });
            }

            literal_set.insert(literal);
        }

        parameters.append(&mut constants);

        Ok(ActionOccurrence {
            name,
            objects: parameters,
            literals: literal_set,
        })
    }

    /// Builds an occurrence from parts already known to be well-formed.
    ///
    /// # Soundness
    /// Each of the invariants listed in the [module](crate::structures::occurrence) documentation must hold of the parts, with parameters listed before constants.
    pub(crate) fn from_parts_unchecked(
        name: String,
        objects: Vec<Object>,
        literals: BTreeSet<Literal>,
    ) -> Self {
        debug_assert!(objects
            .windows(2)
            .all(|pair| !(pair[0].kind() == ObjectKind::Constant && pair[1].is_parameter())));
        ActionOccurrence {
            name,
            objects,
            literals,
        }
    }

    /// The occurrence which describes the transition from `before` to `after`.
    ///
    /// - The precondition is every atom of `before`.
    /// - The add list is every atom of `after` absent from `before`.
    /// - The delete list is every atom of `before` absent from `after`.
    ///
    /// Every object mentioned is a constant of the root type.
    pub fn from_transition(
        name: impl Into<String>,
        before: &State,
        after: &State,
    ) -> Result<Self, err::OccurrenceError> {
        let mut objects = BTreeSet::new();
        for atom in before.atoms().chain(after.atoms()) {
            for argument in atom.arguments() {
                objects.insert(argument.clone());
            }
        }

        let mut literals = Vec::default();
        for atom in before.atoms() {
            literals.push(atom.as_literal(Section::Precondition));
        }
        for atom in after.difference(before) {
            literals.push(atom.as_literal(Section::Add));
        }
        for atom in before.difference(after) {
            literals.push(atom.as_literal(Section::Delete));
        }

        ActionOccurrence::new(name, objects.into_iter().map(Object::constant), literals)
    }

    /// A copy of the occurrence with a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Result<Self, err::OccurrenceError> {
        let name = name.into();
        if name.is_empty() {
            return Err(err::OccurrenceError::EmptyName);
        }
        Ok(ActionOccurrence {
            name,
            objects: self.objects.clone(),
            literals: self.literals.clone(),
        })
    }

    /// A copy of the occurrence with only those literals for which `keep` holds.
    pub(crate) fn retain_literals<F>(&self, keep: F) -> (Self, Vec<Literal>)
    where
        F: Fn(&Literal) -> bool,
    {
        let (kept, set_aside): (BTreeSet<Literal>, BTreeSet<Literal>) =
            self.literals.iter().cloned().partition(|l| keep(l));
        let occurrence = ActionOccurrence {
            name: self.name.clone(),
            objects: self.objects.clone(),
            literals: kept,
        };
        (occurrence, set_aside.into_iter().collect())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every object, parameters first.
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|o| o.name() == name)
    }

    pub fn parameters(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter().filter(|o| o.is_parameter())
    }

    pub fn constants(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter().filter(|o| !o.is_parameter())
    }

    /// The count of parameters.
    pub fn arity(&self) -> usize {
        self.parameters().count()
    }

    /// The literals, in canonical order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    pub fn literals_in(&self, section: Section) -> impl Iterator<Item = &Literal> {
        self.literals.iter().filter(move |l| l.section() == section)
    }

    /// Names of objects which appear in some literal of the given sections.
    pub fn referenced_objects(&self, sections: &[Section]) -> BTreeSet<&str> {
        self.literals
            .iter()
            .filter(|l| sections.contains(&l.section()))
            .flat_map(|l| l.arguments().iter().map(|a| a.as_str()))
            .collect()
    }

    /// A count of literals of each signature.
    pub fn signature_counts(&self) -> BTreeMap<Signature, usize> {
        let mut counts = BTreeMap::default();
        for literal in &self.literals {
            *counts.entry(literal.signature()).or_insert(0) += 1;
        }
        counts
    }

    /// Each predicate used, with its arity.
    pub fn predicates(&self) -> BTreeMap<&str, usize> {
        self.literals
            .iter()
            .map(|l| (l.predicate(), l.arity()))
            .collect()
    }
}

impl std::fmt::Display for ActionOccurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self.parameters().map(|o| o.name()).collect::<Vec<_>>();
        writeln!(f, "{}({})", self.name, parameters.join(", "))?;
        for section in Section::ALL {
            let literals = self
                .literals_in(section)
                .map(|l| format!("{}({})", l.predicate(), l.arguments().join(", ")))
                .collect::<Vec<_>>();
            writeln!(f, "  {section}: {}", literals.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(section: Section, x: &str, p: &str) -> Literal {
        Literal::new(section, "at", [x, p])
    }

    #[test]
    fn parameters_precede_constants() {
        let occurrence = ActionOccurrence::new(
            "move",
            [
                Object::constant("p1"),
                Object::parameter("x"),
                Object::constant("p2"),
            ],
            [at(Section::Precondition, "x", "p1")],
        )
        .unwrap();

        let names = occurrence
            .objects()
            .iter()
            .map(|o| o.name())
            .collect::<Vec<_>>();
        assert_eq!(names, ["x", "p1", "p2"]);
        assert_eq!(occurrence.arity(), 1);
    }

    #[test]
    fn duplicate_literals_merge() {
        let occurrence = ActionOccurrence::new(
            "move",
            [Object::parameter("x"), Object::constant("p1")],
            [
                at(Section::Precondition, "x", "p1"),
                at(Section::Precondition, "x", "p1"),
            ],
        )
        .unwrap();
        assert_eq!(occurrence.literal_count(), 1);
    }

    #[test]
    fn malformed() {
        let undeclared = ActionOccurrence::new(
            "move",
            [Object::parameter("x")],
            [at(Section::Precondition, "x", "p1")],
        );
        assert_eq!(
            undeclared,
            Err(err::OccurrenceError::UndeclaredObject {
                predicate: "at".to_string(),
                object: "p1".to_string()
            })
        );

        let arity = ActionOccurrence::new(
            "move",
            [Object::parameter("x"), Object::constant("p1")],
            [
                at(Section::Precondition, "x", "p1"),
                Literal::new(Section::Add, "at", ["x"]),
            ],
        );
        assert!(matches!(
            arity,
            Err(err::OccurrenceError::ArityMismatch { expected: 2, found: 1, .. })
        ));

        let duplicate = ActionOccurrence::new(
            "move",
            [Object::parameter("x"), Object::constant("x")],
            Vec::<Literal>::new(),
        );
        assert_eq!(
            duplicate,
            Err(err::OccurrenceError::DuplicateObject("x".to_string()))
        );

        let unnamed = ActionOccurrence::new("", [Object::parameter("x")], Vec::<Literal>::new());
        assert_eq!(unnamed, Err(err::OccurrenceError::EmptyName));
    }

    #[test]
    fn transition() {
        let before = State::from_iter([("at", vec!["a", "p1"]), ("clear", vec!["p2"])]);
        let after = State::from_iter([("at", vec!["a", "p2"]), ("clear", vec!["p2"])]);
        let occurrence = ActionOccurrence::from_transition("t0", &before, &after).unwrap();

        assert_eq!(occurrence.literals_in(Section::Precondition).count(), 2);
        assert_eq!(occurrence.literals_in(Section::Add).count(), 1);
        assert_eq!(occurrence.literals_in(Section::Delete).count(), 1);
        assert_eq!(occurrence.arity(), 0);
        assert_eq!(occurrence.constants().count(), 3);
    }
}
