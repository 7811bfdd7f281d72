//! Symbolic states, as sets of ground atoms.
//!
//! A pair of successive states describes a transition, from which an [occurrence](crate::structures::occurrence::ActionOccurrence::from_transition) may be derived.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::structures::literal::{Literal, Section};

/// A predicate applied to objects, without a section.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Atom {
    predicate: String,
    #[serde(default)]
    arguments: Vec<String>,
}

impl Atom {
    pub fn new<S: Into<String>>(
        predicate: impl Into<String>,
        arguments: impl IntoIterator<Item = S>,
    ) -> Self {
        Atom {
            predicate: predicate.into(),
            arguments: arguments.into_iter().map(|a| a.into()).collect(),
        }
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn as_literal(&self, section: Section) -> Literal {
        Literal::new(section, self.predicate.clone(), self.arguments.iter().cloned())
    }
}

/// A collection of atoms known to hold.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    atoms: BTreeSet<Atom>,
}

impl State {
    pub fn insert(&mut self, atom: Atom) -> bool {
        self.atoms.insert(atom)
    }

    pub fn contains(&self, atom: &Atom) -> bool {
        self.atoms.contains(atom)
    }

    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// The atoms of this state which are not atoms of `other`.
    pub fn difference<'s>(&'s self, other: &'s State) -> impl Iterator<Item = &'s Atom> {
        self.atoms.difference(&other.atoms)
    }
}

impl<P, S> FromIterator<(P, Vec<S>)> for State
where
    P: Into<String>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, Vec<S>)>>(iter: I) -> Self {
        State {
            atoms: iter
                .into_iter()
                .map(|(predicate, arguments)| Atom::new(predicate, arguments))
                .collect(),
        }
    }
}

impl FromIterator<Atom> for State {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        State {
            atoms: iter.into_iter().collect(),
        }
    }
}
