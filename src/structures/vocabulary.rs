//! Declared predicates, with arities.
//!
//! An occurrence is always internally consistent, but a vocabulary allows an occurrence to be checked against declarations made elsewhere, e.g. a domain file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    structures::occurrence::ActionOccurrence,
    types::err::{self},
};

/// A map from predicate names to arities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    predicates: BTreeMap<String, usize>,
}

impl Vocabulary {
    /// Declares `predicate` with the given arity, returning the previous arity if the predicate was already declared.
    pub fn declare(&mut self, predicate: impl Into<String>, arity: usize) -> Option<usize> {
        self.predicates.insert(predicate.into(), arity)
    }

    pub fn arity(&self, predicate: &str) -> Option<usize> {
        self.predicates.get(predicate).copied()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Checks each literal of `occurrence` uses a declared predicate with the declared arity.
    pub fn check(&self, occurrence: &ActionOccurrence) -> Result<(), err::OccurrenceError> {
        for literal in occurrence.literals() {
            match self.arity(literal.predicate()) {
                None => {
                    return Err(err::OccurrenceError::UnknownPredicate(
                        literal.predicate().to_string(),
                    ))
                }
                Some(expected) if expected != literal.arity() => {
                    return Err(err::OccurrenceError::ArityMismatch {
                        predicate: literal.predicate().to_string(),
                        expected,
                        found: literal.arity(),
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

impl<P: Into<String>> FromIterator<(P, usize)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (P, usize)>>(iter: I) -> Self {
        Vocabulary {
            predicates: iter.into_iter().map(|(p, a)| (p.into(), a)).collect(),
        }
    }
}
