/*!
Literals, and the sections of an action they belong to.

A literal is a predicate applied to a sequence of objects (referred to by name), labelled with the section of the action it belongs to.
The arity of a literal is not bounded.

The *signature* of a literal is its section, predicate, and arity.
Two literals may only be paired if they share a signature, and so signatures partition the literals of an occurrence into buckets.
*/

use serde::{Deserialize, Serialize};

/// The sections of an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// The precondition of an action.
    #[serde(alias = "pre")]
    Precondition,

    /// The add list of an action.
    Add,

    /// The delete list of an action.
    #[serde(alias = "del")]
    Delete,
}

impl Section {
    /// Each section, in canonical order.
    pub const ALL: [Section; 3] = [Section::Precondition, Section::Add, Section::Delete];

    pub fn is_effect(&self) -> bool {
        matches!(self, Section::Add | Section::Delete)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Precondition => write!(f, "pre"),
            Self::Add => write!(f, "add"),
            Self::Delete => write!(f, "del"),
        }
    }
}

/// A literal of some section.
///
/// Ordering is by section, then predicate, then arguments.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Literal {
    section: Section,
    predicate: String,
    #[serde(default)]
    arguments: Vec<String>,
}

/// The signature of a literal.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature {
    pub section: Section,
    pub predicate: String,
    pub arity: usize,
}

impl Literal {
    pub fn new<S: Into<String>>(
        section: Section,
        predicate: impl Into<String>,
        arguments: impl IntoIterator<Item = S>,
    ) -> Self {
        Literal {
            section,
            predicate: predicate.into(),
            arguments: arguments.into_iter().map(|a| a.into()).collect(),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    pub fn signature(&self) -> Signature {
        Signature {
            section: self.section,
            predicate: self.predicate.clone(),
            arity: self.arguments.len(),
        }
    }

    /// A copy of the literal with each argument replaced by the result of `sigma`.
    pub fn replace<F>(&self, sigma: F) -> Literal
    where
        F: Fn(&str) -> String,
    {
        Literal {
            section: self.section,
            predicate: self.predicate.clone(),
            arguments: self.arguments.iter().map(|a| sigma(a)).collect(),
        }
    }

    /// The literal as a PDDL atom, e.g. `(at ?x p1)`.
    pub fn as_pddl_atom(&self) -> String {
        let mut atom = format!("({}", self.predicate);
        for argument in &self.arguments {
            atom.push(' ');
            atom.push_str(argument);
        }
        atom.push(')');
        atom
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}({})", self.section, self.predicate, self.arguments.join(", "))
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}/{}", self.section, self.predicate, self.arity)
    }
}
