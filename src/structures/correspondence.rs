/*!
Partial injective maps between the objects of two occurrences.

A correspondence pairs objects of a *left* occurrence with objects of a *right* occurrence.
- The map is partial: an object may be left unpaired.
- The map is injective: no two left objects are paired with the same right object.

Injectivity is maintained on [insert](Correspondence::insert), and so any correspondence is valid as a map.
Whether the pairs of a correspondence respect types, etc. is for the [matcher](crate::procedures::matcher) to determine.
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A partial injective map from left object names to right object names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct Correspondence {
    forward: BTreeMap<String, String>,
    backward: BTreeMap<String, String>,
}

impl Correspondence {
    /// The correspondence pairing each given name with itself.
    pub fn identity<'n>(names: impl IntoIterator<Item = &'n str>) -> Self {
        let mut correspondence = Correspondence::default();
        for name in names {
            correspondence.insert(name, name);
        }
        correspondence
    }

    /// Pairs `left` with `right`.
    ///
    /// Returns false, and leaves the correspondence unchanged, if either object is already paired.
    pub fn insert(&mut self, left: impl Into<String>, right: impl Into<String>) -> bool {
        let (left, right) = (left.into(), right.into());
        if self.forward.contains_key(&left) || self.backward.contains_key(&right) {
            return false;
        }
        self.forward.insert(left.clone(), right.clone());
        self.backward.insert(right, left);
        true
    }

    /// The right object paired with `left`, if any.
    pub fn get(&self, left: &str) -> Option<&str> {
        self.forward.get(left).map(|r| r.as_str())
    }

    /// The left object paired with `right`, if any.
    pub fn get_inverse(&self, right: &str) -> Option<&str> {
        self.backward.get(right).map(|l| l.as_str())
    }

    /// The pairs of the correspondence, ordered by left object.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forward.iter().map(|(l, r)| (l.as_str(), r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The correspondence from right to left.
    pub fn inverse(&self) -> Self {
        Correspondence {
            forward: self.backward.clone(),
            backward: self.forward.clone(),
        }
    }
}

impl From<BTreeMap<String, String>> for Correspondence {
    fn from(pairs: BTreeMap<String, String>) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<Correspondence> for BTreeMap<String, String> {
    fn from(correspondence: Correspondence) -> Self {
        correspondence.forward
    }
}

impl<L: Into<String>, R: Into<String>> FromIterator<(L, R)> for Correspondence {
    /// Collects pairs into a correspondence, skipping any pair which would break injectivity.
    fn from_iter<I: IntoIterator<Item = (L, R)>>(iter: I) -> Self {
        let mut correspondence = Correspondence::default();
        for (left, right) in iter {
            correspondence.insert(left, right);
        }
        correspondence
    }
}

impl std::fmt::Display for Correspondence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pairs = self
            .iter()
            .map(|(l, r)| format!("{l}→{r}"))
            .collect::<Vec<_>>();
        write!(f, "{{{}}}", pairs.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injective() {
        let mut correspondence = Correspondence::default();
        assert!(correspondence.insert("x", "y"));
        assert!(!correspondence.insert("z", "y"));
        assert!(!correspondence.insert("x", "z"));
        assert_eq!(correspondence.len(), 1);
        assert_eq!(correspondence.get_inverse("y"), Some("x"));
    }

    #[test]
    fn inverse() {
        let correspondence = Correspondence::from_iter([("x", "x"), ("p1", "q1")]);
        let inverse = correspondence.inverse();
        assert_eq!(inverse.get("q1"), Some("p1"));
        assert_eq!(inverse.inverse(), correspondence);
    }
}
