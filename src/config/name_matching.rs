use std::str::FromStr;

/// Which schemas of a library are candidates for merging with an observation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum NameMatching {
    /// Only schemas with the same name as the observation.
    #[default]
    Exact = 0,

    /// Any schema, regardless of name.
    ///
    /// Useful when observations are derived from transitions, and so carry no meaningful name.
    Any,
}

impl std::fmt::Display for NameMatching {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "Exact"),
            Self::Any => write!(f, "Any"),
        }
    }
}

impl NameMatching {
    /// The minimum NameMatching type.
    pub const MIN: NameMatching = NameMatching::Exact;

    /// The maximum NameMatching type.
    pub const MAX: NameMatching = NameMatching::Any;
}

impl FromStr for NameMatching {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Exact" | "exact" => Ok(Self::Exact),

            "Any" | "any" => Ok(Self::Any),

            _unknown_string => Err(()),
        }
    }
}
