use std::str::FromStr;

/// What happens to objects of a generalised schema which no surviving literal refers to.
///
/// An object paired by a correspondence may lose every literal it appeared in to a discard.
/// Whether it remains a parameter of the generalised schema is a choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParameterPolicy {
    /// Keep only those parameters referenced by some surviving literal.
    #[default]
    Drop = 0,

    /// Keep every paired parameter, as an unconstrained (existential) parameter.
    Existential,
}

impl std::fmt::Display for ParameterPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Drop => write!(f, "Drop"),
            Self::Existential => write!(f, "Existential"),
        }
    }
}

impl ParameterPolicy {
    /// The minimum ParameterPolicy type.
    pub const MIN: ParameterPolicy = ParameterPolicy::Drop;

    /// The maximum ParameterPolicy type.
    pub const MAX: ParameterPolicy = ParameterPolicy::Existential;
}

impl FromStr for ParameterPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Drop" | "drop" => Ok(Self::Drop),

            "Existential" | "existential" => Ok(Self::Existential),

            _unknown_string => Err(()),
        }
    }
}
