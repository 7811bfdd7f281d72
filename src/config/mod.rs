/*!
Configuration of unification and of an action library.

All configuration is contained within a single [Config].
Each option is a [ConfigOption], which pairs the value of the option with the range of values permitted.

# Costs

The cost model is a pair of weights:
- [generic_match](Config::generic_match), the cost of pairing two objects which are not known to be the same entity.
- [discard](Config::discard), the cost of discarding a literal.

A discard must cost strictly more than a generic match, and [Config::validate] checks this.
With the default weights (10 and 100) a single discard outweighs nine generic matches, and so a discard is taken only when no pairing avoids it.

# Example

```rust
# use oaru::config::Config;
let mut config = Config::default();
assert!(config.cost_ceiling.set(30));
assert!(config.validate().is_ok());

config.discard.value = config.generic_match.value;
assert!(config.validate().is_err());
```
*/

use std::time::Duration;

mod config_option;
pub use config_option::ConfigOption;

mod name_matching;
pub use name_matching::NameMatching;

mod parameter_policy;
pub use parameter_policy::ParameterPolicy;

use crate::types::err::{self};

/// The representation of a cost.
pub type Cost = u64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The cost of pairing two objects which are not known to be the same entity.
    pub generic_match: ConfigOption<Cost>,

    /// The cost of discarding a literal.
    pub discard: ConfigOption<Cost>,

    /// Pairing two (lifted) parameters is free.
    pub free_parameters: ConfigOption<bool>,

    /// Only pair objects of the same type.
    pub typed_matching: ConfigOption<bool>,

    /// The maximum cost of a unification accepted by a library when merging an observation.
    pub cost_ceiling: ConfigOption<Cost>,

    /// The time limit for a search, where a limit of zero is no limit.
    pub time_limit: ConfigOption<Duration>,

    /// The limit on nodes visited during a search, where a limit of zero is no limit.
    pub node_limit: ConfigOption<usize>,

    /// Restrict literals to those relevant to the effects of an occurrence before alignment.
    pub relevance: ConfigOption<bool>,

    /// The distance from an effect object an object may be while remaining relevant.
    pub relevance_distance: ConfigOption<u32>,

    /// What to do with paired objects no surviving literal refers to.
    pub parameter_policy: ConfigOption<ParameterPolicy>,

    /// Which schemas are candidates for merging with an observation.
    pub name_matching: ConfigOption<NameMatching>,

    /// Unify an observation against candidate schemas concurrently.
    pub parallel: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            generic_match: ConfigOption {
                name: "generic_match",
                min: 1,
                max: Cost::MAX / 4,
                value: 10,
            },

            discard: ConfigOption {
                name: "discard",
                min: 2,
                max: Cost::MAX / 4,
                value: 100,
            },

            free_parameters: ConfigOption {
                name: "free_parameters",
                min: false,
                max: true,
                value: false,
            },

            typed_matching: ConfigOption {
                name: "typed_matching",
                min: false,
                max: true,
                value: true,
            },

            cost_ceiling: ConfigOption {
                name: "cost_ceiling",
                min: 0,
                max: Cost::MAX / 4,
                value: 100,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },

            node_limit: ConfigOption {
                name: "node_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },

            relevance: ConfigOption {
                name: "relevance",
                min: false,
                max: true,
                value: false,
            },

            relevance_distance: ConfigOption {
                name: "relevance_distance",
                min: 0,
                max: u32::MAX,
                value: 1,
            },

            parameter_policy: ConfigOption {
                name: "parameter_policy",
                min: ParameterPolicy::MIN,
                max: ParameterPolicy::MAX,
                value: ParameterPolicy::Drop,
            },

            name_matching: ConfigOption {
                name: "name_matching",
                min: NameMatching::MIN,
                max: NameMatching::MAX,
                value: NameMatching::Exact,
            },

            parallel: ConfigOption {
                name: "parallel",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}

impl Config {
    /// Checks the configuration is coherent.
    ///
    /// Specifically, that each value is within range and a discard costs more than a generic match.
    pub fn validate(&self) -> Result<(), err::ConfigError> {
        fn in_range<T: PartialOrd>(option: &ConfigOption<T>) -> Result<(), err::ConfigError> {
            match option.min <= option.value && option.value <= option.max {
                true => Ok(()),
                false => Err(err::ConfigError::OutOfRange(option.name)),
            }
        }

        in_range(&self.generic_match)?;
        in_range(&self.discard)?;
        in_range(&self.cost_ceiling)?;

        if self.discard.value <= self.generic_match.value {
            return Err(err::ConfigError::CostOrder);
        }
        Ok(())
    }

    /// The time limit of a search, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        match self.time_limit.value.is_zero() {
            true => None,
            false => Some(self.time_limit.value),
        }
    }

    /// The node limit of a search, if any.
    pub fn node_limit(&self) -> Option<usize> {
        match self.node_limit.value {
            0 => None,
            limit => Some(limit),
        }
    }
}
