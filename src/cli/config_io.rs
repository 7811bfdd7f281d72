use std::time::Duration;

use clap::Args;

use oaru::config::{Config, ConfigOption, Cost, NameMatching, ParameterPolicy};

/// Flags which map onto the options of a [Config].
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// The cost of pairing two objects which are not known to be the same entity
    #[arg(long, global = true)]
    pub generic_match: Option<Cost>,

    /// The cost of discarding a literal
    #[arg(long, global = true)]
    pub discard: Option<Cost>,

    /// The maximum cost of a merge
    #[arg(short, long, global = true)]
    pub ceiling: Option<Cost>,

    /// Pairing two parameters is free
    #[arg(long, global = true)]
    pub free_parameters: bool,

    /// Allow objects of different types to be paired
    #[arg(long, global = true)]
    pub untyped: bool,

    /// Time limit for each search, in seconds
    #[arg(short, long, global = true, value_parser = |seconds: &str| seconds.parse().map(Duration::from_secs))]
    pub time: Option<Duration>,

    /// Limit on the nodes visited by each search
    #[arg(long, global = true)]
    pub nodes: Option<usize>,

    /// Restrict alignment to literals relevant to the effects of each occurrence
    #[arg(short, long, global = true)]
    pub relevance: bool,

    /// The distance from an effect object a relevant object may be
    #[arg(long, global = true)]
    pub relevance_distance: Option<u32>,

    /// What to do with paired objects no literal refers to, one of: drop, existential
    #[arg(long, global = true)]
    pub parameter_policy: Option<String>,

    /// Which schemas are candidates for a merge, one of: exact, any
    #[arg(long, global = true)]
    pub name_matching: Option<String>,

    /// Explore candidate schemas on a single thread
    #[arg(long, global = true)]
    pub sequential: bool,
}

/// Sets `option` to `value`, or exits with a note of the permitted range.
fn set_or_exit<T: Clone + PartialOrd + std::fmt::Debug>(option: &mut ConfigOption<T>, value: T) {
    if !option.set(value.clone()) {
        let (min, max) = option.min_max();
        println!(
            "c {} must be within {:?} and {:?}, given {:?}",
            option.name, min, max, value
        );
        std::process::exit(1);
    }
}

impl ConfigArgs {
    pub fn config(&self) -> Config {
        let mut config = Config::default();

        if let Some(cost) = self.generic_match {
            set_or_exit(&mut config.generic_match, cost);
        }

        if let Some(cost) = self.discard {
            set_or_exit(&mut config.discard, cost);
        }

        if let Some(ceiling) = self.ceiling {
            set_or_exit(&mut config.cost_ceiling, ceiling);
        }

        if self.free_parameters {
            config.free_parameters.value = true;
        }

        if self.untyped {
            config.typed_matching.value = false;
        }

        if let Some(time) = self.time {
            set_or_exit(&mut config.time_limit, time);
        }

        if let Some(nodes) = self.nodes {
            set_or_exit(&mut config.node_limit, nodes);
        }

        if self.relevance {
            config.relevance.value = true;
        }

        if let Some(distance) = self.relevance_distance {
            set_or_exit(&mut config.relevance_distance, distance);
        }

        if let Some(policy) = &self.parameter_policy {
            match policy.parse::<ParameterPolicy>() {
                Ok(policy) => set_or_exit(&mut config.parameter_policy, policy),
                Err(()) => {
                    println!("c Unknown parameter policy: {policy}");
                    std::process::exit(1);
                }
            }
        }

        if let Some(matching) = &self.name_matching {
            match matching.parse::<NameMatching>() {
                Ok(matching) => set_or_exit(&mut config.name_matching, matching),
                Err(()) => {
                    println!("c Unknown name matching: {matching}");
                    std::process::exit(1);
                }
            }
        }

        if self.sequential {
            config.parallel.value = false;
        }

        if let Err(e) = config.validate() {
            println!("c Invalid configuration: {e:?}");
            std::process::exit(1);
        }

        config
    }
}
