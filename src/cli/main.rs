#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{fs::File, io::BufWriter, path::PathBuf};

use clap::{Parser, Subcommand};

use oaru::{context::Unifier, reports};

mod config_io;
mod misc;

use config_io::ConfigArgs;

/// Learns generalised action schemas from observed action occurrences
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Unify two occurrences, each a JSON file
    Unify { left: PathBuf, right: PathBuf },

    /// Observe a JSON array of occurrences, in order
    Learn {
        observations: PathBuf,

        /// A stored library to resume, if the file exists
        #[arg(short, long)]
        library: Option<PathBuf>,

        /// Where to store the library on completion
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Where to write the library as a PDDL domain
        #[arg(short, long)]
        pddl: Option<PathBuf>,

        /// The name of the PDDL domain
        #[arg(long, default_value = "learnt")]
        domain: String,
    },
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();
    let config = args.config.config();

    match args.command {
        Command::Unify { left, right } => {
            let left_occurrence =
                misc::load_occurrence(&left).unwrap_or_else(|e| misc::exit_with(&left, e));
            let right_occurrence =
                misc::load_occurrence(&right).unwrap_or_else(|e| misc::exit_with(&right, e));

            let ceiling = config.cost_ceiling.value;
            let unifier = Unifier::from_config(config);
            let report = unifier.unify(&left_occurrence, &right_occurrence, ceiling);

            match &report {
                reports::Unify::Unified(unification) => {
                    println!("c Correspondence: {}", unification.correspondence);
                    println!(
                        "c Matching {}, discards {}",
                        unification.match_cost, unification.discard_cost
                    );
                    println!(
                        "c Nodes {}, leaves {}, in {:.2?}",
                        unification.counters.nodes,
                        unification.counters.leaves,
                        unification.counters.time
                    );
                    print!("{}", unification.schema);
                    println!("s {report}");
                    std::process::exit(0)
                }
                _ => {
                    println!("s {report}");
                    std::process::exit(2)
                }
            }
        }

        Command::Learn {
            observations,
            library,
            save,
            pddl,
            domain,
        } => {
            let sequence = misc::load_observations(&observations)
                .unwrap_or_else(|e| misc::exit_with(&observations, e));

            let unifier = Unifier::from_config(config);
            let mut the_library = match misc::load_library(library.as_deref(), unifier) {
                Ok(the_library) => the_library,
                Err(e) => match library {
                    Some(path) => misc::exit_with(&path, e),
                    None => std::process::exit(1),
                },
            };

            for observation in sequence {
                let index = the_library.observed();
                let name = observation.name().to_string();
                let report = the_library.observe(observation);
                println!("o {index} {name}: {report}");
            }

            if let Some(path) = save {
                let stored = File::create(&path)
                    .map_err(Into::into)
                    .and_then(|file| the_library.save(BufWriter::new(file)));
                if let Err(e) = stored {
                    misc::exit_with(&path, e);
                }
            }

            if let Some(path) = pddl {
                if let Err(e) = std::fs::write(&path, the_library.dump_pddl(&domain)) {
                    misc::exit_with(&path, e.into());
                }
            }

            println!(
                "s {} schemas from {} observations",
                the_library.len(),
                the_library.observed()
            );
        }
    }
}
