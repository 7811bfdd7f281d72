//! A library as a STRIPS domain, written in PDDL.
//!
//! Each schema is written as an action.
//! Where schemas share a name, a suffix is added to each schema after the first, e.g. `move`, `move-1`, `move-2`.
//! Parameters are prefixed with `?`, and constants are declared as constants of the domain.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use crate::{
    library::ActionLibrary,
    structures::{
        literal::{Literal, Section},
        object::ROOT_TYPE,
        occurrence::ActionOccurrence,
    },
};

/// The name of an object as written, e.g. `?x` for the parameter `x`.
fn object_name(occurrence: &ActionOccurrence, name: &str) -> String {
    match occurrence.object(name) {
        Some(object) if object.is_parameter() => format!("?{}", name.trim_start_matches('?')),
        _ => name.to_string(),
    }
}

fn atom(occurrence: &ActionOccurrence, literal: &Literal) -> String {
    literal
        .replace(|argument| object_name(occurrence, argument))
        .as_pddl_atom()
}

fn conjunction(atoms: &[String]) -> String {
    match atoms {
        [] => "(and)".to_string(),
        [atom] => atom.clone(),
        _ => format!("(and {})", atoms.join(" ")),
    }
}

/// An occurrence as a PDDL action with the given name.
pub fn action(name: &str, occurrence: &ActionOccurrence) -> String {
    let parameters = occurrence
        .parameters()
        .map(|p| format!("{} - {}", object_name(occurrence, p.name()), p.type_name()))
        .collect::<Vec<_>>();

    let precondition = occurrence
        .literals_in(Section::Precondition)
        .map(|l| atom(occurrence, l))
        .collect::<Vec<_>>();

    let mut effect = occurrence
        .literals_in(Section::Add)
        .map(|l| atom(occurrence, l))
        .collect::<Vec<_>>();
    effect.extend(
        occurrence
            .literals_in(Section::Delete)
            .map(|l| format!("(not {})", atom(occurrence, l))),
    );

    let mut pddl = String::default();
    let _ = writeln!(pddl, "  (:action {name}");
    let _ = writeln!(pddl, "    :parameters ({})", parameters.join(" "));
    let _ = writeln!(pddl, "    :precondition {}", conjunction(&precondition));
    let _ = writeln!(pddl, "    :effect {})", conjunction(&effect));
    pddl
}

impl ActionLibrary {
    /// The library as a PDDL domain with the given name.
    pub fn dump_pddl(&self, domain: &str) -> String {
        let mut types = BTreeSet::default();
        let mut constants: BTreeMap<&str, &str> = BTreeMap::default();
        let mut predicates: BTreeMap<&str, usize> = BTreeMap::default();

        for (_, schema) in self.iter() {
            let occurrence = schema.occurrence();
            for object in occurrence.objects() {
                if object.type_name() != ROOT_TYPE {
                    types.insert(object.type_name());
                }
                if !object.is_parameter() {
                    constants.entry(object.name()).or_insert(object.type_name());
                }
            }
            for (predicate, arity) in occurrence.predicates() {
                predicates.entry(predicate).or_insert(arity);
            }
        }

        let mut pddl = String::default();
        let _ = writeln!(pddl, "(define (domain {domain})");
        let _ = writeln!(pddl, "  (:requirements :strips :typing)");

        if !types.is_empty() {
            let types = types.into_iter().collect::<Vec<_>>();
            let _ = writeln!(pddl, "  (:types {} - {ROOT_TYPE})", types.join(" "));
        }

        if !constants.is_empty() {
            let constants = constants
                .iter()
                .map(|(name, type_name)| format!("{name} - {type_name}"))
                .collect::<Vec<_>>();
            let _ = writeln!(pddl, "  (:constants {})", constants.join(" "));
        }

        let predicates = predicates
            .iter()
            .map(|(predicate, arity)| {
                let mut generic = format!("({predicate}");
                for index in 0..*arity {
                    let _ = write!(generic, " ?x{index}");
                }
                generic.push(')');
                generic
            })
            .collect::<Vec<_>>();
        let _ = writeln!(pddl, "  (:predicates {})", predicates.join(" "));

        let mut names: BTreeMap<&str, usize> = BTreeMap::default();
        for (_, schema) in self.iter() {
            let occurrence = schema.occurrence();
            let count = names.entry(occurrence.name()).or_insert(0);
            let name = match *count {
                0 => occurrence.name().to_string(),
                n => format!("{}-{n}", occurrence.name()),
            };
            *count += 1;

            pddl.push_str(&action(&name, occurrence));
        }

        pddl.push(')');
        pddl.push('\n');
        pddl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::object::Object;

    #[test]
    fn action_form() {
        let occurrence = ActionOccurrence::new(
            "move",
            [Object::parameter("x"), Object::parameter("?v0"), Object::constant("home")],
            [
                Literal::new(Section::Precondition, "at", ["x", "?v0"]),
                Literal::new(Section::Add, "at", ["x", "home"]),
                Literal::new(Section::Delete, "at", ["x", "?v0"]),
            ],
        )
        .unwrap();

        let pddl = action("move", &occurrence);
        assert!(pddl.contains(":parameters (?x - object ?v0 - object)"));
        assert!(pddl.contains(":precondition (at ?x ?v0)"));
        assert!(pddl.contains(":effect (and (at ?x home) (not (at ?x ?v0))))"));
    }
}
