use oaru::{
    builder::Builder,
    config::{Config, Cost},
    context::Unifier,
    procedures::{broadphase, relevance::RelevanceFilter, unify::unify},
    reports::Unify,
    structures::{
        alignment::Disposition,
        literal::{Literal, Section},
        object::Object,
        occurrence::ActionOccurrence,
    },
};

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

mod broadphase_filter {
    use super::*;

    fn random_occurrence(rng: &mut StdRng) -> ActionOccurrence {
        let names = ["a", "b", "c", "d"];
        let count = rng.gen_range(1..=names.len());
        let objects = names[..count]
            .iter()
            .map(|name| Object::constant(*name))
            .collect::<Vec<_>>();

        let mut literals = Vec::default();
        for _ in 0..rng.gen_range(0..=8) {
            let section = *Section::ALL.choose(rng).unwrap();
            let literal = match rng.gen_bool(0.5) {
                true => Literal::new(section, "p", [*names[..count].choose(rng).unwrap()]),
                false => Literal::new(
                    section,
                    "q",
                    [
                        *names[..count].choose(rng).unwrap(),
                        *names[..count].choose(rng).unwrap(),
                    ],
                ),
            };
            literals.push(literal);
        }

        ActionOccurrence::new("act", objects, literals).unwrap()
    }

    #[test]
    fn no_false_negatives() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(23);

        for _ in 0..200 {
            let a = random_occurrence(&mut rng);
            let b = random_occurrence(&mut rng);
            let bound = 100 * (a.literal_count() + b.literal_count()) as Cost;

            let Some(cost) = unify(&a, &b, bound).cost() else {
                panic!("unification within the discard bound is always possible");
            };

            assert!(broadphase::lower_bound(&a, &b, &config) <= cost);
            assert!(broadphase::passes(&a, &b, cost, &config));
        }
    }

    #[test]
    fn disjoint_signatures() {
        let config = Config::default();

        let a = Builder::new("act")
            .constant("a")
            .precondition("p", ["a"])
            .add("p", ["a"])
            .build()
            .unwrap();
        let b = Builder::new("act")
            .constant("a")
            .precondition("q", ["a", "a"])
            .build()
            .unwrap();

        assert_eq!(broadphase::lower_bound(&a, &b, &config), 300);
        assert!(!broadphase::passes(&a, &b, 299, &config));
        assert!(broadphase::passes(&a, &b, 300, &config));
        assert_eq!(unify(&a, &b, 1000).cost(), Some(300));
    }
}

mod relevance_filter {
    use super::*;

    fn fetch(robot: &str, place: &str, other: &str, elsewhere: &str) -> ActionOccurrence {
        Builder::new("fetch")
            .constant(robot)
            .constant(place)
            .constant(other)
            .constant(elsewhere)
            .precondition("at", [robot, place])
            .precondition("at", [other, elsewhere])
            .add("holding", [robot])
            .delete("at", [robot, place])
            .build()
            .unwrap()
    }

    #[test]
    fn ignored_literals() {
        let a = Builder::new("pick")
            .constant("a")
            .constant("r")
            .constant("room")
            .precondition("clear", ["a"])
            .precondition("at", ["r", "room"])
            .add("held", ["a"])
            .delete("clear", ["a"])
            .build()
            .unwrap();
        let b = Builder::new("pick")
            .constant("b")
            .constant("s")
            .constant("hall")
            .precondition("clear", ["b"])
            .precondition("at", ["s", "hall"])
            .add("held", ["b"])
            .delete("clear", ["b"])
            .build()
            .unwrap();

        assert_eq!(unify(&a, &b, 1000).cost(), Some(30));

        let mut config = Config::default();
        config.relevance.value = true;
        let unifier = Unifier::from_config(config);

        let Unify::Unified(unification) = unifier.unify(&a, &b, 1000) else {
            panic!("unification within 1000 is possible");
        };
        assert_eq!(unification.cost(), 10);
        assert_eq!(unification.alignment.ignored_count(), 2);
        assert_eq!(unification.alignment.discard_count(), 0);
        assert_eq!(
            unification
                .alignment
                .disposition_left(&Literal::new(Section::Precondition, "at", ["r", "room"])),
            Some(&Disposition::Ignored)
        );
        assert!(unification.schema.literals().all(|l| l.predicate() != "at"));
    }

    #[test]
    fn effect_predicates_are_kept() {
        let filter = RelevanceFilter::effects(1);
        let filtered = filter.apply(&fetch("r", "p", "o", "q"));

        // The predicate of a deletion is relevant, so every literal is kept.
        assert!(filtered.set_aside.is_empty());
        assert_eq!(filtered.kept.literal_count(), 4);
    }

    #[test]
    fn given_predicates() {
        let occurrence = fetch("r", "p", "o", "q");

        let filter = RelevanceFilter::with_predicates(["holding"], 1);
        let filtered = filter.apply(&occurrence);

        assert_eq!(filtered.set_aside.len(), 1);
        assert_eq!(
            filtered.set_aside[0],
            Literal::new(Section::Precondition, "at", ["o", "q"])
        );
        assert_eq!(filtered.restore(), occurrence);

        let distant = RelevanceFilter::with_predicates(["holding"], 0);
        assert_eq!(distant.apply(&occurrence).kept.literal_count(), 1);
    }
}
