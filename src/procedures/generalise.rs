/*!
Generalisation: the occurrence which explains both sides of a unification.

Each paired object becomes one object of the generalised occurrence:
- A left parameter is kept, with the same name.
- Otherwise, a right parameter is kept, with the name of the right parameter if the name is free.
- Otherwise, two constants known to be the same entity are kept as the left constant.
- Otherwise, the pair is lifted to a fresh parameter `?v<n>`, with `n` the least number such that the name is unused by either occurrence.

The type of the object is the type shared by the pair, if any, and the [root type](crate::structures::object::ROOT_TYPE) otherwise.

Literals of the generalised occurrence are the taken left literals, rewritten.
Parameters are ordered as the left parameters, followed by any lifted constants in order of left name.

Objects which appear in some taken literal are always kept.
Paired objects which appear in no literal of either side are kept too, unless the pair is of two constants lifted to a fresh parameter.
Otherwise, the object appears only in discarded (or ignored) literals, and whether the object is kept depends on the [ParameterPolicy]:
- [Drop](ParameterPolicy::Drop) drops the object.
- [Existential](ParameterPolicy::Existential) keeps the object if the object is a parameter.

So, generalising an occurrence with itself returns the occurrence.
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    config::{Config, ParameterPolicy},
    misc::log::targets::{self},
    procedures::matcher::{self, Compatibility},
    structures::{
        alignment::Alignment,
        correspondence::Correspondence,
        literal::{Literal, Section},
        object::{Object, ROOT_TYPE},
        occurrence::ActionOccurrence,
    },
};

/// A generalised occurrence, together with the renaming of each side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generalised {
    pub schema: ActionOccurrence,

    /// The object of the schema each paired left object became.
    pub sigma_left: BTreeMap<String, String>,

    /// The object of the schema each paired right object became.
    pub sigma_right: BTreeMap<String, String>,
}

/// Generalises `left` and `right` with the given correspondence and alignment.
pub fn generalise(
    left: &ActionOccurrence,
    right: &ActionOccurrence,
    correspondence: &Correspondence,
    alignment: &Alignment,
    config: &Config,
    compatibility: &(impl Compatibility + ?Sized),
) -> Generalised {
    let mut in_use: BTreeSet<String> = left
        .objects()
        .iter()
        .chain(right.objects())
        .map(|o| o.name().to_string())
        .collect();
    let left_names: BTreeSet<&str> = left.objects().iter().map(|o| o.name()).collect();
    let left_mentioned = left.referenced_objects(&Section::ALL);
    let right_mentioned = right.referenced_objects(&Section::ALL);
    let mut assigned: BTreeSet<String> = BTreeSet::default();

    let mut fresh_index = 0;
    let mut fresh = |in_use: &BTreeSet<String>| loop {
        let name = format!("?v{fresh_index}");
        fresh_index += 1;
        if !in_use.contains(&name) {
            break name;
        }
    };

    let mut sigma_left = BTreeMap::default();
    let mut sigma_right = BTreeMap::default();
    // Each paired left object, with the unified object and whether the pair may be kept without mention.
    let mut unified: BTreeMap<&str, (Object, bool)> = BTreeMap::default();

    for (l, r) in correspondence.iter() {
        let (Some(l_object), Some(r_object)) = (left.object(l), right.object(r)) else {
            continue;
        };

        let type_name = match l_object.type_name() == r_object.type_name() {
            true => l_object.type_name(),
            false => ROOT_TYPE,
        };

        let both_constants = !l_object.is_parameter() && !r_object.is_parameter();
        let object = if l_object.is_parameter() {
            l_object.clone().with_type(type_name)
        } else if r_object.is_parameter() {
            let name = match r == l || !(left_names.contains(r) || assigned.contains(r)) {
                true => r.to_string(),
                false => fresh(&in_use),
            };
            r_object.clone().with_name(name).with_type(type_name)
        } else if matcher::pair_cost(l_object, r_object, config, compatibility) == Some(0) {
            l_object.clone().with_type(type_name)
        } else {
            Object::parameter(fresh(&in_use)).with_type(type_name)
        };

        log::trace!(target: targets::GENERALISE, "{l} and {r} to {}", object.name());

        in_use.insert(object.name().to_string());
        assigned.insert(object.name().to_string());
        sigma_left.insert(l.to_string(), object.name().to_string());
        sigma_right.insert(r.to_string(), object.name().to_string());
        let unmentioned = !left_mentioned.contains(l) && !right_mentioned.contains(r);
        let keep_unmentioned = unmentioned && !(both_constants && object.is_parameter());
        unified.insert(l, (object, keep_unmentioned));
    }

    let literals: BTreeSet<Literal> = alignment
        .taken()
        .map(|(literal, _)| {
            literal.replace(|argument| match sigma_left.get(argument) {
                Some(name) => name.clone(),
                None => argument.to_string(),
            })
        })
        .collect();

    let referenced: BTreeSet<&str> = literals
        .iter()
        .flat_map(|l| l.arguments().iter().map(|a| a.as_str()))
        .collect();

    let keep = |object: &Object, keep_unmentioned: bool| match config.parameter_policy.value {
        _ if referenced.contains(object.name()) => true,
        _ if keep_unmentioned => true,
        ParameterPolicy::Existential => object.is_parameter(),
        ParameterPolicy::Drop => false,
    };

    let mut parameters = Vec::default();
    let mut lifted = Vec::default();
    let mut constants = Vec::default();
    for l_object in left.objects() {
        let Some((object, keep_unmentioned)) = unified.get(l_object.name()) else {
            continue;
        };
        if !keep(object, *keep_unmentioned) {
            continue;
        }
        match (l_object.is_parameter(), object.is_parameter()) {
            (true, _) => parameters.push(object.clone()),
            (false, true) => lifted.push((l_object.name(), object.clone())),
            (false, false) => constants.push(object.clone()),
        }
    }
    lifted.sort_by(|a, b| a.0.cmp(b.0));
    parameters.extend(lifted.into_iter().map(|(_, object)| object));
    parameters.extend(constants);

    let schema =
        ActionOccurrence::from_parts_unchecked(left.name().to_string(), parameters, literals);

    Generalised {
        schema,
        sigma_left,
        sigma_right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        procedures::{align::align, matcher::SameIdentity},
    };

    fn left() -> ActionOccurrence {
        ActionOccurrence::new(
            "move",
            [
                Object::parameter("x"),
                Object::constant("p1"),
                Object::constant("c"),
            ],
            [
                Literal::new(Section::Precondition, "at", ["x", "p1"]),
                Literal::new(Section::Precondition, "lit", ["c"]),
            ],
        )
        .unwrap()
    }

    fn right() -> ActionOccurrence {
        ActionOccurrence::new(
            "move",
            [
                Object::parameter("y"),
                Object::constant("q1"),
                Object::constant("c"),
                Object::parameter("z"),
            ],
            [
                Literal::new(Section::Precondition, "at", ["y", "q1"]),
                Literal::new(Section::Precondition, "lit", ["c"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn lift_keep_and_rename() {
        let (left, right) = (left(), right());
        let correspondence = Correspondence::from_iter([("x", "y"), ("p1", "q1"), ("c", "c")]);
        let alignment = align(&left, &right, &correspondence);

        let generalised = generalise(
            &left,
            &right,
            &correspondence,
            &alignment,
            &Config::default(),
            &SameIdentity,
        );

        assert_eq!(generalised.sigma_left["x"], "x");
        assert_eq!(generalised.sigma_left["p1"], "?v0");
        assert_eq!(generalised.sigma_right["q1"], "?v0");
        assert_eq!(generalised.sigma_left["c"], "c");

        let names = generalised
            .schema
            .objects()
            .iter()
            .map(|o| o.name())
            .collect::<Vec<_>>();
        assert_eq!(names, ["x", "?v0", "c"]);
        assert!(generalised
            .schema
            .contains(&Literal::new(Section::Precondition, "at", ["x", "?v0"])));
    }

    #[test]
    fn parameter_policy() {
        let (left, right) = (left(), right());
        // p1 and q1 unpaired, so at is discarded on both sides.
        let correspondence = Correspondence::from_iter([("x", "y"), ("c", "c")]);
        let alignment = align(&left, &right, &correspondence);

        let mut config = Config::default();
        let dropped = generalise(&left, &right, &correspondence, &alignment, &config, &SameIdentity);
        assert_eq!(dropped.schema.arity(), 0);
        assert_eq!(dropped.schema.literal_count(), 1);

        config.parameter_policy.value = ParameterPolicy::Existential;
        let kept = generalise(&left, &right, &correspondence, &alignment, &config, &SameIdentity);
        assert_eq!(kept.schema.arity(), 1);
        assert_eq!(kept.schema.literal_count(), 1);
    }

    #[test]
    fn unmentioned_objects() {
        let wait = ActionOccurrence::new(
            "wait",
            [
                Object::parameter("x"),
                Object::parameter("y"),
                Object::constant("c"),
            ],
            [Literal::new(Section::Precondition, "idle", ["x"])],
        )
        .unwrap();
        let correspondence = Correspondence::identity(["x", "y", "c"]);
        let alignment = align(&wait, &wait, &correspondence);

        let mut config = Config::default();
        for policy in [ParameterPolicy::Drop, ParameterPolicy::Existential] {
            config.parameter_policy.value = policy;
            let generalised =
                generalise(&wait, &wait, &correspondence, &alignment, &config, &SameIdentity);
            assert_eq!(generalised.schema, wait);
        }

        // A pair of distinct unmentioned constants lifts to nothing.
        let other = ActionOccurrence::new(
            "wait",
            [
                Object::parameter("x"),
                Object::parameter("y"),
                Object::constant("d"),
            ],
            [Literal::new(Section::Precondition, "idle", ["x"])],
        )
        .unwrap();
        let correspondence = Correspondence::from_iter([("x", "x"), ("y", "y"), ("c", "d")]);
        let alignment = align(&wait, &other, &correspondence);
        let generalised = generalise(
            &wait,
            &other,
            &correspondence,
            &alignment,
            &Config::default(),
            &SameIdentity,
        );
        let names = generalised
            .schema
            .objects()
            .iter()
            .map(|o| o.name())
            .collect::<Vec<_>>();
        assert_eq!(names, ["x", "y"]);
    }

    #[test]
    fn right_parameter_names() {
        let left = ActionOccurrence::new(
            "a",
            [Object::constant("p"), Object::constant("z")],
            [Literal::new(Section::Add, "on", ["p", "z"])],
        )
        .unwrap();
        let right = ActionOccurrence::new(
            "a",
            [Object::parameter("y"), Object::parameter("z")],
            [Literal::new(Section::Add, "on", ["y", "z"])],
        )
        .unwrap();

        let correspondence = Correspondence::from_iter([("p", "y"), ("z", "z")]);
        let alignment = align(&left, &right, &correspondence);
        let generalised = generalise(
            &left,
            &right,
            &correspondence,
            &alignment,
            &Config::default(),
            &SameIdentity,
        );

        assert_eq!(generalised.sigma_left["p"], "y");
        assert_eq!(generalised.sigma_left["z"], "z");
        assert_eq!(generalised.schema.arity(), 2);
        assert!(generalised.schema.objects().iter().all(|o| o.is_parameter()));
    }
}
