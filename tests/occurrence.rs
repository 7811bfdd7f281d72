use oaru::{
    builder::{parse_literal, Builder},
    structures::{
        literal::{Literal, Section},
        object::Object,
        occurrence::ActionOccurrence,
        state::State,
        vocabulary::Vocabulary,
    },
    types::err::{self},
};

mod build {
    use super::*;

    #[test]
    fn malformed() {
        assert_eq!(
            Builder::new("").constant("a").build(),
            Err(err::OccurrenceError::EmptyName)
        );

        assert_eq!(
            Builder::new("pick").constant("a").constant("a").build(),
            Err(err::OccurrenceError::DuplicateObject("a".to_string()))
        );

        assert_eq!(
            Builder::new("pick")
                .constant("a")
                .precondition("on", ["a", "b"])
                .build(),
            Err(err::OccurrenceError::UndeclaredObject {
                predicate: "on".to_string(),
                object: "b".to_string()
            })
        );

        assert!(matches!(
            Builder::new("pick")
                .constant("a")
                .constant("b")
                .precondition("on", ["a", "b"])
                .delete("on", ["a"])
                .build(),
            Err(err::OccurrenceError::ArityMismatch { .. })
        ));
    }

    #[test]
    fn parameters_first() {
        let occurrence = Builder::new("move")
            .constant("p1")
            .parameter("x")
            .typed_parameter("y", "truck")
            .precondition("at", ["x", "p1"])
            .precondition("at", ["y", "p1"])
            .build()
            .unwrap();

        let names = occurrence
            .objects()
            .iter()
            .map(|o| o.name())
            .collect::<Vec<_>>();
        assert_eq!(names, ["x", "y", "p1"]);
        assert_eq!(occurrence.arity(), 2);
        assert_eq!(occurrence.object("y").map(|o| o.type_name()), Some("truck"));
    }

    #[test]
    fn duplicate_literals() {
        let occurrence = Builder::new("pick")
            .constant("a")
            .precondition("clear", ["a"])
            .precondition("clear", ["a"])
            .build()
            .unwrap();
        assert_eq!(occurrence.literal_count(), 1);
    }

    #[test]
    fn vocabulary() {
        let mut vocabulary = Vocabulary::default();
        vocabulary.declare("clear", 1);
        vocabulary.declare("held", 1);

        let occurrence = Builder::new("pick")
            .constant("a")
            .precondition("clear", ["a"])
            .add("held", ["a"])
            .build_with(&vocabulary);
        assert!(occurrence.is_ok());

        let unknown = Builder::new("pick")
            .constant("a")
            .precondition("on", ["a"])
            .build_with(&vocabulary);
        assert_eq!(
            unknown,
            Err(err::OccurrenceError::UnknownPredicate("on".to_string()))
        );
    }
}

mod parse {
    use super::*;

    #[test]
    fn builder_from_text() {
        let parsed = ["pre:at(x, p1)", "add:at(x, p2)", "del:at(x, p1)"]
            .into_iter()
            .try_fold(
                Builder::new("move")
                    .parameter("x")
                    .constant("p1")
                    .constant("p2"),
                |builder, text| builder.parsed(text),
            )
            .unwrap()
            .build()
            .unwrap();

        let built = Builder::new("move")
            .parameter("x")
            .constant("p1")
            .constant("p2")
            .precondition("at", ["x", "p1"])
            .add("at", ["x", "p2"])
            .delete("at", ["x", "p1"])
            .build()
            .unwrap();

        assert_eq!(parsed, built);
    }

    #[test]
    fn display_round_trip() {
        let literal = Literal::new(Section::Delete, "on", ["a", "b"]);
        assert_eq!(parse_literal(&literal.to_string()), Ok(literal));

        let nullary = Literal::new(Section::Add, "day", Vec::<String>::new());
        assert_eq!(parse_literal(&nullary.to_string()), Ok(nullary));
    }

    #[test]
    fn errors() {
        assert_eq!(parse_literal("at(x"), Err(err::ParseError::Parenthesis));
        assert_eq!(
            parse_literal("effect:at(x)"),
            Err(err::ParseError::Section("effect".to_string()))
        );
    }
}

mod transition {
    use super::*;

    #[test]
    fn from_states() {
        let before = State::from_iter([("at", vec!["a", "p1"]), ("clear", vec!["p2"])]);
        let after = State::from_iter([("at", vec!["a", "p2"]), ("clear", vec!["p2"])]);

        let occurrence = ActionOccurrence::from_transition("move", &before, &after).unwrap();

        assert_eq!(occurrence.arity(), 0);
        assert_eq!(occurrence.objects().len(), 3);
        assert!(occurrence.objects().iter().all(|o| !o.is_parameter()));

        assert_eq!(occurrence.literals_in(Section::Precondition).count(), 2);
        assert!(occurrence.contains(&Literal::new(Section::Add, "at", ["a", "p2"])));
        assert!(occurrence.contains(&Literal::new(Section::Delete, "at", ["a", "p1"])));
        assert_eq!(occurrence.literals_in(Section::Add).count(), 1);
        assert_eq!(occurrence.literals_in(Section::Delete).count(), 1);
    }

    #[test]
    fn unchanged_state() {
        let state = State::from_iter([("at", vec!["a", "p1"])]);
        let occurrence = ActionOccurrence::from_transition("wait", &state, &state).unwrap();
        assert_eq!(occurrence.literal_count(), 1);
        assert_eq!(occurrence.literals_in(Section::Precondition).count(), 1);
    }
}

mod serialisation {
    use super::*;

    #[test]
    fn json() {
        let occurrence = Builder::new("pick")
            .parameter("x")
            .object(Object::constant("table").with_type("furniture").with_identity("t0"))
            .precondition("on", ["x", "table"])
            .add("held", ["x"])
            .build()
            .unwrap();

        let json = serde_json::to_string(&occurrence).unwrap();
        let read: ActionOccurrence = serde_json::from_str(&json).unwrap();
        assert_eq!(read, occurrence);
        assert_eq!(read.object("table").map(|o| o.identity()), Some("t0"));
    }

    #[test]
    fn malformed_json() {
        let undeclared = r#"{
            "name": "pick",
            "objects": [{ "name": "a", "kind": "constant" }],
            "literals": [{ "section": "pre", "predicate": "on", "arguments": ["a", "b"] }]
        }"#;
        assert!(serde_json::from_str::<ActionOccurrence>(undeclared).is_err());

        let untyped = r#"{
            "name": "pick",
            "objects": [{ "name": "a", "kind": "constant" }],
            "literals": [{ "section": "add", "predicate": "held", "arguments": ["a"] }]
        }"#;
        let read = serde_json::from_str::<ActionOccurrence>(untyped).unwrap();
        assert_eq!(read.object("a").map(|o| o.type_name()), Some("object"));
    }
}
