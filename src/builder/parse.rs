/*!
Reading literals and atoms from strings.

The form read is the form written by the [Display](std::fmt::Display) implementations of [Literal] and [Atom]:
- An atom is a predicate, optionally followed by a parenthesised list of arguments separated by commas, e.g. `at(x, p1)`, `day`, or `day()`.
- A literal is an atom, optionally prefixed by a section and a colon, e.g. `del:at(x, p1)`.
  Without a prefix, the section is the precondition.

Whitespace around names is ignored.

```rust
# use oaru::builder::parse_literal;
# use oaru::structures::literal::{Literal, Section};
let literal = parse_literal("add:at(x, p2)").unwrap();
assert_eq!(literal, Literal::new(Section::Add, "at", ["x", "p2"]));
assert_eq!(parse_literal(&literal.to_string()), Ok(literal));
```
*/

use crate::{
    structures::{
        literal::{Literal, Section},
        state::Atom,
    },
    types::err::{self},
};

/// Reads an atom, e.g. `at(x, p1)`.
pub fn parse_atom(text: &str) -> Result<Atom, err::ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(err::ParseError::Empty);
    }

    let Some(open) = text.find('(') else {
        if text.contains(')') {
            return Err(err::ParseError::Parenthesis);
        }
        return Ok(Atom::new(text, Vec::<String>::new()));
    };

    let predicate = text[..open].trim();
    if predicate.is_empty() {
        return Err(err::ParseError::Empty);
    }

    let rest = &text[open + 1..];
    let Some(close) = rest.find(')') else {
        return Err(err::ParseError::Parenthesis);
    };

    let trailing = rest[close + 1..].trim();
    if !trailing.is_empty() {
        return Err(err::ParseError::Trailing(trailing.to_string()));
    }

    let inner = &rest[..close];
    if inner.contains('(') {
        return Err(err::ParseError::Parenthesis);
    }
    if inner.trim().is_empty() {
        return Ok(Atom::new(predicate, Vec::<String>::new()));
    }

    let mut arguments = Vec::default();
    for (position, argument) in inner.split(',').enumerate() {
        let argument = argument.trim();
        if argument.is_empty() {
            return Err(err::ParseError::EmptyArgument(position));
        }
        arguments.push(argument.to_string());
    }

    Ok(Atom::new(predicate, arguments))
}

/// Reads a literal, e.g. `del:at(x, p1)`.
pub fn parse_literal(text: &str) -> Result<Literal, err::ParseError> {
    let text = text.trim();

    let head_end = text.find('(').unwrap_or(text.len());
    let (section, atom) = match text[..head_end].split_once(':') {
        Some((prefix, _)) => {
            let section = match prefix.trim() {
                "pre" | "precondition" => Section::Precondition,
                "add" => Section::Add,
                "del" | "delete" => Section::Delete,
                other => return Err(err::ParseError::Section(other.to_string())),
            };
            (section, &text[prefix.len() + 1..])
        }
        None => (Section::Precondition, text),
    };

    Ok(parse_atom(atom)?.as_literal(section))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoms() {
        let at = parse_atom(" at ( x ,p1 ) ").unwrap();
        assert_eq!(at.predicate(), "at");
        assert_eq!(at.arguments(), ["x", "p1"]);

        assert_eq!(parse_atom("day").unwrap().arguments().len(), 0);
        assert_eq!(parse_atom("day()").unwrap().arguments().len(), 0);
    }

    #[test]
    fn malformed() {
        assert_eq!(parse_atom(""), Err(err::ParseError::Empty));
        assert_eq!(parse_atom("(x)"), Err(err::ParseError::Empty));
        assert_eq!(parse_atom("at(x, p1"), Err(err::ParseError::Parenthesis));
        assert_eq!(parse_atom("at x)"), Err(err::ParseError::Parenthesis));
        assert_eq!(parse_atom("at(x,,p1)"), Err(err::ParseError::EmptyArgument(1)));
        assert_eq!(
            parse_atom("at(x) y"),
            Err(err::ParseError::Trailing("y".to_string()))
        );
        assert_eq!(
            parse_literal("eff:at(x)"),
            Err(err::ParseError::Section("eff".to_string()))
        );
    }

    #[test]
    fn sections() {
        assert_eq!(
            parse_literal("at(x)").unwrap().section(),
            Section::Precondition
        );
        assert_eq!(parse_literal("del: at(x)").unwrap().section(), Section::Delete);
        assert_eq!(
            parse_literal("add:day").unwrap(),
            Literal::new(Section::Add, "day", Vec::<String>::new())
        );
    }
}
