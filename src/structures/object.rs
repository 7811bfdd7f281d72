/*!
Objects of an action occurrence.

An object is either a (lifted) parameter or a constant, and has a type.

Objects are local to an occurrence, and so objects from distinct occurrences are never compared directly.
Instead, an object may carry an *identity*, some stable external name, and two objects with the same identity are known to be the same entity.
If no identity is given the name of the object is its identity.

```rust
# use oaru::structures::object::Object;
let x = Object::parameter("x");
let p1 = Object::constant("p1").with_type("place");
let q1 = Object::constant("q1").with_type("place").with_identity("p1");

assert!(x.is_parameter());
assert_eq!(p1.type_name(), "place");
assert_eq!(p1.identity(), q1.identity());
```
*/

use serde::{Deserialize, Serialize};

/// The type of an object for which no type is given.
pub const ROOT_TYPE: &str = "object";

fn root_type() -> String {
    ROOT_TYPE.to_string()
}

/// Whether an object is lifted or not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// A lifted object, to be substituted when the action is instantiated.
    Parameter,

    /// A fixed object.
    Constant,
}

/// A typed object.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Object {
    name: String,

    #[serde(rename = "type", default = "root_type")]
    type_name: String,

    kind: ObjectKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    identity: Option<String>,
}

impl Object {
    /// A parameter of the root type.
    pub fn parameter(name: impl Into<String>) -> Self {
        Object {
            name: name.into(),
            type_name: root_type(),
            kind: ObjectKind::Parameter,
            identity: None,
        }
    }

    /// A constant of the root type.
    pub fn constant(name: impl Into<String>) -> Self {
        Object {
            name: name.into(),
            type_name: root_type(),
            kind: ObjectKind::Constant,
            identity: None,
        }
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    pub(crate) fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn is_parameter(&self) -> bool {
        self.kind == ObjectKind::Parameter
    }

    /// The identity of the object, which defaults to the name of the object.
    pub fn identity(&self) -> &str {
        self.identity.as_deref().unwrap_or(&self.name)
    }
}

impl std::fmt::Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ObjectKind::Parameter => write!(f, "{}: {}", self.name, self.type_name),
            ObjectKind::Constant => write!(f, "{} (constant): {}", self.name, self.type_name),
        }
    }
}
