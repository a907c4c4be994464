// Resolved TypeScript types. Rendered through `Display`, never cached.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ty {
    Number,
    String,
    Boolean,
    Array(Box<Ty>),
    /// Reference to a declared type, optionally through a namespace import.
    Ref {
        namespace: Option<String>,
        name: String,
    },
}

impl Ty {
    pub fn local(name: impl Into<String>) -> Ty {
        Ty::Ref { namespace: None, name: name.into() }
    }

    pub fn qualified(namespace: impl Into<String>, name: impl Into<String>) -> Ty {
        Ty::Ref { namespace: Some(namespace.into()), name: name.into() }
    }

    pub fn array_of(item: Ty) -> Ty {
        Ty::Array(Box::new(item))
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Number => f.write_str("number"),
            Ty::String => f.write_str("string"),
            Ty::Boolean => f.write_str("boolean"),
            // items are never unions, so `T[]` needs no parentheses
            Ty::Array(item) => write!(f, "{item}[]"),
            Ty::Ref { namespace: Some(ns), name } => write!(f, "{ns}.{name}"),
            Ty::Ref { namespace: None, name } => f.write_str(name),
        }
    }
}
