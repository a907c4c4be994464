//! Schema type tokens.
//!
//! Grammar (whitespace around a token is ignored):
//!
//! ```text
//! token     := '?'? body
//! body      := primitive | vector | 'error' | identifier
//! primitive := int32 | int53 | int64 | int256 | double | bytes | string | Bool
//! vector    := 'vector<' token '>' | '(' 'vector' token ')'
//! ```
//!
//! Parsing is total. Anything that is not a primitive, a vector or the error
//! sentinel is a named reference.

/// Fixed set of schema scalars. Matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Int32,
    Int53,
    Int64,
    Int256,
    Double,
    Bytes,
    String,
    Bool,
}

impl Primitive {
    pub const ALL: [Primitive; 8] = [
        Primitive::Int32,
        Primitive::Int53,
        Primitive::Int64,
        Primitive::Int256,
        Primitive::Double,
        Primitive::Bytes,
        Primitive::String,
        Primitive::Bool,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "int32" => Primitive::Int32,
            "int53" => Primitive::Int53,
            "int64" => Primitive::Int64,
            "int256" => Primitive::Int256,
            "double" => Primitive::Double,
            "bytes" => Primitive::Bytes,
            "string" => Primitive::String,
            "Bool" => Primitive::Bool,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Primitive::Int32 => "int32",
            Primitive::Int53 => "int53",
            Primitive::Int64 => "int64",
            Primitive::Int256 => "int256",
            Primitive::Double => "double",
            Primitive::Bytes => "bytes",
            Primitive::String => "string",
            Primitive::Bool => "Bool",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeToken {
    Primitive(Primitive),
    Vector(Box<TypeToken>),
    /// The generic `error` object (any casing).
    Error,
    Named(String),
}

impl TypeToken {
    pub fn parse(raw: &str) -> TypeToken {
        let raw = raw.trim();
        // optionality lives on the field descriptor, not in the type
        let raw = raw.strip_prefix('?').unwrap_or(raw);

        if let Some(prim) = Primitive::from_name(raw) {
            return TypeToken::Primitive(prim);
        }
        if let Some(inner) = vector_inner(raw) {
            return TypeToken::Vector(Box::new(TypeToken::parse(inner)));
        }
        if raw.eq_ignore_ascii_case("error") {
            return TypeToken::Error;
        }
        TypeToken::Named(raw.to_string())
    }

    /// Number of `vector` layers wrapped around the innermost token.
    pub fn depth(&self) -> usize {
        match self {
            TypeToken::Vector(inner) => 1 + inner.depth(),
            _ => 0,
        }
    }
}

/// Inner token text of `vector<T>` or `(vector T)`.
fn vector_inner(raw: &str) -> Option<&str> {
    if let Some(inner) = raw.strip_prefix("vector<").and_then(|s| s.strip_suffix('>')) {
        return Some(inner);
    }
    let body = raw.strip_prefix('(')?.strip_suffix(')')?;
    let rest = body.strip_prefix("vector")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    // exactly one element after `vector`: a bare word or a parenthesized token
    let inner = rest.trim();
    let single = !inner.contains(char::is_whitespace)
        || (inner.starts_with('(') && inner.ends_with(')'));
    if inner.is_empty() || !single {
        return None;
    }
    Some(inner)
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_are_exact_and_case_sensitive() {
        for prim in Primitive::ALL {
            assert_eq!(TypeToken::parse(prim.name()), TypeToken::Primitive(prim));
        }
        assert_eq!(TypeToken::parse("bool"), TypeToken::Named("bool".into()));
        assert_eq!(TypeToken::parse("Int32"), TypeToken::Named("Int32".into()));
        assert_eq!(TypeToken::parse("int3"), TypeToken::Named("int3".into()));
    }

    #[test]
    fn optional_marker_and_whitespace_are_stripped() {
        assert_eq!(TypeToken::parse(" ?int53 "), TypeToken::Primitive(Primitive::Int53));
        assert_eq!(TypeToken::parse("?user"), TypeToken::Named("user".into()));
    }

    #[test]
    fn both_vector_syntaxes_nest() {
        let angle = TypeToken::parse("vector<vector<string>>");
        let paren = TypeToken::parse("(vector (vector string))");
        let expected = TypeToken::Vector(Box::new(TypeToken::Vector(Box::new(
            TypeToken::Primitive(Primitive::String),
        ))));
        assert_eq!(angle, expected);
        assert_eq!(paren, expected);
        assert_eq!(angle.depth(), 2);
        assert_eq!(TypeToken::parse("(vector  user)").depth(), 1);
    }

    #[test]
    fn mixed_vector_forms() {
        let tok = TypeToken::parse("vector<(vector int32)>");
        assert_eq!(tok.depth(), 2);
    }

    #[test]
    fn error_sentinel_any_case() {
        assert_eq!(TypeToken::parse("error"), TypeToken::Error);
        assert_eq!(TypeToken::parse("Error"), TypeToken::Error);
        assert_eq!(TypeToken::parse("ERROR"), TypeToken::Error);
        assert_eq!(TypeToken::parse("errors"), TypeToken::Named("errors".into()));
    }

    #[test]
    fn malformed_composites_fall_back_to_references() {
        assert_eq!(TypeToken::parse("(vector a b)"), TypeToken::Named("(vector a b)".into()));
        assert_eq!(TypeToken::parse("vector<int32"), TypeToken::Named("vector<int32".into()));
        assert_eq!(TypeToken::parse("(vectoruser)"), TypeToken::Named("(vectoruser)".into()));
        assert_eq!(TypeToken::parse("(vector )"), TypeToken::Named("(vector )".into()));
        assert_eq!(TypeToken::parse(""), TypeToken::Named(String::new()));
    }
}
