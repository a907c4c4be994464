//! Type reference resolution: schema token → TypeScript type.
use crate::config::{ErrorMapping, GeneratorConfig};
use crate::ir::Ty;
use crate::naming::{to_camel_case, Case};
use crate::token::{Primitive, TypeToken};

/// Where the resolved reference will be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Inside `object.d.ts`, next to the declarations.
    Local,
    /// Any other file; object types go through the namespace import.
    External,
}

impl From<bool> for Scope {
    fn from(external: bool) -> Self {
        if external { Scope::External } else { Scope::Local }
    }
}

/// Resolve a raw schema token. Never fails: unknown tokens are references.
pub fn resolve(raw: &str, external: bool, config: &GeneratorConfig) -> String {
    lower_token(&TypeToken::parse(raw), Scope::from(external), config).to_string()
}

pub fn lower_token(token: &TypeToken, scope: Scope, config: &GeneratorConfig) -> Ty {
    match token {
        TypeToken::Primitive(prim) => lower_primitive(*prim),
        TypeToken::Vector(inner) => Ty::array_of(lower_token(inner, scope, config)),
        TypeToken::Error => error_type(scope, config),
        TypeToken::Named(name) => object_ref(name, scope, config),
    }
}

pub fn lower_primitive(prim: Primitive) -> Ty {
    match prim {
        Primitive::Int32 | Primitive::Int53 | Primitive::Int256 | Primitive::Double => Ty::Number,
        // int64 overflows a JS number; tdlib sends it as a decimal string
        Primitive::Int64 => Ty::String,
        Primitive::Bytes | Primitive::String => Ty::String,
        Primitive::Bool => Ty::Boolean,
    }
}

/// Reference to a concrete schema object by name. Used for class union
/// members too, so an `error` variant follows the error mapping.
pub fn object_ref(name: &str, scope: Scope, config: &GeneratorConfig) -> Ty {
    if name.eq_ignore_ascii_case("error") {
        return error_type(scope, config);
    }
    scoped(to_camel_case(name, Case::Class), scope, config)
}

fn error_type(scope: Scope, config: &GeneratorConfig) -> Ty {
    match config.error_mapping {
        ErrorMapping::Inline => scoped("Error".to_string(), scope, config),
        // imported by name into every file that needs it
        ErrorMapping::External => Ty::local(config.base_error_type.clone()),
    }
}

fn scoped(name: String, scope: Scope, config: &GeneratorConfig) -> Ty {
    match scope {
        Scope::Local => Ty::local(name),
        Scope::External => Ty::qualified(config.object_namespace.clone(), name),
    }
}

// ------------------------------- Tests ------------------------------------ //
