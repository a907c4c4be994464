//! The `td_api.json` document.
//!
//! Every collection is an [`IndexMap`] keyed by the schema name, so iteration
//! follows the document order and generated output is reproducible.
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_SCHEMA_FILE: &str = "td_api.json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub types: IndexMap<String, TypeDescriptor>,
    #[serde(default)]
    pub updates: IndexMap<String, TypeDescriptor>,
    #[serde(default)]
    pub classes: IndexMap<String, ClassDescriptor>,
    #[serde(default)]
    pub functions: IndexMap<String, FunctionDescriptor>,
}

/// A concrete object or update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeDescriptor {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub args: IndexMap<String, FieldDescriptor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionDescriptor {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub args: IndexMap<String, FieldDescriptor>,
    #[serde(rename = "type", alias = "returnType")]
    pub return_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDescriptor {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "isOptional")]
    pub is_optional: bool,
}

/// Abstract class: a supertype and the concrete types implementing it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassDescriptor {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl Schema {
    /// Read and parse a schema file. A missing file is reported as
    /// [`Error::MissingInput`] rather than a plain I/O error.
    pub fn load(path: &Path) -> Result<Schema> {
        if !path.exists() {
            return Err(Error::MissingInput { path: path.to_path_buf() });
        }
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let schema = Self::from_json_str(&source, path)?;
        tracing::debug!(
            path = %path.display(),
            types = schema.types.len(),
            updates = schema.updates.len(),
            classes = schema.classes.len(),
            functions = schema.functions.len(),
            "loaded schema"
        );
        Ok(schema)
    }

    /// Parse schema JSON. `origin` only labels errors.
    pub fn from_json_str(source: &str, origin: &Path) -> Result<Schema> {
        crate::path_de::from_str_with_path::<Schema>(source).map_err(|err| Error::MalformedSchema {
            path: origin.to_path_buf(),
            json_path: err.path,
            message: err.message,
        })
    }

    /// Whether `name` is a concrete object (`types`) or update (`updates`).
    pub fn declares_object(&self, name: &str) -> bool {
        self.types.contains_key(name) || self.updates.contains_key(name)
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<Schema> {
        Schema::from_json_str(&value.to_string(), Path::new("td_api.json"))
    }

    #[test]
    fn collections_keep_document_order() {
        let schema = parse(json!({
            "types": {
                "zeta": {"description": "", "args": {}},
                "alpha": {"description": "", "args": {
                    "second": {"type": "int32", "description": "", "is_optional": false},
                    "first": {"type": "string", "description": "", "is_optional": true}
                }}
            },
            "updates": {},
            "classes": {},
            "functions": {}
        }))
        .unwrap();
        let names: Vec<&str> = schema.types.keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "alpha"]);
        let args: Vec<&str> = schema.types["alpha"].args.keys().map(String::as_str).collect();
        assert_eq!(args, ["second", "first"]);
        assert!(schema.types["alpha"].args["first"].is_optional);
    }

    #[test]
    fn accepts_camel_case_keys_and_missing_collections() {
        let schema = parse(json!({
            "functions": {
                "getMe": {
                    "description": "Returns the current user",
                    "args": {"flag": {"type": "Bool", "isOptional": true}},
                    "returnType": "user"
                }
            }
        }))
        .unwrap();
        assert!(schema.types.is_empty());
        assert!(schema.classes.is_empty());
        let get_me = &schema.functions["getMe"];
        assert_eq!(get_me.return_type, "user");
        assert!(get_me.args["flag"].is_optional);
        assert_eq!(get_me.args["flag"].description, "");
    }

    #[test]
    fn wrong_shape_reports_the_offending_entry() {
        let err = parse(json!({
            "types": {"user": {"description": "", "args": ["id"]}}
        }))
        .unwrap_err();
        match err {
            Error::MalformedSchema { json_path, .. } => assert_eq!(json_path, "types.user.args"),
            other => panic!("unexpected error: {other}"),
        }

        let err = parse(json!({"classes": []})).unwrap_err();
        assert!(matches!(err, Error::MalformedSchema { ref json_path, .. } if json_path == "classes"));
    }

    #[test]
    fn missing_file_is_its_own_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SCHEMA_FILE);
        let err = Schema::load(&path).unwrap_err();
        assert!(matches!(err, Error::MissingInput { .. }));
        assert!(err.to_string().contains("Run generate_json.py first"));
    }

    #[test]
    fn declares_object_checks_types_and_updates() {
        let schema = parse(json!({
            "types": {"user": {}},
            "updates": {"updateUser": {}}
        }))
        .unwrap();
        assert!(schema.declares_object("user"));
        assert!(schema.declares_object("updateUser"));
        assert!(!schema.declares_object("chat"));
    }
}
