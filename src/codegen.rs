//! TypeScript declaration emitters.
//!
//! Each emitter is a pure function of the schema and configuration that
//! renders one artifact. They share only the line buffer and the resolver.
mod functions;
mod objects;
mod updates;

use indexmap::IndexMap;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::lower::{resolve, Scope};
use crate::naming::docs_url;
use crate::schema::{FieldDescriptor, Schema};

pub use functions::emit_functions;
pub use objects::emit_objects;
pub use updates::emit_updates;

pub const OBJECT_FILE: &str = "object.d.ts";
pub const FUNCTION_FILE: &str = "function.d.ts";
pub const UPDATE_FILE: &str = "update.d.ts";

/// Every file name any layout can produce.
pub const ALL_FILES: [&str; 3] = [OBJECT_FILE, FUNCTION_FILE, UPDATE_FILE];

/// Abstract class holding every update; the per-update objects replace it.
pub const UPDATE_CLASS: &str = "update";
/// Update that batches other updates; not a lookup target of its own.
pub const UPDATES_CONTAINER: &str = "updates";

const INDENT: &str = "  ";

/// One rendered declaration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: &'static str,
    pub contents: String,
}

/// Render every artifact the configuration asks for, in a fixed order.
pub fn generate(schema: &Schema, config: &GeneratorConfig) -> Result<Vec<Artifact>> {
    let mut artifacts = vec![
        Artifact { file_name: OBJECT_FILE, contents: emit_objects(schema, config)? },
        Artifact { file_name: FUNCTION_FILE, contents: emit_functions(schema, config) },
    ];
    if config.emit_update_lookup {
        artifacts.push(Artifact { file_name: UPDATE_FILE, contents: emit_updates(schema, config) });
    }
    for artifact in &artifacts {
        tracing::debug!(file = artifact.file_name, bytes = artifact.contents.len(), "rendered");
    }
    Ok(artifacts)
}

// ————————————————————————————————————————————————————————————————————————————
// LINE BUFFER
// ————————————————————————————————————————————————————————————————————————————

/// Append-only line buffer with two-space indentation.
#[derive(Debug, Default)]
pub struct Codegen {
    lines: Vec<String>,
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{text}", INDENT.repeat(depth)));
        }
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// `/** … @see … */` block in front of a declaration.
    pub fn doc_block(&mut self, depth: usize, description: &str, see: &str) {
        self.line(depth, "/**");
        for text in description.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
            self.line(depth, format!(" * {}", escape_comment(text)));
        }
        self.line(depth, format!(" * @see {see}"));
        self.line(depth, " */");
    }

    /// Single-line `/** … */` above a field. Nothing for an empty description.
    pub fn field_doc(&mut self, depth: usize, description: &str) {
        let text = description.split_whitespace().collect::<Vec<_>>().join(" ");
        if !text.is_empty() {
            self.line(depth, format!("/** {} */", escape_comment(&text)));
        }
    }

    /// Joined output: no trailing blank lines, exactly one final newline.
    pub fn into_string(mut self) -> String {
        while self.lines.last().is_some_and(|l| l.is_empty()) {
            self.lines.pop();
        }
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

fn escape_comment(text: &str) -> String {
    text.replace("*/", "*\\/")
}

// ————————————————————————————————————————————————————————————————————————————
// SHARED PIECES
// ————————————————————————————————————————————————————————————————————————————

fn see_url(config: &GeneratorConfig, name: &str) -> String {
    docs_url(&config.docs_url_template, name)
}

/// Discriminator plus one field per argument, in schema order.
fn write_members(
    cg: &mut Codegen,
    depth: usize,
    type_name: &str,
    args: &IndexMap<String, FieldDescriptor>,
    scope: Scope,
    config: &GeneratorConfig,
) {
    cg.line(depth, format!("'@type': '{type_name}';"));
    for (arg_name, field) in args {
        let ty = resolve(&field.ty, scope == Scope::External, config);
        let optional = if field.is_optional { "?" } else { "" };
        cg.field_doc(depth, &field.description);
        cg.line(depth, format!("{arg_name}{optional}: {ty};"));
    }
}

/// `import type * as Obj from './object';`
fn object_namespace_import(config: &GeneratorConfig) -> String {
    let module = OBJECT_FILE.trim_end_matches(".d.ts");
    format!("import type * as {} from './{module}';", config.object_namespace)
}

// ------------------------------- Tests ------------------------------------ //
