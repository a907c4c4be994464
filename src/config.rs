//! Generator configuration.
//!
//! Two historical flavors of the generated declarations exist. Rather than
//! forking the emitters, every point where they disagree is a field here and
//! [`Layout`] bundles the two known combinations.

/// What the schema's generic `error` object becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ErrorMapping {
    /// Emit `error` as an ordinary object and reference it as `Error`.
    Inline,
    /// Skip the schema object and reference the external base error type.
    External,
}

/// How function signatures are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FunctionShape {
    /// One `export type Fn = { name: (args) => Result }` mapping.
    KeyedMap,
    /// One `export type Name = (args) => Result` alias per function.
    NamedAliases,
}

/// Presets matching the two historical tool variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Layout {
    /// `object.d.ts`, `function.d.ts` (keyed map) and `update.d.ts`.
    #[default]
    ThreeFile,
    /// `object.d.ts` importing external base types and `function.d.ts`
    /// with named aliases.
    TwoFile,
}

pub const DEFAULT_DOCS_URL: &str =
    "https://core.telegram.org/tdlib/docs/classtd_1_1td__api_1_1{}.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub error_mapping: ErrorMapping,
    pub function_shape: FunctionShape,
    pub emit_update_lookup: bool,
    /// Module the base object and base error types are imported from.
    pub external_module: String,
    pub base_object_type: String,
    pub base_error_type: String,
    /// Alias under which `function.d.ts` and `update.d.ts` import `object.d.ts`.
    pub object_namespace: String,
    /// Documentation URL with a `{}` placeholder for the snake_case name.
    pub docs_url_template: String,
}

impl GeneratorConfig {
    pub fn for_layout(layout: Layout) -> Self {
        let (error_mapping, function_shape, emit_update_lookup) = match layout {
            Layout::ThreeFile => (ErrorMapping::Inline, FunctionShape::KeyedMap, true),
            Layout::TwoFile => (ErrorMapping::External, FunctionShape::NamedAliases, false),
        };
        Self {
            error_mapping,
            function_shape,
            emit_update_lookup,
            external_module: "./base".to_string(),
            base_object_type: "TdObject".to_string(),
            base_error_type: "TdError".to_string(),
            object_namespace: "Obj".to_string(),
            docs_url_template: DEFAULT_DOCS_URL.to_string(),
        }
    }

    pub fn uses_external_types(&self) -> bool {
        self.error_mapping == ErrorMapping::External
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_layout(Layout::default())
    }
}
