//! TypeScript declarations for a TDLib-style `td_api.json` schema.
//!
//! Pipeline: load [`schema::Schema`] → render [`codegen::Artifact`]s with the
//! resolver in [`lower`] → write them atomically with [`output`].
use std::path::{Path, PathBuf};

pub mod cli;
pub mod codegen;
pub mod config;
pub mod error;
pub mod ir;
pub mod lower;
pub mod naming;
pub mod output;
pub mod path_de;
pub mod schema;
pub mod token;

pub use config::{ErrorMapping, FunctionShape, GeneratorConfig, Layout};
pub use error::{Error, Result};
pub use schema::Schema;

/// Load `input`, render every artifact, then write them to `out_dir`.
/// Nothing is written unless the whole schema renders.
pub fn run(input: &Path, out_dir: &Path, config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    let schema = Schema::load(input)?;
    let artifacts = codegen::generate(&schema, config)?;
    output::write_artifacts(out_dir, &artifacts)
}

// ------------------------------- Tests ------------------------------------ //
