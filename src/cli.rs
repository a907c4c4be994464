//! Minimal CLI: td_api.json → TypeScript declarations
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::config::{ErrorMapping, FunctionShape, GeneratorConfig, Layout};
use crate::schema::DEFAULT_SCHEMA_FILE;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate TypeScript declaration files from a TDLib `td_api.json` schema
#[derive(Parser, Debug)]
#[command(name = "tdlib-dts", version)]
pub struct CommandLineInterface {
    /// schema produced by the upstream JSON generation step
    #[arg(long, short, default_value = DEFAULT_SCHEMA_FILE)]
    input: PathBuf,

    /// directory receiving the declaration files
    #[arg(long, short, default_value = "types")]
    out_dir: PathBuf,

    /// preset selecting one of the two output layouts
    #[arg(long, value_enum, default_value_t = Layout::ThreeFile)]
    layout: Layout,

    /// override the preset's mapping of the schema `error` object
    #[arg(long, value_enum)]
    error_mapping: Option<ErrorMapping>,

    /// override the preset's function declaration shape
    #[arg(long, value_enum)]
    function_shape: Option<FunctionShape>,

    /// override whether `update.d.ts` is generated
    #[arg(long)]
    update_lookup: Option<bool>,

    /// module the external base object and error types are imported from
    #[arg(long)]
    external_module: Option<String>,

    /// documentation URL template; `{}` is replaced by the snake_case name
    #[arg(long)]
    docs_url: Option<String>,

    /// more logging (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    /// Preset for `--layout` with the individual overrides applied.
    pub fn generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::for_layout(self.layout);
        if let Some(mapping) = self.error_mapping {
            config.error_mapping = mapping;
        }
        if let Some(shape) = self.function_shape {
            config.function_shape = shape;
        }
        if let Some(lookup) = self.update_lookup {
            config.emit_update_lookup = lookup;
        }
        if let Some(module) = &self.external_module {
            config.external_module = module.clone();
        }
        if let Some(template) = &self.docs_url {
            config.docs_url_template = template.clone();
        }
        config
    }

    pub fn run(&self) -> anyhow::Result<()> {
        init_tracing(self.verbose);

        // debug path
        if self.no_op {
            eprintln!("{self:#?}");
            eprintln!("{:#?}", self.generator_config());
            return Ok(());
        }

        let config = self.generator_config();
        tracing::debug!(?config, input = %self.input.display(), "generating");

        let written = crate::run(&self.input, &self.out_dir, &config)
            .with_context(|| format!("failed to generate declarations into {}", self.out_dir.display()))?;

        let names = written
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} {names}", "Declaration files written to".green());
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    if tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}
