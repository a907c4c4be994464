//! Run the generator over real schema files and check its output.
//!
//! usage: dev-test-runner <td_api.json>...
//!
//! For each schema and each layout: generate twice and compare bytes, then
//! make sure every `Obj.X` reference names a type `object.d.ts` declares.
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use once_cell::sync::Lazy;
use regex::Regex;
use tdlib_dts::codegen::{self, Artifact};
use tdlib_dts::{GeneratorConfig, Layout, Schema};

static DECLARED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^export type (\w+)").expect("static regex"));
static REFERENCED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bObj\.(\w+)").expect("static regex"));

fn main() -> Result<()> {
    let inputs: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if inputs.is_empty() {
        bail!("usage: dev-test-runner <td_api.json>...");
    }

    let mut failures = 0usize;
    for input in &inputs {
        for layout in [Layout::ThreeFile, Layout::TwoFile] {
            let label = format!("{} [{layout:?}]", input.display());
            match check(input, layout) {
                Ok(summary) => eprintln!("✅ {label}: {summary}"),
                Err(error) => {
                    failures += 1;
                    eprintln!("❌ {}: {error:#}", label.red());
                }
            }
        }
    }

    if failures > 0 {
        bail!("{failures} check(s) failed");
    }
    eprintln!("{}", "all checks passed".green());
    Ok(())
}

fn check(input: &Path, layout: Layout) -> Result<String> {
    let config = GeneratorConfig::for_layout(layout);
    let schema = Schema::load(input)?;

    let first = codegen::generate(&schema, &config)?;
    let second = codegen::generate(&Schema::load(input)?, &config)?;
    if first != second {
        bail!("output differs between two runs");
    }

    let objects = artifact(&first, codegen::OBJECT_FILE)?;
    let declared: BTreeSet<&str> = DECLARED
        .captures_iter(&objects.contents)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();

    let mut dangling = BTreeSet::new();
    for other in first.iter().filter(|a| a.file_name != codegen::OBJECT_FILE) {
        for caps in REFERENCED.captures_iter(&other.contents) {
            let Some(name) = caps.get(1).map(|m| m.as_str()) else { continue };
            if !declared.contains(name) {
                dangling.insert(format!("{}: Obj.{name}", other.file_name));
            }
        }
    }
    if !dangling.is_empty() {
        let list = dangling.into_iter().collect::<Vec<_>>().join("\n  ");
        bail!("dangling references:\n  {list}");
    }

    // round-trip through the filesystem as the CLI would
    let dir = tempfile::tempdir().context("failed to create scratch directory")?;
    let written = tdlib_dts::output::write_artifacts(dir.path(), &first)?;

    Ok(format!(
        "{} declarations, {} files, {} bytes",
        declared.len(),
        written.len(),
        first.iter().map(|a| a.contents.len()).sum::<usize>()
    ))
}

fn artifact<'a>(artifacts: &'a [Artifact], name: &str) -> Result<&'a Artifact> {
    artifacts
        .iter()
        .find(|a| a.file_name == name)
        .with_context(|| format!("{name} was not generated"))
}
