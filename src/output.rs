//! Writing artifacts to the output directory.
//!
//! Each file goes to a temporary sibling first and is then renamed over its
//! final path, so readers never see a half-written declaration file.
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::codegen::{Artifact, ALL_FILES};
use crate::error::{Error, Result};

/// Write every artifact into `dir` and remove generated files the current
/// layout no longer produces. Returns the written paths in artifact order.
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = dir.join(artifact.file_name);
        write_atomic(dir, &path, artifact.contents.as_bytes())?;
        tracing::info!(path = %path.display(), "wrote declarations");
        written.push(path);
    }

    prune_stale(dir, artifacts)?;
    Ok(written)
}

fn write_atomic(dir: &Path, path: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    tmp.write_all(bytes).map_err(|e| Error::io(tmp.path(), e))?;
    tmp.flush().map_err(|e| Error::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}

fn prune_stale(dir: &Path, artifacts: &[Artifact]) -> Result<()> {
    let stale = ALL_FILES
        .iter()
        .filter(|name| !artifacts.iter().any(|a| a.file_name == **name));
    for name in stale {
        let path = dir.join(name);
        if path.is_file() {
            std::fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
            tracing::info!(path = %path.display(), "removed stale declarations");
        }
    }
    Ok(())
}

// ------------------------------- Tests ------------------------------------ //
