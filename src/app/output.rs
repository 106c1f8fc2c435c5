//! Artifact output.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::export::ExportArtifact;

/// Writes `artifact` into `dir` under its own filename, creating `dir` if
/// needed. Returns the path written.
pub fn write_artifact(dir: &Path, artifact: &ExportArtifact) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = dir.join(&artifact.filename);
    fs::write(&path, &artifact.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("Wrote {} ({})", path.display(), artifact.mime);
    Ok(path)
}
