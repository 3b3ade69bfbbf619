//! # Remediation Script
//!
//! Turns the stale candidates into an `rm server` batch file. The file is
//! advisory: an operator reviews it and runs `batch -f <file>` on the
//! appliance. Nothing here ever talks to the device.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use nsprune_common::address::AddressToken;
use tempfile::NamedTempFile;
use tracing::debug;

const ARTIFACT_PREFIX: &str = "rmserver_";
const ARTIFACT_SUFFIX: &str = ".txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemediationArtifact {
    pub file_name: String,
    /// One `rm server <address>` per stale candidate, sorted.
    pub directives: Vec<String>,
}

impl RemediationArtifact {
    /// File contents: every directive terminated by a newline.
    pub fn render(&self) -> String {
        self.directives
            .iter()
            .map(|directive| format!("{directive}\n"))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

/// `rmserver_<device with '.' replaced by '_'>.txt`
pub fn artifact_file_name(device: &str) -> String {
    format!("{ARTIFACT_PREFIX}{}{ARTIFACT_SUFFIX}", device.replace('.', "_"))
}

pub fn emit(stale: &BTreeSet<AddressToken>, device: &str) -> RemediationArtifact {
    RemediationArtifact {
        file_name: artifact_file_name(device),
        directives: stale.iter().map(|addr| format!("rm server {addr}")).collect(),
    }
}

/// Writes `artifact` into `dir` and returns the final path.
///
/// The content goes to a temporary file in `dir` first and is renamed into
/// place, so an interrupted write never leaves a truncated script behind.
pub fn write_artifact(artifact: &RemediationArtifact, dir: &Path) -> std::io::Result<PathBuf> {
    let path = dir.join(&artifact.file_name);

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(artifact.render().as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(&path).map_err(|e| e.error)?;

    debug!(path = %path.display(), directives = artifact.directives.len(), "artifact written");
    Ok(path)
}
