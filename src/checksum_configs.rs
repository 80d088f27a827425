use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

pub const ARTIFACT_EXTENSION: &str = "jar";
pub const TARGET_DIR: &str = "target";

/// Where the artifact lives and where its checksum files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumConfigs {
    pub artifact_name: String,
    pub target_dir: PathBuf,
}

impl ChecksumConfigs {
    pub fn new(artifact_name: impl Into<String>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            artifact_name: artifact_name.into(),
            target_dir: target_dir.into(),
        }
    }

    /// `<project>/target/<project>.jar`, named after the project directory.
    pub fn from_project_dir<P: AsRef<Path>>(project_dir: P) -> Result<Self> {
        let project_dir = project_dir.as_ref();
        let base_name = project_dir
            .file_name()
            .ok_or_else(|| anyhow!("{} has no base name", project_dir.display()))?
            .to_str()
            .ok_or_else(|| anyhow!("{} is not valid UTF-8", project_dir.display()))?;

        Ok(Self::new(
            format!("{}.{}", base_name, ARTIFACT_EXTENSION),
            project_dir.join(TARGET_DIR),
        ))
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.target_dir.join(&self.artifact_name)
    }
}

/// Derives the configs from the current working directory, which must be the
/// project's base directory.
pub fn parse_checksum_configs() -> Result<ChecksumConfigs> {
    let project_dir = env::current_dir().context("Failed to read current directory")?;
    ChecksumConfigs::from_project_dir(project_dir)
}
