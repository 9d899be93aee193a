use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Directories a prediction workflow writes into.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkflowConfig {
    pub output_dir: Option<PathBuf>,
    pub tmp_dir: Option<PathBuf>,
}

impl WorkflowConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Workflow config is not valid YAML")
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Workflow config is not valid TOML")
    }

    /// Both required directories, or an error naming the missing keys.
    pub fn directories(&self) -> Result<[&Path; 2]> {
        match (&self.output_dir, &self.tmp_dir) {
            (Some(output), Some(tmp)) => Ok([output.as_path(), tmp.as_path()]),
            _ => bail!("'output_dir' or 'tmp_dir' is missing in the config file"),
        }
    }
}

/// Loads a workflow config; `.toml` files are read as TOML and anything else
/// as YAML, the format of the pipeline's `config.yaml`.
pub fn load_workflow_config(path: &Path) -> Result<WorkflowConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read workflow config: {}", path.display()))?;
    let parsed = if path.extension().is_some_and(|ext| ext == "toml") {
        WorkflowConfig::from_toml(&text)
    } else {
        WorkflowConfig::from_yaml(&text)
    };
    parsed.with_context(|| format!("Failed to parse workflow config: {}", path.display()))
}
