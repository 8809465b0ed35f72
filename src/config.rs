use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;

pub const DEFAULT_GIT_REMOTE: &str = "origin";

/// Optional plugin configuration, read from a JSON file next to the
/// plugin. A missing file means all defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowserConfig {
    #[serde(default)]
    pub outputs_dir: Option<PathBuf>,
    #[serde(default)]
    pub git_remote: Option<String>,
}

impl BrowserConfig {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn remote_name(&self) -> &str {
        self.git_remote.as_deref().unwrap_or(DEFAULT_GIT_REMOTE)
    }
}
