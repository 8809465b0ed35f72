use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::models::folder::FolderType;

/// Resolved root directories, built once at startup and passed by
/// reference into every listing call.
#[derive(Debug, Clone)]
pub struct FolderRoots {
    collections: PathBuf,
    sources: PathBuf,
    outputs: PathBuf,
}

impl FolderRoots {
    pub fn new(collections: PathBuf, sources: PathBuf, outputs: PathBuf) -> Self {
        Self {
            collections,
            sources,
            outputs,
        }
    }

    pub fn resolve(&self, folder_type: FolderType) -> &Path {
        match folder_type {
            FolderType::Collections => &self.collections,
            FolderType::Sources => &self.sources,
            FolderType::Outputs => &self.outputs,
        }
    }

    pub fn ensure_created(&self) -> Result<(), AppError> {
        for root in [&self.collections, &self.sources, &self.outputs] {
            fs::create_dir_all(root)?;
        }
        Ok(())
    }
}
