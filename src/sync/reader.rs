use std::path::{Path, PathBuf};

use crate::error::SyncError;
use crate::utils::logger::{LogLevel, Logger};

/// Well-known locations of the four artifact categories, relative to the
/// project root. Absence of pages, assets or metadata is an expected skip
/// condition; only the installed addon manifest is mandatory, and only
/// during release creation.
#[derive(Debug, Clone)]
pub struct WebSources {
    root: PathBuf,
}

impl WebSources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        WebSources { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn metadata_file(&self) -> PathBuf {
        self.root.join("web").join("pack.yml")
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.root.join("web").join("pages")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root.join("web").join("assets")
    }

    pub fn manifest_file(&self) -> PathBuf {
        self.root.join("minecraftinstance.json")
    }

    pub fn mods_dir(&self) -> PathBuf {
        self.root.join("mods")
    }

    pub fn has_metadata(&self) -> bool {
        let present = self.metadata_file().is_file();
        if !present {
            Logger::new().log_message(
                LogLevel::Warning,
                &format!(
                    "No pack metadata at '{}', skipping metadata sync",
                    self.metadata_file().display()
                ),
            );
        }
        present
    }

    pub fn page_files(&self) -> Result<Vec<PathBuf>, SyncError> {
        self.list_dir(&self.pages_dir(), "pages")
    }

    pub fn asset_files(&self) -> Result<Vec<PathBuf>, SyncError> {
        self.list_dir(&self.assets_dir(), "assets")
    }

    /// Lists the files of one category directory, sorted by name so repeated
    /// runs issue identical request sets. A missing directory yields an empty
    /// list and a warning, never an error.
    fn list_dir(&self, dir: &Path, what: &str) -> Result<Vec<PathBuf>, SyncError> {
        if !dir.is_dir() {
            Logger::new().log_message(
                LogLevel::Warning,
                &format!("No {} directory at '{}', skipping", what, dir.display()),
            );
            return Ok(Vec::new());
        }

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| SyncError::io(dir, e))? {
            let entry = entry.map_err(|e| SyncError::io(dir, e))?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
