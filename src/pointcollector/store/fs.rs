use super::{format, TeamStore};
use crate::error::{PointsError, Result};
use crate::registry::Registry;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_DATA_FILE: &str = "teams.json";

/// Stores the registry as a single JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    /// Writes to a temp file next to the target, then renames it into place.
    fn write_atomic(&self, content: &str) -> Result<()> {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        let tmp = self
            .path
            .with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()));
        fs::write(&tmp, content)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(PointsError::Io(e));
        }
        Ok(())
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl TeamStore for FileStore {
    fn save(&mut self, registry: &Registry) -> Result<()> {
        self.ensure_parent()?;
        let content = format::encode(registry)?;
        self.write_atomic(&content)?;
        info!(path = %self.path.display(), teams = registry.len(), "saved teams");
        Ok(())
    }

    fn load(&self) -> Result<Registry> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(PointsError::FileNotFound(self.path.clone()))
            }
            Err(e) => return Err(PointsError::Io(e)),
        };
        let registry = format::decode(&content)?;
        info!(path = %self.path.display(), teams = registry.len(), "loaded teams");
        Ok(registry)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
