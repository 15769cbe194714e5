//! Filesystem-backed artifact store

use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::PathBuf;

use tracing::debug;

use super::ArtifactStore;
use crate::error::{FilterError, Result};

/// Stores each artifact as one file under a root directory
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    root: PathBuf,
}

impl FsArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }
}

impl ArtifactStore for FsArtifactStore {
    fn save(&self, name: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.path_for(name);

        // The handle is scoped to this call and closed on every exit path
        let mut file = File::create(&path)?;
        file.write_all(bytes)?;
        file.sync_all()?;

        debug!(artifact = name, path = %path.display(), size = bytes.len(), "artifact saved");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.path_for(name);
        let mut file = File::open(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                FilterError::ArtifactNotFound(name.to_string())
            } else {
                FilterError::Io(e)
            }
        })?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        debug!(artifact = name, size = bytes.len(), "artifact loaded");
        Ok(bytes)
    }
}
