//! Artifact persistence
//!
//! Fitted artifacts move between the training and serving processes as
//! opaque named blobs. The store contract stays byte-oriented; the JSON
//! helpers layer the artifact encoding on top so it can change without
//! touching implementors.

pub mod fs;

pub use fs::FsArtifactStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Save/load contract for named opaque blobs
pub trait ArtifactStore: Send + Sync {
    /// Persist `bytes` under `name`, replacing any previous blob
    fn save(&self, name: &str, bytes: &[u8]) -> Result<()>;

    /// Load the blob stored under `name`; fails with `ArtifactNotFound`
    /// when the name is absent
    fn load(&self, name: &str) -> Result<Vec<u8>>;

    /// Serialize an artifact to JSON and save it
    fn save_json<T: Serialize>(&self, name: &str, artifact: &T) -> Result<()> {
        let bytes = serde_json::to_vec(artifact)?;
        self.save(name, &bytes)
    }

    /// Load and deserialize a JSON artifact
    fn load_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let bytes = self.load(name)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
