// crates/infra/src/persistence/manifest_file.rs
use std::path::{Path, PathBuf};

use vault_manifest_ports::output::ManifestSink;
use vault_manifest_shared_kernel::{InfrastructureError, Result};

use super::FileWriter;

/// The on-disk manifest, replaced atomically on each write.
#[derive(Debug, Clone)]
pub struct JsonManifestFile {
    path: PathBuf,
}

impl JsonManifestFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ManifestSink for JsonManifestFile {
    fn location(&self) -> &Path {
        &self.path
    }

    fn persist(&self, contents: &[u8]) -> Result<()> {
        FileWriter::atomic_write(&self.path, contents).map_err(|source| {
            InfrastructureError::FileWrite { path: self.path.clone(), source }
        })?;
        log::debug!("wrote {} bytes to {}", contents.len(), self.path.display());
        Ok(())
    }
}
