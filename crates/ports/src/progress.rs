use std::path::Path;

use vault_manifest_shared_kernel::Result;

pub trait ProgressSink: Send + Sync {
    fn on_copied(&self, relative: &Path) -> Result<()>;
    fn on_file(&self, group: Option<&str>, name: &str) -> Result<()>;
    fn on_complete(&self) -> Result<()>;
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_copied(&self, _relative: &Path) -> Result<()> {
        Ok(())
    }

    fn on_file(&self, _group: Option<&str>, _name: &str) -> Result<()> {
        Ok(())
    }

    fn on_complete(&self) -> Result<()> {
        Ok(())
    }
}
