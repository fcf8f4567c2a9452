// crates/infra/src/progress.rs
use std::{
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
};

use vault_manifest_ports::progress::ProgressSink;
use vault_manifest_shared_kernel::Result;

/// Reports progress through the `log` facade at `info` level.
#[derive(Debug, Default)]
pub struct LogProgress {
    copied: AtomicUsize,
    scanned: AtomicUsize,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scanned(&self) -> usize {
        self.scanned.load(Ordering::Relaxed)
    }
}

impl ProgressSink for LogProgress {
    fn on_copied(&self, relative: &Path) -> Result<()> {
        self.copied.fetch_add(1, Ordering::Relaxed);
        log::info!("  copied {}", relative.display());
        Ok(())
    }

    fn on_file(&self, group: Option<&str>, name: &str) -> Result<()> {
        self.scanned.fetch_add(1, Ordering::Relaxed);
        match group {
            Some(group) => log::info!("  ✓ {group}/{name}"),
            None => log::info!("  ✓ {name}"),
        }
        Ok(())
    }

    fn on_complete(&self) -> Result<()> {
        log::debug!(
            "progress: {} copied, {} scanned",
            self.copied.load(Ordering::Relaxed),
            self.scanned()
        );
        Ok(())
    }
}
