// crates/ports/src/copy.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vault_manifest_shared_kernel::{ExtensionFilter, Result};

/// What to copy and where.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyPlan {
    pub source: PathBuf,
    /// Must not be the source itself or lie inside it.
    pub destination: PathBuf,
    /// Same predicate the following scan applies.
    pub filter: ExtensionFilter,
}

/// Files written by a completed copy, relative to the destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyReport {
    pub copied: Vec<PathBuf>,
    pub bytes: u64,
}

/// Port for copying a source tree (root plus one subfolder level) into a destination.
///
/// Implementations enumerate everything before writing anything.
pub trait TreeCopier: Send + Sync {
    fn copy(&self, plan: &CopyPlan) -> Result<CopyReport>;
}
