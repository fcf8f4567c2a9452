// crates/ports/src/filesystem.rs
use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use vault_manifest_shared_kernel::Result;

/// DTO representing a regular file discovered by a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntryDto {
    pub name: String,
    pub size: u64,
    pub mtime: Option<DateTime<Local>>,
}

/// A subdirectory of the root with its immediate regular files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubfolderDto {
    pub name: String,
    pub files: Vec<FileEntryDto>,
}

/// Root contents, one level deep. No ordering is promised.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryListing {
    pub subfolders: Vec<SubfolderDto>,
    pub files: Vec<FileEntryDto>,
}

/// Port for reading a scan root.
pub trait DirectoryReader: Send + Sync {
    /// True when `root` exists and is a directory.
    fn is_dir(&self, root: &Path) -> bool;

    fn list(&self, root: &Path) -> Result<DirectoryListing>;
}
