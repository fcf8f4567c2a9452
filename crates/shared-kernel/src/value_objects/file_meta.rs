// crates/shared-kernel/src/value_objects/file_meta.rs
use super::{FileExtension, FileName, FileSize, ModificationTime};

/// Minimal file metadata captured during a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: FileName,
    pub size: FileSize,
    pub mtime: ModificationTime,
    pub ext: FileExtension,
}

impl FileMeta {
    /// Derives the extension from `name`; everything else is taken as given.
    pub fn new(name: impl Into<String>, size: u64, mtime: ModificationTime) -> Self {
        let name = FileName::new(name.into());
        let ext = name.extension();
        Self { name, size: FileSize::new(size), mtime, ext }
    }
}
