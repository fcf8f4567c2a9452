// crates/domain/src/model/value_objects/snapshot.rs
use crate::value_objects::FileMeta;

/// Immediate contents of a scan root, one level of subfolders deep.
///
/// Order is whatever the filesystem returned; grouping sorts.
#[derive(Debug, Clone, Default)]
pub struct DirectorySnapshot {
    pub subfolders: Vec<Subfolder>,
    pub files: Vec<FileMeta>,
}

/// A subfolder of the root and the regular files directly inside it.
#[derive(Debug, Clone)]
pub struct Subfolder {
    pub name: String,
    pub files: Vec<FileMeta>,
}

impl DirectorySnapshot {
    #[must_use]
    pub fn has_subfolders(&self) -> bool {
        !self.subfolders.is_empty()
    }
}
