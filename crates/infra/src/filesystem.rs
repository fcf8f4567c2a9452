// crates/infra/src/filesystem.rs
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use vault_manifest_ports::filesystem::{
    DirectoryListing, DirectoryReader, FileEntryDto, SubfolderDto,
};
use vault_manifest_shared_kernel::{InfraResult, InfrastructureError, Result};

/// What a directory entry resolved to after following symlinks.
#[derive(Debug)]
pub(crate) enum EntryKind {
    Dir,
    File { size: u64, mtime: Option<DateTime<Local>> },
}

/// Immediate children of `dir` that are directories or regular files.
///
/// Symlinks are followed. Entries that vanish between listing and `stat`
/// (dangling links, races with deletion) are skipped with a warning, special
/// files are ignored. Any other metadata failure is an error.
pub(crate) fn read_children(dir: &Path) -> InfraResult<Vec<(String, PathBuf, EntryKind)>> {
    let read_err = |source| InfrastructureError::DirectoryRead { path: dir.to_path_buf(), source };

    let mut children = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::warn!("skipping {}: {err}", path.display());
                continue;
            }
            Err(source) => return Err(InfrastructureError::Metadata { path, source }),
        };

        let kind = if metadata.is_dir() {
            EntryKind::Dir
        } else if metadata.is_file() {
            EntryKind::File {
                size: metadata.len(),
                mtime: metadata.modified().ok().map(DateTime::<Local>::from),
            }
        } else {
            log::debug!("ignoring special file {}", path.display());
            continue;
        };

        let raw = entry.file_name();
        let name = match raw.to_str() {
            Some(name) => name.to_string(),
            None => {
                log::warn!("non UTF-8 name under {}, using lossy form", dir.display());
                raw.to_string_lossy().into_owned()
            }
        };
        children.push((name, path, kind));
    }
    Ok(children)
}

fn file_entries(dir: &Path) -> InfraResult<Vec<FileEntryDto>> {
    Ok(read_children(dir)?
        .into_iter()
        .filter_map(|(name, _, kind)| match kind {
            EntryKind::File { size, mtime } => Some(FileEntryDto { name, size, mtime }),
            EntryKind::Dir => None,
        })
        .collect())
}

/// Filesystem adapter implementing the `DirectoryReader` port with `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDirectoryReader;

impl StdDirectoryReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read(root: &Path) -> InfraResult<DirectoryListing> {
        let mut listing = DirectoryListing::default();
        for (name, path, kind) in read_children(root)? {
            match kind {
                EntryKind::Dir => {
                    let files = file_entries(&path)?;
                    listing.subfolders.push(SubfolderDto { name, files });
                }
                EntryKind::File { size, mtime } => {
                    listing.files.push(FileEntryDto { name, size, mtime });
                }
            }
        }
        Ok(listing)
    }
}

impl DirectoryReader for StdDirectoryReader {
    fn is_dir(&self, root: &Path) -> bool {
        root.is_dir()
    }

    fn list(&self, root: &Path) -> Result<DirectoryListing> {
        Ok(Self::read(root)?)
    }
}
