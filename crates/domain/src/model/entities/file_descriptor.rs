// crates/domain/src/model/entities/file_descriptor.rs
use serde::{Deserialize, Serialize};
use vault_manifest_shared_kernel::path::logical_join;

use crate::value_objects::{FileMeta, TimestampStyle};

/// One manifest entry. Field order here is the JSON field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size: String,
    pub modified: String,
    /// Logical `<root>/[<group>/]<name>` path for the website, always `/`-separated.
    pub path: String,
}

impl FileDescriptor {
    #[must_use]
    pub fn describe(
        meta: &FileMeta,
        root_label: &str,
        group: Option<&str>,
        style: TimestampStyle,
    ) -> Self {
        let name = meta.name.as_str();
        let path = match group {
            Some(group) => logical_join([root_label, group, name]),
            None => logical_join([root_label, name]),
        };
        Self {
            name: name.to_string(),
            size: meta.size.to_human(),
            modified: meta.mtime.format(style),
            path,
        }
    }

    /// Subfolder the file was found in, read back from `path`; `None` for
    /// files lying directly in the root.
    #[must_use]
    pub fn folder(&self) -> Option<&str> {
        let (_, below_root) = self.path.split_once('/')?;
        below_root.rsplit_once('/').map(|(folder, _)| folder)
    }
}
