// crates/domain/src/model/entities/manifest.rs
use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

use super::FileDescriptor;
use crate::model::ManifestSummary;

/// Group label → descriptors. Keys iterate (and serialise) in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest(BTreeMap<String, Vec<FileDescriptor>>);

impl Manifest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `files` to `label`, keeping the group sorted by name.
    ///
    /// An empty batch never creates a group.
    pub fn extend_group(&mut self, label: &str, files: Vec<FileDescriptor>) {
        if files.is_empty() {
            return;
        }
        let group = self.0.entry(label.to_string()).or_default();
        group.extend(files);
        group.sort_by(|a, b| a.name.cmp(&b.name));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn total_files(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn group(&self, label: &str) -> Option<&[FileDescriptor]> {
        self.0.get(label).map(Vec::as_slice)
    }

    pub fn groups(&self) -> btree_map::Iter<'_, String, Vec<FileDescriptor>> {
        self.0.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn summary(&self) -> ManifestSummary {
        ManifestSummary::from_manifest(self)
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = (&'a String, &'a Vec<FileDescriptor>);
    type IntoIter = btree_map::Iter<'a, String, Vec<FileDescriptor>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups()
    }
}
