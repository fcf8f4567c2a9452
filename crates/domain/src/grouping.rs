// crates/domain/src/grouping.rs
use crate::{
    config::VariantProfile,
    model::{DirectorySnapshot, FileDescriptor, Manifest},
    value_objects::{FileMeta, TimestampStyle},
};

/// Turns a [`DirectorySnapshot`] into a [`Manifest`] for one variant.
///
/// Rules:
/// - every subfolder with at least one accepted file becomes a group named after it;
/// - accepted direct files go under the direct-files sentinel when the root has
///   subfolders (even ones that end up empty), otherwise under the flat sentinel;
/// - groups with no accepted files are never emitted;
/// - descriptors are sorted by name within each group.
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    profile: VariantProfile,
    style: TimestampStyle,
}

impl ManifestBuilder {
    #[must_use]
    pub fn new(profile: VariantProfile, style: TimestampStyle) -> Self {
        Self { profile, style }
    }

    #[must_use]
    pub fn build(&self, snapshot: DirectorySnapshot) -> Manifest {
        let sentinel = self.profile.sentinel(snapshot.has_subfolders());
        let mut manifest = Manifest::new();

        let mut subfolders = snapshot.subfolders;
        subfolders.sort_by(|a, b| a.name.cmp(&b.name));
        for folder in subfolders {
            let files = self.describe(folder.files, Some(folder.name.as_str()));
            manifest.extend_group(&folder.name, files);
        }

        let direct = self.describe(snapshot.files, None);
        manifest.extend_group(sentinel, direct);

        manifest
    }

    fn describe(&self, mut files: Vec<FileMeta>, group: Option<&str>) -> Vec<FileDescriptor> {
        files.retain(|meta| self.profile.filter.accepts(&meta.ext));
        files.sort_by(|a, b| a.name.cmp(&b.name));
        files
            .iter()
            .map(|meta| FileDescriptor::describe(meta, self.profile.root_label, group, self.style))
            .collect()
    }
}
