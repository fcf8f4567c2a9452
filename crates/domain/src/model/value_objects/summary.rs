use serde::Serialize;

use crate::model::Manifest;

/// File counts per emitted group, in manifest order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestSummary {
    pub groups: Vec<(String, usize)>,
    pub files: usize,
}

impl ManifestSummary {
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let groups: Vec<_> =
            manifest.groups().map(|(label, files)| (label.clone(), files.len())).collect();
        let files = groups.iter().map(|(_, n)| n).sum();
        Self { groups, files }
    }
}
