use std::path::Path;

use vault_manifest_domain::{
    DirectorySnapshot, Manifest, ManifestBuilder, Subfolder,
    value_objects::{FileMeta, ModificationTime},
};
use vault_manifest_ports::{
    copy::{CopyPlan, CopyReport, TreeCopier},
    filesystem::{DirectoryListing, DirectoryReader, FileEntryDto},
    output::ManifestSink,
    progress::ProgressSink,
};
use vault_manifest_shared_kernel::{DomainError, ErrorContext, Result};

use crate::dto::{GenerateOutput, GenerateRequest, Outcome};

/// Scans a root and groups it into a [`Manifest`].
pub struct BuildManifest<'a> {
    reader: &'a dyn DirectoryReader,
    progress: &'a dyn ProgressSink,
}

impl<'a> BuildManifest<'a> {
    pub fn new(reader: &'a dyn DirectoryReader, progress: &'a dyn ProgressSink) -> Self {
        Self { reader, progress }
    }

    pub fn run(&self, root: &Path, builder: &ManifestBuilder) -> Result<Manifest> {
        if !self.reader.is_dir(root) {
            return Err(DomainError::RootNotFound { path: root.to_path_buf() }.into());
        }

        log::debug!("scanning {}", root.display());
        let listing = self.reader.list(root)?;
        let manifest = builder.build(listing_to_snapshot(listing));

        for file in manifest.groups().flat_map(|(_, files)| files) {
            self.progress.on_file(file.folder(), &file.name)?;
        }
        Ok(manifest)
    }
}

/// Copies filtered files from an external source into the scan root.
pub struct CopySources<'a> {
    copier: &'a dyn TreeCopier,
    reader: &'a dyn DirectoryReader,
    progress: &'a dyn ProgressSink,
}

impl<'a> CopySources<'a> {
    pub fn new(
        copier: &'a dyn TreeCopier,
        reader: &'a dyn DirectoryReader,
        progress: &'a dyn ProgressSink,
    ) -> Self {
        Self { copier, reader, progress }
    }

    pub fn run(&self, plan: &CopyPlan) -> Result<CopyReport> {
        if !self.reader.is_dir(&plan.source) {
            return Err(DomainError::SourceNotFound { path: plan.source.clone() }.into());
        }

        log::debug!("copying {} -> {}", plan.source.display(), plan.destination.display());
        let report = self.copier.copy(plan)?;
        for relative in &report.copied {
            self.progress.on_copied(relative)?;
        }
        Ok(report)
    }
}

/// Copy (optional), scan, then persist unless the result is empty.
pub struct GenerateManifest<'a> {
    reader: &'a dyn DirectoryReader,
    copier: &'a dyn TreeCopier,
    sink: &'a dyn ManifestSink,
    progress: &'a dyn ProgressSink,
}

impl<'a> GenerateManifest<'a> {
    pub fn new(
        reader: &'a dyn DirectoryReader,
        copier: &'a dyn TreeCopier,
        sink: &'a dyn ManifestSink,
        progress: &'a dyn ProgressSink,
    ) -> Self {
        Self { reader, copier, sink, progress }
    }

    pub fn run(
        &self,
        request: &GenerateRequest,
        builder: &ManifestBuilder,
    ) -> Result<GenerateOutput> {
        let copy = match &request.copy {
            Some(plan) => {
                Some(CopySources::new(self.copier, self.reader, self.progress).run(plan)?)
            }
            None => None,
        };

        let manifest = BuildManifest::new(self.reader, self.progress).run(&request.root, builder)?;
        self.progress.on_complete()?;

        if manifest.is_empty() {
            return Ok(GenerateOutput { copy, outcome: Outcome::Empty });
        }

        let contents = render_manifest(&manifest)?;
        self.sink
            .persist(&contents)
            .with_context(|| format!("saving manifest to {}", self.sink.location().display()))?;

        let outcome = Outcome::Written {
            location: self.sink.location().to_path_buf(),
            summary: manifest.summary(),
        };
        Ok(GenerateOutput { copy, outcome })
    }
}

/// 2-space indented JSON, no trailing newline.
pub fn render_manifest(manifest: &Manifest) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(manifest)?)
}

fn listing_to_snapshot(listing: DirectoryListing) -> DirectorySnapshot {
    DirectorySnapshot {
        subfolders: listing
            .subfolders
            .into_iter()
            .map(|dir| Subfolder {
                name: dir.name,
                files: dir.files.into_iter().map(port_to_domain_meta).collect(),
            })
            .collect(),
        files: listing.files.into_iter().map(port_to_domain_meta).collect(),
    }
}

fn port_to_domain_meta(entry: FileEntryDto) -> FileMeta {
    let mtime = entry
        .mtime
        .map_or_else(|| ModificationTime::from_system_time(None), ModificationTime::new);
    FileMeta::new(entry.name, entry.size, mtime)
}
