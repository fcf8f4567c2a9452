// crates/infra/src/copier.rs
use std::{
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use vault_manifest_ports::copy::{CopyPlan, CopyReport, TreeCopier};
use vault_manifest_shared_kernel::{DomainError, InfraResult, InfrastructureError, Result};

use crate::filesystem::{EntryKind, read_children};

/// Copies matching files from the source root and its immediate subfolders.
///
/// The full file list is built before the first byte is written, so a listing
/// failure leaves the destination untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsTreeCopier;

struct PendingCopy {
    from: PathBuf,
    relative: PathBuf,
}

impl FsTreeCopier {
    pub fn new() -> Self {
        Self
    }

    /// Refuses plans whose destination resolves to the source or below it.
    ///
    /// Copying a file onto itself truncates it, and a destination inside the
    /// source would be copied into itself one level down.
    fn check_disjoint(plan: &CopyPlan) -> Result<()> {
        let origin = canonical(&plan.source)?;
        let destination = canonical(&plan.destination)?;

        if destination.starts_with(&origin) {
            return Err(DomainError::OverlappingCopy {
                origin: plan.source.clone(),
                destination: plan.destination.clone(),
            }
            .into());
        }
        Ok(())
    }

    fn enumerate(plan: &CopyPlan) -> Result<Vec<PendingCopy>> {
        let mut pending = Vec::new();
        for (name, path, kind) in read_children(&plan.source)? {
            match kind {
                EntryKind::File { .. } => {
                    if plan.filter.accepts_name(&name) {
                        pending.push(PendingCopy { from: path, relative: PathBuf::from(name) });
                    }
                }
                EntryKind::Dir => {
                    for (child, child_path, child_kind) in read_children(&path)? {
                        if matches!(child_kind, EntryKind::File { .. })
                            && plan.filter.accepts_name(&child)
                        {
                            pending.push(PendingCopy {
                                from: child_path,
                                relative: Path::new(&name).join(child),
                            });
                        }
                    }
                }
            }
        }
        pending.sort_by(|a, b| a.relative.cmp(&b.relative));
        Ok(pending)
    }
}

/// Canonical form of `path`; a missing tail is re-attached to its nearest
/// existing ancestor.
fn resolve(path: &Path) -> io::Result<PathBuf> {
    match path.canonicalize() {
        Ok(resolved) => Ok(resolved),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            let Some(name) = path.file_name() else {
                return Err(err);
            };
            let parent = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            Ok(resolve(parent)?.join(name))
        }
        Err(err) => Err(err),
    }
}

fn canonical(path: &Path) -> InfraResult<PathBuf> {
    resolve(path)
        .map_err(|source| InfrastructureError::Metadata { path: path.to_path_buf(), source })
}

fn same_file(a: &Path, b: &Path) -> bool {
    matches!((a.canonicalize(), b.canonicalize()), (Ok(a), Ok(b)) if a == b)
}

impl TreeCopier for FsTreeCopier {
    fn copy(&self, plan: &CopyPlan) -> Result<CopyReport> {
        if !plan.source.is_dir() {
            return Err(DomainError::SourceNotFound { path: plan.source.clone() }.into());
        }
        Self::check_disjoint(plan)?;

        let pending = Self::enumerate(plan)?;
        log::debug!("{} file(s) to copy from {}", pending.len(), plan.source.display());
        fs::create_dir_all(&plan.destination).map_err(|source| InfrastructureError::FileWrite {
            path: plan.destination.clone(),
            source,
        })?;

        let mut report = CopyReport::default();
        for item in pending {
            let to = plan.destination.join(&item.relative);
            // A symlink in the source may point straight at its own target.
            if same_file(&item.from, &to) {
                log::warn!(
                    "skipping {}: already the file at {}",
                    item.from.display(),
                    to.display()
                );
                continue;
            }
            let copy_err = |source| InfrastructureError::FileCopy {
                from: item.from.clone(),
                to: to.clone(),
                source,
            };
            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent).map_err(copy_err)?;
            }
            report.bytes += fs::copy(&item.from, &to).map_err(copy_err)?;
            report.copied.push(item.relative);
        }
        Ok(report)
    }
}
