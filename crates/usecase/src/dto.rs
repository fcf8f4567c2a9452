use std::path::PathBuf;

use vault_manifest_domain::ManifestSummary;
use vault_manifest_ports::copy::{CopyPlan, CopyReport};

/// Input for one generate run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Directory to scan.
    pub root: PathBuf,
    /// Copy step to run first, if any.
    pub copy: Option<CopyPlan>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing matched; the output file was not touched.
    Empty,
    Written { location: PathBuf, summary: ManifestSummary },
}

#[derive(Debug, Clone)]
pub struct GenerateOutput {
    pub copy: Option<CopyReport>,
    pub outcome: Outcome,
}
