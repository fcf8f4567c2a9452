// src/app.rs
use crate::config::Config;
use anyhow::{Context, Result};
use vault_manifest_domain::ManifestBuilder;
use vault_manifest_infra::{FsTreeCopier, JsonManifestFile, LogProgress, StdDirectoryReader};
use vault_manifest_usecase::{GenerateManifest, GenerateOutput, GenerateRequest};

pub fn run(config: &Config) -> Result<GenerateOutput> {
    let profile = config.variant.profile();
    let builder = ManifestBuilder::new(profile.clone(), config.timestamp_style);

    let reader = StdDirectoryReader::new();
    let copier = FsTreeCopier::new();
    let sink = JsonManifestFile::new(&config.output);
    let progress = LogProgress::new();

    let request = GenerateRequest { root: config.root.clone(), copy: config.copy_plan() };
    if let Some(plan) = &request.copy {
        let wanted = plan.filter.extension().map_or_else(|| "all".to_string(), ToString::to_string);
        log::info!("Copying {wanted} files from {}", plan.source.display());
    }
    log::info!("Scanning {} folder...", profile.root_label);

    GenerateManifest::new(&reader, &copier, &sink, &progress)
        .run(&request, &builder)
        .with_context(|| format!("{} run failed", profile.root_label))
}
