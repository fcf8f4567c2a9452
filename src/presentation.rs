// src/presentation.rs
use crate::config::Config;
use vault_manifest_shared_kernel::{DomainError, FileSize, ManifestError};
use vault_manifest_usecase::{GenerateOutput, Outcome};

pub fn print_report(output: &GenerateOutput, config: &Config) {
    let label = config.variant.profile().root_label;

    if let Some(copy) = &output.copy {
        log::info!(
            "Copied {} file(s), {} into {}",
            copy.copied.len(),
            FileSize::new(copy.bytes).to_human(),
            config.root.display()
        );
    }

    match &output.outcome {
        Outcome::Empty => {
            log::warn!(
                "No folders or files found in {label} folder; {} left untouched",
                config.output.display()
            );
        }
        Outcome::Written { location, summary } => {
            if config.quiet {
                return;
            }
            let file_name = location.file_name().map_or_else(
                || location.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            );
            println!("File structure saved to {file_name}");
            println!("   Found {} folders:", summary.groups.len());
            for (group, count) in &summary.groups {
                println!("     - {group}: {count} files");
            }
            println!("   Total: {} files", summary.files);
        }
    }
}

/// Logs the failure, adding a hint for the anticipated precondition errors.
pub fn report_error(err: &anyhow::Error, config: &Config) {
    log::error!("{err:#}");

    let domain = err.downcast_ref::<ManifestError>().and_then(ManifestError::domain);
    match domain {
        Some(DomainError::RootNotFound { .. }) => {
            let label = config.variant.profile().root_label;
            log::error!("Please create a '{label}' folder and add your files there.");
        }
        Some(DomainError::SourceNotFound { .. }) => {
            log::error!("Check the --source path; nothing was copied or written.");
        }
        Some(DomainError::OverlappingCopy { .. }) => {
            let label = config.variant.profile().root_label;
            log::error!("Point --source outside the '{label}' folder, or use --no-copy.");
        }
        None => {}
    }
}
