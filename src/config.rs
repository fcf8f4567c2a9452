// src/config.rs
use crate::args::{Args, Command};
use derive_builder::Builder;
use log::LevelFilter;
use std::path::PathBuf;
use vault_manifest_domain::Variant;
use vault_manifest_ports::copy::CopyPlan;
use vault_manifest_shared_kernel::TimestampStyle;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub variant: Variant,
    /// Folder that gets scanned (and copied into).
    pub root: PathBuf,
    /// Manifest destination.
    pub output: PathBuf,
    #[builder(default)]
    pub copy_source: Option<PathBuf>,
    #[builder(default)]
    pub timestamp_style: TimestampStyle,
    #[builder(default = "LevelFilter::Info")]
    pub log_level: LevelFilter,
    #[builder(default)]
    pub quiet: bool,
}

impl Config {
    /// Copy step for this run, filtered the way the variant scans.
    pub fn copy_plan(&self) -> Option<CopyPlan> {
        let profile = self.variant.profile();
        self.copy_source.as_ref().map(move |source| CopyPlan {
            source: source.clone(),
            destination: self.root.clone(),
            filter: profile.filter,
        })
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigBuilderError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let global = args.global;
        let (variant, copy_source) = match args.command.unwrap_or(Command::Vault) {
            Command::Vault => (Variant::Vault, None),
            Command::Visualisations(vis) => {
                let source = if vis.no_copy { None } else { vis.source };
                (Variant::Visualisations, source)
            }
        };

        let root = global.base_dir.join(variant.profile().root_label);
        // `join` keeps absolute outputs as they are.
        let output = global.base_dir.join(&global.output);

        let log_level = if global.quiet {
            LevelFilter::Warn
        } else if global.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        ConfigBuilder::default()
            .variant(variant)
            .root(root)
            .output(output)
            .copy_source(copy_source)
            .timestamp_style(TimestampStyle::from(global.timestamp_format))
            .log_level(log_level)
            .quiet(global.quiet)
            .build()
    }
}
