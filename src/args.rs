// src/args.rs
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;
use vault_manifest_shared_kernel::TimestampStyle;

#[derive(Parser, Debug)]
#[command(
    name = "vault_manifest",
    version,
    about = "Scan a vault or visualisations folder and write file_structure.json"
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Variant to run; defaults to `vault`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(ClapArgs, Debug)]
pub struct GlobalOptions {
    /// Directory holding the scanned folder and the manifest
    #[arg(long, global = true, default_value = ".", value_hint = ValueHint::DirPath)]
    pub base_dir: PathBuf,

    /// Manifest file, relative to --base-dir unless absolute
    #[arg(
        long,
        global = true,
        default_value = "file_structure.json",
        value_hint = ValueHint::FilePath
    )]
    pub output: PathBuf,

    /// Rendering of the `modified` field
    #[arg(long, global = true, value_enum, default_value = "day-first")]
    pub timestamp_format: TimestampFormat,

    /// Only print warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print debug detail
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Index every file under vault/
    Vault,
    /// Copy .html files into visualisations/, then index them
    Visualisations(VisualisationsArgs),
}

#[derive(ClapArgs, Debug, Clone, PartialEq, Eq)]
pub struct VisualisationsArgs {
    /// Directory to copy .html files from (root plus one subfolder level)
    #[arg(long, required_unless_present = "no_copy", value_hint = ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Skip the copy step and index visualisations/ as it is
    #[arg(long, conflicts_with = "source")]
    pub no_copy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum TimestampFormat {
    /// dd/mm/yyyy, hh:mm:ss AM/PM
    DayFirst,
    /// mm/dd/yy, hh:mm:ss AM/PM
    MonthFirst,
    /// yyyy-mm-ddThh:mm:ss
    Iso8601,
}

impl From<TimestampFormat> for TimestampStyle {
    fn from(value: TimestampFormat) -> Self {
        match value {
            TimestampFormat::DayFirst => Self::DayFirst,
            TimestampFormat::MonthFirst => Self::MonthFirst,
            TimestampFormat::Iso8601 => Self::Iso8601,
        }
    }
}
