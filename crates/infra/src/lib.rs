// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod copier;
pub mod filesystem;
pub mod persistence;
pub mod progress;

pub use copier::FsTreeCopier;
pub use filesystem::StdDirectoryReader;
pub use persistence::{FileWriter, JsonManifestFile};
pub use progress::LogProgress;
