// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, ErrorContext, InfraResult, InfrastructureError, ManifestError, Result,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::{
    ExtensionFilter, FileExtension, FileMeta, FileName, FileSize, ModificationTime, TimestampStyle,
};
