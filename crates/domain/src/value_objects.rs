//! Value objects re-exported from the shared kernel.

pub use vault_manifest_shared_kernel::value_objects::{
    ExtensionFilter, FileExtension, FileMeta, FileName, FileSize, ModificationTime, TimestampStyle,
};
