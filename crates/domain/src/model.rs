pub mod entities;
pub mod value_objects;

pub use entities::{FileDescriptor, Manifest};
pub use value_objects::{DirectorySnapshot, ManifestSummary, Subfolder};

pub use crate::value_objects::FileMeta;
