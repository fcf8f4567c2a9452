pub mod file_info;
pub mod filter;
pub mod file_meta;
pub mod timestamp;

pub use file_info::{FileExtension, FileName, FileSize};
pub use file_meta::FileMeta;
pub use filter::ExtensionFilter;
pub use timestamp::{ModificationTime, TimestampStyle};
