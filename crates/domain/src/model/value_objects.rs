pub mod snapshot;
pub mod summary;

pub use snapshot::{DirectorySnapshot, Subfolder};
pub use summary::ManifestSummary;
