// crates/ports/src/output.rs
use std::path::Path;

use vault_manifest_shared_kernel::Result;

/// Port for persisting the rendered manifest document.
pub trait ManifestSink: Send + Sync {
    /// Where the document ends up, for reporting.
    fn location(&self) -> &Path;

    /// Replaces whatever is at [`location`](Self::location) with `contents`.
    fn persist(&self, contents: &[u8]) -> Result<()>;
}
