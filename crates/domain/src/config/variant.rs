// crates/domain/src/config/variant.rs
use serde::{Deserialize, Serialize};

use crate::value_objects::ExtensionFilter;

/// The two shipped configurations of the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Every file type under `vault/`.
    Vault,
    /// `.html` only, copied in from an external source first.
    Visualisations,
}

/// Fixed labels and filtering for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantProfile {
    /// First segment of every descriptor `path`, also the scanned folder's name.
    pub root_label: &'static str,
    /// Group for files lying directly in the root when subfolders exist.
    pub direct_sentinel: &'static str,
    /// Group for all files when the root has no subfolders.
    pub flat_sentinel: &'static str,
    pub filter: ExtensionFilter,
}

impl Variant {
    #[must_use]
    pub fn profile(self) -> VariantProfile {
        match self {
            Self::Vault => VariantProfile {
                root_label: "vault",
                direct_sentinel: "root",
                flat_sentinel: "root",
                filter: ExtensionFilter::Any,
            },
            Self::Visualisations => VariantProfile {
                root_label: "visualisations",
                direct_sentinel: "all",
                flat_sentinel: "all",
                filter: ExtensionFilter::only("html"),
            },
        }
    }
}

impl VariantProfile {
    #[must_use]
    pub fn sentinel(&self, has_subfolders: bool) -> &'static str {
        if has_subfolders { self.direct_sentinel } else { self.flat_sentinel }
    }
}
