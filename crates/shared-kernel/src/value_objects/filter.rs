// crates/shared-kernel/src/value_objects/filter.rs
use serde::{Deserialize, Serialize};

use super::file_info::{FileExtension, FileName};

/// Which files a scan or copy considers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionFilter {
    #[default]
    Any,
    /// Case-insensitive exact match on the final extension.
    Only(FileExtension),
}

impl ExtensionFilter {
    pub fn only(ext: impl Into<FileExtension>) -> Self {
        Self::Only(ext.into())
    }

    /// The single accepted extension, or `None` when everything passes.
    #[must_use]
    pub fn extension(&self) -> Option<&FileExtension> {
        match self {
            Self::Any => None,
            Self::Only(ext) => Some(ext),
        }
    }

    #[must_use]
    pub fn accepts(&self, ext: &FileExtension) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => wanted == ext,
        }
    }

    #[must_use]
    pub fn accepts_name(&self, name: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Only(_) => self.accepts(&FileName::from(name).extension()),
        }
    }
}
