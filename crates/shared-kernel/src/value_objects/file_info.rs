// crates/shared-kernel/src/value_objects/file_info.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// UTF-8 base name of a scanned file, extension included.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text after the last `.`; a leading dot (`.env`) is not an extension.
    #[must_use]
    pub fn extension(&self) -> FileExtension {
        match self.0.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => FileExtension::from(ext),
            _ => FileExtension::no_ext(),
        }
    }
}

impl From<String> for FileName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        Self::new(name.to_string())
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileExtension(String);

impl FileExtension {
    /// Lowercased extension without the leading dot.
    pub fn new(ext: String) -> Self {
        Self(ext.trim_start_matches('.').to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn no_ext() -> Self {
        Self(String::new())
    }
}

impl Default for FileExtension {
    fn default() -> Self {
        Self::no_ext()
    }
}

impl From<String> for FileExtension {
    fn from(ext: String) -> Self {
        Self::new(ext)
    }
}

impl From<&str> for FileExtension {
    fn from(ext: &str) -> Self {
        Self::new(ext.to_string())
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "(noext)")
        } else {
            write!(f, ".{}", self.0)
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    /// Units tried in order before falling through to `TB`.
    const UNITS: [&'static str; 4] = ["B", "KB", "MB", "GB"];
    const STEP: f64 = 1024.0;

    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Returns the size scaled by 1024 per unit, one decimal place (`"1.5 KB"`).
    ///
    /// Bytes are rendered with a decimal too (`"10.0 B"`), and anything at or
    /// past 1024 GB stays in `TB` however large it gets.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_human(self) -> String {
        let mut value = self.0 as f64;
        for unit in Self::UNITS {
            if value < Self::STEP {
                return format!("{value:.1} {unit}");
            }
            value /= Self::STEP;
        }
        format!("{value:.1} TB")
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}
impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.bytes()
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_human())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
