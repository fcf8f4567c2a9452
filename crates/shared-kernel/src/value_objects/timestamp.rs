// crates/shared-kernel/src/value_objects/timestamp.rs
use std::{fmt, time::SystemTime};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Rendering used for the `modified` field. One style is applied to a whole manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimestampStyle {
    /// `16/10/2026, 09:14:02 PM`
    #[default]
    DayFirst,
    /// `10/16/26, 09:14:02 PM`
    MonthFirst,
    /// `2026-10-16T21:14:02`
    Iso8601,
}

impl TimestampStyle {
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::DayFirst => "%d/%m/%Y, %I:%M:%S %p",
            Self::MonthFirst => "%m/%d/%y, %I:%M:%S %p",
            Self::Iso8601 => "%Y-%m-%dT%H:%M:%S",
        }
    }
}

impl fmt::Display for TimestampStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DayFirst => "day-first",
            Self::MonthFirst => "month-first",
            Self::Iso8601 => "iso8601",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct ModificationTime(DateTime<Local>);

impl ModificationTime {
    pub fn new(timestamp: DateTime<Local>) -> Self {
        Self(timestamp)
    }

    /// Falls back to the Unix epoch when the platform cannot report an mtime.
    pub fn from_system_time(time: Option<SystemTime>) -> Self {
        Self(DateTime::<Local>::from(time.unwrap_or(SystemTime::UNIX_EPOCH)))
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.0
    }

    #[must_use]
    pub fn format(&self, style: TimestampStyle) -> String {
        self.0.format(style.pattern()).to_string()
    }
}

impl From<DateTime<Local>> for ModificationTime {
    fn from(timestamp: DateTime<Local>) -> Self {
        Self::new(timestamp)
    }
}

impl fmt::Display for ModificationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(TimestampStyle::default()))
    }
}
