//! Severity names appended as the final tag of every record.

use crate::error::TagLogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of severities a [`Logger`](crate::Logger) can emit.
///
/// A severity carries no behavior of its own: every severity goes through the
/// same composition path and differs only in the tag it appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Debug,
    Error,
    Warn,
    Trace,
}

impl Severity {
    /// All severities, in declaration order.
    pub const ALL: [Severity; 5] = [
        Severity::Info,
        Severity::Debug,
        Severity::Error,
        Severity::Warn,
        Severity::Trace,
    ];

    /// The literal tag appended to records of this severity.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Trace => "trace",
        }
    }

    /// Look up a severity by its exact tag name.
    ///
    /// Unlike [`FromStr`], no error is built or logged on a miss.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = TagLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TagLogError::unknown_severity(s))
    }
}
