//! A [`HostContext`] backed by `tracing`.

use crate::host::HostContext;
use crate::logging::{log_debug, log_error, log_info, log_trace, log_warn};
use crate::severity::Severity;

/// Forwards records to `tracing` as events under the `taglog` target.
///
/// The level is taken from the last tag naming a severity, `Info` when none
/// does. All tags are attached as the `tags` field, joined by `,`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHost;

impl TracingHost {
    pub fn new() -> Self {
        Self
    }

    /// Level the record would be forwarded at.
    pub fn severity_of(tags: &[String]) -> Severity {
        tags.iter()
            .rev()
            .find_map(|tag| Severity::from_name(tag))
            .unwrap_or(Severity::Info)
    }
}

impl HostContext for TracingHost {
    fn log(&self, tags: &[String], message: &str) {
        let joined = tags.join(",");
        match Self::severity_of(tags) {
            Severity::Trace => log_trace!(target: "taglog", tags = %joined, "{message}"),
            Severity::Debug => log_debug!(target: "taglog", tags = %joined, "{message}"),
            Severity::Info => log_info!(target: "taglog", tags = %joined, "{message}"),
            Severity::Warn => log_warn!(target: "taglog", tags = %joined, "{message}"),
            Severity::Error => log_error!(target: "taglog", tags = %joined, "{message}"),
        }
    }
}
