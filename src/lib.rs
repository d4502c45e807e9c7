//! # taglog
//!
//! Tagged structured-logging facade with hierarchical tags and a sink that a
//! hosting framework can replace at runtime.
//!
//! ## Key Features
//!
//! - **Tag composition**: every record is tagged `logger tags ++ extra tags ++ [severity]`
//! - **Derived loggers**: `id(name)` and `group(name)` append `id:<name>` / `group:<name>`
//! - **printf-style formatting**: `%s %d %i %f %j %o %O %c %%`
//! - **Error messages**: errors are logged as their stack text
//! - **Pluggable sink**: one slot per context, shared by every logger on it
//! - **Host registration**: delegate to a host's request-scoped or global logger
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use taglog::{LogContext, Logger, MemorySink};
//!
//! let ctx = Arc::new(LogContext::new());
//! let sink = MemorySink::new();
//! ctx.set_sink(sink.clone());
//!
//! let logger = Logger::with_context(ctx, ["tag1", "tag2"]);
//! logger.info("Test");
//! taglog::warn!(logger.group("db"), tags = "pool", "%d connections left", 2);
//!
//! let records = sink.records();
//! assert_eq!(records[0].tags, ["tag1", "tag2", "info"]);
//! assert_eq!(records[1].tags, ["tag1", "tag2", "group:db", "pool", "warn"]);
//! assert_eq!(records[1].message, "2 connections left");
//! ```
//!
//! Without a registered host, records go to the console as
//! `<epoch-millis>, <first tag>, <message>`.

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Internal diagnostics (re-exports tracing with log_* naming)
pub(crate) mod logging;

pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod host;
pub mod logger;
pub mod severity;
pub mod sink;
pub mod tags;
pub mod tracing_host;

#[cfg(test)]
pub mod tests;

use std::sync::Arc;

pub use config::LoggerConfig;
pub use context::{LogContext, SinkSlot};
pub use error::{ErrorCategory, TagLogError, TagLogResult};
pub use format::{format_message, Arg, Message};
pub use host::{HostContext, HostSink, RegisterOptions, RequestScope};
pub use logger::Logger;
pub use severity::Severity;
pub use sink::{ConsoleSink, LogRecord, MemorySink, NoopSink, Sink};
pub use tags::Tags;
pub use tracing_host::TracingHost;

/// The process-wide logging context.
pub fn global() -> Arc<LogContext> {
    LogContext::global()
}

/// Toggle the process-wide console sink.
///
/// Has no effect on a sink installed by [`register`].
pub fn enabled(enabled: bool) {
    LogContext::global().set_enabled(enabled);
}

/// Register `host` on the process-wide context and call `next` once.
///
/// ```rust
/// use std::sync::Arc;
/// use taglog::{RegisterOptions, TracingHost};
///
/// let mut done = false;
/// taglog::register(Arc::new(TracingHost::new()), &RegisterOptions::default(), || done = true);
/// assert!(done);
/// ```
pub fn register<F>(host: Arc<dyn HostContext>, options: &RegisterOptions, next: F)
where
    F: FnOnce(),
{
    LogContext::global().register(host, options, next);
}
