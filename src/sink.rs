//! Sinks: where composed records end up.
//!
//! A [`Sink`] receives the final `(tags, message)` pair of every logging call.
//! The crate ships a console sink (the default), a no-op sink, and an
//! in-memory sink; hosts install their own through
//! [`register`](crate::register).

use chrono::Utc;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Receiver of composed log records.
///
/// Implementations must not panic and must not report failure to the caller.
/// Any closure `Fn(&[String], &str)` is a sink.
pub trait Sink: Send + Sync {
    fn log(&self, tags: &[String], message: &str);
}

impl<F> Sink for F
where
    F: Fn(&[String], &str) + Send + Sync,
{
    fn log(&self, tags: &[String], message: &str) {
        self(tags, message)
    }
}

/// Owned form of one record, as kept by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub tags: Vec<String>,
    pub message: String,
}

impl LogRecord {
    pub fn new(tags: &[String], message: &str) -> Self {
        Self {
            tags: tags.to_vec(),
            message: message.to_string(),
        }
    }
}

/// Default sink writing `<epoch-millis>, [<firstTag>, ]<message>` lines.
///
/// Only the first tag is written. Output is gated by the shared enabled flag
/// owned by the [`LogContext`](crate::LogContext); write errors are dropped.
pub struct ConsoleSink {
    enabled: Arc<AtomicBool>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    /// Console sink on standard output.
    pub fn stdout(enabled: Arc<AtomicBool>) -> Self {
        Self::with_writer(enabled, io::stdout())
    }

    /// Console sink on an arbitrary writer.
    pub fn with_writer(enabled: Arc<AtomicBool>, writer: impl Write + Send + 'static) -> Self {
        Self {
            enabled,
            out: Mutex::new(Box::new(writer)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

impl Sink for ConsoleSink {
    fn log(&self, tags: &[String], message: &str) {
        if !self.is_enabled() {
            return;
        }
        let line = console_line(Utc::now().timestamp_millis(), tags, message);
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }
}

/// One console line without the trailing newline.
pub(crate) fn console_line(epoch_millis: i64, tags: &[String], message: &str) -> String {
    match tags.first() {
        Some(first) => format!("{epoch_millis}, {first}, {message}"),
        None => format!("{epoch_millis}, {message}"),
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Default)]
pub struct NoopSink;

impl Sink for NoopSink {
    #[inline]
    fn log(&self, _tags: &[String], _message: &str) {}
}

/// Sink that keeps every record in memory.
///
/// Clones share the same buffer, so one clone can be installed while another
/// is inspected.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Drain the buffer.
    pub fn take(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn log(&self, tags: &[String], message: &str) {
        self.lock().push(LogRecord::new(tags, message));
    }
}
