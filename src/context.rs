//! The sink slot and the logging context that owns it.
//!
//! Every [`Logger`](crate::Logger) holds an `Arc<LogContext>` and asks it for
//! the current sink on each call. Replacing the sink therefore affects every
//! logger sharing the context, including loggers created before the
//! replacement.
//!
//! The process-wide context behind [`LogContext::global`] is what
//! `Logger::new` uses. Separate contexts are useful when embedding the crate
//! twice or for isolated tests.

use crate::host::{HostContext, HostSink, RegisterOptions};
use crate::logging::log_debug;
use crate::sink::{ConsoleSink, Sink};
use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

static GLOBAL: Lazy<Arc<LogContext>> = Lazy::new(|| Arc::new(LogContext::new()));

/// Single-slot holder for the active sink.
///
/// Reads are lock-free. A call that races with [`set`](Self::set) sees either
/// the old or the new sink, never a mix.
pub struct SinkSlot {
    current: ArcSwap<Box<dyn Sink>>,
}

impl SinkSlot {
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self {
            current: ArcSwap::from_pointee(Box::new(sink)),
        }
    }

    /// Replace the active sink.
    pub fn set(&self, sink: impl Sink + 'static) {
        self.current.store(Arc::new(Box::new(sink)));
    }

    /// The sink active right now.
    pub fn current(&self) -> Arc<Box<dyn Sink>> {
        self.current.load_full()
    }
}

/// Owner of the sink slot and the console enabled flag.
pub struct LogContext {
    slot: SinkSlot,
    enabled: Arc<AtomicBool>,
    registered: AtomicBool,
}

impl LogContext {
    /// A fresh context writing to stdout through a [`ConsoleSink`].
    pub fn new() -> Self {
        let enabled = Arc::new(AtomicBool::new(true));
        let console = ConsoleSink::stdout(Arc::clone(&enabled));
        Self::from_parts(enabled, console)
    }

    /// A context whose default console sink writes to `writer`.
    pub fn with_console_writer(writer: impl std::io::Write + Send + 'static) -> Self {
        let enabled = Arc::new(AtomicBool::new(true));
        let console = ConsoleSink::with_writer(Arc::clone(&enabled), writer);
        Self::from_parts(enabled, console)
    }

    fn from_parts(enabled: Arc<AtomicBool>, console: ConsoleSink) -> Self {
        Self {
            slot: SinkSlot::new(console),
            enabled,
            registered: AtomicBool::new(false),
        }
    }

    /// The process-wide context.
    pub fn global() -> Arc<LogContext> {
        Arc::clone(&GLOBAL)
    }

    pub fn slot(&self) -> &SinkSlot {
        &self.slot
    }

    /// Shorthand for `self.slot().current()`.
    pub fn current_sink(&self) -> Arc<Box<dyn Sink>> {
        self.slot.current()
    }

    /// Replace the active sink directly, without a host.
    pub fn set_sink(&self, sink: impl Sink + 'static) {
        log_debug!(replaced_host = self.is_registered(), "Replacing log sink");
        self.slot.set(sink);
    }

    /// Toggle the default console sink. Replacement sinks ignore this flag.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Whether a host has been registered on this context.
    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::Relaxed)
    }

    /// Route all future records through `host`, then call `next` once.
    ///
    /// There is no way to undo a registration. Registering again replaces the
    /// previous host.
    pub fn register<F>(&self, host: Arc<dyn HostContext>, options: &RegisterOptions, next: F)
    where
        F: FnOnce(),
    {
        let previous = self.registered.swap(true, Ordering::Relaxed);
        log_debug!(
            request_scoped = options.request_scoped,
            replaced_host = previous,
            "Registering host log sink"
        );
        self.slot.set(HostSink::new(host, options));
        next();
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogContext")
            .field("enabled", &self.is_enabled())
            .field("registered", &self.is_registered())
            .finish_non_exhaustive()
    }
}
