//! The tagged [`Logger`].
//!
//! A logger carries an ordered list of default tags. Every record it emits is
//! tagged `default tags ++ extra tags ++ [severity]`, in exactly that order,
//! and handed to whatever sink its [`LogContext`] holds at call time.
//!
//! ```rust
//! use std::sync::Arc;
//! use taglog::{LogContext, Logger, MemorySink};
//!
//! let ctx = Arc::new(LogContext::new());
//! let sink = MemorySink::new();
//! ctx.set_sink(sink.clone());
//!
//! let logger = Logger::with_context(Arc::clone(&ctx), ["api", "v1"]);
//! logger.info_tagged("extra", "Test");
//! taglog::info!(logger.id("req-7"), "X %s are", "YOU");
//!
//! let records = sink.records();
//! assert_eq!(records[0].tags, ["api", "v1", "extra", "info"]);
//! assert_eq!(records[1].tags, ["api", "v1", "id:req-7", "info"]);
//! assert_eq!(records[1].message, "X YOU are");
//! ```

use crate::context::LogContext;
use crate::format::{Arg, Message};
use crate::severity::Severity;
use crate::tags::Tags;
use std::fmt;
use std::sync::Arc;

/// A set of default tags bound to a logging context.
#[derive(Clone)]
pub struct Logger {
    tags: Vec<String>,
    context: Arc<LogContext>,
}

macro_rules! severity_methods {
    ($($name:ident, $tagged:ident => $severity:ident;)*) => {
        $(
            #[doc = concat!("Emit `message` tagged `", stringify!($name), "`.")]
            pub fn $name(&self, message: impl Into<Message>) {
                self.emit(Severity::$severity, Tags::Empty, message, &[]);
            }

            #[doc = concat!("Emit `message` with extra tags, tagged `", stringify!($name), "` last.")]
            pub fn $tagged(&self, tags: impl Into<Tags>, message: impl Into<Message>) {
                self.emit(Severity::$severity, tags, message, &[]);
            }
        )*
    };
}

impl Logger {
    /// A logger on the process-wide context.
    ///
    /// `tags` may be a single tag, a list, or `()` for none.
    pub fn new(tags: impl Into<Tags>) -> Self {
        Self::with_context(LogContext::global(), tags)
    }

    /// A logger on an explicit context.
    pub fn with_context(context: Arc<LogContext>, tags: impl Into<Tags>) -> Self {
        Self {
            tags: tags.into().normalize(),
            context,
        }
    }

    /// Default tags, in order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn context(&self) -> &Arc<LogContext> {
        &self.context
    }

    /// Derived logger scoped to a request or unit-of-work identity.
    pub fn id(&self, name: impl fmt::Display) -> Logger {
        self.child("id", name)
    }

    /// Derived logger scoped to a named subsystem.
    pub fn group(&self, name: impl fmt::Display) -> Logger {
        self.child("group", name)
    }

    fn child(&self, kind: &str, name: impl fmt::Display) -> Logger {
        let mut tags = Vec::with_capacity(self.tags.len() + 1);
        tags.extend_from_slice(&self.tags);
        tags.push(format!("{kind}:{name}"));
        Logger {
            tags,
            context: Arc::clone(&self.context),
        }
    }

    /// Tag sequence for one record.
    pub fn compose_tags(&self, severity: Severity, extra: impl Into<Tags>) -> Vec<String> {
        let extra = extra.into();
        let mut tags = Vec::with_capacity(self.tags.len() + extra.len() + 1);
        tags.extend_from_slice(&self.tags);
        tags.extend(extra.normalize());
        tags.push(severity.as_str().to_string());
        tags
    }

    /// Compose, format and hand one record to the current sink.
    ///
    /// This is the single path behind every severity method and macro.
    pub fn emit(
        &self,
        severity: Severity,
        tags: impl Into<Tags>,
        message: impl Into<Message>,
        args: &[Arg],
    ) {
        let tags = self.compose_tags(severity, tags);
        let text = message.into().render(args);
        self.context.current_sink().log(&tags, &text);
    }

    /// Send `message` straight to the current sink.
    ///
    /// Neither the default tags nor a severity tag are added.
    pub fn log(&self, tags: impl Into<Tags>, message: impl Into<Message>) {
        let tags = tags.into().normalize();
        let text = message.into().render(&[]);
        self.context.current_sink().log(&tags, &text);
    }

    severity_methods! {
        info, info_tagged => Info;
        debug, debug_tagged => Debug;
        error, error_tagged => Error;
        warn, warn_tagged => Warn;
        trace, trace_tagged => Trace;
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Tags::Empty)
    }
}

macro_rules! logger_from {
    ($($ty:ty),* $(,)?) => {
        $(impl From<$ty> for Logger {
            fn from(tags: $ty) -> Self {
                Self::new(tags)
            }
        })*
    };
}

// Every shape `Logger::new` takes, so `Logger::from(x) == Logger::new(x)`.
logger_from!(Tags, (), &str, String, &String, Vec<String>, Vec<&str>, &[String], &[&str]);

impl<const N: usize> From<[&str; N]> for Logger {
    fn from(tags: [&str; N]) -> Self {
        Self::new(tags)
    }
}

impl<const N: usize> From<[String; N]> for Logger {
    fn from(tags: [String; N]) -> Self {
        Self::new(tags)
    }
}

impl PartialEq for Logger {
    /// Same tags on the same context.
    fn eq(&self, other: &Self) -> bool {
        self.tags == other.tags && Arc::ptr_eq(&self.context, &other.context)
    }
}

impl Eq for Logger {}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("tags", &self.tags).finish()
    }
}

/// Emit a record at an explicit severity.
///
/// ```rust
/// # let logger = taglog::Logger::default();
/// # taglog::enabled(false);
/// taglog::emit!(logger, taglog::Severity::Warn, "retrying in %d ms", 250);
/// taglog::emit!(logger, taglog::Severity::Warn, tags = ["db"], "pool at %d%%", 90);
/// # taglog::enabled(true);
/// ```
#[macro_export]
macro_rules! emit {
    ($logger:expr, $severity:expr, tags = $tags:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $logger.emit($severity, $tags, $message, &[$($crate::Arg::from($arg)),*])
    };
    ($logger:expr, $severity:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $logger.emit($severity, $crate::Tags::Empty, $message, &[$($crate::Arg::from($arg)),*])
    };
}

/// `info` record with printf-style arguments: `info!(logger, [tags = t,] msg, args..)`.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => { $crate::emit!($logger, $crate::Severity::Info, $($rest)+) };
}

/// `debug` record; see [`info!`].
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => { $crate::emit!($logger, $crate::Severity::Debug, $($rest)+) };
}

/// `error` record; see [`info!`].
#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => { $crate::emit!($logger, $crate::Severity::Error, $($rest)+) };
}

/// `warn` record; see [`info!`].
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($rest:tt)+) => { $crate::emit!($logger, $crate::Severity::Warn, $($rest)+) };
}

/// `trace` record; see [`info!`].
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($rest:tt)+) => { $crate::emit!($logger, $crate::Severity::Trace, $($rest)+) };
}
