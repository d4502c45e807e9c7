//! Host integration: delegating records to a hosting framework's logger.
//!
//! A host registers itself once during startup (see
//! [`LogContext::register`](crate::LogContext::register)). From then on each
//! record is sent to the request-scoped sink active for the current task, if
//! the host reports one, and to the host's global logger otherwise.
//!
//! Request scoping is bound at the host's request boundary:
//!
//! ```rust
//! use std::sync::Arc;
//! use taglog::{MemorySink, RequestScope, Sink};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let request_sink = MemorySink::new();
//! let scoped: Arc<dyn Sink> = Arc::new(request_sink.clone());
//!
//! RequestScope::scope(scoped, async {
//!     assert!(RequestScope::current().is_some());
//! })
//! .await;
//! assert!(RequestScope::current().is_none());
//! # }
//! ```

use crate::sink::Sink;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;

tokio::task_local! {
    static REQUEST_SINK: Arc<dyn Sink>;
}

/// What a hosting framework exposes to the facade.
#[cfg_attr(test, mockall::automock)]
pub trait HostContext: Send + Sync {
    /// The host's global logger.
    fn log(&self, tags: &[String], message: &str);

    /// The request-scoped logger for the current unit of work, if any.
    ///
    /// Defaults to the sink bound by [`RequestScope`] for the current task.
    fn request_sink(&self) -> Option<Arc<dyn Sink>> {
        RequestScope::current()
    }
}

/// Registration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterOptions {
    /// Look up a request-scoped sink before falling back to the host logger.
    pub request_scoped: bool,
}

impl Default for RegisterOptions {
    fn default() -> Self {
        Self {
            request_scoped: true,
        }
    }
}

/// Sink installed by registration.
pub struct HostSink {
    host: Arc<dyn HostContext>,
    request_scoped: bool,
}

impl HostSink {
    pub fn new(host: Arc<dyn HostContext>, options: &RegisterOptions) -> Self {
        Self {
            host,
            request_scoped: options.request_scoped,
        }
    }
}

impl Sink for HostSink {
    fn log(&self, tags: &[String], message: &str) {
        if self.request_scoped {
            if let Some(request) = self.host.request_sink() {
                request.log(tags, message);
                return;
            }
        }
        self.host.log(tags, message);
    }
}

/// Task-local binding of a request-scoped sink.
///
/// Each task sees only its own binding, so concurrent requests never observe
/// each other's sinks.
pub struct RequestScope;

impl RequestScope {
    /// Run `future` with `sink` as the request-scoped sink.
    pub async fn scope<F>(sink: Arc<dyn Sink>, future: F) -> F::Output
    where
        F: Future,
    {
        REQUEST_SINK.scope(sink, future).await
    }

    /// Run `f` synchronously with `sink` as the request-scoped sink.
    pub fn sync_scope<R>(sink: Arc<dyn Sink>, f: impl FnOnce() -> R) -> R {
        REQUEST_SINK.sync_scope(sink, f)
    }

    /// The sink bound for the current task, if any.
    pub fn current() -> Option<Arc<dyn Sink>> {
        REQUEST_SINK.try_with(Arc::clone).ok()
    }
}
