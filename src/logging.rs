//! Internal diagnostics for taglog
//!
//! The facade's own events (registration, config loading, error construction)
//! go to `tracing`, never through a taglog sink, so a misbehaving sink cannot
//! swallow them. Macros are re-exported with log_* naming.

pub use tracing::{
    debug as log_debug,
    error as log_error,
    info as log_info,
    trace as log_trace,
    warn as log_warn,
};
