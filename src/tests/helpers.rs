//! Test helper utilities shared across unit test modules
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

#![allow(dead_code)]

use crate::context::LogContext;
use crate::logger::Logger;
use crate::sink::MemorySink;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Owned tag list from string literals.
pub fn strings(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

/// Fresh context with a memory sink installed in place of the console.
pub fn isolated_context() -> (Arc<LogContext>, MemorySink) {
    let ctx = Arc::new(LogContext::new());
    let sink = MemorySink::new();
    ctx.set_sink(sink.clone());
    (ctx, sink)
}

/// Logger on a fresh isolated context.
pub fn recording_logger(tags: &[&str]) -> (Logger, MemorySink) {
    let (ctx, sink) = isolated_context();
    (Logger::with_context(ctx, strings(tags)), sink)
}

/// Writer capturing console output for assertions.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock().unwrap()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that fails every call, for checking that sinks swallow I/O errors.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

/// Two-level error chain.
#[derive(Debug, thiserror::Error)]
#[error("query failed")]
pub struct QueryError {
    #[source]
    pub source: ConnectionError,
}

#[derive(Debug, thiserror::Error)]
#[error("connection reset")]
pub struct ConnectionError;
