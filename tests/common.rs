//! Test helper utilities for taglog integration tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use taglog::{HostContext, MemorySink, Sink};

/// Host with an in-memory global logger that counts its calls.
#[derive(Default)]
pub struct TestHost {
    pub global: MemorySink,
    pub calls: AtomicUsize,
}

impl TestHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HostContext for TestHost {
    fn log(&self, tags: &[String], message: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.global.log(tags, message);
    }
}

/// Writer capturing console output.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.bytes.lock().unwrap())
            .lines()
            .map(str::to_string)
            .collect()
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

/// Strip the leading `<epoch-millis>, ` from a console line.
pub fn without_timestamp(line: &str) -> &str {
    line.split_once(", ").map_or(line, |(_, rest)| rest)
}
