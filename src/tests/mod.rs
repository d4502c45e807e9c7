// Test modules for taglog crate
//
// Each source file has a corresponding test file that focuses on the
// behavior callers rely on. Tests that touch the process-wide context or the
// environment are marked #[serial].

// Test helper utilities
pub mod helpers;

pub mod error;
pub mod tags;
