//! Host registration against the process-wide context.
//!
//! Registration cannot be undone, so every test here registers its own host
//! and runs serially.

mod common;

use common::TestHost;
use serial_test::serial;
use std::sync::Arc;
use taglog::{Logger, MemorySink, RegisterOptions, RequestScope, Sink};

#[test]
#[serial]
fn test_register_signals_completion_once_and_routes_to_host() {
    // Arrange
    let logger = Logger::new(["tag1", "tag2"]);
    let host = TestHost::new();
    let mut completions = 0;

    // Act
    taglog::register(host.clone(), &RegisterOptions::default(), || completions += 1);
    logger.info("Test");

    // Assert
    assert_eq!(completions, 1);
    assert_eq!(host.calls(), 1);
    let records = host.global.records();
    assert_eq!(records[0].tags, ["tag1", "tag2", "info"]);
    assert_eq!(records[0].message, "Test");
}

#[test]
#[serial]
fn test_loggers_created_after_registration_use_host() {
    // Arrange
    let host = TestHost::new();
    taglog::register(host.clone(), &RegisterOptions::default(), || {});

    // Act
    let logger = Logger::new("late").group("jobs");
    taglog::warn!(logger, tags = "queue", "%d pending", 3);

    // Assert
    let records = host.global.records();
    assert_eq!(records[0].tags, ["late", "group:jobs", "queue", "warn"]);
    assert_eq!(records[0].message, "3 pending");
}

#[test]
#[serial]
fn test_enabled_flag_does_not_affect_registered_host() {
    // Arrange
    let host = TestHost::new();
    taglog::register(host.clone(), &RegisterOptions::default(), || {});
    let logger = Logger::default();

    // Act
    taglog::enabled(false);
    logger.error("still routed");
    taglog::enabled(true);

    // Assert
    assert_eq!(host.calls(), 1);
}

#[tokio::test]
#[serial]
async fn test_request_scope_overrides_global_host_logger() {
    // Arrange
    let host = TestHost::new();
    taglog::register(host.clone(), &RegisterOptions::default(), || {});
    let logger = Logger::new("api");
    let request = MemorySink::new();
    let scoped: Arc<dyn Sink> = Arc::new(request.clone());

    // Act
    let request_logger = logger.id("req-9");
    RequestScope::scope(scoped, async move {
        request_logger.info("handling");
    })
    .await;
    logger.info("idle");

    // Assert
    assert_eq!(request.records()[0].tags, ["api", "id:req-9", "info"]);
    assert_eq!(host.global.records()[0].message, "idle");
    assert_eq!(host.calls(), 1);
}

#[test]
#[serial]
fn test_registration_without_request_scoping() {
    // Arrange
    let host = TestHost::new();
    let options = RegisterOptions {
        request_scoped: false,
    };
    taglog::register(host.clone(), &options, || {});
    let request = MemorySink::new();

    // Act
    RequestScope::sync_scope(Arc::new(request.clone()), || {
        Logger::default().debug("ignores scope");
    });

    // Assert
    assert!(request.is_empty());
    assert_eq!(host.calls(), 1);
}
