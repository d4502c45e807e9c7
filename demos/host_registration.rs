//! Host registration example: console output, then a `tracing` host.
//!
//! This example shows how to:
//! - Log to the default console sink before any host is registered
//! - Register `TracingHost` so records become `tracing` events
//! - Route one request's records to its own sink with `RequestScope`
//!
//! # Running
//!
//! ```bash
//! cargo run --example host_registration
//!
//! # Include debug and trace records
//! RUST_LOG=taglog=trace cargo run --example host_registration
//! ```

use std::sync::Arc;
use taglog::{Logger, LoggerConfig, MemorySink, RequestScope, Sink, TracingHost};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taglog=info")),
        )
        .init();

    let config = LoggerConfig::from_env()?;
    config.validate()?;
    config.apply(&taglog::global());

    let logger = config.logger().group("demo");

    println!("=== Console sink ===\n");
    logger.info("before registration");
    taglog::info!(logger, "%s has %d tags", "this logger", logger.tags().len());

    println!("\n=== Tracing host ===\n");
    let mut registered = false;
    taglog::register(
        Arc::new(TracingHost::new()),
        &config.register_options(),
        || registered = true,
    );
    println!("registered: {registered}");

    logger.warn("now a tracing event");
    taglog::debug!(logger, tags = ["cache"], "hit ratio %f", 0.93);
    logger.error(anyhow::anyhow!("upstream timed out").context("request failed"));

    println!("\n=== Request scope ===\n");
    let request = MemorySink::new();
    let scoped: Arc<dyn Sink> = Arc::new(request.clone());
    let request_logger = logger.id("req-42");
    RequestScope::scope(scoped, async move {
        request_logger.info("handled inside the request");
    })
    .await;

    for record in request.records() {
        println!("request record: {:?} {}", record.tags, record.message);
    }

    Ok(())
}
