//! Structured Tracing: events, spans, instrumented functions
//!
//! Run with: RUST_LOG=debug cargo run --bin p26_tracing

use tracing::{debug, error, info, info_span, instrument, trace, warn};
use tracing_subscriber::EnvFilter;

fn event_levels() {
    println!("=== Event Levels ===\n");

    trace!("finest detail, usually filtered out");
    debug!("diagnostic detail");
    info!("normal operation");
    warn!(remaining = 2, "resource running low");
    error!(code = 500, "operation failed");
}

fn structured_fields() {
    println!("\n=== Structured Fields ===\n");

    let user = "alice";
    let items = 3;
    // Fields are key-value data, not text baked into the message.
    info!(user, items, "checkout started");
    info!(user = %user, elapsed_ms = 12.5, "checkout finished");
}

#[instrument]
fn process_order(order_id: u64, quantity: u32) -> u64 {
    // Everything logged here carries the function's span and arguments.
    debug!("validating");
    let total = order_id * quantity as u64;
    info!(total, "processed");
    total
}

fn spans() {
    println!("\n=== Spans ===\n");

    let span = info_span!("batch", size = 2);
    let _guard = span.enter();
    info!("inside the batch span");

    {
        let inner = info_span!("item", index = 0);
        let _inner_guard = inner.enter();
        info!("nested span context");
    }

    info!("back to the batch span");
}

fn instrumented() {
    println!("\n=== #[instrument] ===\n");

    process_order(1001, 3);
    process_order(1002, 1);
}

fn main() {
    // RUST_LOG controls filtering; default to debug so the demo shows output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    println!("=== Tracing Demo ===\n");

    event_levels();
    structured_fields();
    spans();
    instrumented();

    println!("\n=== Key Points ===");
    println!("1. Events carry structured fields, not just formatted text");
    println!("2. Spans give every event inside them shared context");
    println!("3. #[instrument] wraps a function in a span automatically");
    println!("4. RUST_LOG filters by level and target at run time");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instrumented_function_still_computes() {
        // Without a subscriber installed, tracing calls are no-ops.
        assert_eq!(process_order(10, 3), 30);
        assert_eq!(process_order(0, 5), 0);
    }
}
