use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::formatter::TickFormatter;

static SUBSCRIBER_INIT: std::sync::Once = std::sync::Once::new();

/// Installs the global subscriber. Safe to call more than once.
pub fn setup_logging() {
    SUBSCRIBER_INIT.call_once(|| {
        // Allow RUST_LOG to override levels; default to debug for our crate and warn elsewhere
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("warn,{name}=debug", name = env!("CARGO_CRATE_NAME"))));

        let result = Registry::default()
            .with(filter)
            .with(fmt::layer().event_format(TickFormatter))
            .with(ErrorLayer::default())
            .try_init();

        if let Err(e) = result {
            eprintln!("Failed to install tracing subscriber: {e}");
        }
    });
}
