use time::macros::format_description;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

static SUBSCRIBER_INIT: std::sync::Once = std::sync::Once::new();

/// Configure and initialize logging for the application
pub fn setup_logging() {
    SUBSCRIBER_INIT.call_once(|| {
        // Allow RUST_LOG to override levels; default to info for our crate and warn elsewhere
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("warn,{name}=info,tower_http=info", name = env!("CARGO_CRATE_NAME"))));
        let timer = UtcTime::new(format_description!("[hour]:[minute]:[second].[subsecond digits:5]"));

        // Pretty for local dev, flat JSON lines once deployed
        let use_pretty = cfg!(debug_assertions);

        let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if use_pretty {
            Box::new(
                FmtSubscriber::builder()
                    .with_target(true)
                    .with_timer(timer)
                    .with_env_filter(filter)
                    .finish(),
            )
        } else {
            Box::new(
                FmtSubscriber::builder()
                    .json()
                    .flatten_event(true)
                    .with_target(true)
                    .with_timer(timer)
                    .with_env_filter(filter)
                    .finish(),
            )
        };

        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("setting default subscriber failed: {e}");
        }
    });
}
