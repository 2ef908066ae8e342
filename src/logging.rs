use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt::format::JsonFields, layer::SubscriberExt, EnvFilter, FmtSubscriber};

use crate::config::LogFormat;

static SUBSCRIBER_INIT: std::sync::Once = std::sync::Once::new();

/// Configure and initialize logging for the application.
///
/// Only the first call has any effect.
pub fn setup_logging(format: LogFormat) {
    SUBSCRIBER_INIT.call_once(|| {
        // Allow RUST_LOG to override levels; default to info for our crate and warn elsewhere
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("warn,{name}=info", name = env!("CARGO_CRATE_NAME"))));

        let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = match format {
            LogFormat::Pretty => Box::new(
                FmtSubscriber::builder()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .finish()
                    .with(ErrorLayer::default()),
            ),
            LogFormat::Json => Box::new(
                FmtSubscriber::builder()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .json()
                    .fmt_fields(JsonFields::new())
                    .with_env_filter(filter)
                    .finish()
                    .with(ErrorLayer::default()),
            ),
        };

        if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Failed to install log subscriber: {err}");
        }
    });
}
