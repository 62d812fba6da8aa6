use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, LogFormat};

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber. `RUST_LOG` takes precedence over the default level.
pub fn init_tracing(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr).json())
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init(),
    }
}

pub fn log_settings(config: &Config) {
    tracing::info!("Building with environment variables...");
    tracing::info!(
        google_client_id = %abbreviate(&config.google_client_id, 20),
        backend_url = %abbreviate(&config.backend_url, 50),
        authorized_domains = ?config.authorized_domains,
        "resolved page settings"
    );
}

/// First `max_chars` characters of `value` followed by `...`.
pub fn abbreviate(value: &str, max_chars: usize) -> String {
    let head: String = value.chars().take(max_chars).collect();
    format!("{head}...")
}
