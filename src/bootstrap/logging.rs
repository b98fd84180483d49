use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MOTDCARD_LOG";

/// Installs the global subscriber.
///
/// Filter comes from `MOTDCARD_LOG`, then `RUST_LOG`, then `info`.
pub fn initialize() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
