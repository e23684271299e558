use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, in the same syntax as `RUST_LOG`.
pub const LOG_ENV: &str = "PGSPLIT_LOG";

/// Installs a stderr `fmt` subscriber.
///
/// The filter is read from [`LOG_ENV`], falling back to `RUST_LOG`. Nothing is installed when
/// neither is set.
pub fn init_tracing() {
    let filter = env_filter(
        std::env::var(LOG_ENV).ok(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    );

    let Some(filter) = filter else {
        return;
    };

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        tracing::debug!("not installing log subscriber: {e}");
    }
}

/// Builds the log filter, preferring [`LOG_ENV`] over `RUST_LOG`.
fn env_filter(log_env: Option<String>, rust_log: Option<String>) -> Option<EnvFilter> {
    log_env
        .or(rust_log)
        .map(|directives| EnvFilter::builder().parse_lossy(directives))
}
