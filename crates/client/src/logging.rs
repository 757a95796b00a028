//! Tracing subscriber setup.

/// Install the global subscriber.
///
/// Logs go to stderr so they never interleave with narration on stdout.
/// `RUST_LOG` overrides the default `info` level.
pub fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
