use tracing_subscriber::{fmt, EnvFilter};

/// Centralized tracing configuration for the whole application.
///
/// Honors `RUST_LOG`; defaults to `info` when unset.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
