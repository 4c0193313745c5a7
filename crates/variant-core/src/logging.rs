use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a global tracing subscriber.
///
/// Logs go to stdout in compact format. The level comes from `RUST_LOG`,
/// defaulting to `info`; use `RUST_LOG=variant_select=debug` to follow
/// selection decisions. Fails if a global subscriber is already set.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
