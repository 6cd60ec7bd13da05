use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,tallybar_ui=debug";

/// Install a formatted `tracing` subscriber.
///
/// The filter is read from `RUST_LOG` and falls back to [`DEFAULT_FILTER`].
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a formatted `tracing` subscriber with an explicit fallback filter.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_with_filter(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::trace!("tracing subscriber already installed");
    }
}
