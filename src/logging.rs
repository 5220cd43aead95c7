//! Diagnostic tracing, written to stderr.
//!
//! User-facing messages go through `cli::output`; this module only
//! covers developer diagnostics controlled by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level is `warn`, or
/// `visitlog=debug` with `--verbose`.
pub fn init(verbose: bool) {
    let default = if verbose { "visitlog=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
