//! Logging setup using `tracing`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when neither a flag nor `RUST_LOG` is given.
const DEFAULT_FILTER: &str = "folio=info";

/// Initializes the global tracing subscriber.
///
/// Level selection, first match wins:
/// 1. `verbose`: debug for folio
/// 2. `quiet`: errors only
/// 3. `RUST_LOG` environment variable
/// 4. info for folio
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn init_logger(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("folio=debug")
    } else if quiet {
        EnvFilter::new("folio=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
