//! Development-time tracing for debugging countdown runs.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: Dev diagnostics via `RUST_LOG`, output to
//!   stderr. Not part of the product output.
//!
//! - **Console output (`console`)**: The banner and echoes on stdout,
//!   gated by `--verbosity`. Product output, unaffected by `RUST_LOG`.
//!
//! - **The output file (`io/sink`)**: The countdown text itself. Always
//!   written, unaffected by either of the above.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=tickfile=debug tickfile --countdown-to 20:00
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
