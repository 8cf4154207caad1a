//! Diagnostic logging for the catalog binaries.
//!
//! Demo output goes to stdout; tracing events go to stderr so the two never
//! interleave in a pipe.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` for this crate
/// when `verbose` is true and `warn` everywhere else. Calling this twice is
/// harmless.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        "warn,design_patterns=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
