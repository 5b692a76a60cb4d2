//! Diagnostic output.
//!
//! The library only emits `tracing` events: one `info` event per covering run and per sweep
//! step, `debug` for each confirmed center and `trace` for each requeued candidate. Binaries
//! decide where those go by calling [`enable`].

use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber on standard error.
///
/// Filtering follows `RUST_LOG` when it is set, and `default_directive` (for example
/// `"box_cover=info"`) otherwise. Calling this twice has no further effect.
pub fn enable(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    // a second installation is refused by `tracing`; the first one stays in place
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
