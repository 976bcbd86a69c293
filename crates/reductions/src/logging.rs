//! Log output for the reductions crates.
//!
//! Installs a `tracing` subscriber that prints the structured events emitted
//! while validating input and loading moments.

use std::sync::OnceLock;

use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVE: &str = "reductions_core=info";

/// Initializes log output.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// overrides the default `reductions_core=info` filter. If another global
/// subscriber is already installed, it is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        let directives = filter.to_string();

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init()
            .is_ok();

        debug!(event = "logging_init", installed, filter = %directives);
    });
}

/// Returns true once [`init`] has run.
pub fn is_initialized() -> bool {
    INIT.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert!(is_initialized());
    }
}
