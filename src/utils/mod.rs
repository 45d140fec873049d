pub mod build_info;

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "budget_dashboard=info";

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default
/// directive. Events go to stderr so shell output stays clean. A subscriber
/// that is already installed is left in place; [`crate::init`] guards the
/// startup log line.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
