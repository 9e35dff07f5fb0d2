//! siteship CLI Library
//!
//! Command implementations for the siteship deployment CLI. The binary
//! entry point lives in `main.rs`; this library exposes the commands and
//! shared setup so they can be documented and integration-tested.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (deploy, check)

pub mod cmd;

// Re-export core types for convenience
pub use siteship_core::{Config, ConnectionString};
pub use siteship_deployer::{Deployer, DeployStats};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
