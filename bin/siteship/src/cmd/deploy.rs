//! Deploy command - uploads the build output to the configured container.
//!
//! This is the pipeline step that decides *whether* to deploy: when no
//! connection string is configured the step is skipped successfully, so
//! the same build command works with and without deployment credentials.
//! The deployer itself always attempts a full run once invoked.

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use siteship_core::Config;
use siteship_deployer::Deployer;
use tokio_util::sync::CancellationToken;

/// Run the deploy command.
pub async fn run(config_path: &Path, source_override: Option<&Path>) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?source_override, "Starting deployment");

    // Load configuration (file + SITESHIP__* environment overrides)
    let mut config =
        Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;

    if let Some(source) = source_override {
        tracing::info!(source = %source.display(), "Overriding source path from CLI");
        config.deploy.source_path = source.to_path_buf();
    }

    // The presence gate lives here, not in the deployer.
    if !config.deployment_configured() {
        tracing::info!("No connection string configured, skipping deployment");
        println!();
        println!("  Deployment not configured (deploy.connection_string missing); skipping.");
        println!();
        return Ok(());
    }

    let deployer = Deployer::from_config(&config)
        .wrap_err("Invalid deployment configuration")?
        .with_cancellation(shutdown_token());

    let stats = deployer.run().await.wrap_err("Deployment failed")?;

    let duration = start.elapsed();

    // Print deployment statistics
    println!();
    println!("  Deployment completed successfully!");
    println!();
    println!("  Files:     {}", stats.files);
    println!("  Bytes:     {}", stats.bytes);
    println!("  Container: {}", config.deploy.container);
    println!();
    println!("  Duration:  {:.2}s", duration.as_secs_f64());
    println!();

    tracing::info!(?stats, ?duration, "Deployment completed successfully");

    Ok(())
}

/// Token cancelled on Ctrl-C, observed by the deployer between files.
fn shutdown_token() -> CancellationToken {
    let token = CancellationToken::new();
    let handle = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, stopping after the current file");
            handle.cancel();
        }
    });
    token
}
