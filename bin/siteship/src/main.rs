//! siteship CLI
//!
//! Deploys a locally built static site to a remote blob-storage
//! container. This is the binary entry point; the command
//! implementations live in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for siteship.
#[derive(Parser)]
#[command(
    name = "siteship",
    version,
    about = "Deploy a built static site to blob storage"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "siteship.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Deploy the build output to the configured container
    Deploy {
        /// Override the source directory to upload
        #[arg(short, long)]
        source: Option<std::path::PathBuf>,
    },
    /// Validate configuration and source tree
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    siteship::init_tracing(cli.verbose);

    match cli.command {
        Commands::Deploy { source } => {
            siteship::cmd::deploy::run(&cli.config, source.as_deref()).await?;
        }
        Commands::Check { strict } => {
            siteship::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_deploy_command_parsing() {
        let args = ["siteship", "deploy"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("siteship.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Deploy { source } => {
                assert!(source.is_none());
            }
            _ => panic!("Expected Deploy command"),
        }
    }

    #[test]
    fn test_cli_deploy_with_source_override() {
        let args = ["siteship", "deploy", "--source", "dist"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Deploy { source } => {
                assert_eq!(source, Some(std::path::PathBuf::from("dist")));
            }
            _ => panic!("Expected Deploy command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["siteship", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict } => {
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["siteship", "-vvv", "deploy"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["siteship", "--config", "site.toml", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
