//! Check command - validate configuration and source tree.

use std::path::Path;

use color_eyre::eyre::{bail, Result};
use siteship_core::{Config, ConnectionString};
use siteship_deployer::{MimeTypeTable, SourceTree};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration and the source tree without contacting
/// the remote store.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and source tree");

    let mut result = ValidationResult::default();

    // Validate configuration
    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    };

    if let Some(ref cfg) = config {
        // Validate connection string if present
        println!("\nChecking deployment target...");
        match &cfg.deploy.connection_string {
            Some(raw) => match ConnectionString::parse(raw) {
                Ok(cs) => println!("  ✓ Connection string valid (endpoint {})", cs.endpoint),
                Err(e) => {
                    result.add_error(format!("Connection string invalid: {e}"));
                    println!("  ✗ Connection string invalid");
                }
            },
            None => {
                result.add_warning(
                    "deploy.connection_string not set; deploy will be skipped".to_string(),
                );
                println!("  ⚠ No connection string configured");
            }
        }

        // Validate the source tree and content types
        println!("\nChecking source tree...");
        check_source_tree(cfg, &mut result);
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Check that the source tree exists and every file has a known
/// content type, so a deploy would not abort half way.
fn check_source_tree(config: &Config, result: &mut ValidationResult) {
    let tree = match SourceTree::new(&config.deploy.source_path) {
        Ok(t) => t,
        Err(e) => {
            result.add_warning(format!("Source tree not deployable yet: {e}"));
            println!("  ⚠ {}", e);
            return;
        }
    };

    let files = match tree.files() {
        Ok(f) => f,
        Err(e) => {
            result.add_error(format!("Failed to enumerate source tree: {e}"));
            println!("  ✗ Enumeration failed");
            return;
        }
    };

    let mime_types = MimeTypeTable::new();
    let mut unresolvable = 0;
    for entry in &files {
        if mime_types.resolve(&entry.relative_path).is_err() {
            result.add_error(format!(
                "No MIME type for '{}'; deployment would fail",
                entry.relative_path
            ));
            unresolvable += 1;
        }
    }

    if unresolvable == 0 {
        println!("  ✓ All {} files have a known content type", files.len());
    } else {
        println!("  ✗ {unresolvable}/{} files have no content type", files.len());
    }
}
