//! Deployment configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for siteship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Deployment settings.
    #[serde(default)]
    pub deploy: DeployConfig,
}

/// Deployment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Connection string for the target blob store (secret).
    ///
    /// Normally supplied through the environment rather than the config
    /// file; deployment is skipped by the pipeline when it is absent.
    #[serde(default)]
    pub connection_string: Option<String>,

    /// Target container name.
    #[serde(default = "default_container")]
    pub container: String,

    /// Local root to upload, usually the build output directory.
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,
}

// Default value functions
fn default_container() -> String {
    // Conventional name for static-hosting containers.
    "$web".to_string()
}

fn default_source_path() -> PathBuf {
    PathBuf::from("public")
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            connection_string: None,
            container: default_container(),
            source_path: default_source_path(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file with environment overrides.
    ///
    /// Environment variables use the `SITESHIP` prefix with `__` as the
    /// separator, e.g. `SITESHIP__DEPLOY__CONNECTION_STRING`.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("SITESHIP").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.deploy.container.is_empty() {
            return Err(CoreError::config("deploy.container cannot be empty"));
        }

        if self.deploy.source_path.as_os_str().is_empty() {
            return Err(CoreError::config("deploy.source_path cannot be empty"));
        }

        if let Some(cs) = &self.deploy.connection_string {
            if cs.trim().is_empty() {
                return Err(CoreError::config(
                    "deploy.connection_string is set but empty",
                ));
            }
        }

        Ok(())
    }

    /// Whether a deployment target is configured.
    pub fn deployment_configured(&self) -> bool {
        self.deploy.connection_string.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("siteship.toml");
        std::fs::write(
            &config_path,
            r#"
[deploy]
container = "www"
source_path = "dist"
connection_string = "Endpoint=http://localhost:9000;AccessKey=ak;SecretKey=sk"
"#,
        )
        .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.deploy.container, "www");
        assert_eq!(config.deploy.source_path, PathBuf::from("dist"));
        assert!(config.deployment_configured());
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("siteship.toml");
        std::fs::write(&config_path, "[deploy]\n").expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.deploy.container, "$web");
        assert_eq!(config.deploy.source_path, PathBuf::from("public"));
        assert!(config.deploy.connection_string.is_none());
        assert!(!config.deployment_configured());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("siteship.toml");
        std::fs::write(&config_path, "").expect("write");

        let config = Config::load(&config_path).expect("load config");
        assert_eq!(config.deploy.container, "$web");
    }

    #[test]
    fn test_config_validation_empty_container() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("siteship.toml");
        std::fs::write(&config_path, "[deploy]\ncontainer = \"\"\n").expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("container cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_blank_connection_string() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("siteship.toml");
        std::fs::write(&config_path, "[deploy]\nconnection_string = \"  \"\n").expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("set but empty"));
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/siteship.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
