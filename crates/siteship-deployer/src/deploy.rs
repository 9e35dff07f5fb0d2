//! Deployment orchestration.
//!
//! Coordinates one full deployment run: enumerate, resolve, upload.

use std::{path::PathBuf, time::Instant};

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use siteship_core::{Config, ConnectionString, CoreError};
use siteship_storage::{BlobStore, S3CompatibleStore};

use crate::{
    blob_name::blob_name,
    enumerate::{EnumerateError, SourceTree},
    mime::{MimeTypeTable, UnknownExtensionError},
    upload::{upload, UploadError, UploadTask},
};

/// Deployment errors.
#[derive(Debug, Error)]
pub enum DeployError {
    /// Missing or invalid deployment settings.
    #[error("config error: {0}")]
    Config(#[from] CoreError),

    /// Source tree enumeration failure.
    #[error(transparent)]
    Enumerate(#[from] EnumerateError),

    /// A file whose content type cannot be resolved.
    #[error(transparent)]
    UnknownExtension(#[from] UnknownExtensionError),

    /// Upload failure (local read or remote transport).
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// The run was cancelled between files.
    #[error("deployment cancelled")]
    Cancelled,
}

/// Result type for deployment operations.
pub type Result<T> = std::result::Result<T, DeployError>;

/// Deployment statistics.
#[derive(Debug, Clone, Default)]
pub struct DeployStats {
    /// Number of files uploaded.
    pub files: usize,

    /// Total bytes uploaded.
    pub bytes: u64,

    /// Run duration in milliseconds.
    pub duration_ms: u64,
}

/// Deployment orchestrator for one target.
///
/// A deployer always attempts a full run when invoked; the decision of
/// whether to deploy at all (credentials present or not) belongs to the
/// calling pipeline. Uploads are issued one at a time, in enumeration
/// order, and the first failure aborts the rest of the run. Files
/// already uploaded are left in place; re-running overwrites them.
pub struct Deployer {
    connection: ConnectionString,
    container: String,
    source_path: PathBuf,
    mime_types: MimeTypeTable,
    cancel: CancellationToken,
}

impl Deployer {
    /// Create a deployer for an explicit target.
    pub fn new(
        connection: ConnectionString,
        container: impl Into<String>,
        source_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            connection,
            container: container.into(),
            source_path: source_path.into(),
            mime_types: MimeTypeTable::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Create a deployer from loaded configuration.
    ///
    /// Fails when the connection string is absent or unparsable; the
    /// caller is expected to have checked presence before deciding to
    /// deploy at all.
    pub fn from_config(config: &Config) -> Result<Self> {
        let raw = config
            .deploy
            .connection_string
            .as_deref()
            .ok_or_else(|| CoreError::config("deploy.connection_string is not set"))?;
        let connection = ConnectionString::parse(raw)?;

        Ok(Self::new(
            connection,
            config.deploy.container.clone(),
            config.deploy.source_path.clone(),
        ))
    }

    /// Observe `token` between files; a cancelled token stops the run
    /// before the next upload is issued.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Execute one full deployment run against the configured store.
    pub async fn run(&self) -> Result<DeployStats> {
        let store = S3CompatibleStore::connect(&self.connection, &self.container).await;
        self.run_with_store(&store).await
    }

    /// Execute one full deployment run against an injected store.
    pub async fn run_with_store(&self, store: &dyn BlobStore) -> Result<DeployStats> {
        match self.execute(store).await {
            Ok(stats) => Ok(stats),
            Err(e) => {
                error!(error = %e, "deployment failed");
                Err(e)
            }
        }
    }

    async fn execute(&self, store: &dyn BlobStore) -> Result<DeployStats> {
        let start = Instant::now();
        let mut stats = DeployStats::default();

        debug!(
            source = %self.source_path.display(),
            endpoint = store.endpoint(),
            container = %self.container,
            "starting deployment"
        );

        let tree = SourceTree::new(&self.source_path)?;
        let files = tree.files()?;

        for entry in &files {
            if self.cancel.is_cancelled() {
                return Err(DeployError::Cancelled);
            }

            let content_type = self.mime_types.resolve(&entry.relative_path)?;
            let task = UploadTask {
                blob_name: blob_name(&entry.relative_path),
                content_type: content_type.to_string(),
                source: entry.absolute_path.clone(),
            };

            let result = upload(store, &task).await?;
            stats.files += 1;
            stats.bytes += result.size_bytes;
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            files = stats.files,
            bytes = stats.bytes,
            duration_ms = stats.duration_ms,
            container = %self.container,
            "deployment complete"
        );

        Ok(stats)
    }
}
