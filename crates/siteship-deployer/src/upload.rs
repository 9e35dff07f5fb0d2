//! Upload execution.

use std::path::PathBuf;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

use siteship_storage::{BlobStore, PutResult, StorageError};

/// Upload errors.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Failed to read the source file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Remote store failure.
    #[error(transparent)]
    Transport(#[from] StorageError),
}

/// Result type for upload operations.
pub type Result<T> = std::result::Result<T, UploadError>;

/// One file to upload: target key, resolved content type, local source.
///
/// Tasks are ephemeral, one per file per run, and each owns its own
/// metadata values.
#[derive(Debug, Clone)]
pub struct UploadTask {
    pub blob_name: String,
    pub content_type: String,
    pub source: PathBuf,
}

/// Upload a single file to the store.
///
/// Reads the source bytes and writes them under the task's blob name
/// with the resolved content type, creating or replacing the remote
/// object. Failures are not retried here.
pub async fn upload(store: &dyn BlobStore, task: &UploadTask) -> Result<PutResult> {
    debug!(
        source = %task.source.display(),
        blob = %task.blob_name,
        content_type = %task.content_type,
        "uploading file"
    );

    let body = Bytes::from(tokio::fs::read(&task.source).await?);
    let result = store.put(&task.blob_name, &task.content_type, body).await?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use siteship_storage::MemoryBlobStore;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_upload_writes_bytes_and_content_type() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("index.html");
        fs::write(&source, b"<h1>hi</h1>").unwrap();

        let store = MemoryBlobStore::new();
        let task = UploadTask {
            blob_name: "index".to_string(),
            content_type: "text/html".to_string(),
            source,
        };

        let result = upload(&store, &task).await.expect("upload");
        assert_eq!(result.size_bytes, 11);

        let object = store.object("index").expect("stored");
        assert_eq!(object.content_type, "text/html");
        assert_eq!(object.body, Bytes::from_static(b"<h1>hi</h1>"));
    }

    #[tokio::test]
    async fn test_upload_missing_source_is_io_error() {
        let store = MemoryBlobStore::new();
        let task = UploadTask {
            blob_name: "gone".to_string(),
            content_type: "text/plain".to_string(),
            source: PathBuf::from("/nonexistent/gone.txt"),
        };

        let result = upload(&store, &task).await;
        assert!(matches!(result, Err(UploadError::Io(_))));
        assert!(store.is_empty());
    }
}
