use async_trait::async_trait;
use bytes::Bytes;

use crate::StorageResult;

/// Core blob storage operations - must be implemented by all backends.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write a blob under `key`, creating or replacing it unconditionally.
    ///
    /// The content type is attached as object metadata so the hosting
    /// platform serves the blob with the right `Content-Type` header.
    async fn put(&self, key: &str, content_type: &str, body: Bytes) -> StorageResult<PutResult>;

    /// Human-readable endpoint of the store, for logging.
    fn endpoint(&self) -> &str;
}

/// Result of a successful put operation.
#[derive(Debug, Clone)]
pub struct PutResult {
    pub etag: Option<String>,
    pub size_bytes: u64,
}
