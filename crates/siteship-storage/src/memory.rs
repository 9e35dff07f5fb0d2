use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use bytes::Bytes;

use crate::{
    store::{BlobStore, PutResult},
    StorageResult,
};

/// A blob stored in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub content_type: String,
    pub body: Bytes,
}

/// In-memory blob store for tests and dry runs.
///
/// Clones share the same underlying object map.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    objects: Arc<Mutex<BTreeMap<String, StoredObject>>>,
}

impl MemoryBlobStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a stored object by key.
    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().expect("lock poisoned").get(key).cloned()
    }

    /// All object keys, in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.objects
            .lock()
            .expect("lock poisoned")
            .keys()
            .cloned()
            .collect()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.lock().expect("lock poisoned").len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, key: &str, content_type: &str, body: Bytes) -> StorageResult<PutResult> {
        let size_bytes = body.len() as u64;
        self.objects.lock().expect("lock poisoned").insert(
            key.to_string(),
            StoredObject {
                content_type: content_type.to_string(),
                body,
            },
        );

        Ok(PutResult {
            etag: None,
            size_bytes,
        })
    }

    fn endpoint(&self) -> &str {
        "memory://"
    }
}
