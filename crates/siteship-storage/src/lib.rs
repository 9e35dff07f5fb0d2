//! Blob storage backends for siteship.
//!
//! The deployer talks to the remote store through the [`BlobStore`]
//! trait: a create-or-replace `put` keyed by object name. Two backends
//! are provided, an S3-compatible store for real deployments and an
//! in-memory store for tests and dry runs.

mod error;
mod memory;
mod s3;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use memory::{MemoryBlobStore, StoredObject};
pub use s3::S3CompatibleStore;
pub use store::{BlobStore, PutResult};
