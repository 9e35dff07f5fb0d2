//! siteship deployment engine.
//!
//! Synchronizes a locally built tree of static files to a remote
//! blob-storage container: every regular file under the source root is
//! uploaded under a clean object key with its resolved content type.
//! Uploads are strictly sequential and the first failure aborts the run.

pub mod blob_name;
pub mod deploy;
pub mod enumerate;
pub mod mime;
pub mod upload;

pub use blob_name::blob_name;
pub use deploy::{DeployError, DeployStats, Deployer};
pub use enumerate::{EnumerateError, FileEntry, SourceTree};
pub use mime::{MimeTypeTable, UnknownExtensionError};
pub use upload::{upload, UploadError, UploadTask};
