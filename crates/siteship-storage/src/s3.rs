use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::{primitives::ByteStream as AwsByteStream, Client};
use bytes::Bytes;

use siteship_core::ConnectionString;

use crate::{
    store::{BlobStore, PutResult},
    StorageError, StorageResult,
};

/// Blob store backed by any S3-compatible service.
///
/// The container must already exist; no provisioning is performed.
#[derive(Clone)]
pub struct S3CompatibleStore {
    client: Client,
    bucket: String,
    endpoint: String,
}

impl S3CompatibleStore {
    /// Connect to the store described by `connection`, targeting `container`.
    pub async fn connect(connection: &ConnectionString, container: &str) -> Self {
        let credentials = Credentials::new(
            connection.access_key.clone(),
            connection.secret_key.clone(),
            None,
            None,
            "siteship",
        );

        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(connection.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(connection.endpoint.clone())
            .load()
            .await;

        let client = Client::from_conf(
            aws_sdk_s3::config::Builder::from(&aws_config)
                .force_path_style(true) // Required for MinIO/RustFS-style endpoints
                .build(),
        );

        Self {
            client,
            bucket: container.to_string(),
            endpoint: connection.endpoint.clone(),
        }
    }

    fn map_aws_error(err: impl std::error::Error + Send + Sync + 'static) -> StorageError {
        StorageError::transport(err)
    }
}

#[async_trait]
impl BlobStore for S3CompatibleStore {
    async fn put(&self, key: &str, content_type: &str, body: Bytes) -> StorageResult<PutResult> {
        let size_bytes = body.len() as u64;

        let result = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(AwsByteStream::from(body))
            .send()
            .await
            .map_err(Self::map_aws_error)?;

        Ok(PutResult {
            etag: result.e_tag,
            size_bytes,
        })
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
