use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use object_store::{
    aws::{AmazonS3, AmazonS3Builder},
    path::Path as ObjectPath,
    signer::Signer,
    ObjectStore,
};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::info;

use crate::config::S3Target;

/// Object-store boundary: authenticated PUT plus presigned GET URLs.
#[async_trait]
pub trait AudioStore: Send + Sync {
    async fn put(&self, key: &str, data: Bytes) -> Result<()>;
    async fn presigned_url(&self, key: &str, expires_in: Duration) -> Result<String>;
}

/// S3-compatible store for synthesized audio.
pub struct S3Store {
    inner: AmazonS3,
    bucket: String,
}

impl S3Store {
    pub fn open(target: &S3Target) -> Result<Self> {
        let mut builder = AmazonS3Builder::new()
            .with_bucket_name(&target.bucket)
            .with_region(&target.credentials.region)
            .with_access_key_id(&target.credentials.access_key)
            .with_secret_access_key(&target.credentials.secret_key);

        if let Some(endpoint) = &target.credentials.endpoint {
            if !endpoint.is_empty() {
                builder = builder.with_endpoint(endpoint);
            }
        }

        Ok(Self {
            inner: builder.build()?,
            bucket: target.bucket.clone(),
        })
    }
}

#[async_trait]
impl AudioStore for S3Store {
    async fn put(&self, key: &str, data: Bytes) -> Result<()> {
        let path = ObjectPath::from(key);
        self.inner
            .put(&path, data.into())
            .await
            .with_context(|| format!("upload s3://{}/{}", self.bucket, key))?;
        info!(bucket = %self.bucket, key, "audio file uploaded to S3");
        Ok(())
    }

    async fn presigned_url(&self, key: &str, expires_in: Duration) -> Result<String> {
        let path = ObjectPath::from(key);
        let url = self
            .inner
            .signed_url(Method::GET, &path, expires_in)
            .await
            .with_context(|| format!("presign s3://{}/{}", self.bucket, key))?;
        Ok(url.to_string())
    }
}

/// Write audio bytes under `folder`, creating the folder as needed.
/// Returns the full path of the written file.
pub async fn write_local(folder: &Path, file_name: &str, data: &[u8]) -> Result<PathBuf> {
    tokio::fs::create_dir_all(folder)
        .await
        .with_context(|| format!("create output folder {}", folder.display()))?;
    let path = folder.join(file_name);
    tokio::fs::write(&path, data)
        .await
        .with_context(|| format!("write audio file {}", path.display()))?;
    info!(path = %path.display(), bytes = data.len(), "audio file saved");
    Ok(path)
}
