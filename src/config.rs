use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Folder used when the caller gives no destination at all.
pub const DEFAULT_LOCAL_FOLDER: &str = "local_files";
/// Object key prefix used when the caller gives no explicit S3 prefix.
pub const DEFAULT_S3_PREFIX: &str = "s3_files";
/// Default lifetime of the presigned GET URL, in seconds.
pub const DEFAULT_PRESIGN_EXPIRES_SECS: u64 = 3600;

/// Connection parameters for the ElevenLabs API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElevenLabsConfig {
    pub api_key: String,
    /// Voice to synthesize with; the provider default voice when unset.
    pub voice_id: Option<String>,
    /// Model to synthesize with, e.g. `eleven_turbo_v2_5`.
    pub model_id: Option<String>,
}

impl ElevenLabsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            voice_id: None,
            model_id: None,
        }
    }
}

/// Explicit S3 credentials. All fields are required together; there is no
/// fallback to ambient environment variables inside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Credentials {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    /// Custom endpoint for S3-compatible vendors (MinIO, DigitalOcean, ...).
    pub endpoint: Option<String>,
}

/// Destination parameters for one synthesis call.
///
/// S3 upload requires `s3_bucket` and `s3_credentials` together; supplying
/// one without the other is a configuration error, never silently treated
/// as "no S3".
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    pub local_folder: Option<PathBuf>,
    pub s3_bucket: Option<String>,
    pub s3_credentials: Option<S3Credentials>,
    /// Key prefix inside the bucket; defaults to [`DEFAULT_S3_PREFIX`].
    pub s3_prefix: Option<String>,
    /// Presigned URL lifetime; defaults to [`DEFAULT_PRESIGN_EXPIRES_SECS`].
    pub presign_expires_secs: Option<u64>,
}

/// A validated, complete S3 destination derived from [`StoreOptions`].
#[derive(Debug, Clone)]
pub struct S3Target {
    pub bucket: String,
    pub credentials: S3Credentials,
    pub prefix: String,
}

impl StoreOptions {
    /// Validate the S3 parameters and derive the target, if any.
    ///
    /// Returns `Ok(None)` when neither bucket nor credentials were given,
    /// `Ok(Some(_))` when both were given and complete, and
    /// `Error::Configuration` for every partial combination.
    pub fn s3_target(&self) -> Result<Option<S3Target>, Error> {
        let target = match (&self.s3_bucket, &self.s3_credentials) {
            (None, None) => None,
            (Some(_), None) => {
                return Err(Error::Configuration(
                    "s3_bucket given without s3_credentials".to_string(),
                ))
            }
            (None, Some(_)) => {
                return Err(Error::Configuration(
                    "s3_credentials given without s3_bucket".to_string(),
                ))
            }
            (Some(bucket), Some(credentials)) => {
                if bucket.is_empty() {
                    return Err(Error::Configuration("s3_bucket is empty".to_string()));
                }
                for (name, value) in [
                    ("access_key", &credentials.access_key),
                    ("secret_key", &credentials.secret_key),
                    ("region", &credentials.region),
                ] {
                    if value.is_empty() {
                        return Err(Error::Configuration(format!(
                            "s3_credentials.{} is empty",
                            name
                        )));
                    }
                }
                Some(S3Target {
                    bucket: bucket.clone(),
                    credentials: credentials.clone(),
                    prefix: self
                        .s3_prefix
                        .clone()
                        .unwrap_or_else(|| DEFAULT_S3_PREFIX.to_string()),
                })
            }
        };
        Ok(target)
    }

    pub fn presign_expires_secs(&self) -> u64 {
        self.presign_expires_secs
            .unwrap_or(DEFAULT_PRESIGN_EXPIRES_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> S3Credentials {
        S3Credentials {
            access_key: "AKID".to_string(),
            secret_key: "SECRET".to_string(),
            region: "us-east-1".to_string(),
            endpoint: None,
        }
    }

    #[test]
    fn test_no_s3_params_is_no_target() {
        let opts = StoreOptions::default();
        assert!(opts.s3_target().unwrap().is_none());
    }

    #[test]
    fn test_complete_s3_params() {
        let opts = StoreOptions {
            s3_bucket: Some("mybucket".to_string()),
            s3_credentials: Some(creds()),
            ..Default::default()
        };
        let target = opts.s3_target().unwrap().expect("target should resolve");
        assert_eq!(target.bucket, "mybucket");
        assert_eq!(target.prefix, DEFAULT_S3_PREFIX);
    }

    #[test]
    fn test_explicit_prefix_kept() {
        let opts = StoreOptions {
            s3_bucket: Some("mybucket".to_string()),
            s3_credentials: Some(creds()),
            s3_prefix: Some("voice/output".to_string()),
            ..Default::default()
        };
        let target = opts.s3_target().unwrap().unwrap();
        assert_eq!(target.prefix, "voice/output");
    }

    #[test]
    fn test_bucket_without_credentials_rejected() {
        let opts = StoreOptions {
            s3_bucket: Some("mybucket".to_string()),
            ..Default::default()
        };
        assert!(matches!(opts.s3_target(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_credentials_without_bucket_rejected() {
        let opts = StoreOptions {
            s3_credentials: Some(creds()),
            ..Default::default()
        };
        assert!(matches!(opts.s3_target(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_empty_credential_field_rejected() {
        let mut bad = creds();
        bad.secret_key.clear();
        let opts = StoreOptions {
            s3_bucket: Some("mybucket".to_string()),
            s3_credentials: Some(bad),
            ..Default::default()
        };
        let err = opts.s3_target().unwrap_err();
        assert!(err.to_string().contains("secret_key"));
    }
}
