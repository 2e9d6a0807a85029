use anyhow::anyhow;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    config::{ElevenLabsConfig, S3Target, StoreOptions, DEFAULT_LOCAL_FOLDER},
    error::{Destination, Error},
    plan::{self, PersistencePlan},
    storage::{write_local, AudioStore, S3Store},
    synthesis::{ElevenLabsClient, SynthesisClient, VoiceSettings},
};

const AUDIO_EXTENSION: &str = "mp3";

/// What one synthesis call produced and where it was persisted.
///
/// Each optional field is present if and only if the corresponding
/// destination was part of the resolved plan, so callers can distinguish
/// "not attempted" from "attempted".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisResult {
    /// Unique identifier for this request; the base filename on every
    /// destination.
    pub id: String,
    /// Path of the locally written file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Object key inside the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_bucket_name: Option<String>,
    /// Time-limited GET URL for the uploaded object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_presigned_url: Option<String>,
}

impl SynthesisResult {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            file_name: None,
            s3_file_name: None,
            s3_bucket_name: None,
            s3_presigned_url: None,
        }
    }
}

/// Orchestrates one synthesize-then-persist call: validate destination
/// parameters, generate an id, fetch audio, resolve the persistence plan
/// and execute it.
pub struct Synthesizer {
    client: Box<dyn SynthesisClient>,
    default_folder: PathBuf,
}

impl Synthesizer {
    pub fn new(client: Box<dyn SynthesisClient>) -> Self {
        Self {
            client,
            default_folder: PathBuf::from(DEFAULT_LOCAL_FOLDER),
        }
    }

    /// Override the folder used when the caller gives no destination.
    pub fn with_default_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.default_folder = folder.into();
        self
    }

    pub async fn synthesize_and_store(
        &self,
        text: &str,
        options: &StoreOptions,
    ) -> Result<SynthesisResult, Error> {
        // Reject partial S3 parameter sets before any network or disk I/O.
        let s3_target = options.s3_target()?;

        let id = Uuid::new_v4().to_string();
        let audio = self
            .client
            .synthesize(text)
            .await
            .map_err(Error::Synthesis)?;
        if audio.is_empty() {
            return Err(Error::Synthesis(anyhow!("synthesis returned empty audio")));
        }

        let plan = plan::resolve(options.local_folder.as_deref(), s3_target.is_some());
        info!(id = %id, ?plan, bytes = audio.len(), "persistence plan resolved");

        let store = match &s3_target {
            Some(target) if plan.uploads_s3() => Some(
                S3Store::open(target)
                    .map_err(|e| Error::persistence(Destination::S3, e))?,
            ),
            _ => None,
        };

        let local_folder = options
            .local_folder
            .as_deref()
            .unwrap_or(&self.default_folder);

        persist(
            plan,
            &id,
            &audio,
            local_folder,
            s3_target.as_ref(),
            store.as_ref().map(|s| s as &dyn AudioStore),
            Duration::from_secs(options.presign_expires_secs()),
        )
        .await
    }
}

/// Execute the resolved plan and assemble the result record. Under
/// [`PersistencePlan::Both`] the local write runs first; when the upload
/// then fails, the error names the local side as already completed and the
/// written file is left in place.
async fn persist(
    plan: PersistencePlan,
    id: &str,
    audio: &Bytes,
    local_folder: &Path,
    s3_target: Option<&S3Target>,
    store: Option<&dyn AudioStore>,
    presign_expires: Duration,
) -> Result<SynthesisResult, Error> {
    let base_name = format!("{}.{}", id, AUDIO_EXTENSION);
    let mut result = SynthesisResult::new(id);

    if plan.writes_local() {
        let path = write_local(local_folder, &base_name, audio)
            .await
            .map_err(|e| Error::persistence(Destination::Local, e))?;
        result.file_name = Some(path.to_string_lossy().into_owned());
    }

    if plan.uploads_s3() {
        let (target, store) = match (s3_target, store) {
            (Some(target), Some(store)) => (target, store),
            _ => {
                return Err(Error::Configuration(
                    "plan requires S3 but no store was opened".to_string(),
                ))
            }
        };
        let wrap = |e: anyhow::Error| match plan {
            PersistencePlan::Both => {
                Error::persistence_after(Destination::S3, Destination::Local, e)
            }
            _ => Error::persistence(Destination::S3, e),
        };

        let prefix = target.prefix.trim_matches('/');
        let key = if prefix.is_empty() {
            base_name.clone()
        } else {
            format!("{}/{}", prefix, base_name)
        };

        store.put(&key, audio.clone()).await.map_err(wrap)?;
        let url = store.presigned_url(&key, presign_expires).await.map_err(wrap)?;
        info!(bucket = %target.bucket, key = %key, "presigned URL issued");

        result.s3_file_name = Some(key);
        result.s3_bucket_name = Some(target.bucket.clone());
        result.s3_presigned_url = Some(url);
    }

    Ok(result)
}

/// Convenience entry point: build an [`ElevenLabsClient`] from `config` and
/// run one synthesize-then-persist call.
pub async fn synthesize_and_store(
    text: &str,
    config: &ElevenLabsConfig,
    voice_settings: Option<VoiceSettings>,
    options: &StoreOptions,
) -> Result<SynthesisResult, Error> {
    let mut client = ElevenLabsClient::new(config);
    if let Some(settings) = voice_settings {
        client = client.with_voice_settings(settings);
    }
    Synthesizer::new(Box::new(client))
        .synthesize_and_store(text, options)
        .await
}
