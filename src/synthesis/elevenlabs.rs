use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client as HttpClient;
use serde_json::json;
use tracing::debug;

use super::{SynthesisClient, VoiceSettings};
use crate::config::ElevenLabsConfig;

pub const ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io";
pub const DEFAULT_VOICE_ID: &str = "pNInz6obpgDQGcFmaJgB";
pub const DEFAULT_MODEL_ID: &str = "eleven_turbo_v2_5";

// mp3 at 22.05 kHz / 32 kbps, available on every plan
const OUTPUT_FORMAT: &str = "mp3_22050_32";

/// ElevenLabs text-to-speech client over the plain HTTP convert endpoint.
#[derive(Debug)]
pub struct ElevenLabsClient {
    http_client: HttpClient,
    endpoint: String,
    api_key: String,
    voice_id: String,
    model_id: String,
    voice_settings: Option<VoiceSettings>,
}

impl ElevenLabsClient {
    pub fn new(config: &ElevenLabsConfig) -> Self {
        Self {
            http_client: HttpClient::new(),
            endpoint: ELEVENLABS_API_URL.to_string(),
            api_key: config.api_key.clone(),
            voice_id: config
                .voice_id
                .clone()
                .unwrap_or_else(|| DEFAULT_VOICE_ID.to_string()),
            model_id: config
                .model_id
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            voice_settings: None,
        }
    }

    pub fn with_voice_settings(mut self, settings: VoiceSettings) -> Self {
        self.voice_settings = Some(settings);
        self
    }

    /// Point the client at a different API host, e.g. a local mock server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn build_request(&self, text: &str) -> reqwest::RequestBuilder {
        let url = format!(
            "{}/v1/text-to-speech/{}?output_format={}&optimize_streaming_latency=0",
            self.endpoint.trim_end_matches('/'),
            self.voice_id,
            OUTPUT_FORMAT
        );

        let mut body = json!({
            "text": text,
            "model_id": self.model_id,
        });
        if let Some(settings) = &self.voice_settings {
            body["voice_settings"] = json!(settings);
        }

        self.http_client
            .post(url)
            .header("xi-api-key", &self.api_key)
            .json(&body)
    }
}

#[async_trait]
impl SynthesisClient for ElevenLabsClient {
    async fn synthesize(&self, text: &str) -> Result<Bytes> {
        let response = self.build_request(text).send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(anyhow!("ElevenLabs returned {}: {}", status, detail));
        }

        let audio = response.bytes().await?;
        debug!(voice_id = %self.voice_id, bytes = audio.len(), "synthesis completed");
        if audio.is_empty() {
            return Err(anyhow!("ElevenLabs returned empty audio"));
        }
        Ok(audio)
    }
}
