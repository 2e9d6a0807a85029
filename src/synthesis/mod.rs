use crate::error::Error;
use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

mod elevenlabs;
pub use elevenlabs::ElevenLabsClient;

/// Synthesis tuning parameters, serialized into the provider request body.
/// Absent means the provider's own defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.0,
            similarity_boost: 1.0,
            style: 0.0,
            use_speaker_boost: true,
        }
    }
}

impl VoiceSettings {
    /// Build validated settings. Each tuning value must lie in `[0, 1]`.
    pub fn new(stability: f32, similarity_boost: f32, style: f32) -> Result<Self, Error> {
        for (name, value) in [
            ("stability", stability),
            ("similarity_boost", similarity_boost),
            ("style", style),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Configuration(format!(
                    "voice setting {} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(Self {
            stability,
            similarity_boost,
            style,
            ..Default::default()
        })
    }

    pub fn with_speaker_boost(mut self, enabled: bool) -> Self {
        self.use_speaker_boost = enabled;
        self
    }
}

/// A text-to-speech provider returning one complete audio payload per call.
#[async_trait]
pub trait SynthesisClient: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Bytes>;
}
