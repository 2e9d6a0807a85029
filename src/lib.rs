//! ElevenLabs text-to-speech with local and S3 persistence.
//!
//! One call synthesizes speech and persists the MP3 according to which
//! destination parameters were supplied: a local folder, an S3 bucket with
//! credentials, both, or neither (a default folder). The returned
//! [`SynthesisResult`] records exactly what was written where.
//!
//! ```no_run
//! use elevenlabs_s3::{synthesize_and_store, ElevenLabsConfig, StoreOptions};
//!
//! # async fn demo() -> Result<(), elevenlabs_s3::Error> {
//! let config = ElevenLabsConfig::new("your-api-key");
//! let options = StoreOptions {
//!     local_folder: Some("local_files".into()),
//!     ..Default::default()
//! };
//! let result = synthesize_and_store("Hello, this is a test.", &config, None, &options).await?;
//! println!("saved {}", result.file_name.unwrap());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod plan;
pub mod storage;
pub mod synthesis;

pub use config::{ElevenLabsConfig, S3Credentials, StoreOptions};
pub use error::{Destination, Error};
pub use pipeline::{synthesize_and_store, SynthesisResult, Synthesizer};
pub use plan::PersistencePlan;
pub use synthesis::{ElevenLabsClient, SynthesisClient, VoiceSettings};
