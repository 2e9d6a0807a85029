use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where an audio artifact was (or was supposed to be) persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Local,
    S3,
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Local => write!(f, "local"),
            Destination::S3 => write!(f, "s3"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// Inconsistent or partial destination parameters. Raised before any
    /// network or disk activity.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The ElevenLabs call failed or returned unusable audio.
    #[error("synthesis failed: {0}")]
    Synthesis(#[source] anyhow::Error),

    /// A local write or S3 upload failed. `completed` names the destination
    /// that already succeeded (if any) so the caller can clean up or retry;
    /// the crate never rolls back the succeeded side.
    #[error("persistence to {failed} failed{}: {source}", .completed.map(|d| format!(" ({d} already completed)")).unwrap_or_default())]
    Persistence {
        failed: Destination,
        completed: Option<Destination>,
        #[source]
        source: anyhow::Error,
    },
}

impl Error {
    pub(crate) fn persistence(failed: Destination, source: anyhow::Error) -> Self {
        Error::Persistence {
            failed,
            completed: None,
            source,
        }
    }

    pub(crate) fn persistence_after(
        failed: Destination,
        completed: Destination,
        source: anyhow::Error,
    ) -> Self {
        Error::Persistence {
            failed,
            completed: Some(completed),
            source,
        }
    }
}
