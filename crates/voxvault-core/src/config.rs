//! Engine configuration from environment variables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_REMOTE_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_DAILY_QUOTA: u32 = 20;

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Groq API key; absent or empty disables the remote tier entirely.
    pub groq_api_key: Option<String>,
    /// Chat-completions model used by the remote tier.
    pub remote_model: String,
    /// Daily ceiling on remote-tier calls.
    pub daily_quota: u32,
    /// Quota state file (`<data_dir>/quota.json`).
    pub quota_file: PathBuf,
}

impl EngineConfig {
    /// Create configuration from environment and defaults. Creates `data_dir`
    /// if needed.
    pub fn from_env(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;

        let groq_api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        let remote_model = std::env::var("VOXVAULT_REMOTE_MODEL")
            .unwrap_or_else(|_| DEFAULT_REMOTE_MODEL.into());
        let daily_quota = std::env::var("VOXVAULT_DAILY_QUOTA")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_DAILY_QUOTA);

        Ok(Self {
            groq_api_key,
            remote_model,
            daily_quota,
            quota_file: data_dir.join("quota.json"),
        })
    }

    /// Whether a remote access credential is provisioned.
    pub fn remote_configured(&self) -> bool {
        self.groq_api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}
