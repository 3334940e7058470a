//! Environment configuration
//!
//! All settings come from `CAPBURN_`-prefixed environment variables (a local
//! `.env` file is honored), resolved once at startup. The work directory is
//! created eagerly so request handlers never race on it.

use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_addr() -> String {
    String::from("0.0.0.0:3000")
}

fn default_work_dir() -> PathBuf {
    PathBuf::from("work")
}

fn default_ffmpeg() -> String {
    String::from("ffmpeg")
}

fn default_ffprobe() -> String {
    String::from("ffprobe")
}

/// Service configuration, deserialized from `CAPBURN_*` variables
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Listen address (`CAPBURN_ADDR`)
    #[serde(default = "default_addr")]
    pub addr: String,

    /// Root of the scratch and output directories (`CAPBURN_WORK_DIR`)
    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,

    /// ffmpeg binary (`CAPBURN_FFMPEG`)
    #[serde(default = "default_ffmpeg")]
    pub ffmpeg: String,

    /// ffprobe binary (`CAPBURN_FFPROBE`)
    #[serde(default = "default_ffprobe")]
    pub ffprobe: String,

    /// Transcription service endpoint (`CAPBURN_TRANSCRIBE_URL`); the
    /// transcribe route fails with a gateway error when unset
    #[serde(default)]
    pub transcribe_url: Option<String>,

    /// Bearer token for the transcription service (`CAPBURN_TRANSCRIBE_KEY`)
    #[serde(default)]
    pub transcribe_key: Option<String>,
}

impl Config {
    /// Load the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is present but unparseable, or the
    /// work directory cannot be created.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let _ = dotenvy::dotenv();
        let config: Self = envy::prefixed("CAPBURN_").from_env()?;
        std::fs::create_dir_all(config.scratch_dir())?;
        std::fs::create_dir_all(config.outputs_dir())?;
        Ok(config)
    }

    /// Directory for per-request scratch files
    #[must_use]
    pub fn scratch_dir(&self) -> PathBuf {
        self.work_dir.join("scratch")
    }

    /// Directory for rendered outputs, served under `/outputs`
    #[must_use]
    pub fn outputs_dir(&self) -> PathBuf {
        self.work_dir.join("outputs")
    }

    /// Public URL path of a rendered file
    #[must_use]
    pub fn output_url(output: &Path) -> String {
        let name = output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("/outputs/{name}")
    }
}
