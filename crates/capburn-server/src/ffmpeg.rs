//! ffmpeg/ffprobe invocation
//!
//! The media engine is a black box consuming an input path, a filter graph
//! and an output path. Failures surface as [`ApiError::Engine`] carrying the
//! tail of the engine's stderr. Nothing is retried.

use crate::error::{ApiError, Result};
use std::path::Path;
use tokio::process::Command;

/// How much engine stderr to carry in an error message
const STDERR_TAIL: usize = 800;

/// Burn the filter graph into `input`, writing `output`.
///
/// Audio is copied through untouched; an empty graph still transcodes so the
/// output exists either way.
pub async fn render(ffmpeg: &str, input: &Path, graph: &str, output: &Path) -> Result<()> {
    let mut cmd = Command::new(ffmpeg);
    cmd.arg("-y").arg("-i").arg(input);
    if !graph.is_empty() {
        cmd.arg("-vf").arg(graph);
    }
    cmd.arg("-c:a").arg("copy").arg(output);
    run_engine(cmd, "render").await
}

/// Extract mono 16 kHz low-bitrate audio for the transcription service
pub async fn extract_audio(ffmpeg: &str, input: &Path, output: &Path) -> Result<()> {
    let mut cmd = Command::new(ffmpeg);
    cmd.arg("-y")
        .arg("-i")
        .arg(input)
        .args(["-vn", "-ac", "1", "-ar", "16000", "-b:a", "64k"])
        .arg(output);
    run_engine(cmd, "extract_audio").await
}

/// Media duration in seconds via ffprobe
pub async fn probe_duration(ffprobe: &str, input: &Path) -> Result<f64> {
    let output = Command::new(ffprobe)
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(input)
        .output()
        .await
        .map_err(|err| ApiError::Engine(format!("failed to spawn ffprobe: {err}")))?;

    if !output.status.success() {
        return Err(ApiError::Engine(format!(
            "ffprobe failed: {}",
            stderr_tail(&output.stderr)
        )));
    }

    String::from_utf8_lossy(&output.stdout)
        .trim()
        .parse::<f64>()
        .map_err(|err| ApiError::Engine(format!("unparseable ffprobe duration: {err}")))
}

async fn run_engine(mut cmd: Command, stage: &str) -> Result<()> {
    tracing::debug!(stage, command = ?cmd.as_std(), "engine_invocation");
    let output = cmd
        .output()
        .await
        .map_err(|err| ApiError::Engine(format!("failed to spawn ffmpeg: {err}")))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(ApiError::Engine(format!(
            "{stage}: {}",
            stderr_tail(&output.stderr)
        )))
    }
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let trimmed = text.trim();
    if trimmed.len() <= STDERR_TAIL {
        trimmed.to_string()
    } else {
        let cut = trimmed.len() - STDERR_TAIL;
        let start = trimmed
            .char_indices()
            .map(|(i, _)| i)
            .find(|&i| i >= cut)
            .unwrap_or(0);
        trimmed[start..].to_string()
    }
}
