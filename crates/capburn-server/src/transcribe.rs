//! Transcription client and cue mapping
//!
//! The service is a black box taking mono 16 kHz audio and returning, in
//! order of preference, word-level timestamps, segment-level timestamps, or
//! plain text. Words are regrouped into cues of about six words, breaking
//! early on a noticeable inter-word silence; the raw word windows ride along
//! so per-word animations stay authoritative.

use crate::config::Config;
use crate::error::{ApiError, Result};
use capburn_core::{Cue, WordTiming};
use serde::Deserialize;
use std::path::Path;

/// Target words per generated cue
const WORDS_PER_CUE: usize = 6;

/// Inter-word gap that forces a cue break, seconds
const GAP_BREAK: f64 = 0.5;

/// Wire shape of the transcription response; all levels optional
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptResponse {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub words: Option<Vec<TranscriptWord>>,
    #[serde(default)]
    pub segments: Option<Vec<TranscriptSegment>>,
    #[serde(default)]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptWord {
    pub word: String,
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

/// Post the extracted audio to the configured transcription service
pub async fn request_transcript(
    client: &reqwest::Client,
    config: &Config,
    audio: &Path,
) -> Result<TranscriptResponse> {
    let url = config
        .transcribe_url
        .as_deref()
        .ok_or_else(|| ApiError::Transcribe(String::from("no transcription service configured")))?;

    let bytes = tokio::fs::read(audio).await?;
    let file_name = audio
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("audio.mp3"));
    let form = reqwest::multipart::Form::new().part(
        "file",
        reqwest::multipart::Part::bytes(bytes).file_name(file_name),
    );

    let mut request = client.post(url).multipart(form);
    if let Some(key) = &config.transcribe_key {
        request = request.bearer_auth(key);
    }

    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(ApiError::Transcribe(format!(
            "service returned {}",
            response.status()
        )));
    }
    Ok(response.json().await?)
}

/// Map a transcript to cues.
///
/// Preference order: word timestamps, then segments, then a single cue
/// spanning `[0, fallback_duration]` from the plain text. Returns an empty
/// list when the transcript carries nothing usable.
#[must_use]
pub fn cues_from_transcript(transcript: &TranscriptResponse, fallback_duration: f64) -> Vec<Cue> {
    if let Some(words) = &transcript.words {
        if !words.is_empty() {
            return group_words(words);
        }
    }

    if let Some(segments) = &transcript.segments {
        let cues: Vec<Cue> = segments
            .iter()
            .filter(|s| !s.text.trim().is_empty())
            .map(|s| Cue::new(s.text.trim(), s.start, s.end))
            .collect();
        if !cues.is_empty() {
            return cues;
        }
    }

    let text = transcript.text.as_deref().unwrap_or("").trim();
    if text.is_empty() {
        return Vec::new();
    }
    let end = transcript.duration.unwrap_or(fallback_duration).max(0.1);
    vec![Cue::new(text, 0.0, end)]
}

/// Chunk raw words into cues, breaking at [`WORDS_PER_CUE`] or on a gap
/// longer than [`GAP_BREAK`] seconds
fn group_words(words: &[TranscriptWord]) -> Vec<Cue> {
    let mut cues = Vec::new();
    let mut chunk: Vec<&TranscriptWord> = Vec::with_capacity(WORDS_PER_CUE);

    let flush = |chunk: &mut Vec<&TranscriptWord>, cues: &mut Vec<Cue>| {
        if chunk.is_empty() {
            return;
        }
        let text = chunk
            .iter()
            .map(|w| w.word.trim())
            .collect::<Vec<_>>()
            .join(" ");
        let timings = chunk
            .iter()
            .map(|w| WordTiming {
                word: w.word.trim().to_string(),
                start: w.start,
                end: w.end,
            })
            .collect();
        cues.push(Cue {
            text,
            start: chunk[0].start,
            end: chunk[chunk.len() - 1].end,
            words: Some(timings),
        });
        chunk.clear();
    };

    for word in words {
        if word.word.trim().is_empty() {
            continue;
        }
        if let Some(last) = chunk.last() {
            if word.start - last.end > GAP_BREAK || chunk.len() >= WORDS_PER_CUE {
                flush(&mut chunk, &mut cues);
            }
        }
        chunk.push(word);
    }
    flush(&mut chunk, &mut cues);
    cues
}
