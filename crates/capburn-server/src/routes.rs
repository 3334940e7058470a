//! HTTP handlers
//!
//! Two endpoints: `POST /api/render` burns a cue list into an uploaded
//! video, `POST /api/transcribe` derives a cue list from an uploaded video's
//! audio. Both parse one multipart body, do all compilation in-process, and
//! only block on the engine/service at the boundary. Scratch files live for
//! the request; rendered outputs stay behind for `/outputs` serving.

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::scratch::Scratch;
use crate::{ffmpeg, transcribe};
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use capburn_core::filter::assemble;
use capburn_core::{compile, CompiledOverlay, Cue, StyleOptions};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Upload cap for multipart request bodies
const BODY_LIMIT: usize = 512 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub success: bool,
    pub output: String,
}

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub success: bool,
    pub cues: Vec<Cue>,
}

/// Build the service router over shared state
pub fn router(state: AppState) -> Router {
    let outputs = state.config.outputs_dir();
    Router::new()
        .route("/api/render", post(render))
        .route("/api/transcribe", post(transcribe_video))
        .nest_service("/outputs", ServeDir::new(outputs))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}

/// One parsed multipart upload: the video bytes plus loose form fields
struct Upload {
    video: Option<(String, Vec<u8>)>,
    cues_json: Option<String>,
    fields: HashMap<String, String>,
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload> {
    let mut upload = Upload {
        video: None,
        cues_json: None,
        fields: HashMap::new(),
    };
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };
        match name.as_str() {
            "video" => {
                let ext = field
                    .file_name()
                    .and_then(|n| n.rsplit('.').next().map(ToString::to_string))
                    .filter(|e| !e.is_empty() && e.len() <= 5)
                    .unwrap_or_else(|| String::from("mp4"));
                upload.video = Some((ext, field.bytes().await?.to_vec()));
            }
            "cues" => upload.cues_json = Some(field.text().await?),
            _ => {
                upload.fields.insert(name, field.text().await?);
            }
        }
    }
    Ok(upload)
}

/// Assemble StyleOptions from loose form fields; missing or unparseable
/// values take the defaults, matching the compiler's degradation rules
fn style_from_fields(fields: &HashMap<String, String>) -> StyleOptions {
    let mut opts = StyleOptions::default();
    let text = |key: &str, slot: &mut String| {
        if let Some(value) = fields.get(key) {
            if !value.trim().is_empty() {
                *slot = value.trim().to_string();
            }
        }
    };
    text("preset", &mut opts.preset);
    text("font", &mut opts.font);
    text("color", &mut opts.color);
    text("position", &mut opts.position);
    text("background", &mut opts.background);
    text("animation", &mut opts.animation);
    text("effectColor", &mut opts.effect_color);
    text("outlineColor", &mut opts.outline_color);
    text("shadowColor", &mut opts.shadow_color);

    if let Some(size) = fields.get("fontSize").and_then(|v| v.trim().parse().ok()) {
        opts.font_size = size;
    }
    if let Some(wpl) = fields.get("wordsPerLine").and_then(|v| v.trim().parse().ok()) {
        opts.words_per_line = wpl;
    }
    opts.outline_thickness = fields
        .get("outlineThickness")
        .and_then(|v| v.trim().parse().ok());
    opts.shadow_depth = fields.get("shadowDepth").and_then(|v| v.trim().parse().ok());
    opts
}

fn parse_cues(json: &str) -> Result<Vec<Cue>> {
    let cues: Vec<Cue> = serde_json::from_str(json)
        .map_err(|err| ApiError::BadRequest(format!("unparseable cue list: {err}")))?;
    if cues.is_empty() {
        return Err(ApiError::BadRequest(String::from("cue list is empty")));
    }
    for (index, cue) in cues.iter().enumerate() {
        cue.validate(index)
            .map_err(|err| ApiError::BadRequest(err.to_string()))?;
    }
    Ok(cues)
}

async fn render(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<RenderResponse>> {
    let upload = read_upload(multipart).await?;
    let (ext, video) = upload
        .video
        .ok_or_else(|| ApiError::BadRequest(String::from("missing video file")))?;
    let cues = parse_cues(
        upload
            .cues_json
            .as_deref()
            .ok_or_else(|| ApiError::BadRequest(String::from("missing cue list")))?,
    )?;
    let opts = style_from_fields(&upload.fields);

    let scratch_dir = state.config.scratch_dir();
    let mut scratch = Scratch::new();
    let input = scratch.create(&scratch_dir, "upload", &ext);
    tokio::fs::write(&input, &video).await?;

    let overlay = compile(&cues, &opts);
    let track = scratch.create(&scratch_dir, "track", "ass");
    if let CompiledOverlay::Document(doc) = &overlay {
        tokio::fs::write(&track, doc).await?;
    }
    let graph = assemble(&overlay, &track.to_string_lossy());

    // Tracked until the engine succeeds so a failed render never leaves a
    // partial file behind the public /outputs route
    let output = scratch.create(&state.config.outputs_dir(), "rendered", "mp4");
    tracing::info!(cues = cues.len(), animation = %opts.animation, "render_start");
    ffmpeg::render(&state.config.ffmpeg, &input, &graph, &output).await?;
    scratch.release(&output);
    tracing::info!(output = %output.display(), "render_done");

    Ok(Json(RenderResponse {
        success: true,
        output: Config::output_url(&output),
    }))
}

async fn transcribe_video(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TranscribeResponse>> {
    let upload = read_upload(multipart).await?;
    let (ext, video) = upload
        .video
        .ok_or_else(|| ApiError::BadRequest(String::from("missing video file")))?;

    let scratch_dir = state.config.scratch_dir();
    let mut scratch = Scratch::new();
    let input = scratch.create(&scratch_dir, "upload", &ext);
    tokio::fs::write(&input, &video).await?;

    let audio = scratch.create(&scratch_dir, "audio", "mp3");
    ffmpeg::extract_audio(&state.config.ffmpeg, &input, &audio).await?;

    let transcript = transcribe::request_transcript(&state.http, &state.config, &audio).await?;
    let fallback = if transcript.duration.is_some() {
        0.0
    } else {
        ffmpeg::probe_duration(&state.config.ffprobe, &input)
            .await
            .unwrap_or(0.0)
    };
    let cues = transcribe::cues_from_transcript(&transcript, fallback);
    tracing::info!(cues = cues.len(), "transcribe_done");

    Ok(Json(TranscribeResponse {
        success: true,
        cues,
    }))
}
