//! Shared multi-line overlay layout
//!
//! Every animation family needs the same scaffolding: derive the word-timing
//! table, chunk it into wrapped lines, compute per-word x offsets and
//! per-line y expressions. That lives here once; the family generators plug
//! their formulas into the placed words and lines. Wrapping always chunks
//! the already-derived timing list, never the raw text, so wrapped lines can
//! never drift out of sync with the word windows.

use crate::cue::Cue;
use crate::layout::{anchor_y_expr, centered_word_x_expr, line_block_height, line_height,
    word_pixel_offsets};
use crate::style::ResolvedStyle;
use crate::timing::derive_word_timings;

/// One word with its timing window and resolved screen position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    /// Word window start in seconds
    pub start: f64,
    /// Word window end in seconds
    pub end: f64,
    /// Horizontal position expression within the centered line
    pub x_expr: String,
    /// Vertical position expression of the owning line
    pub y_expr: String,
    /// Index of the owning line
    pub line: usize,
}

/// One wrapped line for whole-line families
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutLine {
    /// Space-joined text of the line's words
    pub text: String,
    /// Vertical position expression
    pub y_expr: String,
    pub index: usize,
}

/// Fully placed cue: wrapped lines plus per-word positions
#[derive(Debug, Clone, PartialEq)]
pub struct CueLayout {
    pub lines: Vec<LayoutLine>,
    pub words: Vec<PlacedWord>,
    /// Height of a single line in pixels
    pub line_height: u32,
}

impl CueLayout {
    /// Place a cue's words under the style's vertical anchor.
    ///
    /// `line_factor` is the line-height multiplier (1.2 for whole-line
    /// families, 1.3 for per-word families). Returns `None` when the cue
    /// yields zero words; callers emit nothing for that cue.
    #[must_use]
    pub fn build(cue: &Cue, style: &ResolvedStyle, line_factor: f32) -> Option<Self> {
        let timings = derive_word_timings(cue);
        if timings.is_empty() {
            return None;
        }

        let per_line = if style.words_per_line == 0 {
            timings.len()
        } else {
            style.words_per_line as usize
        };
        let chunks: Vec<_> = timings.chunks(per_line).collect();

        let block = line_block_height(chunks.len(), style.font_size, line_factor);
        let lh = line_height(style.font_size, line_factor);

        let mut lines = Vec::with_capacity(chunks.len());
        let mut words = Vec::new();
        for (line_index, chunk) in chunks.iter().enumerate() {
            let y_expr = anchor_y_expr(style.anchor, block, line_index as u32 * lh);
            let tokens: Vec<&str> = chunk.iter().map(|w| w.word.as_str()).collect();
            let offsets = word_pixel_offsets(&tokens, style.font_size);

            for (timing, offset) in chunk.iter().zip(&offsets.offsets) {
                words.push(PlacedWord {
                    word: timing.word.clone(),
                    start: timing.start,
                    end: timing.end,
                    x_expr: centered_word_x_expr(offsets.total_width, *offset),
                    y_expr: y_expr.clone(),
                    line: line_index,
                });
            }
            lines.push(LayoutLine {
                text: tokens.join(" "),
                y_expr,
                index: line_index,
            });
        }

        Some(Self {
            lines,
            words,
            line_height: lh,
        })
    }
}
