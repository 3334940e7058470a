//! Per-word reveal and highlight animations
//!
//! Each word is drawn at its fixed line position; the animation lives
//! entirely in the visibility windows and color switches. Word windows come
//! from the layout's timing table and are emitted verbatim, degenerate or
//! not. Stacking matters for word-highlight: the boxed layers are pushed
//! after every base layer so the highlight always draws on top.

use crate::cue::Cue;
use crate::overlay::draw::DrawCmd;
use crate::overlay::layout::{CueLayout, PlacedWord};
use crate::overlay::Animation;
use crate::style::ResolvedStyle;
use crate::utils::ass_token_to_drawtext;

/// Opacity of the word-highlight box fill
const HIGHLIGHT_BOX_OPACITY: &str = "0.8";

/// Fill opacity of a not-yet-spoken stroke word
const STROKE_DIM_OPACITY: &str = "0.2";

/// Outline width of a not-yet-spoken stroke word, pixels
const STROKE_BORDER: f32 = 4.0;

/// Compile one per-word animation for a placed cue
pub(super) fn compile(
    animation: Animation,
    layout: &CueLayout,
    style: &ResolvedStyle,
    cue: &Cue,
) -> Vec<DrawCmd> {
    let base = ass_token_to_drawtext(&style.primary_colour);
    let effect = ass_token_to_drawtext(&style.effect_colour);
    let word_cmd =
        |word: &PlacedWord| DrawCmd::styled(&word.word, style).at(&word.x_expr, &word.y_expr);

    let mut cmds = Vec::with_capacity(layout.words.len() * 2);
    match animation {
        // Invisible until spoken, then stays in the base color
        Animation::WordReveal => {
            for word in &layout.words {
                cmds.push(word_cmd(word).window(word.start, cue.end));
            }
        }

        // Base before and after, effect color strictly during the word
        Animation::WordColor => {
            for word in &layout.words {
                cmds.push(word_cmd(word).window(cue.start, word.start));
                cmds.push(word_cmd(word).color(&effect).window(word.start, word.end));
                cmds.push(word_cmd(word).window(word.end, cue.end));
            }
        }

        // Progressive fill: switches to the effect color and never reverts
        Animation::WordFill => {
            for word in &layout.words {
                cmds.push(word_cmd(word).window(cue.start, word.start));
                cmds.push(word_cmd(word).color(&effect).window(word.start, cue.end));
            }
        }

        // Karaoke backdrop plus a boxed copy during the word window
        Animation::WordHighlight => {
            for word in &layout.words {
                cmds.push(word_cmd(word).window(cue.start, cue.end));
            }
            for word in &layout.words {
                cmds.push(
                    word_cmd(word)
                        .boxed(format!("{effect}@{HIGHLIGHT_BOX_OPACITY}"))
                        .window(word.start, word.end),
                );
            }
        }

        // Hollow outline until spoken, then solid effect fill
        Animation::Stroke => {
            for word in &layout.words {
                cmds.push(
                    word_cmd(word)
                        .color(format!("{base}@{STROKE_DIM_OPACITY}"))
                        .border(STROKE_BORDER, &base)
                        .window(cue.start, word.start),
                );
                cmds.push(word_cmd(word).color(&effect).window(word.start, cue.end));
            }
        }

        _ => unreachable!("not a per-word animation"),
    }
    cmds
}
