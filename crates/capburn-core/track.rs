//! ASS track document compiler (static rendering path)
//!
//! Builds a complete `[Script Info]` / `[V4+ Styles]` / `[Events]` document
//! from a resolved style and cue list. The header declares the fixed
//! 1920×1080 reference canvas with `ScaledBorderAndShadow` enabled so
//! border and shadow widths scale to the actual video resolution. Output is
//! byte-deterministic for identical inputs.

use crate::cue::Cue;
use crate::style::ResolvedStyle;
use crate::utils::{ass_token_to_style, format_ass_time};
use std::fmt::Write;

/// Reference canvas width declared in the script header
const PLAY_RES_X: u32 = 1920;

/// Reference canvas height declared in the script header
const PLAY_RES_Y: u32 = 1080;

/// Compile the cue list into a complete ASS document string.
///
/// Cue order follows input order; overlapping cue timings are permitted and
/// left to the rendering engine. Forced wrapping (words-per-line > 0) joins
/// wrapped lines with the ASS line-break token `\N`, never a raw newline.
#[must_use]
pub fn compile_track(cues: &[Cue], style: &ResolvedStyle) -> String {
    let mut doc = String::with_capacity(512 + cues.len() * 96);

    let _ = write!(
        doc,
        "[Script Info]\n\
         ScriptType: v4.00+\n\
         PlayResX: {PLAY_RES_X}\n\
         PlayResY: {PLAY_RES_Y}\n\
         ScaledBorderAndShadow: yes\n\
         \n\
         [V4+ Styles]\n\
         Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n\
         {}\n\
         \n\
         [Events]\n\
         Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n",
        style_line(style)
    );

    for cue in cues {
        if cue.text.trim().is_empty() {
            continue;
        }
        let _ = writeln!(
            doc,
            "Dialogue: 0,{},{},Default,,0,0,0,,{}",
            format_ass_time(cue.start),
            format_ass_time(cue.end),
            wrap_text(&cue.text, style.words_per_line)
        );
    }

    doc
}

/// Render the single `Style:` record from the resolved parameters
fn style_line(style: &ResolvedStyle) -> String {
    format!(
        "Style: Default,{font},{size},{primary},{primary},{outline_c},{back},{bold},0,0,0,100,100,0,0,{border},{outline},{shadow},{align},{ml},{mr},{mv},1",
        font = style.font,
        size = style.font_size,
        primary = ass_token_to_style(&style.primary_colour),
        outline_c = ass_token_to_style(&style.outline_colour),
        back = style.back_colour,
        bold = style.bold,
        border = style.border_style,
        outline = style.outline,
        shadow = style.shadow,
        align = style.alignment,
        ml = style.margin_l,
        mr = style.margin_r,
        mv = style.margin_v,
    )
}

/// Join the text into lines of `words_per_line` words with the ASS break
/// token; 0 leaves the text untouched.
fn wrap_text(text: &str, words_per_line: u32) -> String {
    if words_per_line == 0 {
        return text.to_string();
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    words
        .chunks(words_per_line as usize)
        .map(|chunk| chunk.join(" "))
        .collect::<Vec<_>>()
        .join("\\N")
}
