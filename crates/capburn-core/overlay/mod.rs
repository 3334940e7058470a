//! Animated overlay compiler
//!
//! Turns cues into ordered, time-windowed drawtext commands. Three families:
//!
//! - **Motion** (`motion`): whole-cue fades and slides, one command per
//!   wrapped line
//! - **Word** (`word`): per-word reveal/color/fill/highlight/stroke, one to
//!   three commands per word driven by the word-timing table
//! - **Decor** (`decor`): fire/ice palette flicker and RGB glitch, a fixed
//!   command stack per wrapped line
//!
//! All families share [`layout::CueLayout`] for wrapping and placement.
//! Command order within and across cues is the stacking order; the assembler
//! must not reorder.

pub mod draw;
pub mod layout;

mod decor;
mod motion;
mod word;

pub use draw::DrawCmd;

use crate::cue::Cue;
use crate::style::ResolvedStyle;
use layout::CueLayout;

/// Line-height factor for whole-line families
const LINE_FACTOR: f32 = 1.2;

/// Line-height factor for per-word families (room for highlight boxes)
const WORD_LINE_FACTOR: f32 = 1.3;

/// The supported animation selection.
///
/// Parsed from the user-facing kebab-case name; anything unrecognized is
/// [`Animation::None`], which routes the request to the track-document path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    None,
    FadeIn,
    SlideUp,
    SlideLeft,
    Bounce,
    Typewriter,
    WordReveal,
    WordColor,
    WordFill,
    WordHighlight,
    Stroke,
    FireText,
    IceText,
    Glitch,
}

impl Animation {
    /// Parse the user-facing animation name; unknown names degrade to `None`
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "fade-in" => Self::FadeIn,
            "slide-up" => Self::SlideUp,
            "slide-left" => Self::SlideLeft,
            "bounce" => Self::Bounce,
            "typewriter" => Self::Typewriter,
            "word-reveal" => Self::WordReveal,
            "word-color" => Self::WordColor,
            "word-fill" => Self::WordFill,
            "word-highlight" => Self::WordHighlight,
            "stroke" => Self::Stroke,
            "fire-text" => Self::FireText,
            "ice-text" => Self::IceText,
            "glitch" => Self::Glitch,
            _ => Self::None,
        }
    }

    /// Whether this animation is driven by per-word timing windows
    #[must_use]
    pub fn is_per_word(self) -> bool {
        matches!(
            self,
            Self::WordReveal | Self::WordColor | Self::WordFill | Self::WordHighlight | Self::Stroke
        )
    }

    fn line_factor(self) -> f32 {
        if self.is_per_word() {
            WORD_LINE_FACTOR
        } else {
            LINE_FACTOR
        }
    }
}

/// The compiled output of one render request: a complete subtitle-track
/// document for the static path, or the ordered drawtext command list for
/// the animated path.
#[derive(Debug, Clone, PartialEq)]
pub enum CompiledOverlay {
    Document(String),
    Commands(Vec<DrawCmd>),
}

/// Compile all cues under one animation into the flat, ordered command list.
///
/// Cues contribute commands in input order; a cue with no words after
/// trimming contributes nothing. `animation` must not be [`Animation::None`]
/// (the caller routes that to the track compiler).
#[must_use]
pub fn compile_overlay(
    cues: &[Cue],
    style: &ResolvedStyle,
    animation: Animation,
) -> Vec<DrawCmd> {
    debug_assert_ne!(animation, Animation::None);

    let mut cmds = Vec::new();
    for cue in cues {
        let Some(layout) = CueLayout::build(cue, style, animation.line_factor()) else {
            continue;
        };
        let cue_cmds = match animation {
            Animation::FadeIn
            | Animation::SlideUp
            | Animation::SlideLeft
            | Animation::Bounce
            | Animation::Typewriter => motion::compile(animation, &layout, style, cue),
            Animation::WordReveal
            | Animation::WordColor
            | Animation::WordFill
            | Animation::WordHighlight
            | Animation::Stroke => word::compile(animation, &layout, style, cue),
            Animation::FireText | Animation::IceText | Animation::Glitch => {
                decor::compile(animation, &layout, style, cue)
            }
            Animation::None => Vec::new(),
        };
        cmds.extend(cue_cmds);
    }
    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{resolve, StyleOptions};

    #[test]
    fn parse_known_names() {
        assert_eq!(Animation::parse("fade-in"), Animation::FadeIn);
        assert_eq!(Animation::parse("word-highlight"), Animation::WordHighlight);
        assert_eq!(Animation::parse("glitch"), Animation::Glitch);
    }

    #[test]
    fn parse_unknown_degrades_to_none() {
        assert_eq!(Animation::parse("none"), Animation::None);
        assert_eq!(Animation::parse(""), Animation::None);
        assert_eq!(Animation::parse("FADE-IN"), Animation::None);
    }

    #[test]
    fn empty_cues_contribute_no_commands() {
        let style = resolve(&StyleOptions::default());
        let cues = vec![Cue::new("  ", 0.0, 1.0), Cue::new("ok", 1.0, 2.0)];
        let cmds = compile_overlay(&cues, &style, Animation::WordReveal);
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].text, "ok");
    }

    #[test]
    fn cues_emit_in_input_order() {
        let style = resolve(&StyleOptions::default());
        let cues = vec![Cue::new("first", 0.0, 1.0), Cue::new("second", 1.0, 2.0)];
        let cmds = compile_overlay(&cues, &style, Animation::FadeIn);
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].text, "first");
        assert_eq!(cmds[1].text, "second");
    }

    #[test]
    fn per_word_families_are_flagged() {
        assert!(Animation::WordFill.is_per_word());
        assert!(!Animation::Bounce.is_per_word());
        assert!(!Animation::FireText.is_per_word());
    }
}
