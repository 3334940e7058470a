//! Whole-cue motion and fade animations
//!
//! One command per wrapped line, visible for the full cue window. Each
//! variant owns exactly one channel: fade-in and typewriter animate opacity,
//! slide-up and bounce animate y, slide-left animates x. Motion settles onto
//! the line's anchor expression and holds there for the rest of the window.

use crate::cue::Cue;
use crate::overlay::draw::{elapsed_expr, fmt_num, DrawCmd};
use crate::overlay::layout::CueLayout;
use crate::overlay::Animation;
use crate::style::ResolvedStyle;

/// Duration of the fade-in opacity ramp, seconds
const FADE_IN_RAMP: f64 = 0.5;

/// Duration of the slide-up / slide-left travel, seconds
const SLIDE_TRAVEL: f64 = 0.8;

/// Duration of the bounce oscillation, seconds
const BOUNCE_WINDOW: f64 = 0.5;

/// Vertical amplitude of the bounce, pixels
const BOUNCE_AMPLITUDE: u32 = 30;

/// Typewriter ramp: seconds per character and the clamp bounds
const TYPEWRITER_PER_CHAR: f64 = 0.08;
const TYPEWRITER_MIN: f64 = 0.5;
const TYPEWRITER_MAX_FRACTION: f64 = 0.8;

/// Compile one whole-cue animation for a placed cue
pub(super) fn compile(
    animation: Animation,
    layout: &CueLayout,
    style: &ResolvedStyle,
    cue: &Cue,
) -> Vec<DrawCmd> {
    let el = elapsed_expr(cue.start);

    layout
        .lines
        .iter()
        .map(|line| {
            let cmd = DrawCmd::styled(&line.text, style).window(cue.start, cue.end);
            match animation {
                Animation::FadeIn => {
                    let ramp = fmt_num(FADE_IN_RAMP);
                    cmd.at("(w-text_w)/2", &line.y_expr)
                        .alpha(format!("min({el}/{ramp},1)"))
                }
                Animation::Typewriter => {
                    let chars = line.text.chars().count() as f64;
                    // Upper bound wins for cues shorter than min/0.8 s, so
                    // apply the floor before the cap instead of clamping
                    let ramp = (TYPEWRITER_PER_CHAR * chars)
                        .max(TYPEWRITER_MIN)
                        .min(TYPEWRITER_MAX_FRACTION * cue.duration());
                    let ramp = fmt_num(ramp);
                    cmd.at("(w-text_w)/2", &line.y_expr)
                        .alpha(format!("min({el}/{ramp},1)"))
                }
                Animation::SlideUp => {
                    let target = &line.y_expr;
                    let travel = fmt_num(SLIDE_TRAVEL);
                    let y = format!(
                        "if(lt({el},{travel}),h-50+(({target})-(h-50))*{el}/{travel},{target})"
                    );
                    cmd.at("(w-text_w)/2", y)
                }
                Animation::SlideLeft => {
                    let travel = fmt_num(SLIDE_TRAVEL);
                    let x = format!(
                        "if(lt({el},{travel}),w+((w-text_w)/2-w)*{el}/{travel},(w-text_w)/2)"
                    );
                    cmd.at(x, &line.y_expr)
                }
                Animation::Bounce => {
                    let target = &line.y_expr;
                    let window = fmt_num(BOUNCE_WINDOW);
                    let y = format!(
                        "if(lt({el},{window}),({target})-{BOUNCE_AMPLITUDE}*sin(6*{el}),{target})"
                    );
                    cmd.at("(w-text_w)/2", y)
                }
                _ => unreachable!("not a whole-cue animation"),
            }
        })
        .collect()
}
