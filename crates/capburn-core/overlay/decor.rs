//! Decorative flicker and glitch animations
//!
//! These ignore word timing entirely and work per wrapped line over the full
//! cue window. Fire and ice cycle a fixed five-color palette by gating each
//! copy to its slice of a repeating cycle; glitch stacks jittered RGB
//! channel copies under an opaque white main layer. Stacking order is load
//! bearing in both: the assembler draws later commands on top.

use crate::cue::Cue;
use crate::overlay::draw::{elapsed_expr, fmt_num, window_expr, DrawCmd};
use crate::overlay::layout::{CueLayout, LayoutLine};
use crate::overlay::Animation;
use crate::style::ResolvedStyle;

/// Seconds each palette color stays visible
const PER_COLOR: f64 = 0.15;

/// Opacity of the always-on continuity layer under the flicker
const BASE_LAYER_OPACITY: &str = "0.3";

/// Ember palette, hottest first
const FIRE_PALETTE: [&str; 5] = ["0xFF4500", "0xFF6347", "0xFFA500", "0xFFD700", "0xFF0000"];

/// Frost palette
const ICE_PALETTE: [&str; 5] = ["0x00FFFF", "0x87CEEB", "0xADD8E6", "0x4169E1", "0xFFFFFF"];

/// Glitch channel copies: color and x-jitter amplitude/frequency
const GLITCH_CHANNELS: [(&str, u8, u8); 3] =
    [("0xFF0000", 3, 19), ("0x00FF00", 2, 23), ("0x0000FF", 2, 29)];

/// Period and on-time of the glitch's flashing accent layer, seconds
const FLASH_PERIOD: f64 = 0.25;
const FLASH_ON: f64 = 0.06;

/// Compile one decorative animation for a placed cue
pub(super) fn compile(
    animation: Animation,
    layout: &CueLayout,
    style: &ResolvedStyle,
    cue: &Cue,
) -> Vec<DrawCmd> {
    let mut cmds = Vec::new();
    for line in &layout.lines {
        match animation {
            Animation::FireText => flicker(&mut cmds, line, style, cue, &FIRE_PALETTE),
            Animation::IceText => flicker(&mut cmds, line, style, cue, &ICE_PALETTE),
            Animation::Glitch => glitch(&mut cmds, line, style, cue),
            _ => unreachable!("not a decorative animation"),
        }
    }
    cmds
}

/// Palette cycling: an always-on dim base layer plus one gated copy per
/// palette color, each visible during its own slice of the cycle
fn flicker(
    cmds: &mut Vec<DrawCmd>,
    line: &LayoutLine,
    style: &ResolvedStyle,
    cue: &Cue,
    palette: &[&str; 5],
) {
    let el = elapsed_expr(cue.start);
    let cycle = fmt_num(PER_COLOR * palette.len() as f64);
    let window = window_expr(cue.start, cue.end);

    cmds.push(
        DrawCmd::styled(&line.text, style)
            .color(format!("{}@{BASE_LAYER_OPACITY}", palette[0]))
            .at("(w-text_w)/2", &line.y_expr)
            .window(cue.start, cue.end),
    );

    for (i, color) in palette.iter().enumerate() {
        let lo = fmt_num(i as f64 * PER_COLOR);
        let hi = fmt_num((i + 1) as f64 * PER_COLOR);
        cmds.push(
            DrawCmd::styled(&line.text, style)
                .color(*color)
                .at("(w-text_w)/2", &line.y_expr)
                .enable(format!(
                    "{window}*gte(mod({el},{cycle}),{lo})*lt(mod({el},{cycle}),{hi})"
                )),
        );
    }
}

/// Chromatic-aberration stack: jittered R/G/B copies, the opaque white main
/// layer, then a high-frequency flashing cyan accent on top
fn glitch(cmds: &mut Vec<DrawCmd>, line: &LayoutLine, style: &ResolvedStyle, cue: &Cue) {
    for (color, amplitude, frequency) in GLITCH_CHANNELS {
        cmds.push(
            DrawCmd::plain(&line.text, &style.font, style.font_size, color)
                .at(
                    format!("(w-text_w)/2+{amplitude}*sin({frequency}*t)"),
                    &line.y_expr,
                )
                .window(cue.start, cue.end),
        );
    }

    cmds.push(
        DrawCmd::styled(&line.text, style)
            .color("0xFFFFFF")
            .at("(w-text_w)/2", &line.y_expr)
            .window(cue.start, cue.end),
    );

    let window = window_expr(cue.start, cue.end);
    cmds.push(
        DrawCmd::plain(&line.text, &style.font, style.font_size, "0x00FFFF")
            .at("(w-text_w)/2+2", &line.y_expr)
            .enable(format!(
                "{window}*lt(mod(t,{}),{})",
                fmt_num(FLASH_PERIOD),
                fmt_num(FLASH_ON)
            )),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{resolve, StyleOptions};

    fn cmds_for(animation: Animation, cue: &Cue) -> Vec<DrawCmd> {
        let style = resolve(&StyleOptions::default());
        let layout = CueLayout::build(cue, &style, 1.2).unwrap();
        compile(animation, &layout, &style, cue)
    }

    #[test]
    fn fire_emits_base_layer_plus_five_gated_slices() {
        let cue = Cue::new("blaze", 0.0, 3.0);
        let cmds = cmds_for(Animation::FireText, &cue);
        assert_eq!(cmds.len(), 6);
        assert_eq!(cmds[0].font_color, "0xFF4500@0.3");
        assert_eq!(cmds[0].enable, "between(t,0,3)");
        assert_eq!(
            cmds[1].enable,
            "between(t,0,3)*gte(mod(t,0.75),0)*lt(mod(t,0.75),0.15)"
        );
        assert_eq!(
            cmds[5].enable,
            "between(t,0,3)*gte(mod(t,0.75),0.6)*lt(mod(t,0.75),0.75)"
        );
    }

    #[test]
    fn fire_slices_use_elapsed_time_for_late_cues() {
        let cue = Cue::new("blaze", 2.0, 4.0);
        let cmds = cmds_for(Animation::FireText, &cue);
        assert!(cmds[1].enable.contains("mod((t-2),0.75)"));
    }

    #[test]
    fn ice_uses_the_frost_palette() {
        let cue = Cue::new("chill", 0.0, 2.0);
        let cmds = cmds_for(Animation::IceText, &cue);
        assert_eq!(cmds[0].font_color, "0x00FFFF@0.3");
        assert_eq!(cmds[1].font_color, "0x00FFFF");
        assert_eq!(cmds[5].font_color, "0xFFFFFF");
    }

    #[test]
    fn glitch_stacks_channels_under_white_with_a_flash_on_top() {
        let cue = Cue::new("error", 0.0, 2.0);
        let cmds = cmds_for(Animation::Glitch, &cue);
        assert_eq!(cmds.len(), 5);
        assert_eq!(cmds[0].font_color, "0xFF0000");
        assert_eq!(cmds[0].x, "(w-text_w)/2+3*sin(19*t)");
        assert_eq!(cmds[1].x, "(w-text_w)/2+2*sin(23*t)");
        assert_eq!(cmds[2].font_color, "0x0000FF");
        assert_eq!(cmds[3].font_color, "0xFFFFFF");
        assert_eq!(cmds[3].x, "(w-text_w)/2");
        assert_eq!(
            cmds[4].enable,
            "between(t,0,2)*lt(mod(t,0.25),0.06)"
        );
        // Channel copies carry no outline or shadow
        assert!(cmds[0].border.is_none() && cmds[0].shadow.is_none());
    }

    #[test]
    fn wrapped_lines_each_get_a_full_stack() {
        let cue = Cue::new("a b", 0.0, 2.0);
        let style = resolve(&StyleOptions {
            words_per_line: 1,
            ..StyleOptions::default()
        });
        let layout = CueLayout::build(&cue, &style, 1.2).unwrap();
        let cmds = compile(Animation::Glitch, &layout, &style, &cue);
        assert_eq!(cmds.len(), 10);
        assert_ne!(cmds[0].y, cmds[5].y);
    }
}
