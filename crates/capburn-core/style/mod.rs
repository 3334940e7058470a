//! Style options and the style resolver
//!
//! Maps the enumerated user options (preset, color, position, background,
//! outline/shadow settings) to the concrete format-specific parameter bundle
//! the two compiler paths consume: alignment codes, margins, packed ASS
//! colors, border-style selection. Resolution is pure and total: unknown
//! enum values degrade to documented defaults, never to an error.

pub mod palette;

pub use palette::named_colors;

use palette::{lookup_or_default, BACKGROUNDS, COLORS, POSITIONS, PRESETS};

/// Font size clamp range; requests outside it are pulled to the nearest end
const FONT_SIZE_RANGE: (u32, u32) = (8, 200);

/// Default font size when the request does not specify one
const DEFAULT_FONT_SIZE: u32 = 24;

/// Border style code for outlined text with drop shadow
const BORDER_OUTLINE: u8 = 1;

/// Border style code for an opaque background box
const BORDER_BOX: u8 = 3;

/// Flat, all-defaulted user style record.
///
/// Every field has a default so a request carrying only cue data is valid.
/// Enum-like fields are plain strings; resolution handles unknown values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct StyleOptions {
    /// Visual preset name ("default", "bold", "minimal", "heavy", "retro", "boxed")
    pub preset: String,

    /// Font family passed through to the renderer
    pub font: String,

    /// Font size in reference-resolution pixels, clamped to 8..=200
    pub font_size: u32,

    /// Named text color
    pub color: String,

    /// One of the nine grid positions, e.g. "bottom-center"
    pub position: String,

    /// Background mode: "none" or a named box color with implied opacity
    pub background: String,

    /// Animation name; "none" (or anything unknown) selects the static path
    pub animation: String,

    /// Highlight/fill color used by the per-word animation families
    pub effect_color: String,

    /// Words per wrapped line; 0 disables forced wrapping
    pub words_per_line: u32,

    /// Outline color name
    pub outline_color: String,

    /// Outline width override; `None` takes the preset's nominal width
    pub outline_thickness: Option<f32>,

    /// Shadow color name
    pub shadow_color: String,

    /// Shadow depth override; `None` takes the preset's nominal depth
    pub shadow_depth: Option<f32>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            preset: String::from("default"),
            font: String::from("Arial"),
            font_size: DEFAULT_FONT_SIZE,
            color: String::from("white"),
            position: String::from("bottom-center"),
            background: String::from("none"),
            animation: String::from("none"),
            effect_color: String::from("orange"),
            words_per_line: 0,
            outline_color: String::from("black"),
            outline_thickness: None,
            shadow_color: String::from("black"),
            shadow_depth: None,
        }
    }
}

/// Vertical anchoring family shared by all multi-line overlay placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    /// Fixed 50 px top margin
    Top,
    /// Centered on the frame
    Middle,
    /// 50 px above the bottom edge
    Bottom,
}

/// Format-specific parameter bundle derived from [`StyleOptions`].
///
/// Colors are ASS BGR tokens (`&HBBGGRR&`) except `back_colour`, which
/// carries the `&HAABBGGRR` style-line form with its implied alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub font: String,
    pub font_size: u32,
    /// ASS bold flag: 0 regular, -1 bold
    pub bold: i32,
    /// ASS alignment code 1-9, row-major from bottom-left
    pub alignment: u8,
    pub margin_v: u32,
    pub margin_l: u32,
    pub margin_r: u32,
    pub primary_colour: String,
    pub outline_colour: String,
    pub shadow_colour: String,
    pub back_colour: String,
    /// Effect/highlight color for per-word families
    pub effect_colour: String,
    /// Background in drawtext `color@opacity` form; `None` when border style
    /// is outline+shadow
    pub background_box: Option<String>,
    /// 1 = outline+shadow, 3 = opaque box (mutually exclusive)
    pub border_style: u8,
    pub outline: f32,
    pub shadow: f32,
    pub anchor: VerticalAnchor,
    pub words_per_line: u32,
}

/// Resolve user options to concrete renderer parameters.
///
/// Background precedence is absolute: any background other than "none"
/// (or the boxed preset) forces outline and shadow to zero and switches the
/// border style to the opaque-box code, regardless of requested widths.
#[must_use]
pub fn resolve(opts: &StyleOptions) -> ResolvedStyle {
    let preset = lookup_or_default(&PRESETS, &opts.preset, "default");
    let pos = lookup_or_default(&POSITIONS, &opts.position, "bottom-center");
    let background = *lookup_or_default(&BACKGROUNDS, &opts.background, "none");

    let primary = *lookup_or_default(&COLORS, &opts.color, "white");
    let effect = *lookup_or_default(&COLORS, &opts.effect_color, "orange");
    let outline_col = *lookup_or_default(&COLORS, &opts.outline_color, "black");
    let shadow_col = *lookup_or_default(&COLORS, &opts.shadow_color, "black");

    let font_size = opts.font_size.clamp(FONT_SIZE_RANGE.0, FONT_SIZE_RANGE.1);

    let boxed = background.is_some() || preset.opaque_box;
    let (border_style, outline, shadow) = if boxed {
        (BORDER_BOX, 0.0, 0.0)
    } else {
        (
            BORDER_OUTLINE,
            opts.outline_thickness.unwrap_or(preset.outline),
            opts.shadow_depth.unwrap_or(preset.shadow),
        )
    };

    // The boxed preset without an explicit background still needs a box fill
    let effective_bg = background.or_else(|| {
        preset
            .opaque_box
            .then(|| BACKGROUNDS["black"].expect("black background defined"))
    });

    ResolvedStyle {
        font: opts.font.clone(),
        font_size,
        bold: preset.bold,
        alignment: pos.alignment,
        margin_v: pos.margin_v,
        margin_l: pos.margin_l + preset.margin_h_extra,
        margin_r: pos.margin_r + preset.margin_h_extra,
        primary_colour: primary.to_string(),
        outline_colour: outline_col.to_string(),
        shadow_colour: shadow_col.to_string(),
        back_colour: effective_bg
            .map_or_else(|| String::from("&H80000000"), |b| b.back_colour.to_string()),
        effect_colour: effect.to_string(),
        background_box: effective_bg.map(|b| b.drawtext.to_string()),
        border_style,
        outline,
        shadow,
        anchor: pos.anchor,
        words_per_line: opts.words_per_line,
    }
}
