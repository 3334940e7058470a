//! Immutable lookup tables for the user-facing style vocabulary
//!
//! Color palette, position grid, background modes, and visual presets.
//! All tables are pure configuration built once at first use; the
//! "enumerated option with silent fallback" rule is centralized in
//! [`lookup_or_default`] so every table resolves unknown keys the same way.

use ahash::AHashMap;
use std::sync::LazyLock;

/// Resolve `key` in `table`, falling back to `default_key` for unknown
/// values. `default_key` must exist in the table.
pub(crate) fn lookup_or_default<'a, V>(
    table: &'a AHashMap<&'static str, V>,
    key: &str,
    default_key: &str,
) -> &'a V {
    table.get(key).unwrap_or_else(|| {
        table
            .get(default_key)
            .unwrap_or_else(|| panic!("default key '{default_key}' missing from table"))
    })
}

/// Named text colors as ASS BGR tokens (`&HBBGGRR&`).
///
/// The "rainbow" entry is a placeholder mapped to magenta; "black" exists
/// for outline/shadow colors and is not part of the text palette proper.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("white", "&HFFFFFF&"),
    ("yellow", "&H00FFFF&"),
    ("cyan", "&HFFFF00&"),
    ("red", "&H0000FF&"),
    ("green", "&H00FF00&"),
    ("blue", "&HFF0000&"),
    ("purple", "&H800080&"),
    ("orange", "&H00A5FF&"),
    ("pink", "&HCBC0FF&"),
    ("gold", "&H00D7FF&"),
    ("silver", "&HC0C0C0&"),
    ("rainbow", "&HFF00FF&"),
    ("black", "&H000000&"),
];

/// The named color table as declared, for tests and documentation
#[must_use]
pub fn named_colors() -> &'static [(&'static str, &'static str)] {
    NAMED_COLORS
}

pub(crate) static COLORS: LazyLock<AHashMap<&'static str, &'static str>> =
    LazyLock::new(|| NAMED_COLORS.iter().copied().collect());

/// Concrete placement parameters for one of the nine grid positions
#[derive(Debug, Clone, Copy)]
pub(crate) struct PositionSpec {
    /// ASS alignment code, 1-9 row-major from bottom-left
    pub alignment: u8,
    pub margin_v: u32,
    pub margin_l: u32,
    pub margin_r: u32,
    pub anchor: super::VerticalAnchor,
}

pub(crate) static POSITIONS: LazyLock<AHashMap<&'static str, PositionSpec>> =
    LazyLock::new(|| {
        use super::VerticalAnchor::{Bottom, Middle, Top};
        let spec = |alignment, margin_v, margin_l, margin_r, anchor| PositionSpec {
            alignment,
            margin_v,
            margin_l,
            margin_r,
            anchor,
        };
        [
            ("bottom-left", spec(1, 50, 30, 0, Bottom)),
            ("bottom-center", spec(2, 50, 0, 0, Bottom)),
            ("bottom-right", spec(3, 50, 0, 30, Bottom)),
            ("middle-left", spec(4, 0, 30, 0, Middle)),
            ("middle-center", spec(5, 0, 0, 0, Middle)),
            ("middle-right", spec(6, 0, 0, 30, Middle)),
            ("top-left", spec(7, 50, 30, 0, Top)),
            ("top-center", spec(8, 50, 0, 0, Top)),
            ("top-right", spec(9, 50, 0, 30, Top)),
        ]
        .into_iter()
        .collect()
    });

/// Background box colors, each with an implied opacity.
///
/// `back_colour` is the ASS `&HAABBGGRR` form (ASS alpha is inverted:
/// 00 = opaque); `drawtext` is the equivalent `color@opacity` form for the
/// overlay path.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BackgroundSpec {
    pub back_colour: &'static str,
    pub drawtext: &'static str,
}

pub(crate) static BACKGROUNDS: LazyLock<AHashMap<&'static str, Option<BackgroundSpec>>> =
    LazyLock::new(|| {
        let spec = |back_colour, drawtext| Some(BackgroundSpec {
            back_colour,
            drawtext,
        });
        [
            ("none", None),
            ("black", spec("&H80000000", "black@0.5")),
            ("white", spec("&H40FFFFFF", "white@0.75")),
            ("gray", spec("&H66808080", "gray@0.6")),
            ("red", spec("&H660000FF", "red@0.6")),
            ("blue", spec("&H66FF0000", "blue@0.6")),
            ("yellow", spec("&H6600FFFF", "yellow@0.6")),
            ("green", spec("&H6600FF00", "green@0.6")),
        ]
        .into_iter()
        .collect()
    });

/// Nominal parameters contributed by a visual preset.
///
/// Outline and shadow widths apply only when the caller has not overridden
/// them; `margin_h_extra` widens both horizontal margins (the boxed preset);
/// `opaque_box` forces the box border style even without a background.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PresetSpec {
    pub bold: i32,
    pub outline: f32,
    pub shadow: f32,
    pub margin_h_extra: u32,
    pub opaque_box: bool,
}

pub(crate) static PRESETS: LazyLock<AHashMap<&'static str, PresetSpec>> = LazyLock::new(|| {
    let spec = |bold, outline, shadow, margin_h_extra, opaque_box| PresetSpec {
        bold,
        outline,
        shadow,
        margin_h_extra,
        opaque_box,
    };
    [
        ("default", spec(0, 2.0, 1.0, 0, false)),
        ("bold", spec(-1, 2.0, 1.0, 0, false)),
        ("minimal", spec(0, 1.0, 0.0, 0, false)),
        ("heavy", spec(-1, 4.0, 0.0, 0, false)),
        ("retro", spec(0, 1.0, 3.0, 0, false)),
        ("boxed", spec(0, 0.0, 0.0, 40, true)),
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_key() {
        assert_eq!(*lookup_or_default(&COLORS, "gold", "white"), "&H00D7FF&");
    }

    #[test]
    fn lookup_unknown_key_falls_back() {
        assert_eq!(*lookup_or_default(&COLORS, "chartreuse", "white"), "&HFFFFFF&");
        assert_eq!(*lookup_or_default(&COLORS, "", "white"), "&HFFFFFF&");
    }

    #[test]
    fn alignment_codes_cover_one_to_nine_without_collision() {
        let mut seen = [false; 10];
        for spec in POSITIONS.values() {
            assert!((1..=9).contains(&spec.alignment));
            assert!(!seen[spec.alignment as usize], "duplicate alignment code");
            seen[spec.alignment as usize] = true;
        }
        assert_eq!(POSITIONS.len(), 9);
    }

    #[test]
    fn corner_positions_carry_horizontal_margin() {
        assert_eq!(POSITIONS["bottom-left"].margin_l, 30);
        assert_eq!(POSITIONS["top-right"].margin_r, 30);
        assert_eq!(POSITIONS["bottom-center"].margin_l, 0);
        assert_eq!(POSITIONS["bottom-center"].margin_r, 0);
    }

    #[test]
    fn background_none_is_empty() {
        assert!(BACKGROUNDS["none"].is_none());
        assert!(BACKGROUNDS["black"].is_some());
    }
}
