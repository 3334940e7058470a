//! Approximate text layout math for the overlay path
//!
//! Proportional font layout is approximated with a fixed average character
//! width (0.52 × font size) and a fixed inter-word space (0.5 × font size).
//! This is deliberate: there are no glyph metrics here, and the anchor
//! constants downstream were tuned against exactly this approximation.
//! Vertical placement is expressed with ffmpeg's `h` frame variable so the
//! compiler never needs the real frame dimensions.

use crate::style::VerticalAnchor;

/// Average glyph width as a fraction of font size
const AVG_CHAR_WIDTH: f32 = 0.52;

/// Inter-word gap as a fraction of font size
const WORD_SPACE: f32 = 0.5;

/// Fixed margin for top-anchored blocks, in pixels
const TOP_MARGIN: u32 = 50;

/// Fixed margin for bottom-anchored blocks, in pixels
const BOTTOM_MARGIN: u32 = 50;

/// Per-word horizontal offsets for natural left-to-right flow
#[derive(Debug, Clone, PartialEq)]
pub struct WordOffsets {
    /// Pixel offset of each word from the line's left edge
    pub offsets: Vec<f32>,
    /// Line width up to the rightmost glyph, trailing space removed, >= 1
    pub total_width: f32,
}

/// Approximate per-word pixel offsets for a line of words.
///
/// Offsets accumulate left-to-right starting at zero; consumers center the
/// line by subtracting `total_width / 2` from the frame's horizontal center.
#[must_use]
pub fn word_pixel_offsets(words: &[&str], font_size: u32) -> WordOffsets {
    let char_w = AVG_CHAR_WIDTH * font_size as f32;
    let space_w = WORD_SPACE * font_size as f32;

    let mut offsets = Vec::with_capacity(words.len());
    let mut x = 0.0f32;
    for word in words {
        offsets.push(x);
        x += word.chars().count() as f32 * char_w + space_w;
    }

    WordOffsets {
        offsets,
        total_width: (x - space_w).max(1.0),
    }
}

/// Pixel height of a block of `line_count` lines.
///
/// `factor` is the line-height multiplier: 1.2 for whole-line families,
/// 1.3 for per-word families (extra room for highlight boxes).
#[must_use]
pub fn line_block_height(line_count: usize, font_size: u32, factor: f32) -> u32 {
    line_count as u32 * (font_size as f32 * factor).round() as u32
}

/// Line height in pixels for a single line at the given factor
#[must_use]
pub fn line_height(font_size: u32, factor: f32) -> u32 {
    (font_size as f32 * factor).round() as u32
}

/// Drawtext y expression anchoring a block of `block_height` pixels.
///
/// Top anchors at a fixed top margin, middle centers the block, bottom
/// anchors above a fixed bottom margin. `line_offset` shifts the individual
/// line down within the block.
#[must_use]
pub fn anchor_y_expr(anchor: VerticalAnchor, block_height: u32, line_offset: u32) -> String {
    match anchor {
        VerticalAnchor::Top => format!("{}", TOP_MARGIN + line_offset),
        VerticalAnchor::Middle => {
            if line_offset == 0 {
                format!("(h-{block_height})/2")
            } else {
                format!("(h-{block_height})/2+{line_offset}")
            }
        }
        VerticalAnchor::Bottom => {
            let base = block_height + BOTTOM_MARGIN;
            if line_offset == 0 {
                format!("h-{base}")
            } else {
                format!("h-{base}+{line_offset}")
            }
        }
    }
}

/// Drawtext x expression placing a word at `offset` within a centered line
/// of `total_width` pixels
#[must_use]
pub fn centered_word_x_expr(total_width: f32, offset: f32) -> String {
    let total = total_width.round() as i64;
    let off = offset.round() as i64;
    if off == 0 {
        format!("(w-{total})/2")
    } else {
        format!("(w-{total})/2+{off}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_accumulate_left_to_right() {
        let out = word_pixel_offsets(&["ab", "c"], 100);
        // "ab" = 2 * 52 = 104 wide, then a 50px space
        assert_eq!(out.offsets, vec![0.0, 154.0]);
        // total = 154 + 52 = 206
        assert!((out.total_width - 206.0).abs() < 0.01);
    }

    #[test]
    fn total_width_floors_at_one() {
        let out = word_pixel_offsets(&[], 24);
        assert!(out.offsets.is_empty());
        assert!((out.total_width - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn block_height_scales_with_lines() {
        assert_eq!(line_block_height(1, 24, 1.2), 29);
        assert_eq!(line_block_height(3, 24, 1.2), 87);
        assert_eq!(line_block_height(2, 24, 1.3), 62);
    }

    #[test]
    fn top_anchor_is_fixed_margin() {
        assert_eq!(anchor_y_expr(VerticalAnchor::Top, 29, 0), "50");
        assert_eq!(anchor_y_expr(VerticalAnchor::Top, 29, 29), "79");
    }

    #[test]
    fn middle_anchor_centers_block() {
        assert_eq!(anchor_y_expr(VerticalAnchor::Middle, 58, 0), "(h-58)/2");
        assert_eq!(anchor_y_expr(VerticalAnchor::Middle, 58, 29), "(h-58)/2+29");
    }

    #[test]
    fn bottom_anchor_clears_bottom_margin() {
        assert_eq!(anchor_y_expr(VerticalAnchor::Bottom, 29, 0), "h-79");
        assert_eq!(anchor_y_expr(VerticalAnchor::Bottom, 58, 29), "h-108+29");
    }

    #[test]
    fn centered_word_x() {
        assert_eq!(centered_word_x_expr(206.0, 0.0), "(w-206)/2");
        assert_eq!(centered_word_x_expr(206.0, 154.0), "(w-206)/2+154");
    }
}
