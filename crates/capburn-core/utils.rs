//! Color-encoding and time-formatting helpers
//!
//! The ASS subtitle format stores colors in reversed byte order
//! (`&HBBGGRR&`) while ffmpeg's `drawtext` expects forward byte order
//! (`0xRRGGBB`). Conversions here must round-trip for every entry of the
//! named palette. Bad tokens degrade to white so the compiler stays total
//! over string inputs.

/// Convert an ASS BGR color token to the drawtext hex form.
///
/// Parses three byte pairs from the token ignoring the `&H` / `&`
/// delimiters, reverses BGR to RGB, and emits `0xRRGGBB`. Alpha prefixes
/// (`&HAABBGGRR`) are tolerated; only the low three byte pairs are used.
/// Invalid tokens fall back to white.
///
/// # Examples
///
/// ```rust
/// use capburn_core::utils::ass_token_to_drawtext;
///
/// assert_eq!(ass_token_to_drawtext("&H00D7FF&"), "0xFFD700"); // gold
/// assert_eq!(ass_token_to_drawtext("garbage"), "0xFFFFFF");
/// ```
#[must_use]
pub fn ass_token_to_drawtext(token: &str) -> String {
    let Some([b, g, r]) = parse_bgr_pairs(token) else {
        return String::from("0xFFFFFF");
    };
    format!("0x{r:02X}{g:02X}{b:02X}")
}

/// Convert an ASS BGR color token to the style-line form `&H00BBGGRR`.
///
/// The track document's `Style:` record wants the 8-digit opaque form.
/// Invalid tokens fall back to opaque white.
#[must_use]
pub fn ass_token_to_style(token: &str) -> String {
    let Some([b, g, r]) = parse_bgr_pairs(token) else {
        return String::from("&H00FFFFFF");
    };
    format!("&H00{b:02X}{g:02X}{r:02X}")
}

/// Extract the (blue, green, red) byte pairs from an ASS color token.
///
/// Accepts `&HBBGGRR&`, `&HBBGGRR`, `&HAABBGGRR` and bare hex. Returns
/// `None` when the stripped token is not 6 or 8 hex digits.
fn parse_bgr_pairs(token: &str) -> Option<[u8; 3]> {
    let hex = token
        .trim()
        .trim_start_matches("&H")
        .trim_start_matches("&h")
        .trim_end_matches('&');

    if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    // Skip the alpha pair of 8-digit tokens
    let bgr = &hex[hex.len() - 6..];
    let b = u8::from_str_radix(&bgr[0..2], 16).ok()?;
    let g = u8::from_str_radix(&bgr[2..4], 16).ok()?;
    let r = u8::from_str_radix(&bgr[4..6], 16).ok()?;
    Some([b, g, r])
}

/// Format seconds as the ASS timestamp `H:MM:SS.CC` (centisecond precision).
///
/// Negative inputs clamp to zero; the track document never needs negative
/// timestamps.
#[must_use]
pub fn format_ass_time(seconds: f64) -> String {
    let total_cs = (seconds.max(0.0) * 100.0).round() as u64;
    let hours = total_cs / 360_000;
    let minutes = (total_cs % 360_000) / 6_000;
    let secs = (total_cs % 6_000) / 100;
    let cs = total_cs % 100;
    format!("{hours}:{minutes:02}:{secs:02}.{cs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::palette;

    #[test]
    fn bgr_token_reverses_to_rgb() {
        // ASS stores blue first: pure red is &H0000FF&
        assert_eq!(ass_token_to_drawtext("&H0000FF&"), "0xFF0000");
        assert_eq!(ass_token_to_drawtext("&HFF0000&"), "0x0000FF");
        assert_eq!(ass_token_to_drawtext("&H00FF00&"), "0x00FF00");
    }

    #[test]
    fn alpha_prefix_is_ignored() {
        assert_eq!(ass_token_to_drawtext("&H80D7FF00"), "0x00FFD7");
    }

    #[test]
    fn invalid_tokens_degrade_to_white() {
        assert_eq!(ass_token_to_drawtext(""), "0xFFFFFF");
        assert_eq!(ass_token_to_drawtext("&HZZZZZZ&"), "0xFFFFFF");
        assert_eq!(ass_token_to_drawtext("&H12345&"), "0xFFFFFF");
        assert_eq!(ass_token_to_style("nope"), "&H00FFFFFF");
    }

    #[test]
    fn palette_round_trips_through_both_encodings() {
        // nativeEncoding -> overlayEncoding -> manual decode must reproduce
        // the same (R,G,B) triple for every named color.
        for (name, token) in palette::named_colors() {
            let hex = ass_token_to_drawtext(token);
            assert!(hex.starts_with("0x"), "{name}: {hex}");
            let r = u8::from_str_radix(&hex[2..4], 16).unwrap();
            let g = u8::from_str_radix(&hex[4..6], 16).unwrap();
            let b = u8::from_str_radix(&hex[6..8], 16).unwrap();

            let bgr = token.trim_start_matches("&H").trim_end_matches('&');
            let nb = u8::from_str_radix(&bgr[0..2], 16).unwrap();
            let ng = u8::from_str_radix(&bgr[2..4], 16).unwrap();
            let nr = u8::from_str_radix(&bgr[4..6], 16).unwrap();
            assert_eq!((r, g, b), (nr, ng, nb), "round-trip mismatch for {name}");
        }
    }

    #[test]
    fn white_decodes_identically_in_both_encodings() {
        assert_eq!(ass_token_to_drawtext("&HFFFFFF&"), "0xFFFFFF");
        assert_eq!(ass_token_to_style("&HFFFFFF&"), "&H00FFFFFF");
    }

    #[test]
    fn ass_time_formatting() {
        assert_eq!(format_ass_time(0.0), "0:00:00.00");
        assert_eq!(format_ass_time(2.5), "0:00:02.50");
        assert_eq!(format_ass_time(90.5), "0:01:30.50");
        assert_eq!(format_ass_time(3600.0), "1:00:00.00");
        assert_eq!(format_ass_time(-1.0), "0:00:00.00");
    }

    #[test]
    fn ass_time_rounds_to_centiseconds() {
        assert_eq!(format_ass_time(1.234), "0:00:01.23");
        assert_eq!(format_ass_time(1.235), "0:00:01.24");
    }
}
