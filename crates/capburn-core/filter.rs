//! Filter graph assembly and ffmpeg token escaping
//!
//! Every literal embedded in a filter entry goes through one of the escape
//! functions here before insertion. Values are emitted inside single quotes;
//! a literal quote is written as `'\''` (close, escaped quote, reopen),
//! everything else that the filter grammar treats as a delimiter gets a
//! backslash.

use crate::overlay::{CompiledOverlay, DrawCmd};

/// Escape a text literal for a quoted drawtext `text=` value.
///
/// # Examples
///
/// ```rust
/// use capburn_core::filter::escape_drawtext_text;
///
/// assert_eq!(escape_drawtext_text("50% off: now"), "50\\% off\\: now");
/// assert_eq!(escape_drawtext_text("it's"), "it'\\''s");
/// ```
#[must_use]
pub fn escape_drawtext_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("'\\''"),
            ':' => out.push_str("\\:"),
            '%' => out.push_str("\\%"),
            '[' => out.push_str("\\["),
            ']' => out.push_str("\\]"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a filesystem path for a quoted filter option value
#[must_use]
pub fn escape_filter_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("'\\''"),
            ':' => out.push_str("\\:"),
            _ => out.push(c),
        }
    }
    out
}

/// The static path: a single subtitles filter referencing the written track
/// document
#[must_use]
pub fn subtitles_filter(track_path: &str) -> String {
    format!("subtitles=filename='{}'", escape_filter_path(track_path))
}

/// The animated path: the drawtext commands joined in input order.
///
/// Order is the stacking order; later entries draw on top of earlier ones,
/// which the highlight-box and glitch layering depends on.
#[must_use]
pub fn drawtext_chain(cmds: &[DrawCmd]) -> String {
    cmds.iter()
        .map(DrawCmd::render)
        .collect::<Vec<_>>()
        .join(",")
}

/// Assemble the final `-vf` filter graph for a compiled overlay.
///
/// `track_path` is where the caller has written (or will write) the track
/// document; it is only referenced on the static path.
#[must_use]
pub fn assemble(overlay: &CompiledOverlay, track_path: &str) -> String {
    match overlay {
        CompiledOverlay::Document(_) => subtitles_filter(track_path),
        CompiledOverlay::Commands(cmds) => drawtext_chain(cmds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_escaping_covers_the_delimiter_set() {
        assert_eq!(escape_drawtext_text("a:b"), "a\\:b");
        assert_eq!(escape_drawtext_text("100%"), "100\\%");
        assert_eq!(escape_drawtext_text("a\\b"), "a\\\\b");
        assert_eq!(escape_drawtext_text("[tag]"), "\\[tag\\]");
        assert_eq!(escape_drawtext_text("plain words"), "plain words");
    }

    #[test]
    fn quote_escaping_reopens_the_quoted_region() {
        assert_eq!(escape_drawtext_text("don't"), "don'\\''t");
    }

    #[test]
    fn path_escaping_handles_windows_drives() {
        assert_eq!(escape_filter_path("C:\\work\\t.ass"), "C\\:\\\\work\\\\t.ass");
        assert_eq!(escape_filter_path("/tmp/track.ass"), "/tmp/track.ass");
    }

    #[test]
    fn static_path_references_the_track_file() {
        let overlay = CompiledOverlay::Document(String::from("[Script Info]"));
        assert_eq!(
            assemble(&overlay, "/tmp/track.ass"),
            "subtitles=filename='/tmp/track.ass'"
        );
    }

    #[test]
    fn animated_path_joins_commands_in_order() {
        let a = DrawCmd::plain("a", "Arial", 24, "0xFFFFFF").window(0.0, 1.0);
        let b = DrawCmd::plain("b", "Arial", 24, "0xFFFFFF").window(1.0, 2.0);
        let graph = assemble(&CompiledOverlay::Commands(vec![a.clone(), b.clone()]), "");
        let expected = format!("{},{}", a.render(), b.render());
        assert_eq!(graph, expected);
        assert!(graph.find("text='a'").unwrap() < graph.find("text='b'").unwrap());
    }

    #[test]
    fn empty_command_list_assembles_to_an_empty_graph() {
        assert_eq!(assemble(&CompiledOverlay::Commands(Vec::new()), ""), "");
    }
}
