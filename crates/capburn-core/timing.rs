//! Per-word timing derivation
//!
//! Externally supplied word timings (from the transcription service) pass
//! through verbatim. Without them, the cue span is subdivided evenly with a
//! 5%-of-duration buffer trimmed from each edge, which keeps synthesized
//! reveals from firing exactly on the cue boundary.

use crate::cue::{Cue, WordTiming};

/// Fraction of the cue duration trimmed from each edge before subdivision
const EDGE_BUFFER_FRACTION: f64 = 0.05;

/// Derive the ordered per-word timing table for a cue.
///
/// Returns one entry per whitespace-delimited token of the cue text, or the
/// external timing list verbatim when present. Returns an empty vector when
/// the text has no words after filtering; callers skip the cue in that case.
///
/// Synthesized timings satisfy `start[0] >= cue.start`,
/// `end[n-1] <= cue.end`, and `start[i] <= end[i] <= start[i+1]`.
#[must_use]
pub fn derive_word_timings(cue: &Cue) -> Vec<WordTiming> {
    if let Some(words) = &cue.words {
        if !words.is_empty() {
            return words.clone();
        }
    }

    let tokens = cue.words_of_text();
    if tokens.is_empty() {
        return Vec::new();
    }

    let duration = cue.duration();
    let buffer = duration * EDGE_BUFFER_FRACTION;
    let effective_start = cue.start + buffer;
    let per_word = (duration - 2.0 * buffer) / tokens.len() as f64;

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| WordTiming {
            word: (*token).to_string(),
            start: effective_start + i as f64 * per_word,
            end: effective_start + (i + 1) as f64 * per_word,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_timings_pass_through() {
        let words = vec![
            WordTiming {
                word: String::from("Hello"),
                start: 0.1,
                end: 0.4,
            },
            WordTiming {
                word: String::from("World"),
                start: 0.4,
                end: 0.9,
            },
        ];
        let cue = Cue {
            words: Some(words.clone()),
            ..Cue::new("Hello World", 0.0, 1.0)
        };
        assert_eq!(derive_word_timings(&cue), words);
    }

    #[test]
    fn synthesized_timings_subdivide_evenly() {
        // duration 4, buffer 0.2, per-word 0.9
        let cue = Cue::new("a b c d", 10.0, 14.0);
        let timings = derive_word_timings(&cue);
        assert_eq!(timings.len(), 4);
        assert!((timings[0].start - 10.2).abs() < 1e-9);
        assert!((timings[2].start - 12.0).abs() < 1e-9);
        assert!((timings[3].end - 13.8).abs() < 1e-9);
    }

    #[test]
    fn synthesized_timings_are_monotonic_within_the_cue() {
        let cue = Cue::new("one two three four five", 3.0, 7.5);
        let timings = derive_word_timings(&cue);
        assert!(timings[0].start >= cue.start);
        assert!(timings.last().unwrap().end <= cue.end + 1e-9);
        for pair in timings.windows(2) {
            assert!(pair[0].start <= pair[0].end);
            assert!(pair[0].end <= pair[1].start + 1e-9);
        }
    }

    #[test]
    fn empty_text_yields_no_timings() {
        assert!(derive_word_timings(&Cue::new("   ", 0.0, 1.0)).is_empty());
        assert!(derive_word_timings(&Cue::new("", 0.0, 1.0)).is_empty());
    }

    #[test]
    fn empty_external_list_falls_back_to_synthesis() {
        let cue = Cue {
            words: Some(Vec::new()),
            ..Cue::new("Hello", 0.0, 2.0)
        };
        assert_eq!(derive_word_timings(&cue).len(), 1);
    }
}
