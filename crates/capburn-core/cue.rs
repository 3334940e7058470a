//! Cue and word-timing data model
//!
//! A [`Cue`] is one timed text entry; a [`WordTiming`] is a sub-cue span for
//! a single word, used to synchronize per-word animation families. Both live
//! for the duration of one render request and are never persisted.

use crate::error::CoreError;

/// One timed text entry with start/end seconds.
///
/// Word timings are optional: when the transcription collaborator supplies
/// them they are authoritative; otherwise the timing deriver synthesizes an
/// approximation by even subdivision.
///
/// # Examples
///
/// ```rust
/// use capburn_core::Cue;
///
/// let cue = Cue::new("Hello World", 0.0, 2.5);
/// assert_eq!(cue.words_of_text(), vec!["Hello", "World"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cue {
    /// Caption text, possibly multiple words
    pub text: String,

    /// Start of the visibility window in seconds
    #[cfg_attr(feature = "serde", serde(rename = "startTime"))]
    pub start: f64,

    /// End of the visibility window in seconds, strictly after `start`
    #[cfg_attr(feature = "serde", serde(rename = "endTime"))]
    pub end: f64,

    /// Externally supplied per-word timings, ordered and non-overlapping
    #[cfg_attr(
        feature = "serde",
        serde(rename = "wordTimings", default, skip_serializing_if = "Option::is_none")
    )]
    pub words: Option<Vec<WordTiming>>,
}

/// Sub-cue timing for a single word
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordTiming {
    /// The word itself, without surrounding whitespace
    pub word: String,

    /// Word window start in seconds
    pub start: f64,

    /// Word window end in seconds
    pub end: f64,
}

impl Cue {
    /// Create a cue without word timings
    #[must_use]
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            words: None,
        }
    }

    /// Cue duration in seconds
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whitespace-delimited tokens of the cue text, empty tokens dropped
    #[must_use]
    pub fn words_of_text(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }

    /// Validate the structural invariants the compiler relies on.
    ///
    /// `index` is the cue's position in the request, used only for error
    /// reporting.
    ///
    /// # Errors
    ///
    /// Returns an error when the start is negative, the span is empty or
    /// inverted, or the text is empty after trimming.
    pub fn validate(&self, index: usize) -> Result<(), CoreError> {
        if self.start < 0.0 {
            return Err(CoreError::NegativeStart {
                index,
                start: self.start,
            });
        }
        if self.end <= self.start {
            return Err(CoreError::InvalidSpan {
                index,
                start: self.start,
                end: self.end,
            });
        }
        if self.text.trim().is_empty() {
            return Err(CoreError::EmptyText { index });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_of_text_drops_empty_tokens() {
        let cue = Cue::new("  Hello   World  ", 0.0, 1.0);
        assert_eq!(cue.words_of_text(), vec!["Hello", "World"]);
    }

    #[test]
    fn validate_accepts_well_formed_cue() {
        assert!(Cue::new("Hi", 0.0, 1.5).validate(0).is_ok());
    }

    #[test]
    fn validate_rejects_inverted_span() {
        let err = Cue::new("Hi", 2.0, 1.0).validate(3).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidSpan {
                index: 3,
                start: 2.0,
                end: 1.0
            }
        );
    }

    #[test]
    fn validate_rejects_negative_start() {
        assert!(matches!(
            Cue::new("Hi", -0.5, 1.0).validate(0),
            Err(CoreError::NegativeStart { .. })
        ));
    }

    #[test]
    fn validate_rejects_blank_text() {
        assert!(matches!(
            Cue::new("   ", 0.0, 1.0).validate(0),
            Err(CoreError::EmptyText { index: 0 })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn cue_wire_field_names() {
        let json = r#"{
            "text": "Hello",
            "startTime": 1.0,
            "endTime": 2.0,
            "wordTimings": [{"word": "Hello", "start": 1.0, "end": 2.0}]
        }"#;
        let cue: Cue = serde_json::from_str(json).unwrap();
        assert_eq!(cue.start, 1.0);
        assert_eq!(cue.words.as_ref().unwrap().len(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn cue_word_timings_default_to_none() {
        let cue: Cue =
            serde_json::from_str(r#"{"text":"Hi","startTime":0.0,"endTime":1.0}"#).unwrap();
        assert!(cue.words.is_none());
    }
}
