//! # Capburn Core
//!
//! Compiler from high-level caption style options to renderer filters.
//! Takes a list of timed text cues plus a flat [`StyleOptions`] record and
//! deterministically produces either a complete ASS subtitle-track document
//! (static path) or an ordered chain of ffmpeg `drawtext` commands with
//! time-windowed visibility and animated position/opacity curves (animated
//! path).
//!
//! ## Design
//!
//! - **Pure**: no I/O anywhere in this crate; the same inputs always yield
//!   byte-identical output
//! - **Total**: unknown enum strings (preset, color, position, background,
//!   animation) degrade to documented defaults instead of failing
//! - **Approximate layout**: text width uses a fixed average character width
//!   rather than glyph metrics; the anchor constants are tuned against that
//!   approximation and must not be "upgraded" silently
//!
//! ## Quick Start
//!
//! ```rust
//! use capburn_core::{compile, Cue, StyleOptions, CompiledOverlay};
//!
//! let cues = vec![Cue::new("Hello World", 0.0, 2.5)];
//! let opts = StyleOptions::default();
//!
//! match compile(&cues, &opts) {
//!     CompiledOverlay::Document(doc) => assert!(doc.contains("Hello World")),
//!     CompiledOverlay::Commands(_) => unreachable!("default animation is none"),
//! }
//! ```

#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod cue;
pub mod error;
pub mod filter;
pub mod layout;
pub mod overlay;
pub mod style;
pub mod timing;
pub mod track;
pub mod utils;

pub use cue::{Cue, WordTiming};
pub use error::CoreError;
pub use overlay::{Animation, CompiledOverlay, DrawCmd};
pub use style::{ResolvedStyle, StyleOptions};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compile a cue list and style options into a renderer overlay.
///
/// Chooses the track-document path when the animation resolves to
/// [`Animation::None`] (including unknown animation names) and the
/// drawtext-command path otherwise. Cues whose text is empty after trimming
/// contribute nothing on the animated path and are emitted verbatim on the
/// document path only if non-empty.
#[must_use]
pub fn compile(cues: &[Cue], opts: &StyleOptions) -> CompiledOverlay {
    let resolved = style::resolve(opts);
    let animation = Animation::parse(&opts.animation);

    if animation == Animation::None {
        CompiledOverlay::Document(track::compile_track(cues, &resolved))
    } else {
        CompiledOverlay::Commands(overlay::compile_overlay(cues, &resolved, animation))
    }
}
