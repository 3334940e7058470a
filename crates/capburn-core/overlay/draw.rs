//! Drawtext command construction
//!
//! A [`DrawCmd`] is one timed text-overlay instruction. Fields hold raw
//! (unescaped) values; [`DrawCmd::render`] performs the escaping and emits
//! the final `drawtext=...` filter string. Position, opacity and enable
//! fields are ffmpeg expressions and are always single-quoted in the output
//! so embedded commas and colons stay inside the option value.

use crate::filter::escape_drawtext_text;
use crate::style::ResolvedStyle;
use crate::utils::ass_token_to_drawtext;
use std::fmt::Write;

/// Box padding around highlighted/boxed text, in pixels
const BOX_PAD: u32 = 10;

/// One timed drawtext overlay instruction.
///
/// Construct via [`DrawCmd::plain`] or [`DrawCmd::styled`] and refine with
/// the chaining setters; the animation families only ever override the
/// fields their formula owns.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    /// Raw text, escaped at render time
    pub text: String,
    pub font: String,
    pub font_size: u32,
    /// Drawtext color: `0xRRGGBB` or `color@opacity`
    pub font_color: String,
    /// Horizontal position expression
    pub x: String,
    /// Vertical position expression
    pub y: String,
    /// Opacity expression; `None` leaves drawtext's default (opaque)
    pub alpha: Option<String>,
    /// Visibility predicate, e.g. `between(t,0,2.5)`
    pub enable: String,
    /// Outline width and color
    pub border: Option<(f32, String)>,
    /// Shadow offset (applied to both axes) and color
    pub shadow: Option<(f32, String)>,
    /// Box fill color in `color@opacity` form, padded by [`BOX_PAD`]
    pub box_fill: Option<String>,
}

impl DrawCmd {
    /// A bare command with no outline, shadow or box
    #[must_use]
    pub fn plain(text: impl Into<String>, font: &str, font_size: u32, color: &str) -> Self {
        Self {
            text: text.into(),
            font: font.to_string(),
            font_size,
            font_color: color.to_string(),
            x: String::from("(w-text_w)/2"),
            y: String::from("(h-text_h)/2"),
            alpha: None,
            enable: String::new(),
            border: None,
            shadow: None,
            box_fill: None,
        }
    }

    /// A command carrying the resolved style's text color and decorations
    /// (outline, shadow, or background box)
    #[must_use]
    pub fn styled(text: impl Into<String>, style: &ResolvedStyle) -> Self {
        let mut cmd = Self::plain(
            text,
            &style.font,
            style.font_size,
            &ass_token_to_drawtext(&style.primary_colour),
        );
        if let Some(bg) = &style.background_box {
            cmd.box_fill = Some(bg.clone());
        } else {
            if style.outline > 0.0 {
                cmd.border = Some((style.outline, ass_token_to_drawtext(&style.outline_colour)));
            }
            if style.shadow > 0.0 {
                cmd.shadow = Some((style.shadow, ass_token_to_drawtext(&style.shadow_colour)));
            }
        }
        cmd
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.font_color = color.into();
        self
    }

    #[must_use]
    pub fn at(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x = x.into();
        self.y = y.into();
        self
    }

    #[must_use]
    pub fn alpha(mut self, expr: impl Into<String>) -> Self {
        self.alpha = Some(expr.into());
        self
    }

    /// Gate visibility to the absolute window `[start, end]`
    #[must_use]
    pub fn window(mut self, start: f64, end: f64) -> Self {
        self.enable = window_expr(start, end);
        self
    }

    /// Replace the enable predicate wholesale (compound gates)
    #[must_use]
    pub fn enable(mut self, expr: impl Into<String>) -> Self {
        self.enable = expr.into();
        self
    }

    #[must_use]
    pub fn border(mut self, width: f32, color: impl Into<String>) -> Self {
        self.border = Some((width, color.into()));
        self
    }

    /// Fill a padded box behind the text
    #[must_use]
    pub fn boxed(mut self, fill: impl Into<String>) -> Self {
        self.box_fill = Some(fill.into());
        self
    }

    /// Emit the final `drawtext=...` filter entry
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(128);
        let _ = write!(
            out,
            "drawtext=text='{}':font='{}':fontsize={}:fontcolor={}",
            escape_drawtext_text(&self.text),
            self.font,
            self.font_size,
            self.font_color,
        );
        if let Some(alpha) = &self.alpha {
            let _ = write!(out, ":alpha='{alpha}'");
        }
        if let Some((width, color)) = &self.border {
            let _ = write!(out, ":borderw={width}:bordercolor={color}");
        }
        if let Some((depth, color)) = &self.shadow {
            let _ = write!(out, ":shadowx={depth}:shadowy={depth}:shadowcolor={color}");
        }
        if let Some(fill) = &self.box_fill {
            let _ = write!(out, ":box=1:boxcolor={fill}:boxborderw={BOX_PAD}");
        }
        let _ = write!(out, ":x='{}':y='{}'", self.x, self.y);
        if !self.enable.is_empty() {
            let _ = write!(out, ":enable='{}'", self.enable);
        }
        out
    }
}

/// Format a number for embedding in a filter expression: integral values
/// drop the fraction, others keep at most three decimals.
#[must_use]
pub(crate) fn fmt_num(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let s = format!("{value:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Visibility predicate for the absolute window `[start, end]`
#[must_use]
pub(crate) fn window_expr(start: f64, end: f64) -> String {
    format!("between(t,{},{})", fmt_num(start), fmt_num(end))
}

/// Elapsed-time expression since `start`; zero start collapses to plain `t`
#[must_use]
pub(crate) fn elapsed_expr(start: f64) -> String {
    if start.abs() < 1e-9 {
        String::from("t")
    } else {
        format!("(t-{})", fmt_num(start))
    }
}
