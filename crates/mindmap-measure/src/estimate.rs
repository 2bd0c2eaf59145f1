//! Host-free text measurement.
//!
//! Estimates glyph widths from the font size instead of shaping text with
//! real font metrics. Good enough for headless runs, tests and benchmarks.

use futures::future::{self, BoxFuture, FutureExt};
use mindmap_core::{MeasureError, Size};

use crate::collaborator::{LineReply, MeasureRequest, TextMeasurer};

/// Width and line height factors, relative to the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    /// Advance of a narrow glyph (Latin letters, digits, punctuation)
    pub narrow_advance: f64,
    /// Advance of a wide glyph (CJK ideographs, full-width forms)
    pub wide_advance: f64,
    /// Line height as a multiplier (e.g., 1.2 = 120%)
    pub line_height: f64,
    /// Extra space after every glyph, in pixels
    pub letter_spacing: f64,
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self {
            narrow_advance: 0.55,
            wide_advance: 1.0,
            line_height: 1.2,
            letter_spacing: 0.0,
        }
    }
}

/// A [`TextMeasurer`] that answers immediately from estimated metrics.
#[derive(Debug, Clone, Default)]
pub struct EstimatingMeasurer {
    metrics: GlyphMetrics,
}

impl EstimatingMeasurer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(metrics: GlyphMetrics) -> Self {
        Self { metrics }
    }

    fn char_width(&self, c: char, font_size: f64) -> f64 {
        let advance = if is_wide(c) {
            self.metrics.wide_advance
        } else {
            self.metrics.narrow_advance
        };
        font_size * advance + self.metrics.letter_spacing
    }

    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().map(|c| self.char_width(c, font_size)).sum()
    }

    /// Measure `text` on a single line.
    pub fn measure(&self, text: &str, font_size: f64) -> Size {
        Size::new(
            self.text_width(text, font_size),
            font_size * self.metrics.line_height,
        )
    }

    /// Greedily wrap `text` into lines no wider than `max_width`.
    ///
    /// Words wider than a line are broken between characters, which is also
    /// how unspaced CJK text wraps.
    pub fn wrap(&self, text: &str, font_size: f64, max_width: f64) -> Vec<String> {
        let space_width = self.char_width(' ', font_size);
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in text.split_whitespace() {
            let word_width = self.text_width(word, font_size);

            if !current.is_empty() && current_width + space_width + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space_width + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }

            for c in word.chars() {
                let w = self.char_width(c, font_size);
                if !current.is_empty() && current_width + w > max_width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0.0;
                }
                current.push(c);
                current_width += w;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }

        lines
    }
}

impl TextMeasurer for EstimatingMeasurer {
    fn measure_width(&self, request: MeasureRequest) -> BoxFuture<'_, Result<Size, MeasureError>> {
        future::ready(Ok(self.measure(&request.text, request.font.size))).boxed()
    }

    fn split_lines(
        &self,
        request: MeasureRequest,
    ) -> BoxFuture<'_, Result<LineReply, MeasureError>> {
        if !(request.probe.width > 0.0) {
            let reason = format!("probe width {} cannot hold any text", request.probe.width);
            return future::ready(Err(MeasureError::invalid_reply(reason))).boxed();
        }
        let lines = self.wrap(&request.text, request.font.size, request.probe.width);
        future::ready(Ok(LineReply::Lines(lines))).boxed()
    }
}

fn is_wide(c: char) -> bool {
    matches!(c as u32,
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindmap_core::{Font, ProbeBox};

    #[test]
    fn test_measure_single_line() {
        let m = EstimatingMeasurer::new();
        let size = m.measure("abcd", 10.0);
        assert!((size.width - 22.0).abs() < 1e-9);
        assert!((size.height - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_wide_glyphs() {
        let m = EstimatingMeasurer::new();
        assert!((m.measure("分支主题", 10.0).width - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_words() {
        let m = EstimatingMeasurer::with_metrics(GlyphMetrics {
            narrow_advance: 1.0,
            ..GlyphMetrics::default()
        });
        // every glyph is 10px wide, lines hold 10 glyphs
        let lines = m.wrap("alpha beta gamma delta", 10.0, 100.0);
        assert_eq!(lines, ["alpha beta", "gamma", "delta"]);
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        let m = EstimatingMeasurer::with_metrics(GlyphMetrics {
            narrow_advance: 1.0,
            ..GlyphMetrics::default()
        });
        let lines = m.wrap("abcdefgh", 10.0, 30.0);
        assert_eq!(lines, ["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_empty() {
        let m = EstimatingMeasurer::new();
        assert!(m.wrap("", 14.0, 100.0).is_empty());
    }

    #[test]
    fn test_split_lines_future() {
        let m = EstimatingMeasurer::new();
        let request = MeasureRequest::new("中文标题", Font::new("Heiti SC", 10.0), ProbeBox::new(20.0, 50.0));
        let reply = pollster::block_on(m.split_lines(request)).unwrap();
        assert_eq!(reply.into_lines(), ["中文", "标题"]);
    }

    #[test]
    fn test_split_lines_rejects_zero_probe() {
        let m = EstimatingMeasurer::new();
        let request = MeasureRequest::new("x", Font::new("Heiti SC", 10.0), ProbeBox::new(0.0, 50.0));
        assert!(pollster::block_on(m.split_lines(request)).is_err());
    }
}
