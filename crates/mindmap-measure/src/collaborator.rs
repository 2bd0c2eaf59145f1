//! The host text services.

use std::sync::Arc;

use futures::future::BoxFuture;
use mindmap_core::{Font, MeasureError, ProbeBox, Size};

use crate::normalize;

/// One request to the host text engine.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureRequest {
    pub text: String,
    pub font: Font,
    pub probe: ProbeBox,
}

impl MeasureRequest {
    pub fn new(text: impl Into<String>, font: Font, probe: ProbeBox) -> Self {
        Self {
            text: text.into(),
            font,
            probe,
        }
    }
}

/// Reply of a line-splitting request.
///
/// Some hosts hand back the wrapped lines as one comma-joined string
/// instead of a list; both shapes are accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum LineReply {
    Lines(Vec<String>),
    Joined(String),
}

impl LineReply {
    /// The wrapped lines in order. Blank lines are kept.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            LineReply::Lines(lines) => lines,
            LineReply::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        }
    }
}

impl From<Vec<String>> for LineReply {
    fn from(lines: Vec<String>) -> Self {
        LineReply::Lines(lines)
    }
}

impl From<String> for LineReply {
    fn from(joined: String) -> Self {
        LineReply::Joined(joined)
    }
}

/// Asynchronous text services provided by the host.
///
/// Each call resolves exactly once. How the host schedules the work is up
/// to the implementation; callers never retry.
pub trait TextMeasurer: Send + Sync {
    /// Measure the rendered size of `request.text` on one line.
    fn measure_width(&self, request: MeasureRequest) -> BoxFuture<'_, Result<Size, MeasureError>>;

    /// Wrap `request.text` into lines no wider than the probe box.
    fn split_lines(&self, request: MeasureRequest)
        -> BoxFuture<'_, Result<LineReply, MeasureError>>;

    /// Strip line breaks and control characters before measuring.
    fn clear_control_chars(&self, text: &str) -> String {
        normalize::clear_control_chars(text)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure_width(&self, request: MeasureRequest) -> BoxFuture<'_, Result<Size, MeasureError>> {
        (**self).measure_width(request)
    }

    fn split_lines(
        &self,
        request: MeasureRequest,
    ) -> BoxFuture<'_, Result<LineReply, MeasureError>> {
        (**self).split_lines(request)
    }

    fn clear_control_chars(&self, text: &str) -> String {
        (**self).clear_control_chars(text)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Arc<T> {
    fn measure_width(&self, request: MeasureRequest) -> BoxFuture<'_, Result<Size, MeasureError>> {
        (**self).measure_width(request)
    }

    fn split_lines(
        &self,
        request: MeasureRequest,
    ) -> BoxFuture<'_, Result<LineReply, MeasureError>> {
        (**self).split_lines(request)
    }

    fn clear_control_chars(&self, text: &str) -> String {
        (**self).clear_control_chars(text)
    }
}
