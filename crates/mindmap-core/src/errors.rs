//! Error types for the mind-map engine.

use std::fmt;

use thiserror::Error;

use crate::node::NodeId;

/// Result with [`MindMapError`] as the default error.
pub type Result<T, E = MindMapError> = std::result::Result<T, E>;

/// Top-level error type for the mind-map engine.
#[derive(Debug, Error)]
pub enum MindMapError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors while building a tree from raw data.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("malformed input at {path}: {reason}")]
    MalformedInput { path: String, reason: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl BuildError {
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Errors reported for a single measurement or line-splitting request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    #[error("measurement collaborator failed: {message}")]
    Collaborator { message: String },

    #[error("invalid measurement reply: {reason}")]
    InvalidReply { reason: String },
}

impl MeasureError {
    pub fn collaborator(message: impl Into<String>) -> Self {
        Self::Collaborator {
            message: message.into(),
        }
    }

    pub fn invalid_reply(reason: impl Into<String>) -> Self {
        Self::InvalidReply {
            reason: reason.into(),
        }
    }
}

/// The node field a measurement request was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureField {
    TitleWidth,
    TitleLines,
    FileNameLines,
    ContentLines,
}

impl fmt::Display for MeasureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MeasureField::TitleWidth => "title width",
            MeasureField::TitleLines => "title lines",
            MeasureField::FileNameLines => "file name lines",
            MeasureField::ContentLines => "content lines",
        })
    }
}

/// One failed request of a measurement pass.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field} of node {node}: {source}")]
pub struct MeasurementFailure {
    pub node: NodeId,
    pub field: MeasureField,
    pub source: MeasureError,
}

/// Every failed request of a measurement pass, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementFailures(pub Vec<MeasurementFailure>);

impl MeasurementFailures {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MeasurementFailure> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&MeasurementFailure> {
        self.0.first()
    }
}

impl fmt::Display for MeasurementFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} measurement request(s) failed", self.0.len())?;
        if let Some(first) = self.0.first() {
            write!(f, "; first: {first}")?;
        }
        Ok(())
    }
}

impl std::error::Error for MeasurementFailures {}

/// Errors during a layout pass.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Measurement(#[from] MeasurementFailures),

    #[error("no layout algorithm registered under {name:?}")]
    UnknownLayout { name: String },

    #[error("tree has no root")]
    EmptyTree,
}

/// Errors while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
