//! Error type shared by ingest, bounds and configuration loading

use thiserror::Error;

/// Everything that can go wrong before the first primitive is drawn.
#[derive(Debug, Error)]
pub enum MinimapError {
    /// The document contained no path actors, so there is nothing to size a canvas from.
    #[error("no path actors found in input")]
    EmptyGraph,

    /// A path actor record is missing a field or has one of the wrong shape.
    #[error("malformed record for `{node}`: {reason}")]
    DataFormat { node: String, reason: String },

    /// The top-level document is neither a record mapping nor an array wrapping one.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// The nodes are spread too far apart for a raster canvas.
    #[error("canvas of {width}x{height} pixels cannot be allocated")]
    CanvasTooLarge { width: i128, height: i128 },

    #[error("invalid style config: {0}")]
    Config(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl MinimapError {
    pub fn data_format(node: impl Into<String>, reason: impl Into<String>) -> Self {
        MinimapError::DataFormat {
            node: node.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MinimapError>;
