//! Error types for ACOSeg operations.
//!
//! Only construction-time checks are fallible: malformed grids, matrices
//! whose shape disagrees with the grid, and invalid configuration. Once an
//! ant exists, construction has no recoverable failure modes; precondition
//! violations on the hot path panic instead.

use thiserror::Error;

/// Result type for ACOSeg operations.
pub type Result<T> = std::result::Result<T, SegmentationError>;

/// Errors that can occur while setting up a segmentation run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SegmentationError {
    /// The grid has no cells.
    #[error("Pixel grid is empty")]
    EmptyGrid,

    /// Not every column of the grid has the same number of cells.
    #[error("Ragged pixel grid: column {x} has {found} cells, expected {expected}")]
    RaggedGrid {
        x: usize,
        expected: usize,
        found: usize,
    },

    /// A cell holds NaN or an infinite intensity.
    #[error("Invalid intensity at ({x}, {y}): {value}")]
    InvalidIntensity { x: usize, y: usize, value: f64 },

    /// Two collaborators disagree on a dimension.
    #[error("Dimension mismatch for {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Invalid value.
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

// Convenience constructors
impl SegmentationError {
    pub fn dimension_mismatch(what: &'static str, expected: usize, found: usize) -> Self {
        SegmentationError::DimensionMismatch {
            what,
            expected,
            found,
        }
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SegmentationError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }
}
