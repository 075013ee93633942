//! ACOSeg Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use acoseg_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{AgentId, Candidate, ClusterLabel, ClusteredPixel};

pub use crate::grid::{PixelGrid, ABSENT_PIXEL_FLAG};
pub use crate::pheromone::PheromoneMatrix;
pub use crate::environment::SegmentationEnvironment;
pub use crate::config::SegmentationConfig;

// Re-export the construction traits
pub use crate::ant::{Ant, ComponentSelector};

// Re-export error types
pub use crate::error::{ConfigError, Result, SegmentationError};
