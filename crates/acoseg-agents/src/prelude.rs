//! ACOSeg Agents Prelude — convenient imports for common usage.
//!
//! ```rust
//! use acoseg_agents::prelude::*;
//! ```

// Re-export agent types
pub use crate::segmentation_ant::SegmentationAnt;
pub use crate::registry::{Cluster, ClusterRegistry};
pub use crate::solution::Solution;
pub use crate::heuristic::HeuristicEvaluator;
pub use crate::trail::TrailAccessor;
pub use crate::selection::{GreedySelector, RouletteSelector, SelectionWeights};

// Re-export from core
pub use acoseg_core::prelude::*;
