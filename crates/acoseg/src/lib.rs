//! # ACOSeg
//!
//! Unsupervised grey-level image segmentation through ant colony
//! construction.
//!
//! An ant walks the image once in raster order and assigns every live pixel
//! to one of `K` clusters. Each choice weighs a local heuristic (grey-level
//! homogeneity plus contiguity with decided neighbours) against a pheromone
//! trail the colony learns across iterations. Masked pixels carry the
//! absent flag and are skipped without consulting the selector. The finished
//! partition is scored by its quality: lower is better.
//!
//! ## Quick Start
//!
//! ```rust
//! use acoseg::prelude::*;
//!
//! // Dark column at x = 0, bright column at x = 1.
//! let grid = PixelGrid::new(vec![vec![10.0, 10.0], vec![200.0, 200.0]]).unwrap();
//! let env = SegmentationEnvironment::with_initial_pheromone(grid, 2, 1.0);
//!
//! let mut ant = SegmentationAnt::new(&env, SegmentationConfig::new(2)).unwrap();
//! let mut selector = RouletteSelector::seeded(SelectionWeights::default(), 7);
//! ant.build_solution(&env, &mut selector);
//!
//! assert!(ant.is_solution_ready(&env));
//! assert_eq!(ant.cluster_sizes().iter().sum::<usize>(), 4);
//! println!("partition quality: {:.3}", ant.solution_cost(&env));
//! ```
//!
//! ## Architecture
//!
//! - [`acoseg_core`] - Grid, pheromone matrix, config, errors and the
//!   [`Ant`](acoseg_core::ant::Ant) construction contract
//! - [`acoseg_agents`] - The segmentation ant and reference selectors
//!
//! ## Pheromone Updates
//!
//! Ants only read and write single trail cells. Evaporation, deposit
//! schedules and the iteration loop belong to the caller:
//!
//! ```rust
//! use acoseg::prelude::*;
//!
//! let grid = PixelGrid::new(vec![vec![0.0, 255.0]]).unwrap();
//! let mut env = SegmentationEnvironment::with_initial_pheromone(grid, 2, 1.0);
//! let mut ant = SegmentationAnt::new(&env, SegmentationConfig::new(2)).unwrap();
//! ant.build_solution(&env, &mut GreedySelector::default());
//!
//! let reward = 1.0 / ant.solution_cost(&env);
//! for pixel in ant.solution().iter() {
//!     if let Some(cluster) = pixel.label.cluster() {
//!         let row = env.grid().raster_index(pixel.x, pixel.y);
//!         let current = env.pheromone().get(row, cluster);
//!         ant.set_pheromone_trail_value(pixel, &mut env, current + reward);
//!     }
//! }
//! ```

// Re-export all subcrates
pub use acoseg_core as core;
pub use acoseg_agents as agents;

/// Prelude module for convenient imports.
///
/// ```rust
/// use acoseg::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use acoseg_core::types::{AgentId, Candidate, ClusterLabel, ClusteredPixel};
    pub use acoseg_core::grid::{PixelGrid, ABSENT_PIXEL_FLAG};
    pub use acoseg_core::pheromone::PheromoneMatrix;
    pub use acoseg_core::environment::SegmentationEnvironment;
    pub use acoseg_core::config::SegmentationConfig;

    // Core traits
    pub use acoseg_core::ant::{Ant, ComponentSelector};

    // Error types
    pub use acoseg_core::error::{ConfigError, Result, SegmentationError};

    // Agents
    pub use acoseg_agents::segmentation_ant::SegmentationAnt;
    pub use acoseg_agents::registry::{Cluster, ClusterRegistry};
    pub use acoseg_agents::solution::Solution;
    pub use acoseg_agents::selection::{GreedySelector, RouletteSelector, SelectionWeights};
}
