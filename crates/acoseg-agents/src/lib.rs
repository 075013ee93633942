//! # ACOSeg Agents
//!
//! The segmentation ant and the pieces it is built from:
//!
//! - **SegmentationAnt** — raster walker that assigns every pixel to a cluster
//!   and scores the resulting partition
//! - **ClusterRegistry** — per-ant cluster membership and mean intensities
//! - **HeuristicEvaluator** — homogeneity + contiguity cost of an assignment
//! - **TrailAccessor** — guarded access to the shared pheromone matrix
//! - **RouletteSelector** / **GreedySelector** — reference implementations of
//!   the stochastic-choice capability ants delegate to

pub mod registry;
pub mod solution;
pub mod heuristic;
pub mod trail;
pub mod segmentation_ant;
pub mod selection;
pub mod prelude;
