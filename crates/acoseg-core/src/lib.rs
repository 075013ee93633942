//! # ACOSeg Core
//!
//! Core traits and types for unsupervised image segmentation with an
//! ant colony.
//!
//! Segmentation is framed as a construction problem. Each ant walks the
//! pixel grid once in raster order and, at every live pixel, picks one of
//! `K` clusters. The choice is guided by two signals:
//!
//! - **Heuristic** — a local cost combining grey-level homogeneity with the
//!   cluster's mean and contiguity with already-decided neighbours
//! - **Pheromone** — a per-(pixel, cluster) desirability learned by the
//!   colony across iterations and stored in a shared matrix
//!
//! This crate holds the pieces every ant and colony share:
//!
//! - [`grid::PixelGrid`] — the immutable grey-level image, with an
//!   absent-pixel flag for masked cells
//! - [`pheromone::PheromoneMatrix`] — the shared `(pixels × K)` trail matrix
//! - [`environment::SegmentationEnvironment`] — grid and matrix, shape-checked
//! - [`config::SegmentationConfig`] — `K`, contiguity weight and delta
//! - [`ant::Ant`] and [`ant::ComponentSelector`] — the construction contract
//!   and the injected stochastic-choice capability
//!
//! ## Quick Start
//!
//! ```rust
//! use acoseg_core::prelude::*;
//!
//! let grid = PixelGrid::new(vec![vec![10.0, 10.0], vec![200.0, 200.0]]).unwrap();
//! let env = SegmentationEnvironment::with_initial_pheromone(grid, 2, 1.0);
//!
//! assert_eq!(env.number_of_pixels(), 4);
//! assert_eq!(env.number_of_clusters(), 2);
//! ```

pub mod types;
pub mod grid;
pub mod pheromone;
pub mod environment;
pub mod config;
pub mod ant;
pub mod error;
pub mod prelude;
