//! Shared types used across all ACOSeg crates.

use crate::grid::PixelGrid;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an ant in the colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub Uuid);

impl AgentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic ID (for testing and reproducible runs).
    pub fn from_seed(seed: u64) -> Self {
        Self(Uuid::from_u128(seed as u128))
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The cluster a pixel belongs to.
///
/// Live clusters are numbered `0..K`. `Absent` is the bookkeeping bucket
/// for masked pixels: it never takes part in scoring or pheromone access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClusterLabel {
    /// Pixel excluded from segmentation.
    Absent,
    /// One of the `K` live clusters.
    Cluster(usize),
}

impl ClusterLabel {
    /// Index of the live cluster, or `None` for `Absent`.
    ///
    /// This is the single guard every scoring and trail operation goes
    /// through before touching cluster-indexed state.
    pub fn cluster(self) -> Option<usize> {
        match self {
            ClusterLabel::Absent => None,
            ClusterLabel::Cluster(index) => Some(index),
        }
    }

    pub fn is_absent(self) -> bool {
        matches!(self, ClusterLabel::Absent)
    }
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterLabel::Absent => write!(f, "absent"),
            ClusterLabel::Cluster(index) => write!(f, "cluster {}", index),
        }
    }
}

/// A pixel together with its (candidate or final) cluster assignment.
///
/// This is the solution component ants build: one per grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusteredPixel {
    pub x: usize,
    pub y: usize,
    /// Grey-level intensity, copied from the grid.
    pub intensity: f64,
    pub label: ClusterLabel,
}

impl ClusteredPixel {
    pub fn new(x: usize, y: usize, intensity: f64, label: ClusterLabel) -> Self {
        Self {
            x,
            y,
            intensity,
            label,
        }
    }

    /// Build a component for cell `(x, y)`, reading its intensity from the grid.
    pub fn from_grid(grid: &PixelGrid, x: usize, y: usize, label: ClusterLabel) -> Self {
        Self::new(x, y, grid.intensity(x, y), label)
    }

    /// Same pixel, different assignment.
    pub fn with_label(self, label: ClusterLabel) -> Self {
        Self { label, ..self }
    }
}

/// One scored option handed to a [`crate::ant::ComponentSelector`].
///
/// `heuristic` is a cost (lower is better); `pheromone` is a desirability
/// (higher is better). Both are strictly positive for live clusters.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<C> {
    pub component: C,
    pub heuristic: f64,
    pub pheromone: f64,
}

impl<C> Candidate<C> {
    pub fn new(component: C, heuristic: f64, pheromone: f64) -> Self {
        Self {
            component,
            heuristic,
            pheromone,
        }
    }
}
