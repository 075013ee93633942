//! Heuristic evaluator — the local cost of a (pixel, cluster) assignment.
//!
//! Two terms, both "lower is better":
//!
//! - **Homogeneity** — distance between the pixel's grey level and the
//!   candidate cluster's current mean
//! - **Contiguity** — how many already-decided 4-neighbours sit in a
//!   different cluster
//!
//! Homogeneity alone produces speckled partitions; the contiguity term
//! pulls each decision toward its decided neighbours during the single
//! raster pass. A positive `delta` keeps every score strictly above zero.

use crate::registry::ClusterRegistry;
use crate::solution::Solution;
use acoseg_core::config::SegmentationConfig;
use acoseg_core::grid::PixelGrid;
use acoseg_core::types::{ClusterLabel, ClusteredPixel};

#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicEvaluator {
    contiguity_weight: f64,
    delta: f64,
}

impl HeuristicEvaluator {
    pub fn new(contiguity_weight: f64, delta: f64) -> Self {
        Self {
            contiguity_weight,
            delta,
        }
    }

    pub fn from_config(config: &SegmentationConfig) -> Self {
        Self::new(config.contiguity_weight, config.delta)
    }

    /// Cost of `pixel` under its own label, or `None` when the label is absent.
    pub fn heuristic(
        &self,
        pixel: &ClusteredPixel,
        registry: &ClusterRegistry,
        grid: &PixelGrid,
        solution: &Solution,
    ) -> Option<f64> {
        let cluster = pixel.label.cluster()?;
        Some(self.evaluate(pixel, cluster, registry, grid, solution))
    }

    /// Cost of assigning `pixel` to live cluster `cluster`.
    ///
    /// `homogeneity + contiguity_weight * contiguity + delta`. Always
    /// strictly positive.
    pub fn evaluate(
        &self,
        pixel: &ClusteredPixel,
        cluster: usize,
        registry: &ClusterRegistry,
        grid: &PixelGrid,
        solution: &Solution,
    ) -> f64 {
        let label = ClusterLabel::Cluster(cluster);
        let homogeneity = (pixel.intensity - registry.mean_intensity(label)).abs();
        let contiguity = contiguity_measure(pixel.x, pixel.y, label, grid, solution);
        homogeneity + self.contiguity_weight * contiguity as f64 + self.delta
    }
}

/// Decided 4-neighbours of `(x, y)` whose label differs from `label`.
///
/// Undecided neighbours are skipped. Absent neighbours carry a label that
/// differs from every live cluster, so they count.
pub fn contiguity_measure(
    x: usize,
    y: usize,
    label: ClusterLabel,
    grid: &PixelGrid,
    solution: &Solution,
) -> usize {
    grid.neighbours(x, y)
        .filter_map(|(nx, ny)| solution.get(nx, ny))
        .filter(|neighbour| neighbour.label != label)
        .count()
}
