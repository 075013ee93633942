//! Segmentation Ant — builds one pixel-to-cluster partition.
//!
//! The ant walks the grid once in raster order (`y` fastest, then `x`).
//! At an absent cell it records the pixel under the absent label without
//! asking anyone. At a live cell it offers one candidate per cluster,
//! scored by the heuristic evaluator and the pheromone trail, and lets the
//! injected selector pick. Either way the cursor moves on by one cell, so
//! construction always takes exactly `width × height` steps.
//!
//! After construction the ant reports its partition quality: the sum over
//! live clusters of the mean heuristic cost of their members. Clusters are
//! averaged, not pooled, so a cluster's size neither helps nor hurts it.

use crate::heuristic::{self, HeuristicEvaluator};
use crate::registry::ClusterRegistry;
use crate::solution::Solution;
use crate::trail::TrailAccessor;
use acoseg_core::ant::{Ant, ComponentSelector};
use acoseg_core::config::SegmentationConfig;
use acoseg_core::environment::SegmentationEnvironment;
use acoseg_core::error::{Result, SegmentationError};
use acoseg_core::grid::ABSENT_PIXEL_FLAG;
use acoseg_core::types::{AgentId, ClusterLabel, ClusteredPixel};
use std::cell::OnceCell;
use tracing::{debug, trace};

/// An ant that segments a grey-level image into `K` clusters.
#[derive(Debug, Clone)]
pub struct SegmentationAnt {
    id: AgentId,
    config: SegmentationConfig,
    heuristic: HeuristicEvaluator,
    trail: TrailAccessor,
    solution: Solution,
    registry: ClusterRegistry,
    /// Cached partition quality; emptied whenever the solution changes.
    partition_quality: OnceCell<f64>,
}

impl SegmentationAnt {
    /// Create an ant for `environment`.
    ///
    /// Fails if the config is invalid or the pheromone matrix does not have
    /// one column per configured cluster.
    pub fn new(environment: &SegmentationEnvironment, config: SegmentationConfig) -> Result<Self> {
        Self::with_id(AgentId::new(), environment, config)
    }

    /// Create an ant with a deterministic ID (for testing).
    pub fn with_seed(
        environment: &SegmentationEnvironment,
        config: SegmentationConfig,
        seed: u64,
    ) -> Result<Self> {
        Self::with_id(AgentId::from_seed(seed), environment, config)
    }

    fn with_id(
        id: AgentId,
        environment: &SegmentationEnvironment,
        config: SegmentationConfig,
    ) -> Result<Self> {
        config.validate()?;
        if environment.number_of_clusters() != config.number_of_clusters {
            return Err(SegmentationError::dimension_mismatch(
                "pheromone columns",
                config.number_of_clusters,
                environment.number_of_clusters(),
            ));
        }

        let grid = environment.grid();
        debug!(
            ant = %id,
            width = grid.width(),
            height = grid.height(),
            clusters = config.number_of_clusters,
            "Created segmentation ant"
        );

        Ok(Self {
            id,
            heuristic: HeuristicEvaluator::from_config(&config),
            trail: TrailAccessor::new(config.delta),
            solution: Solution::new(grid.width(), grid.height()),
            registry: ClusterRegistry::new(config.number_of_clusters),
            partition_quality: OnceCell::new(),
            config,
        })
    }

    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    /// Cell the next step will decide, or `None` once complete.
    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.solution.next_position()
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn registry(&self) -> &ClusterRegistry {
        &self.registry
    }

    /// Label of every cell in raster order; `None` for undecided cells.
    pub fn labels(&self) -> Vec<Option<ClusterLabel>> {
        self.solution.labels()
    }

    /// Member count of every live cluster.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        self.registry.sizes()
    }

    /// Current mean intensity of a cluster; 0.0 when empty.
    pub fn cluster_mean_value(&self, label: ClusterLabel) -> f64 {
        self.registry.mean_intensity(label)
    }

    /// Decided neighbours of `pixel` that sit in a different cluster.
    pub fn contiguity_measure(&self, pixel: &ClusteredPixel, environment: &SegmentationEnvironment) -> usize {
        heuristic::contiguity_measure(pixel.x, pixel.y, pixel.label, environment.grid(), &self.solution)
    }

    fn compute_partition_quality(&self, environment: &SegmentationEnvironment) -> f64 {
        let grid = environment.grid();
        let quality: f64 = self
            .registry
            .live()
            .filter(|(_, cluster)| !cluster.is_empty())
            .map(|(index, cluster)| {
                let total: f64 = cluster
                    .members()
                    .iter()
                    .map(|pixel| {
                        self.heuristic
                            .evaluate(pixel, index, &self.registry, grid, &self.solution)
                    })
                    .sum();
                total / cluster.len() as f64
            })
            .sum();

        debug!(
            ant = %self.id,
            placed = self.solution.placed(),
            sizes = ?self.registry.sizes(),
            quality,
            "Computed partition quality"
        );
        quality
    }
}

impl Ant for SegmentationAnt {
    type Component = ClusteredPixel;
    type Environment = SegmentationEnvironment;

    fn id(&self) -> AgentId {
        self.id
    }

    fn current_index(&self) -> usize {
        self.solution.placed()
    }

    /// One candidate per live cluster at the cursor.
    fn neighbourhood(&self, environment: &SegmentationEnvironment) -> Vec<ClusteredPixel> {
        let Some((x, y)) = self.cursor() else {
            return Vec::new();
        };
        let grid = environment.grid();
        (0..self.config.number_of_clusters)
            .map(|cluster| ClusteredPixel::from_grid(grid, x, y, ClusterLabel::Cluster(cluster)))
            .collect()
    }

    fn heuristic_value(
        &self,
        component: &ClusteredPixel,
        environment: &SegmentationEnvironment,
    ) -> Option<f64> {
        self.heuristic
            .heuristic(component, &self.registry, environment.grid(), &self.solution)
    }

    fn pheromone_trail_value(
        &self,
        component: &ClusteredPixel,
        environment: &SegmentationEnvironment,
    ) -> Option<f64> {
        self.trail
            .get(component, environment.pheromone(), environment.grid())
    }

    fn set_pheromone_trail_value(
        &self,
        component: &ClusteredPixel,
        environment: &mut SegmentationEnvironment,
        value: f64,
    ) {
        let (grid, matrix) = environment.split_mut();
        self.trail.set(component, matrix, grid, value);
    }

    /// # Panics
    ///
    /// Panics if `component` is not the cell at the cursor, names a
    /// cluster outside `0..K`, or disagrees with the absent flag (an absent
    /// cell must carry the absent label and a live cell a live one). The
    /// ant is left untouched when it panics.
    fn visit(&mut self, component: ClusteredPixel) {
        assert_eq!(
            component.label.is_absent(),
            component.intensity == ABSENT_PIXEL_FLAG,
            "pixel ({}, {}) with intensity {} cannot take label {}",
            component.x,
            component.y,
            component.intensity,
            component.label
        );
        assert!(
            self.registry.contains(component.label),
            "label {} out of range for {} clusters",
            component.label,
            self.registry.number_of_clusters()
        );
        self.solution.place(component);
        self.registry.add_member(component);
        self.partition_quality.take();
        trace!(
            ant = %self.id,
            x = component.x,
            y = component.y,
            label = %component.label,
            "Assigned pixel"
        );
    }

    /// # Panics
    ///
    /// Panics if the solution is already complete.
    fn select_next(
        &mut self,
        environment: &SegmentationEnvironment,
        selector: &mut dyn ComponentSelector<ClusteredPixel>,
    ) {
        let Some((x, y)) = self.cursor() else {
            panic!("ant {} stepped past a complete solution", self.id);
        };

        let grid = environment.grid();
        if grid.is_absent(x, y) {
            self.visit(ClusteredPixel::from_grid(grid, x, y, ClusterLabel::Absent));
        } else {
            self.visit_selected(environment, selector);
        }

        if self.solution.is_complete() {
            debug!(ant = %self.id, sizes = ?self.registry.sizes(), "Solution complete");
        }
    }

    fn is_solution_ready(&self, _environment: &SegmentationEnvironment) -> bool {
        self.solution.is_complete()
    }

    /// Partition quality, computed once per construction.
    fn solution_cost(&self, environment: &SegmentationEnvironment) -> f64 {
        *self
            .partition_quality
            .get_or_init(|| self.compute_partition_quality(environment))
    }

    fn clear(&mut self) {
        self.solution.clear();
        self.registry.reset(self.config.number_of_clusters);
        self.partition_quality.take();
        debug!(ant = %self.id, "Cleared segmentation ant");
    }
}
