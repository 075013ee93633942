//! Shared fixtures for the agent integration tests.

#![allow(dead_code)]

use acoseg_agents::prelude::*;

/// Picks the candidate whose cluster is `partition(x, y)`.
pub struct PartitionSelector<F> {
    partition: F,
    pub calls: usize,
}

impl<F: Fn(usize, usize) -> usize> PartitionSelector<F> {
    pub fn new(partition: F) -> Self {
        Self { partition, calls: 0 }
    }
}

impl<F: Fn(usize, usize) -> usize> ComponentSelector<ClusteredPixel> for PartitionSelector<F> {
    fn select(&mut self, candidates: &[Candidate<ClusteredPixel>]) -> usize {
        self.calls += 1;
        let first = &candidates[0].component;
        let wanted = ClusterLabel::Cluster((self.partition)(first.x, first.y));
        candidates
            .iter()
            .position(|c| c.component.label == wanted)
            .expect("partition names a cluster outside the candidate set")
    }
}

/// Fails the test if the ant ever asks for a decision.
pub struct UnreachableSelector;

impl ComponentSelector<ClusteredPixel> for UnreachableSelector {
    fn select(&mut self, _candidates: &[Candidate<ClusteredPixel>]) -> usize {
        panic!("selector consulted for an absent pixel");
    }
}

pub fn environment(cells: Vec<Vec<f64>>, clusters: usize) -> SegmentationEnvironment {
    let grid = PixelGrid::new(cells).expect("valid test grid");
    SegmentationEnvironment::with_initial_pheromone(grid, clusters, 1.0)
}

/// The 2×2 example: dark column at x = 0, bright column at x = 1.
pub fn two_by_two() -> SegmentationEnvironment {
    environment(vec![vec![10.0, 10.0], vec![200.0, 200.0]], 2)
}

/// Three grey levels in horizontal bands, one band per cluster.
pub fn banded_image() -> SegmentationEnvironment {
    environment(
        vec![
            vec![0.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0],
            vec![128.0, 128.0, 128.0, 128.0],
            vec![128.0, 128.0, 128.0, 128.0],
            vec![255.0, 255.0, 255.0, 255.0],
            vec![255.0, 255.0, 255.0, 255.0],
        ],
        3,
    )
}

/// Label that puts each band of [`banded_image`] in its own cluster.
pub fn band_of(x: usize, _y: usize) -> usize {
    x / 2
}

/// Same cluster sizes as [`band_of`], but scattered across the bands.
pub fn scrambled_band(x: usize, y: usize) -> usize {
    (x + y) % 3
}

/// Build a complete solution following `partition`.
pub fn build<F: Fn(usize, usize) -> usize>(
    env: &SegmentationEnvironment,
    config: SegmentationConfig,
    partition: F,
) -> SegmentationAnt {
    let mut ant = SegmentationAnt::with_seed(env, config, 1).expect("valid ant");
    ant.build_solution(env, &mut PartitionSelector::new(partition));
    ant
}
