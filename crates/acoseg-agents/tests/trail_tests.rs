//! Pheromone trail reads and writes through the ant.

mod common;

use acoseg_agents::prelude::*;
use common::*;

#[test]
fn written_trail_reads_back_with_delta() {
    let mut env = two_by_two();
    let ant = SegmentationAnt::with_seed(&env, SegmentationConfig::new(2), 1).unwrap();
    let pixel = ClusteredPixel::from_grid(env.grid(), 1, 0, ClusterLabel::Cluster(1));

    ant.set_pheromone_trail_value(&pixel, &mut env, 0.5);

    assert_eq!(env.pheromone().get(2, 1), 0.5);
    let read = ant.pheromone_trail_value(&pixel, &env).unwrap();
    assert!((read - 0.501).abs() < 1e-12);
}

#[test]
fn trail_row_is_the_raster_index() {
    let mut env = environment(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]], 2);
    let ant = SegmentationAnt::with_seed(&env, SegmentationConfig::new(2), 1).unwrap();

    let pixel = ClusteredPixel::from_grid(env.grid(), 1, 1, ClusterLabel::Cluster(0));
    ant.set_pheromone_trail_value(&pixel, &mut env, 7.0);

    // x * height + y
    assert_eq!(env.pheromone().row(4), &[7.0, 1.0]);
}

#[test]
fn absent_label_reads_nothing() {
    let env = two_by_two();
    let ant = SegmentationAnt::with_seed(&env, SegmentationConfig::new(2), 1).unwrap();
    let pixel = ClusteredPixel::from_grid(env.grid(), 0, 0, ClusterLabel::Absent);

    assert_eq!(ant.pheromone_trail_value(&pixel, &env), None);
    assert_eq!(ant.heuristic_value(&pixel, &env), None);
}

#[test]
fn absent_label_writes_are_dropped() {
    let mut env = two_by_two();
    let ant = SegmentationAnt::with_seed(&env, SegmentationConfig::new(2), 1).unwrap();
    let before = env.pheromone().clone();

    let pixel = ClusteredPixel::from_grid(env.grid(), 0, 1, ClusterLabel::Absent);
    ant.set_pheromone_trail_value(&pixel, &mut env, 42.0);

    assert_eq!(env.pheromone(), &before);
}

#[test]
fn deposits_shift_roulette_toward_reinforced_cluster() {
    let mut env = two_by_two();
    let config = SegmentationConfig::new(2);
    let ant = SegmentationAnt::with_seed(&env, config.clone(), 1).unwrap();

    // Reinforce cluster 1 everywhere.
    for x in 0..2 {
        for y in 0..2 {
            let pixel = ClusteredPixel::from_grid(env.grid(), x, y, ClusterLabel::Cluster(1));
            ant.set_pheromone_trail_value(&pixel, &mut env, 1000.0);
        }
    }

    let mut ant = SegmentationAnt::with_seed(&env, config, 2).unwrap();
    let mut selector = RouletteSelector::seeded(SelectionWeights::new(1.0, 0.0), 4);
    ant.build_solution(&env, &mut selector);

    let sizes = ant.cluster_sizes();
    assert_eq!(sizes.iter().sum::<usize>(), 4);
    assert!(sizes[1] >= 3, "sizes = {:?}", sizes);
}
