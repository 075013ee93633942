//! Reference selectors — turn scored candidates into one choice.
//!
//! Both selectors weigh a candidate by
//! `pheromone^alpha * (1 / heuristic)^beta`. The heuristic is a cost, so it
//! is inverted before weighting: cheaper assignments get more weight.
//!
//! - [`RouletteSelector`] samples proportionally to the weights
//!   (exploration)
//! - [`GreedySelector`] takes the heaviest candidate (exploitation)

use acoseg_core::ant::ComponentSelector;
use acoseg_core::types::Candidate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Exponents applied to the two signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionWeights {
    /// Importance of the pheromone trail (default: 1.0).
    pub alpha: f64,
    /// Importance of the heuristic (default: 2.0).
    pub beta: f64,
}

impl Default for SelectionWeights {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 2.0,
        }
    }
}

impl SelectionWeights {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Weight of one candidate. Degenerate values (NaN, infinite,
    /// non-positive) weigh nothing.
    pub fn weight<C>(&self, candidate: &Candidate<C>) -> f64 {
        let w = candidate.pheromone.powf(self.alpha) * candidate.heuristic.recip().powf(self.beta);
        if w.is_finite() && w > 0.0 {
            w
        } else {
            0.0
        }
    }
}

/// Random-proportional choice.
#[derive(Debug, Clone)]
pub struct RouletteSelector {
    weights: SelectionWeights,
    rng: StdRng,
}

impl RouletteSelector {
    /// Selector seeded from the operating system.
    pub fn new(weights: SelectionWeights) -> Self {
        Self {
            weights,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible selector.
    pub fn seeded(weights: SelectionWeights, seed: u64) -> Self {
        Self {
            weights,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn weights(&self) -> SelectionWeights {
        self.weights
    }
}

impl<C> ComponentSelector<C> for RouletteSelector {
    /// # Panics
    ///
    /// Panics if `candidates` is empty.
    fn select(&mut self, candidates: &[Candidate<C>]) -> usize {
        assert!(!candidates.is_empty(), "cannot select from an empty candidate set");

        let weights: Vec<f64> = candidates.iter().map(|c| self.weights.weight(c)).collect();
        let total: f64 = weights.iter().sum();
        if !(total.is_finite() && total > 0.0) {
            warn!(
                candidates = candidates.len(),
                total, "No usable candidate weight, choosing uniformly"
            );
            return self.rng.random_range(0..candidates.len());
        }

        let mut remaining = self.rng.random::<f64>() * total;
        for (index, &weight) in weights.iter().enumerate() {
            if remaining < weight {
                return index;
            }
            remaining -= weight;
        }
        // Rounding can leave a sliver past the last bucket.
        weights.iter().rposition(|&w| w > 0.0).unwrap_or(0)
    }
}

/// Always takes the heaviest candidate; ties go to the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySelector {
    weights: SelectionWeights,
}

impl GreedySelector {
    pub fn new(weights: SelectionWeights) -> Self {
        Self { weights }
    }
}

impl<C> ComponentSelector<C> for GreedySelector {
    fn select(&mut self, candidates: &[Candidate<C>]) -> usize {
        let mut best = 0;
        let mut best_weight = f64::NEG_INFINITY;
        for (index, candidate) in candidates.iter().enumerate() {
            let weight = self.weights.weight(candidate);
            if weight > best_weight {
                best = index;
                best_weight = weight;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(scores: &[(f64, f64)]) -> Vec<Candidate<usize>> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &(heuristic, pheromone))| Candidate::new(i, heuristic, pheromone))
            .collect()
    }

    #[test]
    fn cheaper_heuristic_weighs_more() {
        let weights = SelectionWeights::new(1.0, 1.0);
        let cheap = Candidate::new((), 1.0, 1.0);
        let dear = Candidate::new((), 10.0, 1.0);
        assert!(weights.weight(&cheap) > weights.weight(&dear));
    }

    #[test]
    fn stronger_trail_weighs_more() {
        let weights = SelectionWeights::default();
        let strong = Candidate::new((), 1.0, 5.0);
        let weak = Candidate::new((), 1.0, 0.5);
        assert!(weights.weight(&strong) > weights.weight(&weak));
    }

    #[test]
    fn degenerate_scores_weigh_nothing() {
        let weights = SelectionWeights::default();
        assert_eq!(weights.weight(&Candidate::new((), 1.0, -1.0)), 0.0);
        assert_eq!(weights.weight(&Candidate::new((), f64::NAN, 1.0)), 0.0);
    }

    #[test]
    fn greedy_picks_lowest_cost() {
        let mut selector = GreedySelector::default();
        let set = candidates(&[(50.0, 1.0), (0.5, 1.0), (3.0, 1.0)]);
        assert_eq!(selector.select(&set), 1);
    }

    #[test]
    fn greedy_breaks_ties_toward_first() {
        let mut selector = GreedySelector::default();
        let set = candidates(&[(2.0, 1.0), (2.0, 1.0)]);
        assert_eq!(selector.select(&set), 0);
    }

    #[test]
    fn roulette_never_picks_zero_weight() {
        let mut selector = RouletteSelector::seeded(SelectionWeights::default(), 7);
        let set = candidates(&[(1.0, 0.0), (1.0, 1.0), (1.0, 0.0)]);
        for _ in 0..200 {
            assert_eq!(selector.select(&set), 1);
        }
    }

    #[test]
    fn roulette_favours_heavier_candidates() {
        let mut selector = RouletteSelector::seeded(SelectionWeights::new(1.0, 1.0), 42);
        let set = candidates(&[(1.0, 1.0), (9.0, 1.0)]);
        let mut counts = [0usize; 2];
        for _ in 0..2000 {
            counts[selector.select(&set)] += 1;
        }
        // Expected split is 90/10.
        assert!(counts[0] > 1500, "counts = {:?}", counts);
        assert!(counts[1] > 50, "counts = {:?}", counts);
    }

    #[test]
    fn roulette_is_reproducible_with_seed() {
        let set = candidates(&[(1.0, 1.0), (2.0, 1.0), (3.0, 1.0)]);
        let mut a = RouletteSelector::seeded(SelectionWeights::default(), 3);
        let mut b = RouletteSelector::seeded(SelectionWeights::default(), 3);
        let picks_a: Vec<_> = (0..50).map(|_| a.select(&set)).collect();
        let picks_b: Vec<_> = (0..50).map(|_| b.select(&set)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn roulette_falls_back_to_uniform_when_all_weights_vanish() {
        let mut selector = RouletteSelector::seeded(SelectionWeights::default(), 11);
        let set = candidates(&[(1.0, 0.0), (1.0, 0.0)]);
        let mut seen = [false; 2];
        for _ in 0..100 {
            seen[selector.select(&set)] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn weights_deserialize_with_defaults() {
        let weights: SelectionWeights = serde_json::from_str(r#"{ "alpha": 0.5 }"#).unwrap();
        assert_eq!(weights, SelectionWeights::new(0.5, 2.0));
    }
}
