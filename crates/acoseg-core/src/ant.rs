//! Ant — one stochastic construction pass.
//!
//! An ant builds a complete solution one component at a time. At each
//! step it proposes a neighbourhood of candidate components, scores each
//! with a heuristic cost and a pheromone trail, and hands the scored set to
//! a [`ComponentSelector`]. The colony drives the loop: it calls
//! [`Ant::select_next`] until [`Ant::is_solution_ready`], then reads
//! [`Ant::solution_cost`] to rank ants and size the pheromone update.

use crate::types::{AgentId, Candidate};

/// The stochastic-choice capability an ant delegates to.
///
/// Given a non-empty set of scored candidates, return the index of the one
/// to take. Candidates carry a heuristic *cost* (lower is better) and a
/// pheromone *desirability* (higher is better); implementations must keep
/// that sign convention.
pub trait ComponentSelector<C> {
    fn select(&mut self, candidates: &[Candidate<C>]) -> usize;
}

/// The construction contract every ant implements.
pub trait Ant {
    /// One piece of the solution.
    type Component;

    /// What the ant reads (and, for trail updates, writes).
    type Environment;

    /// The ant's unique identity.
    fn id(&self) -> AgentId;

    /// Number of components placed so far.
    fn current_index(&self) -> usize;

    /// Candidate components for the next step. Empty once complete.
    fn neighbourhood(&self, environment: &Self::Environment) -> Vec<Self::Component>;

    /// Heuristic cost of taking `component`, or `None` if it is not scoreable.
    fn heuristic_value(
        &self,
        component: &Self::Component,
        environment: &Self::Environment,
    ) -> Option<f64>;

    /// Pheromone desirability of `component`, or `None` if it has no trail.
    fn pheromone_trail_value(
        &self,
        component: &Self::Component,
        environment: &Self::Environment,
    ) -> Option<f64>;

    /// Overwrite the trail for `component`. Components without a trail are ignored.
    fn set_pheromone_trail_value(
        &self,
        component: &Self::Component,
        environment: &mut Self::Environment,
        value: f64,
    );

    /// Record `component` as the next piece of the solution.
    fn visit(&mut self, component: Self::Component);

    /// Take one construction step.
    fn select_next(
        &mut self,
        environment: &Self::Environment,
        selector: &mut dyn ComponentSelector<Self::Component>,
    );

    /// Whether every component has been placed.
    fn is_solution_ready(&self, environment: &Self::Environment) -> bool;

    /// Cost of the current solution. Lower is better.
    fn solution_cost(&self, environment: &Self::Environment) -> f64;

    /// Forget the current solution so the ant can be reused.
    fn clear(&mut self);

    /// Score the neighbourhood. Components without both scores are dropped.
    fn candidates(&self, environment: &Self::Environment) -> Vec<Candidate<Self::Component>> {
        self.neighbourhood(environment)
            .into_iter()
            .filter_map(|component| {
                let heuristic = self.heuristic_value(&component, environment)?;
                let pheromone = self.pheromone_trail_value(&component, environment)?;
                Some(Candidate::new(component, heuristic, pheromone))
            })
            .collect()
    }

    /// The default step: score the neighbourhood, let `selector` choose, visit.
    ///
    /// # Panics
    ///
    /// Panics if there is nothing to choose from or the selector returns an
    /// index outside the candidate set.
    fn visit_selected(
        &mut self,
        environment: &Self::Environment,
        selector: &mut dyn ComponentSelector<Self::Component>,
    ) {
        let mut candidates = self.candidates(environment);
        assert!(
            !candidates.is_empty(),
            "ant {} has no candidates at step {}",
            self.id(),
            self.current_index()
        );
        let chosen = selector.select(&candidates);
        assert!(
            chosen < candidates.len(),
            "selector chose candidate {} of {}",
            chosen,
            candidates.len()
        );
        let component = candidates.swap_remove(chosen).component;
        self.visit(component);
    }

    /// Step until the solution is complete.
    fn build_solution(
        &mut self,
        environment: &Self::Environment,
        selector: &mut dyn ComponentSelector<Self::Component>,
    ) {
        while !self.is_solution_ready(environment) {
            self.select_next(environment, selector);
        }
    }
}
