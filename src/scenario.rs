//! Scenario runner for batch projection sweeps
//!
//! Holds a base configuration once, then runs many projections against it
//! with varying return assumptions.

use crate::projection::{Projection, ProjectionConfig, ProjectionEngine};
use rayon::prelude::*;

/// Pre-configured runner for sensitivity sweeps
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::with_config(config);
/// let results = runner.run_return_sweep(100_000.0, 2_000.0, &[0.05, 0.07, 0.09], 30);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Base projection configuration shared by every run
    base_config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Create a runner with the default configuration
    pub fn new() -> Self {
        Self {
            base_config: ProjectionConfig::default(),
        }
    }

    /// Create a runner with a specific base configuration
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            base_config: config,
        }
    }

    /// Run a single projection against the base configuration
    pub fn run(
        &self,
        starting_value: f64,
        monthly_contribution: f64,
        expected_return: f64,
        current_age: u8,
    ) -> Projection {
        let engine = ProjectionEngine::new(self.base_config.clone());
        engine.project(starting_value, monthly_contribution, expected_return, current_age)
    }

    /// Project a grid of expected-return rates in parallel, preserving the
    /// input order
    pub fn run_return_sweep(
        &self,
        starting_value: f64,
        monthly_contribution: f64,
        rates: &[f64],
        current_age: u8,
    ) -> Vec<Projection> {
        log::debug!("running return sweep over {} rates", rates.len());

        rates
            .par_iter()
            .map(|&rate| {
                let engine = ProjectionEngine::new(self.base_config.clone());
                engine.project(starting_value, monthly_contribution, rate, current_age)
            })
            .collect()
    }

    /// Get reference to the base configuration
    pub fn config(&self) -> &ProjectionConfig {
        &self.base_config
    }

    /// Get mutable reference to the base configuration for customization
    pub fn config_mut(&mut self) -> &mut ProjectionConfig {
        &mut self.base_config
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
