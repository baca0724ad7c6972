//! Core projection engine for annual net-worth trajectories

use super::series::{Projection, ProjectionPoint};
use super::state::{Phase, ProjectionState};

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Projection horizon in years
    pub years: u32,

    /// Age at which the withdrawal phase begins; None never retires within
    /// the horizon
    pub retirement_age: Option<u8>,

    /// Annual withdrawal rate applied in retirement; None withdraws nothing
    pub withdrawal_rate: Option<f64>,

    /// Debt-only scenario: once the debt is extinguished the excess is
    /// invested immediately
    pub debt_only: bool,

    /// Return applied to invested savings; falls back to the headline
    /// expected return when unset
    pub investment_return: Option<f64>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            years: 40,
            retirement_age: None,
            withdrawal_rate: None,
            debt_only: false,
            investment_return: None,
        }
    }
}

/// Main projection engine
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Simulate net worth in annual steps, emitting `years + 1` points.
    ///
    /// Each point captures the pre-step state, so point 0 is the starting
    /// position and the final point carries no further step. Interest
    /// compounds once per year on the running balance even though
    /// contributions are quoted monthly; consumers depend on the annual-step
    /// granularity, so it must not be refined to monthly compounding.
    pub fn project(
        &self,
        starting_value: f64,
        monthly_contribution: f64,
        expected_return: f64,
        current_age: u8,
    ) -> Projection {
        let savings_return = self.config.investment_return.unwrap_or(expected_return);
        let mut projection = Projection::new(starting_value);
        let mut state = ProjectionState::new(starting_value, current_age);

        for year in 0..=self.config.years {
            projection.add_point(state.to_point(starting_value));

            if year == self.config.years {
                break;
            }

            self.step(&mut state, monthly_contribution, expected_return, savings_return);
            state.advance_year();
        }

        projection
    }

    /// Apply one annual step to the running state
    fn step(
        &self,
        state: &mut ProjectionState,
        monthly_contribution: f64,
        expected_return: f64,
        savings_return: f64,
    ) {
        match Phase::classify(state.age, self.config.retirement_age, state.value) {
            Phase::RetiredDrawdown => {
                let withdrawal = self
                    .config
                    .withdrawal_rate
                    .map_or(0.0, |rate| state.value * rate);
                state.value = (state.value - withdrawal) * (1.0 + savings_return);
            }
            Phase::RetiredInDebt => {
                // Payments have stopped; interest keeps compounding the
                // balance further negative
                state.value *= 1.0 + expected_return;
            }
            Phase::Accumulating => {
                let yearly_contribution = monthly_contribution * 12.0;
                state.total_contributions += yearly_contribution;
                state.value = (state.value + yearly_contribution) * (1.0 + savings_return);
            }
            Phase::DebtPaydown => {
                let yearly_contribution = monthly_contribution * 12.0;
                state.total_contributions += yearly_contribution;

                // Negative balance times a positive rate deepens the debt
                let debt_interest = state.value * expected_return;
                let new_value = state.value + yearly_contribution + debt_interest;

                if new_value >= 0.0 && self.config.debt_only {
                    // Crossover in a debt-only scenario: the excess over zero
                    // becomes savings and earns the investment return within
                    // this same step. A mixed scenario leaves the crossover
                    // excess ungrown until next year; the asymmetry is
                    // intentional and consumers distinguish the two.
                    state.value = new_value * (1.0 + savings_return);
                } else {
                    state.value = new_value;
                }
            }
        }
    }
}

/// Convenience wrapper: project with an ad-hoc config
pub fn project(
    starting_value: f64,
    monthly_contribution: f64,
    expected_return: f64,
    current_age: u8,
    config: ProjectionConfig,
) -> Vec<ProjectionPoint> {
    ProjectionEngine::new(config)
        .project(starting_value, monthly_contribution, expected_return, current_age)
        .points
}
