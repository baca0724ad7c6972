//! Year-by-year state tracking for net-worth projections

use super::series::ProjectionPoint;

/// Phase of the simulation for one annual step.
///
/// Classified fresh each year from the simulated age and the sign of the
/// running balance, so every sign/threshold transition is a phase change
/// rather than a buried conditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pre-retirement, non-negative worth: contribute, then grow
    Accumulating,

    /// Pre-retirement, net debt: payments fight accruing interest
    DebtPaydown,

    /// Retired, non-negative worth: withdraw, then grow the remainder
    RetiredDrawdown,

    /// Retired while still in debt: interest compounds, payments stop
    RetiredInDebt,
}

impl Phase {
    /// Classify the phase for the coming year
    pub fn classify(age: u8, retirement_age: Option<u8>, value: f64) -> Self {
        let retired = retirement_age.is_some_and(|target| age >= target);

        match (retired, value < 0.0) {
            (false, false) => Phase::Accumulating,
            (false, true) => Phase::DebtPaydown,
            (true, false) => Phase::RetiredDrawdown,
            (true, true) => Phase::RetiredInDebt,
        }
    }
}

/// Running state of a projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// 0-based year offset
    pub year: u32,

    /// Simulated age
    pub age: u8,

    /// Running net worth (signed)
    pub value: f64,

    /// Cumulative nominal contributions injected so far
    pub total_contributions: f64,
}

impl ProjectionState {
    /// Initialize state at the projection start
    pub fn new(starting_value: f64, current_age: u8) -> Self {
        Self {
            year: 0,
            age: current_age,
            value: starting_value,
            total_contributions: 0.0,
        }
    }

    /// Advance to the next year
    pub fn advance_year(&mut self) {
        self.year += 1;
        self.age = self.age.saturating_add(1);
    }

    /// Snapshot the pre-step state as an output point
    pub fn to_point(&self, starting_value: f64) -> ProjectionPoint {
        ProjectionPoint {
            year: self.year,
            age: self.age,
            value: self.value.round(),
            contributions: self.total_contributions.round(),
            growth: (self.value - self.total_contributions - starting_value).round(),
        }
    }
}
