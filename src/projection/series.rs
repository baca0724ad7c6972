//! Output series for net-worth projections

use serde::{Deserialize, Serialize};

/// One projected year, emitted before that year's step is applied
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// 0-based offset from the projection start
    pub year: u32,

    /// Simulated age at this point
    pub age: u8,

    /// Projected net worth, rounded to whole currency units
    pub value: f64,

    /// Cumulative nominal contributions injected so far, rounded
    pub contributions: f64,

    /// value - contributions - starting value, rounded
    pub growth: f64,
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    /// Net worth at year 0
    pub starting_value: f64,

    /// Annual points, one per year including year 0
    pub points: Vec<ProjectionPoint>,
}

impl Projection {
    pub fn new(starting_value: f64) -> Self {
        Self {
            starting_value,
            points: Vec::new(),
        }
    }

    /// Add a point
    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    /// Projected net worth at the end of the horizon
    pub fn final_value(&self) -> f64 {
        self.points
            .last()
            .map(|p| p.value)
            .unwrap_or(self.starting_value)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.points.last();

        ProjectionSummary {
            total_years: self.points.len().saturating_sub(1) as u32,
            final_value: last.map(|p| p.value).unwrap_or(self.starting_value),
            total_contributions: last.map(|p| p.contributions).unwrap_or(0.0),
            total_growth: last.map(|p| p.growth).unwrap_or(0.0),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_years: u32,
    pub final_value: f64,
    pub total_contributions: f64,
    pub total_growth: f64,
}
