//! Summary FIRE metrics composed for the dashboard

mod progress;
mod solver;
mod targets;

pub use progress::progress_percent;
pub use solver::{contribution_needed, years_to_target};
pub use targets::{FireTargets, FAT_MULTIPLE, LEAN_FRACTION};

use crate::records::{aggregate, NetWorthSnapshot, Settings};
use serde::{Deserialize, Serialize};

/// The summary result consumed by the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FireMetrics {
    pub fire_number: f64,
    pub current_net_worth: f64,

    /// Years to reach the FIRE number or retirement, whichever is sooner;
    /// infinite when saving alone can never get there
    pub years_to_fire: f64,

    pub monthly_contribution_needed: f64,

    /// Progress in [0, 100], relative to the earliest history snapshot
    pub progress_percentage: f64,

    pub coast_fire_number: f64,
    pub lean_fire_number: f64,
    pub fat_fire_number: f64,
}

impl FireMetrics {
    /// Compute the full metrics set from the aggregated scalars and settings.
    ///
    /// The contribution-needed figure is solved over the years-to-FIRE
    /// horizon computed first, and progress is measured from the earliest
    /// history snapshot (zero baseline when no history exists).
    pub fn calculate(
        current_net_worth: f64,
        monthly_contribution: f64,
        settings: &Settings,
        history: &[NetWorthSnapshot],
    ) -> Self {
        let targets = FireTargets::from_settings(settings);

        let years_to_fire = years_to_target(
            current_net_worth,
            monthly_contribution,
            targets.fire,
            settings.expected_return,
            settings.current_age,
            settings.retirement_age,
        );

        let monthly_contribution_needed = contribution_needed(
            current_net_worth,
            targets.fire,
            years_to_fire,
            settings.expected_return,
        );

        let baseline = aggregate::baseline_net_worth(history);
        let progress_percentage = progress_percent(current_net_worth, targets.fire, baseline);

        Self {
            fire_number: targets.fire,
            current_net_worth,
            years_to_fire,
            monthly_contribution_needed,
            progress_percentage,
            coast_fire_number: targets.coast,
            lean_fire_number: targets.lean,
            fat_fire_number: targets.fat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    fn settings() -> Settings {
        Settings {
            fire_target: 1_000_000.0,
            withdrawal_rate: 0.04,
            expected_return: 0.07,
            inflation_rate: 0.03,
            retirement_age: 65,
            current_age: 30,
            currency: "NZD".into(),
            usd_to_nzd_rate: None,
            rate_updated_at: None,
        }
    }

    fn snapshot(year: i32, net_worth: f64) -> NetWorthSnapshot {
        NetWorthSnapshot {
            id: format!("s{year}"),
            date: Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
            assets: net_worth.max(0.0),
            liabilities: (-net_worth).max(0.0),
            net_worth,
        }
    }

    #[test]
    fn test_composes_all_targets() {
        let metrics = FireMetrics::calculate(100_000.0, 2_000.0, &settings(), &[]);

        assert_eq!(metrics.fire_number, 1_000_000.0);
        assert_eq!(metrics.lean_fire_number, 600_000.0);
        assert_eq!(metrics.fat_fire_number, 1_500_000.0);
        assert_relative_eq!(
            metrics.coast_fire_number,
            1_000_000.0 / 1.04_f64.powi(35),
            epsilon = 1e-6
        );
        assert_relative_eq!(metrics.progress_percentage, 10.0, epsilon = 1e-9);
        assert!(metrics.years_to_fire > 0.0 && metrics.years_to_fire <= 35.0);
        assert!(metrics.monthly_contribution_needed > 0.0);
    }

    #[test]
    fn test_no_contribution_means_infinite_years() {
        let metrics = FireMetrics::calculate(100_000.0, 0.0, &settings(), &[]);

        assert!(metrics.years_to_fire.is_infinite());
        // No finite horizon to solve over
        assert_eq!(metrics.monthly_contribution_needed, 0.0);
    }

    #[test]
    fn test_target_met() {
        let metrics = FireMetrics::calculate(1_200_000.0, 2_000.0, &settings(), &[]);

        assert_eq!(metrics.years_to_fire, 0.0);
        assert_eq!(metrics.monthly_contribution_needed, 0.0);
        assert_eq!(metrics.progress_percentage, 100.0);
    }

    #[test]
    fn test_progress_uses_earliest_snapshot_baseline() {
        // Unsorted on purpose; the 2021 snapshot anchors the baseline
        let history = vec![snapshot(2024, 90_000.0), snapshot(2021, 50_000.0)];
        let metrics = FireMetrics::calculate(250_000.0, 2_000.0, &settings(), &history);

        assert_relative_eq!(metrics.progress_percentage, 200.0 / 950.0 * 100.0);
    }
}
