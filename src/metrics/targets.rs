//! Static FIRE target amounts derived from settings

use crate::records::Settings;
use serde::{Deserialize, Serialize};

/// Lean FIRE as a fraction of the full target
pub const LEAN_FRACTION: f64 = 0.6;

/// Fat FIRE as a multiple of the full target
pub const FAT_MULTIPLE: f64 = 1.5;

/// The four target amounts shown on the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FireTargets {
    /// The configured FIRE number
    pub fire: f64,
    /// 60% of the FIRE number
    pub lean: f64,
    /// 150% of the FIRE number
    pub fat: f64,
    /// Present value at the current age that grows to the FIRE number by
    /// retirement at the real (inflation-adjusted) rate of return
    pub coast: f64,
}

impl FireTargets {
    pub fn from_settings(settings: &Settings) -> Self {
        let fire = settings.fire_target;
        let real_return = settings.expected_return - settings.inflation_rate;
        let coast = fire / (1.0 + real_return).powf(settings.years_to_retirement());

        Self {
            fire,
            lean: fire * LEAN_FRACTION,
            fat: fire * FAT_MULTIPLE,
            coast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

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

    #[test]
    fn test_lean_and_fat_scaling() {
        let targets = FireTargets::from_settings(&settings());
        assert_eq!(targets.fire, 1_000_000.0);
        assert_eq!(targets.lean, 600_000.0);
        assert_eq!(targets.fat, 1_500_000.0);
    }

    #[test]
    fn test_coast_discounts_at_real_return() {
        let targets = FireTargets::from_settings(&settings());
        // 35 years at 4% real return: 1,000,000 / 1.04^35
        assert_relative_eq!(targets.coast, 1_000_000.0 / 1.04_f64.powi(35), epsilon = 1e-6);
        assert_relative_eq!(targets.coast, 253_415.0, epsilon = 1.0);
    }

    #[test]
    fn test_coast_equals_fire_at_retirement_age() {
        let mut s = settings();
        s.current_age = 65;
        let targets = FireTargets::from_settings(&s);
        assert_relative_eq!(targets.coast, targets.fire);
    }
}
