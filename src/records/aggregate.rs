//! Scalar aggregates feeding the projection and metrics engines

use super::{Asset, Liability, NetWorthSnapshot};
use crate::currency;

/// Total asset value in the target currency
pub fn total_assets(assets: &[Asset], target_currency: &str, rate: Option<f64>) -> f64 {
    currency::total_assets_in(assets, target_currency, rate)
}

/// Total outstanding liability balance. Balances are kept in the local
/// currency, so no conversion applies.
pub fn total_liabilities(liabilities: &[Liability]) -> f64 {
    liabilities.iter().map(|l| l.balance).sum()
}

/// Net worth in the target currency
pub fn net_worth(
    assets: &[Asset],
    liabilities: &[Liability],
    target_currency: &str,
    rate: Option<f64>,
) -> f64 {
    total_assets(assets, target_currency, rate) - total_liabilities(liabilities)
}

/// Monthly amount available for investing: asset contributions minus
/// liability minimum payments, both normalized to monthly, floored at zero.
pub fn net_monthly_contribution(assets: &[Asset], liabilities: &[Liability]) -> f64 {
    let contributions: f64 = assets.iter().map(Asset::monthly_contribution).sum();
    let payments: f64 = liabilities.iter().map(Liability::monthly_payment).sum();
    (contributions - payments).max(0.0)
}

/// Net worth of the earliest-dated snapshot, used as the baseline for
/// relative progress. Zero when no history exists.
pub fn baseline_net_worth(history: &[NetWorthSnapshot]) -> f64 {
    history
        .iter()
        .min_by_key(|snapshot| snapshot.date)
        .map(|snapshot| snapshot.net_worth)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{AssetKind, Frequency, LiabilityKind};
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    fn asset(value: f64, currency: &str, contributions: f64, frequency: Frequency) -> Asset {
        Asset {
            id: "a".into(),
            name: "Asset".into(),
            kind: AssetKind::Other,
            value,
            contributions,
            contribution_frequency: frequency,
            currency: currency.into(),
        }
    }

    fn liability(balance: f64, payment: f64, frequency: Frequency) -> Liability {
        Liability {
            id: "l".into(),
            name: "Liability".into(),
            kind: LiabilityKind::Other,
            balance,
            interest_rate: 5.0,
            minimum_payment: payment,
            payment_frequency: frequency,
        }
    }

    fn snapshot(year: i32, net_worth: f64) -> NetWorthSnapshot {
        NetWorthSnapshot {
            id: format!("s{year}"),
            date: Utc.with_ymd_and_hms(year, 1, 15, 0, 0, 0).unwrap(),
            assets: net_worth.max(0.0),
            liabilities: (-net_worth).max(0.0),
            net_worth,
        }
    }

    #[test]
    fn test_net_worth_mixed_currencies() {
        let assets = vec![
            asset(10_000.0, "USD", 0.0, Frequency::Monthly),
            asset(50_000.0, "NZD", 0.0, Frequency::Monthly),
        ];
        let liabilities = vec![liability(20_000.0, 0.0, Frequency::Monthly)];

        let nw = net_worth(&assets, &liabilities, "NZD", Some(1.65));
        assert_relative_eq!(nw, 10_000.0 * 1.65 + 50_000.0 - 20_000.0);
    }

    #[test]
    fn test_net_monthly_contribution_nets_liability_payments() {
        let assets = vec![
            asset(0.0, "NZD", 250.0, Frequency::Weekly),
            asset(0.0, "NZD", 200.0, Frequency::Monthly),
        ];
        let liabilities = vec![liability(100_000.0, 400.0, Frequency::Fortnightly)];

        let expected = 250.0 * 52.0 / 12.0 + 200.0 - 400.0 * 26.0 / 12.0;
        assert_relative_eq!(net_monthly_contribution(&assets, &liabilities), expected);
    }

    #[test]
    fn test_net_monthly_contribution_floors_at_zero() {
        let assets = vec![asset(0.0, "NZD", 100.0, Frequency::Monthly)];
        let liabilities = vec![liability(100_000.0, 2800.0, Frequency::Monthly)];

        assert_eq!(net_monthly_contribution(&assets, &liabilities), 0.0);
    }

    #[test]
    fn test_baseline_uses_earliest_snapshot() {
        // Deliberately out of order
        let history = vec![snapshot(2024, 80_000.0), snapshot(2022, -15_000.0), snapshot(2023, 40_000.0)];
        assert_eq!(baseline_net_worth(&history), -15_000.0);
    }

    #[test]
    fn test_baseline_empty_history() {
        assert_eq!(baseline_net_worth(&[]), 0.0);
    }
}
