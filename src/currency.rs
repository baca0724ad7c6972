//! Currency conversion between the two supported denominations (NZD and USD)
//!
//! The engine never fetches rates itself. The external rate provider hands
//! over an [`ExchangeRate`], or the caller falls back to the documented
//! default. Pairs other than USD/NZD pass through unconverted; the
//! two-currency model is the full scope, not a missing feature.

use crate::records::Asset;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback USD->NZD conversion rate when no fetched rate is available
pub const DEFAULT_USD_TO_NZD: f64 = 1.65;

/// A fetched exchange rate, as supplied by the external rate provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub rate: f64,
    pub fetched_at: DateTime<Utc>,
}

impl ExchangeRate {
    /// The rate to use when the provider is unavailable
    pub fn fallback() -> Self {
        Self {
            rate: DEFAULT_USD_TO_NZD,
            fetched_at: Utc::now(),
        }
    }
}

/// Resolve a stored rate to a usable one. Missing or non-positive stored
/// rates fall back to the default.
pub fn effective_rate(stored: Option<f64>) -> f64 {
    match stored {
        Some(rate) if rate > 0.0 => rate,
        _ => DEFAULT_USD_TO_NZD,
    }
}

/// Convert an amount between currency codes.
///
/// USD->NZD multiplies by the rate and NZD->USD divides by it, so the two
/// directions are exact reciprocals. Unsupported pairs return the amount
/// unchanged.
pub fn convert_amount(amount: f64, from: &str, to: &str, rate: Option<f64>) -> f64 {
    if from == to {
        return amount;
    }

    let rate = effective_rate(rate);
    match (from, to) {
        ("USD", "NZD") => amount * rate,
        ("NZD", "USD") => amount / rate,
        _ => amount,
    }
}

/// An asset's value expressed in the target currency
pub fn asset_value_in(asset: &Asset, target_currency: &str, rate: Option<f64>) -> f64 {
    convert_amount(asset.value, &asset.currency, target_currency, rate)
}

/// Total value of a collection of assets in the target currency.
///
/// Each asset is converted individually and the converted values are summed;
/// mixed-denomination collections are the normal case.
pub fn total_assets_in(assets: &[Asset], target_currency: &str, rate: Option<f64>) -> f64 {
    assets
        .iter()
        .map(|asset| asset_value_in(asset, target_currency, rate))
        .sum()
}
