//! Load records from the tracker's persisted JSON document
//!
//! The persisted document is lenient: enum names may be unknown, the
//! denomination tag and payment frequency are optional. All defaulting
//! happens here so that records reaching the engine are fully explicit.

use super::{Asset, AssetKind, Frequency, Liability, LiabilityKind, Milestone, NetWorthSnapshot, Settings};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Local base currency assumed for assets without an explicit denomination tag
pub const LOCAL_CURRENCY: &str = "NZD";

/// Errors from loading a store document
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse store document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Synchronous read access to the persisted records.
///
/// The engine depends only on these reads; it never reaches into ambient
/// state or mutates the store.
pub trait RecordStore {
    fn assets(&self) -> &[Asset];
    fn liabilities(&self) -> &[Liability];
    fn settings(&self) -> &Settings;
    fn history(&self) -> &[NetWorthSnapshot];
    fn milestones(&self) -> &[Milestone];
}

/// Raw asset row as persisted by the tracker
#[derive(Debug, Deserialize)]
struct RawAsset {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    value: f64,
    #[serde(default)]
    contributions: f64,
    #[serde(rename = "contributionFrequency", default)]
    contribution_frequency: Option<String>,
    #[serde(rename = "stockCurrency", default)]
    stock_currency: Option<String>,
}

impl RawAsset {
    fn into_asset(self) -> Asset {
        Asset {
            id: self.id,
            name: self.name,
            kind: AssetKind::from_name(&self.kind),
            value: self.value,
            contributions: self.contributions,
            contribution_frequency: self
                .contribution_frequency
                .as_deref()
                .map(Frequency::from_name)
                .unwrap_or(Frequency::Monthly),
            currency: self.stock_currency.unwrap_or_else(|| LOCAL_CURRENCY.to_string()),
        }
    }
}

/// Raw liability row as persisted by the tracker
#[derive(Debug, Deserialize)]
struct RawLiability {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    balance: f64,
    #[serde(rename = "interestRate", default)]
    interest_rate: f64,
    #[serde(rename = "minimumPayment", default)]
    minimum_payment: f64,
    #[serde(rename = "paymentFrequency", default)]
    payment_frequency: Option<String>,
}

impl RawLiability {
    fn into_liability(self) -> Liability {
        Liability {
            id: self.id,
            name: self.name,
            kind: LiabilityKind::from_name(&self.kind),
            balance: self.balance,
            interest_rate: self.interest_rate,
            minimum_payment: self.minimum_payment,
            payment_frequency: self
                .payment_frequency
                .as_deref()
                .map(Frequency::from_name)
                .unwrap_or(Frequency::Monthly),
        }
    }
}

/// Raw persisted document
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    assets: Vec<RawAsset>,
    #[serde(default)]
    liabilities: Vec<RawLiability>,
    settings: Settings,
    #[serde(default)]
    history: Vec<NetWorthSnapshot>,
    #[serde(default)]
    milestones: Vec<Milestone>,
}

/// A store document loaded fully into memory
#[derive(Debug, Clone)]
pub struct JsonStore {
    assets: Vec<Asset>,
    liabilities: Vec<Liability>,
    settings: Settings,
    history: Vec<NetWorthSnapshot>,
    milestones: Vec<Milestone>,
}

impl JsonStore {
    /// Load from a JSON document file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load from any reader (e.g. a string buffer or network stream)
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        let raw: RawDocument = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    /// Load from a JSON string
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let raw: RawDocument = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawDocument) -> Self {
        let store = Self {
            assets: raw.assets.into_iter().map(RawAsset::into_asset).collect(),
            liabilities: raw
                .liabilities
                .into_iter()
                .map(RawLiability::into_liability)
                .collect(),
            settings: raw.settings,
            history: raw.history,
            milestones: raw.milestones,
        };

        log::debug!(
            "loaded store: {} assets, {} liabilities, {} snapshots, {} milestones",
            store.assets.len(),
            store.liabilities.len(),
            store.history.len(),
            store.milestones.len(),
        );

        store
    }
}

impl RecordStore for JsonStore {
    fn assets(&self) -> &[Asset] {
        &self.assets
    }

    fn liabilities(&self) -> &[Liability] {
        &self.liabilities
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn history(&self) -> &[NetWorthSnapshot] {
        &self.history
    }

    fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }
}
