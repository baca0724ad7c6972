//! Record data structures matching the tracker's persisted document format

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How often a recurring contribution or payment is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Fortnightly,
    Monthly,
    Quarterly,
    Annually,
}

impl Frequency {
    /// Parse a stored frequency name. Unrecognized names fall back to
    /// monthly, which leaves the amount unscaled.
    pub fn from_name(name: &str) -> Self {
        match name {
            "weekly" => Frequency::Weekly,
            "fortnightly" => Frequency::Fortnightly,
            "monthly" => Frequency::Monthly,
            "quarterly" => Frequency::Quarterly,
            "annually" => Frequency::Annually,
            _ => Frequency::Monthly,
        }
    }

    /// Normalize a periodic amount to its monthly equivalent
    pub fn monthly_amount(&self, amount: f64) -> f64 {
        match self {
            Frequency::Weekly => amount * 52.0 / 12.0,
            Frequency::Fortnightly => amount * 26.0 / 12.0,
            Frequency::Monthly => amount,
            Frequency::Quarterly => amount / 3.0,
            Frequency::Annually => amount / 12.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Weekly => "Weekly",
            Frequency::Fortnightly => "Fortnightly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Annually => "Annually",
        }
    }
}

/// Category of an asset record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetKind {
    IndividualStock,
    #[serde(rename = "kiwisaver")]
    KiwiSaver,
    SavingsAccount,
    TermDeposit,
    Bitcoin,
    Ethereum,
    Other,
}

impl AssetKind {
    /// Parse a stored kind name; unknown kinds map to `Other`
    pub fn from_name(name: &str) -> Self {
        match name {
            "individual-stock" => AssetKind::IndividualStock,
            "kiwisaver" => AssetKind::KiwiSaver,
            "savings-account" => AssetKind::SavingsAccount,
            "term-deposit" => AssetKind::TermDeposit,
            "bitcoin" => AssetKind::Bitcoin,
            "ethereum" => AssetKind::Ethereum,
            _ => AssetKind::Other,
        }
    }
}

/// Category of a liability record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiabilityKind {
    Mortgage,
    CarLoan,
    StudentLoan,
    CreditCard,
    PersonalLoan,
    HirePurchase,
    Overdraft,
    Other,
}

impl LiabilityKind {
    /// Parse a stored kind name; unknown kinds map to `Other`
    pub fn from_name(name: &str) -> Self {
        match name {
            "mortgage" => LiabilityKind::Mortgage,
            "car-loan" => LiabilityKind::CarLoan,
            "student-loan" => LiabilityKind::StudentLoan,
            "credit-card" => LiabilityKind::CreditCard,
            "personal-loan" => LiabilityKind::PersonalLoan,
            "hire-purchase" => LiabilityKind::HirePurchase,
            "overdraft" => LiabilityKind::Overdraft,
            _ => LiabilityKind::Other,
        }
    }
}

/// A single asset record
///
/// The currency is always explicit here; the store adapter fills it in from
/// the optional stored tag before a record reaches the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub kind: AssetKind,

    /// Current value in `currency` units, >= 0
    pub value: f64,

    /// Recurring contribution amount per `contribution_frequency` period
    pub contributions: f64,
    pub contribution_frequency: Frequency,

    /// Denomination of `value` (e.g. "NZD", "USD")
    pub currency: String,
}

impl Asset {
    /// Recurring contribution normalized to a monthly amount
    pub fn monthly_contribution(&self) -> f64 {
        self.contribution_frequency.monthly_amount(self.contributions)
    }
}

/// A single liability record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    pub id: String,
    pub name: String,
    pub kind: LiabilityKind,

    /// Outstanding balance, >= 0
    pub balance: f64,

    /// Annual interest rate as a plain percentage (6.5 means 6.5%)
    pub interest_rate: f64,

    /// Minimum payment per `payment_frequency` period
    pub minimum_payment: f64,
    pub payment_frequency: Frequency,
}

impl Liability {
    /// Minimum payment normalized to a monthly amount
    pub fn monthly_payment(&self) -> f64 {
        self.payment_frequency.monthly_amount(self.minimum_payment)
    }

    /// Annual interest rate as a fraction (6.5% -> 0.065)
    pub fn annual_rate(&self) -> f64 {
        self.interest_rate / 100.0
    }
}

/// Retirement assumptions and display preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Absolute FIRE target in display-currency units
    pub fire_target: f64,

    /// Annual retirement withdrawal rate, fractional (0.04 = 4%)
    pub withdrawal_rate: f64,

    /// Expected annual investment return, fractional
    pub expected_return: f64,

    /// Expected annual inflation, fractional
    pub inflation_rate: f64,

    pub retirement_age: u8,
    pub current_age: u8,

    /// Display currency code
    pub currency: String,

    /// Cached USD->NZD exchange rate, if one has been fetched
    #[serde(default)]
    pub usd_to_nzd_rate: Option<f64>,

    /// When the cached rate was fetched
    #[serde(default)]
    pub rate_updated_at: Option<DateTime<Utc>>,
}

impl Settings {
    /// Years until the planned retirement age. Negative when the settings
    /// claim retirement is already past; not clamped here.
    pub fn years_to_retirement(&self) -> f64 {
        self.retirement_age as f64 - self.current_age as f64
    }
}

/// A dated net-worth snapshot; the earliest snapshot anchors relative
/// progress calculations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSnapshot {
    pub id: String,
    pub date: DateTime<Utc>,
    pub assets: f64,
    pub liabilities: f64,
    pub net_worth: f64,
}

/// A user-defined savings milestone. A zero target amount is the break-even
/// milestone for households starting in net debt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub target_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub achieved: bool,
    #[serde(default)]
    pub achieved_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_amount_identity() {
        assert_eq!(Frequency::Monthly.monthly_amount(1234.56), 1234.56);
    }

    #[test]
    fn test_monthly_amount_conversions() {
        assert_relative_eq!(
            Frequency::Weekly.monthly_amount(1000.0),
            4333.33,
            epsilon = 0.01
        );
        assert_relative_eq!(Frequency::Fortnightly.monthly_amount(600.0), 1300.0);
        assert_eq!(Frequency::Quarterly.monthly_amount(3000.0), 1000.0);
        assert_eq!(Frequency::Annually.monthly_amount(12000.0), 1000.0);
    }

    #[test]
    fn test_frequency_from_name_unrecognized() {
        assert_eq!(Frequency::from_name("biweekly"), Frequency::Monthly);
        assert_eq!(Frequency::from_name(""), Frequency::Monthly);
        assert_eq!(Frequency::from_name("quarterly"), Frequency::Quarterly);
    }

    #[test]
    fn test_kind_from_name_unknown() {
        assert_eq!(AssetKind::from_name("rental-property"), AssetKind::Other);
        assert_eq!(LiabilityKind::from_name("margin-loan"), LiabilityKind::Other);
    }

    #[test]
    fn test_liability_monthly_payment() {
        let liability = Liability {
            id: "l1".into(),
            name: "Mortgage".into(),
            kind: LiabilityKind::Mortgage,
            balance: 450_000.0,
            interest_rate: 6.5,
            minimum_payment: 1400.0,
            payment_frequency: Frequency::Fortnightly,
        };

        assert_relative_eq!(liability.monthly_payment(), 1400.0 * 26.0 / 12.0);
        assert_relative_eq!(liability.annual_rate(), 0.065);
    }
}
