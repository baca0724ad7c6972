//! Record filtering for chart-scoped views
//!
//! A filter that only names the other side of the ledger hides this side
//! entirely: selecting just liabilities yields no assets, and vice versa.

use super::{Asset, AssetKind, Liability, LiabilityKind};

/// Filter criteria over asset and liability records
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub asset_kinds: Vec<AssetKind>,
    pub liability_kinds: Vec<LiabilityKind>,
    pub selected_assets: Vec<String>,
    pub selected_liabilities: Vec<String>,
}

impl RecordFilter {
    fn has_asset_filters(&self) -> bool {
        !self.asset_kinds.is_empty() || !self.selected_assets.is_empty()
    }

    fn has_liability_filters(&self) -> bool {
        !self.liability_kinds.is_empty() || !self.selected_liabilities.is_empty()
    }

    /// Whether any criterion is set
    pub fn is_active(&self) -> bool {
        self.has_asset_filters() || self.has_liability_filters()
    }

    /// Assets matching the filter
    pub fn filter_assets<'a>(&self, assets: &'a [Asset]) -> Vec<&'a Asset> {
        if self.has_liability_filters() && !self.has_asset_filters() {
            return Vec::new();
        }

        assets
            .iter()
            .filter(|asset| self.asset_kinds.is_empty() || self.asset_kinds.contains(&asset.kind))
            .filter(|asset| {
                self.selected_assets.is_empty() || self.selected_assets.contains(&asset.id)
            })
            .collect()
    }

    /// Liabilities matching the filter
    pub fn filter_liabilities<'a>(&self, liabilities: &'a [Liability]) -> Vec<&'a Liability> {
        if self.has_asset_filters() && !self.has_liability_filters() {
            return Vec::new();
        }

        liabilities
            .iter()
            .filter(|liability| {
                self.liability_kinds.is_empty() || self.liability_kinds.contains(&liability.kind)
            })
            .filter(|liability| {
                self.selected_liabilities.is_empty()
                    || self.selected_liabilities.contains(&liability.id)
            })
            .collect()
    }

    /// Human-readable description of the active criteria
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if !self.asset_kinds.is_empty() {
            parts.push(plural(self.asset_kinds.len(), "asset type", "asset types"));
        }
        if !self.liability_kinds.is_empty() {
            parts.push(plural(
                self.liability_kinds.len(),
                "liability type",
                "liability types",
            ));
        }
        if !self.selected_assets.is_empty() {
            parts.push(plural(self.selected_assets.len(), "asset", "assets"));
        }
        if !self.selected_liabilities.is_empty() {
            parts.push(plural(
                self.selected_liabilities.len(),
                "liability",
                "liabilities",
            ));
        }

        parts.join(", ")
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Frequency;

    fn asset(id: &str, kind: AssetKind) -> Asset {
        Asset {
            id: id.into(),
            name: id.into(),
            kind,
            value: 1000.0,
            contributions: 0.0,
            contribution_frequency: Frequency::Monthly,
            currency: "NZD".into(),
        }
    }

    fn liability(id: &str, kind: LiabilityKind) -> Liability {
        Liability {
            id: id.into(),
            name: id.into(),
            kind,
            balance: 1000.0,
            interest_rate: 5.0,
            minimum_payment: 50.0,
            payment_frequency: Frequency::Monthly,
        }
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let assets = vec![asset("a1", AssetKind::Bitcoin), asset("a2", AssetKind::KiwiSaver)];
        let filter = RecordFilter::default();

        assert_eq!(filter.filter_assets(&assets).len(), 2);
        assert!(!filter.is_active());
    }

    #[test]
    fn test_kind_and_id_filters_intersect() {
        let assets = vec![
            asset("a1", AssetKind::IndividualStock),
            asset("a2", AssetKind::IndividualStock),
            asset("a3", AssetKind::SavingsAccount),
        ];
        let filter = RecordFilter {
            asset_kinds: vec![AssetKind::IndividualStock],
            selected_assets: vec!["a2".into()],
            ..Default::default()
        };

        let matched = filter.filter_assets(&assets);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "a2");
    }

    #[test]
    fn test_liability_only_filter_hides_assets() {
        let assets = vec![asset("a1", AssetKind::Bitcoin)];
        let liabilities = vec![liability("l1", LiabilityKind::Mortgage)];
        let filter = RecordFilter {
            liability_kinds: vec![LiabilityKind::Mortgage],
            ..Default::default()
        };

        assert!(filter.filter_assets(&assets).is_empty());
        assert_eq!(filter.filter_liabilities(&liabilities).len(), 1);
    }

    #[test]
    fn test_asset_only_filter_hides_liabilities() {
        let liabilities = vec![liability("l1", LiabilityKind::CarLoan)];
        let filter = RecordFilter {
            asset_kinds: vec![AssetKind::Bitcoin],
            ..Default::default()
        };

        assert!(filter.filter_liabilities(&liabilities).is_empty());
    }

    #[test]
    fn test_summary() {
        let filter = RecordFilter {
            asset_kinds: vec![AssetKind::Bitcoin, AssetKind::Ethereum],
            selected_liabilities: vec!["l1".into()],
            ..Default::default()
        };

        assert_eq!(filter.summary(), "2 asset types, 1 liability");
    }
}
