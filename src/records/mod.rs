//! Domain records read from the tracker's persisted store

pub mod aggregate;
mod data;
mod filters;
pub mod store;

pub use data::{
    Asset, AssetKind, Frequency, Liability, LiabilityKind, Milestone, NetWorthSnapshot, Settings,
};
pub use filters::RecordFilter;
pub use store::{JsonStore, RecordStore, StoreError, LOCAL_CURRENCY};
