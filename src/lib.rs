//! FIRE Engine - projection and metrics engine for personal net-worth tracking
//!
//! This library provides:
//! - Multi-year net-worth projections across accumulation, debt-paydown, and
//!   retirement-withdrawal phases
//! - Closed-form solvers for years-to-target and required monthly contribution
//! - FIRE target derivation (Lean/Coast/Fat) and progress tracking
//! - Currency and contribution-frequency normalization
//! - Batch scenario sweeps over return assumptions

pub mod currency;
pub mod metrics;
pub mod projection;
pub mod records;
pub mod scenario;

// Re-export commonly used types
pub use metrics::{FireMetrics, FireTargets};
pub use projection::{Projection, ProjectionConfig, ProjectionEngine, ProjectionPoint};
pub use records::{Asset, Frequency, JsonStore, Liability, RecordStore, Settings};
pub use scenario::ScenarioRunner;
