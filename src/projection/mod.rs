//! Net-worth projection across accumulation, debt-paydown, and
//! retirement-withdrawal phases

mod engine;
mod series;
mod state;

pub use engine::{project, ProjectionConfig, ProjectionEngine};
pub use series::{Projection, ProjectionPoint, ProjectionSummary};
pub use state::{Phase, ProjectionState};
