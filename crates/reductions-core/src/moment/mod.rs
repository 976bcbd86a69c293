//! Moments: constraints and objectives for the reductions approach
//!
//! A moment describes a fairness constraint (or the optimization objective)
//! as four numerical operations that an outer solver queries repeatedly:
//! `gamma`, `bound`, `project_lambda` and `signed_weights`. Data is loaded
//! once through `load_data`, which also builds the per-sample tags table.

mod kinds;
mod state;
mod traits;
mod vector;

#[cfg(test)]
mod tests;

pub use kinds::{ClassificationMoment, LossMoment};
pub use state::{LoadedData, MomentState, MomentStateMut};
pub use traits::{Moment, MomentType, Predictor};
pub use vector::ConstraintVector;

/// Column names used in tags tables and constraint labels.
pub mod columns {
    pub const GROUP_ID: &str = "group_id";
    pub const EVENT: &str = "event";
    pub const LABEL: &str = "label";
    pub const LOSS: &str = "loss";
    pub const PREDICTION: &str = "pred";
    pub const ALL: &str = "all";
    pub const SIGN: &str = "sign";
}
