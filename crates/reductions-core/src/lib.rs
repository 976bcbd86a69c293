//! Reductions Core - Moments and group features for fairness reductions
//!
//! This crate provides the fundamental abstractions of the reductions
//! approach to fairness-constrained learning:
//! - The `Moment` contract an outer solver queries for constraint violation,
//!   slack, dual projection and signed sample weights
//! - `GroupFeature`, a validated encoding of one grouping attribute
//! - A small tabular substrate (`Value`, `Series`, `Frame`) every input is
//!   normalized into
//! - Input validation for mitigation entry points

pub mod data;
pub mod error;
pub mod group_feature;
pub mod moment;
pub mod validation;

pub use data::{Frame, Series, Value};
pub use error::{ReductionsError, Result};
pub use group_feature::GroupFeature;
pub use moment::{
    columns, ClassificationMoment, ConstraintVector, LoadedData, LossMoment, Moment,
    MomentState, MomentStateMut, MomentType, Predictor,
};
pub use validation::{merge_columns, RawInput, ValidatedInput, ValidationOptions};
