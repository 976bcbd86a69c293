//! Reductions - moments and group features for fairness-constrained learning
//!
//! A solver for the reductions approach repeatedly queries a [`Moment`] for
//! signed sample weights, constraint violation, slack and projected dual
//! variables. This crate gathers the pieces needed to set one up.
//!
//! # Example
//!
//! ```rust
//! use reductions::prelude::*;
//!
//! let mut moment = ClassificationMoment::new();
//! let x = Frame::from_rows(vec![vec![Value::from(1.0)], vec![Value::from(2.0)]]).unwrap();
//! let sensitive = GroupFeature::new("sf", vec!["a", "b"], 0, None).unwrap();
//!
//! moment
//!     .load_data(x, Series::from(vec![0, 1]), Some(sensitive.to_series()))
//!     .unwrap();
//! assert_eq!(moment.total_samples().unwrap(), 2);
//! assert_eq!(moment.moment_type(), MomentType::Classification);
//! ```

pub use reductions_config::{ConfigError, GroupingConfig, ReductionsConfig};
pub use reductions_core::{columns, data, validation};
pub use reductions_core::{
    ClassificationMoment, ConstraintVector, GroupFeature, LoadedData, LossMoment, Moment,
    MomentState, MomentStateMut, MomentType, Predictor, ReductionsError, Result,
};

pub mod logging;

/// Common imports.
pub mod prelude {
    pub use reductions_config::{GroupingConfig, ReductionsConfig};
    pub use reductions_core::data::{Frame, Series, Value};
    pub use reductions_core::validation::{RawInput, ValidatedInput, ValidationOptions};
    pub use reductions_core::{
        ClassificationMoment, ConstraintVector, GroupFeature, LossMoment, Moment, MomentState,
        MomentType, Predictor, ReductionsError,
    };
}
