//! Unspecialized moments of each numeric family.
//!
//! These types fix only the moment's family. They load data like any other
//! moment but answer every numerical operation with
//! [`ReductionsError::NotImplemented`], which separates "this constraint has
//! not been specialized" from a data error.

use super::state::{MomentState, MomentStateMut};
use super::traits::{Moment, MomentType, Predictor};
use super::vector::ConstraintVector;
use crate::error::{ReductionsError, Result};

fn not_implemented<T>(operation: &'static str) -> Result<T> {
    Err(ReductionsError::NotImplemented { operation })
}

/// Moment expressible as a weighted classification error.
#[derive(Debug, Clone, Default)]
pub struct ClassificationMoment {
    state: MomentState,
}

impl ClassificationMoment {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Moment for ClassificationMoment {
    fn state(&self) -> &MomentState {
        &self.state
    }

    fn state_mut(&mut self) -> MomentStateMut<'_> {
        MomentStateMut::new(&mut self.state)
    }

    fn moment_type(&self) -> MomentType {
        MomentType::Classification
    }

    fn gamma(&self, _predictor: &dyn Predictor) -> Result<ConstraintVector> {
        not_implemented("gamma")
    }

    fn bound(&self) -> Result<ConstraintVector> {
        not_implemented("bound")
    }

    fn project_lambda(&self, _lambda: &ConstraintVector) -> Result<ConstraintVector> {
        not_implemented("project_lambda")
    }

    fn signed_weights(&self, _lambda: &ConstraintVector) -> Result<Vec<f64>> {
        not_implemented("signed_weights")
    }
}

/// Moment expressible as a weighted loss.
///
/// Holds the loss the moment reports error against. The loss is opaque here;
/// it is stored as given and handed back by reference.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use reductions_core::{LossMoment, Moment, MomentType};
///
/// let loss = Arc::new("squared");
/// let moment = LossMoment::new(Arc::clone(&loss));
/// assert_eq!(moment.moment_type(), MomentType::Loss);
/// assert!(Arc::ptr_eq(moment.reduction_loss(), &loss));
/// ```
#[derive(Debug, Clone)]
pub struct LossMoment<L> {
    state: MomentState,
    reduction_loss: L,
}

impl<L> LossMoment<L> {
    pub fn new(reduction_loss: L) -> Self {
        Self {
            state: MomentState::new(),
            reduction_loss,
        }
    }

    /// Returns the loss supplied at construction.
    pub fn reduction_loss(&self) -> &L {
        &self.reduction_loss
    }
}

impl<L: Send + Sync> Moment for LossMoment<L> {
    fn state(&self) -> &MomentState {
        &self.state
    }

    fn state_mut(&mut self) -> MomentStateMut<'_> {
        MomentStateMut::new(&mut self.state)
    }

    fn moment_type(&self) -> MomentType {
        MomentType::Loss
    }

    fn gamma(&self, _predictor: &dyn Predictor) -> Result<ConstraintVector> {
        not_implemented("gamma")
    }

    fn bound(&self) -> Result<ConstraintVector> {
        not_implemented("bound")
    }

    fn project_lambda(&self, _lambda: &ConstraintVector) -> Result<ConstraintVector> {
        not_implemented("project_lambda")
    }

    fn signed_weights(&self, _lambda: &ConstraintVector) -> Result<Vec<f64>> {
        not_implemented("signed_weights")
    }
}
