//! Core Moment trait definition

use super::state::{LoadedData, MomentState, MomentStateMut};
use super::vector::ConstraintVector;
use crate::data::{Frame, Series};
use crate::error::{ReductionsError, Result};

/// Numeric family of a moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MomentType {
    /// Expressible as a weighted classification error.
    Classification,
    /// Expressible as a weighted real-valued loss.
    Loss,
}

/// Anything that produces one prediction per sample of a feature frame.
///
/// Implemented for every `Fn(&Frame) -> Vec<f64>` closure.
///
/// # Example
///
/// ```
/// use reductions_core::data::{Frame, Value};
/// use reductions_core::Predictor;
///
/// let always_one = |x: &Frame| vec![1.0; x.n_rows()];
/// let x = Frame::from_rows(vec![vec![Value::from(0)], vec![Value::from(1)]]).unwrap();
/// assert_eq!(always_one.predict(&x).unwrap(), vec![1.0, 1.0]);
/// ```
pub trait Predictor: Send + Sync {
    /// Predicts every row of `features`.
    fn predict(&self, features: &Frame) -> Result<Vec<f64>>;
}

impl<F> Predictor for F
where
    F: Fn(&Frame) -> Vec<f64> + Send + Sync,
{
    fn predict(&self, features: &Frame) -> Result<Vec<f64>> {
        Ok(self(features))
    }
}

/// A fairness constraint or objective, as consumed by a reductions solver.
///
/// A moment is constructed empty, loaded exactly once with
/// [`load_data`](Moment::load_data), and then queried any number of times.
/// The outer solver alternates between:
/// - [`signed_weights`](Moment::signed_weights) to build a weighted problem
///   for a fairness-unaware learner
/// - [`gamma`](Moment::gamma) to measure how far a predictor violates the
///   constraint
/// - [`bound`](Moment::bound) for the allowed slack per component
/// - [`project_lambda`](Moment::project_lambda) to keep dual variables
///   feasible
///
/// Implementors embed a [`MomentState`] and supply the four numerical
/// operations; the lifecycle methods are provided. Numerical operations must
/// guard against the unloaded state, which the accessors do by returning
/// [`ReductionsError::NotLoaded`](crate::ReductionsError::NotLoaded).
pub trait Moment: Send + Sync {
    /// Returns the embedded lifecycle state.
    fn state(&self) -> &MomentState;

    /// Returns forward-only mutable access to the embedded lifecycle state.
    ///
    /// Implementors wrap their own field with [`MomentStateMut::new`].
    fn state_mut(&mut self) -> MomentStateMut<'_>;

    /// Returns the numeric family of this moment.
    fn moment_type(&self) -> MomentType;

    /// Measures the constraint violation of `predictor`, one value per
    /// component.
    ///
    /// Deterministic for a fixed predictor and fixed loaded data.
    fn gamma(&self, predictor: &dyn Predictor) -> Result<ConstraintVector>;

    /// Returns the allowed slack per component, indexed like `gamma`.
    ///
    /// Depends only on the configuration and loaded data.
    fn bound(&self) -> Result<ConstraintVector>;

    /// Projects dual variables onto this moment's feasible dual set.
    ///
    /// Projecting an already-feasible vector returns it unchanged.
    fn project_lambda(&self, lambda: &ConstraintVector) -> Result<ConstraintVector>;

    /// Returns one signed weight per sample for the given dual variables.
    fn signed_weights(&self, lambda: &ConstraintVector) -> Result<Vec<f64>>;

    /// Loads the data this moment is evaluated on.
    ///
    /// Builds the tags table from `labels` and, if given,
    /// `sensitive_features`. Alignment is validated before any state changes,
    /// so a failed call leaves the moment as it was.
    ///
    /// # Errors
    ///
    /// - [`AlreadyLoaded`](crate::ReductionsError::AlreadyLoaded) on a second
    ///   call
    /// - [`InconsistentLength`](crate::ReductionsError::InconsistentLength)
    ///   if sample counts differ
    fn load_data(
        &mut self,
        features: Frame,
        labels: Series,
        sensitive_features: Option<Series>,
    ) -> Result<()> {
        if self.state().is_loaded() {
            return Err(ReductionsError::AlreadyLoaded);
        }
        let data = LoadedData::new(features, labels, sensitive_features)?;
        self.state_mut().install(data)
    }

    /// Returns true once data has been loaded.
    fn is_loaded(&self) -> bool {
        self.state().is_loaded()
    }

    /// Returns the loaded data.
    fn data(&self) -> Result<&LoadedData> {
        self.state().loaded()
    }

    /// Returns the loaded feature frame.
    fn features(&self) -> Result<&Frame> {
        Ok(self.data()?.features())
    }

    /// Returns the loaded label vector.
    fn labels(&self) -> Result<&Series> {
        Ok(self.data()?.labels())
    }

    /// Returns the loaded tags table.
    fn tags(&self) -> Result<&Frame> {
        Ok(self.data()?.tags())
    }

    /// Returns the number of loaded samples.
    fn total_samples(&self) -> Result<usize> {
        Ok(self.data()?.total_samples())
    }
}
