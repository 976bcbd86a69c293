//! Specialized moment fixtures.
//!
//! Both fixtures have a single component labelled `all` and are enough to
//! drive every operation of the moment contract from a test.

use std::sync::Arc;

use reductions_core::columns::ALL;
use reductions_core::data::{Frame, Series};
use reductions_core::{
    ConstraintVector, LoadedData, Moment, MomentState, MomentStateMut, MomentType, Predictor,
    ReductionsError, Result,
};

fn load_with_index(
    mut state: MomentStateMut<'_>,
    features: Frame,
    labels: Series,
    sensitive_features: Option<Series>,
) -> Result<()> {
    if state.is_loaded() {
        return Err(ReductionsError::AlreadyLoaded);
    }
    let data = LoadedData::new(features, labels, sensitive_features)?;
    state.install(data)?;
    state.set_constraint_index(vec![ALL.to_string()]);
    Ok(())
}

fn index(state: &MomentState) -> Result<Vec<String>> {
    state.loaded()?;
    Ok(state
        .constraint_index()
        .map(<[String]>::to_vec)
        .unwrap_or_else(|| vec![ALL.to_string()]))
}

fn project_non_negative(
    state: &MomentState,
    lambda: &ConstraintVector,
) -> Result<ConstraintVector> {
    let expected = index(state)?;
    if lambda.labels() != expected.as_slice() {
        return Err(ReductionsError::Validation(format!(
            "lambda components {:?} do not match {:?}",
            lambda.labels(),
            expected
        )));
    }
    Ok(lambda.map(|v| v.max(0.0)))
}

/// Averages a per-sample total, rejecting an empty sample set.
fn sample_mean(total: f64, samples: usize) -> Result<f64> {
    if samples == 0 {
        return Err(ReductionsError::Validation(
            "cannot average over zero loaded samples".to_string(),
        ));
    }
    Ok(total / samples as f64)
}

fn all_weight(lambda: &ConstraintVector) -> Result<f64> {
    lambda
        .get(ALL)
        .ok_or_else(|| ReductionsError::Validation(format!("lambda has no '{}' component", ALL)))
}

/// Overall misclassification rate, bounded by `max_error`.
#[derive(Debug, Clone)]
pub struct ErrorRateFixture {
    state: MomentState,
    max_error: f64,
}

impl ErrorRateFixture {
    pub fn new(max_error: f64) -> Self {
        Self {
            state: MomentState::new(),
            max_error,
        }
    }
}

impl Moment for ErrorRateFixture {
    fn state(&self) -> &MomentState {
        &self.state
    }

    fn state_mut(&mut self) -> MomentStateMut<'_> {
        MomentStateMut::new(&mut self.state)
    }

    fn moment_type(&self) -> MomentType {
        MomentType::Classification
    }

    fn load_data(
        &mut self,
        features: Frame,
        labels: Series,
        sensitive_features: Option<Series>,
    ) -> Result<()> {
        load_with_index(self.state_mut(), features, labels, sensitive_features)
    }

    fn gamma(&self, predictor: &dyn Predictor) -> Result<ConstraintVector> {
        let labels = self.labels()?.to_f64()?;
        let preds = predictor.predict(self.features()?)?;
        if preds.len() != labels.len() {
            return Err(ReductionsError::InconsistentLength {
                context: "predictions".to_string(),
                expected: labels.len(),
                found: preds.len(),
            });
        }
        let errors: f64 = labels.iter().zip(&preds).map(|(y, p)| (y - p).abs()).sum();
        ConstraintVector::new(index(&self.state)?, vec![sample_mean(errors, labels.len())?])
    }

    fn bound(&self) -> Result<ConstraintVector> {
        ConstraintVector::filled(index(&self.state)?, self.max_error)
    }

    fn project_lambda(&self, lambda: &ConstraintVector) -> Result<ConstraintVector> {
        project_non_negative(&self.state, lambda)
    }

    fn signed_weights(&self, lambda: &ConstraintVector) -> Result<Vec<f64>> {
        let weight = all_weight(lambda)?;
        let labels = self.labels()?.to_f64()?;
        let n = labels.len() as f64;
        Ok(labels.iter().map(|y| weight * (2.0 * y - 1.0) / n).collect())
    }
}

/// Squared error between a label and a prediction.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredLoss;

impl SquaredLoss {
    pub fn eval(&self, y: f64, prediction: f64) -> f64 {
        (y - prediction).powi(2)
    }
}

/// Mean squared loss, bounded by `max_loss`.
#[derive(Debug, Clone)]
pub struct MeanLossFixture {
    state: MomentState,
    reduction_loss: Arc<SquaredLoss>,
    max_loss: f64,
}

impl MeanLossFixture {
    pub fn new(reduction_loss: Arc<SquaredLoss>, max_loss: f64) -> Self {
        Self {
            state: MomentState::new(),
            reduction_loss,
            max_loss,
        }
    }

    pub fn reduction_loss(&self) -> &Arc<SquaredLoss> {
        &self.reduction_loss
    }
}

impl Moment for MeanLossFixture {
    fn state(&self) -> &MomentState {
        &self.state
    }

    fn state_mut(&mut self) -> MomentStateMut<'_> {
        MomentStateMut::new(&mut self.state)
    }

    fn moment_type(&self) -> MomentType {
        MomentType::Loss
    }

    fn load_data(
        &mut self,
        features: Frame,
        labels: Series,
        sensitive_features: Option<Series>,
    ) -> Result<()> {
        load_with_index(self.state_mut(), features, labels, sensitive_features)
    }

    fn gamma(&self, predictor: &dyn Predictor) -> Result<ConstraintVector> {
        let labels = self.labels()?.to_f64()?;
        let preds = predictor.predict(self.features()?)?;
        if preds.len() != labels.len() {
            return Err(ReductionsError::InconsistentLength {
                context: "predictions".to_string(),
                expected: labels.len(),
                found: preds.len(),
            });
        }
        let total: f64 = labels
            .iter()
            .zip(&preds)
            .map(|(&y, &p)| self.reduction_loss.eval(y, p))
            .sum();
        ConstraintVector::new(index(&self.state)?, vec![sample_mean(total, labels.len())?])
    }

    fn bound(&self) -> Result<ConstraintVector> {
        ConstraintVector::filled(index(&self.state)?, self.max_loss)
    }

    fn project_lambda(&self, lambda: &ConstraintVector) -> Result<ConstraintVector> {
        project_non_negative(&self.state, lambda)
    }

    fn signed_weights(&self, lambda: &ConstraintVector) -> Result<Vec<f64>> {
        let weight = all_weight(lambda)?;
        let n = self.total_samples()?;
        Ok(vec![weight / n as f64; n])
    }
}
