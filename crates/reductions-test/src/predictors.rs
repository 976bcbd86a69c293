//! Predictor fixtures.

use reductions_core::data::Frame;
use reductions_core::{Predictor, ReductionsError, Result};

/// Predicts the same value for every sample.
#[derive(Clone, Copy, Debug)]
pub struct ConstantPredictor(pub f64);

impl Predictor for ConstantPredictor {
    fn predict(&self, features: &Frame) -> Result<Vec<f64>> {
        Ok(vec![self.0; features.n_rows()])
    }
}

/// Predicts 1 when a numeric column reaches a threshold, otherwise 0.
#[derive(Clone, Debug)]
pub struct ThresholdPredictor {
    pub column: String,
    pub threshold: f64,
}

impl ThresholdPredictor {
    pub fn new(column: impl Into<String>, threshold: f64) -> Self {
        Self {
            column: column.into(),
            threshold,
        }
    }
}

impl Predictor for ThresholdPredictor {
    fn predict(&self, features: &Frame) -> Result<Vec<f64>> {
        let column = features.column(&self.column).ok_or_else(|| {
            ReductionsError::Validation(format!("missing column '{}'", self.column))
        })?;
        column
            .iter()
            .map(|v| {
                v.as_f64()
                    .map(|x| if x >= self.threshold { 1.0 } else { 0.0 })
                    .ok_or_else(|| {
                        ReductionsError::Validation(format!(
                            "column '{}' is not numeric",
                            self.column
                        ))
                    })
            })
            .collect()
    }
}
