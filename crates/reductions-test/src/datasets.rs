//! Dataset fixtures.

use reductions_core::data::{Frame, Series, Value};

/// Eight loan applications with income, debt ratio, approval and sex.
#[derive(Clone, Debug)]
pub struct LoanDataset {
    /// Columns `income` and `debt_ratio`.
    pub features: Frame,
    /// Approval labels, 0 or 1.
    pub labels: Series,
    /// Applicant sex, named `sex`.
    pub sensitive_features: Series,
}

impl LoanDataset {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

const INCOME: [f64; 8] = [52.0, 31.0, 78.0, 45.0, 23.0, 67.0, 39.0, 88.0];
const DEBT_RATIO: [f64; 8] = [0.31, 0.52, 0.12, 0.40, 0.61, 0.22, 0.45, 0.09];
const APPROVED: [i64; 8] = [1, 0, 1, 0, 0, 1, 1, 1];
const SEX: [&str; 8] = ["F", "M", "M", "F", "F", "M", "F", "M"];

/// Creates the loan dataset.
pub fn loan_dataset() -> LoanDataset {
    let features = Frame::from_columns(vec![
        ("income", INCOME.iter().map(|&v| Value::from(v)).collect()),
        (
            "debt_ratio",
            DEBT_RATIO.iter().map(|&v| Value::from(v)).collect(),
        ),
    ])
    .expect("fixture columns have equal length");

    LoanDataset {
        features,
        labels: Series::from(APPROVED.to_vec()),
        sensitive_features: Series::from(SEX.to_vec()).named("sex"),
    }
}
