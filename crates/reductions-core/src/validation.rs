//! Input validation for mitigation entry points.
//!
//! Checks and reshapes features, labels, sensitive features and control
//! features before they reach a moment. Multi-column sensitive or control
//! features are compressed into one column with [`merge_columns`].

use tracing::debug;

use crate::data::{Frame, Series, Value};
use crate::error::{ReductionsError, Result};

pub const MESSAGE_Y_NONE: &str = "Must supply y";
pub const MESSAGE_SENSITIVE_FEATURES_NONE: &str = "Must specify sensitive_features (for now)";
pub const MESSAGE_X_Y_ROWS: &str = "X and y must have same number of rows";
pub const MESSAGE_X_SENSITIVE_ROWS: &str =
    "X and the sensitive features must have same number of rows";
pub const MESSAGE_X_CONTROL_ROWS: &str =
    "X and the control features must have same number of rows";
pub const MESSAGE_X_EMPTY: &str = "X must contain at least one sample";
pub const MESSAGE_LABELS_NOT_0_1: &str = "Supplied y labels are not 0 or 1";

const MERGE_COLUMN_SEPARATOR: &str = ",";

/// Options controlling [`RawInput::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "snake_case"))]
pub struct ValidationOptions {
    /// Labels must be supplied.
    pub expect_y: bool,
    /// Sensitive features must be supplied.
    pub expect_sensitive_features: bool,
    /// Labels may only take the values 0 and 1.
    pub enforce_binary_labels: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            expect_y: true,
            expect_sensitive_features: true,
            enforce_binary_labels: false,
        }
    }
}

impl ValidationOptions {
    pub fn with_expect_y(mut self, expect_y: bool) -> Self {
        self.expect_y = expect_y;
        self
    }

    pub fn with_expect_sensitive_features(mut self, expect: bool) -> Self {
        self.expect_sensitive_features = expect;
        self
    }

    pub fn with_enforce_binary_labels(mut self, enforce: bool) -> Self {
        self.enforce_binary_labels = enforce;
        self
    }
}

/// Unvalidated mitigation input.
///
/// Validated labels and single-column features come back unnamed; callers
/// name grouping features through [`GroupFeature`](crate::GroupFeature).
///
/// # Example
///
/// ```
/// use reductions_core::data::{Frame, Series, Value};
/// use reductions_core::validation::{RawInput, ValidationOptions};
///
/// let x = Frame::from_rows(vec![vec![Value::from(1.0)], vec![Value::from(2.0)]]).unwrap();
/// let sensitive = Frame::from_columns(vec![
///     ("sex", vec![Value::from("F"), Value::from("M")]),
///     ("age", vec![Value::from(30), Value::from(40)]),
/// ])
/// .unwrap();
///
/// let input = RawInput::new(x)
///     .with_labels(Series::from(vec![0, 1]))
///     .with_sensitive_features(sensitive)
///     .validate(&ValidationOptions::default())
///     .unwrap();
///
/// let merged = input.sensitive_features.unwrap();
/// assert_eq!(merged.values(), &[Value::from("F,30"), Value::from("M,40")]);
/// ```
#[derive(Debug, Clone)]
pub struct RawInput {
    features: Frame,
    labels: Option<Series>,
    sensitive_features: Option<Frame>,
    control_features: Option<Frame>,
}

/// Output of [`RawInput::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub features: Frame,
    /// Numeric labels; empty when labels were optional and absent.
    pub labels: Series,
    pub sensitive_features: Option<Series>,
    pub control_features: Option<Series>,
}

impl RawInput {
    pub fn new(features: Frame) -> Self {
        Self {
            features,
            labels: None,
            sensitive_features: None,
            control_features: None,
        }
    }

    pub fn with_labels(mut self, labels: Series) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Sets the sensitive features; a frame with several columns is merged.
    pub fn with_sensitive_features(mut self, sensitive_features: impl Into<Frame>) -> Self {
        self.sensitive_features = Some(sensitive_features.into());
        self
    }

    /// Sets the control features; a frame with several columns is merged.
    pub fn with_control_features(mut self, control_features: impl Into<Frame>) -> Self {
        self.control_features = Some(control_features.into());
        self
    }

    /// Validates the input and returns it in canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`ReductionsError::Validation`] when a required input is
    /// missing, labels are not numeric (or not binary when required), or
    /// row counts disagree.
    pub fn validate(self, options: &ValidationOptions) -> Result<ValidatedInput> {
        let n_rows = self.features.n_rows();
        if n_rows == 0 {
            return Err(ReductionsError::Validation(MESSAGE_X_EMPTY.to_string()));
        }

        let labels = match self.labels {
            Some(y) => validate_labels(y, n_rows, options.enforce_binary_labels)?,
            None if options.expect_y => {
                return Err(ReductionsError::Validation(MESSAGE_Y_NONE.to_string()));
            }
            None => Series::new(Vec::new()),
        };

        let sensitive_features = match self.sensitive_features {
            Some(frame) => Some(squeeze(frame, n_rows, MESSAGE_X_SENSITIVE_ROWS)?),
            None if options.expect_sensitive_features => {
                return Err(ReductionsError::Validation(
                    MESSAGE_SENSITIVE_FEATURES_NONE.to_string(),
                ));
            }
            None => None,
        };

        let control_features = self
            .control_features
            .map(|frame| squeeze(frame, n_rows, MESSAGE_X_CONTROL_ROWS))
            .transpose()?;

        debug!(
            event = "validate_input",
            samples = n_rows,
            features = self.features.n_cols(),
            sensitive = sensitive_features.is_some(),
            control = control_features.is_some(),
        );

        Ok(ValidatedInput {
            features: self.features,
            labels,
            sensitive_features,
            control_features,
        })
    }
}

fn validate_labels(y: Series, n_rows: usize, enforce_binary: bool) -> Result<Series> {
    if y.len() != n_rows {
        return Err(ReductionsError::Validation(MESSAGE_X_Y_ROWS.to_string()));
    }
    let numeric = y.to_f64()?;
    if enforce_binary && numeric.iter().any(|&v| v != 0.0 && v != 1.0) {
        return Err(ReductionsError::Validation(
            MESSAGE_LABELS_NOT_0_1.to_string(),
        ));
    }
    Ok(numeric.into())
}

fn squeeze(frame: Frame, n_rows: usize, message: &str) -> Result<Series> {
    if frame.n_rows() != n_rows {
        return Err(ReductionsError::Validation(message.to_string()));
    }
    match frame.n_cols() {
        0 => Err(ReductionsError::Validation(format!(
            "{} (no columns supplied)",
            message
        ))),
        1 => Ok(frame
            .columns()
            .map(|(_, values)| Series::new(values.to_vec()))
            .next()
            .unwrap_or_default()),
        _ => Ok(merge_columns(&frame)),
    }
}

fn escape(cell: &str) -> String {
    cell.replace('\\', "\\\\").replace(
        MERGE_COLUMN_SEPARATOR,
        &format!("\\{}", MERGE_COLUMN_SEPARATOR),
    )
}

/// Merges the columns of a frame into one string column.
///
/// Each row becomes its stringified cells joined by `,`; backslashes and
/// commas inside a cell are escaped with a backslash, so distinct rows
/// always produce distinct strings. Columns `[A, A, B, B]` and `[4, 5, 4, 5]`
/// merge to `["A,4", "A,5", "B,4", "B,5"]`.
pub fn merge_columns(frame: &Frame) -> Series {
    (0..frame.n_rows())
        .map(|i| {
            let cells: Vec<String> = frame
                .columns()
                .map(|(_, column)| escape(&column[i].to_string()))
                .collect();
            Value::Str(cells.join(MERGE_COLUMN_SEPARATOR))
        })
        .collect()
}
