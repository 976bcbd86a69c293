//! Labelled constraint vectors.

use std::collections::HashSet;

use crate::error::{ReductionsError, Result};

/// A vector with one `f64` per constraint component.
///
/// Used for `gamma` and `bound` results and for dual variables. Each component
/// carries a unique label so that vectors produced by different operations of
/// the same moment can be matched up.
///
/// # Example
///
/// ```
/// use reductions_core::ConstraintVector;
///
/// let lambda = ConstraintVector::from_pairs(vec![("+,a", 0.5), ("-,a", 0.0)]).unwrap();
/// assert_eq!(lambda.len(), 2);
/// assert_eq!(lambda.get("+,a"), Some(0.5));
/// assert_eq!(lambda.get("+,b"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "VectorRepr"))]
pub struct ConstraintVector {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl ConstraintVector {
    /// Creates a vector from parallel label and value lists.
    ///
    /// # Errors
    ///
    /// Fails if the lists differ in length or a label repeats.
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Result<Self> {
        if labels.len() != values.len() {
            return Err(ReductionsError::length(
                "constraint vector values",
                labels.len(),
                values.len(),
            ));
        }
        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(ReductionsError::DuplicateLabel(label.clone()));
            }
        }
        Ok(Self { labels, values })
    }

    /// Creates a vector from `(label, value)` pairs.
    pub fn from_pairs<L: Into<String>>(pairs: impl IntoIterator<Item = (L, f64)>) -> Result<Self> {
        let (labels, values) = pairs
            .into_iter()
            .map(|(label, value)| (label.into(), value))
            .unzip();
        Self::new(labels, values)
    }

    /// Creates a vector of `value` over the given labels.
    pub fn filled(labels: Vec<String>, value: f64) -> Result<Self> {
        let values = vec![value; labels.len()];
        Self::new(labels, values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the value of the labelled component.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|idx| self.values[idx])
    }

    /// Iterates `(label, value)` pairs in component order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Returns true if both vectors describe the same components in the same
    /// order.
    pub fn same_index(&self, other: &ConstraintVector) -> bool {
        self.labels == other.labels
    }

    /// Applies `f` to every component, keeping the labels.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> ConstraintVector {
        ConstraintVector {
            labels: self.labels.clone(),
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct VectorRepr {
    labels: Vec<String>,
    values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<VectorRepr> for ConstraintVector {
    type Error = ReductionsError;

    fn try_from(repr: VectorRepr) -> Result<Self> {
        Self::new(repr.labels, repr.values)
    }
}
