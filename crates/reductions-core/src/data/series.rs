//! One-dimensional labelled columns.

use std::collections::BTreeSet;

use super::{Frame, Value};
use crate::error::{ReductionsError, Result};

/// An ordered column of values with an optional intrinsic name.
///
/// The intrinsic name is a [`Value`] rather than a string so that columns
/// named by position (e.g. `0`) keep that name as an integer; consumers such
/// as [`GroupFeature`](crate::GroupFeature) decide whether to accept it.
///
/// # Example
///
/// ```
/// use reductions_core::data::{Series, Value};
///
/// let s = Series::from(vec!["a", "b", "a", "c"]).named("gender");
/// assert_eq!(s.len(), 4);
/// assert_eq!(s.name(), Some(&Value::from("gender")));
/// assert_eq!(s.unique(), vec![Value::from("a"), Value::from("b"), Value::from("c")]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    name: Option<Value>,
    values: Vec<Value>,
}

impl Series {
    /// Creates an unnamed series.
    pub fn new(values: Vec<Value>) -> Self {
        Self { name: None, values }
    }

    /// Sets the intrinsic name.
    pub fn named(mut self, name: impl Into<Value>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns a copy of this series carrying the given string name.
    pub fn alias(&self, name: &str) -> Series {
        Series {
            name: Some(Value::from(name)),
            values: self.values.clone(),
        }
    }

    /// Returns the intrinsic name, if any.
    pub fn name(&self) -> Option<&Value> {
        self.name.as_ref()
    }

    /// Returns the values in positional order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consumes the series, returning its values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }

    /// Returns the sorted distinct values.
    pub fn unique(&self) -> Vec<Value> {
        self.values
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Numeric view of the values.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first non-numeric cell.
    pub fn to_f64(&self) -> Result<Vec<f64>> {
        self.values
            .iter()
            .enumerate()
            .map(|(row, v)| {
                v.as_f64().ok_or_else(|| {
                    ReductionsError::Validation(format!(
                        "value '{}' of type {} at row {} is not numeric",
                        v,
                        v.type_name(),
                        row
                    ))
                })
            })
            .collect()
    }

    /// Wraps this series in a single-column frame.
    ///
    /// The column takes the series name when it is a string, otherwise the
    /// positional name `"0"`.
    pub fn to_frame(&self) -> Frame {
        let name = match &self.name {
            Some(Value::Str(s)) => s.clone(),
            _ => "0".to_string(),
        };
        Frame::single(name, self.values.clone())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Series {
    fn from(values: Vec<T>) -> Self {
        Series::new(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Series {
    fn from(values: &[T]) -> Self {
        Series::new(values.iter().cloned().map(Into::into).collect())
    }
}

impl FromIterator<Value> for Series {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Series::new(iter.into_iter().collect())
    }
}
