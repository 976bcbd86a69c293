//! Column-ordered tables with positional row alignment.

use super::{Series, Value};
use crate::error::{ReductionsError, Result};

/// A table of named columns sharing one row count.
///
/// Rows are aligned by position across columns. Column order is the order
/// of insertion.
///
/// # Example
///
/// ```
/// use reductions_core::data::{Frame, Series, Value};
///
/// let frame = Frame::from_rows(vec![
///     vec![Value::from(1.0), Value::from(0.5)],
///     vec![Value::from(2.0), Value::from(1.5)],
/// ])
/// .unwrap()
/// .with_column("group", Series::from(vec!["a", "b"]))
/// .unwrap();
///
/// assert_eq!(frame.shape(), (2, 3));
/// assert_eq!(frame.column_names(), vec!["0", "1", "group"]);
/// assert_eq!(frame.column("group").unwrap()[1], Value::from("b"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "FrameRepr"))]
pub struct Frame {
    names: Vec<String>,
    columns: Vec<Vec<Value>>,
    n_rows: usize,
}

impl Frame {
    /// Creates an empty frame with no columns and no rows.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn single(name: String, values: Vec<Value>) -> Self {
        Frame {
            n_rows: values.len(),
            names: vec![name],
            columns: vec![values],
        }
    }

    /// Builds a frame from `(name, values)` pairs.
    ///
    /// # Errors
    ///
    /// Fails if the columns disagree on their length.
    pub fn from_columns<N, I>(columns: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<Value>)>,
    {
        columns
            .into_iter()
            .try_fold(Frame::new(), |frame, (name, values)| {
                frame.with_column(name, Series::new(values))
            })
    }

    /// Builds a frame from row vectors, naming columns by position.
    ///
    /// # Errors
    ///
    /// Fails if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Result<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let n_rows = rows.len();
        let mut columns: Vec<Vec<Value>> =
            (0..width).map(|_| Vec::with_capacity(n_rows)).collect();

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ReductionsError::length(
                    format!("row {} width", i),
                    width,
                    row.len(),
                ));
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }

        Ok(Frame {
            names: (0..width).map(|i| i.to_string()).collect(),
            columns,
            n_rows,
        })
    }

    /// Appends a column, or replaces the column with the same name.
    ///
    /// # Errors
    ///
    /// Fails if the frame already has columns and the series length differs
    /// from the row count.
    pub fn with_column(mut self, name: impl Into<String>, series: Series) -> Result<Self> {
        let name = name.into();
        if !self.columns.is_empty() && series.len() != self.n_rows {
            return Err(ReductionsError::length(
                format!("column '{}'", name),
                self.n_rows,
                series.len(),
            ));
        }
        self.n_rows = series.len();

        let values = series.into_values();
        match self.names.iter().position(|n| *n == name) {
            Some(idx) => self.columns[idx] = values,
            None => {
                self.names.push(name);
                self.columns.push(values);
            }
        }
        Ok(self)
    }

    /// Returns the values of the named column.
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.columns[idx].as_slice())
    }

    /// Returns the named column as a series named after it.
    pub fn series(&self, name: &str) -> Option<Series> {
        self.column(name)
            .map(|values| Series::new(values.to_vec()).named(name))
    }

    /// Returns true if a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    /// Iterates `(name, values)` pairs in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Returns `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Returns the cells of one row, in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&Value>> {
        if index >= self.n_rows {
            return None;
        }
        Some(self.columns.iter().map(|c| &c[index]).collect())
    }
}

/// Unchecked wire form of a [`Frame`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct FrameRepr {
    names: Vec<String>,
    columns: Vec<Vec<Value>>,
    n_rows: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<FrameRepr> for Frame {
    type Error = ReductionsError;

    fn try_from(repr: FrameRepr) -> Result<Self> {
        if repr.names.len() != repr.columns.len() {
            return Err(ReductionsError::length(
                "column names",
                repr.columns.len(),
                repr.names.len(),
            ));
        }
        for (i, name) in repr.names.iter().enumerate() {
            if repr.names[..i].contains(name) {
                return Err(ReductionsError::DuplicateLabel(name.clone()));
            }
            if repr.columns[i].len() != repr.n_rows {
                return Err(ReductionsError::length(
                    format!("column '{}'", name),
                    repr.n_rows,
                    repr.columns[i].len(),
                ));
            }
        }
        Ok(Frame {
            names: repr.names,
            columns: repr.columns,
            n_rows: repr.n_rows,
        })
    }
}

impl From<Series> for Frame {
    fn from(series: Series) -> Self {
        series.to_frame()
    }
}
