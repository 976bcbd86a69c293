//! Tabular substrate shared by group features and moments
//!
//! Every input shape a caller may hold (row vectors, plain sequences,
//! named columns) is converted once into these types:
//! - `Value`: a totally ordered scalar cell
//! - `Series`: one column with an optional intrinsic name
//! - `Frame`: named columns with positional row alignment

mod frame;
mod series;
mod value;


pub use frame::Frame;
pub use series::Series;
pub use value::Value;
