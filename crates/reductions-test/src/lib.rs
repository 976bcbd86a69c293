//! Shared test fixtures for the reductions crates.
//!
//! This crate provides data and small moment/predictor implementations for
//! testing. It depends only on `reductions-core`.
//!
//! - [`datasets`] - A small loan-approval dataset with a sensitive column
//! - [`predictors`] - Constant and threshold predictors
//! - [`moments`] - Fully specialized moments exercising the whole contract
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! reductions-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use reductions_test::datasets::loan_dataset;
//! use reductions_test::moments::ErrorRateFixture;
//! ```

pub mod datasets;
pub mod moments;
pub mod predictors;

pub use datasets::{loan_dataset, LoanDataset};
pub use moments::{ErrorRateFixture, MeanLossFixture, SquaredLoss};
pub use predictors::{ConstantPredictor, ThresholdPredictor};
