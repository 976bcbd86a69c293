//! Load-once lifecycle of a moment.

use tracing::{debug, warn};

use super::columns::{GROUP_ID, LABEL};
use crate::data::{Frame, Series};
use crate::error::{ReductionsError, Result};

/// Data held by a loaded moment.
///
/// Only constructible through [`LoadedData::new`], which checks that the
/// features, labels and sensitive features agree on their sample count. Every
/// numerical operation of a concrete moment may rely on that alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedData {
    features: Frame,
    labels: Series,
    tags: Frame,
}

impl LoadedData {
    /// Validates alignment and builds the tags table.
    ///
    /// The tags table holds `labels` under [`LABEL`] and, when given, the
    /// sensitive features under [`GROUP_ID`].
    pub fn new(
        features: Frame,
        labels: Series,
        sensitive_features: Option<Series>,
    ) -> Result<Self> {
        let total = features.n_rows();
        if labels.len() != total {
            warn!(
                event = "load_data_rejected",
                features = total,
                labels = labels.len()
            );
            return Err(ReductionsError::length("labels", total, labels.len()));
        }

        let mut tags = labels.alias(LABEL).to_frame();
        if let Some(sensitive) = sensitive_features {
            if sensitive.len() != total {
                warn!(
                    event = "load_data_rejected",
                    features = total,
                    sensitive_features = sensitive.len()
                );
                return Err(ReductionsError::length(
                    "sensitive features",
                    total,
                    sensitive.len(),
                ));
            }
            tags = tags.with_column(GROUP_ID, sensitive)?;
        }

        Ok(Self {
            features,
            labels,
            tags,
        })
    }

    pub fn features(&self) -> &Frame {
        &self.features
    }

    pub fn labels(&self) -> &Series {
        &self.labels
    }

    /// Returns the per-sample tags table.
    pub fn tags(&self) -> &Frame {
        &self.tags
    }

    /// Returns the number of samples.
    pub fn total_samples(&self) -> usize {
        self.features.n_rows()
    }
}

/// Lifecycle state embedded in every moment.
///
/// Starts `Unloaded` and moves to `Loaded` exactly once. Outside its owner the
/// state is only reachable through `&MomentState` or [`MomentStateMut`], so
/// a loaded moment can never be put back into the unloaded state. The state also owns
/// the cached constraint index, a slot where a concrete moment may remember
/// the labels of its constraint components; it is cleared at load since the
/// components may depend on the loaded groups.
#[derive(Debug, Clone, Default)]
pub struct MomentState {
    data: Option<LoadedData>,
    constraint_index: Option<Vec<String>>,
}

impl MomentState {
    /// Creates an unloaded state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    /// Installs loaded data.
    ///
    /// # Errors
    ///
    /// Returns [`ReductionsError::AlreadyLoaded`] if data is already present;
    /// the existing data is left untouched.
    pub fn install(&mut self, data: LoadedData) -> Result<()> {
        if self.data.is_some() {
            return Err(ReductionsError::AlreadyLoaded);
        }
        debug!(
            event = "load_data",
            samples = data.total_samples(),
            features = data.features().n_cols(),
            group_id = data.tags().has_column(GROUP_ID),
        );
        self.data = Some(data);
        self.constraint_index = None;
        Ok(())
    }

    /// Returns the loaded data.
    ///
    /// # Errors
    ///
    /// Returns [`ReductionsError::NotLoaded`] while unloaded.
    pub fn loaded(&self) -> Result<&LoadedData> {
        self.data.as_ref().ok_or(ReductionsError::NotLoaded)
    }

    /// Returns the cached constraint index, if one has been recorded.
    pub fn constraint_index(&self) -> Option<&[String]> {
        self.constraint_index.as_deref()
    }

    /// Records the constraint index.
    pub fn set_constraint_index(&mut self, labels: Vec<String>) {
        self.constraint_index = Some(labels);
    }
}

/// Forward-only mutable access to a [`MomentState`].
///
/// Returned by [`Moment::state_mut`](crate::Moment::state_mut). It exposes the
/// load transition and the constraint index slot but never the state itself,
/// so callers holding a moment cannot replace or reset its state.
///
/// ```compile_fail
/// use reductions_core::{ClassificationMoment, Moment, MomentState};
///
/// let mut moment = ClassificationMoment::new();
/// *moment.state_mut() = MomentState::new();
/// ```
#[derive(Debug)]
pub struct MomentStateMut<'a> {
    state: &'a mut MomentState,
}

impl<'a> MomentStateMut<'a> {
    /// Wraps the state owned by a moment.
    pub fn new(state: &'a mut MomentState) -> Self {
        Self { state }
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    /// See [`MomentState::install`].
    pub fn install(&mut self, data: LoadedData) -> Result<()> {
        self.state.install(data)
    }

    /// See [`MomentState::set_constraint_index`].
    pub fn set_constraint_index(&mut self, labels: Vec<String>) {
        self.state.set_constraint_index(labels);
    }
}
