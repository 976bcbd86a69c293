//! Tests for the moment lifecycle and the unspecialized moment kinds.

use std::sync::Arc;

use super::columns::{GROUP_ID, LABEL};
use super::*;
use crate::data::{Frame, Series, Value};
use crate::error::{ReductionsError, Result};

fn features(n: usize) -> Frame {
    Frame::from_rows((0..n).map(|i| vec![Value::from(i as f64)]).collect()).unwrap()
}

/// Moment with one component per group, counting positive predictions.
#[derive(Default)]
struct PositiveCountMoment {
    state: MomentState,
}

impl PositiveCountMoment {
    fn group_labels(&self) -> Result<Vec<String>> {
        if let Some(cached) = self.state.constraint_index() {
            return Ok(cached.to_vec());
        }
        let tags = self.tags()?;
        let groups = tags
            .series(GROUP_ID)
            .ok_or_else(|| ReductionsError::Validation("no group_id".into()))?;
        Ok(groups.unique().iter().map(|g| g.to_string()).collect())
    }
}

impl Moment for PositiveCountMoment {
    fn state(&self) -> &MomentState {
        &self.state
    }

    fn state_mut(&mut self) -> MomentStateMut<'_> {
        MomentStateMut::new(&mut self.state)
    }

    fn moment_type(&self) -> MomentType {
        MomentType::Classification
    }

    fn gamma(&self, predictor: &dyn Predictor) -> Result<ConstraintVector> {
        let labels = self.group_labels()?;
        let tags = self.tags()?;
        let preds = predictor.predict(self.features()?)?;
        let groups = tags.column(GROUP_ID).unwrap_or_default();
        let values = labels
            .iter()
            .map(|label| {
                groups
                    .iter()
                    .zip(&preds)
                    .filter(|(g, p)| g.to_string() == *label && **p > 0.5)
                    .count() as f64
            })
            .collect();
        ConstraintVector::new(labels, values)
    }

    fn bound(&self) -> Result<ConstraintVector> {
        ConstraintVector::filled(self.group_labels()?, 1.0)
    }

    fn project_lambda(&self, lambda: &ConstraintVector) -> Result<ConstraintVector> {
        Ok(lambda.map(|v| v.max(0.0)))
    }

    fn signed_weights(&self, _lambda: &ConstraintVector) -> Result<Vec<f64>> {
        Ok(vec![1.0; self.total_samples()?])
    }
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

#[test]
fn test_new_moment_is_unloaded() {
    let moment = ClassificationMoment::new();
    assert!(!moment.is_loaded());
    assert!(matches!(moment.total_samples(), Err(ReductionsError::NotLoaded)));
    assert!(matches!(moment.tags(), Err(ReductionsError::NotLoaded)));
}

#[test]
fn test_load_data_with_sensitive_features() {
    let mut moment = ClassificationMoment::new();
    let s = Series::from(vec!["a", "b", "a", "c"]);
    moment
        .load_data(features(4), Series::from(vec![0, 1, 1, 0]), Some(s.clone()))
        .unwrap();

    assert!(moment.is_loaded());
    assert_eq!(moment.total_samples().unwrap(), 4);

    let tags = moment.tags().unwrap();
    assert_eq!(tags.n_rows(), 4);
    assert_eq!(tags.column_names(), vec![LABEL, GROUP_ID]);
    let group_id = tags.column(GROUP_ID).unwrap();
    for (i, expected) in s.iter().enumerate() {
        assert_eq!(&group_id[i], expected);
    }
    assert_eq!(
        tags.column(LABEL).unwrap(),
        moment.labels().unwrap().values()
    );
}

#[test]
fn test_load_data_without_sensitive_features() {
    let mut moment = ClassificationMoment::new();
    moment
        .load_data(features(3), Series::from(vec![1, 0, 1]), None)
        .unwrap();

    let tags = moment.tags().unwrap();
    assert_eq!(tags.column_names(), vec![LABEL]);
    assert!(!tags.has_column(GROUP_ID));
}

#[test]
fn test_load_data_twice_fails_and_keeps_state() {
    let mut moment = ClassificationMoment::new();
    moment
        .load_data(features(2), Series::from(vec![0, 1]), Some(Series::from(vec!["x", "y"])))
        .unwrap();
    let before = moment.data().unwrap().clone();

    let err = moment
        .load_data(features(5), Series::from(vec![1, 1, 1, 1, 1]), None)
        .unwrap_err();
    assert!(matches!(err, ReductionsError::AlreadyLoaded));
    assert_eq!(moment.data().unwrap(), &before);
}

#[test]
fn test_load_data_twice_with_bad_data_reports_already_loaded() {
    let mut moment = ClassificationMoment::new();
    moment
        .load_data(features(2), Series::from(vec![0, 1]), None)
        .unwrap();

    let err = moment
        .load_data(features(2), Series::from(vec![0]), None)
        .unwrap_err();
    assert!(matches!(err, ReductionsError::AlreadyLoaded));
}

#[test]
fn test_state_handle_only_moves_forward() {
    let mut moment = ClassificationMoment::new();
    moment
        .load_data(features(2), Series::from(vec![0, 1]), None)
        .unwrap();

    let mut handle = moment.state_mut();
    assert!(handle.is_loaded());
    let replacement = LoadedData::new(features(5), Series::from(vec![1; 5]), None).unwrap();
    assert!(matches!(
        handle.install(replacement),
        Err(ReductionsError::AlreadyLoaded)
    ));
    handle.set_constraint_index(vec!["all".into()]);

    assert!(moment.is_loaded());
    assert_eq!(moment.state().constraint_index(), Some(&["all".to_string()][..]));
    let err = moment
        .load_data(features(5), Series::from(vec![1; 5]), None)
        .unwrap_err();
    assert!(matches!(err, ReductionsError::AlreadyLoaded));
    assert_eq!(moment.total_samples().unwrap(), 2);
}

#[test]
fn test_misaligned_labels_leave_moment_unloaded() {
    let mut moment = ClassificationMoment::new();
    let err = moment
        .load_data(features(3), Series::from(vec![0, 1]), None)
        .unwrap_err();

    assert!(matches!(
        err,
        ReductionsError::InconsistentLength {
            expected: 3,
            found: 2,
            ..
        }
    ));
    assert!(!moment.is_loaded());

    moment
        .load_data(features(2), Series::from(vec![0, 1]), None)
        .unwrap();
    assert!(moment.is_loaded());
}

#[test]
fn test_misaligned_sensitive_features_leave_moment_unloaded() {
    let mut moment = ClassificationMoment::new();
    let err = moment
        .load_data(
            features(2),
            Series::from(vec![0, 1]),
            Some(Series::from(vec!["a", "b", "c"])),
        )
        .unwrap_err();

    assert!(matches!(err, ReductionsError::InconsistentLength { .. }));
    assert!(!moment.is_loaded());
}

#[test]
fn test_constraint_index_cleared_at_load() {
    let mut state = MomentState::new();
    state.set_constraint_index(vec!["stale".into()]);

    let data = LoadedData::new(features(1), Series::from(vec![1]), None).unwrap();
    state.install(data).unwrap();
    assert!(state.constraint_index().is_none());
}

// ============================================================================
// Unspecialized Kinds
// ============================================================================

#[test]
fn test_classification_moment_operations_not_implemented() {
    let mut moment = ClassificationMoment::new();
    moment
        .load_data(features(2), Series::from(vec![0, 1]), None)
        .unwrap();
    let lambda = ConstraintVector::from_pairs(vec![("all", 1.0)]).unwrap();
    let predictor = |x: &Frame| vec![0.0; x.n_rows()];

    let errors = [
        moment.gamma(&predictor).unwrap_err(),
        moment.bound().unwrap_err(),
        moment.project_lambda(&lambda).unwrap_err(),
        moment.signed_weights(&lambda).unwrap_err(),
    ];
    let operations: Vec<_> = errors
        .iter()
        .map(|e| match e {
            ReductionsError::NotImplemented { operation } => *operation,
            other => panic!("unexpected error: {other:?}"),
        })
        .collect();
    assert_eq!(
        operations,
        vec!["gamma", "bound", "project_lambda", "signed_weights"]
    );
}

#[test]
fn test_loss_moment_operations_not_implemented() {
    let moment = LossMoment::new(());
    let lambda = ConstraintVector::default();
    assert!(moment.bound().unwrap_err().is_not_implemented());
    assert!(moment.project_lambda(&lambda).unwrap_err().is_not_implemented());
    assert!(moment.signed_weights(&lambda).unwrap_err().is_not_implemented());
}

#[test]
fn test_moment_types_are_distinct() {
    let classification = ClassificationMoment::new();
    let loss = LossMoment::new(0.5_f64);
    assert_eq!(classification.moment_type(), MomentType::Classification);
    assert_eq!(loss.moment_type(), MomentType::Loss);
    assert_ne!(classification.moment_type(), loss.moment_type());
}

#[test]
fn test_loss_moment_keeps_loss_identity() {
    struct SquareLoss;
    let loss = Arc::new(SquareLoss);
    let moment = LossMoment::new(Arc::clone(&loss));
    assert!(Arc::ptr_eq(moment.reduction_loss(), &loss));
}

#[test]
fn test_moments_as_trait_objects() {
    let moments: Vec<Box<dyn Moment>> = vec![
        Box::new(ClassificationMoment::new()),
        Box::new(LossMoment::new("absolute")),
        Box::new(PositiveCountMoment::default()),
    ];
    let types: Vec<_> = moments.iter().map(|m| m.moment_type()).collect();
    assert_eq!(
        types,
        vec![
            MomentType::Classification,
            MomentType::Loss,
            MomentType::Classification
        ]
    );
}

// ============================================================================
// Specialized Moment
// ============================================================================

#[test]
fn test_specialized_moment_full_contract() {
    let mut moment = PositiveCountMoment::default();
    moment
        .load_data(
            features(4),
            Series::from(vec![0, 1, 1, 0]),
            Some(Series::from(vec!["a", "b", "a", "b"])),
        )
        .unwrap();

    let predictor = |x: &Frame| {
        x.column("0")
            .unwrap()
            .iter()
            .map(|v| if v.as_f64().unwrap() >= 2.0 { 1.0 } else { 0.0 })
            .collect::<Vec<_>>()
    };

    let gamma = moment.gamma(&predictor).unwrap();
    let bound = moment.bound().unwrap();
    assert!(gamma.same_index(&bound));
    assert_eq!(gamma.get("a"), Some(1.0));
    assert_eq!(gamma.get("b"), Some(1.0));

    let lambda = ConstraintVector::from_pairs(vec![("a", -0.5), ("b", 2.0)]).unwrap();
    let projected = moment.project_lambda(&lambda).unwrap();
    assert_eq!(projected.values(), &[0.0, 2.0]);
    assert_eq!(moment.project_lambda(&projected).unwrap(), projected);

    assert_eq!(moment.signed_weights(&projected).unwrap().len(), 4);
}

#[test]
fn test_specialized_moment_guards_unloaded() {
    let moment = PositiveCountMoment::default();
    assert!(matches!(moment.bound(), Err(ReductionsError::NotLoaded)));
}
