//! Grouping features.
//!
//! A grouping feature is a sensitive or conditional attribute which divides
//! the sample population into subgroups. [`GroupFeature`] holds one such
//! feature on behalf of a metric or constraint: its resolved name, its raw
//! per-sample values and its sorted set of classes, from which subgroup
//! membership masks are produced.

use tracing::trace;

use crate::data::{Series, Value};
use crate::error::{ReductionsError, Result};

/// One encoded grouping feature.
///
/// The name is resolved in priority order:
/// 1. the explicit `name` argument;
/// 2. the intrinsic name of the feature vector, which must be a string or
///    null (a null name counts as absent);
/// 3. `"{base_name}{index}"`.
///
/// An intrinsic name that is present but not a string is rejected, so that
/// integer names cannot be confused with positional indices downstream.
///
/// # Example
///
/// ```
/// use reductions_core::data::{Series, Value};
/// use reductions_core::GroupFeature;
///
/// let gf = GroupFeature::new("sens_", vec!["a", "b", "a", "c"], 2, None).unwrap();
/// assert_eq!(gf.name(), "sens_2");
/// assert_eq!(gf.classes(), &[Value::from("a"), Value::from("b"), Value::from("c")]);
/// assert_eq!(gf.mask(&Value::from("a")), vec![true, false, true, false]);
///
/// let err = GroupFeature::new("sens_", Series::from(vec![1, 2]).named(0), 0, None);
/// assert!(err.is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GroupFeature {
    name: String,
    raw_values: Series,
    classes: Vec<Value>,
}

impl GroupFeature {
    /// Encodes a grouping feature.
    ///
    /// # Errors
    ///
    /// Returns [`ReductionsError::InvalidFeatureName`] when no explicit name is
    /// given and the feature carries a non-string intrinsic name.
    pub fn new(
        base_name: &str,
        feature_vector: impl Into<Series>,
        index: usize,
        name: Option<&str>,
    ) -> Result<Self> {
        let raw_values: Series = feature_vector.into();
        let classes = raw_values.unique();

        let name = match (name, raw_values.name()) {
            (Some(explicit), _) => explicit.to_string(),
            (None, Some(Value::Str(intrinsic))) => intrinsic.clone(),
            (None, None | Some(Value::Null)) => format!("{}{}", base_name, index),
            (None, Some(other)) => {
                return Err(ReductionsError::InvalidFeatureName {
                    value: other.to_string(),
                    type_name: other.type_name(),
                });
            }
        };

        trace!(
            event = "group_feature",
            name = %name,
            samples = raw_values.len(),
            classes = classes.len(),
        );

        Ok(Self {
            name,
            raw_values,
            classes,
        })
    }

    /// Returns the resolved feature name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the per-sample values as supplied.
    pub fn raw_values(&self) -> &Series {
        &self.raw_values
    }

    /// Returns the distinct values, sorted.
    pub fn classes(&self) -> &[Value] {
        &self.classes
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.raw_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw_values.is_empty()
    }

    /// Returns the membership mask of one subgroup.
    ///
    /// A class that never occurs yields an all-false mask.
    pub fn mask(&self, class: &Value) -> Vec<bool> {
        self.raw_values.iter().map(|v| v == class).collect()
    }

    /// Returns one membership mask per class, in class order.
    pub fn masks(&self) -> Vec<(&Value, Vec<bool>)> {
        self.classes.iter().map(|c| (c, self.mask(c))).collect()
    }

    /// Returns the raw values renamed to this feature's resolved name.
    ///
    /// Suitable for passing to
    /// [`Moment::load_data`](crate::Moment::load_data) as the sensitive
    /// feature vector.
    pub fn to_series(&self) -> Series {
        self.raw_values.alias(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name_from_base_and_index() {
        let gf = GroupFeature::new("sens_", vec!["a", "b", "a", "c"], 2, None).unwrap();
        assert_eq!(gf.name(), "sens_2");
        assert_eq!(
            gf.classes(),
            &[Value::from("a"), Value::from("b"), Value::from("c")]
        );
        assert_eq!(gf.len(), 4);
    }

    #[test]
    fn test_explicit_name_wins() {
        let named = Series::from(vec!["a", "b"]).named("sex");
        let gf = GroupFeature::new("sens_", named, 2, Some("gender")).unwrap();
        assert_eq!(gf.name(), "gender");

        let gf = GroupFeature::new("sens_", vec!["a", "b"], 2, Some("gender")).unwrap();
        assert_eq!(gf.name(), "gender");
    }

    #[test]
    fn test_explicit_name_skips_intrinsic_check() {
        let gf = GroupFeature::new("sens_", Series::from(vec![1, 2]).named(7), 0, Some("race"))
            .unwrap();
        assert_eq!(gf.name(), "race");
    }

    #[test]
    fn test_intrinsic_string_name() {
        let gf =
            GroupFeature::new("cf_", Series::from(vec![1, 2, 1]).named("age_band"), 0, None)
                .unwrap();
        assert_eq!(gf.name(), "age_band");
        assert_eq!(gf.classes(), &[Value::from(1), Value::from(2)]);
    }

    #[test]
    fn test_non_string_intrinsic_name_rejected() {
        let err = GroupFeature::new("sens_", Series::from(vec!["a", "b"]).named(0), 0, None)
            .unwrap_err();

        match &err {
            ReductionsError::InvalidFeatureName { value, type_name } => {
                assert_eq!(value, "0");
                assert_eq!(*type_name, "int");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "Series name must be a string. Value '0' was of type int"
        );
    }

    #[test]
    fn test_null_intrinsic_name_uses_default() {
        let unnamed = Series::from(vec!["a", "b"]).named(Option::<&str>::None);
        assert_eq!(unnamed.name(), Some(&Value::Null));

        let gf = GroupFeature::new("sens_", unnamed, 3, None).unwrap();
        assert_eq!(gf.name(), "sens_3");
    }

    #[test]
    fn test_float_intrinsic_name_rejected() {
        let err = GroupFeature::new("sens_", Series::from(vec![1]).named(1.5), 0, None)
            .unwrap_err();
        assert!(err.to_string().contains("'1.5' was of type float"));
    }

    #[test]
    fn test_masks_follow_class_order() {
        let gf = GroupFeature::new("sf", vec![2, 1, 2, 3], 0, None).unwrap();
        let masks = gf.masks();
        assert_eq!(masks.len(), 3);
        assert_eq!(masks[0], (&Value::from(1), vec![false, true, false, false]));
        assert_eq!(masks[1], (&Value::from(2), vec![true, false, true, false]));
        assert_eq!(masks[2], (&Value::from(3), vec![false, false, false, true]));
    }

    #[test]
    fn test_mask_for_absent_class() {
        let gf = GroupFeature::new("sf", vec!["a", "a"], 0, None).unwrap();
        assert_eq!(gf.mask(&Value::from("z")), vec![false, false]);
    }

    #[test]
    fn test_to_series_carries_resolved_name() {
        let gf = GroupFeature::new("sf", vec!["a", "b"], 1, None).unwrap();
        let s = gf.to_series();
        assert_eq!(s.name(), Some(&Value::from("sf1")));
        assert_eq!(s.values(), gf.raw_values().values());
    }

    #[test]
    fn test_empty_feature() {
        let gf = GroupFeature::new("sf", Vec::<i64>::new(), 0, None).unwrap();
        assert!(gf.is_empty());
        assert!(gf.classes().is_empty());
    }
}
