//! Fitted model artifact: coefficients, intercept, feature metadata.
//!
//! The [`PriceModel`] is immutable after construction and holds the
//! fitted regression exactly as trained: an ordered feature-name list
//! with one coefficient per name, plus the intercept. All artifact
//! preconditions are checked once here, at load time, so the per-request
//! prediction path never validates and never fails.

use thiserror::Error;

use crate::features::FEATURE_NAMES;

/// Name of the self-referential model input: the natural logarithm of the
/// price being predicted. Never derived from listing attributes; its
/// coefficient scales `ln(y)` in the implicit price equation.
pub const LOG_TARGET_FEATURE: &str = "LogPrice";

/// Error type for model artifact validation.
///
/// Every variant is a configuration error surfaced at load time, never a
/// per-request error.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("feature/coefficient cardinality mismatch: {names} names, {coefficients} coefficients")]
    CardinalityMismatch { names: usize, coefficients: usize },
    #[error("duplicate feature name: {0}")]
    DuplicateFeature(String),
    #[error("model has no `LogPrice` coefficient")]
    MissingLogTarget,
    #[error("model expects feature `{0}`, which cannot be derived from listing attributes")]
    UnderivableFeature(String),
}

/// A fitted hedonic price model (inference-ready).
///
/// Coefficients are stored as parallel name/weight arrays preserving the
/// training column order, which fixes the summation order of the linear
/// combination and keeps predictions bit-reproducible.
#[derive(Debug, Clone)]
pub struct PriceModel {
    /// Feature names, in training order. Includes the log target.
    names: Vec<String>,
    /// One weight per name, same order.
    coefficients: Vec<f64>,
    /// Model intercept.
    intercept: f64,
    /// Cached coefficient of the log-target feature.
    coef_log: f64,
    /// Artifact metadata.
    meta: ModelMeta,
}

impl PriceModel {
    /// Build and validate a model from its fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if names and coefficients differ in length,
    /// a name repeats, the log-target coefficient is absent, or a non-log
    /// name is outside the derivable feature set.
    pub fn new(
        names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, ModelError> {
        Self::with_source(names, coefficients, intercept, ModelSource::Constructed)
    }

    pub(crate) fn with_source(
        names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
        source: ModelSource,
    ) -> Result<Self, ModelError> {
        if names.len() != coefficients.len() {
            return Err(ModelError::CardinalityMismatch {
                names: names.len(),
                coefficients: coefficients.len(),
            });
        }

        for (idx, name) in names.iter().enumerate() {
            if names[..idx].contains(name) {
                return Err(ModelError::DuplicateFeature(name.clone()));
            }
            if name != LOG_TARGET_FEATURE && !FEATURE_NAMES.contains(&name.as_str()) {
                return Err(ModelError::UnderivableFeature(name.clone()));
            }
        }

        let coef_log = names
            .iter()
            .position(|name| name == LOG_TARGET_FEATURE)
            .map(|idx| coefficients[idx])
            .ok_or(ModelError::MissingLogTarget)?;

        let meta = ModelMeta {
            num_features: names.len(),
            source,
        };

        Ok(Self {
            names,
            coefficients,
            intercept,
            coef_log,
            meta,
        })
    }

    /// Number of model inputs, log target included.
    #[inline]
    pub fn num_features(&self) -> usize {
        self.meta.num_features
    }

    /// Feature names in training order (the facade's diagnostic surface).
    #[inline]
    pub fn feature_names(&self) -> &[String] {
        &self.names
    }

    /// Model intercept.
    #[inline]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Coefficient of the log-target feature.
    #[inline]
    pub fn coef_log(&self) -> f64 {
        self.coef_log
    }

    /// Artifact metadata.
    #[inline]
    pub fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    /// Iterate `(name, coefficient)` pairs in training order.
    pub fn weights(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.coefficients.iter().copied())
    }
}

/// Model metadata.
#[derive(Debug, Clone)]
pub struct ModelMeta {
    /// Number of model inputs, log target included.
    pub num_features: usize,

    /// Where the model came from.
    pub source: ModelSource,
}

/// Where the model came from (for diagnostics).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSource {
    /// Loaded from a scikit-learn JSON export.
    SklearnJson,

    /// Built directly from in-memory parameters.
    Constructed,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_names() -> Vec<String> {
        FEATURE_NAMES
            .iter()
            .map(|s| s.to_string())
            .chain([LOG_TARGET_FEATURE.to_string()])
            .collect()
    }

    #[test]
    fn model_new_validates_and_caches_log_coef() {
        let names = full_names();
        let mut coefs = vec![1.0; names.len()];
        *coefs.last_mut().unwrap() = 18_000.0;

        let model = PriceModel::new(names, coefs, -65_000.0).unwrap();

        assert_eq!(model.num_features(), 12);
        assert_eq!(model.coef_log(), 18_000.0);
        assert_eq!(model.intercept(), -65_000.0);
        assert_eq!(model.meta().source, ModelSource::Constructed);
        assert_eq!(model.weights().count(), 12);
    }

    #[test]
    fn model_rejects_cardinality_mismatch() {
        let err = PriceModel::new(full_names(), vec![1.0; 3], 0.0).unwrap_err();
        assert!(matches!(
            err,
            ModelError::CardinalityMismatch {
                names: 12,
                coefficients: 3
            }
        ));
    }

    #[test]
    fn model_rejects_missing_log_target() {
        let names: Vec<String> = FEATURE_NAMES.iter().map(|s| s.to_string()).collect();
        let err = PriceModel::new(names, vec![1.0; 11], 0.0).unwrap_err();
        assert!(matches!(err, ModelError::MissingLogTarget));
    }

    #[test]
    fn model_rejects_duplicate_feature() {
        let mut names = full_names();
        names[1] = "Size_sqft".to_string();
        let err = PriceModel::new(names, vec![1.0; 12], 0.0).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateFeature(name) if name == "Size_sqft"));
    }

    #[test]
    fn model_rejects_underivable_feature() {
        let mut names = full_names();
        names[0] = "GarageSpots".to_string();
        let err = PriceModel::new(names, vec![1.0; 12], 0.0).unwrap_err();
        assert!(matches!(err, ModelError::UnderivableFeature(name) if name == "GarageSpots"));
    }

    #[test]
    fn weights_preserve_training_order() {
        let names = full_names();
        let coefs: Vec<f64> = (0..names.len()).map(|i| i as f64).collect();
        let model = PriceModel::new(names.clone(), coefs, 0.0).unwrap();

        for (idx, (name, coef)) in model.weights().enumerate() {
            assert_eq!(name, names[idx]);
            assert_eq!(coef, idx as f64);
        }
    }
}
