//! Loader for scikit-learn linear regression JSON exports.
//!
//! The training pipeline dumps its fitted `LinearRegression` as a small
//! JSON document mirroring `feature_names_in_`, `coef_` and `intercept_`:
//!
//! ```json
//! {
//!   "feature_names": ["Size_sqft", "...", "LogPrice"],
//!   "coefficients": [120.0, ...],
//!   "intercept": -65000.0
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{ModelError, ModelSource, PriceModel};

/// Error type for artifact loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed artifact JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// A fitted linear model as exported by the training pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct SklearnArtifact {
    /// Training column names, in training order.
    pub feature_names: Vec<String>,
    /// One weight per feature name, same order.
    pub coefficients: Vec<f64>,
    /// Fitted intercept.
    pub intercept: f64,
}

impl SklearnArtifact {
    /// Convert to a validated native [`PriceModel`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] when the export violates an artifact
    /// precondition (see [`PriceModel::new`]).
    pub fn to_model(&self) -> Result<PriceModel, ModelError> {
        PriceModel::with_source(
            self.feature_names.clone(),
            self.coefficients.clone(),
            self.intercept,
            ModelSource::SklearnJson,
        )
    }
}

impl PriceModel {
    /// Load and validate a model artifact from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let artifact: SklearnArtifact =
            serde_json::from_reader(BufReader::new(File::open(path)?))?;
        let model = artifact.to_model()?;

        log::info!(
            "loaded price model from {}: {} features",
            path.display(),
            model.num_features()
        );
        log::debug!("expected features: {:?}", model.feature_names());

        Ok(model)
    }
}
