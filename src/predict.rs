//! Prediction pipeline: linear combination plus implicit-equation solve.
//!
//! Couples the feature deriver and the root solver over a validated
//! [`PriceModel`]. Every entry point here is total and deterministic; the
//! model is read-only, so any number of callers may predict concurrently
//! without coordination.

use rayon::prelude::*;
use serde::Serialize;

use crate::features::{FeatureVector, RawListing, DEFAULT_REFERENCE_YEAR};
use crate::model::{PriceModel, LOG_TARGET_FEATURE};
use crate::solver::solve_price;

/// Core prediction pair: the solved price plus the linear-part diagnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Positive root of the implicit price equation.
    pub price: f64,
    /// Constant term of the equation: intercept + non-log dot product.
    pub base: f64,
}

/// Per-request response payload: the estimate plus the derived features
/// that produced it, echoed back for caller audit.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    pub predicted_price: f64,
    pub base: f64,
    pub features: FeatureVector,
}

impl PriceModel {
    /// Linear combination over every model feature except the log target:
    /// `intercept + Σ coef[name] * features[name]`, in training order.
    pub fn linear_base(&self, features: &FeatureVector) -> f64 {
        let mut base = self.intercept();

        for (name, coef) in self.weights() {
            if name == LOG_TARGET_FEATURE {
                continue;
            }
            debug_assert!(features.get(name).is_some(), "underivable feature {name}");
            base += coef * features.get(name).unwrap_or(0.0);
        }

        base
    }

    /// Predict from an already-derived feature vector.
    pub fn predict_features(&self, features: &FeatureVector) -> Prediction {
        let base = self.linear_base(features);
        let price = solve_price(base, self.coef_log());
        Prediction { price, base }
    }

    /// Full pipeline with the default reference year.
    pub fn predict(&self, listing: &RawListing) -> PredictionReport {
        self.predict_at(listing, DEFAULT_REFERENCE_YEAR)
    }

    /// Full pipeline: derive features, evaluate, solve.
    pub fn predict_at(&self, listing: &RawListing, reference_year: f64) -> PredictionReport {
        let features = FeatureVector::derive(listing, reference_year);
        let Prediction { price, base } = self.predict_features(&features);
        PredictionReport {
            predicted_price: price,
            base,
            features,
        }
    }

    /// Predict a batch of listings sequentially.
    pub fn predict_batch(&self, listings: &[RawListing]) -> Vec<PredictionReport> {
        listings.iter().map(|listing| self.predict(listing)).collect()
    }

    /// Parallel batch prediction over rayon workers.
    ///
    /// Per-request state never outlives the call, so the only shared data
    /// is the immutable model.
    pub fn par_predict_batch(&self, listings: &[RawListing]) -> Vec<PredictionReport> {
        listings
            .par_iter()
            .map(|listing| self.predict(listing))
            .collect()
    }
}
