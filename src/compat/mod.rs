//! External artifact loaders.
//!
//! Converts fitted-model exports from foreign training frameworks into
//! native [`PriceModel`](crate::model::PriceModel) values. All validation
//! happens here, once, at load time; the per-request prediction path
//! never re-validates.

pub mod sklearn;

pub use sklearn::{LoadError, SklearnArtifact};
