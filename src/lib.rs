//! hedonic: inference for fitted hedonic house-price models.
//!
//! This crate serves price estimates from a linear regression whose
//! training target was partially self-referential: one of the model's
//! input features is the natural logarithm of the price being predicted.
//! Direct evaluation is circular, so prediction collapses the linear part
//! into a constant and solves the remaining one-dimensional transcendental
//! equation with a capped Newton iteration.
//!
//! The pipeline is `features` (raw listing → named feature vector), then
//! `predict` (linear combination + root solve) over a validated `model`
//! artifact, typically loaded through `compat`.

pub mod compat;
pub mod features;
pub mod model;
pub mod predict;
pub mod solver;
