//! Support for fitting the response models with an external least-squares solver
//!
//! # Overview
//!
//! This crate doesn't implement an optimizer. Instead, it exposes the models in the shape that
//! Levenberg–Marquardt, trust-region or MCMC solvers expect: a fixed-size array of free
//! parameters, the model value and its analytic Jacobian at a time point, and weighted residuals
//! against an observed trace.
//!
//! # Parameters
//!
//! Free parameters are the kinetic ones, quantities controlled by the experimentalist are fixed
//! by the model instance:
//!
//! | Model | Free parameters | Fixed |
//! |---|---|---|
//! | [`OneToOne`](crate::OneToOne) | `[kon, koff, rmax]` | `t0`, `conc`, `drift` |
//! | [`TwoToOne`](crate::TwoToOne) | `[kon1, koff1, rmax1, kon2, koff2, rmax2]` | `t0`, `conc` |
//!
//! # Objective loop
//!
//! ```text
//! base model ── with_params(p) ──> candidate ── residuals_into / jacobian_into ──> solver
//!                    │
//!                    └── InvalidParameter for a non-physical p (e.g. kon <= 0)
//! ```
//!
//! A solver stepping into a non-physical region gets an error rather than NaN-filled residuals,
//! it may treat it as an infinite cost or restrict its step.

pub mod data;
pub use data::ObservedTrace;

pub mod evaluator;
pub use evaluator::FitModelTrait;

pub mod objective;
pub use objective::{chi2, jacobian_into, reduced_chi2, residuals_into};
