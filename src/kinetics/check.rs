use crate::error::{Constraint, KineticsError, ShapeProblem};
use crate::float_trait::Float;

use ndarray::ArrayView1;

pub(crate) fn finite<T: Float>(name: &'static str, x: T) -> Result<T, KineticsError> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(KineticsError::invalid(name, x, Constraint::Finite))
    }
}

pub(crate) fn positive<T: Float>(name: &'static str, x: T) -> Result<T, KineticsError> {
    // NaN fails the comparison too
    if x.is_finite() && x > T::zero() {
        Ok(x)
    } else {
        Err(KineticsError::invalid(name, x, Constraint::Positive))
    }
}

pub(crate) fn non_negative<T: Float>(name: &'static str, x: T) -> Result<T, KineticsError> {
    if x.is_finite() && x >= T::zero() {
        Ok(x)
    } else {
        Err(KineticsError::invalid(name, x, Constraint::NonNegative))
    }
}

pub(crate) fn open_unit_interval<T: Float>(name: &'static str, x: T) -> Result<T, KineticsError> {
    if x > T::zero() && x < T::one() {
        Ok(x)
    } else {
        Err(KineticsError::invalid(name, x, Constraint::OpenUnitInterval))
    }
}

/// Fails on the first non-finite element
pub(crate) fn finite_samples<T: Float>(
    what: &'static str,
    x: &ArrayView1<T>,
) -> Result<(), KineticsError> {
    match x.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(KineticsError::shape(what, ShapeProblem::NonFinite { index })),
        None => Ok(()),
    }
}

/// Fails on the first element that is not a finite non-negative time
///
/// Time is counted from the association start, so negative samples precede the assay.
pub(crate) fn time_samples<T: Float>(
    what: &'static str,
    x: &ArrayView1<T>,
) -> Result<(), KineticsError> {
    finite_samples(what, x)?;
    match x.iter().position(|&v| v < T::zero()) {
        Some(index) => Err(KineticsError::shape(what, ShapeProblem::Negative { index })),
        None => Ok(()),
    }
}

pub(crate) fn same_length(
    what: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), KineticsError> {
    if expected == actual {
        Ok(())
    } else {
        Err(KineticsError::length_mismatch(what, expected, actual))
    }
}
