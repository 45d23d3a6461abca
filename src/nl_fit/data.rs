use crate::error::KineticsError;
use crate::float_trait::Float;
use crate::kinetics::check;

use ndarray::{Array1, ArrayView1, CowArray, Ix1};

/// Measured binding trace to fit a model to
///
/// `t` is time, `response` is the measured signal and `weights` are inverse variances of the
/// response. All arrays have the same length and contain finite values only, time and weights
/// are non-negative. Time doesn't have to be sorted.
#[derive(Clone, Debug)]
pub struct ObservedTrace<'a, T>
where
    T: Float,
{
    t: CowArray<'a, T, Ix1>,
    response: CowArray<'a, T, Ix1>,
    weights: CowArray<'a, T, Ix1>,
}

impl<'a, T> ObservedTrace<'a, T>
where
    T: Float,
{
    /// Construct from array-like objects: [`ndarray::Array1`], [`ndarray::ArrayView1`], or `&[T]`
    pub fn new(
        t: impl Into<ArrayView1<'a, T>>,
        response: impl Into<ArrayView1<'a, T>>,
        weights: impl Into<ArrayView1<'a, T>>,
    ) -> Result<Self, KineticsError> {
        let t = t.into();
        let response = response.into();
        let weights = weights.into();

        check::same_length("response", t.len(), response.len())?;
        check::same_length("weights", t.len(), weights.len())?;
        check::time_samples("t", &t)?;
        check::finite_samples("response", &response)?;
        check::finite_samples("weights", &weights)?;
        for &w in weights.iter() {
            check::non_negative("weight", w)?;
        }

        Ok(Self {
            t: t.into(),
            response: response.into(),
            weights: weights.into(),
        })
    }

    /// Same as [`ObservedTrace::new`] with unity weights
    pub fn new_without_weight(
        t: impl Into<ArrayView1<'a, T>>,
        response: impl Into<ArrayView1<'a, T>>,
    ) -> Result<Self, KineticsError> {
        let t = t.into();
        let response = response.into();
        check::same_length("response", t.len(), response.len())?;
        check::time_samples("t", &t)?;
        check::finite_samples("response", &response)?;
        let weights = Array1::ones(t.len());
        Ok(Self {
            t: t.into(),
            response: response.into(),
            weights: weights.into(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    #[inline]
    pub fn t(&self) -> ArrayView1<'_, T> {
        self.t.view()
    }

    #[inline]
    pub fn response(&self) -> ArrayView1<'_, T> {
        self.response.view()
    }

    #[inline]
    pub fn weights(&self) -> ArrayView1<'_, T> {
        self.weights.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeProblem;

    #[test]
    fn lengths_must_agree() {
        let t = [0.0, 1.0, 2.0];
        let err = ObservedTrace::new(&t, &[0.0, 1.0], &[1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            KineticsError::ShapeMismatch {
                what: "response",
                problem: ShapeProblem::LengthMismatch {
                    expected: 3,
                    actual: 2
                },
            }
        );
        let err = ObservedTrace::new(&t, &[0.0, 1.0, 2.0], &[1.0]).unwrap_err();
        assert!(err.is_shape_mismatch());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let t = [0.0, 1.0, 2.0];
        assert!(
            ObservedTrace::new_without_weight(&t, &[0.0, f64::INFINITY, 2.0])
                .unwrap_err()
                .is_shape_mismatch()
        );
        assert!(
            ObservedTrace::new(&t, &[0.0, 1.0, 2.0], &[1.0, -1.0, 1.0])
                .unwrap_err()
                .is_invalid_parameter()
        );
    }

    #[test]
    fn negative_time_is_rejected() {
        let err = ObservedTrace::new_without_weight(&[-1.0, 0.0], &[0.0, 0.0]).unwrap_err();
        assert_eq!(
            err,
            KineticsError::ShapeMismatch {
                what: "t",
                problem: ShapeProblem::Negative { index: 0 },
            }
        );
    }

    #[test]
    fn unity_weights() {
        let trace = ObservedTrace::new_without_weight(&[0.0, 1.0], &[0.5, 0.7]).unwrap();
        assert_eq!(trace.len(), 2);
        assert!(trace.weights().iter().all(|&w| w == 1.0));
    }
}
