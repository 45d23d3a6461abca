//! Closed-form biosensor response models
//!
//! Models are small validated structs: all parameter checks happen on construction, so
//! evaluation is an infallible per-sample formula that can be called in a tight fitting loop.

use crate::error::KineticsError;
use crate::float_trait::Float;
use crate::kinetics::{Assay, check};

use enum_dispatch::enum_dispatch;
use ndarray::{Array1, ArrayView1, ArrayViewMut1, Zip};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

mod one_to_one;
pub use one_to_one::{OneToOne, OneToOneParameters, binding1to1};

mod two_to_one;
pub use two_to_one::{TwoToOne, TwoToOneParameters, binding2to1};

#[enum_dispatch]
pub trait ResponseModelTrait<T: Float>: Clone + Debug + Send + Sync {
    /// Experimental set-up the model is evaluated for
    fn assay(&self) -> &Assay<T>;

    /// Names of the free kinetic parameters
    fn names(&self) -> &'static [&'static str];

    /// Response at a single time point
    ///
    /// `t` must be finite and non-negative, [`ResponseModelTrait::eval`] checks it.
    fn response(&self, t: T) -> T;

    /// Response for every time point, in the input order
    ///
    /// Samples are classified into association or dissociation phase independently, so
    /// `t` doesn't have to be sorted. Non-finite or negative samples fail with
    /// [`KineticsError::ShapeMismatch`].
    fn eval(&self, t: ArrayView1<T>) -> Result<Array1<T>, KineticsError> {
        check::time_samples("t", &t)?;
        Ok(t.mapv(|x| self.response(x)))
    }

    /// Same as [`ResponseModelTrait::eval`], but writes into a caller-owned buffer
    fn eval_into(&self, t: ArrayView1<T>, out: ArrayViewMut1<T>) -> Result<(), KineticsError> {
        check::same_length("output buffer", t.len(), out.len())?;
        check::time_samples("t", &t)?;
        Zip::from(out)
            .and(&t)
            .for_each(|y, &x| *y = self.response(x));
        Ok(())
    }
}

/// All response models are available as variants of this enum
#[enum_dispatch(ResponseModelTrait<T>)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
#[non_exhaustive]
pub enum ResponseModel<T: Float> {
    OneToOne(OneToOne<T>),
    TwoToOne(TwoToOne<T>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeProblem;
    use crate::tests::*;

    use approx::assert_relative_eq;

    fn models() -> Vec<ResponseModel<f64>> {
        let assay = Assay::new(500.0, 6e-7).unwrap();
        let site1 = BindingSite::from_triple(1e4, 0.01, 0.8).unwrap();
        let site2 = BindingSite::from_triple(1e5, 1e-3, 0.3).unwrap();
        vec![
            OneToOne::new(assay, site1, &ResponseOptions::default())
                .unwrap()
                .into(),
            TwoToOne::new(assay, site1, site2).into(),
        ]
    }

    #[test]
    fn eval_into_equals_eval() {
        let t = seq(0.0, 1000.0, 10.0);
        for model in models() {
            let desired = model.eval(t.view()).unwrap();
            let mut actual = Array1::zeros(t.len());
            model.eval_into(t.view(), actual.view_mut()).unwrap();
            assert_eq!(actual, desired);
        }
    }

    #[test]
    fn eval_into_wrong_buffer_length() {
        let t = seq(0.0, 100.0, 1.0);
        let mut out = Array1::zeros(t.len() - 1);
        for model in models() {
            let err = model.eval_into(t.view(), out.view_mut()).unwrap_err();
            assert!(err.is_shape_mismatch());
        }
    }

    #[test]
    fn non_finite_time_is_rejected() {
        let t = Array1::from(vec![0.0, f64::NAN, 2.0]);
        for model in models() {
            assert!(model.eval(t.view()).unwrap_err().is_shape_mismatch());
        }
    }

    #[test]
    fn negative_time_is_rejected() {
        let t = Array1::from(vec![-1e5, -10.0, 0.0]);
        for model in models() {
            let err = model.eval(t.view()).unwrap_err();
            assert_eq!(
                err,
                KineticsError::ShapeMismatch {
                    what: "t",
                    problem: ShapeProblem::Negative { index: 0 },
                }
            );
            let mut out = Array1::zeros(t.len());
            assert!(
                model
                    .eval_into(t.view(), out.view_mut())
                    .unwrap_err()
                    .is_shape_mismatch()
            );
        }
        let err = binding1to1(&t, 500.0, 6e-7, 1e4, 0.01, 0.8, &ResponseOptions::default())
            .unwrap_err();
        assert!(err.is_shape_mismatch());
    }

    #[test]
    fn negative_zero_time_is_the_assay_start() {
        let t = Array1::from(vec![-0.0, 0.0]);
        for model in models() {
            let r = model.eval(t.view()).unwrap();
            assert!(r.iter().all(|&x| x == 0.0));
        }
    }

    #[test]
    fn names_are_dispatched() {
        let names: Vec<_> = models().iter().map(|model| model.names()).collect();
        assert_eq!(names[0], ["kon", "koff", "rmax"]);
        assert_eq!(
            names[1],
            ["kon1", "koff1", "rmax1", "kon2", "koff2", "rmax2"]
        );
    }

    #[test]
    fn empty_time_gives_empty_response() {
        let t = Array1::<f64>::zeros(0);
        for model in models() {
            assert_eq!(model.eval(t.view()).unwrap().len(), 0);
        }
    }

    #[test]
    fn unsorted_time_is_evaluated_elementwise() {
        let t = seq(0.0, 1000.0, 7.0);
        let reversed: Array1<f64> = t.iter().rev().copied().collect();
        for model in models() {
            let forward = model.eval(t.view()).unwrap();
            let backward = model.eval(reversed.view()).unwrap();
            let backward: Vec<_> = backward.iter().rev().copied().collect();
            assert_eq!(forward.to_vec(), backward);
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let t = seq(0.0, 1000.0, 0.5);
        for model in models() {
            let first = model.eval(t.view()).unwrap();
            let second = model.eval(t.view()).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn serde_round_trip_keeps_model() {
        let t = seq(0.0, 1000.0, 25.0);
        for model in models() {
            let json = serde_json::to_string(&model).unwrap();
            let back: ResponseModel<f64> = serde_json::from_str(&json).unwrap();
            assert_eq!(model, back);
            assert_relative_eq!(
                model.eval(t.view()).unwrap().as_slice().unwrap(),
                back.eval(t.view()).unwrap().as_slice().unwrap(),
            );
        }
    }
}
