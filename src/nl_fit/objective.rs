use crate::error::KineticsError;
use crate::float_trait::Float;
use crate::kinetics::check;
use crate::nl_fit::{FitModelTrait, ObservedTrace};

use conv::prelude::*;
use itertools::izip;
use ndarray::{ArrayViewMut1, ArrayViewMut2};

/// Weighted residuals `sqrt(w) * (response - model(t))` of the model with `params`
///
/// `out` must have the length of the trace.
pub fn residuals_into<M, T, const NPARAMS: usize>(
    model: &M,
    params: &[T; NPARAMS],
    trace: &ObservedTrace<T>,
    mut out: ArrayViewMut1<T>,
) -> Result<(), KineticsError>
where
    M: FitModelTrait<T, NPARAMS>,
    T: Float,
{
    check::same_length("residuals buffer", trace.len(), out.len())?;
    let model = model.with_params(params)?;
    let (times, values, weights) = (trace.t(), trace.response(), trace.weights());
    for (r, &t, &y, &w) in izip!(out.iter_mut(), times.iter(), values.iter(), weights.iter()) {
        *r = w.sqrt() * (y - model.response(t));
    }
    Ok(())
}

/// Jacobian of the model over the free parameters, one row per time point of `t`
///
/// `out` must have shape `(trace.len(), NPARAMS)`. Residual Jacobian is the negated model
/// Jacobian scaled by the square root of weights.
pub fn jacobian_into<M, T, const NPARAMS: usize>(
    model: &M,
    params: &[T; NPARAMS],
    trace: &ObservedTrace<T>,
    mut out: ArrayViewMut2<T>,
) -> Result<(), KineticsError>
where
    M: FitModelTrait<T, NPARAMS>,
    T: Float,
{
    check::same_length("jacobian rows", trace.len(), out.nrows())?;
    check::same_length("jacobian columns", NPARAMS, out.ncols())?;
    let model = model.with_params(params)?;
    let mut jac = [T::zero(); NPARAMS];
    let times = trace.t();
    for (mut row, &t) in out.rows_mut().into_iter().zip(times.iter()) {
        model.derivatives(t, &mut jac);
        for (x, &d) in row.iter_mut().zip(jac.iter()) {
            *x = d;
        }
    }
    Ok(())
}

/// Weighted sum of squared residuals
pub fn chi2<M, T, const NPARAMS: usize>(
    model: &M,
    params: &[T; NPARAMS],
    trace: &ObservedTrace<T>,
) -> Result<T, KineticsError>
where
    M: FitModelTrait<T, NPARAMS>,
    T: Float,
{
    let model = model.with_params(params)?;
    let (times, values, weights) = (trace.t(), trace.response(), trace.weights());
    Ok(izip!(times.iter(), values.iter(), weights.iter())
        .map(|(&t, &y, &w)| w * (y - model.response(t)).powi(2))
        .sum())
}

/// [`chi2`] divided by the degrees of freedom, `trace.len() - NPARAMS`
///
/// Fails with [`KineticsError::ShapeMismatch`] if the trace is not longer than the number of
/// free parameters.
pub fn reduced_chi2<M, T, const NPARAMS: usize>(
    model: &M,
    params: &[T; NPARAMS],
    trace: &ObservedTrace<T>,
) -> Result<T, KineticsError>
where
    M: FitModelTrait<T, NPARAMS>,
    T: Float,
{
    if trace.len() <= NPARAMS {
        return Err(KineticsError::length_mismatch(
            "trace",
            NPARAMS + 1,
            trace.len(),
        ));
    }
    let dof: T = (trace.len() - NPARAMS)
        .approx_as::<T>()
        .map_err(|_| KineticsError::length_mismatch("trace", NPARAMS + 1, trace.len()))?;
    Ok(chi2(model, params, trace)? / dof)
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
mod tests {
    use super::*;
    use crate::tests::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::{Array1, Array2};

    fn model_and_trace() -> (OneToOne<f64>, Array1<f64>, Array1<f64>) {
        let model = OneToOne::new(
            Assay::new(500.0, 6e-7).unwrap(),
            BindingSite::from_triple(1e4, 0.01, 0.8).unwrap(),
            &ResponseOptions::default(),
        )
        .unwrap();
        let t = seq(0.0, 1000.0, 2.0);
        let y = model.eval(t.view()).unwrap();
        (model, t, y)
    }

    #[test]
    fn residuals_vanish_at_true_parameters() {
        let (model, t, y) = model_and_trace();
        let trace = ObservedTrace::new_without_weight(&t, &y).unwrap();
        let mut residuals = Array1::zeros(trace.len());
        residuals_into(&model, &model.params(), &trace, residuals.view_mut()).unwrap();
        assert!(residuals.iter().all(|&r| r == 0.0));
        assert_eq!(chi2(&model, &model.params(), &trace).unwrap(), 0.0);
    }

    #[test]
    fn chi2_grows_away_from_true_parameters() {
        let (model, t, y) = model_and_trace();
        let trace = ObservedTrace::new_without_weight(&t, &y).unwrap();
        let near = chi2(&model, &[1.1e4, 0.01, 0.8], &trace).unwrap();
        let far = chi2(&model, &[2e4, 0.01, 0.8], &trace).unwrap();
        assert!(0.0 < near && near < far);
    }

    #[test]
    fn noisy_trace_reduced_chi2_is_about_unity() {
        let (model, t, y) = model_and_trace();
        let mut rng = StdRng::seed_from_u64(5);
        let sigma = 0.005;
        let noisy: Array1<f64> = y.mapv(|x| x + sigma * rng.sample::<f64, _>(StandardNormal));
        let w = Array1::from_elem(t.len(), sigma.powi(-2));
        let trace = ObservedTrace::new(&t, &noisy, &w).unwrap();
        let value = reduced_chi2(&model, &model.params(), &trace).unwrap();
        assert_abs_diff_eq!(value, 1.0, epsilon = 0.2);
    }

    #[test]
    fn weights_scale_residuals() {
        let (model, t, y) = model_and_trace();
        let shifted = &y + 0.1;
        let w = Array1::from_elem(t.len(), 4.0);
        let trace = ObservedTrace::new(&t, &shifted, &w).unwrap();
        let mut residuals = Array1::zeros(trace.len());
        residuals_into(&model, &model.params(), &trace, residuals.view_mut()).unwrap();
        for &r in residuals.iter() {
            assert_relative_eq!(r, 0.2, max_relative = 1e-9);
        }
    }

    #[test]
    fn invalid_candidate_is_rejected() {
        let (model, t, y) = model_and_trace();
        let trace = ObservedTrace::new_without_weight(&t, &y).unwrap();
        let mut residuals = Array1::zeros(trace.len());
        let err = residuals_into(&model, &[-1e4, 0.01, 0.8], &trace, residuals.view_mut())
            .unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(chi2(&model, &[1e4, 0.01, 0.0], &trace).is_err());
    }

    #[test]
    fn buffers_must_match_trace() {
        let (model, t, y) = model_and_trace();
        let trace = ObservedTrace::new_without_weight(&t, &y).unwrap();
        let mut residuals = Array1::zeros(trace.len() + 1);
        assert!(
            residuals_into(&model, &model.params(), &trace, residuals.view_mut())
                .unwrap_err()
                .is_shape_mismatch()
        );
        let mut jac = Array2::zeros((trace.len(), 2));
        assert!(
            jacobian_into(&model, &model.params(), &trace, jac.view_mut())
                .unwrap_err()
                .is_shape_mismatch()
        );
    }

    #[test]
    fn jacobian_rows_are_derivatives() {
        let (model, t, y) = model_and_trace();
        let trace = ObservedTrace::new_without_weight(&t, &y).unwrap();
        let mut jac = Array2::zeros((trace.len(), 3));
        jacobian_into(&model, &model.params(), &trace, jac.view_mut()).unwrap();
        for (row, &ti) in jac.rows().into_iter().zip(t.iter()) {
            let mut desired = [0.0; 3];
            model.derivatives(ti, &mut desired);
            assert_eq!(row.to_vec(), desired.to_vec());
        }
    }

    #[test]
    fn reduced_chi2_needs_degrees_of_freedom() {
        let (model, _, _) = model_and_trace();
        let trace = ObservedTrace::new_without_weight(&[0.0, 1.0, 2.0], &[0.0, 0.1, 0.2]).unwrap();
        assert!(
            reduced_chi2(&model, &model.params(), &trace)
                .unwrap_err()
                .is_shape_mismatch()
        );
    }
}
