use crate::error::KineticsError;
use crate::float_trait::Float;
use crate::models::ResponseModelTrait;

/// A response model with `NPARAMS` free parameters
pub trait FitModelTrait<T, const NPARAMS: usize>: ResponseModelTrait<T> + Sized
where
    T: Float,
{
    /// Names of the free parameters, in the order of the parameter array
    const PARAM_NAMES: [&'static str; NPARAMS];

    /// Current free parameters
    fn params(&self) -> [T; NPARAMS];

    /// Same model with other free parameters, fails if they are not physical
    fn with_params(&self, params: &[T; NPARAMS]) -> Result<Self, KineticsError>;

    /// Partial derivatives of the response at `t` over the free parameters
    fn derivatives(&self, t: T, jac: &mut [T; NPARAMS]);

    /// Response at `t` for the given free parameters
    fn model(&self, t: T, params: &[T; NPARAMS]) -> Result<T, KineticsError> {
        Ok(self.with_params(params)?.response(t))
    }
}
