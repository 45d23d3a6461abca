//! Closed-form planning times for association and dissociation phases
//!
//! Both phases are single-exponential, so the time to reach a given fraction of the final
//! state is an exact inversion, no root finding is involved.

use crate::error::KineticsError;
use crate::float_trait::Float;
use crate::kinetics::{RateConstants, check};
use crate::options::EquilibriumOptions;

use ndarray::{Array1, ArrayView1};

/// Time for the association phase to reach `threshold` of its equilibrium response
///
/// Occupancy grows as $1 - \mathrm{e}^{-(k_\mathrm{on} c + k_\mathrm{off}) t}$, so the time is
/// $-\ln(1 - \mathrm{threshold}) / (k_\mathrm{on} c + k_\mathrm{off})$. `conc` must be positive and
/// `threshold` must be strictly between zero and unity.
pub fn equilibrium_time<T>(
    conc: T,
    rates: &RateConstants<T>,
    threshold: T,
) -> Result<T, KineticsError>
where
    T: Float,
{
    let conc = check::positive("conc", conc)?;
    let log_remainder = remainder_log(threshold)?;
    Ok(log_remainder / rates.k_obs(conc))
}

/// Time to equilibrium for every concentration of `conc`, in the input order
///
/// `kon`, `koff` and the threshold of `options` are shared by all concentrations, see
/// [`equilibrium_time`]. A non-finite concentration fails with [`KineticsError::ShapeMismatch`],
/// a non-positive one with [`KineticsError::InvalidParameter`].
pub fn tteq<'a, T>(
    conc: impl Into<ArrayView1<'a, T>>,
    kon: T,
    koff: T,
    options: &EquilibriumOptions<T>,
) -> Result<Array1<T>, KineticsError>
where
    T: Float,
{
    let conc = conc.into();
    let rates = RateConstants::new(kon, koff)?;
    let log_remainder = remainder_log(options.threshold)?;
    check::finite_samples("conc", &conc)?;
    conc.iter()
        .map(|&c| {
            let c = check::positive("conc", c)?;
            Ok(log_remainder / rates.k_obs(c))
        })
        .collect()
}

/// Time for the dissociation phase to release `fraction` of the bound complex
///
/// The complex decays as $\mathrm{e}^{-k_\mathrm{off} t}$, so the time is
/// $-\ln(1 - \mathrm{fraction}) / k_\mathrm{off}$.
pub fn dissociation_time<T>(koff: T, fraction: T) -> Result<T, KineticsError>
where
    T: Float,
{
    let koff = check::positive("koff", koff)?;
    let fraction = check::open_unit_interval("fraction", fraction)?;
    Ok(-T::ln_1p(-fraction) / koff)
}

/// `-ln(1 - threshold)`, the number of e-folds to the threshold
fn remainder_log<T: Float>(threshold: T) -> Result<T, KineticsError> {
    let threshold = check::open_unit_interval("threshold", threshold)?;
    Ok(-T::ln_1p(-threshold))
}
