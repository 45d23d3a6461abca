use crate::error::KineticsError;
use crate::float_trait::Float;
use crate::kinetics::{Assay, BindingSite};
use crate::models::ResponseModelTrait;
use crate::nl_fit::FitModelTrait;
use crate::options::ResponseOptions;

use macro_const::macro_const;
use ndarray::{Array1, ArrayView1};
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

const NPARAMS: usize = 3;
const NAMES: [&str; NPARAMS] = ["kon", "koff", "rmax"];

macro_const! {
    const DOC: &str = r#"
Single-site (1:1) binding response

Analyte at concentration $c$ binds a single class of sites with association rate $k_\mathrm{on}$
and dissociation rate $k_\mathrm{off}$, $K_D = k_\mathrm{off} / k_\mathrm{on}$. The association phase
runs until $t_0$, then analyte is removed and the complex dissociates:

$$
R(t) = \begin{cases}
    \frac{c R_\mathrm{max}}{c + K_D} \left(1 - \mathrm{e}^{-(k_\mathrm{on} c + k_\mathrm{off}) t}\right) + d \times t, & t \leq t_0, \\
    R(t_0) \mathrm{e}^{-k_\mathrm{off} (t - t_0)}, & t > t_0,
\end{cases}
$$

where $d$ is an optional linear baseline drift. Drift accrues during the association phase only,
its offset at $t_0$ decays together with the bound complex.

- Fit parameters: $k_\mathrm{on}$, $k_\mathrm{off}$, $R_\mathrm{max}$
- Fixed: $t_0$, $c$, $d$
"#;
}

#[doc = DOC!()]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    bound = "T: Float",
    try_from = "OneToOneParameters<T>",
    into = "OneToOneParameters<T>"
)]
pub struct OneToOne<T> {
    assay: Assay<T>,
    site: BindingSite<T>,
    drift: T,
    // Derived once, evaluation only reads them
    plateau: T,
    k_obs: T,
    response_t0: T,
}

impl<T> OneToOne<T>
where
    T: Float,
{
    pub fn new(
        assay: Assay<T>,
        site: BindingSite<T>,
        options: &ResponseOptions<T>,
    ) -> Result<Self, KineticsError> {
        let drift = options.validated_drift()?;
        Ok(Self::with_drift(assay, site, drift))
    }

    /// Model without baseline drift, used as a component of [`crate::TwoToOne`]
    pub(crate) fn without_drift(assay: Assay<T>, site: BindingSite<T>) -> Self {
        Self::with_drift(assay, site, T::zero())
    }

    fn with_drift(assay: Assay<T>, site: BindingSite<T>, drift: T) -> Self {
        let plateau = site.equilibrium_response(assay.conc());
        let k_obs = site.rates().k_obs(assay.conc());
        let response_t0 = association(plateau, k_obs, drift, assay.t0());
        Self {
            assay,
            site,
            drift,
            plateau,
            k_obs,
            response_t0,
        }
    }

    #[inline]
    pub fn site(&self) -> &BindingSite<T> {
        &self.site
    }

    #[inline]
    pub fn drift(&self) -> T {
        self.drift
    }

    /// Response at the end of the association phase, the dissociation phase starts from it
    #[inline]
    pub fn response_at_t0(&self) -> T {
        self.response_t0
    }

    /// Evaluate for time points given as a slice, [`ndarray`] array or array view
    pub fn eval_array<'a>(&self, t: impl Into<ArrayView1<'a, T>>) -> Result<Array1<T>, KineticsError> {
        self.eval(t.into())
    }

    pub fn doc() -> &'static str {
        DOC
    }
}

#[inline]
fn association<T: Float>(plateau: T, k_obs: T, drift: T, t: T) -> T {
    // 1 - exp(-x) without cancellation at small x
    -plateau * T::exp_m1(-k_obs * t) + drift * t
}

impl<T> ResponseModelTrait<T> for OneToOne<T>
where
    T: Float,
{
    #[inline]
    fn assay(&self) -> &Assay<T> {
        &self.assay
    }

    fn names(&self) -> &'static [&'static str] {
        &NAMES
    }

    #[inline]
    fn response(&self, t: T) -> T {
        if self.assay.is_association(t) {
            association(self.plateau, self.k_obs, self.drift, t)
        } else {
            self.response_t0 * T::exp(-self.site.rates().koff() * (t - self.assay.t0()))
        }
    }
}

impl<T> FitModelTrait<T, NPARAMS> for OneToOne<T>
where
    T: Float,
{
    const PARAM_NAMES: [&'static str; NPARAMS] = NAMES;

    fn params(&self) -> [T; NPARAMS] {
        self.site.triple()
    }

    fn with_params(&self, params: &[T; NPARAMS]) -> Result<Self, KineticsError> {
        let [kon, koff, rmax] = *params;
        let site = BindingSite::from_triple(kon, koff, rmax)?;
        Ok(Self::with_drift(self.assay, site, self.drift))
    }

    fn derivatives(&self, t: T, jac: &mut [T; NPARAMS]) {
        let conc = self.assay.conc();
        let t0 = self.assay.t0();
        let [kon, koff, rmax] = self.site.triple();
        let k = self.k_obs;
        let k2 = k * k;

        // association part is frozen at t0 during dissociation
        let tau = t.min(t0);
        let exp_obs = T::exp(-k * tau);
        let rise = -T::exp_m1(-k * tau);
        let tau_exp_obs = self.plateau * tau * exp_obs;

        let d_kon = conc * rmax * koff / k2 * rise + conc * tau_exp_obs;
        let d_koff = -conc * rmax * kon / k2 * rise + tau_exp_obs;
        let d_rmax = conc * kon / k * rise;

        if self.assay.is_association(t) {
            *jac = [d_kon, d_koff, d_rmax];
        } else {
            let dt = t - t0;
            let decay = T::exp(-koff * dt);
            *jac = [
                d_kon * decay,
                (d_koff - self.response_t0 * dt) * decay,
                d_rmax * decay,
            ];
        }
    }
}

/// Serialized form of [`OneToOne`], validated on conversion
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "OneToOne", deny_unknown_fields)]
pub struct OneToOneParameters<T> {
    /// Dissociation onset, s
    pub t0: T,
    /// Analyte concentration, M
    pub conc: T,
    /// Association rate constant, M⁻¹s⁻¹
    pub kon: T,
    /// Dissociation rate constant, s⁻¹
    pub koff: T,
    /// Maximum response at full saturation
    pub rmax: T,
    /// Linear baseline drift during the association phase, response units per second
    pub drift: Option<T>,
}

impl<T: Float> TryFrom<OneToOneParameters<T>> for OneToOne<T> {
    type Error = KineticsError;

    fn try_from(p: OneToOneParameters<T>) -> Result<Self, Self::Error> {
        let options = ResponseOptions::new(p.drift.unwrap_or_else(ResponseOptions::default_drift));
        Self::new(
            Assay::new(p.t0, p.conc)?,
            BindingSite::from_triple(p.kon, p.koff, p.rmax)?,
            &options,
        )
    }
}

impl<T: Float> From<OneToOne<T>> for OneToOneParameters<T> {
    fn from(model: OneToOne<T>) -> Self {
        let [kon, koff, rmax] = model.site.triple();
        Self {
            t0: model.assay.t0(),
            conc: model.assay.conc(),
            kon,
            koff,
            rmax,
            drift: Some(model.drift),
        }
    }
}

impl<T: Float> JsonSchema for OneToOne<T> {
    fn schema_name() -> Cow<'static, str> {
        OneToOneParameters::<T>::schema_name()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        OneToOneParameters::<T>::json_schema(generator)
    }
}

/// Single-site binding response for every time point of `t`
///
/// `t0` is the dissociation onset, `conc` is the analyte concentration, `kon` and `koff` are
/// the rate constants and `rmax` is the maximum response. Drift is taken from `options`.
/// Fails with [`KineticsError::InvalidParameter`] for non-positive rate constants or `rmax`,
/// negative `t0` or `conc`, and with [`KineticsError::ShapeMismatch`] for non-finite `t`.
pub fn binding1to1<'a, T>(
    t: impl Into<ArrayView1<'a, T>>,
    t0: T,
    conc: T,
    kon: T,
    koff: T,
    rmax: T,
    options: &ResponseOptions<T>,
) -> Result<Array1<T>, KineticsError>
where
    T: Float,
{
    let model = OneToOne::new(
        Assay::new(t0, conc)?,
        BindingSite::from_triple(kon, koff, rmax)?,
        options,
    )?;
    model.eval(t.into())
}
