use crate::error::KineticsError;
use crate::float_trait::Float;
use crate::kinetics::{Assay, BindingSite};
use crate::models::{OneToOne, ResponseModelTrait};
use crate::nl_fit::FitModelTrait;

use macro_const::macro_const;
use ndarray::{Array1, ArrayView1};
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

const NPARAMS: usize = 6;
const NAMES: [&str; NPARAMS] = ["kon1", "koff1", "rmax1", "kon2", "koff2", "rmax2"];

macro_const! {
    const DOC: &str = r#"
Heterogeneous two-site (2:1) binding response

Two independent classes of sites on the same sensor surface, each following its own 1:1
kinetics, see [OneToOne](crate::OneToOne). The observed response is the sum of both:

$$
R(t) = R_1(t; k_\mathrm{on,1}, k_\mathrm{off,1}, R_\mathrm{max,1}) + R_2(t; k_\mathrm{on,2}, k_\mathrm{off,2}, R_\mathrm{max,2}).
$$

Sites share the time points, dissociation onset $t_0$ and analyte concentration, there is no
coupling between their occupancies and no baseline drift.

- Fit parameters: $k_\mathrm{on,1}$, $k_\mathrm{off,1}$, $R_\mathrm{max,1}$, $k_\mathrm{on,2}$, $k_\mathrm{off,2}$, $R_\mathrm{max,2}$
- Fixed: $t_0$, $c$
"#;
}

#[doc = DOC!()]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    bound = "T: Float",
    try_from = "TwoToOneParameters<T>",
    into = "TwoToOneParameters<T>"
)]
pub struct TwoToOne<T> {
    first: OneToOne<T>,
    second: OneToOne<T>,
}

impl<T> TwoToOne<T>
where
    T: Float,
{
    pub fn new(assay: Assay<T>, first: BindingSite<T>, second: BindingSite<T>) -> Self {
        Self {
            first: OneToOne::without_drift(assay, first),
            second: OneToOne::without_drift(assay, second),
        }
    }

    /// 1:1 components of the response
    pub fn components(&self) -> [&OneToOne<T>; 2] {
        [&self.first, &self.second]
    }

    /// Evaluate for time points given as a slice, [`ndarray`] array or array view
    pub fn eval_array<'a>(
        &self,
        t: impl Into<ArrayView1<'a, T>>,
    ) -> Result<Array1<T>, KineticsError> {
        self.eval(t.into())
    }

    pub fn doc() -> &'static str {
        DOC
    }
}

impl<T> ResponseModelTrait<T> for TwoToOne<T>
where
    T: Float,
{
    #[inline]
    fn assay(&self) -> &Assay<T> {
        self.first.assay()
    }

    fn names(&self) -> &'static [&'static str] {
        &NAMES
    }

    #[inline]
    fn response(&self, t: T) -> T {
        self.first.response(t) + self.second.response(t)
    }
}

impl<T> FitModelTrait<T, NPARAMS> for TwoToOne<T>
where
    T: Float,
{
    const PARAM_NAMES: [&'static str; NPARAMS] = NAMES;

    fn params(&self) -> [T; NPARAMS] {
        let [kon1, koff1, rmax1] = self.first.site().triple();
        let [kon2, koff2, rmax2] = self.second.site().triple();
        [kon1, koff1, rmax1, kon2, koff2, rmax2]
    }

    fn with_params(&self, params: &[T; NPARAMS]) -> Result<Self, KineticsError> {
        let [kon1, koff1, rmax1, kon2, koff2, rmax2] = *params;
        Ok(Self::new(
            *self.assay(),
            BindingSite::from_triple(kon1, koff1, rmax1)?,
            BindingSite::from_triple(kon2, koff2, rmax2)?,
        ))
    }

    fn derivatives(&self, t: T, jac: &mut [T; NPARAMS]) {
        let (jac1, jac2) = jac.split_at_mut(3);
        let mut site_jac = [T::zero(); 3];
        self.first.derivatives(t, &mut site_jac);
        jac1.copy_from_slice(&site_jac);
        self.second.derivatives(t, &mut site_jac);
        jac2.copy_from_slice(&site_jac);
    }
}

/// Serialized form of [`TwoToOne`], validated on conversion
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "TwoToOne", deny_unknown_fields)]
pub struct TwoToOneParameters<T> {
    /// Dissociation onset, s
    pub t0: T,
    /// Analyte concentration, M
    pub conc: T,
    /// Association rate constant of the first site, M⁻¹s⁻¹
    pub kon1: T,
    /// Dissociation rate constant of the first site, s⁻¹
    pub koff1: T,
    /// Maximum response of the first site at full saturation
    pub rmax1: T,
    /// Association rate constant of the second site, M⁻¹s⁻¹
    pub kon2: T,
    /// Dissociation rate constant of the second site, s⁻¹
    pub koff2: T,
    /// Maximum response of the second site at full saturation
    pub rmax2: T,
}

impl<T: Float> TryFrom<TwoToOneParameters<T>> for TwoToOne<T> {
    type Error = KineticsError;

    fn try_from(p: TwoToOneParameters<T>) -> Result<Self, Self::Error> {
        Ok(Self::new(
            Assay::new(p.t0, p.conc)?,
            BindingSite::from_triple(p.kon1, p.koff1, p.rmax1)?,
            BindingSite::from_triple(p.kon2, p.koff2, p.rmax2)?,
        ))
    }
}

impl<T: Float> From<TwoToOne<T>> for TwoToOneParameters<T> {
    fn from(model: TwoToOne<T>) -> Self {
        let [kon1, koff1, rmax1, kon2, koff2, rmax2] = model.params();
        Self {
            t0: model.assay().t0(),
            conc: model.assay().conc(),
            kon1,
            koff1,
            rmax1,
            kon2,
            koff2,
            rmax2,
        }
    }
}

impl<T: Float> JsonSchema for TwoToOne<T> {
    fn schema_name() -> Cow<'static, str> {
        TwoToOneParameters::<T>::schema_name()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        TwoToOneParameters::<T>::json_schema(generator)
    }
}

/// Heterogeneous two-site binding response for every time point of `t`
///
/// Sum of two drift-free [`crate::binding1to1`] responses sharing `t`, `t0` and `conc`. Each
/// `(kon, koff, rmax)` triple is validated independently, any failure fails the call.
#[allow(clippy::too_many_arguments)]
pub fn binding2to1<'a, T>(
    t: impl Into<ArrayView1<'a, T>>,
    t0: T,
    conc: T,
    kon1: T,
    koff1: T,
    rmax1: T,
    kon2: T,
    koff2: T,
    rmax2: T,
) -> Result<Array1<T>, KineticsError>
where
    T: Float,
{
    let model = TwoToOne::new(
        Assay::new(t0, conc)?,
        BindingSite::from_triple(kon1, koff1, rmax1)?,
        BindingSite::from_triple(kon2, koff2, rmax2)?,
    );
    model.eval(t.into())
}
