use crate::error::KineticsError;
use crate::float_trait::Float;
use crate::kinetics::check;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Association and dissociation rate constants of a single binding site
///
/// Both constants are strictly positive and finite, so the derived equilibrium dissociation
/// constant and the observed rate are always well-defined.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    bound = "T: Float",
    try_from = "RateConstantsParameters<T>",
    into = "RateConstantsParameters<T>"
)]
pub struct RateConstants<T> {
    kon: T,
    koff: T,
}

impl<T> RateConstants<T>
where
    T: Float,
{
    /// `kon` is in M⁻¹s⁻¹, `koff` is in s⁻¹
    pub fn new(kon: T, koff: T) -> Result<Self, KineticsError> {
        Ok(Self {
            kon: check::positive("kon", kon)?,
            koff: check::positive("koff", koff)?,
        })
    }

    #[inline]
    pub fn kon(&self) -> T {
        self.kon
    }

    #[inline]
    pub fn koff(&self) -> T {
        self.koff
    }

    /// Equilibrium dissociation constant, `KD = koff / kon`
    #[inline]
    pub fn kd(&self) -> T {
        self.koff / self.kon
    }

    /// Observed rate of the association phase, `kon * conc + koff`
    #[inline]
    pub fn k_obs(&self, conc: T) -> T {
        self.kon * conc + self.koff
    }

    /// Fraction of sites occupied at equilibrium, `conc / (conc + KD)`
    ///
    /// Zero for zero concentration, `KD` is always positive so there is no singularity.
    #[inline]
    pub fn equilibrium_occupancy(&self, conc: T) -> T {
        conc / (conc + self.kd())
    }

    /// Time for the dissociation phase to release a half of the bound complex, `ln 2 / koff`
    #[inline]
    pub fn half_life(&self) -> T {
        T::LN_2() / self.koff
    }
}

/// Serialized form of [`RateConstants`], validated on conversion
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "RateConstants", deny_unknown_fields)]
pub struct RateConstantsParameters<T> {
    /// Association rate constant, M⁻¹s⁻¹
    pub kon: T,
    /// Dissociation rate constant, s⁻¹
    pub koff: T,
}

impl<T: Float> TryFrom<RateConstantsParameters<T>> for RateConstants<T> {
    type Error = KineticsError;

    fn try_from(p: RateConstantsParameters<T>) -> Result<Self, Self::Error> {
        Self::new(p.kon, p.koff)
    }
}

impl<T: Float> From<RateConstants<T>> for RateConstantsParameters<T> {
    fn from(rates: RateConstants<T>) -> Self {
        Self {
            kon: rates.kon,
            koff: rates.koff,
        }
    }
}

/// A binding site: its rate constants and the maximum response at full saturation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    bound = "T: Float",
    try_from = "BindingSiteParameters<T>",
    into = "BindingSiteParameters<T>"
)]
pub struct BindingSite<T> {
    rates: RateConstants<T>,
    rmax: T,
}

impl<T> BindingSite<T>
where
    T: Float,
{
    pub fn new(rates: RateConstants<T>, rmax: T) -> Result<Self, KineticsError> {
        Ok(Self {
            rates,
            rmax: check::positive("rmax", rmax)?,
        })
    }

    /// Validate and build from the raw `(kon, koff, rmax)` triple
    pub fn from_triple(kon: T, koff: T, rmax: T) -> Result<Self, KineticsError> {
        Self::new(RateConstants::new(kon, koff)?, rmax)
    }

    #[inline]
    pub fn rates(&self) -> &RateConstants<T> {
        &self.rates
    }

    #[inline]
    pub fn rmax(&self) -> T {
        self.rmax
    }

    /// `(kon, koff, rmax)`
    #[inline]
    pub fn triple(&self) -> [T; 3] {
        [self.rates.kon, self.rates.koff, self.rmax]
    }

    /// Plateau the association phase approaches, `conc * rmax / (conc + KD)`
    #[inline]
    pub fn equilibrium_response(&self, conc: T) -> T {
        self.rmax * self.rates.equilibrium_occupancy(conc)
    }
}

/// Serialized form of [`BindingSite`], validated on conversion
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "BindingSite", deny_unknown_fields)]
pub struct BindingSiteParameters<T> {
    /// Association rate constant, M⁻¹s⁻¹
    pub kon: T,
    /// Dissociation rate constant, s⁻¹
    pub koff: T,
    /// Maximum response at full saturation
    pub rmax: T,
}

impl<T: Float> TryFrom<BindingSiteParameters<T>> for BindingSite<T> {
    type Error = KineticsError;

    fn try_from(p: BindingSiteParameters<T>) -> Result<Self, Self::Error> {
        Self::from_triple(p.kon, p.koff, p.rmax)
    }
}

impl<T: Float> From<BindingSite<T>> for BindingSiteParameters<T> {
    fn from(site: BindingSite<T>) -> Self {
        let [kon, koff, rmax] = site.triple();
        Self { kon, koff, rmax }
    }
}
