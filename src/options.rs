use crate::error::KineticsError;
use crate::float_trait::Float;
use crate::kinetics::check;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Optional arguments of the 1:1 response
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float", default, deny_unknown_fields)]
#[schemars(bound = "T: Float")]
pub struct ResponseOptions<T> {
    /// Linear baseline drift in response units per second, zero by default
    ///
    /// Drift accrues during the association phase only: the dissociation phase decays the
    /// association value at `t0` with its accumulated drift offset and adds no more drift.
    pub drift: T,
}

impl<T> ResponseOptions<T>
where
    T: Float,
{
    pub fn new(drift: T) -> Self {
        Self { drift }
    }

    pub fn default_drift() -> T {
        T::zero()
    }

    pub(crate) fn validated_drift(&self) -> Result<T, KineticsError> {
        check::finite("drift", self.drift)
    }
}

impl<T> Default for ResponseOptions<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::new(Self::default_drift())
    }
}

/// Optional arguments of [`crate::tteq`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float", default, deny_unknown_fields)]
#[schemars(bound = "T: Float")]
pub struct EquilibriumOptions<T> {
    /// Target fraction of equilibrium, 0.95 by default, must be strictly between 0 and 1
    pub threshold: T,
}

impl<T> EquilibriumOptions<T>
where
    T: Float,
{
    pub fn new(threshold: T) -> Self {
        Self { threshold }
    }

    pub fn default_threshold() -> T {
        T::default_threshold()
    }
}

impl<T> Default for EquilibriumOptions<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::new(Self::default_threshold())
    }
}
