use crate::error::KineticsError;
use crate::float_trait::Float;
use crate::kinetics::check;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Experimental set-up shared by every binding site on the sensor
///
/// Association runs on `[0, t0]` with analyte at `conc`, dissociation starts right after `t0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Float", try_from = "AssayParameters<T>", into = "AssayParameters<T>")]
pub struct Assay<T> {
    t0: T,
    conc: T,
}

impl<T> Assay<T>
where
    T: Float,
{
    /// `t0` is the dissociation onset in seconds, `conc` is the analyte concentration in M
    ///
    /// Zero concentration is accepted and gives a flat (zero-binding) trace.
    pub fn new(t0: T, conc: T) -> Result<Self, KineticsError> {
        Ok(Self {
            t0: check::non_negative("t0", t0)?,
            conc: check::non_negative("conc", conc)?,
        })
    }

    #[inline]
    pub fn t0(&self) -> T {
        self.t0
    }

    #[inline]
    pub fn conc(&self) -> T {
        self.conc
    }

    /// Is `t` in the association phase?
    #[inline]
    pub fn is_association(&self, t: T) -> bool {
        t <= self.t0
    }
}

/// Serialized form of [`Assay`], validated on conversion
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Assay", deny_unknown_fields)]
pub struct AssayParameters<T> {
    /// Dissociation onset, s
    pub t0: T,
    /// Analyte concentration, M
    pub conc: T,
}

impl<T: Float> TryFrom<AssayParameters<T>> for Assay<T> {
    type Error = KineticsError;

    fn try_from(p: AssayParameters<T>) -> Result<Self, Self::Error> {
        Self::new(p.t0, p.conc)
    }
}

impl<T: Float> From<Assay<T>> for AssayParameters<T> {
    fn from(assay: Assay<T>) -> Self {
        Self {
            t0: assay.t0,
            conc: assay.conc,
        }
    }
}
