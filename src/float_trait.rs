use conv::prelude::*;
use ndarray::NdFloat;
use num_traits::{FloatConst, float::Float as NumFloat};
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Display, LowerExp};
use std::iter::Sum;

/// Floating-point number the response models are evaluated with
///
/// Implemented for [`f32`] and [`f64`]
pub trait Float:
    'static
    + Sized
    + NumFloat
    + FloatConst
    + NdFloat
    + Sum
    + Debug
    + Display
    + LowerExp
    + ApproxFrom<usize>
    + Into<f64>
    + Send
    + Sync
    + Serialize
    + DeserializeOwned
    + JsonSchema
{
    /// Default fraction of equilibrium used by [`crate::tteq`]
    fn default_threshold() -> Self;
}

impl Float for f32 {
    #[inline]
    fn default_threshold() -> Self {
        0.95
    }
}

impl Float for f64 {
    #[inline]
    fn default_threshold() -> Self {
        0.95
    }
}
