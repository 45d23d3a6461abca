//! Validated kinetic parameters shared by all response models

mod assay;
pub use assay::{Assay, AssayParameters};

pub(crate) mod check;

mod rate_constants;
pub use rate_constants::{
    BindingSite, BindingSiteParameters, RateConstants, RateConstantsParameters,
};
