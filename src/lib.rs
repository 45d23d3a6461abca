#![doc = include_str!("../README.md")]


mod equilibrium;
pub use equilibrium::{dissociation_time, equilibrium_time, tteq};

mod error;
pub use error::{Constraint, KineticsError, ShapeProblem};

mod float_trait;
pub use float_trait::Float;

pub mod kinetics;
pub use kinetics::{Assay, BindingSite, RateConstants};

pub mod models;
pub use models::{
    OneToOne, ResponseModel, ResponseModelTrait, TwoToOne, binding1to1, binding2to1,
};

pub mod nl_fit;
pub use nl_fit::{FitModelTrait, ObservedTrace};

mod options;
pub use options::{EquilibriumOptions, ResponseOptions};

pub mod prelude;

pub use ndarray;
