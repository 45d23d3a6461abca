pub use crate::float_trait::Float;
pub use crate::models::ResponseModelTrait;
pub use crate::nl_fit::FitModelTrait;
