/// Error returned by the response models, equilibrium estimators and fit helpers
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum KineticsError {
    #[error("parameter {name} = {value:e} is invalid, it must be {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: Constraint,
    },

    #[error("{what} is not a usable numeric sequence: {problem}")]
    ShapeMismatch {
        what: &'static str,
        problem: ShapeProblem,
    },
}

/// Domain a scalar parameter must belong to
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq, Hash)]
pub enum Constraint {
    #[error("finite")]
    Finite,

    #[error("positive")]
    Positive,

    #[error("non-negative")]
    NonNegative,

    #[error("strictly between zero and unity")]
    OpenUnitInterval,
}

/// Why a sequence argument was rejected
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq, Hash)]
pub enum ShapeProblem {
    #[error("length {actual} differs from the expected length {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("element {index} is not finite")]
    NonFinite { index: usize },

    #[error("element {index} is negative")]
    Negative { index: usize },
}

impl KineticsError {
    pub(crate) fn invalid(name: &'static str, value: impl Into<f64>, constraint: Constraint) -> Self {
        let value = value.into();
        tracing::debug!(parameter = name, value, %constraint, "rejected kinetic parameter");
        Self::InvalidParameter {
            name,
            value,
            constraint,
        }
    }

    pub(crate) fn shape(what: &'static str, problem: ShapeProblem) -> Self {
        tracing::debug!(input = what, %problem, "rejected input sequence");
        Self::ShapeMismatch { what, problem }
    }

    pub(crate) fn length_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::shape(what, ShapeProblem::LengthMismatch { expected, actual })
    }

    /// Is it an [`KineticsError::InvalidParameter`] error?
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Is it an [`KineticsError::ShapeMismatch`] error?
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message() {
        let err = KineticsError::invalid("kon", -1.0, Constraint::Positive);
        assert_eq!(
            err.to_string(),
            "parameter kon = -1e0 is invalid, it must be positive"
        );
        assert!(err.is_invalid_parameter());
        assert!(!err.is_shape_mismatch());
    }

    #[test]
    fn shape_mismatch_message() {
        let err = KineticsError::length_mismatch("output buffer", 3, 2);
        assert_eq!(
            err.to_string(),
            "output buffer is not a usable numeric sequence: length 2 differs from the expected length 3"
        );
        assert!(err.is_shape_mismatch());
    }
}
