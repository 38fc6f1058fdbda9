//! Error types for the calculator.

/// Result type for calculator operations.
pub type Result<T> = std::result::Result<T, CalculatorError>;

/// Error constants for rejected inputs.
pub mod errmsg {
    pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";
}

/// Errors that can occur while evaluating an operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculatorError {
    /// A precondition on an operand was violated (e.g. a zero divisor).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation selector did not name a known operation.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

impl CalculatorError {
    pub(crate) fn divide_by_zero() -> Self {
        CalculatorError::InvalidArgument(errmsg::DIVIDE_BY_ZERO.to_string())
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        match self {
            CalculatorError::InvalidArgument(msg) => msg,
            CalculatorError::UnknownOperation(msg) => msg,
        }
    }

    /// Returns true if this is an "invalid argument" error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CalculatorError::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_zero_display() {
        let err = CalculatorError::divide_by_zero();
        assert_eq!(err.to_string(), "invalid argument: Cannot divide by zero");
    }

    #[test]
    fn test_divide_by_zero_message() {
        let err = CalculatorError::divide_by_zero();
        assert_eq!(err.message(), errmsg::DIVIDE_BY_ZERO);
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_unknown_operation_display() {
        let err = CalculatorError::UnknownOperation("modulo".to_string());
        assert_eq!(err.to_string(), "unknown operation: modulo");
        assert_eq!(err.message(), "modulo");
        assert!(!err.is_invalid_argument());
    }
}
