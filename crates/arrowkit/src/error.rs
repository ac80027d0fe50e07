//! Error types for the utilities library.

/// Errors produced by the fallible utilities.
///
/// Every other operation in the crate is total over its inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UtilError {
    /// `divide` was called with a zero divisor.
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: f64 },

    /// A fold without a seed was applied to an empty sequence.
    #[error("reduce of empty sequence with no initial value")]
    EmptyReduce,

    /// A checked integer operation exceeded its result type.
    ///
    /// `input` is the operand the operation was applied to.
    #[error("{operation}({input}) overflows")]
    Overflow { operation: &'static str, input: i128 },
}

impl UtilError {
    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            UtilError::DivisionByZero { .. } => "division-by-zero",
            UtilError::EmptyReduce => "empty-reduce",
            UtilError::Overflow { .. } => "overflow",
        }
    }
}
