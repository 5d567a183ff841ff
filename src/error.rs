use thiserror::Error;

/// Errors caused by operand shapes that don't fit an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The inner dimensions of a matrix product don't agree.
    #[error("Can't multiply matrices with dimensions {lhs:?} and {rhs:?}")]
    Multiply {
        /// Shape of the left operand.
        lhs: (usize, usize),
        /// Shape of the right operand.
        rhs: (usize, usize),
    },

    /// A row list is not rectangular.
    #[error("row {row} has length {len}, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}
