use thiserror::Error;

/// Errors raised by matrix construction and algebra.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A matrix was requested with a zero row or column count.
    #[error("invalid dimension {rows}x{cols}: both must be at least 1")]
    InvalidDimension { rows: usize, cols: usize },

    /// Element-wise operation on operands of different shapes.
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Matrix product where the left column count differs from the right
    /// row count.
    #[error("incompatible shapes for multiplication: {left:?} * {right:?}")]
    IncompatibleShape {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Operation defined only for square matrices.
    #[error("matrix is {rows}x{cols}, expected a square matrix")]
    NotSquare { rows: usize, cols: usize },

    /// Determinant is exactly zero.
    #[error("matrix is singular")]
    Singular,

    /// Row or column index outside the matrix.
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Flat data does not fill the requested shape.
    #[error("expected {expected} elements, got {got}")]
    DataLength { expected: usize, got: usize },

    /// Row slices of different lengths.
    #[error("row {row} has {got} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Convenience alias used throughout the algebra engine.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while reading and evaluating a matrix expression.
///
/// Positions are zero-based character offsets into the expression line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error(transparent)]
    Matrix(#[from] CoreError),

    #[error("ragged matrix literal at {position}: row {row} has {got} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        got: usize,
        position: usize,
    },

    #[error("matrix literal opened at {position} is never closed")]
    UnterminatedMatrix { position: usize },

    #[error("unexpected character {ch:?} at {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("missing operator before position {position}")]
    MissingOperator { position: usize },

    #[error("missing operand at position {position}")]
    MissingOperand { position: usize },

    #[error("malformed number at position {position}")]
    MissingScalar { position: usize },

    #[error("identity matrix at {position} needs an order, e.g. E3")]
    MissingOrder { position: usize },

    #[error("unmatched parenthesis at {position}")]
    UnmatchedParen { position: usize },

    #[error("'^' at {position} must follow a matrix operand")]
    InvalidPower { position: usize },

    #[error("'^' at {position} must be followed by an integer or 'T'")]
    InvalidExponent { position: usize },

    #[error("operator '{op}' cannot combine a matrix with a scalar")]
    IncompatibleOperands { op: char },

    #[error("not enough operands for pending operator")]
    InsufficientOperands,

    #[error("expression evaluates to a scalar, expected a matrix")]
    ScalarResult,
}
