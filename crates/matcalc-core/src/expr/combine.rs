//! Operands, binary operators, and the rule table that combines two
//! operands under one operator.

use log::trace;

use crate::error::ExprError;
use crate::matrix::Matrix;

/// A realized value on the reader's operand stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Matrix(Matrix<f64>),
    Scalar(f64),
}

impl Operand {
    /// Short name used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Matrix(_) => "matrix",
            Operand::Scalar(_) => "scalar",
        }
    }
}

/// Binary operators accepted between operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl BinaryOp {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Sub),
            '*' => Some(BinaryOp::Mul),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
        }
    }

    /// Binding strength: `*` is 2, `+` and `-` are 1.
    pub fn priority(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul => 2,
        }
    }
}

/// Apply `op` to `left` and `right`.
///
/// | left | right | allowed | result |
/// |------|-------|---------|--------|
/// | matrix | matrix | `+ - *` | matrix |
/// | matrix | scalar | `*` | matrix |
/// | scalar | matrix | `*` | matrix |
/// | scalar | scalar | `+ - *` | scalar |
///
/// Adding or subtracting a scalar and a matrix fails with
/// [`ExprError::IncompatibleOperands`]; shape errors surface as
/// [`ExprError::Matrix`].
pub fn combine(op: BinaryOp, left: Operand, right: Operand) -> Result<Operand, ExprError> {
    trace!("combine {} {} {}", left.kind(), op.symbol(), right.kind());
    match (left, right) {
        (Operand::Matrix(l), Operand::Matrix(r)) => {
            let m = match op {
                BinaryOp::Add => l.add_checked(&r)?,
                BinaryOp::Sub => l.sub_checked(&r)?,
                BinaryOp::Mul => l.matmul(&r)?,
            };
            Ok(Operand::Matrix(m))
        }
        (Operand::Matrix(m), Operand::Scalar(s)) | (Operand::Scalar(s), Operand::Matrix(m)) => {
            if op != BinaryOp::Mul {
                return Err(ExprError::IncompatibleOperands { op: op.symbol() });
            }
            Ok(Operand::Matrix(m * s))
        }
        (Operand::Scalar(l), Operand::Scalar(r)) => Ok(Operand::Scalar(match op {
            BinaryOp::Add => l + r,
            BinaryOp::Sub => l - r,
            BinaryOp::Mul => l * r,
        })),
    }
}

/// Pop the two topmost operands, combine them with `op` and push the
/// single result back.
pub(crate) fn reduce(operands: &mut Vec<Operand>, op: BinaryOp) -> Result<(), ExprError> {
    let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
        return Err(ExprError::InsufficientOperands);
    };
    operands.push(combine(op, left, right)?);
    Ok(())
}
