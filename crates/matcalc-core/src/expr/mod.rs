//! Single-pass reader and evaluator for matrix expressions.
//!
//! The reader walks a character stream once, shunting-yard style: operands
//! are evaluated as soon as they are recognized and pushed onto an operand
//! stack, binary operators wait on a pending stack until an operator of
//! lower or equal priority, a `)` or the end of the line forces them to be
//! applied. Postfix `^k` and `^T` act on the topmost operand immediately.
//!
//! ```text
//! expr     := term (('+' | '-' | '*') term)*
//! term     := factor
//! factor   := matrix | scalar | identity | '(' expr ')'
//!           | factor '^' integer | factor '^' 'T'
//! matrix   := '[' number (' '+ number)* (';' number (' '+ number)*)* ']'
//! identity := ('E' | 'I') integer
//! ```
//!
//! `*` binds tighter than `+` and `-`; operators of equal priority are
//! left-associative. The whole line must reduce to a single matrix.

mod combine;
mod literal;

use core::iter::Peekable;
use core::str::FromStr;

use log::trace;

pub use combine::{BinaryOp, Operand, combine};

use crate::error::ExprError;
use crate::matrix::Matrix;

use combine::reduce;

/// Evaluate one expression.
///
/// Reading stops at the first newline; anything after it is ignored.
///
/// ```
/// # use matcalc_core::expr::evaluate;
/// let m = evaluate("[1 2;3 4] + [1 0;0 1]").unwrap();
/// assert_eq!(m.as_slice(), &[2.0, 2.0, 3.0, 5.0]);
/// ```
pub fn evaluate(input: &str) -> Result<Matrix<f64>, ExprError> {
    ExpressionReader::new(input.chars()).evaluate()
}

impl FromStr for Matrix<f64> {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        evaluate(s)
    }
}

/// What the previously consumed token was; decides which tokens may
/// follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Matrix,
    Scalar,
    OpenParen,
    CloseParen,
    Operator,
}

impl Marker {
    /// Whether an operand has just been completed, so a binary operator,
    /// `)` or end of line may follow.
    fn ends_operand(self) -> bool {
        matches!(self, Marker::Matrix | Marker::Scalar | Marker::CloseParen)
    }
}

/// Entry on the pending stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    OpenParen { position: usize },
    Operator(BinaryOp),
}

/// Streaming expression reader over any `char` iterator.
///
/// Each call to [`evaluate`](Self::evaluate) consumes one line. Iterating
/// yields one result per non-blank line.
///
/// ```
/// # use matcalc_core::expr::ExpressionReader;
/// let input = "E2 * 3\n\n[1 2] + 1\n([4])^-1\n";
/// let results: Vec<_> = ExpressionReader::new(input.chars()).collect();
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0].as_ref().unwrap().as_slice(), &[3.0, 0.0, 0.0, 3.0]);
/// assert!(results[1].is_err());
/// assert_eq!(results[2].as_ref().unwrap().as_slice(), &[0.25]);
/// ```
pub struct ExpressionReader<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    /// Column of the next character within the current line.
    position: usize,
    previous: Marker,
    operands: Vec<Operand>,
    pending: Vec<Pending>,
}

impl<I: Iterator<Item = char>> ExpressionReader<I> {
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            chars: source.into_iter().peekable(),
            position: 0,
            previous: Marker::OpenParen,
            operands: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Read and evaluate the next line.
    ///
    /// The rest of the line, including its terminator, is consumed either
    /// way, so the reader is left at the start of the following line.
    pub fn evaluate(&mut self) -> Result<Matrix<f64>, ExprError> {
        self.operands.clear();
        self.pending.clear();
        self.previous = Marker::OpenParen;

        let result = self.expression();
        self.skip_line();
        result
    }

    // ------------------------------------------------------------------
    // Character stream
    // ------------------------------------------------------------------

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.position = 0;
        } else {
            self.position += 1;
        }
        Some(c)
    }

    /// Skip whitespace other than the line terminator.
    fn skip_blanks(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace() && c != '\n') {
            self.bump();
        }
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
    }

    // ------------------------------------------------------------------
    // Token dispatch
    // ------------------------------------------------------------------

    fn expression(&mut self) -> Result<Matrix<f64>, ExprError> {
        loop {
            self.skip_blanks();
            let position = self.position;
            let Some(c) = self.peek() else { break };
            trace!("token {c:?} at {position}, previous {:?}", self.previous);
            match c {
                '\n' => break,
                '[' => {
                    self.expect_operand_position(position)?;
                    let m = self.matrix_literal()?;
                    self.push_matrix(m);
                }
                'E' | 'I' => {
                    self.expect_operand_position(position)?;
                    self.bump();
                    let order = self.identity_order(position)?;
                    self.push_matrix(Matrix::identity(order)?);
                }
                '(' => {
                    self.expect_operand_position(position)?;
                    self.bump();
                    self.pending.push(Pending::OpenParen { position });
                    self.previous = Marker::OpenParen;
                }
                ')' => {
                    self.bump();
                    self.close_group(position)?;
                }
                '^' => {
                    self.bump();
                    self.power(position)?;
                }
                '-' if !self.previous.ends_operand() => {
                    self.bump();
                    if !matches!(self.peek(), Some(d) if d.is_ascii_digit() || d == '.') {
                        return Err(ExprError::MissingOperand { position });
                    }
                    let value = self.number(position)?;
                    self.push_scalar(-value);
                }
                d if d.is_ascii_digit() || d == '.' => {
                    self.expect_operand_position(position)?;
                    let value = self.number(position)?;
                    self.push_scalar(value);
                }
                other => match BinaryOp::from_char(other) {
                    Some(op) => {
                        self.bump();
                        self.operator(op, position)?;
                    }
                    None => {
                        return Err(ExprError::UnexpectedCharacter {
                            ch: other,
                            position,
                        });
                    }
                },
            }
        }
        let end = self.position;
        self.finish(end)
    }

    fn expect_operand_position(&self, position: usize) -> Result<(), ExprError> {
        if self.previous.ends_operand() {
            return Err(ExprError::MissingOperator { position });
        }
        Ok(())
    }

    fn push_matrix(&mut self, m: Matrix<f64>) {
        self.operands.push(Operand::Matrix(m));
        self.previous = Marker::Matrix;
    }

    fn push_scalar(&mut self, value: f64) {
        self.operands.push(Operand::Scalar(value));
        self.previous = Marker::Scalar;
    }

    // ------------------------------------------------------------------
    // Operators and grouping
    // ------------------------------------------------------------------

    fn operator(&mut self, op: BinaryOp, position: usize) -> Result<(), ExprError> {
        if !self.previous.ends_operand() {
            return Err(ExprError::MissingOperand { position });
        }
        while let Some(&Pending::Operator(top)) = self.pending.last() {
            if top.priority() < op.priority() {
                break;
            }
            self.pending.pop();
            reduce(&mut self.operands, top)?;
        }
        self.pending.push(Pending::Operator(op));
        self.previous = Marker::Operator;
        Ok(())
    }

    fn close_group(&mut self, position: usize) -> Result<(), ExprError> {
        if !self.previous.ends_operand() {
            return Err(ExprError::MissingOperand { position });
        }
        loop {
            match self.pending.pop() {
                Some(Pending::Operator(op)) => reduce(&mut self.operands, op)?,
                Some(Pending::OpenParen { .. }) => break,
                None => return Err(ExprError::UnmatchedParen { position }),
            }
        }
        self.previous = Marker::CloseParen;
        Ok(())
    }

    /// Postfix `^T` or `^k` on the topmost operand, which must be a matrix.
    fn power(&mut self, position: usize) -> Result<(), ExprError> {
        if !matches!(self.previous, Marker::Matrix | Marker::CloseParen) {
            return Err(ExprError::InvalidPower { position });
        }
        if !matches!(self.operands.last(), Some(Operand::Matrix(_))) {
            return Err(ExprError::InvalidPower { position });
        }
        self.skip_blanks();
        let exponent = if self.peek() == Some('T') {
            self.bump();
            None
        } else {
            Some(self.exponent(position)?)
        };
        let Some(Operand::Matrix(base)) = self.operands.last_mut() else {
            return Err(ExprError::InvalidPower { position });
        };
        *base = match exponent {
            None => base.transpose(),
            Some(k) => base.pow(k)?,
        };
        self.previous = Marker::Matrix;
        Ok(())
    }

    /// Drain every pending operator and return the single remaining matrix.
    fn finish(&mut self, position: usize) -> Result<Matrix<f64>, ExprError> {
        if !self.previous.ends_operand() {
            return Err(ExprError::MissingOperand { position });
        }
        while let Some(pending) = self.pending.pop() {
            match pending {
                Pending::OpenParen { position } => {
                    return Err(ExprError::UnmatchedParen { position });
                }
                Pending::Operator(op) => reduce(&mut self.operands, op)?,
            }
        }
        match (self.operands.pop(), self.operands.is_empty()) {
            (Some(Operand::Matrix(m)), true) => Ok(m),
            (Some(Operand::Scalar(_)), true) => Err(ExprError::ScalarResult),
            _ => Err(ExprError::InsufficientOperands),
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for ExpressionReader<I> {
    type Item = Result<Matrix<f64>, ExprError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.skip_blanks();
            match self.peek()? {
                '\n' => {
                    self.bump();
                }
                _ => return Some(self.evaluate()),
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn eval_slice(input: &str) -> Vec<f64> {
        evaluate(input).unwrap().into_vec()
    }

    #[test]
    fn test_add_literals() {
        let m = evaluate("[1 2;3 4] + [1 0;0 1]").unwrap();
        assert_eq!(m, Matrix::from_rows(&[[2.0, 2.0], [3.0, 5.0]]).unwrap());
    }

    #[test]
    fn test_matrix_times_scalar() {
        assert_eq!(eval_slice("[1 2;3 4]*2"), vec![2.0, 4.0, 6.0, 8.0]);
        assert_eq!(eval_slice("2*[1 2;3 4]"), vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_precedence() {
        // [1] + [2]*[3] = [7], not [9]
        assert_eq!(eval_slice("[1] + [2] * [3]"), vec![7.0]);
        assert_eq!(eval_slice("([1] + [2]) * [3]"), vec![9.0]);
    }

    #[test]
    fn test_left_associative_subtraction() {
        assert_eq!(eval_slice("[10] - [3] - [2]"), vec![5.0]);
        assert_eq!(eval_slice("[10] - ([3] - [2])"), vec![9.0]);
    }

    #[test]
    fn test_scalar_arithmetic_inside() {
        assert_eq!(eval_slice("(2 + 3) * [1 1]"), vec![5.0, 5.0]);
        assert_eq!(eval_slice("[1 1] * (5 - 3 * 2)"), vec![-1.0, -1.0]);
        assert_eq!(eval_slice("[2] * 0.5 * 4"), vec![4.0]);
    }

    #[test]
    fn test_negative_scalars() {
        assert_eq!(eval_slice("-2 * [1 -3]"), vec![-2.0, 6.0]);
        assert_eq!(eval_slice("[1 2] * (-1.5)"), vec![-1.5, -3.0]);
        assert_eq!(eval_slice("[4] - 1 * [1]"), vec![3.0]);
    }

    #[test]
    fn test_transpose() {
        let m = evaluate("[1 2;3 4]^T").unwrap();
        assert_eq!(m, Matrix::from_rows(&[[1.0, 3.0], [2.0, 4.0]]).unwrap());
        assert_eq!(evaluate("[1 2 3]^T").unwrap().shape(), (3, 1));
    }

    #[test]
    fn test_power_and_inverse() {
        assert_eq!(eval_slice("[1 1;1 0]^5"), vec![8.0, 5.0, 5.0, 3.0]);
        assert_eq!(eval_slice("[2 0;0 4]^-1"), vec![0.5, 0.0, 0.0, 0.25]);
        assert_eq!(evaluate("[1 2;3 4]^0").unwrap(), Matrix::identity(2).unwrap());
    }

    #[test]
    fn test_inverse_prints_without_negative_zero() {
        let m = evaluate("[0 1;1 0]^-1").unwrap();
        assert_eq!(m.to_string(), "0.00000 1.00000\n1.00000 0.00000");
    }

    #[test]
    fn test_inverse_of_identity_group() {
        assert_eq!(evaluate("(E3)^-1").unwrap(), Matrix::identity(3).unwrap());
    }

    #[test]
    fn test_power_binds_to_last_operand() {
        // only the right operand is squared
        assert_eq!(eval_slice("[1] + [3]^2"), vec![10.0]);
        assert_eq!(eval_slice("([1] + [3])^2"), vec![16.0]);
    }

    #[test]
    fn test_identity() {
        assert_eq!(evaluate("I2").unwrap(), Matrix::identity(2).unwrap());
        assert_eq!(eval_slice("E2 * 3 + [1 1;1 1]"), vec![4.0, 1.0, 1.0, 4.0]);
    }

    #[test]
    fn test_stops_at_newline() {
        assert_eq!(eval_slice("[1 2]\n[garbage"), vec![1.0, 2.0]);
    }

    #[test]
    fn test_from_str() {
        let m: Matrix<f64> = "[1 2] * [3;4]".parse().unwrap();
        assert_eq!(m.as_slice(), &[11.0]);
    }

    #[test]
    fn test_ragged() {
        assert!(matches!(
            evaluate("[1 2;3]"),
            Err(ExprError::RaggedMatrix {
                row: 1,
                expected: 2,
                got: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_scalar_plus_matrix() {
        assert_eq!(
            evaluate("2 + [1 2;3 4]"),
            Err(ExprError::IncompatibleOperands { op: '+' })
        );
    }

    #[test]
    fn test_missing_operator() {
        assert_eq!(
            evaluate("[1] [2]"),
            Err(ExprError::MissingOperator { position: 4 })
        );
        assert!(matches!(
            evaluate("2 (E2)"),
            Err(ExprError::MissingOperator { .. })
        ));
        assert!(matches!(
            evaluate("(E2) 3"),
            Err(ExprError::MissingOperator { .. })
        ));
    }

    #[test]
    fn test_missing_operand() {
        assert!(matches!(evaluate(""), Err(ExprError::MissingOperand { .. })));
        assert!(matches!(evaluate("[1] +"), Err(ExprError::MissingOperand { .. })));
        assert!(matches!(evaluate("* [1]"), Err(ExprError::MissingOperand { .. })));
        assert!(matches!(evaluate("()"), Err(ExprError::MissingOperand { .. })));
        assert!(matches!(evaluate("[1] + - [1]"), Err(ExprError::MissingOperand { .. })));
    }

    #[test]
    fn test_unmatched_parens() {
        assert_eq!(
            evaluate("([1] + [2]"),
            Err(ExprError::UnmatchedParen { position: 0 })
        );
        assert_eq!(
            evaluate("[1] + [2])"),
            Err(ExprError::UnmatchedParen { position: 9 })
        );
    }

    #[test]
    fn test_invalid_power() {
        assert_eq!(evaluate("2^2"), Err(ExprError::InvalidPower { position: 1 }));
        assert!(matches!(evaluate("^2"), Err(ExprError::InvalidPower { .. })));
        assert!(matches!(evaluate("(2)^2"), Err(ExprError::InvalidPower { .. })));
        assert!(matches!(evaluate("[1] + ^2"), Err(ExprError::InvalidPower { .. })));
    }

    #[test]
    fn test_invalid_exponent() {
        assert!(matches!(evaluate("[1]^x"), Err(ExprError::InvalidExponent { .. })));
        assert!(matches!(evaluate("[1]^"), Err(ExprError::InvalidExponent { .. })));
        assert!(matches!(
            evaluate("[1]^99999999999"),
            Err(ExprError::InvalidExponent { .. })
        ));
    }

    #[test]
    fn test_algebra_errors_surface() {
        assert_eq!(
            evaluate("[1 2;2 4]^-1"),
            Err(ExprError::Matrix(CoreError::Singular))
        );
        assert!(matches!(
            evaluate("[1 2] + [1 2 3]"),
            Err(ExprError::Matrix(CoreError::ShapeMismatch { .. }))
        ));
        assert!(matches!(
            evaluate("[1 2] * [1 2]"),
            Err(ExprError::Matrix(CoreError::IncompatibleShape { .. }))
        ));
        assert!(matches!(
            evaluate("[1 2]^2"),
            Err(ExprError::Matrix(CoreError::NotSquare { .. }))
        ));
        assert!(matches!(
            evaluate("E0"),
            Err(ExprError::Matrix(CoreError::InvalidDimension { .. }))
        ));
    }

    #[test]
    fn test_identity_order_too_large() {
        assert_eq!(
            evaluate("E5000000000"),
            Err(ExprError::Matrix(CoreError::InvalidDimension {
                rows: 5_000_000_000,
                cols: 5_000_000_000
            }))
        );
        assert!(matches!(
            evaluate("I99999999999999999999"),
            Err(ExprError::MissingOrder { .. })
        ));
    }

    #[test]
    fn test_scalar_result_rejected() {
        assert_eq!(evaluate("2 + 3"), Err(ExprError::ScalarResult));
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(
            evaluate("[1] / [2]"),
            Err(ExprError::UnexpectedCharacter {
                ch: '/',
                position: 4
            })
        );
    }

    #[test]
    fn test_reader_recovers_after_error() {
        let mut reader = ExpressionReader::new("[1] +\n[5]\n".chars());
        assert!(reader.evaluate().is_err());
        assert_eq!(reader.evaluate().unwrap().as_slice(), &[5.0]);
    }

    #[test]
    fn test_positions_are_per_line() {
        let mut reader = ExpressionReader::new("[1]\n [1] $".chars());
        reader.evaluate().unwrap();
        assert_eq!(
            reader.evaluate(),
            Err(ExprError::UnexpectedCharacter {
                ch: '$',
                position: 5
            })
        );
    }
}
