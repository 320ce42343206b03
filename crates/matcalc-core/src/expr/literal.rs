//! Scanning of numbers, integer suffixes and bracketed matrix literals.

use log::trace;

use super::ExpressionReader;
use crate::error::ExprError;
use crate::matrix::Matrix;

fn starts_number(c: Option<char>) -> bool {
    matches!(c, Some(d) if d.is_ascii_digit() || d == '.')
}

impl<I: Iterator<Item = char>> ExpressionReader<I> {
    /// Collect characters while `accept` holds.
    fn take_while(&mut self, mut accept: impl FnMut(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if !accept(c) {
                break;
            }
            text.push(c);
            self.bump();
        }
        text
    }

    /// Unsigned decimal `digits [ '.' digits ]`; either side of the point
    /// may be empty but not both.
    pub(super) fn number(&mut self, start: usize) -> Result<f64, ExprError> {
        let mut seen_point = false;
        let text = self.take_while(|c| {
            if c == '.' && !seen_point {
                seen_point = true;
                return true;
            }
            c.is_ascii_digit()
        });
        text.parse::<f64>()
            .map_err(|_| ExprError::MissingScalar { position: start })
    }

    /// Order following `E` or `I`.
    pub(super) fn identity_order(&mut self, start: usize) -> Result<usize, ExprError> {
        let digits = self.take_while(|c| c.is_ascii_digit());
        digits
            .parse::<usize>()
            .map_err(|_| ExprError::MissingOrder { position: start })
    }

    /// Optionally signed integer following `^`.
    pub(super) fn exponent(&mut self, start: usize) -> Result<i32, ExprError> {
        let mut text = String::new();
        if let Some(sign @ ('-' | '+')) = self.peek() {
            text.push(sign);
            self.bump();
        }
        text.push_str(&self.take_while(|c| c.is_ascii_digit()));
        text.parse::<i32>()
            .map_err(|_| ExprError::InvalidExponent { position: start })
    }

    /// `[` rows separated by `;`, entries separated by blanks, `]`.
    ///
    /// Every row must have as many entries as the first. The literal must
    /// close on the same line.
    pub(super) fn matrix_literal(&mut self) -> Result<Matrix<f64>, ExprError> {
        let start = self.position;
        self.bump();

        let mut data = Vec::new();
        let mut cols: Option<usize> = None;
        let mut rows = 0;
        let mut in_row = 0;

        loop {
            self.skip_blanks();
            let position = self.position;
            match self.peek() {
                None | Some('\n') => return Err(ExprError::UnterminatedMatrix { position: start }),
                Some(c @ (';' | ']')) => {
                    self.bump();
                    match cols {
                        None => cols = Some(in_row),
                        Some(expected) if expected != in_row => {
                            return Err(ExprError::RaggedMatrix {
                                row: rows,
                                expected,
                                got: in_row,
                                position,
                            });
                        }
                        Some(_) => {}
                    }
                    rows += 1;
                    in_row = 0;
                    if c == ']' {
                        break;
                    }
                }
                Some('-') => {
                    self.bump();
                    if !starts_number(self.peek()) {
                        return Err(ExprError::MissingScalar { position });
                    }
                    data.push(-self.number(position)?);
                    in_row += 1;
                }
                c if starts_number(c) => {
                    data.push(self.number(position)?);
                    in_row += 1;
                }
                Some(ch) => return Err(ExprError::UnexpectedCharacter { ch, position }),
            }
        }

        let cols = cols.unwrap_or(0);
        trace!("matrix literal {rows}x{cols} at {start}");
        Ok(Matrix::from_vec(rows, cols, data)?)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn literal(input: &str) -> Result<Matrix<f64>, ExprError> {
        ExpressionReader::new(input.chars()).matrix_literal()
    }

    #[test]
    fn test_literal_shape() {
        let m = literal("[1 2 3;4 5 6]").unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_literal_blanks_and_signs() {
        let m = literal("[  1.5  -2 ;\t.25 3. ]").unwrap();
        assert_eq!(m.as_slice(), &[1.5, -2.0, 0.25, 3.0]);
    }

    #[test]
    fn test_literal_column() {
        assert_eq!(literal("[1;2;3]").unwrap().shape(), (3, 1));
    }

    #[test]
    fn test_literal_ragged() {
        assert_eq!(
            literal("[1 2;3 4 5]"),
            Err(ExprError::RaggedMatrix {
                row: 1,
                expected: 2,
                got: 3,
                position: 10
            })
        );
    }

    #[test]
    fn test_literal_unterminated() {
        assert_eq!(
            literal("[1 2"),
            Err(ExprError::UnterminatedMatrix { position: 0 })
        );
        assert_eq!(
            literal("[1 2\n]"),
            Err(ExprError::UnterminatedMatrix { position: 0 })
        );
    }

    #[test]
    fn test_literal_empty() {
        assert!(matches!(
            literal("[]"),
            Err(ExprError::Matrix(CoreError::InvalidDimension { .. }))
        ));
    }

    #[test]
    fn test_literal_bad_entries() {
        assert_eq!(
            literal("[1 x]"),
            Err(ExprError::UnexpectedCharacter { ch: 'x', position: 3 })
        );
        assert_eq!(literal("[1 - 2]"), Err(ExprError::MissingScalar { position: 3 }));
        assert_eq!(literal("[.]"), Err(ExprError::MissingScalar { position: 1 }));
    }

    #[test]
    fn test_number_stops_at_second_point() {
        let mut reader = ExpressionReader::new("1.5.2".chars());
        assert_eq!(reader.number(0).unwrap(), 1.5);
        assert_eq!(reader.peek(), Some('.'));
    }

    #[test]
    fn test_identity_order_and_exponent() {
        let mut reader = ExpressionReader::new("12x".chars());
        assert_eq!(reader.identity_order(0).unwrap(), 12);
        let mut reader = ExpressionReader::new("x".chars());
        assert_eq!(reader.identity_order(0), Err(ExprError::MissingOrder { position: 0 }));
        let mut reader = ExpressionReader::new("-3".chars());
        assert_eq!(reader.exponent(0).unwrap(), -3);
        let mut reader = ExpressionReader::new("-".chars());
        assert_eq!(reader.exponent(0), Err(ExprError::InvalidExponent { position: 0 }));
    }
}
