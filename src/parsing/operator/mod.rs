
//! Character classification for the five binary operators and the
//! three bracket kinds.

mod bracket;
mod precedence;

pub use bracket::BracketKind;
pub use precedence::Precedence;

use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// One of the five supported binary operators. Every operator is
/// left-associative, including [`Operator::Power`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
  Add,
  Subtract,
  Multiply,
  Divide,
  Power,
}

/// Failure of a single arithmetic step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
  #[error("division by zero")]
  DivisionByZero,
  #[error("integer overflow")]
  Overflow,
}

impl Operator {
  pub const ALL: [Operator; 5] = [
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
    Operator::Power,
  ];

  pub fn from_char(c: char) -> Option<Operator> {
    match c {
      '+' => Some(Operator::Add),
      '-' => Some(Operator::Subtract),
      '*' => Some(Operator::Multiply),
      '/' => Some(Operator::Divide),
      '^' => Some(Operator::Power),
      _ => None,
    }
  }

  pub const fn symbol(self) -> char {
    match self {
      Operator::Add => '+',
      Operator::Subtract => '-',
      Operator::Multiply => '*',
      Operator::Divide => '/',
      Operator::Power => '^',
    }
  }

  pub const fn precedence(self) -> Precedence {
    match self {
      Operator::Add | Operator::Subtract => Precedence::ADDITIVE,
      Operator::Multiply | Operator::Divide => Precedence::MULTIPLICATIVE,
      Operator::Power => Precedence::EXPONENTIAL,
    }
  }

  /// Applies the operator to `left` and `right`, in that order. All
  /// arithmetic is checked; division truncates toward zero.
  pub fn apply(self, left: i64, right: i64) -> Result<i64, ArithmeticError> {
    match self {
      Operator::Add => left.checked_add(right).ok_or(ArithmeticError::Overflow),
      Operator::Subtract => left.checked_sub(right).ok_or(ArithmeticError::Overflow),
      Operator::Multiply => left.checked_mul(right).ok_or(ArithmeticError::Overflow),
      Operator::Divide => {
        if right == 0 {
          return Err(ArithmeticError::DivisionByZero);
        }
        left.checked_div(right).ok_or(ArithmeticError::Overflow)
      }
      Operator::Power => power(left, right),
    }
  }
}

/// Integer exponentiation. Negative exponents produce the real result
/// truncated toward zero.
fn power(base: i64, exponent: i64) -> Result<i64, ArithmeticError> {
  if exponent < 0 {
    return match base {
      0 => Err(ArithmeticError::DivisionByZero),
      1 => Ok(1),
      -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
      _ => Ok(0),
    };
  }
  match u32::try_from(exponent) {
    Ok(exponent) => base.checked_pow(exponent).ok_or(ArithmeticError::Overflow),
    // Only trivial bases survive an exponent this large.
    Err(_) => match base {
      0 | 1 => Ok(base),
      -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
      _ => Err(ArithmeticError::Overflow),
    },
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

/// True for the five operator characters `+ - * / ^`.
pub fn is_operator(c: char) -> bool {
  Operator::from_char(c).is_some()
}

/// The precedence of an arbitrary character. Anything that is not an
/// operator (brackets in particular) has precedence zero.
pub fn precedence(c: char) -> u8 {
  Operator::from_char(c).map_or(Precedence::MIN, Operator::precedence).value()
}

/// The opening bracket paired with the closing bracket `close`, or
/// `None` if `close` is not a closing bracket.
pub fn matching_open(close: char) -> Option<char> {
  BracketKind::from_close(close).map(BracketKind::open_char)
}
