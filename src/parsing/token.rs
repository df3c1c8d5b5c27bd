
use super::operator::{BracketKind, Operator};
use super::source::SourceOffset;

use std::fmt::{self, Display, Formatter};

/// One lexical unit of an infix expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
  /// A single decimal digit, `0` to `9`.
  Operand(u8),
  Operator(Operator),
  OpenBracket(BracketKind),
  CloseBracket(BracketKind),
}

impl Token {
  /// Classifies a single character. Characters that play no part in
  /// an expression (whitespace included) produce `None`.
  pub fn classify(c: char) -> Option<Token> {
    if let Some(digit) = c.to_digit(10) {
      // to_digit(10) is at most 9.
      Some(Token::Operand(digit as u8))
    } else if let Some(op) = Operator::from_char(c) {
      Some(Token::Operator(op))
    } else if let Some(kind) = BracketKind::from_open(c) {
      Some(Token::OpenBracket(kind))
    } else {
      BracketKind::from_close(c).map(Token::CloseBracket)
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Token::Operand(d) => write!(f, "{d}"),
      Token::Operator(op) => write!(f, "{op}"),
      Token::OpenBracket(kind) => write!(f, "{}", kind.open_char()),
      Token::CloseBracket(kind) => write!(f, "{}", kind.close_char()),
    }
  }
}

/// Scans `input` one character at a time, pairing every recognized
/// token with its character position. Unrecognized characters are
/// skipped but still advance the position.
pub fn tokenize(input: &str) -> impl Iterator<Item = (SourceOffset, Token)> + '_ {
  input.chars()
    .enumerate()
    .filter_map(|(i, c)| Token::classify(c).map(|token| (SourceOffset(i), token)))
}
