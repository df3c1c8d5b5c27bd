
use super::operator::Operator;
use super::source::SourceOffset;
use crate::eval::EvaluationError;

use itertools::Itertools;
use serde::{Serialize, Serializer};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// One element of a postfix sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixToken {
  /// A decimal digit. Adjacent digits belong to the same operand.
  Digit(u8),
  /// Ends the operand currently being read, if any.
  Separator,
  Operator(Operator),
}

/// A bracket-free postfix expression, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
  tokens: Vec<PostfixToken>,
}

impl PostfixToken {
  pub fn symbol(self) -> char {
    match self {
      // A digit is always in 0..=9.
      PostfixToken::Digit(d) => char::from(b'0' + d),
      PostfixToken::Separator => ' ',
      PostfixToken::Operator(op) => op.symbol(),
    }
  }
}

impl Postfix {
  pub fn new() -> Self {
    Self::default()
  }

  pub(crate) fn push(&mut self, token: PostfixToken) {
    self.tokens.push(token);
  }

  pub fn last(&self) -> Option<&PostfixToken> {
    self.tokens.last()
  }

  /// The operands and operators of this expression, in order. Digit
  /// runs are joined into a single item and separators are dropped.
  pub fn items(&self) -> Vec<String> {
    let mut items = Vec::new();
    let mut operand = String::new();
    for token in &self.tokens {
      match token {
        PostfixToken::Digit(_) => operand.push(token.symbol()),
        PostfixToken::Separator => {
          if !operand.is_empty() {
            items.push(std::mem::take(&mut operand));
          }
        }
        PostfixToken::Operator(op) => {
          if !operand.is_empty() {
            items.push(std::mem::take(&mut operand));
          }
          items.push(op.to_string());
        }
      }
    }
    if !operand.is_empty() {
      items.push(operand);
    }
    items
  }

  /// Renders every operand and operator separated by exactly one
  /// space, e.g. `3 4 2 * +`.
  pub fn spaced(&self) -> String {
    self.items().into_iter().join(" ")
  }
}

impl FromIterator<PostfixToken> for Postfix {
  fn from_iter<I: IntoIterator<Item = PostfixToken>>(iter: I) -> Self {
    Self { tokens: iter.into_iter().collect() }
  }
}

impl<'a> IntoIterator for &'a Postfix {
  type Item = &'a PostfixToken;
  type IntoIter = std::slice::Iter<'a, PostfixToken>;

  fn into_iter(self) -> Self::IntoIter {
    self.tokens.iter()
  }
}

/// Writes the raw postfix buffer, one character per token, e.g.
/// `3 4 2*+`.
impl Display for Postfix {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    for token in &self.tokens {
      write!(f, "{}", token.symbol())?;
    }
    Ok(())
  }
}

/// Reads postfix text such as `3 4 2*+`, one token per character.
/// Any whitespace character is a separator.
impl FromStr for Postfix {
  type Err = EvaluationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.chars()
      .enumerate()
      .map(|(i, c)| {
        if let Some(digit) = c.to_digit(10) {
          Ok(PostfixToken::Digit(digit as u8))
        } else if c.is_whitespace() {
          Ok(PostfixToken::Separator)
        } else if let Some(op) = Operator::from_char(c) {
          Ok(PostfixToken::Operator(op))
        } else {
          Err(EvaluationError::UnknownOperator { symbol: c, position: SourceOffset(i) })
        }
      })
      .collect()
  }
}

impl Serialize for Postfix {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}
