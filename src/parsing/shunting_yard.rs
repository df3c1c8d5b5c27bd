
//! Infix to postfix conversion.

use super::operator::{BracketKind, Operator, Precedence};
use super::postfix::{Postfix, PostfixToken};
use super::source::SourceOffset;
use super::token::{tokenize, Token};
use crate::config::{BracketMatching, Options};
use crate::stack::Stack;

use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConversionError {
  #[error("Mismatched brackets: '{close}' at position {position} has no matching opening bracket.")]
  MismatchedBrackets {
    close: char,
    position: SourceOffset,
  },
  #[error("Mismatched brackets: '{close}' at position {position} cannot close '{open}' opened at position {opened_at}.")]
  BracketKindMismatch {
    open: char,
    opened_at: SourceOffset,
    close: char,
    position: SourceOffset,
  },
  #[error("Unclosed brackets: '{open}' at position {position} is never closed.")]
  UnclosedBrackets {
    open: char,
    position: SourceOffset,
  },
  #[error("Expression is {length} characters long, but at most {max} are allowed.")]
  ExpressionTooLong {
    length: usize,
    max: usize,
  },
}

/// Anything that may sit on the operator stack. Operands never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StackEntry {
  Operator(Operator),
  OpenBracket(BracketKind),
}

#[derive(Clone, Copy, Debug)]
struct OpStackValue {
  entry: StackEntry,
  position: SourceOffset,
}

/// State of a single conversion. Dropped as soon as the conversion
/// finishes or fails.
#[derive(Debug)]
struct ShuntingYard<'a> {
  options: &'a Options,
  operator_stack: Stack<OpStackValue>,
  output: Postfix,
  /// Position of the most recent operand digit, used to tell digit
  /// runs apart.
  last_digit_at: Option<SourceOffset>,
}

impl StackEntry {
  fn precedence(self) -> Precedence {
    match self {
      StackEntry::Operator(op) => op.precedence(),
      StackEntry::OpenBracket(_) => Precedence::MIN,
    }
  }
}

/// Converts an infix expression to postfix with the default
/// [`Options`].
pub fn to_postfix(infix: &str) -> Result<Postfix, ConversionError> {
  convert(infix, &Options::default())
}

/// Converts an infix expression to postfix.
///
/// Digits, operators `+ - * / ^` and the brackets `() {} []` are
/// recognized; every other character is skipped. All operators are
/// left-associative, so `2^3^2` becomes `2 3^ 2^`. Consecutive digits
/// form a single operand.
pub fn convert(infix: &str, options: &Options) -> Result<Postfix, ConversionError> {
  let length = check_length(infix, options)?;
  debug!(length, brackets = ?options.brackets, "converting infix expression");

  let mut yard = ShuntingYard::new(options);
  for (position, token) in tokenize(infix) {
    trace!(%token, %position, depth = yard.operator_stack.len(), "scanned token");
    yard.feed(token, position)?;
  }
  let postfix = yard.finish()?;
  debug!(%postfix, "converted to postfix");
  Ok(postfix)
}

/// Rejects input longer than `options.max_length` characters. Returns
/// the length in characters otherwise.
pub fn check_length(input: &str, options: &Options) -> Result<usize, ConversionError> {
  let length = input.chars().count();
  if length > options.max_length {
    return Err(ConversionError::ExpressionTooLong { length, max: options.max_length });
  }
  Ok(length)
}

impl<'a> ShuntingYard<'a> {
  fn new(options: &'a Options) -> Self {
    Self {
      options,
      operator_stack: Stack::new(),
      output: Postfix::new(),
      last_digit_at: None,
    }
  }

  fn feed(&mut self, token: Token, position: SourceOffset) -> Result<(), ConversionError> {
    match token {
      Token::Operand(digit) => {
        self.operand_digit(digit, position);
      }
      Token::OpenBracket(kind) => {
        self.operator_stack.push(OpStackValue { entry: StackEntry::OpenBracket(kind), position });
      }
      Token::CloseBracket(kind) => {
        self.close_bracket(kind, position)?;
      }
      Token::Operator(op) => {
        self.operator(op, position);
      }
    }
    Ok(())
  }

  fn operand_digit(&mut self, digit: u8, position: SourceOffset) {
    let continues_run = self.last_digit_at.is_some_and(|last| last + 1 == position);
    if !continues_run && matches!(self.output.last(), Some(PostfixToken::Digit(_))) {
      // Keep `1 2` or `3(4)` from fusing into a single operand.
      self.output.push(PostfixToken::Separator);
    }
    self.output.push(PostfixToken::Digit(digit));
    self.last_digit_at = Some(position);
  }

  fn close_bracket(&mut self, kind: BracketKind, position: SourceOffset) -> Result<(), ConversionError> {
    while let Ok(top) = self.operator_stack.pop() {
      match top.entry {
        StackEntry::Operator(op) => {
          self.output.push(PostfixToken::Operator(op));
        }
        StackEntry::OpenBracket(open) => {
          if self.options.brackets == BracketMatching::Strict && open != kind {
            return Err(ConversionError::BracketKindMismatch {
              open: open.open_char(),
              opened_at: top.position,
              close: kind.close_char(),
              position,
            });
          }
          trace!(open = %open.open_char(), close = %kind.close_char(), "matched brackets");
          return Ok(());
        }
      }
    }
    Err(ConversionError::MismatchedBrackets { close: kind.close_char(), position })
  }

  fn operator(&mut self, op: Operator, position: SourceOffset) {
    // Equal precedence pops: every operator is left-associative.
    while let Some(top) = self.operator_stack.peek() {
      if top.entry.precedence() < op.precedence() {
        break;
      }
      // Open brackets rank below every operator, so this always matches.
      let StackEntry::Operator(top_op) = top.entry else { break };
      self.operator_stack.pop_and_discard();
      self.output.push(PostfixToken::Operator(top_op));
    }
    self.output.push(PostfixToken::Separator);
    self.operator_stack.push(OpStackValue { entry: StackEntry::Operator(op), position });
  }

  fn finish(mut self) -> Result<Postfix, ConversionError> {
    while let Ok(top) = self.operator_stack.pop() {
      match top.entry {
        StackEntry::Operator(op) => {
          self.output.push(PostfixToken::Operator(op));
        }
        StackEntry::OpenBracket(kind) => {
          return Err(ConversionError::UnclosedBrackets { open: kind.open_char(), position: top.position });
        }
      }
    }
    Ok(self.output)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use pretty_assertions::assert_eq;

  fn spaced(infix: &str) -> String {
    to_postfix(infix).unwrap().spaced()
  }

  fn raw(infix: &str) -> String {
    to_postfix(infix).unwrap().to_string()
  }

  fn strict() -> Options {
    Options::default().with_brackets(BracketMatching::Strict)
  }

  #[test]
  fn test_precedence_ordering() {
    assert_eq!(spaced("3+4*2"), "3 4 2 * +");
    assert_eq!(raw("3+4*2"), "3 4 2*+");
    assert_eq!(spaced("3*4+2"), "3 4 * 2 +");
  }

  #[test]
  fn test_brackets_override_precedence() {
    assert_eq!(spaced("(1+2)*3"), "1 2 + 3 *");
    assert_eq!(raw("(1+2)*3"), "1 2+ 3*");
    assert_eq!(spaced("{1+2}*[3-4]"), "1 2 + 3 4 - *");
  }

  #[test]
  fn test_all_operators_left_associative() {
    assert_eq!(spaced("1-2-3"), "1 2 - 3 -");
    assert_eq!(spaced("8/4/2"), "8 4 / 2 /");
    assert_eq!(spaced("2^3^2"), "2 3 ^ 2 ^");
    assert_eq!(raw("2^3^2"), "2 3^ 2^");
  }

  #[test]
  fn test_power_binds_tightest() {
    assert_eq!(spaced("2*3^2"), "2 3 2 ^ *");
    assert_eq!(spaced("2^3*2"), "2 3 ^ 2 *");
  }

  #[test]
  fn test_multi_digit_operands() {
    assert_eq!(spaced("12+345"), "12 345 +");
    assert_eq!(raw("12+345"), "12 345+");
  }

  #[test]
  fn test_separated_digits_stay_separate() {
    assert_eq!(spaced("1 2"), "1 2");
    assert_eq!(spaced("3(4)"), "3 4");
  }

  #[test]
  fn test_whitespace_and_unknown_characters_skipped() {
    assert_eq!(raw(" 1 + 2 "), "1 2+");
    assert_eq!(spaced("1 + x2"), "1 2 +");
  }

  #[test]
  fn test_empty_input() {
    assert_eq!(to_postfix(""), Ok(Postfix::new()));
    assert_eq!(to_postfix("   "), Ok(Postfix::new()));
  }

  #[test]
  fn test_unmatched_close_bracket() {
    assert_eq!(
      to_postfix("1+2)"),
      Err(ConversionError::MismatchedBrackets { close: ')', position: SourceOffset(3) }),
    );
    assert_eq!(
      to_postfix("]"),
      Err(ConversionError::MismatchedBrackets { close: ']', position: SourceOffset(0) }),
    );
  }

  #[test]
  fn test_unclosed_bracket() {
    assert_eq!(
      to_postfix("(1+2"),
      Err(ConversionError::UnclosedBrackets { open: '(', position: SourceOffset(0) }),
    );
    assert_eq!(
      to_postfix("[1*{2+3}"),
      Err(ConversionError::UnclosedBrackets { open: '[', position: SourceOffset(0) }),
    );
  }

  #[test]
  fn test_positional_bracket_matching() {
    assert_eq!(spaced("(3+4]"), "3 4 +");
    assert_eq!(spaced("(3+4)"), "3 4 +");
    assert_eq!(spaced("(2*[3)+4]"), "2 3 * 4 +");
  }

  #[test]
  fn test_strict_bracket_matching() {
    assert_eq!(convert("{(3+4)}", &strict()).unwrap().spaced(), "3 4 +");
    assert_eq!(
      convert("(3+4]", &strict()),
      Err(ConversionError::BracketKindMismatch {
        open: '(',
        opened_at: SourceOffset(0),
        close: ']',
        position: SourceOffset(4),
      }),
    );
    assert_eq!(
      convert("(2*[3)+4]", &strict()),
      Err(ConversionError::BracketKindMismatch {
        open: '[',
        opened_at: SourceOffset(3),
        close: ')',
        position: SourceOffset(5),
      }),
    );
  }

  #[test]
  fn test_length_guard() {
    let options = Options::default().with_max_length(5);
    assert_eq!(convert("1+2+3", &options).unwrap().spaced(), "1 2 + 3 +");
    assert_eq!(
      convert("1+2+3+4", &options),
      Err(ConversionError::ExpressionTooLong { length: 7, max: 5 }),
    );
  }

  #[test]
  fn test_default_length_guard() {
    let long = "1+".repeat(64) + "1";
    assert_eq!(
      to_postfix(&long),
      Err(ConversionError::ExpressionTooLong { length: 129, max: 127 }),
    );
  }

  #[test]
  fn test_repeated_conversions_are_independent() {
    // A failed conversion must not leave anything behind for the next.
    assert!(to_postfix("((1").is_err());
    assert_eq!(spaced("1+1"), "1 1 +");
  }
}
