
use super::error::EvaluationError;
use crate::parsing::operator::ArithmeticError;
use crate::parsing::postfix::{Postfix, PostfixToken};
use crate::parsing::source::SourceOffset;
use crate::stack::Stack;

use tracing::{debug, trace};

/// The postfix virtual machine: a value stack plus the operand
/// currently being read digit by digit.
#[derive(Debug, Default)]
struct Machine {
  values: Stack<i64>,
  accumulator: Option<i64>,
}

/// Evaluates a postfix expression to a single integer.
pub fn evaluate(postfix: &Postfix) -> Result<i64, EvaluationError> {
  debug!(%postfix, "evaluating postfix expression");
  let mut machine = Machine::default();
  for (i, token) in postfix.into_iter().enumerate() {
    machine.step(*token, SourceOffset(i))?;
  }
  machine.finish()
}

/// Evaluates postfix written as text, e.g. `3 4 2*+`. Digits build
/// operands, whitespace separates them, and any other character must
/// be one of `+ - * / ^`.
pub fn evaluate_str(postfix: &str) -> Result<i64, EvaluationError> {
  let postfix = postfix.parse::<Postfix>()?;
  evaluate(&postfix)
}

impl Machine {
  fn step(&mut self, token: PostfixToken, position: SourceOffset) -> Result<(), EvaluationError> {
    match token {
      PostfixToken::Separator => {
        self.commit_operand();
      }
      PostfixToken::Digit(digit) => {
        let value = self.accumulator.unwrap_or(0)
          .checked_mul(10)
          .and_then(|n| n.checked_add(i64::from(digit)))
          .ok_or(EvaluationError::OperandTooLarge { position })?;
        self.accumulator = Some(value);
      }
      PostfixToken::Operator(operator) => {
        self.commit_operand();
        let (left, right) = self.values.pop_pair()
          .map_err(|source| EvaluationError::StackUnderflow { operator, position, source })?;
        let result = operator.apply(left, right).map_err(|err| match err {
          ArithmeticError::DivisionByZero => EvaluationError::DivisionByZero { position },
          ArithmeticError::Overflow => EvaluationError::Overflow { operator, position },
        })?;
        trace!(%operator, left, right, result, "applied operator");
        self.values.push(result);
      }
    }
    Ok(())
  }

  /// Pushes the operand being read, if there is one.
  fn commit_operand(&mut self) {
    if let Some(value) = self.accumulator.take() {
      trace!(value, depth = self.values.len() + 1, "pushed operand");
      self.values.push(value);
    }
  }

  fn finish(mut self) -> Result<i64, EvaluationError> {
    self.commit_operand();
    let count = self.values.len();
    if count > 1 {
      return Err(EvaluationError::LeftoverOperands { count });
    }
    let result = self.values.pop().map_err(|_| EvaluationError::EmptyExpression)?;
    debug!(result, "evaluated postfix expression");
    Ok(result)
  }
}
