
use crate::parsing::operator::Operator;
use crate::parsing::source::SourceOffset;
use crate::stack::StackError;

use thiserror::Error;

/// Failure while evaluating a postfix expression. Positions count
/// postfix tokens (or characters, for textual input) from zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EvaluationError {
  #[error("Division by zero at position {position}.")]
  DivisionByZero {
    position: SourceOffset,
  },
  #[error("Unknown operator '{symbol}' at position {position}.")]
  UnknownOperator {
    symbol: char,
    position: SourceOffset,
  },
  #[error("Operator '{operator}' at position {position} is missing an operand.")]
  StackUnderflow {
    operator: Operator,
    position: SourceOffset,
    #[source]
    source: StackError,
  },
  #[error("Integer overflow evaluating '{operator}' at position {position}.")]
  Overflow {
    operator: Operator,
    position: SourceOffset,
  },
  #[error("Operand ending at position {position} does not fit in a 64-bit integer.")]
  OperandTooLarge {
    position: SourceOffset,
  },
  #[error("Empty expression.")]
  EmptyExpression,
  #[error("Malformed expression: {count} values remain on the stack instead of one.")]
  LeftoverOperands {
    count: usize,
  },
}
