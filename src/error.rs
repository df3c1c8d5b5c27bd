
use crate::eval::EvaluationError;
use crate::parsing::ConversionError;

use thiserror::Error;

/// Any failure of the infix-to-result pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
  #[error(transparent)]
  Conversion(#[from] ConversionError),
  #[error(transparent)]
  Evaluation(#[from] EvaluationError),
}
