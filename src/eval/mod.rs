
//! Evaluation of postfix expressions.

mod error;
mod machine;

pub use error::EvaluationError;
pub use machine::{evaluate, evaluate_str};
