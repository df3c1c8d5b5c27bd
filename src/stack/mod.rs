
//! The owned LIFO stack shared by the converter and the evaluator.

mod error;
mod structure;

pub use error::StackError;
pub use structure::Stack;
