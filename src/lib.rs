
//! Converts infix arithmetic to postfix (Reverse Polish) notation with
//! the shunting yard algorithm, then evaluates the postfix form to an
//! integer.

pub mod config;
pub mod error;
pub mod eval;
pub mod parsing;
pub mod stack;

pub use config::{BracketMatching, Options};
pub use error::Error;

use parsing::Postfix;

use serde::Serialize;

/// The outcome of a successful [`calculate`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
  pub postfix: Postfix,
  pub result: i64,
}

/// Converts `infix` to postfix and evaluates it.
pub fn calculate(infix: &str, options: &Options) -> Result<Calculation, Error> {
  let postfix = parsing::convert(infix, options)?;
  let result = eval::evaluate(&postfix)?;
  Ok(Calculation { postfix, result })
}
