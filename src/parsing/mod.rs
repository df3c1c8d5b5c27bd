
//! Scanning infix expressions and converting them to postfix.

pub mod operator;
pub mod postfix;
pub mod shunting_yard;
pub mod source;
pub mod token;

pub use postfix::{Postfix, PostfixToken};
pub use shunting_yard::{check_length, convert, to_postfix, ConversionError};
