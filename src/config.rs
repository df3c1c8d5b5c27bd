
//! Conversion settings.

/// Longest infix expression accepted by default, in characters. This
/// matches the line buffer of the classic interactive tool: 128 bytes
/// including the terminator.
pub const DEFAULT_MAX_LENGTH: usize = 127;

/// How a closing bracket finds its partner on the operator stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BracketMatching {
  /// A closing bracket matches the nearest unmatched opening bracket,
  /// whatever its kind. `(3+4]` is accepted.
  #[default]
  Positional,
  /// The nearest unmatched opening bracket must be of the same kind
  /// as the closing bracket.
  Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
  /// Inputs with more characters than this are rejected before
  /// scanning.
  pub max_length: usize,
  pub brackets: BracketMatching,
}

impl Options {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_max_length(mut self, max_length: usize) -> Self {
    self.max_length = max_length;
    self
  }

  pub fn with_brackets(mut self, brackets: BracketMatching) -> Self {
    self.brackets = brackets;
    self
  }
}

impl Default for Options {
  fn default() -> Self {
    Self {
      max_length: DEFAULT_MAX_LENGTH,
      brackets: BracketMatching::Positional,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_options() {
    let options = Options::default();
    assert_eq!(options.max_length, 127);
    assert_eq!(options.brackets, BracketMatching::Positional);
  }

  #[test]
  fn test_builder_methods() {
    let options = Options::new().with_max_length(10).with_brackets(BracketMatching::Strict);
    assert_eq!(options, Options { max_length: 10, brackets: BracketMatching::Strict });
  }
}
