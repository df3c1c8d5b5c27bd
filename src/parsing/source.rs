
use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Zero-based character position in scanned input. For postfix token
/// sequences, the index of the token. Used for error reporting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceOffset(pub usize);

impl Display for SourceOffset {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Add<usize> for SourceOffset {
  type Output = Self;

  fn add(self, rhs: usize) -> Self::Output {
    Self(self.0 + rhs)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_adjacent_offsets() {
    let offset = SourceOffset(3);
    assert_eq!(offset + 1, SourceOffset(4));
    assert!(offset < offset + 1);
    assert_eq!((offset + 4).0, 7);
    assert_eq!(offset.to_string(), "3");
  }
}
