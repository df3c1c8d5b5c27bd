
use std::fmt::{self, Display, Formatter};

/// The three supported bracket shapes. Each kind has exactly one
/// opening and one closing character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
  Paren,
  Brace,
  Square,
}

impl BracketKind {
  pub const ALL: [BracketKind; 3] = [BracketKind::Paren, BracketKind::Brace, BracketKind::Square];

  pub fn from_open(c: char) -> Option<BracketKind> {
    match c {
      '(' => Some(BracketKind::Paren),
      '{' => Some(BracketKind::Brace),
      '[' => Some(BracketKind::Square),
      _ => None,
    }
  }

  pub fn from_close(c: char) -> Option<BracketKind> {
    match c {
      ')' => Some(BracketKind::Paren),
      '}' => Some(BracketKind::Brace),
      ']' => Some(BracketKind::Square),
      _ => None,
    }
  }

  pub const fn open_char(self) -> char {
    match self {
      BracketKind::Paren => '(',
      BracketKind::Brace => '{',
      BracketKind::Square => '[',
    }
  }

  pub const fn close_char(self) -> char {
    match self {
      BracketKind::Paren => ')',
      BracketKind::Brace => '}',
      BracketKind::Square => ']',
    }
  }
}

impl Display for BracketKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}{}", self.open_char(), self.close_char())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_open_close_pairing() {
    for kind in BracketKind::ALL {
      assert_eq!(BracketKind::from_open(kind.open_char()), Some(kind));
      assert_eq!(BracketKind::from_close(kind.close_char()), Some(kind));
      assert_eq!(BracketKind::from_open(kind.close_char()), None);
      assert_eq!(BracketKind::from_close(kind.open_char()), None);
    }
  }

  #[test]
  fn test_display() {
    assert_eq!(BracketKind::Brace.to_string(), "{}");
  }
}
