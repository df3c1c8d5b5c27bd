
/// The precedence of a stack entry during conversion. Higher values
/// bind more tightly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u8);

impl Precedence {
  /// The precedence of anything that is not an operator. Open brackets
  /// sit at this level, so no operator ever pops past one.
  pub const MIN: Precedence = Precedence(0);

  pub const ADDITIVE: Precedence = Precedence(2);
  pub const MULTIPLICATIVE: Precedence = Precedence(3);
  pub const EXPONENTIAL: Precedence = Precedence(4);

  pub const fn value(self) -> u8 {
    self.0
  }
}
