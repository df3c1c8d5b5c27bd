
use super::error::StackError;

/// LIFO stack. Implemented internally as a vector whose "top" is at
/// the end, allowing for constant-time pushes and pops.
///
/// Each stack is owned by exactly one conversion or evaluation pass,
/// so there is no shared top-of-stack index anywhere in the crate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stack<T> {
  elements: Vec<T>,
}

impl<T> Stack<T> {

  pub fn new() -> Self {
    Self::default()
  }

  /// Asserts that the stack has size at least `expected` but does not
  /// pop anything.
  pub fn check_stack_size(&self, expected: usize) -> Result<(), StackError> {
    if self.len() < expected {
      Err(StackError::NotEnoughElements { expected, actual: self.len() })
    } else {
      Ok(())
    }
  }

  pub fn push(&mut self, element: T) {
    self.elements.push(element);
  }

  pub fn pop(&mut self) -> Result<T, StackError> {
    self.elements.pop().ok_or(StackError::NotEnoughElements { expected: 1, actual: 0 })
  }

  /// As [`Stack::pop`], but with no result value. Use this function
  /// if you don't plan to use the result and don't care if the `pop`
  /// call fails due to an empty stack.
  pub fn pop_and_discard(&mut self) {
    let _ = self.elements.pop();
  }

  /// Pops the top two elements, returning them as `(second, top)`, so
  /// that the element pushed first comes first. In case of a
  /// [`StackError`], `self` will NOT be modified.
  pub fn pop_pair(&mut self) -> Result<(T, T), StackError> {
    self.check_stack_size(2)?;
    let top = self.elements.pop().unwrap(); // unwrap: We checked the stack size already
    let second = self.elements.pop().unwrap(); // unwrap: Likewise
    Ok((second, top))
  }

  /// The top of the stack, if any.
  pub fn peek(&self) -> Option<&T> {
    self.elements.last()
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

}

impl<T> Default for Stack<T> {

  fn default() -> Self {
    Self {
      elements: Vec::with_capacity(16),
    }
  }

}

#[cfg(test)]
mod tests {
  use super::*;

  fn stack_of<T>(elements: impl IntoIterator<Item = T>) -> Stack<T> {
    let mut stack = Stack::new();
    for element in elements {
      stack.push(element);
    }
    stack
  }

  #[test]
  fn test_new_empty() {
    let empty_stack = Stack::<i32>::new();
    assert_eq!(empty_stack.len(), 0);
    assert_eq!(empty_stack.peek(), None);
    assert_eq!(empty_stack, Stack::<i32>::default());
  }

  #[test]
  fn test_push_pop() {
    let mut stack = stack_of([0, 10]);
    stack.push(20);
    assert_eq!(stack.pop(), Ok(20));
    assert_eq!(stack.pop(), Ok(10));
    assert_eq!(stack.pop(), Ok(0));
    assert_eq!(stack.pop(), Err(StackError::NotEnoughElements { expected: 1, actual: 0 }));
  }

  #[test]
  fn test_pop_and_discard() {
    let mut stack = stack_of([1, 2]);
    stack.pop_and_discard();
    assert_eq!(stack.peek(), Some(&1));
    stack.pop_and_discard();
    stack.pop_and_discard();
    assert_eq!(stack.len(), 0);
  }

  #[test]
  fn test_pop_pair() {
    let mut stack = stack_of([1, 2, 3]);
    assert_eq!(stack.pop_pair(), Ok((2, 3)));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.pop_pair(), Err(StackError::NotEnoughElements { expected: 2, actual: 1 }));
    // Failed pops leave the stack alone.
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.peek(), Some(&1));
  }

  #[test]
  fn test_check_stack_size() {
    let stack = stack_of(['A', 'B']);
    assert_eq!(stack.check_stack_size(2), Ok(()));
    assert_eq!(stack.check_stack_size(3), Err(StackError::NotEnoughElements { expected: 3, actual: 2 }));
  }

  #[test]
  fn test_peek() {
    let mut stack = Stack::new();
    assert_eq!(stack.peek(), None);
    stack.push('A');
    stack.push('B');
    assert_eq!(stack.peek(), Some(&'B'));
    assert_eq!(stack.len(), 2);
  }
}
