/// LIFO container backed by a `Vec<T>`.
///
/// Underflow is reported as `None` by [`pop`](Stack::pop),
/// [`top`](Stack::top) and [`second_from_top`](Stack::second_from_top).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
  data: Vec<T>,
}

impl<T> Default for Stack<T> {
  fn default() -> Self {
    Stack::new()
  }
}

impl<T> Stack<T> {
  pub fn new() -> Stack<T> {
    Stack { data: Vec::new() }
  }

  pub fn with_capacity(capacity: usize) -> Stack<T> {
    Stack {
      data: Vec::with_capacity(capacity),
    }
  }

  /// $O(1)$ amortized
  pub fn push(&mut self, value: T) {
    self.data.push(value)
  }

  /// $O(1)$
  pub fn pop(&mut self) -> Option<T> {
    self.data.pop()
  }

  /// $O(1)$
  pub fn top(&self) -> Option<&T> {
    self.data.last()
  }

  /// $O(1)$
  pub fn top_mut(&mut self) -> Option<&mut T> {
    self.data.last_mut()
  }

  /// The element directly below the top of the stack.
  ///
  /// Returns `None` if the stack holds fewer than two elements. The stack is
  /// never modified.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use graham_hull::data::Stack;
  /// let mut stack = Stack::new();
  /// stack.push(1);
  /// assert_eq!(stack.second_from_top(), None);
  /// stack.push(2);
  /// assert_eq!(stack.second_from_top(), Some(&1));
  /// assert_eq!(stack.top(), Some(&2));
  /// ```
  pub fn second_from_top(&self) -> Option<&T> {
    let len = self.data.len();
    if len < 2 {
      return None;
    }
    self.data.get(len - 2)
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  pub fn swap(&mut self, other: &mut Stack<T>) {
    std::mem::swap(&mut self.data, &mut other.data)
  }

  /// Iterate from the bottom of the stack to the top.
  pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
    self.data.iter()
  }

  /// Elements in push order: bottom first, top last.
  pub fn into_vec(self) -> Vec<T> {
    self.data
  }
}

impl<T> From<Vec<T>> for Stack<T> {
  /// The last element of the vector becomes the top of the stack.
  fn from(data: Vec<T>) -> Stack<T> {
    Stack { data }
  }
}
