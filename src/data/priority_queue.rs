//! Binary heap with an injected ordering.
//!
//! Elements live in a `Vec<T>` using 0-based heap indexing:
//! `parent(i) = (i - 1) / 2`, `left(i) = 2i + 1`, `right(i) = 2i + 2`.
//! The root is the element the comparator prefers over every other element.

/// Strict weak ordering used by [`PriorityQueue`].
///
/// `compare(a, b)` returns true if `a` should sift toward the root ahead of
/// `b`.
pub trait Compare<T> {
  fn compare(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Compare<T> for F
where
  F: Fn(&T, &T) -> bool,
{
  fn compare(&self, a: &T, b: &T) -> bool {
    self(a, b)
  }
}

/// `a < b`. With this comparator the smallest element is on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

impl<T: Ord> Compare<T> for Less {
  fn compare(&self, a: &T, b: &T) -> bool {
    a < b
  }
}

#[derive(Debug, Clone)]
pub struct PriorityQueue<T, C = Less> {
  data: Vec<T>,
  comp: C,
}

impl<T: Ord> PriorityQueue<T, Less> {
  pub fn new() -> Self {
    PriorityQueue::with_comparator(Less)
  }
}

impl<T: Ord> Default for PriorityQueue<T, Less> {
  fn default() -> Self {
    PriorityQueue::new()
  }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
  pub fn with_comparator(comp: C) -> Self {
    PriorityQueue {
      data: Vec::new(),
      comp,
    }
  }

  /// $O(n)$ Build a heap from an unordered vector.
  ///
  /// Every subtree is sifted into heap order, starting from the last parent
  /// and finishing at the root.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use graham_hull::data::PriorityQueue;
  /// let mut queue = PriorityQueue::from_vec(vec![3, 9, 1, 4], |a: &i32, b: &i32| a > b);
  /// assert_eq!(queue.pop(), Some(9));
  /// assert_eq!(queue.pop(), Some(4));
  /// assert_eq!(queue.top(), Some(&3));
  /// ```
  pub fn from_vec(data: Vec<T>, comp: C) -> Self {
    let mut queue = PriorityQueue { data, comp };
    queue.build_heap();
    queue
  }

  /// $O(n)$ See [`PriorityQueue::from_vec`].
  pub fn from_iter_with<I>(iter: I, comp: C) -> Self
  where
    I: IntoIterator<Item = T>,
  {
    PriorityQueue::from_vec(iter.into_iter().collect(), comp)
  }

  /// $O(\log n)$ Append `value` and sift it up toward the root.
  pub fn push(&mut self, value: T) {
    self.data.push(value);
    self.sift_up(self.data.len() - 1);
  }

  /// $O(\log n)$ Remove the root.
  pub fn pop(&mut self) -> Option<T> {
    if self.data.is_empty() {
      return None;
    }
    let last = self.data.len() - 1;
    self.data.swap(0, last);
    let top = self.data.pop();
    self.sift_down(0);
    top
  }

  /// $O(1)$
  pub fn top(&self) -> Option<&T> {
    self.data.first()
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  pub fn swap(&mut self, other: &mut Self) {
    std::mem::swap(self, other)
  }

  /// Underlying storage in heap order.
  pub fn into_vec(self) -> Vec<T> {
    self.data
  }

  /// $O(n)$ No child is preferred over its parent.
  pub fn is_heap(&self) -> bool {
    (1..self.data.len()).all(|child| !self.prefers(child, parent(child)))
  }

  fn prefers(&self, a: usize, b: usize) -> bool {
    self.comp.compare(&self.data[a], &self.data[b])
  }

  fn sift_up(&mut self, mut idx: usize) {
    while idx > 0 {
      let up = parent(idx);
      if !self.prefers(idx, up) {
        break;
      }
      self.data.swap(idx, up);
      idx = up;
    }
  }

  fn sift_down(&mut self, mut idx: usize) {
    let len = self.data.len();
    loop {
      let left = left_child(idx);
      let right = right_child(idx);
      let mut best = idx;
      if left < len && self.prefers(left, best) {
        best = left;
      }
      if right < len && self.prefers(right, best) {
        best = right;
      }
      if best == idx {
        break;
      }
      self.data.swap(idx, best);
      idx = best;
    }
  }

  fn build_heap(&mut self) {
    for idx in (0..self.data.len() / 2).rev() {
      self.sift_down(idx);
    }
  }
}

fn parent(child: usize) -> usize {
  (child - 1) / 2
}

fn left_child(parent: usize) -> usize {
  2 * parent + 1
}

fn right_child(parent: usize) -> usize {
  2 * parent + 2
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_none, assert_some_eq};
  use proptest::collection::vec;
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[derive(Debug, Clone)]
  enum Op {
    Push(i16),
    Pop,
  }

  fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![any::<i16>().prop_map(Op::Push), Just(Op::Pop)]
  }

  #[test]
  fn indexing() {
    assert_eq!(left_child(0), 1);
    assert_eq!(right_child(0), 2);
    assert_eq!(parent(1), 0);
    assert_eq!(parent(2), 0);
    assert_eq!(parent(5), 2);
    assert_eq!(parent(6), 2);
  }

  #[test]
  fn empty() {
    let mut queue: PriorityQueue<u8> = PriorityQueue::new();
    assert!(queue.is_empty());
    assert_none!(queue.top());
    assert_none!(queue.pop());
    assert!(queue.is_heap());
  }

  #[test]
  fn default_is_min_heap() {
    let mut queue = PriorityQueue::from_vec(vec![5, 1, 4, 2, 3], Less);
    assert_eq!(queue.len(), 5);
    assert_some_eq!(queue.top(), &1);
    let drained: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
    assert_eq!(drained, vec![1, 2, 3, 4, 5]);
  }

  #[test]
  fn push_rises_to_root() {
    let mut queue = PriorityQueue::from_vec(vec![10, 20, 30, 40, 50, 60], Less);
    queue.push(0);
    assert_some_eq!(queue.top(), &0);
    assert!(queue.is_heap());
  }

  #[test]
  fn closure_comparator() {
    let by_len = |a: &&str, b: &&str| a.len() > b.len();
    let mut queue = PriorityQueue::from_iter_with(vec!["ab", "a", "abcd", "abc"], by_len);
    assert_some_eq!(queue.pop(), "abcd");
    assert_some_eq!(queue.pop(), "abc");
    queue.push("abcde");
    assert_some_eq!(queue.pop(), "abcde");
    assert_eq!(queue.len(), 2);
  }

  #[test]
  fn swap_queues() {
    let mut a = PriorityQueue::from_vec(vec![2, 1], Less);
    let mut b = PriorityQueue::new();
    a.swap(&mut b);
    assert!(a.is_empty());
    assert_some_eq!(b.top(), &1);
  }

  #[proptest]
  fn heapify_holds(#[strategy(vec(any::<i32>(), 0..200))] items: Vec<i32>) {
    let queue = PriorityQueue::from_vec(items.clone(), Less);
    assert!(queue.is_heap());
    let mut stored = queue.into_vec();
    let mut expected = items;
    stored.sort_unstable();
    expected.sort_unstable();
    assert_eq!(stored, expected);
  }

  #[proptest]
  fn heap_property_after_ops(
    #[strategy(vec(any::<i16>(), 0..50))] initial: Vec<i16>,
    #[strategy(vec(any_op(), 0..200))] ops: Vec<Op>,
  ) {
    let mut queue = PriorityQueue::from_vec(initial.clone(), |a: &i16, b: &i16| a > b);
    let mut model = initial;
    for op in ops {
      match op {
        Op::Push(value) => {
          queue.push(value);
          model.push(value);
        }
        Op::Pop => {
          let expected = model.iter().copied().max();
          if let Some(max) = expected {
            let idx = model.iter().position(|&v| v == max).unwrap();
            model.swap_remove(idx);
          }
          assert_eq!(queue.pop(), expected);
        }
      }
      assert!(queue.is_heap());
      assert_eq!(queue.len(), model.len());
    }
  }
}
