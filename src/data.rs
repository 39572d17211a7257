pub mod convex;
pub(crate) mod point;
mod priority_queue;
mod stack;

pub use point::{Point, MAX_COORDINATE};
pub use priority_queue::{Compare, Less, PriorityQueue};
pub use stack::Stack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
