// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls of integer point sets via Graham scan.
//!
//! The scan is built on two small generic containers found in [`data`]: a LIFO
//! [`Stack`](data::Stack) and a binary-heap
//! [`PriorityQueue`](data::PriorityQueue) with an injected comparator.

pub mod algorithms;
pub mod data;
pub mod io;
mod orientation;

pub use orientation::Orientation;

#[doc(inline)]
pub use algorithms::convex_hull;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  DuplicatePoints,
  /// Two consecutive line segments are either colinear or oriented clockwise.
  ConvexViolation,
  ClockWiseViolation,
  CoLinearViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
      Error::CoLinearViolation => write!(f, "All points are colinear"),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
