use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

use crate::Orientation;

/// Largest coordinate magnitude for which every geometric predicate is exact.
///
/// Differences of two coordinates stay below `2^31`, products of differences
/// below `2^62` and sums of two such products below `2^63`, so `i64`
/// arithmetic never overflows. Inputs beyond this bound are not checked.
pub const MAX_COORDINATE: i32 = (1 << 30) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
  pub x: i32,
  pub y: i32,
}

// Random sampling within [-MAX_COORDINATE, MAX_COORDINATE].
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point {
      x: rng.gen_range(-MAX_COORDINATE..=MAX_COORDINATE),
      y: rng.gen_range(-MAX_COORDINATE..=MAX_COORDINATE),
    }
  }
}

impl Point {
  pub const fn new(x: i32, y: i32) -> Point {
    Point { x, y }
  }

  // Warning: May cause arithmetic overflow beyond MAX_COORDINATE.
  pub fn squared_distance(&self, rhs: &Point) -> i64 {
    let dx = i64::from(self.x) - i64::from(rhs.x);
    let dy = i64::from(self.y) - i64::from(rhs.y);
    dx * dx + dy * dy
  }

  /// Determine the direction you have to turn if you walk from `self`
  /// to `p2` to `p3`.
  ///
  /// See [`Orientation::new`].
  pub fn orientation(&self, p2: &Point, p3: &Point) -> Orientation {
    Orientation::new(self, p2, p3)
  }

  /// Lowest y-coordinate first, ties broken by the lowest x-coordinate.
  pub fn is_below(&self, rhs: &Point) -> bool {
    (self.y, self.x) < (rhs.y, rhs.x)
  }

  /// True if `pt` lies on the closed segment from `self` to `end`.
  pub fn segment_contains(&self, end: &Point, pt: &Point) -> bool {
    self.orientation(end, pt).is_colinear()
      && self.x.min(end.x) <= pt.x
      && pt.x <= self.x.max(end.x)
      && self.y.min(end.y) <= pt.y
      && pt.y <= self.y.max(end.y)
  }
}

impl From<(i32, i32)> for Point {
  fn from((x, y): (i32, i32)) -> Point {
    Point { x, y }
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.x, self.y)
  }
}
