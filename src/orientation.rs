use std::cmp::Ordering;

use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The sign of the cross product `(p2 - p1) × (p3 - p1)` is computed with
  /// exact `i64` arithmetic. No arithmetic overflow can occur as long as every
  /// coordinate is within [`MAX_COORDINATE`](crate::data::MAX_COORDINATE).
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use graham_hull::data::Point;
  /// # use graham_hull::Orientation;
  /// let p1 = Point::new(0, 0);
  /// let p2 = Point::new(0, 1); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new(0, 2)).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(-1, 2)).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(1, 2)).is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    match cross_product(p1, p2, p3).cmp(&0) {
      Ordering::Less => ClockWise,
      Ordering::Equal => CoLinear,
      Ordering::Greater => CounterClockWise,
    }
  }

  /// `+1` for a left turn, `-1` for a right turn and `0` when colinear.
  pub fn sign(self) -> i8 {
    match self {
      CounterClockWise => 1,
      ClockWise => -1,
      CoLinear => 0,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}

// Warning: May cause arithmetic overflow for coordinates beyond MAX_COORDINATE.
fn cross_product(p1: &Point, p2: &Point, p3: &Point) -> i64 {
  let (ux, uy) = (i64::from(p2.x) - i64::from(p1.x), i64::from(p2.y) - i64::from(p1.y));
  let (vx, vy) = (i64::from(p3.x) - i64::from(p1.x), i64::from(p3.y) - i64::from(p1.y));
  ux * vy - uy * vx
}
