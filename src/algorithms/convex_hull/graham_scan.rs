use claims::debug_assert_ok;
use log::{debug, trace};

use crate::data::convex::validate;
use crate::data::{Compare, Point, PriorityQueue, Stack};
use crate::Orientation;

// https://en.wikipedia.org/wiki/Graham_scan

/// Counter-clockwise order around a fixed pivot.
///
/// `a` is preferred over `b` if walking pivot -> `a` -> `b` turns left, that is
/// if `a` has the smaller polar angle. Points on the same ray from the pivot
/// are ordered by their distance to it, nearest first.
///
/// All points compared must lie above the pivot or to its right on the same
/// row, which holds when the pivot is the lowest, then leftmost, point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolarOrder {
  pivot: Point,
}

impl PolarOrder {
  pub fn new(pivot: Point) -> PolarOrder {
    PolarOrder { pivot }
  }
}

impl Compare<Point> for PolarOrder {
  fn compare(&self, a: &Point, b: &Point) -> bool {
    let pivot = &self.pivot;
    match pivot.orientation(a, b) {
      Orientation::CounterClockWise => true,
      Orientation::ClockWise => false,
      Orientation::CoLinear => pivot.squared_distance(a) < pivot.squared_distance(b),
    }
  }
}

/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. Points are fed to the scan in polar order by
/// a [`PriorityQueue`] and the boundary under construction is kept on a
/// [`Stack`].
///
/// The hull starts at the lowest (then leftmost) point and proceeds
/// counter-clockwise. Inputs with fewer than three points are returned
/// unchanged. Otherwise the result contains no duplicates and no colinear
/// vertices: a set of colinear points reduces to its two endpoints and a set
/// of identical points to a single point.
///
/// # Properties
/// * No points from the input set will be outside the returned convex polygon.
/// * All vertices in the convex polygon are from the input set.
/// * The input slice is not modified.
///
/// # Examples
///
/// ```rust
/// # use graham_hull::algorithms::convex_hull;
/// # use graham_hull::data::Point;
/// let points = vec![
///   Point::new(0, 0),
///   Point::new(4, 0),
///   Point::new(4, 4),
///   Point::new(0, 4),
///   Point::new(2, 2),
/// ];
/// assert_eq!(
///   convex_hull(&points),
///   vec![Point::new(0, 0), Point::new(4, 0), Point::new(4, 4), Point::new(0, 4)]
/// );
/// ```
///
/// ```rust
/// # use graham_hull::algorithms::convex_hull;
/// # use graham_hull::data::Point;
/// let colinear: Vec<Point> = (0..4).map(|x| Point::new(x, 0)).collect();
/// assert_eq!(convex_hull(&colinear), vec![Point::new(0, 0), Point::new(3, 0)]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
  if points.len() < 3 {
    return points.to_vec();
  }
  let mut pts = points.to_vec();
  let lowest = lowest_point(&pts);
  pts.swap(0, lowest);
  let pivot = pts[0];

  // Copies of the pivot never contribute a vertex.
  let mut queue = PriorityQueue::from_iter_with(
    pts.into_iter().skip(1).filter(|pt| *pt != pivot),
    PolarOrder::new(pivot),
  );
  debug!("pivot {}, {} points in polar order", pivot, queue.len());

  let mut stack = Stack::with_capacity(queue.len() + 1);
  stack.push(pivot);
  if let Some(first) = queue.pop() {
    stack.push(first);
  }

  // Pop the top of the stack until we turn counter-clockwise to reach the
  // candidate.
  while let Some(candidate) = queue.pop() {
    while let (Some(second), Some(top)) = (stack.second_from_top(), stack.top()) {
      if second.orientation(top, &candidate).is_ccw() {
        break;
      }
      trace!("dropping {} before {}", top, candidate);
      stack.pop();
    }
    stack.push(candidate);
  }

  let hull = stack.into_vec();
  debug_assert_ok!(validate(&hull));
  debug!("convex hull has {} of {} points", hull.len(), points.len());
  hull
}

// Index of the lowest point, ties broken by the lowest x-coordinate.
// O(n)
fn lowest_point(pts: &[Point]) -> usize {
  (1..pts.len()).fold(0, |best, idx| {
    if pts[idx].is_below(&pts[best]) {
      idx
    } else {
      best
    }
  })
}
