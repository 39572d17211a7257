use std::collections::HashSet;

use super::{Point, PointLocation};
use crate::{Error, Orientation};

/// $O(n)$ Check that `vertices` describe a strictly convex polygon in
/// counter-clockwise order.
///
/// Sequences with fewer than three vertices (points and segments) only need
/// to be free of duplicates.
///
/// # Errors
/// * [`Error::DuplicatePoints`] if any vertex occurs twice.
/// * [`Error::CoLinearViolation`] if every vertex lies on a single line.
/// * [`Error::ClockWiseViolation`] if the vertices wind clockwise.
/// * [`Error::ConvexViolation`] for any other non-left turn.
pub fn validate(vertices: &[Point]) -> Result<(), Error> {
  let mut seen = HashSet::with_capacity(vertices.len());
  if !vertices.iter().all(|pt| seen.insert(*pt)) {
    return Err(Error::DuplicatePoints);
  }
  let n = vertices.len();
  if n < 3 {
    return Ok(());
  }
  let turns: Vec<Orientation> = (0..n)
    .map(|i| {
      let prev = &vertices[(i + n - 1) % n];
      let next = &vertices[(i + 1) % n];
      prev.orientation(&vertices[i], next)
    })
    .collect();
  if turns.iter().all(|turn| turn.is_colinear()) {
    return Err(Error::CoLinearViolation);
  }
  if turns.iter().all(|turn| !turn.is_ccw()) {
    return Err(Error::ClockWiseViolation);
  }
  if turns.iter().any(|turn| !turn.is_ccw()) {
    return Err(Error::ConvexViolation);
  }
  // Local left turns still admit polygons that wind more than once.
  let origin = &vertices[0];
  for window in vertices[1..].windows(2) {
    if !origin.orientation(&window[0], &window[1]).is_ccw() {
      return Err(Error::ConvexViolation);
    }
  }
  Ok(())
}

/// $O(\log n)$ Locate `pt` relative to a convex polygon.
///
/// `vertices` must pass [`validate`]. Degenerate polygons are supported: an
/// empty polygon contains nothing, a single vertex only has a boundary, and a
/// segment is all boundary.
pub fn locate(vertices: &[Point], pt: &Point) -> PointLocation {
  let on_boundary = |hit: bool| {
    if hit {
      PointLocation::OnBoundary
    } else {
      PointLocation::Outside
    }
  };
  match vertices {
    [] => PointLocation::Outside,
    [single] => on_boundary(single == pt),
    [a, b] => on_boundary(a.segment_contains(b, pt)),
    _ => locate_wedge(vertices, pt),
  }
}

fn locate_wedge(vertices: &[Point], pt: &Point) -> PointLocation {
  let p0 = &vertices[0];
  let first = &vertices[1];
  let last = &vertices[vertices.len() - 1];
  match (p0.orientation(first, pt), p0.orientation(last, pt)) {
    (Orientation::ClockWise, _) | (_, Orientation::CounterClockWise) => {
      return PointLocation::Outside
    }
    (Orientation::CoLinear, _) if p0.segment_contains(first, pt) => {
      return PointLocation::OnBoundary
    }
    (_, Orientation::CoLinear) if p0.segment_contains(last, pt) => {
      return PointLocation::OnBoundary
    }
    (Orientation::CoLinear, _) | (_, Orientation::CoLinear) => return PointLocation::Outside,
    _ => {}
  }
  // `pt` is strictly inside the wedge spanned at p0. Binary search for the
  // fan triangle (p0, lower, upper) containing it.
  let mut lower = 1;
  let mut upper = vertices.len() - 1;
  while lower + 1 < upper {
    let middle = (lower + upper) / 2;
    if p0.orientation(&vertices[middle], pt).is_ccw() {
      lower = middle;
    } else {
      upper = middle;
    }
  }
  match vertices[lower].orientation(&vertices[upper], pt) {
    Orientation::CounterClockWise => PointLocation::Inside,
    Orientation::CoLinear => PointLocation::OnBoundary,
    Orientation::ClockWise => PointLocation::Outside,
  }
}
