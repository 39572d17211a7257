// This module contains strategies for:
//  * points
//  * point sets
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, MAX_COORDINATE};

use core::ops::{Range, RangeInclusive};
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary points

// Any point within the coordinate bound.
pub fn any_point() -> impl Strategy<Value = Point> {
  coordinate_point(-MAX_COORDINATE..=MAX_COORDINATE)
}

// Points on a small grid. Colinear triples and duplicates are common.
pub fn small_point() -> impl Strategy<Value = Point> {
  coordinate_point(-8..=8)
}

fn coordinate_point(range: RangeInclusive<i32>) -> impl Strategy<Value = Point> {
  (range.clone(), range).prop_map(|(x, y)| Point::new(x, y))
}

///////////////////////////////////////////////////////////////////////////////
// Point sets

pub fn any_points(len: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_point(), len)
}

pub fn small_points(len: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(small_point(), len)
}

#[test]
fn small_points_are_small() {
  let mut runner = TestRunner::default();
  for _ in 0..100 {
    let pts = small_points(0..20).new_tree(&mut runner).unwrap().current();
    assert!(pts.len() < 20);
    assert!(pts.iter().all(|pt| pt.x.abs() <= 8 && pt.y.abs() <= 8));
  }
}
