// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bounds of an interval.
//!
//! A point is a value of the numeric domain tagged with its `BoundKind`. The kinds are ordered by strictness (`Open < Closed < Unbounded`); this order only breaks ties between two bounds sharing the same value and says nothing about the magnitude of the values.

use crate::ops::Numeric;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum BoundKind {
  /// Excludes its value.
  Open,
  /// Includes its value.
  Closed,
  /// Stands for an infinity, its value is never a member.
  Unbounded
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Point<N> {
  value: N,
  kind: BoundKind
}

impl<N> Point<N>
{
  pub fn new(value: N, kind: BoundKind) -> Point<N> {
    Point { value, kind }
  }

  pub fn open(value: N) -> Point<N> {
    Point::new(value, BoundKind::Open)
  }

  pub fn closed(value: N) -> Point<N> {
    Point::new(value, BoundKind::Closed)
  }

  pub fn kind(&self) -> BoundKind {
    self.kind
  }

  pub fn is_open(&self) -> bool {
    self.kind == BoundKind::Open
  }

  pub fn is_closed(&self) -> bool {
    self.kind == BoundKind::Closed
  }

  pub fn is_unbounded(&self) -> bool {
    self.kind == BoundKind::Unbounded
  }
}

impl<N: Numeric> Point<N>
{
  pub fn value(&self) -> N {
    self.value
  }

  /// The `-∞` point, lower bound of the intervals unbounded on the left.
  pub fn neg_infinity() -> Point<N> {
    Point::new(N::neg_infinity(), BoundKind::Unbounded)
  }

  /// The `+∞` point, upper bound of the intervals unbounded on the right.
  pub fn infinity() -> Point<N> {
    Point::new(N::infinity(), BoundKind::Unbounded)
  }

  /// Between two lower bounds, the one bounding their intersection: the largest value, or the strictest kind on equal values.
  pub fn tighter_lower(self, other: Point<N>) -> Point<N> {
    if self.value == other.value {
      self.stricter(other)
    }
    else if self.value > other.value { self }
    else { other }
  }

  /// Between two upper bounds, the one bounding their intersection: the smallest value, or the strictest kind on equal values.
  pub fn tighter_upper(self, other: Point<N>) -> Point<N> {
    if self.value == other.value {
      self.stricter(other)
    }
    else if self.value < other.value { self }
    else { other }
  }

  /// The same point with its value normalized, see `Numeric::normalize`.
  pub fn normalized(self) -> Point<N> {
    Point::new(self.value.normalize(), self.kind)
  }

  /// An unbounded lower point must sit at `-∞`, an unbounded upper point at `+∞`.
  pub fn is_valid_lower(&self) -> bool {
    !self.is_unbounded() || self.value == N::neg_infinity()
  }

  pub fn is_valid_upper(&self) -> bool {
    !self.is_unbounded() || self.value == N::infinity()
  }

  fn stricter(self, other: Point<N>) -> Point<N> {
    if self.kind <= other.kind { self } else { other }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::BoundKind::*;

  #[test]
  fn strictness_order() {
    assert!(Open < Closed);
    assert!(Closed < Unbounded);
    assert!(Open < Unbounded);
  }

  #[test]
  fn constructors() {
    let p = Point::open(3);
    assert_eq!(p.value(), 3);
    assert_eq!(p.kind(), Open);
    assert!(p.is_open());

    let p = Point::closed(-2);
    assert_eq!(p.value(), -2);
    assert!(p.is_closed());

    let lo: Point<i32> = Point::neg_infinity();
    let hi: Point<i32> = Point::infinity();
    assert_eq!(lo.value(), i32::min_value());
    assert_eq!(hi.value(), i32::max_value());
    assert!(lo.is_unbounded() && hi.is_unbounded());

    let hi: Point<f64> = Point::infinity();
    assert_eq!(hi.value(), std::f64::INFINITY);
  }

  #[test]
  fn tighter_bounds() {
    // (id, a, b, expected tighter lower, expected tighter upper)
    let cases = vec![
      (1, Point::open(1), Point::closed(2), Point::closed(2), Point::open(1)),
      (2, Point::open(2), Point::closed(2), Point::open(2), Point::open(2)),
      (3, Point::closed(2), Point::closed(2), Point::closed(2), Point::closed(2)),
      (4, Point::neg_infinity(), Point::closed(-4), Point::closed(-4), Point::neg_infinity()),
      (5, Point::infinity(), Point::open(4), Point::infinity(), Point::open(4)),
      (6, Point::infinity(), Point::closed(i32::max_value()), Point::closed(i32::max_value()), Point::closed(i32::max_value())),
    ];

    for (id, a, b, lower, upper) in cases {
      assert!(a.tighter_lower(b) == lower && b.tighter_lower(a) == lower,
        "test #{}: tighter lower of {:?} and {:?} should be {:?}.", id, a, b, lower);
      assert!(a.tighter_upper(b) == upper && b.tighter_upper(a) == upper,
        "test #{}: tighter upper of {:?} and {:?} should be {:?}.", id, a, b, upper);
    }
  }
}
