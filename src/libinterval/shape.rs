// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Classification of a pair of bounds into one of the eleven interval shapes.

use crate::ops::Numeric;
use crate::point::Point;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Shape {
  /// `{}`
  Empty,
  /// `{a}`
  Degenerate,
  /// `(a,b) = {x | a < x < b}`
  Open,
  /// `[a,b] = {x | a <= x <= b}`
  Closed,
  /// `(a,b] = {x | a < x <= b}`
  OpenClosed,
  /// `[a,b) = {x | a <= x < b}`
  ClosedOpen,
  /// `(a,+∞) = {x | x > a}`
  GreaterThan,
  /// `[a,+∞) = {x | x >= a}`
  AtLeast,
  /// `(-∞,b) = {x | x < b}`
  LessThan,
  /// `(-∞,b] = {x | x <= b}`
  AtMost,
  /// `(-∞,+∞)`
  Unbounded
}

impl Shape
{
  /// Both bounds are finite and the shape is not empty.
  pub fn is_bounded(self) -> bool {
    use self::Shape::*;
    match self {
      Degenerate | Open | Closed | OpenClosed | ClosedOpen => true,
      _ => false
    }
  }

  /// At least one bound is an infinity.
  pub fn is_unbounded(self) -> bool {
    use self::Shape::*;
    match self {
      GreaterThan | AtLeast | LessThan | AtMost | Unbounded => true,
      _ => false
    }
  }
}

/// Shape of the interval delimited by `lower` and `upper`.
///
/// Requires `lower.value() <= upper.value()`. Four finite combinations sharing the same value (`(a,a)`, `[a,a]`, `(a,a]` and `[a,a)`) all collapse to `Degenerate`. The result never is `Empty`.
pub fn classify<N: Numeric>(lower: &Point<N>, upper: &Point<N>) -> Shape {
  use crate::point::BoundKind::*;
  let same_value = lower.value() == upper.value();
  match (lower.kind(), upper.kind()) {
    (Open, Open) | (Closed, Closed)
  | (Open, Closed) | (Closed, Open) if same_value => Shape::Degenerate,
    (Open, Open) => Shape::Open,
    (Closed, Closed) => Shape::Closed,
    (Open, Closed) => Shape::OpenClosed,
    (Closed, Open) => Shape::ClosedOpen,
    (Open, Unbounded) => Shape::GreaterThan,
    (Closed, Unbounded) => Shape::AtLeast,
    (Unbounded, Open) => Shape::LessThan,
    (Unbounded, Closed) => Shape::AtMost,
    (Unbounded, Unbounded) => Shape::Unbounded
  }
}
