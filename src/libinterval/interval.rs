// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval with open, closed or unbounded endpoints.
//!
//! An interval is made of two `Point`s; its `Shape` is derived from them when it is built and cannot be set in any other way. Intervals are immutable: every operation combining intervals returns a new one.
//!
//! Over a discrete domain (integers), the members of a bounded interval are enumerated once at construction and can be read with `values()`. This enumeration is never performed on continuous domains (floats) or on intervals with an infinite bound. It is eager: building a very wide integer interval, directly or as the result of an intersection, allocates one element per member.
//!
//! # Examples
//!
//! ```rust
//! use interval::{Cardinality, Interval, Shape};
//! use gcollections::ops::*;
//!
//! let a = Interval::open(1, 4).unwrap();
//! let b = Interval::closed(2, 5).unwrap();
//! let c = a.intersection(&b);
//!
//! assert_eq!(c.shape(), Shape::ClosedOpen);
//! assert_eq!(c.values(), &[2, 3]);
//! assert_eq!(c.count(), Cardinality::Finite(2));
//! assert!(c.contains(&2));
//! assert!(!c.contains(&4));
//! assert_eq!(c.to_string(), "[2,4)");
//! ```

use crate::error::{Error, Result};
use crate::ops::{max, min, Numeric, Whole};
use crate::point::Point;
use crate::shape::{classify, Shape};
use gcollections::kind::Collection;
use gcollections::ops::{Contains, Empty, Intersection, IsEmpty, IsSingleton};
use log::{debug, trace};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::cmp::Ordering;
use std::iter;

/// Number of members of an interval.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub enum Cardinality {
  Finite(usize),
  Infinite
}

impl Cardinality
{
  pub fn is_finite(self) -> bool {
    match self {
      Cardinality::Finite(_) => true,
      Cardinality::Infinite => false
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interval<N> {
  lower: Point<N>,
  upper: Point<N>,
  values: Option<Vec<N>>,
  shape: Shape
}

impl<N: Numeric> Interval<N>
{
  /// Builds the interval delimited by `lower` and `upper`.
  ///
  /// Fails with `Error::InvalidBounds` if the value of `lower` is greater than the value of `upper`, if they cannot be compared, or if an unbounded point is not `-∞` on the lower side and `+∞` on the upper side.
  ///
  /// The members of a bounded interval over an integer domain are enumerated here, so a very wide interval such as `[0,u64::MAX]` allocates accordingly.
  pub fn new(lower: Point<N>, upper: Point<N>) -> Result<Interval<N>> {
    let ordered = match lower.value().partial_cmp(&upper.value()) {
      Some(Ordering::Less) | Some(Ordering::Equal) => true,
      _ => false
    };
    if ordered && lower.is_valid_lower() && upper.is_valid_upper() {
      Ok(Interval::from_ordered(lower.normalized(), upper.normalized()))
    }
    else {
      debug!("rejected interval bounds {:?} and {:?}", lower, upper);
      Err(Error::InvalidBounds {
        lower: lower.value().to_string(),
        upper: upper.value().to_string()
      })
    }
  }

  // Precondition: `lower.value() <= upper.value()` and unbounded points at their infinity.
  fn from_ordered(lower: Point<N>, upper: Point<N>) -> Interval<N> {
    debug_assert!(lower.value() <= upper.value(),
      "The lower bound of an interval must not exceed its upper bound.");
    let shape = classify(&lower, &upper);
    let values = materialize(&lower, &upper, shape);
    trace!("built {:?} interval from {:?} and {:?}", shape, lower, upper);
    Interval { lower, upper, values, shape }
  }

  /// `(lower,upper)`
  pub fn open(lower: N, upper: N) -> Result<Interval<N>> {
    Interval::new(Point::open(lower), Point::open(upper))
  }

  /// `[lower,upper]`
  pub fn closed(lower: N, upper: N) -> Result<Interval<N>> {
    Interval::new(Point::closed(lower), Point::closed(upper))
  }

  /// `(lower,upper]`
  pub fn open_closed(lower: N, upper: N) -> Result<Interval<N>> {
    Interval::new(Point::open(lower), Point::closed(upper))
  }

  /// `[lower,upper)`
  pub fn closed_open(lower: N, upper: N) -> Result<Interval<N>> {
    Interval::new(Point::closed(lower), Point::open(upper))
  }

  /// `(lower,+∞)`
  pub fn greater_than(lower: N) -> Result<Interval<N>> {
    Interval::new(Point::open(lower), Point::infinity())
  }

  /// `[lower,+∞)`
  pub fn at_least(lower: N) -> Result<Interval<N>> {
    Interval::new(Point::closed(lower), Point::infinity())
  }

  /// `(-∞,upper)`
  pub fn less_than(upper: N) -> Result<Interval<N>> {
    Interval::new(Point::neg_infinity(), Point::open(upper))
  }

  /// `(-∞,upper]`
  pub fn at_most(upper: N) -> Result<Interval<N>> {
    Interval::new(Point::neg_infinity(), Point::closed(upper))
  }

  /// `(-∞,+∞)`
  pub fn unbounded() -> Interval<N> {
    Interval::from_ordered(Point::neg_infinity(), Point::infinity())
  }

  pub fn lower(&self) -> Point<N> {
    self.lower
  }

  pub fn upper(&self) -> Point<N> {
    self.upper
  }

  pub fn shape(&self) -> Shape {
    self.shape
  }

  /// Members of the interval in increasing order, empty when they are not materialized.
  pub fn values(&self) -> &[N] {
    self.values.as_deref().unwrap_or(&[])
  }

  pub fn is_materialized(&self) -> bool {
    self.values.is_some()
  }

  /// Both bounds are finite and the interval is not empty.
  pub fn is_bounded(&self) -> bool {
    self.shape.is_bounded()
  }

  pub fn count(&self) -> Cardinality {
    match self.shape {
      Shape::Empty => Cardinality::Finite(0),
      Shape::Degenerate => Cardinality::Finite(1),
      s if s.is_unbounded() => Cardinality::Infinite,
      // Bounded intervals over a continuous domain have uncountably many members.
      _ => self.values.as_ref().map_or(Cardinality::Infinite, |v| Cardinality::Finite(v.len()))
    }
  }
}

/// Members of the interval `lower..upper` of shape `shape`, `None` when they cannot be enumerated.
fn materialize<N: Numeric>(lower: &Point<N>, upper: &Point<N>, shape: Shape) -> Option<Vec<N>> {
  match shape {
    Shape::Degenerate => Some(vec![lower.value()]),
    Shape::Open | Shape::Closed | Shape::OpenClosed | Shape::ClosedOpen if N::is_discrete() => {
      let first =
        if lower.is_open() { lower.value().successor() }
        else { Some(lower.value()) };
      let last = upper.value();
      let values = iter::successors(first, |n| n.successor())
        .take_while(|&n| if upper.is_open() { n < last } else { n <= last })
        .collect();
      Some(values)
    }
    _ => None
  }
}

/// `a ∩ b`, see `Intersection::intersection`.
pub fn intersect<N: Numeric>(a: &Interval<N>, b: &Interval<N>) -> Interval<N> {
  a.intersection(b)
}

impl<N> Collection for Interval<N>
{
  type Item = N;
}

impl<N: Numeric> Empty for Interval<N>
{
  fn empty() -> Interval<N> {
    Interval {
      lower: Point::open(N::zero()),
      upper: Point::open(N::zero()),
      values: None,
      shape: Shape::Empty
    }
  }
}

impl<N: Numeric> Whole for Interval<N>
{
  fn whole() -> Interval<N> {
    Interval::unbounded()
  }
}

impl<N: Numeric> IsEmpty for Interval<N>
{
  fn is_empty(&self) -> bool {
    self.shape == Shape::Empty
  }
}

impl<N: Numeric> IsSingleton for Interval<N>
{
  fn is_singleton(&self) -> bool {
    self.shape == Shape::Degenerate
  }
}

impl<N: Numeric> Contains for Interval<N>
{
  fn contains(&self, value: &N) -> bool {
    let x = *value;
    let lb = self.lower.value();
    let ub = self.upper.value();
    match self.shape {
      Shape::Empty => false,
      Shape::Degenerate => x == lb,
      Shape::Open => lb < x && x < ub,
      Shape::Closed => lb <= x && x <= ub,
      Shape::OpenClosed => lb < x && x <= ub,
      Shape::ClosedOpen => lb <= x && x < ub,
      Shape::GreaterThan => lb < x,
      Shape::AtLeast => lb <= x,
      Shape::LessThan => x < ub,
      Shape::AtMost => x <= ub,
      Shape::Unbounded => true
    }
  }
}

impl<N: Numeric> Intersection<Interval<N>> for Interval<N>
{
  type Output = Interval<N>;

  /// On a bound value shared by both intervals, the strictest kind wins: the value is excluded from the result if either side excludes it.
  fn intersection(&self, rhs: &Interval<N>) -> Interval<N> {
    if self.is_empty() || rhs.is_empty() {
      return Interval::empty();
    }
    match self.overlapping_part(rhs) {
      Ok(res) => res,
      Err(err) => {
        // Unreachable: both operands passed the checks of `Interval::new`.
        debug_assert!(false, "intersection of {:?} and {:?} failed: {}", self, rhs, err);
        Interval::empty()
      }
    }
  }
}

impl<N: Numeric> Interval<N>
{
  fn overlapping_part(&self, rhs: &Interval<N>) -> Result<Interval<N>> {
    let lb = max(&[self.lower.value(), rhs.lower.value()])?;
    let ub = min(&[self.upper.value(), rhs.upper.value()])?;
    if lb > ub {
      debug!("intersection of disjoint intervals {:?} and {:?}", self.shape, rhs.shape);
      return Ok(Interval::empty());
    }
    let lower = self.lower.tighter_lower(rhs.lower);
    let upper = self.upper.tighter_upper(rhs.upper);
    Interval::new(lower, upper)
  }
}

impl<N> Serialize for Interval<N> where
 N: Numeric + Serialize
{
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where
   S: Serializer
  {
    if self.is_empty() {
      serializer.serialize_none()
    }
    else {
      serializer.serialize_some(&(self.lower, self.upper))
    }
  }
}

impl<'de, N> Deserialize<'de> for Interval<N> where
 N: Numeric + Deserialize<'de>
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error> where
   D: Deserializer<'de>
  {
    match Option::<(Point<N>, Point<N>)>::deserialize(deserializer)? {
      None => Ok(Interval::empty()),
      Some((lower, upper)) => Interval::new(lower, upper).map_err(de::Error::custom)
    }
  }
}
