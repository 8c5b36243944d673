// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Numeric domain of the bounds and generic helpers on it.

use crate::error::{Error, Result};
use num_traits::{Bounded as NumBounded, CheckedAdd, Float, One, Zero};
use std::fmt::{Debug, Display};

pub trait Whole
{
  fn whole() -> Self;
}

/// Type usable as the coordinate of an interval bound.
///
/// Besides ordering, a domain must be able to represent both infinities (used as the value of an unbounded point) and tell whether its values can be enumerated one by one.
pub trait Numeric : Copy + PartialOrd + Zero + Debug + Display
{
  fn infinity() -> Self;
  fn neg_infinity() -> Self;

  /// The next value of the domain, `None` if it does not exist (continuous domain or overflow).
  fn successor(self) -> Option<Self>;

  /// `true` if the members of a bounded interval can be enumerated with `successor`.
  fn is_discrete() -> bool;

  /// Canonical representative of the value among the values equal to it (`-0.0` becomes `0.0`).
  fn normalize(self) -> Self;
}

macro_rules! integer_numeric_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Numeric for $t
    {
      fn infinity() -> $t {
        <$t as NumBounded>::max_value()
      }

      fn neg_infinity() -> $t {
        <$t as NumBounded>::min_value()
      }

      fn successor(self) -> Option<$t> {
        CheckedAdd::checked_add(&self, &<$t as One>::one())
      }

      fn is_discrete() -> bool { true }

      fn normalize(self) -> $t { self }
    }
  )*}
}

macro_rules! float_numeric_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Numeric for $t
    {
      fn infinity() -> $t {
        <$t as Float>::infinity()
      }

      fn neg_infinity() -> $t {
        <$t as Float>::neg_infinity()
      }

      fn successor(self) -> Option<$t> {
        None
      }

      fn is_discrete() -> bool { false }

      fn normalize(self) -> $t {
        if self == <$t as Zero>::zero() { <$t as Zero>::zero() } else { self }
      }
    }
  )*}
}

integer_numeric_impl!(i8,i16,i32,i64,i128,isize,u8,u16,u32,u64,u128,usize);
float_numeric_impl!(f32,f64);

/// The smallest of two values. Unordered values (NaN) resolve to `a`.
pub fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
  if b < a { b } else { a }
}

/// The largest of two values. Unordered values (NaN) resolve to `a`.
pub fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
  if b > a { b } else { a }
}

/// Smallest element of `elements`, fails on an empty slice.
pub fn min<T: PartialOrd + Copy>(elements: &[T]) -> Result<T> {
  let (first, rest) = elements.split_first().ok_or(Error::EmptyInput)?;
  Ok(rest.iter().fold(*first, |acc, &x| partial_min(acc, x)))
}

/// Largest element of `elements`, fails on an empty slice.
pub fn max<T: PartialOrd + Copy>(elements: &[T]) -> Result<T> {
  let (first, rest) = elements.split_first().ok_or(Error::EmptyInput)?;
  Ok(rest.iter().fold(*first, |acc, &x| partial_max(acc, x)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn integer_domain() {
    assert_eq!(<i32 as Numeric>::infinity(), i32::max_value());
    assert_eq!(<i32 as Numeric>::neg_infinity(), i32::min_value());
    assert_eq!(<u8 as Numeric>::neg_infinity(), 0u8);
    assert_eq!(5i64.successor(), Some(6));
    assert_eq!(u8::max_value().successor(), None);
    assert!(<usize as Numeric>::is_discrete());
  }

  #[test]
  fn float_domain() {
    assert_eq!(<f64 as Numeric>::infinity(), std::f64::INFINITY);
    assert_eq!(<f32 as Numeric>::neg_infinity(), std::f32::NEG_INFINITY);
    assert_eq!(1.5f64.successor(), None);
    assert!(!<f32 as Numeric>::is_discrete());
    assert!((-0.0f64).normalize().is_sign_positive());
    assert_eq!((-2.5f32).normalize(), -2.5);
    assert_eq!((-3i32).normalize(), -3);
  }

  #[test]
  fn min_max() {
    let cases = vec![
      (1, vec![3], 3, 3),
      (2, vec![3, -1, 7], -1, 7),
      (3, vec![2, 2, 2], 2, 2),
      (4, vec![-5, i32::max_value(), i32::min_value()], i32::min_value(), i32::max_value())
    ];

    for (id, elements, expected_min, expected_max) in cases {
      assert!(min(&elements) == Ok(expected_min),
        "test #{}: min({:?}) = {:?} instead of {}.", id, elements, min(&elements), expected_min);
      assert!(max(&elements) == Ok(expected_max),
        "test #{}: max({:?}) = {:?} instead of {}.", id, elements, max(&elements), expected_max);
    }
  }

  #[test]
  fn min_max_floats() {
    let elements = [0.5f64, std::f64::NEG_INFINITY, 2.25];
    assert_eq!(min(&elements), Ok(std::f64::NEG_INFINITY));
    assert_eq!(max(&elements), Ok(2.25));
  }

  #[test]
  fn min_max_empty_input() {
    let empty: [i32; 0] = [];
    assert_eq!(min(&empty), Err(Error::EmptyInput));
    assert_eq!(max(&empty), Err(Error::EmptyInput));
  }

  #[test]
  fn binary_min_max() {
    assert_eq!(partial_min(3, 4), 3);
    assert_eq!(partial_max(3, 4), 4);
    assert_eq!(partial_min(-1.0, -2.0), -2.0);
    assert_eq!(partial_max(-1.0, -2.0), -1.0);
  }
}
