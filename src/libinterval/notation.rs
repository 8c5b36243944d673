// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Textual representations of intervals.
//!
//! `Display` renders the interval notation (`[2,4)`, `(9,+∞)`) and `Interval::set_notation` the set-builder notation (`{x | 2 ≤ x < 4}`).

use crate::interval::{Cardinality, Interval};
use crate::ops::Numeric;
use crate::shape::Shape;
use std::fmt::{Display, Error, Formatter};

impl<N: Numeric> Display for Interval<N>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    let lb = self.lower().value();
    let ub = self.upper().value();
    match self.shape() {
      Shape::Empty => formatter.write_str("{}"),
      Shape::Degenerate => write!(formatter, "{{{}}}", lb),
      Shape::Open => write!(formatter, "({},{})", lb, ub),
      Shape::Closed => write!(formatter, "[{},{}]", lb, ub),
      Shape::OpenClosed => write!(formatter, "({},{}]", lb, ub),
      Shape::ClosedOpen => write!(formatter, "[{},{})", lb, ub),
      Shape::GreaterThan => write!(formatter, "({},+∞)", lb),
      Shape::AtLeast => write!(formatter, "[{},+∞)", lb),
      Shape::LessThan => write!(formatter, "(-∞,{})", ub),
      Shape::AtMost => write!(formatter, "(-∞,{}]", ub),
      Shape::Unbounded => formatter.write_str("(-∞,+∞)")
    }
  }
}

impl<N: Numeric> Interval<N>
{
  /// The interval written as a set-builder predicate on `x`.
  pub fn set_notation(&self) -> String {
    let lb = self.lower().value();
    let ub = self.upper().value();
    match self.shape() {
      Shape::Empty => String::from("{}"),
      Shape::Degenerate => format!("{{x | x = {}}}", lb),
      Shape::Open => format!("{{x | {} < x < {}}}", lb, ub),
      Shape::Closed => format!("{{x | {} ≤ x ≤ {}}}", lb, ub),
      Shape::OpenClosed => format!("{{x | {} < x ≤ {}}}", lb, ub),
      Shape::ClosedOpen => format!("{{x | {} ≤ x < {}}}", lb, ub),
      Shape::GreaterThan => format!("{{x | x > {}}}", lb),
      Shape::AtLeast => format!("{{x | x ≥ {}}}", lb),
      Shape::LessThan => format!("{{x | x < {}}}", ub),
      Shape::AtMost => format!("{{x | x ≤ {}}}", ub),
      Shape::Unbounded => String::from("{x | -∞ < x < +∞}")
    }
  }
}

impl Display for Cardinality
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    match *self {
      Cardinality::Finite(n) => write!(formatter, "{}", n),
      Cardinality::Infinite => formatter.write_str("∞")
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::interval::{Cardinality, Interval};
  use gcollections::ops::Empty;

  #[test]
  fn notations() {
    let cases = vec![
      (Interval::empty(), "{}", "{}"),
      (Interval::closed(4, 4).unwrap(), "{4}", "{x | x = 4}"),
      (Interval::open(0, 9).unwrap(), "(0,9)", "{x | 0 < x < 9}"),
      (Interval::closed(0, 9).unwrap(), "[0,9]", "{x | 0 ≤ x ≤ 9}"),
      (Interval::open_closed(0, 9).unwrap(), "(0,9]", "{x | 0 < x ≤ 9}"),
      (Interval::closed_open(0, 9).unwrap(), "[0,9)", "{x | 0 ≤ x < 9}"),
      (Interval::greater_than(9).unwrap(), "(9,+∞)", "{x | x > 9}"),
      (Interval::at_least(9).unwrap(), "[9,+∞)", "{x | x ≥ 9}"),
      (Interval::less_than(9).unwrap(), "(-∞,9)", "{x | x < 9}"),
      (Interval::at_most(9).unwrap(), "(-∞,9]", "{x | x ≤ 9}"),
      (Interval::unbounded(), "(-∞,+∞)", "{x | -∞ < x < +∞}"),
      (Interval::closed_open(-3, -1).unwrap(), "[-3,-1)", "{x | -3 ≤ x < -1}"),
    ];

    for (i, notation, set_notation) in cases {
      let i: Interval<i32> = i;
      assert!(i.to_string() == notation,
        "{:?} is written {} instead of {}.", i, i, notation);
      assert!(i.set_notation() == set_notation,
        "{:?} is written {} instead of {}.", i, i.set_notation(), set_notation);
    }
  }

  #[test]
  fn float_notations() {
    assert_eq!(Interval::open_closed(0.5, 2.25).unwrap().to_string(), "(0.5,2.25]");
    assert_eq!(Interval::<f64>::greater_than(1.5).unwrap().set_notation(), "{x | x > 1.5}");
    assert_eq!(Interval::<f32>::unbounded().to_string(), "(-∞,+∞)");
  }

  #[test]
  fn cardinality() {
    assert_eq!(Cardinality::Finite(8).to_string(), "8");
    assert_eq!(Cardinality::Infinite.to_string(), "∞");
  }
}
