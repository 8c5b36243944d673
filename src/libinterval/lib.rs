// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library models intervals over ordered numeric domains with open, closed and unbounded endpoints: `(a,b)`, `[a,b]`, `(a,b]`, `[a,b)`, `(a,+∞)`, `[a,+∞)`, `(-∞,b)`, `(-∞,b]`, `(-∞,+∞)`, the single point `{a}` and the empty set.
//!
//! Every interval is classified into one of these eleven [shapes](shape/enum.Shape.html) from its two [bounds](point/struct.Point.html). Intervals support membership, cardinality and intersection; the set operations are exposed through the traits of [gcollections](https://docs.rs/gcollections).
//!
//! # Examples
//!
//! ```rust
//! use interval::{Interval, Shape};
//! use gcollections::ops::*;
//!
//! let a = Interval::open_closed(1, 4).unwrap();
//! let b = Interval::closed_open(2, 5).unwrap();
//! let c = a.intersection(&b);
//! assert_eq!(c.shape(), Shape::Closed);
//! assert_eq!(c.to_string(), "[2,4]");
//! assert_eq!(c.set_notation(), "{x | 2 ≤ x ≤ 4}");
//!
//! let disjoint = Interval::at_least(2).unwrap().intersection(&Interval::less_than(1).unwrap());
//! assert!(disjoint.is_empty());
//! ```
//!
//! # References
//! * [Boost Interval Arithmetic Library](http://www.boost.org/doc/libs/1_57_0/libs/numeric/interval/doc/interval.html)

pub mod error;
pub mod interval;
pub mod notation;
pub mod ops;
pub mod point;
pub mod shape;

pub use crate::error::{Error, Result};
pub use crate::interval::{intersect, Cardinality, Interval};
pub use crate::ops::{max, min, Numeric, Whole};
pub use crate::point::{BoundKind, Point};
pub use crate::shape::{classify, Shape};
