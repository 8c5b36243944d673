// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

/// Errors raised when building intervals from malformed input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
  /// The lower bound is greater than the upper bound, the two bounds cannot be ordered, or an unbounded point is not the infinity of its side.
  #[error("invalid bounds: lower bound {lower} and upper bound {upper} do not delimit an interval")]
  InvalidBounds { lower: String, upper: String },

  #[error("cannot compute the extremum of an empty input")]
  EmptyInput,
}

pub type Result<T> = std::result::Result<T, Error>;
