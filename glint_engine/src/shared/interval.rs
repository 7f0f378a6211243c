use std::fmt::{Display, Formatter};
use std::ops::{Range, RangeInclusive};

use crate::core::types::Number;

/// A closed interval of values, `start..=end`.
///
/// Used both for distances along a ray (`tMin..tMax`) and for time windows (`t0..t1`).
/// Unbounded ends are represented with infinities.
///
/// # Requirements
/// An interval where `start > end` is empty, and contains nothing.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Interval<T> {
    pub start: T,
    pub end: T,
}

impl<T> Interval<T> {
    pub const fn new(start: T, end: T) -> Self { Self { start, end } }
    pub fn with_start(self, start: T) -> Self { Self { start, ..self } }
    pub fn with_end(self, end: T) -> Self { Self { end, ..self } }
}

impl Interval<Number> {
    /// The interval that contains every (non-NaN) number
    pub const FULL: Self = Self::new(Number::NEG_INFINITY, Number::INFINITY);
    /// A degenerate interval at `0`, used where a single instant is enough
    pub const ZERO: Self = Self::new(0., 0.);

    pub fn size(&self) -> Number { self.end - self.start }
}

impl<T: PartialOrd> Interval<T> {
    /// Checks if the item is inside the interval, including the endpoints.
    ///
    /// NaN is never contained.
    pub fn contains(&self, item: &T) -> bool { &self.start <= item && item <= &self.end }

    /// Checks if the item is strictly inside the interval, excluding the endpoints.
    pub fn surrounds(&self, item: &T) -> bool { &self.start < item && item < &self.end }

    pub fn is_empty(&self) -> bool { !(self.start <= self.end) }
}

impl<T> From<Range<T>> for Interval<T> {
    fn from(value: Range<T>) -> Self { Self::new(value.start, value.end) }
}
impl<T> From<RangeInclusive<T>> for Interval<T> {
    fn from(value: RangeInclusive<T>) -> Self {
        let (start, end) = value.into_inner();
        Self::new(start, end)
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}..={}", self.start, self.end) }
}
