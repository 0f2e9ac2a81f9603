use std::fmt;

use thiserror::Error;

use super::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRangeError {
    #[error("lower bound {lower} exceeds upper bound {upper}")]
    InvertedBounds { lower: String, upper: String },
    #[error("initial value {initial} lies outside [{lower}, {upper}]")]
    InitialOutOfRange {
        initial: String,
        lower: String,
        upper: String,
    },
}

/// A value that can live inside a [`BoundedAxisState`].
pub trait AxisValue: Copy + PartialEq + fmt::Debug + fmt::Display {
    type Delta: Copy;

    /// `self + delta`, or `None` if the result is not representable.
    fn offset_by(self, delta: Self::Delta) -> Option<Self>;

    /// True if every component of `self` is `<=` the matching component of
    /// `other`.
    fn componentwise_le(self, other: Self) -> bool;
}

impl AxisValue for i32 {
    type Delta = i32;

    fn offset_by(self, delta: i32) -> Option<Self> {
        self.checked_add(delta)
    }

    fn componentwise_le(self, other: Self) -> bool {
        self <= other
    }
}

impl AxisValue for Coordinate {
    type Delta = (i32, i32);

    fn offset_by(self, (dx, dy): (i32, i32)) -> Option<Self> {
        Some(Coordinate::new(
            self.x().checked_add(dx)?,
            self.y().checked_add(dy)?,
        ))
    }

    fn componentwise_le(self, other: Self) -> bool {
        self.x() <= other.x() && self.y() <= other.y()
    }
}

/// A value pinned to a fixed, inclusive range.
///
/// The bounds are set once in [`new`](Self::new). The current value can only
/// change through [`try_apply_delta`](Self::try_apply_delta), which either
/// commits the whole delta or leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedAxisState<T> {
    lower: T,
    upper: T,
    current: T,
}

impl<T: AxisValue> BoundedAxisState<T> {
    pub fn new(lower: T, upper: T, initial: T) -> Result<Self, InvalidRangeError> {
        if !lower.componentwise_le(upper) {
            return Err(InvalidRangeError::InvertedBounds {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }

        let state = Self {
            lower,
            upper,
            current: initial,
        };
        if !state.contains(initial) {
            return Err(InvalidRangeError::InitialOutOfRange {
                initial: initial.to_string(),
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }

        Ok(state)
    }

    pub fn current(&self) -> T {
        self.current
    }

    pub fn lower_bound(&self) -> T {
        self.lower
    }

    pub fn upper_bound(&self) -> T {
        self.upper
    }

    pub fn contains(&self, value: T) -> bool {
        self.lower.componentwise_le(value) && value.componentwise_le(self.upper)
    }

    /// Moves the current value by `delta` if the result stays within bounds.
    ///
    /// Returns `false` and keeps the old value otherwise. For coordinates both
    /// components are checked before anything is committed.
    pub fn try_apply_delta(&mut self, delta: T::Delta) -> bool {
        match self.current.offset_by(delta) {
            Some(candidate) if self.contains(candidate) => {
                self.current = candidate;
                true
            }
            _ => false,
        }
    }
}
