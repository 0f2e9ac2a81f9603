use std::fmt;

use serde::Deserialize;

use super::{BoundedAxisState, Coordinate, InvalidRangeError};

/// Limits and starting size for a [`BoundedEntity`].
///
/// The entity always starts at `position_min`, the upper left corner of the
/// allowed rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    pub size_min: i32,
    pub size_max: i32,
    pub size_initial: i32,
    pub position_min: Coordinate,
    pub position_max: Coordinate,
}

impl EntityConfig {
    pub const DEFAULT_SIZE_MIN: i32 = 4;
    pub const DEFAULT_SIZE_MAX: i32 = 40;
    pub const DEFAULT_SIZE_INITIAL: i32 = 3 * Self::DEFAULT_SIZE_MIN;
    pub const DEFAULT_POSITION_MIN: Coordinate = Coordinate::new(100, 100);
    pub const DEFAULT_POSITION_MAX: Coordinate = Coordinate::new(300, 300);
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            size_min: Self::DEFAULT_SIZE_MIN,
            size_max: Self::DEFAULT_SIZE_MAX,
            size_initial: Self::DEFAULT_SIZE_INITIAL,
            position_min: Self::DEFAULT_POSITION_MIN,
            position_max: Self::DEFAULT_POSITION_MAX,
        }
    }
}

/// The square the user pushes around. Position is its top left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedEntity {
    position: BoundedAxisState<Coordinate>,
    size: BoundedAxisState<i32>,
}

impl BoundedEntity {
    pub fn new(config: &EntityConfig) -> Result<Self, InvalidRangeError> {
        Ok(Self {
            position: BoundedAxisState::new(
                config.position_min,
                config.position_max,
                config.position_min,
            )?,
            size: BoundedAxisState::new(config.size_min, config.size_max, config.size_initial)?,
        })
    }

    /// Moves the entity if the new position is inside the allowed rectangle.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> bool {
        self.position.try_apply_delta((dx, dy))
    }

    /// Grows (or shrinks, for negative `delta`) the entity if the new size is
    /// within limits.
    pub fn resize(&mut self, delta: i32) -> bool {
        self.size.try_apply_delta(delta)
    }

    pub fn position(&self) -> Coordinate {
        self.position.current()
    }

    pub fn size(&self) -> i32 {
        self.size.current()
    }

    /// Status line in the form `"(x, y) size"`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BoundedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position(), self.size())
    }
}
