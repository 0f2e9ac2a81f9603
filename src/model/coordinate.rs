use std::fmt;

use serde::Deserialize;

/// A point on the canvas. `(0, 0)` is the top left corner and y grows
/// downwards.
///
/// Coordinates are plain values: nothing mutates one in place, [`translate`]
/// hands back a new one instead.
///
/// [`translate`]: Coordinate::translate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn x(self) -> i32 {
        self.x
    }

    pub const fn y(self) -> i32 {
        self.y
    }

    /// Returns the coordinate shifted by `dx` to the right and `dy` down.
    ///
    /// Overflow is not guarded against here; deltas large enough to leave the
    /// `i32` range are outside what this type supports.
    #[must_use]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_returns_new_value() {
        let origin = Coordinate::new(10, 20);
        let moved = origin.translate(3, -4);

        assert_eq!(moved, Coordinate::new(13, 16));
        assert_eq!(origin, Coordinate::new(10, 20));
    }

    #[test]
    fn translate_and_back() {
        let start = Coordinate::new(-7, 42);
        assert_eq!(start.translate(15, -3).translate(-15, 3), start);
    }

    #[test]
    fn displays_as_pair() {
        assert_eq!(Coordinate::new(100, -2).to_string(), "(100, -2)");
    }

    #[test]
    fn deserializes_from_inline_table() {
        #[derive(Deserialize)]
        struct Wrapper {
            at: Coordinate,
        }

        let wrapper: Wrapper = toml::from_str("at = { x = 5, y = 6 }").unwrap();
        assert_eq!(wrapper.at, Coordinate::new(5, 6));
    }
}
