mod bounded;
mod coordinate;
mod entity;

pub use bounded::AxisValue;
pub use bounded::BoundedAxisState;
pub use bounded::InvalidRangeError;
pub use coordinate::Coordinate;
pub use entity::BoundedEntity;
pub use entity::EntityConfig;
