use winit::keyboard::{Key, NamedKey};

use crate::model::BoundedEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ZoomIn,
    ZoomOut,
}

impl Command {
    /// Arrow keys move the box, `z` shrinks it and `x` grows it. Any other
    /// key is not a command.
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(NamedKey::ArrowUp) => Some(Self::MoveUp),
            Key::Named(NamedKey::ArrowDown) => Some(Self::MoveDown),
            Key::Named(NamedKey::ArrowLeft) => Some(Self::MoveLeft),
            Key::Named(NamedKey::ArrowRight) => Some(Self::MoveRight),
            Key::Character(ch) if ch.eq_ignore_ascii_case("z") => Some(Self::ZoomOut),
            Key::Character(ch) if ch.eq_ignore_ascii_case("x") => Some(Self::ZoomIn),
            _ => None,
        }
    }
}

/// Turns commands into model updates, one fixed step at a time.
#[derive(Debug, Clone, Copy)]
pub struct Controller {
    step: i32,
}

impl Controller {
    pub fn new(step: i32) -> Self {
        Self { step }
    }

    /// Applies `command` to `entity`. Returns whether the model accepted it,
    /// which tells the caller if a redraw is needed.
    pub fn dispatch(&self, entity: &mut BoundedEntity, command: Command) -> bool {
        let step = self.step;
        match command {
            Command::MoveUp => entity.move_by(0, -step),
            Command::MoveDown => entity.move_by(0, step),
            Command::MoveLeft => entity.move_by(-step, 0),
            Command::MoveRight => entity.move_by(step, 0),
            Command::ZoomIn => entity.resize(step),
            Command::ZoomOut => entity.resize(-step),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinate, EntityConfig};

    fn entity() -> BoundedEntity {
        BoundedEntity::new(&EntityConfig::default()).unwrap()
    }

    #[test]
    fn maps_keys_to_commands() {
        assert_eq!(
            Command::from_key(&Key::Named(NamedKey::ArrowUp)),
            Some(Command::MoveUp)
        );
        assert_eq!(
            Command::from_key(&Key::Named(NamedKey::ArrowRight)),
            Some(Command::MoveRight)
        );
        assert_eq!(
            Command::from_key(&Key::Character("z".into())),
            Some(Command::ZoomOut)
        );
        assert_eq!(
            Command::from_key(&Key::Character("X".into())),
            Some(Command::ZoomIn)
        );
        assert_eq!(Command::from_key(&Key::Character("q".into())), None);
        assert_eq!(Command::from_key(&Key::Named(NamedKey::Enter)), None);
    }

    #[test]
    fn moves_by_step() {
        let controller = Controller::new(2);
        let mut entity = entity();

        assert!(controller.dispatch(&mut entity, Command::MoveRight));
        assert!(controller.dispatch(&mut entity, Command::MoveDown));
        assert_eq!(entity.position(), Coordinate::new(102, 102));

        assert!(controller.dispatch(&mut entity, Command::MoveLeft));
        assert!(controller.dispatch(&mut entity, Command::MoveUp));
        assert_eq!(entity.position(), Coordinate::new(100, 100));
    }

    #[test]
    fn blocked_at_upper_left_corner() {
        let controller = Controller::new(2);
        let mut entity = entity();

        assert!(!controller.dispatch(&mut entity, Command::MoveUp));
        assert!(!controller.dispatch(&mut entity, Command::MoveLeft));
        assert_eq!(entity.position(), Coordinate::new(100, 100));
    }

    #[test]
    fn zoom_changes_size_by_step() {
        let controller = Controller::new(2);
        let mut entity = entity();

        assert!(controller.dispatch(&mut entity, Command::ZoomIn));
        assert_eq!(entity.size(), 14);

        for _ in 0..5 {
            assert!(controller.dispatch(&mut entity, Command::ZoomOut));
        }
        assert_eq!(entity.size(), 4);
        assert!(!controller.dispatch(&mut entity, Command::ZoomOut));
        assert_eq!(entity.size(), 4);
    }
}
