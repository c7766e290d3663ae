//! Logical input actions
//!
//! The simulation never sees keys or scancodes. It asks an [`InputSource`]
//! whether a logical [`Action`] is held this frame; the front end decides
//! which physical keys map to which action.

/// Actions the player can hold during gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Shoot,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::MoveLeft, Action::MoveRight, Action::Jump, Action::Shoot];

    fn index(self) -> usize {
        match self {
            Action::MoveLeft => 0,
            Action::MoveRight => 1,
            Action::Jump => 2,
            Action::Shoot => 3,
        }
    }
}

/// Boolean key-state query by logical action.
pub trait InputSource {
    fn is_pressed(&self, action: Action) -> bool;
}

/// A snapshot of which actions are held.
///
/// # Example
///
/// ```rust
/// use blue_squirrel::input::{Action, InputSource, InputState};
///
/// let input = InputState::new().with(Action::MoveRight).with(Action::Shoot);
/// assert!(input.is_pressed(Action::MoveRight));
/// assert!(!input.is_pressed(Action::Jump));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pressed: [bool; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, action: Action) -> Self {
        self.set(action, true);
        self
    }

    pub fn set(&mut self, action: Action, pressed: bool) {
        self.pressed[action.index()] = pressed;
    }
}

impl InputSource for InputState {
    fn is_pressed(&self, action: Action) -> bool {
        self.pressed[action.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_nothing_pressed() {
        let input = InputState::new();
        for action in Action::ALL {
            assert!(!input.is_pressed(action));
        }
    }

    #[test]
    fn test_set_and_release() {
        let mut input = InputState::new();
        input.set(Action::Jump, true);
        assert!(input.is_pressed(Action::Jump));

        input.set(Action::Jump, false);
        assert!(!input.is_pressed(Action::Jump));
        assert_eq!(input, InputState::new());
    }
}
