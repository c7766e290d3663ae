use blue_squirrel::input::{Action, InputState};
use sdl2::keyboard::{KeyboardState, Scancode};

/// Every key that drives an action. Several keys may share one action.
const BINDINGS: [(Scancode, Action); 8] = [
    (Scancode::A, Action::MoveLeft),
    (Scancode::Left, Action::MoveLeft),
    (Scancode::D, Action::MoveRight),
    (Scancode::Right, Action::MoveRight),
    (Scancode::W, Action::Jump),
    (Scancode::Up, Action::Jump),
    (Scancode::Space, Action::Jump),
    (Scancode::F, Action::Shoot),
];

/// Samples the held keys into this frame's input.
pub fn read_input(keyboard: &KeyboardState) -> InputState {
    let mut input = InputState::new();

    for (scancode, action) in BINDINGS {
        if keyboard.is_scancode_pressed(scancode) {
            input.set(action, true);
        }
    }

    input
}
