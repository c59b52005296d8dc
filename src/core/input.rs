//! Per-frame input snapshot.
use raylib::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    /// Only true on the frame the key went down.
    pub jump: bool,
}

impl InputState {
    pub fn poll(rl: &RaylibHandle) -> Self {
        Self {
            left: rl.is_key_down(KeyboardKey::KEY_A) || rl.is_key_down(KeyboardKey::KEY_LEFT),
            right: rl.is_key_down(KeyboardKey::KEY_D) || rl.is_key_down(KeyboardKey::KEY_RIGHT),
            jump: rl.is_key_pressed(KeyboardKey::KEY_SPACE),
        }
    }
}
