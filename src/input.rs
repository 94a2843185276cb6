use winit::event::{ElementState, VirtualKeyCode};

use crate::snake::Direction;

/// Logical keys the game reacts to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Pause,
    Confirm,
}

impl Key {
    pub fn from_keycode(key: VirtualKeyCode) -> Option<Key> {
        match key {
            VirtualKeyCode::Up => Some(Key::Up),
            VirtualKeyCode::Down => Some(Key::Down),
            VirtualKeyCode::Left => Some(Key::Left),
            VirtualKeyCode::Right => Some(Key::Right),
            VirtualKeyCode::P => Some(Key::Pause),
            VirtualKeyCode::Return | VirtualKeyCode::NumpadEnter => Some(Key::Confirm),
            _ => None,
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Pause | Key::Confirm => None,
        }
    }
}

/// Collects key presses between two frames.
///
/// winit repeats `Pressed` while a key is held down; only the first press
/// after a release counts as new.
#[derive(Default, Debug)]
pub struct FrameInput {
    pressed: Vec<Key>,
    held: Vec<Key>,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, keycode: VirtualKeyCode, state: ElementState) {
        let Some(key) = Key::from_keycode(keycode) else {
            return;
        };
        match state {
            ElementState::Pressed => {
                if !self.held.contains(&key) {
                    self.held.push(key);
                    self.pressed.push(key);
                }
            }
            ElementState::Released => self.held.retain(|k| *k != key),
        }
    }

    /// Newly pressed keys since the last call, in press order.
    pub fn take(&mut self) -> Vec<Key> {
        std::mem::take(&mut self.pressed)
    }
}
