/// InputState. Keys held, pointer drag and wheel accumulated between updates.

use glam::Vec2;
use rustc_hash::FxHashSet;
use crate::technique::{AxisInput, GimbalInput};

/// Keys the sampler reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Escape,
}

/// Platform-independent input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyPressed(Key),
    KeyReleased(Key),
    /// Cursor position in window pixels
    CursorMoved(Vec2),
    /// Left button pressed (`true`) or released (`false`)
    LeftButton(bool),
    /// Wheel movement in lines, positive away from the user
    Wheel(f32),
    /// Window focus lost; every held key is released
    FocusLost,
}

/// Pointer motion accumulated since the previous update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    /// Cursor movement while the left button was held, in pixels
    pub drag: Vec2,
    /// Wheel lines
    pub wheel: f32,
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: FxHashSet<Key>,
    cursor: Option<Vec2>,
    left_button: bool,
    pending: PointerFrame,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyPressed(key) => {
                self.held.insert(key);
            }
            InputEvent::KeyReleased(key) => {
                self.held.remove(&key);
            }
            InputEvent::CursorMoved(position) => {
                if let (Some(previous), true) = (self.cursor, self.left_button) {
                    self.pending.drag += position - previous;
                }
                self.cursor = Some(position);
            }
            InputEvent::LeftButton(pressed) => self.left_button = pressed,
            InputEvent::Wheel(lines) => self.pending.wheel += lines,
            InputEvent::FocusLost => {
                self.held.clear();
                self.left_button = false;
            }
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Take the pointer motion accumulated since the last call
    pub fn take_pointer_frame(&mut self) -> PointerFrame {
        std::mem::take(&mut self.pending)
    }

    /// Directional gimbal input from the held keys.
    ///
    /// Up/Down drive X, Right/Left drive Y, PageUp/PageDown drive Z.
    pub fn gimbal_input(&self) -> GimbalInput {
        GimbalInput {
            x: AxisInput::new(self.is_held(Key::ArrowUp), self.is_held(Key::ArrowDown)),
            y: AxisInput::new(self.is_held(Key::ArrowRight), self.is_held(Key::ArrowLeft)),
            z: AxisInput::new(self.is_held(Key::PageUp), self.is_held(Key::PageDown)),
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
