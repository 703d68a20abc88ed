//! winit → InputEvent translation.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use super::{InputEvent, Key};

/// Pixels of touchpad scrolling that count as one wheel line
const PIXELS_PER_LINE: f32 = 120.0;

/// Map a physical key code to a sampler key
pub fn map_key_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::ArrowUp => Some(Key::ArrowUp),
        KeyCode::ArrowDown => Some(Key::ArrowDown),
        KeyCode::ArrowLeft => Some(Key::ArrowLeft),
        KeyCode::ArrowRight => Some(Key::ArrowRight),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// Translates a winit `WindowEvent` into an `InputEvent`.
///
/// Returns `None` for events the sampler does not react to.
pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            let key = match event.physical_key {
                PhysicalKey::Code(code) => map_key_code(code)?,
                PhysicalKey::Unidentified(_) => return None,
            };
            Some(match event.state {
                ElementState::Pressed => InputEvent::KeyPressed(key),
                ElementState::Released => InputEvent::KeyReleased(key),
            })
        }

        WindowEvent::CursorMoved { position, .. } => {
            Some(InputEvent::CursorMoved(Vec2::new(position.x as f32, position.y as f32)))
        }

        WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
            Some(InputEvent::LeftButton(*state == ElementState::Pressed))
        }

        WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Wheel(match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_LINE,
        })),

        WindowEvent::Focused(false) => Some(InputEvent::FocusLost),

        _ => None,
    }
}
