use glam::Vec2;
use super::*;

#[test]
fn test_key_press_and_release() {
    let mut input = InputState::new();
    input.apply(InputEvent::KeyPressed(Key::ArrowUp));
    assert!(input.is_held(Key::ArrowUp));
    input.apply(InputEvent::KeyReleased(Key::ArrowUp));
    assert!(!input.is_held(Key::ArrowUp));
}

#[test]
fn test_focus_lost_releases_everything() {
    let mut input = InputState::new();
    input.apply(InputEvent::KeyPressed(Key::ArrowLeft));
    input.apply(InputEvent::LeftButton(true));
    input.apply(InputEvent::FocusLost);
    assert!(!input.is_held(Key::ArrowLeft));

    input.apply(InputEvent::CursorMoved(Vec2::new(0.0, 0.0)));
    input.apply(InputEvent::CursorMoved(Vec2::new(10.0, 0.0)));
    assert_eq!(input.take_pointer_frame().drag, Vec2::ZERO);
}

#[test]
fn test_drag_only_accumulates_with_button_held() {
    let mut input = InputState::new();
    input.apply(InputEvent::CursorMoved(Vec2::new(100.0, 100.0)));
    input.apply(InputEvent::CursorMoved(Vec2::new(110.0, 100.0)));
    input.apply(InputEvent::LeftButton(true));
    input.apply(InputEvent::CursorMoved(Vec2::new(120.0, 95.0)));
    input.apply(InputEvent::CursorMoved(Vec2::new(125.0, 90.0)));

    let frame = input.take_pointer_frame();
    assert_eq!(frame.drag, Vec2::new(15.0, -10.0));
    assert_eq!(input.cursor(), Some(Vec2::new(125.0, 90.0)));
}

#[test]
fn test_take_pointer_frame_resets_accumulators() {
    let mut input = InputState::new();
    input.apply(InputEvent::Wheel(1.0));
    input.apply(InputEvent::Wheel(2.0));
    assert_eq!(input.take_pointer_frame().wheel, 3.0);
    assert_eq!(input.take_pointer_frame(), PointerFrame::default());
}

#[test]
fn test_gimbal_input_mapping() {
    let mut input = InputState::new();
    input.apply(InputEvent::KeyPressed(Key::ArrowUp));
    input.apply(InputEvent::KeyPressed(Key::ArrowLeft));
    input.apply(InputEvent::KeyPressed(Key::PageUp));
    input.apply(InputEvent::KeyPressed(Key::PageDown));

    let gimbal = input.gimbal_input();
    assert_eq!(gimbal.x.direction(), 1.0);
    assert_eq!(gimbal.y.direction(), -1.0);
    assert_eq!(gimbal.z.direction(), 0.0);
}
