//! Window Event Mapping
//!
//! Translates winit window events into engine [`InputEvent`]s.

use glam::Vec2;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

use crate::input::{InputEvent, KeyCode, MouseButton, ScrollDelta};

/// Map a winit key code to an engine key code.
///
/// Keys the simulation has no use for map to [`KeyCode::Unknown`].
pub fn map_key_code(key: WinitKeyCode) -> KeyCode {
    match key {
        WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
        WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
        WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
        WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
        WinitKeyCode::KeyW => KeyCode::W,
        WinitKeyCode::KeyA => KeyCode::A,
        WinitKeyCode::KeyS => KeyCode::S,
        WinitKeyCode::KeyD => KeyCode::D,
        WinitKeyCode::KeyR => KeyCode::R,
        WinitKeyCode::Space => KeyCode::Space,
        WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => KeyCode::Enter,
        WinitKeyCode::Escape => KeyCode::Escape,
        WinitKeyCode::ShiftLeft => KeyCode::ShiftLeft,
        WinitKeyCode::ShiftRight => KeyCode::ShiftRight,
        WinitKeyCode::ControlLeft => KeyCode::ControlLeft,
        WinitKeyCode::ControlRight => KeyCode::ControlRight,
        _ => KeyCode::Unknown,
    }
}

/// Map a winit mouse button to an engine mouse button.
pub fn map_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(id) => MouseButton::Other(id),
    }
}

/// Map a winit wheel delta. Pixel deltas (trackpads) are scaled down to
/// approximate line notches.
pub fn map_scroll_delta(delta: MouseScrollDelta) -> ScrollDelta {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => ScrollDelta::from_lines(x, y),
        MouseScrollDelta::PixelDelta(pos) => ScrollDelta::from_pixels(pos.x, pos.y),
    }
}

/// Stateful translator from winit events to [`InputEvent`]s.
///
/// winit reports button presses without a position, so the last cursor
/// position is remembered and attached to pointer-down/up events.
#[derive(Debug, Clone, Default)]
pub struct EventTranslator {
    cursor: Vec2,
}

impl EventTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position (window pixels).
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Translate one window event. Events the simulation does not consume
    /// yield `None`.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::Quit),
            WindowEvent::Resized(size) => Some(InputEvent::Resized {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => {
                    Some(self.on_key(code, event.state == ElementState::Pressed))
                }
                PhysicalKey::Unidentified(_) => None,
            },
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.on_cursor_moved(position.x, position.y))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                Some(self.on_mouse_button(*button, *state == ElementState::Pressed))
            }
            WindowEvent::MouseWheel { delta, .. } => Some(self.on_wheel(*delta)),
            WindowEvent::Focused(false) => Some(InputEvent::FocusLost),
            _ => None,
        }
    }

    pub fn on_key(&mut self, code: WinitKeyCode, pressed: bool) -> InputEvent {
        let key = map_key_code(code);
        if pressed {
            InputEvent::KeyDown { key }
        } else {
            InputEvent::KeyUp { key }
        }
    }

    pub fn on_cursor_moved(&mut self, x: f64, y: f64) -> InputEvent {
        self.cursor = Vec2::new(x as f32, y as f32);
        InputEvent::PointerMove {
            position: self.cursor,
        }
    }

    pub fn on_mouse_button(&mut self, button: winit::event::MouseButton, pressed: bool) -> InputEvent {
        let button = map_mouse_button(button);
        let position = self.cursor;
        if pressed {
            InputEvent::PointerDown { button, position }
        } else {
            InputEvent::PointerUp { button, position }
        }
    }

    pub fn on_wheel(&mut self, delta: MouseScrollDelta) -> InputEvent {
        InputEvent::Wheel {
            delta: map_scroll_delta(delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key_code(WinitKeyCode::Space), KeyCode::Space);
        assert_eq!(map_key_code(WinitKeyCode::Escape), KeyCode::Escape);
        assert_eq!(map_key_code(WinitKeyCode::ArrowLeft), KeyCode::ArrowLeft);
        assert_eq!(map_key_code(WinitKeyCode::KeyR), KeyCode::R);
        assert_eq!(map_key_code(WinitKeyCode::F12), KeyCode::Unknown);
    }

    #[test]
    fn test_mouse_mapping() {
        assert_eq!(map_mouse_button(winit::event::MouseButton::Left), MouseButton::Left);
        assert_eq!(map_mouse_button(winit::event::MouseButton::Right), MouseButton::Right);
        assert_eq!(
            map_mouse_button(winit::event::MouseButton::Other(7)),
            MouseButton::Other(7)
        );
    }

    #[test]
    fn test_scroll_mapping() {
        assert_eq!(
            map_scroll_delta(MouseScrollDelta::LineDelta(0.0, 1.0)),
            ScrollDelta::new(0.0, 1.0)
        );
        let pixels = map_scroll_delta(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -250.0)));
        assert!((pixels.y + 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_button_uses_last_cursor() {
        let mut translator = EventTranslator::new();
        translator.on_cursor_moved(120.7, 45.2);

        let event = translator.on_mouse_button(winit::event::MouseButton::Left, true);
        assert_eq!(
            event,
            InputEvent::PointerDown {
                button: MouseButton::Left,
                position: Vec2::new(120.7, 45.2),
            }
        );

        let event = translator.on_mouse_button(winit::event::MouseButton::Left, false);
        assert!(matches!(event, InputEvent::PointerUp { .. }));
    }

    #[test]
    fn test_key_state() {
        let mut translator = EventTranslator::new();
        assert_eq!(
            translator.on_key(WinitKeyCode::Space, true),
            InputEvent::KeyDown { key: KeyCode::Space }
        );
        assert_eq!(
            translator.on_key(WinitKeyCode::Space, false),
            InputEvent::KeyUp { key: KeyCode::Space }
        );
    }

    #[test]
    fn test_window_events() {
        let mut translator = EventTranslator::new();
        assert_eq!(
            translator.translate(&WindowEvent::CloseRequested),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            translator.translate(&WindowEvent::Resized(PhysicalSize::new(800, 600))),
            Some(InputEvent::Resized {
                width: 800,
                height: 600
            })
        );
        assert_eq!(
            translator.translate(&WindowEvent::Focused(false)),
            Some(InputEvent::FocusLost)
        );
        assert_eq!(translator.translate(&WindowEvent::Focused(true)), None);
    }
}
