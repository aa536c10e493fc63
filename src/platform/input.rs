//! Keyboard input translation

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::sim::{GameKey, InputEvent};

/// Source of discrete input events, drained once per frame without blocking
pub trait InputSource {
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

pub fn map_key(key_code: KeyCode) -> Option<GameKey> {
    match key_code {
        KeyCode::ArrowUp => Some(GameKey::Up),
        KeyCode::ArrowLeft => Some(GameKey::Left),
        KeyCode::ArrowRight => Some(GameKey::Right),
        KeyCode::KeyQ => Some(GameKey::Q),
        _ => None,
    }
}

/// Turn a raw keyboard event into a game event. Unknown keys are dropped.
pub fn translate(key: PhysicalKey, state: ElementState) -> Option<InputEvent> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };
    let key = map_key(code)?;
    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    })
}
