use std::collections::HashSet;

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::showcase::Spin;

/// A step through the navigation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

/// What the keyboard asks the showcase to do this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intent {
    pub navigate: Option<Step>,
    pub spin: Option<Spin>,
}

/// Tracks keyboard state between frames.
#[derive(Debug, Default)]
pub struct Input {
    keys_down: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the end of each frame to reset per-frame state.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
    }

    /// Process a window event and update input state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => self.press(key),
                        ElementState::Released => self.release(key),
                    }
                }
            }
            // Releases are not delivered to an unfocused window.
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        // Held keys repeat; only the first press counts.
        if self.keys_down.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    /// Drop every held key.
    pub fn release_all(&mut self) {
        self.keys_down.clear();
    }

    /// Returns true if the key is currently held down.
    pub fn key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns true if the key was pressed this frame.
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Arrow keys navigate, Q and E spin the focused model while held.
    pub fn intent(&self) -> Intent {
        let navigate = if self.key_pressed(KeyCode::ArrowRight) {
            Some(Step::Next)
        } else if self.key_pressed(KeyCode::ArrowLeft) {
            Some(Step::Previous)
        } else {
            None
        };
        let spin = match (self.key_down(KeyCode::KeyQ), self.key_down(KeyCode::KeyE)) {
            (true, false) => Some(Spin::Left),
            (false, true) => Some(Spin::Right),
            _ => None,
        };
        Intent { navigate, spin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_reported_for_one_frame() {
        let mut input = Input::new();
        input.press(KeyCode::ArrowRight);
        assert_eq!(input.intent().navigate, Some(Step::Next));

        input.begin_frame();
        assert_eq!(input.intent().navigate, None);
        assert!(input.key_down(KeyCode::ArrowRight));
    }

    #[test]
    fn key_repeat_does_not_press_again() {
        let mut input = Input::new();
        input.press(KeyCode::ArrowLeft);
        input.begin_frame();
        input.press(KeyCode::ArrowLeft);
        assert!(!input.key_pressed(KeyCode::ArrowLeft));

        input.release(KeyCode::ArrowLeft);
        input.press(KeyCode::ArrowLeft);
        assert_eq!(input.intent().navigate, Some(Step::Previous));
    }

    #[test]
    fn opposing_spin_keys_cancel() {
        let mut input = Input::new();
        input.press(KeyCode::KeyQ);
        assert_eq!(input.intent().spin, Some(Spin::Left));

        input.press(KeyCode::KeyE);
        assert_eq!(input.intent().spin, None);

        input.release(KeyCode::KeyQ);
        assert_eq!(input.intent().spin, Some(Spin::Right));
    }

    #[test]
    fn losing_focus_releases_held_keys() {
        let mut input = Input::new();
        input.press(KeyCode::KeyE);
        input.begin_frame();
        assert_eq!(input.intent().spin, Some(Spin::Right));

        input.handle_event(&WindowEvent::Focused(false));
        assert!(!input.key_down(KeyCode::KeyE));
        assert_eq!(input.intent(), Intent::default());
    }
}
