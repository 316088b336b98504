use macroquad::prelude::{KeyCode, is_key_down, mouse_position};

/// One frame's worth of polled input. Plain data, so the simulation can be
/// driven without a window in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub start: bool,
    pub quit: bool,
    /// Pointer x, present only when the pointer moved since last frame.
    pub pointer_x: Option<f32>,
}

impl InputState {
    /// Samples the keyboard and pointer once. `last_pointer_x` carries the
    /// previous frame's pointer position between calls.
    pub fn poll(last_pointer_x: &mut f32) -> Self {
        let (mouse_x, _) = mouse_position();
        let pointer_x = if mouse_x != *last_pointer_x {
            *last_pointer_x = mouse_x;
            Some(mouse_x)
        } else {
            None
        };

        InputState {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            start: is_key_down(KeyCode::Space),
            quit: is_key_down(KeyCode::Escape) || is_key_down(KeyCode::Q),
            pointer_x,
        }
    }
}
