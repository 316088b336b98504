use crate::config::{FIELD_HEIGHT, FIELD_WIDTH, PADDLE_HEIGHT, PADDLE_SPEED, PADDLE_WIDTH};
use crate::geom::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// The player-controlled paddle. Horizontal movement only.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
    pub speed: f32,
}

impl Paddle {
    pub fn new() -> Self {
        Paddle {
            rect: Rect::new(
                (FIELD_WIDTH - PADDLE_WIDTH) / 2.0,
                FIELD_HEIGHT - 2.0 * PADDLE_HEIGHT,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            speed: PADDLE_SPEED,
        }
    }

    /// Shifts the paddle one step in `dir`. A step that would cross the
    /// field edge is suppressed outright, not clamped to the bound.
    pub fn shift(&mut self, dir: Direction) {
        match dir {
            Direction::Right => {
                if self.rect.x + self.rect.w + self.speed < FIELD_WIDTH {
                    self.rect.x += self.speed;
                }
            }
            Direction::Left => {
                if self.rect.x > self.speed {
                    self.rect.x -= self.speed;
                }
            }
        }
    }

    /// Centers the paddle on the pointer. Unclamped: raw pointer input may
    /// drive the paddle off-screen.
    pub fn follow_pointer(&mut self, x: f32) {
        self.rect.x = x - self.rect.w / 2.0;
    }
}
