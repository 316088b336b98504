use crate::geom::Rect;
use macroquad::prelude::Color;

/// A destructible brick. Geometry and color never change after
/// construction; `destroyed` flips true exactly once.
#[derive(Debug, Clone)]
pub struct Brick {
    pub rect: Rect,
    pub color: Color,
    pub destroyed: bool,
}

impl Brick {
    pub fn new(rect: Rect, color: Color) -> Self {
        Brick {
            rect,
            color,
            destroyed: false,
        }
    }

    /// Idempotent. A destroyed brick is skipped by collision and drawing
    /// but stays in the collection so indices remain stable for the round.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }
}
