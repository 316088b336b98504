use ::rand::rngs::StdRng;
use macroquad::prelude::Color;

use crate::audio::AudioManager;
use crate::brick::Brick;
use crate::config::{BALL_RADIUS, BALL_SPEED, FIELD_HEIGHT, FIELD_WIDTH};
use crate::debug_ball;
use crate::geom::Rect;
use crate::paddle::Paddle;
use crate::palette;

/// The ball. The rect is the collision shape; the circle of `radius`
/// exists for rendering only.
#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(rng: &mut StdRng) -> Self {
        let mut ball = Ball {
            rect: Rect::new(
                (FIELD_WIDTH - BALL_RADIUS) / 2.0,
                FIELD_HEIGHT - 8.0 * BALL_RADIUS,
                BALL_RADIUS,
                BALL_RADIUS,
            ),
            vx: 1.0,
            vy: -1.0,
            radius: BALL_RADIUS,
            color: palette::ball_color(rng),
        };
        ball.normalize_speed();
        ball
    }

    /// Applies the (already normalized) velocity once. Called after the
    /// collision pass, so collisions are checked at the pre-move position.
    pub fn advance(&mut self) {
        self.rect.x += self.vx;
        self.rect.y += self.vy;
    }

    /// Resolves one frame of collisions in fixed order: paddle, walls,
    /// bricks, then renormalizes. Returns the number of bricks destroyed.
    pub fn resolve_collisions(
        &mut self,
        paddle: &Paddle,
        bricks: &mut [Brick],
        audio: &AudioManager,
        rng: &mut StdRng,
    ) -> u32 {
        // Paddle: invert vy and bias vx by how far off-center the strike
        // landed. This is the player's only control over the angle.
        if self.rect.intersects(&paddle.rect) {
            self.vy = -self.vy;
            self.vx += ((self.rect.center_x() - paddle.rect.center_x()) / 10.0).trunc();
            debug_ball!("paddle strike, vx biased to {:.2}", self.vx);
            audio.play_paddle_hit();
        }

        // Side and top walls. No bottom wall: falling out is the loss
        // condition and belongs to the game state machine.
        if self.rect.x <= 0.0 || self.rect.x + self.radius >= FIELD_WIDTH {
            self.vx = -self.vx;
            debug_ball!("side wall bounce at x={:.0}", self.rect.x);
        }
        if self.rect.y <= 0.0 {
            self.vy = -self.vy;
            debug_ball!("top wall bounce");
        }

        // Bricks, in stored order, no early exit: simultaneous overlaps
        // each invert vy and each score.
        let mut destroyed = 0;
        for brick in bricks.iter_mut() {
            if brick.destroyed {
                continue;
            }
            if self.rect.intersects(&brick.rect) {
                brick.destroy();
                self.vy = -self.vy;
                destroyed += 1;
                self.color = palette::ball_color(rng);
                audio.play_brick_hit();
            }
        }
        if destroyed > 0 {
            debug_ball!("{} brick(s) destroyed this frame", destroyed);
        }

        self.normalize_speed();
        destroyed
    }

    /// Rescales the velocity to magnitude `BALL_SPEED`. A near-horizontal
    /// vector is first forced pure vertical, otherwise the ball could skim
    /// forever without meaningfully hitting paddle or bricks.
    pub fn normalize_speed(&mut self) {
        if self.vx != 0.0 && (self.vy / self.vx).abs() < 0.01 {
            self.vx = 0.0;
            self.vy = -1.0;
        }
        let scale = BALL_SPEED / (self.vx * self.vx + self.vy * self.vy).sqrt();
        self.vx *= scale;
        self.vy *= scale;
    }

    pub fn speed_magnitude(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }
}
