use ::rand::Rng;
use macroquad::prelude::*;

use crate::assets;
use crate::config::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::game::Game;

const STAR_COUNT: usize = 120;
const TEXT_SIZE: u16 = 60;
const PADDLE_COLOR: Color = GRAY;
// Near-black sky so the darkest ball colors still read against it
const SKY_COLOR: Color = Color::new(0.02, 0.02, 0.06, 1.0);

struct Star {
    x: f32,
    y: f32,
    radius: f32,
    brightness: f32,
}

// Handles rendering the game state using macroquad
pub struct Renderer {
    font: Option<Font>,
    stars: Vec<Star>,
}

impl Renderer {
    pub fn new() -> Self {
        // Presentation-only randomness, never the seeded game RNG
        let mut rng = ::rand::thread_rng();
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.gen_range(0.0..FIELD_WIDTH),
                y: rng.gen_range(0.0..FIELD_HEIGHT),
                radius: rng.gen_range(0.5..1.8),
                brightness: rng.gen_range(0.3..1.0),
            })
            .collect();
        Renderer { font: None, stars }
    }

    // Load the UI font from the embedded bundle; fall back to the builtin
    pub fn load_assets(&mut self) {
        self.font = assets::get_asset_bytes("font.ttf").and_then(|bytes| {
            load_ttf_font_from_bytes(&bytes)
                .map_err(|e| log::warn!("Failed to load font: {}", e))
                .ok()
        });
    }

    /// Draws one frame from read-only game state.
    pub fn draw_frame(&self, game: &Game) {
        clear_background(SKY_COLOR);
        self.draw_stars();
        draw_rectangle_lines(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT, 2.0, BLACK);

        for brick in &game.bricks {
            if brick.destroyed {
                continue;
            }
            let r = brick.rect;
            draw_rectangle(r.x, r.y, r.w, r.h, brick.color);
        }

        let p = game.paddle.rect;
        draw_rectangle(p.x, p.y, p.w, p.h, PADDLE_COLOR);

        let ball = &game.ball;
        draw_circle(ball.rect.x, ball.rect.y, ball.radius, ball.color);

        self.draw_outlined(
            &game.score.to_string(),
            FIELD_WIDTH / 15.0,
            FIELD_HEIGHT / 2.0,
        );
        if !game.is_playing {
            let message = if game.is_won {
                "YOU WIN"
            } else {
                "PRESS SPACE TO PLAY"
            };
            self.draw_outlined(message, FIELD_WIDTH / 2.0, FIELD_HEIGHT * 0.75);
        }
    }

    fn draw_stars(&self) {
        for star in &self.stars {
            let b = star.brightness;
            draw_circle(star.x, star.y, star.radius, Color::new(b, b, b, 1.0));
        }
    }

    // Black text over a white outline, centered on (cx, cy)
    fn draw_outlined(&self, text: &str, cx: f32, cy: f32) {
        let dims = measure_text(text, self.font.as_ref(), TEXT_SIZE, 1.0);
        let x = cx - dims.width / 2.0;
        let y = cy + dims.offset_y / 2.0;
        for (dx, dy) in [(-2.0, 0.0), (2.0, 0.0), (0.0, -2.0), (0.0, 2.0)] {
            self.draw_text_at(text, x + dx, y + dy, WHITE);
        }
        self.draw_text_at(text, x, y, BLACK);
    }

    fn draw_text_at(&self, text: &str, x: f32, y: f32, color: Color) {
        draw_text_ex(
            text,
            x,
            y,
            TextParams {
                font: self.font.as_ref(),
                font_size: TEXT_SIZE,
                color,
                ..Default::default()
            },
        );
    }
}
