use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use log::info;

use crate::audio::AudioManager;
use crate::ball::Ball;
use crate::brick::Brick;
use crate::config::{BRICK_HEIGHT, BRICK_MARGIN, BRICK_ROWS, BRICK_WIDTH, FIELD_HEIGHT, FIELD_WIDTH};
use crate::debug_game;
use crate::geom::Rect;
use crate::input::InputState;
use crate::paddle::{Direction, Paddle};
use crate::palette;

/// The Game struct owns every entity and runs the per-frame simulation.
///
/// `score` always equals the number of destroyed bricks; `is_won` is an
/// overlay on the idle state selecting which idle message to show.
pub struct Game {
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: Vec<Brick>,
    pub score: u32,
    pub is_playing: bool,
    pub is_won: bool,
    rng: StdRng,
}

impl Game {
    /// A seeded game replays the same brick and ball colors every run.
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let paddle = Paddle::new();
        let ball = Ball::new(&mut rng);
        let bricks = Self::create_bricks(&mut rng);
        Game {
            paddle,
            ball,
            bricks,
            score: 0,
            is_playing: false,
            is_won: false,
            rng,
        }
    }

    /// Fresh paddle, ball, and brick grid; score back to zero. Used for
    /// initial setup and for both round endings.
    pub fn reset(&mut self) {
        self.is_playing = false;
        self.is_won = false;
        self.paddle = Paddle::new();
        self.ball = Ball::new(&mut self.rng);
        self.bricks = Self::create_bricks(&mut self.rng);
        self.score = 0;
    }

    fn create_bricks(rng: &mut StdRng) -> Vec<Brick> {
        let pitch = BRICK_WIDTH + BRICK_MARGIN;
        let cols = (FIELD_WIDTH / pitch) as usize;
        let mut bricks = Vec::with_capacity(cols * BRICK_ROWS);
        for col in 0..cols {
            for row in 0..BRICK_ROWS {
                let rect = Rect::new(
                    col as f32 * pitch + BRICK_MARGIN,
                    row as f32 * (BRICK_HEIGHT + BRICK_MARGIN) + BRICK_MARGIN / 2.0,
                    BRICK_WIDTH,
                    BRICK_HEIGHT,
                );
                bricks.push(Brick::new(rect, palette::pastel(rng)));
            }
        }
        bricks
    }

    /// One frame of simulation. Paddle control and the start input run in
    /// every state; ball physics and scoring only while playing.
    pub fn update(&mut self, input: &InputState, audio: &AudioManager) {
        if input.left {
            self.paddle.shift(Direction::Left);
        }
        if input.right {
            self.paddle.shift(Direction::Right);
        }
        if let Some(x) = input.pointer_x {
            self.paddle.follow_pointer(x);
        }

        if !self.is_playing && input.start {
            self.is_playing = true;
            self.is_won = false;
            info!("Round started");
            audio.play_theme();
        }
        if !self.is_playing {
            return;
        }

        // Loss: the ball fell past the paddle. Reset and leave the fresh
        // ball untouched for the rest of this frame.
        if self.ball.rect.y > FIELD_HEIGHT {
            info!("Ball lost; round over with {} bricks down", self.score);
            self.reset();
            return;
        }

        let delta = self
            .ball
            .resolve_collisions(&self.paddle, &mut self.bricks, audio, &mut self.rng);
        if delta > 0 {
            self.score += delta;
            debug_game!("score {} of {}", self.score, self.bricks.len());
        }
        self.ball.advance();

        if self.score as usize == self.bricks.len() {
            info!("All {} bricks cleared", self.bricks.len());
            self.reset();
            audio.stop_theme();
            audio.play_victory();
            self.is_won = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use crate::config::{BALL_RADIUS, BALL_SPEED, PADDLE_WIDTH};

    fn start_input() -> InputState {
        InputState {
            start: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_game_layout() {
        let game = Game::new(Some(1));
        // 1024 / (170 + 28) = 5 columns of 4 rows
        assert_eq!(game.bricks.len(), 20);
        assert!(game.bricks.iter().all(|b| !b.destroyed));
        assert_eq!(game.score, 0);
        assert!(!game.is_playing);
        assert!(!game.is_won);
        assert_eq!(game.paddle.rect.w, PADDLE_WIDTH);
        assert_approx_eq!(game.ball.speed_magnitude(), BALL_SPEED, 1e-3);
    }

    #[test]
    fn test_bricks_lie_inside_the_field() {
        let game = Game::new(Some(1));
        for brick in &game.bricks {
            assert!(brick.rect.x >= 0.0);
            assert!(brick.rect.x + brick.rect.w <= FIELD_WIDTH);
            assert!(brick.rect.y >= 0.0);
        }
    }

    #[test]
    fn test_start_input_begins_round() {
        let mut game = Game::new(Some(1));
        let audio = AudioManager::new();
        game.update(&start_input(), &audio);
        assert!(game.is_playing);
        assert!(!game.is_won);
    }

    #[test]
    fn test_idle_frames_leave_ball_stationary() {
        let mut game = Game::new(Some(1));
        let audio = AudioManager::new();
        let (x, y) = (game.ball.rect.x, game.ball.rect.y);
        for _ in 0..5 {
            game.update(&InputState::default(), &audio);
        }
        assert_eq!(game.ball.rect.x, x);
        assert_eq!(game.ball.rect.y, y);
        assert!(!game.is_playing);
    }

    #[test]
    fn test_playing_frame_moves_ball_by_velocity() {
        let mut game = Game::new(Some(1));
        let audio = AudioManager::new();
        game.update(&start_input(), &audio);
        // Park the ball mid-field so nothing collides
        game.ball.rect.x = 500.0;
        game.ball.rect.y = 400.0;
        let (vx, vy) = (game.ball.vx, game.ball.vy);
        game.update(&InputState::default(), &audio);
        assert_approx_eq!(game.ball.rect.x, 500.0 + vx, 1e-3);
        assert_approx_eq!(game.ball.rect.y, 400.0 + vy, 1e-3);
    }

    #[test]
    fn test_loss_resets_round() {
        let mut game = Game::new(Some(1));
        let audio = AudioManager::new();
        game.update(&start_input(), &audio);
        game.score = 3;
        game.ball.rect.y = FIELD_HEIGHT + 1.0;
        game.update(&InputState::default(), &audio);
        assert!(!game.is_playing);
        assert!(!game.is_won);
        assert_eq!(game.score, 0);
        // Freshly seeded ball, not advanced on the loss frame
        assert_eq!(game.ball.rect.x, (FIELD_WIDTH - BALL_RADIUS) / 2.0);
        assert_eq!(game.ball.rect.y, FIELD_HEIGHT - 8.0 * BALL_RADIUS);
        assert!(game.bricks.iter().all(|b| !b.destroyed));
    }

    #[test]
    fn test_single_brick_hit_scores_one_and_flips_vy() {
        let mut game = Game::new(Some(1));
        let audio = AudioManager::new();
        game.update(&start_input(), &audio);
        // Overlap exactly the first brick (col 0, row 0)
        game.ball.rect.x = 100.0;
        game.ball.rect.y = 30.0;
        game.ball.vx = 2.83;
        game.ball.vy = -2.83;
        game.update(&InputState::default(), &audio);
        assert_eq!(game.score, 1);
        assert!(game.bricks[0].destroyed);
        assert_eq!(game.bricks.iter().filter(|b| b.destroyed).count(), 1);
        assert!(game.ball.vy > 0.0, "vy flipped downward after the hit");
        assert!(game.is_playing);
    }

    #[test]
    fn test_score_matches_destroyed_count_and_never_exceeds_total() {
        let mut game = Game::new(Some(1));
        let audio = AudioManager::new();
        game.update(&start_input(), &audio);
        let total = game.bricks.len() as u32;
        let mut last_score = 0;
        for _ in 0..2000 {
            if !game.is_playing {
                break;
            }
            let destroyed = game.bricks.iter().filter(|b| b.destroyed).count() as u32;
            assert_eq!(game.score, destroyed);
            assert!(game.score <= total);
            assert!(game.score >= last_score, "score is monotonic in a round");
            last_score = game.score;
            game.update(&InputState::default(), &audio);
        }
    }

    #[test]
    fn test_clearing_last_brick_wins_and_resets() {
        let mut game = Game::new(Some(1));
        let audio = AudioManager::new();
        game.update(&start_input(), &audio);
        // Leave only the first brick; book the rest as already scored
        for brick in game.bricks.iter_mut().skip(1) {
            brick.destroy();
        }
        game.score = game.bricks.len() as u32 - 1;
        game.ball.rect.x = 100.0;
        game.ball.rect.y = 30.0;
        game.ball.vx = 2.83;
        game.ball.vy = -2.83;
        game.update(&InputState::default(), &audio);
        assert!(game.is_won);
        assert!(!game.is_playing);
        assert_eq!(game.score, 0);
        assert!(game.bricks.iter().all(|b| !b.destroyed), "fresh grid after the win");
    }

    #[test]
    fn test_restart_after_win_clears_won_flag() {
        let mut game = Game::new(Some(1));
        let audio = AudioManager::new();
        game.is_won = true;
        game.update(&start_input(), &audio);
        assert!(game.is_playing);
        assert!(!game.is_won);
    }

    #[test]
    fn test_paddle_input_works_while_idle() {
        let mut game = Game::new(Some(1));
        let audio = AudioManager::new();
        let x = game.paddle.rect.x;
        let input = InputState {
            right: true,
            ..Default::default()
        };
        game.update(&input, &audio);
        assert_eq!(game.paddle.rect.x, x + game.paddle.speed);

        let input = InputState {
            pointer_x: Some(300.0),
            ..Default::default()
        };
        game.update(&input, &audio);
        assert_eq!(game.paddle.rect.center_x(), 300.0);
    }

    #[test]
    fn test_same_seed_reproduces_colors() {
        let a = Game::new(Some(42));
        let b = Game::new(Some(42));
        assert_eq!(a.ball.color, b.ball.color);
        for (x, y) in a.bricks.iter().zip(&b.bricks) {
            assert_eq!(x.color, y.color);
        }
    }
}
