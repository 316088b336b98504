//! Random color helpers. All randomness flows through the game's seeded
//! RNG so a given seed reproduces the same round.

use ::rand::Rng;
use ::rand::rngs::StdRng;
use ::rand::seq::SliceRandom;
use macroquad::prelude::{BLACK, BLUE, BROWN, Color, GREEN, ORANGE, PINK, PURPLE, RED};

// Dark colors the ball cycles through on brick hits.
const BALL_COLORS: [Color; 8] = [RED, GREEN, BLUE, ORANGE, BROWN, PINK, BLACK, PURPLE];

/// Light pastel shade for a freshly laid brick.
pub fn pastel(rng: &mut StdRng) -> Color {
    Color::from_rgba(
        rng.gen_range(180..=255),
        rng.gen_range(180..=255),
        rng.gen_range(180..=255),
        255,
    )
}

/// Picks one of the dark ball colors.
pub fn ball_color(rng: &mut StdRng) -> Color {
    BALL_COLORS.choose(rng).copied().unwrap_or(RED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::SeedableRng;

    #[test]
    fn test_pastel_channels_stay_light() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let c = pastel(&mut rng);
            assert!(c.r >= 180.0 / 255.0);
            assert!(c.g >= 180.0 / 255.0);
            assert!(c.b >= 180.0 / 255.0);
            assert_eq!(c.a, 1.0);
        }
    }

    #[test]
    fn test_ball_color_comes_from_palette() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let c = ball_color(&mut rng);
            assert!(BALL_COLORS.contains(&c));
        }
    }

    #[test]
    fn test_same_seed_same_colors() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        for _ in 0..10 {
            assert_eq!(pastel(&mut a), pastel(&mut b));
        }
    }
}
