//! Configuration constants for the brick-breaking game.

// Raw pixel dimensions. Derived sizes use integer division first so the
// layout falls on whole pixels, then cast for the f32 geometry.
const FIELD_WIDTH_PX: i32 = 1024;
const FIELD_HEIGHT_PX: i32 = 768;

pub const WINDOW_TITLE: &str = "Brick Break";

// Play field
pub const FIELD_WIDTH: f32 = FIELD_WIDTH_PX as f32;
pub const FIELD_HEIGHT: f32 = FIELD_HEIGHT_PX as f32;

// Paddle
pub const PADDLE_WIDTH: f32 = (FIELD_WIDTH_PX / 5) as f32; // 204
pub const PADDLE_HEIGHT: f32 = (FIELD_HEIGHT_PX / 40) as f32; // 19
pub const PADDLE_SPEED: f32 = 10.0; // Pixels per frame

// Ball
pub const BALL_RADIUS: f32 = (FIELD_WIDTH_PX / 80) as f32; // 12
pub const BALL_SPEED: f32 = 4.0; // Velocity magnitude held after every collision pass

// Brick grid. The column count is derived from the field width at reset;
// these sizes always yield at least one column.
pub const BRICK_WIDTH: f32 = (FIELD_WIDTH_PX / 6) as f32; // 170
pub const BRICK_HEIGHT: f32 = 50.0;
pub const BRICK_MARGIN: f32 = (FIELD_WIDTH_PX / 6 / 6) as f32; // 28
pub const BRICK_ROWS: usize = 4;
