//=========================================================================
// Game Configuration
//=========================================================================
//
// `Params` holds the fixed tuning constants of the game. `Config` is the
// runtime value a `GameState` is built from; its default is taken
// straight from `Params`.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::color::Color;
use super::geometry::Vec2;

//=== Params ==============================================================

/// Game tuning parameters.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: i32 = 500;
    pub const ARENA_HEIGHT: i32 = 400;

    // Ball
    pub const BALL_START_X: i32 = 50;
    pub const BALL_START_Y: i32 = 50;
    pub const BALL_VELOCITY_X: i32 = 4;
    pub const BALL_VELOCITY_Y: i32 = 2;
    pub const BALL_RADIUS: i32 = 6;

    // Paddles
    pub const PADDLE_WIDTH: i32 = 12;
    pub const PADDLE_HEIGHT: i32 = 50;
    pub const LEFT_PADDLE_X: i32 = 100;
    pub const RIGHT_PADDLE_X: i32 = 388;
    pub const PADDLE_START_Y: i32 = 175;
    pub const PADDLE_STEP: i32 = 5;

    // Score
    pub const WIN_SCORE: u32 = 11;
    pub const SCORE_FONT_SIZE: u32 = 60;
    pub const LEFT_SCORE_X: i32 = 0;
    pub const RIGHT_SCORE_X: i32 = 430;

    // Presentation
    pub const BACKGROUND: Color = Color::BLACK;
    pub const FOREGROUND: Color = Color::WHITE;

    // Frame driver
    pub const FPS: f64 = 60.0;
    pub const TITLE: &'static str = "Pong";
}

//=== Config ==============================================================

/// Values a game session is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub arena: Vec2,
    pub ball_start: Vec2,
    pub ball_velocity: Vec2,
    pub ball_radius: i32,
    pub paddle_size: Vec2,
    pub left_paddle_x: i32,
    pub right_paddle_x: i32,
    pub paddle_start_y: i32,
    pub paddle_step: i32,
    pub win_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena: Vec2::new(Params::ARENA_WIDTH, Params::ARENA_HEIGHT),
            ball_start: Vec2::new(Params::BALL_START_X, Params::BALL_START_Y),
            ball_velocity: Vec2::new(Params::BALL_VELOCITY_X, Params::BALL_VELOCITY_Y),
            ball_radius: Params::BALL_RADIUS,
            paddle_size: Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
            left_paddle_x: Params::LEFT_PADDLE_X,
            right_paddle_x: Params::RIGHT_PADDLE_X,
            paddle_start_y: Params::PADDLE_START_Y,
            paddle_step: Params::PADDLE_STEP,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_params() {
        let config = Config::new();
        assert_eq!(config.arena, Vec2::new(500, 400));
        assert_eq!(config.ball_start, Vec2::new(50, 50));
        assert_eq!(config.ball_velocity, Vec2::new(4, 2));
        assert_eq!(config.ball_radius, 6);
        assert_eq!(config.paddle_size, Vec2::new(12, 50));
        assert_eq!(config.left_paddle_x, 100);
        assert_eq!(config.right_paddle_x, 388);
        assert_eq!(config.paddle_start_y, 175);
        assert_eq!(config.paddle_step, 5);
        assert_eq!(config.win_score, 11);
    }

    #[test]
    fn paddles_start_inside_arena() {
        let config = Config::new();
        assert!(config.paddle_start_y >= 0);
        assert!(config.paddle_start_y + config.paddle_size.y <= config.arena.y);
        assert!(config.right_paddle_x + config.paddle_size.x <= config.arena.x);
    }
}
