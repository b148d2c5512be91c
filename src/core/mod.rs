//=========================================================================
// Core
//
// Platform-independent game logic and the contracts the platform layer
// implements.
//
// Responsibilities:
// - Own the simulation state (ball, paddles, scores, input flags)
// - Advance the simulation one frame at a time, deterministically
// - Describe each frame through the `Renderer` contract
// - Define the event types that cross from the platform into the game
//
// Notes:
// Nothing in this module depends on winit or wgpu. Every frame of the
// game can be driven from tests with synthetic events and a recording
// renderer.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod ball;
pub mod color;
pub mod config;
pub mod game_state;
pub mod geometry;
pub mod input;
pub mod paddle;
pub mod platform_bridge;
pub mod render;
pub mod score;

//=== Public API ==========================================================

pub use ball::Ball;
pub use color::Color;
pub use config::{Config, Params};
pub use game_state::{GamePhase, GameState};
pub use geometry::{Rect, Vec2};
pub use paddle::{Paddle, Side};
pub use platform_bridge::PlatformError;
pub use score::Score;
