//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use pong::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Frame driver
pub use crate::engine::{Engine, EngineBuilder, FramePacer};

// Simulation
pub use crate::core::{Ball, Config, GamePhase, GameState, Paddle, Params, Score, Side};

// Geometry and color
pub use crate::core::{Color, Rect, Vec2};

// Input
pub use crate::core::input::{InputEvent, InputFlags, KeyBindings, KeyCode, PaddleAction};

// Rendering contract
pub use crate::core::render::{DrawCommand, DrawList, Font, Renderer};
