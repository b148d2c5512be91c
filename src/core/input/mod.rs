//=========================================================================
// Input
//
// Platform-neutral input vocabulary of the game.
//
// Responsibilities:
// - Represent keyboard and quit events in a stable, portable way
// - Map physical keys to paddle actions (fixed bindings)
// - Hold the persistent per-paddle direction flags
//
// Notes:
// The platform layer produces `InputEvent`s; `GameState` consumes them
// through `KeyBindings` into `InputFlags` once per frame.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod bindings;
pub mod event;
pub mod flags;

//=== Public API ==========================================================

pub use bindings::{KeyBindings, PaddleAction};
pub use event::{InputEvent, KeyCode};
pub use flags::InputFlags;
