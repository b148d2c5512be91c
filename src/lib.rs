//=========================================================================
// Pong Library Root
//
// This crate defines the public API surface of the Pong game.
//
// Responsibilities:
// - Expose the frame driver (`Engine`) and its builder
// - Expose the platform-independent simulation (`core`)
// - Keep the OS integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use pong::EngineBuilder;
//
// fn main() -> Result<(), pong::core::PlatformError> {
//     EngineBuilder::new().build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the simulation (ball, paddles, scoring, input flags)
// and the contracts the platform layer implements (rendering, events).
// It has no dependency on winit or wgpu and is fully testable headless.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, winit integration, wgpu
// rendering) and is kept private, as it is not part of the public API.
//
// `engine` defines the frame driver that ties platform and core together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{drive_frame, Engine, EngineBuilder, FramePacer};
