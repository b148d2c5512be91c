//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the game.
//
// This module defines the contract between the platform implementation
// and the frame driver, so the backend can be swapped without touching
// game code.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Driver-side draining of platform events
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event_collector;
pub mod interface;

//=== Public API ==========================================================

pub use event_collector::EventCollector;
pub use interface::{PlatformError, PlatformEvent};
