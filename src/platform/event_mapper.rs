//=========================================================================
// Platform Event Mapper
//
// Converts Winit keyboard input to game-level `InputEvent`s.
// Provides a clean separation between OS-specific input and the game's
// internal event representation.
//
// Responsibilities:
// - Translate physical key codes
// - Translate press/release into KeyDown/KeyUp
// - Filter keys the game has no name for
//
//=========================================================================

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::KeyCode as WinitKeyCode;
use winit::keyboard::PhysicalKey;

use crate::core::input::{InputEvent, KeyCode};

//=== Key Conversion ======================================================
//
// Maps `WinitKeyCode` values to the game's `KeyCode` enum.
// Only a subset of codes is supported; all others map to `Unidentified`.
//

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Numeric keys -----------------------------------------------------
            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Alphabetic keys --------------------------------------------------
            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Arrow keys -------------------------------------------------------
            ArrowDown => KeyCode::ArrowDown, ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight, ArrowUp => KeyCode::ArrowUp,

            //--- Special keys -----------------------------------------------------
            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,

            //--- Fallback ---------------------------------------------------------
            _ => KeyCode::Unidentified,
        }
    }
}

//=== Keyboard Event Conversion ===========================================

/// Converts a Winit key event; unmapped keys are filtered (returns None).
pub(crate) fn map_key_event(key_event: &KeyEvent) -> Option<InputEvent> {
    map_key(key_event.physical_key, key_event.state)
}

/// Converts a physical key and its state.
pub(crate) fn map_key(physical_key: PhysicalKey, state: ElementState) -> Option<InputEvent> {
    let key = match physical_key {
        PhysicalKey::Code(code) => KeyCode::from(code),
        _ => return None,
    };

    if key == KeyCode::Unidentified {
        return None;
    }

    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    })
}

//=========================================================================
// Unit Tests
//=========================================================================
