//=========================================================================
// Key Bindings
//=========================================================================
//
// Maps physical keys to paddle actions.
//
// Architecture:
//   KeyCode → HashMap → PaddleAction
//
// The table is fixed: Q/A drive the left paddle, P/L the right one.
// Keys without a binding resolve to `None` and are ignored.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::event::KeyCode;
use crate::core::paddle::Side;

//=== PaddleAction ========================================================

/// A direction request for one paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddleAction {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl PaddleAction {
    pub const ALL: [PaddleAction; 4] = [
        PaddleAction::LeftUp,
        PaddleAction::LeftDown,
        PaddleAction::RightUp,
        PaddleAction::RightDown,
    ];

    pub fn side(self) -> Side {
        match self {
            PaddleAction::LeftUp | PaddleAction::LeftDown => Side::Left,
            PaddleAction::RightUp | PaddleAction::RightDown => Side::Right,
        }
    }
}

//=== KeyBindings =========================================================

/// Lookup table from key to paddle action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    keys: HashMap<KeyCode, PaddleAction>,
}

impl KeyBindings {
    /// Returns the action bound to `key`, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<PaddleAction> {
        self.keys.get(&key).copied()
    }

    /// Returns the key bound to `action`.
    pub fn key_for(&self, action: PaddleAction) -> Option<KeyCode> {
        self.keys
            .iter()
            .find_map(|(key, bound)| (*bound == action).then_some(*key))
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = HashMap::from([
            (KeyCode::KeyQ, PaddleAction::LeftUp),
            (KeyCode::KeyA, PaddleAction::LeftDown),
            (KeyCode::KeyP, PaddleAction::RightUp),
            (KeyCode::KeyL, PaddleAction::RightDown),
        ]);
        Self { keys }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for(KeyCode::KeyQ), Some(PaddleAction::LeftUp));
        assert_eq!(bindings.action_for(KeyCode::KeyA), Some(PaddleAction::LeftDown));
        assert_eq!(bindings.action_for(KeyCode::KeyP), Some(PaddleAction::RightUp));
        assert_eq!(bindings.action_for(KeyCode::KeyL), Some(PaddleAction::RightDown));
    }

    #[test]
    fn unbound_keys_resolve_to_none() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for(KeyCode::KeyW), None);
        assert_eq!(bindings.action_for(KeyCode::ArrowUp), None);
        assert_eq!(bindings.action_for(KeyCode::Unidentified), None);
    }

    #[test]
    fn every_action_has_a_key() {
        let bindings = KeyBindings::default();
        for action in PaddleAction::ALL {
            let key = bindings.key_for(action).expect("action should be bound");
            assert_eq!(bindings.action_for(key), Some(action));
        }
    }

    #[test]
    fn actions_know_their_side() {
        assert_eq!(PaddleAction::LeftDown.side(), Side::Left);
        assert_eq!(PaddleAction::RightUp.side(), Side::Right);
    }
}
