//=========================================================================
// Input Flags
//
// Persistent per-paddle direction state.
// Each flag turns on with its key's press and off with its key's release;
// the four are fully independent, so both directions of one paddle can be
// held at once. Resolving that conflict is the simulation's job.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::fmt;

//=== Internal Modules ====================================================
use super::bindings::PaddleAction;

//=== InputFlags ==========================================================

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFlags {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl InputFlags {
    pub fn new() -> Self {
        Self::default()
    }

    //--- set() ------------------------------------------------------------
    //
    // Returns `true` if the flag changed.
    //
    pub fn set(&mut self, action: PaddleAction, pressed: bool) -> bool {
        let flag = self.flag_mut(action);
        let changed = *flag != pressed;
        *flag = pressed;
        changed
    }

    pub fn is_active(&self, action: PaddleAction) -> bool {
        match action {
            PaddleAction::LeftUp => self.left_up,
            PaddleAction::LeftDown => self.left_down,
            PaddleAction::RightUp => self.right_up,
            PaddleAction::RightDown => self.right_down,
        }
    }

    fn flag_mut(&mut self, action: PaddleAction) -> &mut bool {
        match action {
            PaddleAction::LeftUp => &mut self.left_up,
            PaddleAction::LeftDown => &mut self.left_down,
            PaddleAction::RightUp => &mut self.right_up,
            PaddleAction::RightDown => &mut self.right_down,
        }
    }
}

//=== Debug Trait =========================================================
//
// Lists only the active flags:
//
// ```text
// InputFlags { active: [LeftDown, RightUp] }
// ```
//
impl fmt::Debug for InputFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active: Vec<_> = PaddleAction::ALL
            .into_iter()
            .filter(|action| self.is_active(*action))
            .collect();

        f.debug_struct("InputFlags").field("active", &active).finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive() {
        let flags = InputFlags::new();
        for action in PaddleAction::ALL {
            assert!(!flags.is_active(action));
        }
    }

    #[test]
    fn press_and_release_toggle_one_flag() {
        let mut flags = InputFlags::new();

        assert!(flags.set(PaddleAction::RightDown, true));
        assert!(flags.right_down);
        assert!(!flags.right_up && !flags.left_up && !flags.left_down);

        assert!(flags.set(PaddleAction::RightDown, false));
        assert!(!flags.right_down);
    }

    #[test]
    fn repeated_press_reports_no_change() {
        let mut flags = InputFlags::new();
        assert!(flags.set(PaddleAction::LeftUp, true));
        assert!(!flags.set(PaddleAction::LeftUp, true));
    }

    #[test]
    fn both_directions_can_be_held() {
        let mut flags = InputFlags::new();
        flags.set(PaddleAction::LeftUp, true);
        flags.set(PaddleAction::LeftDown, true);
        assert!(flags.is_active(PaddleAction::LeftUp));
        assert!(flags.is_active(PaddleAction::LeftDown));
    }

    #[test]
    fn debug_lists_active_flags() {
        let mut flags = InputFlags::new();
        flags.set(PaddleAction::LeftDown, true);
        let debug = format!("{:?}", flags);
        assert!(debug.contains("LeftDown"));
        assert!(!debug.contains("RightUp"));
    }
}
