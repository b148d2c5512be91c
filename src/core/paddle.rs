//=========================================================================
// Paddle
//=========================================================================
//
// A player-controlled rectangle with a fixed x position. Only y changes,
// one fixed step per call, and it is always kept inside the arena.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::config::Config;
use super::geometry::{Rect, Vec2};

//=== Side ================================================================

/// Which player a paddle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

//=== Paddle ==============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    side: Side,
    x: i32,
    y: i32,
    size: Vec2,
    step: i32,
    arena_height: i32,
}

impl Paddle {
    /// Creates the paddle for `side` at its configured starting position.
    pub fn new(side: Side, config: &Config) -> Self {
        let x = match side {
            Side::Left => config.left_paddle_x,
            Side::Right => config.right_paddle_x,
        };

        Self {
            side,
            x,
            y: config.paddle_start_y,
            size: config.paddle_size,
            step: config.paddle_step,
            arena_height: config.arena.y,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn rect(&self) -> Rect {
        Rect::new(Vec2::new(self.x, self.y), self.size)
    }

    /// Moves `y` to an arbitrary position, clamped into the arena.
    pub fn set_y(&mut self, y: i32) {
        self.y = y.clamp(0, self.max_y());
    }

    //--- Movement ---------------------------------------------------------

    /// One step towards the top edge; pinned at 0 once reached.
    pub fn move_up(&mut self) {
        if self.y <= 0 {
            self.y = 0;
        } else {
            self.y = (self.y - self.step).max(0);
        }
    }

    /// One step towards the bottom edge; pinned at `arena_height - height`
    /// once reached.
    pub fn move_down(&mut self) {
        if self.y + self.size.y >= self.arena_height {
            self.y = self.max_y();
        } else {
            self.y = (self.y + self.step).min(self.max_y());
        }
    }

    fn max_y(&self) -> i32 {
        self.arena_height - self.size.y
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
