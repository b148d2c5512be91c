//=========================================================================
// Rendering Contract
//=========================================================================
//
// The calls the game makes on whatever draws it.
//
// Architecture:
// ```text
//   GameState::draw / display_text
//            │  (read-only)
//            ▼
//      impl Renderer ──► GpuRenderer (platform, wgpu)
//                    └─► DrawList    (recording, tests/headless)
// ```
//
// Drawing calls only queue work; nothing becomes visible until
// `present()`. Coordinates are arena pixels, origin top-left.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::color::Color;
use super::geometry::{Rect, Vec2};

//=== Font ================================================================

/// Text style: glyph height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Font {
    pub size: u32,
}

impl Font {
    pub const fn new(size: u32) -> Self {
        Self { size }
    }
}

//=== Renderer ============================================================

/// Drawing surface the game renders into once per frame.
pub trait Renderer {
    type Error: std::error::Error;

    /// Discards everything queued so far and fills the frame with `color`.
    fn clear(&mut self, color: Color);

    fn draw_circle(&mut self, color: Color, center: Vec2, radius: i32);

    fn draw_rect(&mut self, color: Color, rect: Rect);

    /// Draws `content` with its top-left corner at `position`, over a
    /// filled `background` box.
    fn draw_text(
        &mut self,
        content: &str,
        position: Vec2,
        font: Font,
        color: Color,
        background: Color,
    );

    /// Makes the queued frame visible.
    fn present(&mut self) -> Result<(), Self::Error>;
}

//=== DrawCommand =========================================================

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Color),
    Circle {
        color: Color,
        center: Vec2,
        radius: i32,
    },
    Rect {
        color: Color,
        rect: Rect,
    },
    Text {
        content: String,
        position: Vec2,
        font: Font,
        color: Color,
        background: Color,
    },
}

//=== DrawList ============================================================

/// Renderer that records commands instead of drawing them.
///
/// Each `present()` moves the pending commands into `last_frame`, so the
/// list always holds one complete frame after presenting.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pending: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    presented: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands queued since the last present.
    pub fn pending(&self) -> &[DrawCommand] {
        &self.pending
    }

    /// Commands of the most recently presented frame.
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// Number of frames presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Drops pending commands without presenting them.
    pub fn reset(&mut self) {
        self.pending.clear();
    }
}

impl Renderer for DrawList {
    type Error = std::convert::Infallible;

    fn clear(&mut self, color: Color) {
        self.pending.push(DrawCommand::Clear(color));
    }

    fn draw_circle(&mut self, color: Color, center: Vec2, radius: i32) {
        self.pending.push(DrawCommand::Circle {
            color,
            center,
            radius,
        });
    }

    fn draw_rect(&mut self, color: Color, rect: Rect) {
        self.pending.push(DrawCommand::Rect { color, rect });
    }

    fn draw_text(
        &mut self,
        content: &str,
        position: Vec2,
        font: Font,
        color: Color,
        background: Color,
    ) {
        self.pending.push(DrawCommand::Text {
            content: content.to_owned(),
            position,
            font,
            color,
            background,
        });
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.last_frame = std::mem::take(&mut self.pending);
        self.presented += 1;
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
