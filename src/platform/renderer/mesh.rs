//=========================================================================
// Frame Mesh
//=========================================================================
//
// CPU tessellation of one frame's draw calls into a triangle list.
//
// Positions are converted from arena pixels (origin top-left, y down)
// to clip space as they are pushed, so the shader is a pass-through.
//
//=========================================================================

use crate::core::render::Font;
use crate::core::{Color, Rect, Vec2};

use super::glyphs::{self, GLYPH_ADVANCE, GLYPH_HEIGHT};

//=== Vertex ==============================================================

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

//=== Mesh ================================================================

pub(crate) struct Mesh {
    arena: Vec2,
    vertices: Vec<Vertex>,
}

impl Mesh {
    /// Triangles per circle.
    pub const CIRCLE_SEGMENTS: usize = 32;

    pub fn new(arena: Vec2) -> Self {
        Self {
            arena,
            vertices: Vec::with_capacity(1024),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    //--- Shapes -----------------------------------------------------------

    pub fn push_rect(&mut self, color: Color, rect: Rect) {
        let (x0, y0) = (rect.origin.x as f32, rect.origin.y as f32);
        let (x1, y1) = (rect.right() as f32, rect.bottom() as f32);
        self.push_quad(color, x0, y0, x1, y1);
    }

    pub fn push_circle(&mut self, color: Color, center: Vec2, radius: i32) {
        let (cx, cy) = (center.x as f32, center.y as f32);
        let r = radius as f32;
        let step = std::f32::consts::TAU / Self::CIRCLE_SEGMENTS as f32;

        for i in 0..Self::CIRCLE_SEGMENTS {
            let a0 = step * i as f32;
            let a1 = step * (i + 1) as f32;
            self.push_vertex(color, cx, cy);
            self.push_vertex(color, cx + r * a0.cos(), cy + r * a0.sin());
            self.push_vertex(color, cx + r * a1.cos(), cy + r * a1.sin());
        }
    }

    /// Background box first, then one quad per lit glyph pixel.
    pub fn push_text(
        &mut self,
        content: &str,
        position: Vec2,
        font: Font,
        color: Color,
        background: Color,
    ) {
        let scale = Self::text_scale(font);
        let chars = content.chars().count() as i32;
        if chars == 0 {
            return;
        }

        let box_size = Vec2::new(chars * GLYPH_ADVANCE * scale, GLYPH_HEIGHT * scale);
        self.push_rect(background, Rect::new(position, box_size));

        for (index, ch) in content.chars().enumerate() {
            let origin_x = position.x + index as i32 * GLYPH_ADVANCE * scale;
            for (col, row) in glyphs::lit_pixels(ch) {
                let x = (origin_x + col * scale) as f32;
                let y = (position.y + row * scale) as f32;
                self.push_quad(color, x, y, x + scale as f32, y + scale as f32);
            }
        }
    }

    /// Pixels per glyph cell; never below one.
    pub fn text_scale(font: Font) -> i32 {
        (font.size as i32 / GLYPH_HEIGHT).max(1)
    }

    //--- Internal Helpers -------------------------------------------------

    fn push_quad(&mut self, color: Color, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.push_vertex(color, x0, y0);
        self.push_vertex(color, x0, y1);
        self.push_vertex(color, x1, y1);

        self.push_vertex(color, x0, y0);
        self.push_vertex(color, x1, y1);
        self.push_vertex(color, x1, y0);
    }

    fn push_vertex(&mut self, color: Color, x: f32, y: f32) {
        self.vertices.push(Vertex {
            position: self.to_clip(x, y),
            color: color.to_f32_array(),
        });
    }

    fn to_clip(&self, x: f32, y: f32) -> [f32; 2] {
        let w = self.arena.x.max(1) as f32;
        let h = self.arena.y.max(1) as f32;
        [x / w * 2.0 - 1.0, 1.0 - y / h * 2.0]
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
