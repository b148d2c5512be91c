//=========================================================================
// Geometry
//=========================================================================
//
// Integer 2D vector and axis-aligned rectangle in arena pixel space
// (origin top-left, y grows downward).
//
//=========================================================================

//=== Vec2 ================================================================

/// Integer 2D vector used for positions, velocities and sizes.
pub type Vec2 = glam::IVec2;

//=== Rect ================================================================

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn right(&self) -> i32 {
        self.origin.x + self.size.x
    }

    pub fn bottom(&self) -> i32 {
        self.origin.y + self.size.y
    }

    /// Half-open containment: the left and top edges are inside, the right
    /// and bottom edges are not.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.origin.x
            && point.x < self.right()
            && point.y >= self.origin.y
            && point.y < self.bottom()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_rect() -> Rect {
        Rect::new(Vec2::new(388, 175), Vec2::new(12, 50))
    }

    #[test]
    fn contains_interior_point() {
        assert!(paddle_rect().contains(Vec2::new(394, 200)));
    }

    #[test]
    fn top_left_edges_are_inclusive() {
        let rect = paddle_rect();
        assert!(rect.contains(Vec2::new(388, 175)));
        assert!(rect.contains(Vec2::new(388, 224)));
    }

    #[test]
    fn bottom_right_edges_are_exclusive() {
        let rect = paddle_rect();
        assert!(!rect.contains(Vec2::new(400, 200)));
        assert!(!rect.contains(Vec2::new(394, 225)));
    }

    #[test]
    fn vector_negation_flips_both_axes() {
        assert_eq!(-Vec2::new(4, -2), Vec2::new(-4, 2));
        assert_eq!(Vec2::new(50, 50) + Vec2::new(4, 2), Vec2::new(54, 52));
    }
}
