//=========================================================================
// Ball
//=========================================================================
//
// The ball moves by its integer velocity every frame and reflects off the
// arena walls and the paddles by negating one velocity component.
//
// Reflection never corrects position: a ball that overshoots a wall stays
// outside for that frame and walks back in on the next one.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::geometry::Vec2;
use super::paddle::Paddle;

//=== Ball ================================================================

/// The ball, with the arena size it bounces inside.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub center: Vec2,
    pub velocity: Vec2,
    pub radius: i32,
    arena: Vec2,
}

impl Ball {
    pub fn new(center: Vec2, velocity: Vec2, radius: i32, arena: Vec2) -> Self {
        Self {
            center,
            velocity,
            radius,
            arena,
        }
    }

    pub fn arena(&self) -> Vec2 {
        self.arena
    }

    //--- Motion -----------------------------------------------------------

    /// Advances the center by one frame of velocity, reflecting each axis
    /// independently off the arena walls.
    pub fn advance(&mut self) {
        self.center.x += self.velocity.x;
        self.velocity.x = reflect(self.center.x, self.velocity.x, self.arena.x, self.radius);

        self.center.y += self.velocity.y;
        self.velocity.y = reflect(self.center.y, self.velocity.y, self.arena.y, self.radius);
    }

    //--- Paddle Collision -------------------------------------------------

    /// Bounces off the paddle the ball is travelling towards.
    ///
    /// Moving right tests the right paddle, anything else tests the left
    /// one. Only the center point is tested against the paddle rectangle.
    /// Returns `true` if the x velocity was negated.
    pub fn collided(&mut self, right: &Paddle, left: &Paddle) -> bool {
        let target = if self.velocity.x > 0 { right } else { left };

        if target.rect().contains(self.center) {
            self.velocity.x = -self.velocity.x;
            true
        } else {
            false
        }
    }
}

//--- Helpers -------------------------------------------------------------

/// Wall reflection along one axis. Both bounds are checked in turn, as
/// the ball can only be past one of them in a sensibly sized arena.
fn reflect(position: i32, mut velocity: i32, extent: i32, radius: i32) -> i32 {
    if position > extent - radius {
        velocity = -velocity;
    }
    if position < radius {
        velocity = -velocity;
    }
    velocity
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paddle::Side;
    use crate::core::Config;

    fn ball(center: (i32, i32), velocity: (i32, i32)) -> Ball {
        Ball::new(
            Vec2::new(center.0, center.1),
            Vec2::new(velocity.0, velocity.1),
            6,
            Vec2::new(500, 400),
        )
    }

    fn paddles() -> (Paddle, Paddle) {
        let config = Config::new();
        (Paddle::new(Side::Right, &config), Paddle::new(Side::Left, &config))
    }

    //=====================================================================
    // Motion
    //=====================================================================

    #[test]
    fn advance_adds_velocity() {
        let mut ball = ball((50, 50), (4, 2));
        ball.advance();
        assert_eq!(ball.center, Vec2::new(54, 52));
        assert_eq!(ball.velocity, Vec2::new(4, 2));
    }

    #[test]
    fn reflects_off_right_wall_without_clamping() {
        let mut ball = ball((492, 100), (4, 2));
        ball.advance();
        assert_eq!(ball.center.x, 496, "position is not pulled back inside");
        assert_eq!(ball.velocity.x, -4);
        assert_eq!(ball.velocity.y, 2);
    }

    #[test]
    fn reflects_off_left_wall() {
        let mut ball = ball((8, 100), (-4, 2));
        ball.advance();
        assert_eq!(ball.center.x, 4);
        assert_eq!(ball.velocity.x, 4);
    }

    #[test]
    fn reflects_off_bottom_wall() {
        let mut ball = ball((200, 393), (4, 2));
        ball.advance();
        assert_eq!(ball.center.y, 395);
        assert_eq!(ball.velocity.y, -2);
        assert_eq!(ball.velocity.x, 4);
    }

    #[test]
    fn reflects_off_top_wall() {
        let mut ball = ball((200, 7), (4, -2));
        ball.advance();
        assert_eq!(ball.center.y, 5);
        assert_eq!(ball.velocity.y, 2);
    }

    #[test]
    fn reflects_both_axes_in_one_frame() {
        let mut ball = ball((492, 393), (4, 2));
        ball.advance();
        assert_eq!(ball.velocity, Vec2::new(-4, -2));
    }

    #[test]
    fn overshoot_recovers_on_next_frame() {
        let mut ball = ball((492, 100), (4, 2));
        ball.advance();
        ball.advance();
        assert_eq!(ball.center.x, 492);
        assert_eq!(ball.velocity.x, -4, "no second reflection once back inside");
    }

    #[test]
    fn wall_contact_exactly_at_radius_does_not_reflect() {
        let mut ball = ball((490, 100), (4, 0));
        ball.advance();
        assert_eq!(ball.center.x, 494);
        assert_eq!(ball.velocity.x, 4);
    }

    //=====================================================================
    // Paddle Collision
    //=====================================================================

    #[test]
    fn rightward_ball_inside_right_paddle_bounces() {
        let (right, left) = paddles();
        let mut ball = ball((390, 200), (4, 2));

        assert!(ball.collided(&right, &left));
        assert_eq!(ball.velocity, Vec2::new(-4, 2));
        assert_eq!(ball.center, Vec2::new(390, 200), "no position correction");
    }

    #[test]
    fn leftward_ball_inside_left_paddle_bounces() {
        let (right, left) = paddles();
        let mut ball = ball((105, 180), (-4, 2));

        assert!(ball.collided(&right, &left));
        assert_eq!(ball.velocity.x, 4);
    }

    #[test]
    fn ball_outside_paddles_is_unchanged() {
        let (right, left) = paddles();
        let mut ball = ball((250, 200), (4, 2));

        assert!(!ball.collided(&right, &left));
        assert_eq!(ball.velocity, Vec2::new(4, 2));
    }

    #[test]
    fn only_the_paddle_ahead_is_tested() {
        let (right, left) = paddles();

        // Inside the left paddle but moving right: the right paddle is tested.
        let mut ball = ball((105, 180), (4, 2));
        assert!(!ball.collided(&right, &left));
        assert_eq!(ball.velocity.x, 4);
    }

    #[test]
    fn stationary_ball_tests_left_paddle() {
        let (right, left) = paddles();
        let mut ball = ball((105, 180), (0, 2));
        assert!(ball.collided(&right, &left));
        assert_eq!(ball.velocity.x, 0);
    }

    #[test]
    fn circle_overlap_without_center_inside_is_not_a_hit() {
        let (right, left) = paddles();
        // Edge of the ball overlaps the paddle; the center does not.
        let mut ball = ball((384, 200), (4, 2));
        assert!(!ball.collided(&right, &left));
    }
}
