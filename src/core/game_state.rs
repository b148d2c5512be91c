//=========================================================================
// Game State
//
// Owns every piece of mutable game data and advances it one frame at a
// time.
//
// Frame Sequence (order is significant):
// ```text
//   1. handle_events      quit flag + paddle direction flags
//   2. draw               clear, ball, paddles            (read-only)
//   3. update_score       side-wall checks, every frame
//   4. display_text       both scores                     (read-only)
//   5. RUNNING only:
//        a. collisions    ball vs paddle ahead of it
//        b. update        ball, paddles (down before up), frame counter
//        c. decide        RUNNING → ENDED at the win score
// ```
//
// State Machine:
//   RUNNING ──(a score reaches the win score)──► ENDED
//
// In ENDED the ball and paddles freeze, but events, drawing and step 3
// keep running, so a ball resting past a side wall keeps scoring.
// Quitting is orthogonal: `close_requested` is read by the frame driver.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use super::ball::Ball;
use super::config::{Config, Params};
use super::geometry::Vec2;
use super::input::{InputEvent, InputFlags, KeyBindings, PaddleAction};
use super::paddle::{Paddle, Side};
use super::render::{Font, Renderer};
use super::score::Score;

//=== GamePhase ===========================================================

/// Whether the simulation still advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Ended,
}

//=== GameState ===========================================================

/// One game session: both paddles, the ball, scores and input flags.
#[derive(Debug, Clone)]
pub struct GameState {
    config: Config,
    bindings: KeyBindings,
    left_paddle: Paddle,
    right_paddle: Paddle,
    ball: Ball,
    score: Score,
    continue_game: bool,
    close_requested: bool,
    input: InputFlags,
    frame_counter: u64,
}

impl GameState {
    //--- Construction -----------------------------------------------------

    /// Starts a fresh game: scores at zero, everything at its start
    /// position, RUNNING.
    pub fn new(config: Config) -> Self {
        let ball = Ball::new(
            config.ball_start,
            config.ball_velocity,
            config.ball_radius,
            config.arena,
        );

        Self {
            left_paddle: Paddle::new(Side::Left, &config),
            right_paddle: Paddle::new(Side::Right, &config),
            ball,
            bindings: KeyBindings::default(),
            score: Score::new(),
            continue_game: true,
            close_requested: false,
            input: InputFlags::new(),
            frame_counter: 0,
            config,
        }
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one full frame against `renderer`. Does not present.
    pub fn frame<I, R>(&mut self, events: I, renderer: &mut R)
    where
        I: IntoIterator<Item = InputEvent>,
        R: Renderer,
    {
        self.handle_events(events);
        self.draw(renderer);
        self.update_score();
        self.display_text(renderer);

        if self.continue_game {
            self.resolve_collisions();
            self.update();
            self.decide_continue();
        }
    }

    //--- 1. Events --------------------------------------------------------

    /// Applies this frame's events. Unbound keys change nothing.
    pub fn handle_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            match event {
                InputEvent::Quit => {
                    info!(target: "game", "Close requested");
                    self.close_requested = true;
                }
                InputEvent::KeyDown(key) => {
                    if let Some(action) = self.bindings.action_for(key) {
                        if self.input.set(action, true) {
                            trace!(target: "game::input", "{:?} pressed", action);
                        }
                    }
                }
                InputEvent::KeyUp(key) => {
                    if let Some(action) = self.bindings.action_for(key) {
                        if self.input.set(action, false) {
                            trace!(target: "game::input", "{:?} released", action);
                        }
                    }
                }
            }
        }
    }

    //--- 2. Draw ----------------------------------------------------------

    /// Queues the background, the ball and both paddles.
    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        renderer.clear(Params::BACKGROUND);
        renderer.draw_circle(Params::FOREGROUND, self.ball.center, self.ball.radius);
        renderer.draw_rect(Params::FOREGROUND, self.left_paddle.rect());
        renderer.draw_rect(Params::FOREGROUND, self.right_paddle.rect());
    }

    //--- 3. Scoring -------------------------------------------------------

    /// Awards a point for a ball past either side wall.
    ///
    /// Both sides are checked independently every frame, in either phase.
    pub fn update_score(&mut self) {
        let ball = &self.ball;

        if ball.center.x > self.config.arena.x - ball.radius {
            self.score.increment_left();
            debug!(target: "game", "Left scores ({} - {})", self.score.left, self.score.right);
        }
        if ball.center.x < ball.radius {
            self.score.increment_right();
            debug!(target: "game", "Right scores ({} - {})", self.score.left, self.score.right);
        }
    }

    //--- 4. Score Text ----------------------------------------------------

    /// Queues both scores, left at the top-left corner, right near the
    /// top-right corner.
    pub fn display_text<R: Renderer>(&self, renderer: &mut R) {
        let font = Font::new(Params::SCORE_FONT_SIZE);

        renderer.draw_text(
            &self.score.left.to_string(),
            Vec2::new(Params::LEFT_SCORE_X, 0),
            font,
            Params::FOREGROUND,
            Params::BACKGROUND,
        );
        renderer.draw_text(
            &self.score.right.to_string(),
            Vec2::new(Params::RIGHT_SCORE_X, 0),
            font,
            Params::FOREGROUND,
            Params::BACKGROUND,
        );
    }

    //--- 5a. Collisions ---------------------------------------------------

    /// Bounces the ball off the paddle ahead of it. Returns `true` on a hit.
    pub fn resolve_collisions(&mut self) -> bool {
        let hit = self.ball.collided(&self.right_paddle, &self.left_paddle);
        if hit {
            trace!(target: "game", "Paddle hit at {:?}", self.ball.center);
        }
        hit
    }

    //--- 5b. Update -------------------------------------------------------

    /// Moves the ball, then the paddles.
    ///
    /// Every held direction is applied, downs first, so a paddle with both
    /// directions held steps down and then back up.
    pub fn update(&mut self) {
        self.ball.advance();

        if self.input.is_active(PaddleAction::LeftDown) {
            self.left_paddle.move_down();
        }
        if self.input.is_active(PaddleAction::RightDown) {
            self.right_paddle.move_down();
        }
        if self.input.is_active(PaddleAction::LeftUp) {
            self.left_paddle.move_up();
        }
        if self.input.is_active(PaddleAction::RightUp) {
            self.right_paddle.move_up();
        }

        self.frame_counter += 1;
    }

    //--- 5c. Continuation -------------------------------------------------

    /// Ends the game once either player reaches the win score.
    pub fn decide_continue(&mut self) {
        if let Some(winner) = self.score.winner(self.config.win_score) {
            if self.continue_game {
                info!(
                    target: "game",
                    "Game over: {:?} wins {} - {} after {} frames",
                    winner,
                    self.score.left,
                    self.score.right,
                    self.frame_counter
                );
            }
            self.continue_game = false;
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn phase(&self) -> GamePhase {
        if self.continue_game {
            GamePhase::Running
        } else {
            GamePhase::Ended
        }
    }

    pub fn continue_game(&self) -> bool {
        self.continue_game
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn score_left(&self) -> u32 {
        self.score.left
    }

    pub fn score_right(&self) -> u32 {
        self.score.right
    }

    /// Frames the simulation has advanced; frozen once the game ends.
    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    pub fn input(&self) -> &InputFlags {
        &self.input
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn left_paddle(&self) -> &Paddle {
        &self.left_paddle
    }

    pub fn left_paddle_mut(&mut self) -> &mut Paddle {
        &mut self.left_paddle
    }

    pub fn right_paddle(&self) -> &Paddle {
        &self.right_paddle
    }

    pub fn right_paddle_mut(&mut self) -> &mut Paddle {
        &mut self.right_paddle
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
