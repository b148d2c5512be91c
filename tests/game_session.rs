//=========================================================================
// Game Session Tests
//=========================================================================
//
// Whole sessions driven through `drive_frame` against a recording
// renderer, the way the engine drives them against the GPU.
//
//=========================================================================

use pong::drive_frame;
use pong::prelude::*;

fn run(game: &mut GameState, list: &mut DrawList, events: &[InputEvent]) {
    drive_frame(game, events.iter().copied(), list).unwrap();
}

fn parked_ball(game: &mut GameState, x: i32) {
    let ball = game.ball_mut();
    ball.center = Vec2::new(x, 200);
    ball.velocity = Vec2::ZERO;
}

//=== Full Session ========================================================

#[test]
fn default_session_plays_to_completion() {
    let mut game = GameState::default();
    let mut list = DrawList::new();

    let mut frames = 0;
    while game.continue_game() && frames < 10_000 {
        run(&mut game, &mut list, &[]);
        frames += 1;
    }

    assert_eq!(game.phase(), GamePhase::Ended);
    assert_eq!(game.score_left(), 0);
    assert_eq!(game.score_right(), 11);
    assert_eq!(game.frame_counter(), 2123);
    assert_eq!(list.presented(), frames);
}

//=== Scoring and Ending ==================================================

#[test]
fn eleven_left_exits_end_the_game() {
    let mut game = GameState::default();
    let mut list = DrawList::new();
    parked_ball(&mut game, 5);

    for frame in 1..=11 {
        run(&mut game, &mut list, &[]);
        assert_eq!(game.score_right(), frame);
    }

    assert!(!game.continue_game());
    assert_eq!(game.frame_counter(), 11);
}

#[test]
fn ended_game_freezes_but_keeps_scoring() {
    let mut game = GameState::default();
    let mut list = DrawList::new();
    parked_ball(&mut game, 5);

    for _ in 0..11 {
        run(&mut game, &mut list, &[]);
    }
    let ball = game.ball().clone();
    let left_y = game.left_paddle().y();

    run(
        &mut game,
        &mut list,
        &[InputEvent::KeyDown(KeyCode::KeyA)],
    );
    run(&mut game, &mut list, &[]);

    assert_eq!(game.ball(), &ball);
    assert_eq!(game.left_paddle().y(), left_y);
    assert_eq!(game.frame_counter(), 11);
    assert_eq!(game.score_right(), 13);
    assert_eq!(list.presented(), 13);
}

#[test]
fn ball_past_right_wall_scores_left() {
    let mut game = GameState::default();
    let mut list = DrawList::new();
    parked_ball(&mut game, 495);

    run(&mut game, &mut list, &[]);

    assert_eq!(game.score_left(), 1);
    assert_eq!(game.score_right(), 0);
}

//=== Input ===============================================================

#[test]
fn held_keys_move_paddles_until_released() {
    let mut game = GameState::default();
    let mut list = DrawList::new();
    let start = game.config().paddle_start_y;

    run(&mut game, &mut list, &[InputEvent::KeyDown(KeyCode::KeyQ)]);
    run(&mut game, &mut list, &[]);
    assert_eq!(game.left_paddle().y(), start - 10);

    run(&mut game, &mut list, &[InputEvent::KeyUp(KeyCode::KeyQ)]);
    assert_eq!(game.left_paddle().y(), start - 10);

    run(&mut game, &mut list, &[InputEvent::KeyDown(KeyCode::KeyL)]);
    assert_eq!(game.right_paddle().y(), start + 5);
}

#[test]
fn conflicting_keys_cancel_out() {
    let mut game = GameState::default();
    let mut list = DrawList::new();
    let start = game.config().paddle_start_y;

    run(
        &mut game,
        &mut list,
        &[
            InputEvent::KeyDown(KeyCode::KeyP),
            InputEvent::KeyDown(KeyCode::KeyL),
        ],
    );

    assert_eq!(game.right_paddle().y(), start);
}

#[test]
fn quit_is_reported_without_ending_the_frame_early() {
    let mut game = GameState::default();
    let mut list = DrawList::new();

    run(&mut game, &mut list, &[InputEvent::Quit]);

    assert!(game.close_requested());
    assert!(game.continue_game());
    assert_eq!(game.frame_counter(), 1);
    assert_eq!(list.presented(), 1);
}

//=== Rendering ===========================================================

#[test]
fn every_frame_draws_the_full_scene() {
    let mut game = GameState::default();
    let mut list = DrawList::new();

    run(&mut game, &mut list, &[]);

    let frame = list.last_frame();
    assert_eq!(frame.len(), 6);
    assert_eq!(frame[0], DrawCommand::Clear(Color::BLACK));
    assert!(matches!(frame[1], DrawCommand::Circle { radius: 6, .. }));
    assert!(matches!(frame[4], DrawCommand::Text { ref content, .. } if content == "0"));
}

#[test]
fn ended_game_redraws_identical_frames() {
    let config = Config {
        win_score: 0,
        ..Config::default()
    };
    let mut game = GameState::new(config);
    let mut list = DrawList::new();
    parked_ball(&mut game, 250);

    run(&mut game, &mut list, &[]);
    assert!(!game.continue_game());
    let first = list.last_frame().to_vec();

    run(&mut game, &mut list, &[]);
    assert_eq!(list.last_frame(), first.as_slice());
}
