//! Integration tests for complete play-throughs on the classic maze
//!
//! These drive a session the way the terminal loop does: buttons first,
//! then `update` with the frame's elapsed time.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_pacman::core::{Layout, Position, Session};
use tui_pacman::input::{handle_key_event, FrameInput};
use tui_pacman::types::{
    Button, Difficulty, Outcome, SessionEvent, SessionStatus, Tile, MOVE_INTERVAL_MS, TICK_MS,
};

fn rows(session: &Session) -> Vec<String> {
    session
        .state()
        .render()
        .map(|row| row.collect())
        .collect()
}

/// Run whole frames until `ms` has passed.
fn play(session: &mut Session, ms: u32) {
    for _ in 0..ms / TICK_MS {
        session.update(TICK_MS);
    }
}

#[test]
fn test_three_steps_right_from_start() {
    let mut session = Session::default();
    session.press(Button::A);
    session.press(Button::A); // easy
    session.press(Button::Right);

    for _ in 0..3 {
        assert!(session.step());
    }

    assert_eq!(session.state().position(), Position::new(4, 16));
    assert_eq!(session.score(), 30);

    let maze = session.state().maze();
    for x in 2..=4 {
        assert_eq!(maze.get(x, 16), Some(Tile::Empty));
    }

    let rows = rows(&session);
    assert_eq!(&rows[16][..6], "#   P.");
}

#[test]
fn test_wall_bump_from_start() {
    for button in [Button::Up, Button::Left] {
        let mut session = Session::default();
        session.press(Button::A);
        session.press(Button::X);
        session.press(button);

        assert!(!session.step());
        assert_eq!(session.state().position(), Position::start());
        assert_eq!(session.score(), 0);
        assert_eq!(session.status(), SessionStatus::Running);
    }
}

#[test]
fn test_keyboard_to_session() {
    let mut session = Session::default();
    let mut frame = FrameInput::new();

    let keys = [KeyCode::Enter, KeyCode::Char('b'), KeyCode::Char('l')];
    for code in keys {
        let button = handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
        frame.press(button.expect("mapped key"));
        for b in frame.take() {
            session.press(b);
        }
    }

    assert_eq!(session.difficulty(), Some(Difficulty::Medium));
    session.update(MOVE_INTERVAL_MS);
    assert_eq!(session.state().position(), Position::new(2, 16));
}

#[test]
fn test_frame_loop_steps_at_move_interval() {
    let mut session = Session::default();
    session.press(Button::A);
    session.press(Button::A);
    session.press(Button::Right);

    // 63 frames is 1008ms: one whole second and 12 steps at 80ms.
    play(&mut session, 63 * TICK_MS);
    assert_eq!(session.state().position(), Position::new(13, 16));
    assert_eq!(session.score(), 120);
    assert_eq!(session.remaining_secs(), Some(239));
}

#[test]
fn test_hard_session_runs_out_of_time() {
    let mut session = Session::default();
    session.press(Button::A);
    session.press(Button::X);
    session.take_events();

    play(&mut session, 121_000);
    assert_eq!(session.status(), SessionStatus::Ended);
    assert_eq!(session.outcome(), Some(Outcome::TimeExpired));
    assert_eq!(session.remaining_secs(), Some(0));
    assert_eq!(
        session.take_events().as_slice(),
        &[SessionEvent::Ended {
            outcome: Outcome::TimeExpired,
            score: 0,
        }]
    );
}

#[test]
fn test_pellets_remaining_is_monotonic_during_play() {
    let mut session = Session::default();
    session.press(Button::A);
    session.press(Button::A);

    let turns = [Button::Right, Button::Up, Button::Left, Button::Down];
    let mut last = session.state().pellets_remaining();
    for (i, button) in turns.iter().cycle().take(40).enumerate() {
        session.press(*button);
        play(&mut session, 400 + 80 * (i as u32 % 5));
        let now = session.state().pellets_remaining();
        assert!(now <= last);
        assert_eq!(
            session.score() as usize,
            (Layout::classic().pellet_count() - now) * 10
        );
        last = now;
    }
}

#[test]
fn test_corridor_play_through_and_restart() {
    let mut rows = vec!["#".repeat(50); 19];
    rows[16] = format!("#{}#", ".".repeat(48));
    let layout = Layout::from_rows(&rows);

    let mut session = Session::new(layout.clone());
    // (1, 16) starts on a pellet, which is only eaten by stepping back onto it.
    assert_eq!(session.state().pellets_remaining(), 48);

    session.press(Button::A);
    session.press(Button::A);
    session.press(Button::Right);
    play(&mut session, 47 * MOVE_INTERVAL_MS);
    assert_eq!(session.state().position(), Position::new(48, 16));
    assert_eq!(session.score(), 470);
    assert_eq!(session.status(), SessionStatus::Running);

    session.press(Button::Left);
    play(&mut session, 47 * MOVE_INTERVAL_MS);
    assert_eq!(session.status(), SessionStatus::Ended);
    assert_eq!(session.outcome(), Some(Outcome::AllPelletsCollected));
    assert_eq!(session.score(), 480);

    assert!(session.press(Button::A));
    assert_eq!(session.status(), SessionStatus::Idle);
    assert!(session.state().maze().matches(&layout));
}
