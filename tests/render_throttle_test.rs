use tui_pacman::core::Session;
use tui_pacman::term::RenderThrottle;
use tui_pacman::types::Button;

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
}

#[test]
fn render_throttle_static_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(t.should_render(1, 2, true));
}

#[test]
fn render_throttle_static_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(!t.should_render(10, 1, true));
    assert!(!t.should_render(249, 1, true));
    assert!(t.should_render(250, 1, true));
}

#[test]
fn render_throttle_dynamic_always_renders() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, false));
    assert!(t.should_render(1, 1, false));
    assert!(t.should_render(2, 1, false));
}

#[test]
fn render_throttle_reset_forces_next_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(!t.should_render(5, 1, true));
    t.reset();
    assert!(t.should_render(6, 1, true));
}

#[test]
fn render_throttle_follows_session_fingerprint() {
    let mut t = RenderThrottle::new(250);
    let mut session = Session::default();

    assert!(t.should_render(0, session.fingerprint(), !session.is_playing()));
    assert!(!t.should_render(16, session.fingerprint(), !session.is_playing()));

    // Idle -> difficulty prompt is a visible change.
    session.press(Button::A);
    assert!(t.should_render(32, session.fingerprint(), !session.is_playing()));

    // Running is never throttled.
    session.press(Button::A);
    assert!(session.is_playing());
    assert!(t.should_render(48, session.fingerprint(), !session.is_playing()));
    assert!(t.should_render(64, session.fingerprint(), !session.is_playing()));
}
