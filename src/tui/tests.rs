//! Tests for the TUI application state.

use super::sort_app::SortApp;
use crate::algorithms::{is_sorted, Algorithm};
use crate::config::{VisConfig, MAX_DELAY_SECS, MIN_DELAY_SECS};
use crate::frames::Highlight;
use crossterm::event::KeyCode;

fn app(algorithm: Algorithm) -> SortApp {
    let config = VisConfig::builder()
        .algorithm(algorithm)
        .count(8)
        .seed(42)
        .build();
    SortApp::new(config).unwrap()
}

fn play_to_end(app: &mut SortApp) {
    while !app.is_finished() {
        app.tick();
    }
}

#[test]
fn test_sort_app_lifecycle() {
    let mut app = app(Algorithm::Insertion);

    assert!(!app.paused);
    assert!(!app.should_quit());
    assert_eq!(app.position(), 0);
    assert!(app.current_frame().is_none());
    assert_eq!(
        app.bars().iter().map(|b| b.value).collect::<Vec<_>>(),
        app.run().input()
    );

    app.tick();
    assert_eq!(app.position(), 1);
    assert!(app.current_frame().is_some());

    // Pause holds the position
    app.handle_key(KeyCode::Char(' '));
    assert!(app.paused);
    app.tick();
    assert_eq!(app.position(), 1);

    app.handle_key(KeyCode::Char(' '));
    play_to_end(&mut app);
    assert!(app.status_line().starts_with("done"));

    let values: Vec<_> = app.bars().iter().map(|b| b.value).collect();
    assert!(is_sorted(&values));
    assert!(app.bars().iter().all(|b| !b.highlighted));

    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit());
    assert!(app.run().is_cancelled());
}

#[test]
fn test_ticks_show_every_frame_in_order() {
    for algorithm in Algorithm::ALL {
        let mut app = app(algorithm);
        let expected = app.run().frames().frames().to_vec();
        let mut shown = Vec::new();

        loop {
            app.tick();
            if app.is_finished() {
                break;
            }
            shown.push(app.current_frame().cloned().unwrap());
        }

        assert_eq!(shown, expected, "{algorithm}");
        assert_eq!(app.position(), expected.len());
        assert!(app.current_frame().is_none());
    }
}

#[test]
fn test_last_frame_stays_for_one_tick() {
    let mut app = app(Algorithm::Sleep);
    let total = app.run().frames().len();
    assert_eq!(total, 8);

    for _ in 0..total {
        app.tick();
    }
    assert!(!app.is_finished());
    assert!(app.status_line().starts_with("playing"));
    let last = app.current_frame().unwrap();
    assert_eq!(last.highlight(), Highlight::Pair(7, 7));
    assert!(app.bars()[7].highlighted);

    app.tick();
    assert!(app.is_finished());
    assert!(app.current_frame().is_none());
    assert!(app.bars().iter().all(|b| !b.highlighted));
    assert_eq!(app.position(), total);
}

#[test]
fn test_tick_after_finish_is_noop() {
    let mut app = app(Algorithm::Bubble);
    play_to_end(&mut app);
    let end = app.position();
    app.tick();
    assert_eq!(app.position(), end);
}

#[test]
fn test_restart_resets_position() {
    let mut app = app(Algorithm::Selection);
    app.tick();
    app.tick();
    let first_token = app.run().cancel_token();

    app.handle_key(KeyCode::Char('s'));
    assert_eq!(app.position(), 0);
    assert!(app.current_frame().is_none());
    assert!(!app.is_finished());
    assert!(first_token.is_cancelled());
    assert!(!app.run().is_cancelled());

    app.handle_key(KeyCode::Enter);
    assert_eq!(app.position(), 0);
}

#[test]
fn test_algorithm_cycling() {
    let mut app = app(Algorithm::Bubble);

    app.handle_key(KeyCode::Char('a'));
    assert_eq!(app.config().algorithm, Algorithm::Insertion);
    assert_eq!(app.run().algorithm(), Algorithm::Insertion);

    app.handle_key(KeyCode::Char('A'));
    app.handle_key(KeyCode::Char('A'));
    assert_eq!(app.config().algorithm, Algorithm::Sleep);
}

#[test]
fn test_speed_keys_clamp() {
    let mut app = app(Algorithm::Quick);
    let before = app.config().delay;

    app.handle_key(KeyCode::Char('+'));
    assert!(app.config().delay < before);

    for _ in 0..20 {
        app.handle_key(KeyCode::Char('+'));
    }
    assert!((app.config().delay - MIN_DELAY_SECS).abs() < f64::EPSILON);

    for _ in 0..20 {
        app.handle_key(KeyCode::Char('-'));
    }
    assert!((app.config().delay - MAX_DELAY_SECS).abs() < f64::EPSILON);
    assert!(app.last_error.is_none());
}

#[test]
fn test_unknown_key_ignored() {
    let mut app = app(Algorithm::Merge);
    app.handle_key(KeyCode::Char('z'));
    assert!(!app.paused);
    assert!(!app.should_quit());
}

#[test]
fn test_invalid_config_rejected() {
    let config = VisConfig::builder().count(200).build();
    assert!(SortApp::new(config).is_err());
}
