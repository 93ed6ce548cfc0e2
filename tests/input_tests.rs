//! Input tests - held-key repeat cadence driven by a simulated clock

use blockfall::input::{handle_key_event, InputHandler, KeyInput};
use blockfall::types::{GameAction, Key};
use crossterm::event::{KeyCode, KeyEvent};

/// Advance in 1 ms steps and record the time of every emitted action
fn record(ih: &mut InputHandler, from_ms: u32, to_ms: u32) -> Vec<(u32, GameAction)> {
    let mut out = Vec::new();
    for t in from_ms + 1..=to_ms {
        for action in ih.update(1) {
            out.push((t, action));
        }
    }
    out
}

#[test]
fn test_held_left_repeats_at_fixed_cadence() {
    let mut ih = InputHandler::new();
    assert_eq!(ih.handle_key_press(Key::Left), Some(GameAction::MoveLeft));

    let times: Vec<u32> = record(&mut ih, 0, 300).into_iter().map(|(t, _)| t).collect();
    assert_eq!(times, vec![100, 140, 180, 220, 260, 300]);
}

#[test]
fn test_held_down_uses_soft_drop_cadence() {
    let mut ih = InputHandler::new();
    ih.handle_key_press(Key::Down);

    let events = record(&mut ih, 0, 190);
    let times: Vec<u32> = events.iter().map(|&(t, _)| t).collect();
    assert_eq!(times, vec![100, 130, 160, 190]);
    assert!(events.iter().all(|&(_, a)| a == GameAction::SoftDrop));
}

#[test]
fn test_release_stops_repeats_immediately() {
    let mut ih = InputHandler::new();
    ih.handle_key_press(Key::Right);
    assert_eq!(record(&mut ih, 0, 139).len(), 1);

    ih.handle_key_release(Key::Right);
    assert!(record(&mut ih, 139, 1000).is_empty());
}

#[test]
fn test_chunked_updates_match_fine_updates() {
    let mut fine = InputHandler::new();
    let mut coarse = InputHandler::new();
    fine.handle_key_press(Key::Left);
    coarse.handle_key_press(Key::Left);

    let fine_count = record(&mut fine, 0, 500).len();
    let coarse_count: usize = [17u32, 83, 250, 150].iter().map(|&ms| coarse.update(ms).len()).sum();
    assert_eq!(fine_count, coarse_count);
}

#[test]
fn test_terminal_events_drive_handler() {
    let mut ih = InputHandler::new().with_key_release_timeout_ms(150);

    let Some(KeyInput::Press(key)) = handle_key_event(KeyEvent::from(KeyCode::Char('a'))) else {
        panic!("expected a press");
    };
    assert_eq!(key, Key::Left);
    assert_eq!(ih.handle_key_press(key), Some(GameAction::MoveLeft));

    // First repeat at 100 ms; the key is dropped after 150 ms without events.
    let times: Vec<u32> = record(&mut ih, 0, 400).into_iter().map(|(t, _)| t).collect();
    assert_eq!(times, vec![100, 140]);
    assert!(!ih.is_held(Key::Left));
}
