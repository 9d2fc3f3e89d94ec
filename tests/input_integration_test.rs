use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tui_raycaster::core::{Level, World};
use tui_raycaster::input::{map_key, should_quit, IntentTracker};
use tui_raycaster::types::{Control, EngineConfig};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

#[test]
fn arrows_and_letters_map_to_the_same_controls() {
    assert_eq!(map_key(press(KeyCode::Up)), map_key(press(KeyCode::Char('w'))));
    assert_eq!(map_key(press(KeyCode::Left)), Some(Control::RotateLeft));
    assert_eq!(map_key(press(KeyCode::Char(' '))), Some(Control::Fire));
    assert_eq!(map_key(press(KeyCode::Char('x'))), None);
}

#[test]
fn quit_keys() {
    assert!(should_quit(press(KeyCode::Char('q'))));
    assert!(should_quit(press(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!should_quit(press(KeyCode::Char('c'))));
}

#[test]
fn held_fire_key_shoots_once_through_the_world() {
    let mut world = World::new(Level::builtin().unwrap(), EngineConfig::default());
    let mut tracker = IntentTracker::new().with_key_release_timeout_ms(None);

    tracker.handle_key_event(press(KeyCode::Char(' ')));
    for _ in 0..5 {
        let intents = tracker.sample();
        world.step(&intents, 0.001);
        tracker.update(1);
    }
    assert_eq!(world.projectiles().len(), 1);

    tracker.handle_key_event(release(KeyCode::Char(' ')));
    tracker.handle_key_event(press(KeyCode::Char(' ')));
    world.step(&tracker.sample(), 0.001);
    assert_eq!(world.projectiles().len(), 2);
}

#[test]
fn held_movement_key_moves_the_player_every_frame() {
    let mut world = World::new(Level::builtin().unwrap(), EngineConfig::default());
    let mut tracker = IntentTracker::new().with_key_release_timeout_ms(None);
    let start = world.pose();

    tracker.handle_key_event(press(KeyCode::Char('w')));
    for _ in 0..10 {
        world.step(&tracker.sample(), 0.05);
        tracker.update(50);
    }
    // Facing west at 4 tiles/s for half a second.
    assert!((world.pose().x - (start.x - 2.0)).abs() < 1e-3);

    tracker.handle_key_event(release(KeyCode::Char('w')));
    let before = world.pose();
    world.step(&tracker.sample(), 0.05);
    assert_eq!(world.pose(), before);
}
