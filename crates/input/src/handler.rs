//! Intent tracker for terminal environments.
//!
//! Turns a stream of key press / repeat / release events into per-frame
//! [`Intents`]. Rotation and movement are level-triggered (true while held);
//! fire is edge-triggered (true once per press).
//!
//! Many terminals never emit key release events. For those, a held key is
//! released automatically once no press or repeat for it has arrived within
//! the release timeout.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::map_code;
use crate::types::{Control, Intents};

// Long enough to bridge the gap before a terminal's auto-repeat kicks in.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 200;

const HELD_CONTROLS: [Control; 5] = [
    Control::RotateLeft,
    Control::RotateRight,
    Control::MoveForward,
    Control::MoveBackward,
    Control::Fire,
];

fn slot(control: Control) -> usize {
    match control {
        Control::RotateLeft => 0,
        Control::RotateRight => 1,
        Control::MoveForward => 2,
        Control::MoveBackward => 3,
        Control::Fire => 4,
    }
}

#[derive(Debug, Clone)]
pub struct IntentTracker {
    /// Milliseconds since the last press/repeat of each held control.
    held: [Option<u32>; 5],
    fire_pending: bool,
    key_release_timeout_ms: Option<u32>,
}

impl IntentTracker {
    pub fn new() -> Self {
        Self {
            held: [None; 5],
            fire_pending: false,
            key_release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    /// Set the auto-release timeout; `None` trusts release events entirely.
    pub fn with_key_release_timeout_ms(mut self, timeout_ms: Option<u32>) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.kind {
            KeyEventKind::Press => self.handle_key_press(key.code),
            KeyEventKind::Repeat => self.handle_key_repeat(key.code),
            KeyEventKind::Release => self.handle_key_release(key.code),
        }
    }

    pub fn handle_key_press(&mut self, code: KeyCode) {
        let Some(control) = map_code(code) else {
            return;
        };
        let held = &mut self.held[slot(control)];
        // Terminals without release events resend presses while held; only a
        // press after a release counts as a new trigger edge.
        if control == Control::Fire && held.is_none() {
            self.fire_pending = true;
        }
        *held = Some(0);
    }

    pub fn handle_key_repeat(&mut self, code: KeyCode) {
        if let Some(control) = map_code(code) {
            self.held[slot(control)] = Some(0);
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(control) = map_code(code) {
            self.held[slot(control)] = None;
        }
    }

    /// Age held keys by `elapsed_ms`, releasing those past the timeout.
    pub fn update(&mut self, elapsed_ms: u32) {
        let timeout = self.key_release_timeout_ms;
        for held in &mut self.held {
            if let Some(age) = held {
                *age = age.saturating_add(elapsed_ms);
                if timeout.is_some_and(|t| *age > t) {
                    *held = None;
                }
            }
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held[slot(control)].is_some()
    }

    /// Sample this frame's intents, consuming any pending fire edge.
    pub fn sample(&mut self) -> Intents {
        let mut intents = Intents::none();
        for control in HELD_CONTROLS {
            if control != Control::Fire && self.is_held(control) {
                intents.set(control, true);
            }
        }
        intents.fire = std::mem::take(&mut self.fire_pending);
        intents
    }

    pub fn reset(&mut self) {
        self.held = [None; 5];
        self.fire_pending = false;
    }
}

impl Default for IntentTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_held_movement_is_level_triggered() {
        let mut t = IntentTracker::new().with_key_release_timeout_ms(None);
        t.handle_key_press(KeyCode::Char('w'));
        assert!(t.sample().move_forward);
        t.update(1_000);
        assert!(t.sample().move_forward);

        t.handle_key_release(KeyCode::Char('w'));
        assert!(!t.sample().move_forward);
    }

    #[test]
    fn test_fire_is_edge_triggered() {
        let mut t = IntentTracker::new();
        t.handle_key_press(KeyCode::Char(' '));
        assert!(t.sample().fire);
        assert!(!t.sample().fire, "fire must not repeat while held");

        // A resent press while still held is not a new edge.
        t.handle_key_press(KeyCode::Char(' '));
        assert!(!t.sample().fire);

        t.handle_key_release(KeyCode::Char(' '));
        t.handle_key_press(KeyCode::Char(' '));
        assert!(t.sample().fire);
    }

    #[test]
    fn test_repeat_events_keep_keys_held_but_never_fire() {
        let mut t = IntentTracker::new();
        t.handle_key_event(KeyEvent::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Press,
        ));
        t.update(150);
        t.handle_key_event(KeyEvent::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        ));
        t.update(150);
        assert!(t.sample().rotate_left);

        t.handle_key_event(KeyEvent::new_with_kind(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        ));
        assert!(!t.sample().fire);
    }

    #[test]
    fn test_auto_release_after_timeout_without_key_release_events() {
        let mut t = IntentTracker::new().with_key_release_timeout_ms(Some(50));
        t.handle_key_press(KeyCode::Left);
        t.update(50);
        assert!(t.is_held(Control::RotateLeft));
        t.update(1);
        assert!(!t.is_held(Control::RotateLeft));
        assert!(!t.sample().rotate_left);
    }

    #[test]
    fn test_auto_release_rearms_fire() {
        let mut t = IntentTracker::new().with_key_release_timeout_ms(Some(50));
        t.handle_key_press(KeyCode::Char(' '));
        assert!(t.sample().fire);
        t.update(100);
        t.handle_key_press(KeyCode::Char(' '));
        assert!(t.sample().fire);
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut t = IntentTracker::new();
        t.handle_key_press(KeyCode::Char('d'));
        t.handle_key_press(KeyCode::Char(' '));
        t.reset();
        assert_eq!(t.sample(), Intents::none());
    }
}
