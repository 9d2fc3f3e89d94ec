//! Frame clock: elapsed seconds between frames, clamped to a sane range.

use std::time::Instant;

use crate::types::{MAX_ELAPSED_SECS, MIN_ELAPSED_SECS};

/// Clamp a raw elapsed time into `[MIN_ELAPSED_SECS, MAX_ELAPSED_SECS]`.
///
/// The lower bound keeps `1.0 / dt` finite for the FPS readout; the upper
/// bound keeps a stalled frame from carrying projectiles across whole tiles.
pub fn clamp_elapsed(secs: f32) -> f32 {
    if secs.is_nan() {
        return MIN_ELAPSED_SECS;
    }
    secs.clamp(MIN_ELAPSED_SECS, MAX_ELAPSED_SECS)
}

#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self { last: now }
    }

    /// Seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        clamp_elapsed(elapsed)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn clamp_keeps_fps_finite() {
        assert_eq!(clamp_elapsed(0.0), MIN_ELAPSED_SECS);
        assert_eq!(clamp_elapsed(f32::NAN), MIN_ELAPSED_SECS);
        assert_eq!(clamp_elapsed(10.0), MAX_ELAPSED_SECS);
        assert_eq!(clamp_elapsed(0.016), 0.016);
    }

    #[test]
    fn tick_measures_between_instants() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        let dt = clock.tick_at(t0 + Duration::from_millis(20));
        assert!((dt - 0.02).abs() < 1e-4);
        // Same instant again: clamped to the minimum.
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(20)), MIN_ELAPSED_SECS);
    }
}
