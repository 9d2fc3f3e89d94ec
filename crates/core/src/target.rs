//! Target registry: static entities removed on projectile impact.

/// Lifecycle of a simulated entity.
///
/// `Removed` entities are skipped everywhere and purged by the end-of-frame
/// compaction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Alive,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub x: f32,
    pub y: f32,
    state: Lifecycle,
}

impl Target {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            state: Lifecycle::Alive,
        }
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == Lifecycle::Alive
    }
}

/// Fixed initial set of targets with pure-removal lifecycle (no respawn).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetRegistry {
    targets: Vec<Target>,
}

impl TargetRegistry {
    pub fn new(points: &[(f32, f32)]) -> Self {
        Self {
            targets: points.iter().map(|&(x, y)| Target::new(x, y)).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    pub fn alive(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter().filter(|t| t.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// First live target within `precision` of `(x, y)` on both axes.
    pub fn find_hit(&self, x: f32, y: f32, precision: f32) -> Option<usize> {
        self.targets
            .iter()
            .position(|t| t.is_alive() && (x - t.x).abs() < precision && (y - t.y).abs() < precision)
    }

    /// Mark a target removed. Returns false when it already was.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.targets.get_mut(index) {
            Some(t) if t.is_alive() => {
                t.state = Lifecycle::Removed;
                true
            }
            _ => false,
        }
    }

    /// Drop removed targets.
    pub fn compact(&mut self) {
        self.targets.retain(Target::is_alive);
    }
}
