//! Per-column depth buffer used as the painter's occlusion test.
//!
//! One nearest-hit distance per screen column. It is reset to the maximum
//! depth at the start of every frame and only ever decreases afterwards:
//! walls write it first, then every sprite draw that wins the test lowers it
//! to its own distance.

#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    depth: Vec<f32>,
}

impl DepthBuffer {
    pub fn new(width: usize, max_depth: f32) -> Self {
        Self {
            depth: vec![max_depth; width],
        }
    }

    /// Start a new frame: resize to `width` columns and fill with `max_depth`.
    pub fn reset(&mut self, width: usize, max_depth: f32) {
        self.depth.resize(width, max_depth);
        self.depth.fill(max_depth);
    }

    pub fn width(&self) -> usize {
        self.depth.len()
    }

    pub fn get(&self, col: usize) -> Option<f32> {
        self.depth.get(col).copied()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.depth
    }

    /// Occlusion test-and-set for one column.
    ///
    /// Passes when nothing nearer than `dist` was drawn in `col` this frame,
    /// in which case the column depth is lowered to `dist`. Equal distances
    /// pass, so redrawing the same sprite is a no-op on the buffer.
    #[inline]
    pub fn test_and_set(&mut self, col: usize, dist: f32) -> bool {
        match self.depth.get_mut(col) {
            Some(d) if *d >= dist => {
                *d = dist;
                true
            }
            _ => false,
        }
    }
}
