//! Verlet particles with position-based dynamics.

use crate::float::Float;
use crate::vec::Vec2;

/// A Verlet particle. Velocity is implicit: the difference between the
/// current and previous position is the displacement of the last step.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub pinned: bool,
}

impl<F: Float> Particle<F> {
    /// Create a free particle at rest (previous position = position).
    pub fn new(pos: Vec2<F>) -> Self {
        Particle { pos, prev_pos: pos, pinned: false }
    }

    /// Create a pinned particle. It never moves during integration or
    /// constraint relaxation.
    pub fn pinned_at(pos: Vec2<F>) -> Self {
        Particle { pos, prev_pos: pos, pinned: true }
    }

    /// The implicit per-step velocity, `pos - prev_pos`.
    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Commit one integration step: the current position becomes the
    /// previous one, then the position moves by `velocity`.
    pub fn advance(&mut self, velocity: Vec2<F>) {
        self.prev_pos = self.pos;
        self.pos = self.pos + velocity;
    }

    /// Snap back to the previous position, cancelling any drift. Applied
    /// to pinned particles every integration pass.
    pub fn hold(&mut self) {
        self.pos = self.prev_pos;
    }

    /// Pin the particle at its current position.
    pub fn pin(&mut self) {
        self.pinned = true;
        self.prev_pos = self.pos;
    }

    /// Release a pinned particle. It resumes at rest.
    pub fn unpin(&mut self) {
        self.pinned = false;
        self.prev_pos = self.pos;
    }
}
