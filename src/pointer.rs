//! Pointer input state fed into the simulation.

use crate::float::Float;
use crate::vec::Vec2;

/// Current and previous pointer position in surface-local coordinates,
/// plus whether the pointer is over the surface at all. Input signal only;
/// not part of the mesh.
#[derive(Clone, Debug)]
pub struct PointerState<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub active: bool,
}

impl<F: Float> Default for PointerState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> PointerState<F> {
    pub fn new() -> Self {
        PointerState {
            pos: Vec2::zero(),
            prev_pos: Vec2::zero(),
            active: false,
        }
    }

    /// Record a pointer-move event: the previous position shifts to the
    /// current one, so `displacement` reflects the motion of this frame.
    pub fn move_to(&mut self, x: F, y: F) {
        self.prev_pos = self.pos;
        self.pos = Vec2::new(x, y);
        self.active = true;
    }

    /// The pointer left the surface; it exerts no force until it returns.
    pub fn leave(&mut self) {
        self.active = false;
    }

    /// Pointer motion since the last move event.
    pub fn displacement(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }
}
