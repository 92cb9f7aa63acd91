//! Distance constraints ("sticks") between mesh particles.

use crate::float::Float;
use crate::particle::Particle;

/// A stick tries to restore the distance between its two particles to the
/// rest length captured at creation. Endpoints and length never change.
#[derive(Clone, Debug, PartialEq)]
pub struct Stick<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
}

impl<F: Float> Stick<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        Stick { a, b, rest_length }
    }

    /// One relaxation step: move both endpoints half of the length error
    /// toward (or away from) each other. A pinned endpoint absorbs no
    /// correction; its partner still receives only its own half, so pins
    /// behave as infinite mass.
    pub fn solve(&self, particles: &mut [Particle<F>]) {
        let delta = particles[self.b].pos - particles[self.a].pos;
        let mut dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-10)) {
            // Coincident endpoints have no direction; the substitute length
            // keeps the correction factor finite.
            dist = F::from_f32(1e-4);
        }
        let diff = (dist - self.rest_length) / dist;
        let offset = delta.scale(F::half() * diff);

        if !particles[self.a].pinned {
            particles[self.a].pos = particles[self.a].pos + offset;
        }
        if !particles[self.b].pinned {
            particles[self.b].pos = particles[self.b].pos - offset;
        }
    }
}
