//! Curtain mesh: a grid of Verlet particles linked by sticks.

use crate::config::CurtainConfig;
use crate::float::Float;
use crate::particle::Particle;
use crate::stick::Stick;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Row-major flat index for a grid cell. Construction, relaxation order,
/// and rendering all share this one convention.
fn flat_index(cols: usize, col: usize, row: usize) -> usize {
    row * cols + col
}

/// The particle grid and its constraint graph. Rebuilt from scratch when
/// the surface size changes; mutated in place between rebuilds.
pub struct Mesh<F: Float> {
    pub(crate) particles: AllocVec<Particle<F>>,
    pub(crate) sticks: AllocVec<Stick<F>>,
    cols: usize,
    rows: usize,
}

impl<F: Float> Mesh<F> {
    /// Build the curtain for a surface of the given logical size.
    ///
    /// The effective spacing never exceeds 80% of the width divided across
    /// the columns, so the grid always fits. The grid is centered
    /// horizontally and keeps a minimum top margin of 40 units. Along the
    /// top row, every `max(1, pin_spacing / 2)`-th column is pinned.
    pub fn build(width: F, height: F, config: &CurtainConfig<F>) -> Self {
        let cols = config.cols.max(1);
        let rows = config.rows.max(1);

        // With a single column the span is zero and the division yields
        // infinity, so the configured spacing wins.
        let col_span = F::from_f32((cols - 1) as f32);
        let row_span = F::from_f32((rows - 1) as f32);
        let spacing = config.spacing.min(width * F::from_f32(0.8) / col_span);

        let offset_x = (width - spacing * col_span) * F::half();
        let offset_y = ((height - spacing * row_span) * F::from_f32(0.1)).max(F::from_f32(40.0));

        let pin_stride = (config.pin_spacing / 2).max(1);

        let mut particles = AllocVec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let pos = Vec2::new(
                    offset_x + F::from_f32(col as f32) * spacing,
                    offset_y + F::from_f32(row as f32) * spacing,
                );
                if row == 0 && col % pin_stride == 0 {
                    particles.push(Particle::pinned_at(pos));
                } else {
                    particles.push(Particle::new(pos));
                }
            }
        }

        // One rightward and one downward stick per cell that has such a
        // neighbor, cell by cell in row-major order. Relaxation processes
        // sticks in this same order every pass.
        let mut sticks = AllocVec::with_capacity(2 * cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let idx = flat_index(cols, col, row);
                if col + 1 < cols {
                    sticks.push(Stick::new(idx, idx + 1, spacing));
                }
                if row + 1 < rows {
                    sticks.push(Stick::new(idx, idx + cols, spacing));
                }
            }
        }

        Mesh { particles, sticks, cols, rows }
    }

    /// Flat index of the particle at (col, row).
    pub fn index(&self, col: usize, row: usize) -> usize {
        flat_index(self.cols, col, row)
    }

    /// Pin the particle at (col, row) at its current position.
    pub fn pin(&mut self, col: usize, row: usize) {
        let idx = self.index(col, row);
        self.particles[idx].pin();
    }

    /// Release the particle at (col, row).
    pub fn unpin(&mut self, col: usize, row: usize) {
        let idx = self.index(col, row);
        self.particles[idx].unpin();
    }

    pub fn is_pinned(&self, col: usize, row: usize) -> bool {
        self.particles[self.index(col, row)].pinned
    }

    pub fn position_at(&self, col: usize, row: usize) -> Vec2<F> {
        self.particles[self.index(col, row)].pos
    }

    /// All particle positions in row-major order.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    /// Corner indices of every grid cell, ordered top-left, top-right,
    /// bottom-right, bottom-left. This is the fill order for rendering.
    pub fn quads(&self) -> AllocVec<[usize; 4]> {
        let cell_rows = self.rows.saturating_sub(1);
        let cell_cols = self.cols.saturating_sub(1);
        let mut out = AllocVec::with_capacity(cell_rows * cell_cols);
        for row in 0..cell_rows {
            for col in 0..cell_cols {
                out.push([
                    self.index(col, row),
                    self.index(col + 1, row),
                    self.index(col + 1, row + 1),
                    self.index(col, row + 1),
                ]);
            }
        }
        out
    }

    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    pub fn particle(&self, index: usize) -> &Particle<F> {
        &self.particles[index]
    }

    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<F> {
        &mut self.particles[index]
    }

    pub fn sticks(&self) -> &[Stick<F>] {
        &self.sticks
    }

    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn stick_count(&self) -> usize { self.sticks.len() }
}
