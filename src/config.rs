//! Configuration for the curtain simulation.

use crate::float::Float;

/// All simulation parameters. `Default` carries the curtain's tuning; the
/// `with_*` methods exist mainly so tests can vary one knob at a time.
///
/// # Builder Pattern
/// ```
/// use drape::CurtainConfig;
///
/// let config: CurtainConfig<f32> = CurtainConfig::new()
///     .with_grid(32, 20)
///     .with_iterations(8)
///     .with_gravity(2000.0);
/// ```
#[derive(Clone, Debug)]
pub struct CurtainConfig<F: Float> {
    /// Grid columns. Default: 26.
    pub cols: usize,
    /// Grid rows. Default: 18.
    pub rows: usize,
    /// Constraint relaxation passes per step. More passes make the cloth
    /// look stiffer at more CPU cost. Default: 5.
    pub iterations: usize,
    /// Gravity in surface units per second squared, y down. Default: 1600.
    pub gravity: F,
    /// Fraction of velocity lost per step. Applied per step, not per
    /// second, so visual damping strength follows the frame rate.
    /// Default: 0.02.
    pub damping: F,
    /// Preferred particle spacing. The mesh shrinks it when the grid
    /// would not fit the surface. Default: 24.
    pub spacing: F,
    /// Controls the pin stride along the top row: every
    /// `max(1, pin_spacing / 2)`-th column is pinned. Default: 14.
    pub pin_spacing: usize,
    /// Radius of the pointer force field. Default: 90.
    pub mouse_radius: F,
    /// Scale applied to pointer motion before it is transmitted to nearby
    /// particles. Default: 0.35.
    pub mouse_force: F,
    /// Upper bound on the per-frame time delta in seconds, so a long pause
    /// between frames cannot destabilize the integrator. Default: 0.033.
    pub max_dt: F,
}

impl<F: Float> CurtainConfig<F> {
    /// Create a config with the default curtain tuning.
    pub fn new() -> Self {
        CurtainConfig {
            cols: 26,
            rows: 18,
            iterations: 5,
            gravity: F::from_f32(1600.0),
            damping: F::from_f32(0.02),
            spacing: F::from_f32(24.0),
            pin_spacing: 14,
            mouse_radius: F::from_f32(90.0),
            mouse_force: F::from_f32(0.35),
            max_dt: F::from_f32(0.033),
        }
    }

    /// Set the grid dimensions.
    pub fn with_grid(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    /// Set the number of relaxation passes per step.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the gravity acceleration.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the per-step damping fraction.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the preferred particle spacing.
    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the pin spacing along the top row.
    pub fn with_pin_spacing(mut self, pin_spacing: usize) -> Self {
        self.pin_spacing = pin_spacing;
        self
    }

    /// Set the pointer field radius.
    pub fn with_mouse_radius(mut self, mouse_radius: F) -> Self {
        self.mouse_radius = mouse_radius;
        self
    }

    /// Set the pointer force scale.
    pub fn with_mouse_force(mut self, mouse_force: F) -> Self {
        self.mouse_force = mouse_force;
        self
    }

    /// Set the frame time delta clamp.
    pub fn with_max_dt(mut self, max_dt: F) -> Self {
        self.max_dt = max_dt;
        self
    }
}

impl<F: Float> Default for CurtainConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
