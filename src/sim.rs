//! The curtain simulation context.

use crate::config::CurtainConfig;
use crate::float::Float;
use crate::mesh::Mesh;
use crate::observer::StepObserver;
use crate::pointer::PointerState;
use crate::solver;

/// Owns the mesh, the pointer state, and the frame clock. The host drives
/// it: feed pointer events as they arrive, call [`Curtain::resize`] when
/// the surface changes, and call [`Curtain::tick`] once per animation
/// frame. Between ticks the mesh is read-only and safe to render from.
pub struct Curtain<F: Float> {
    mesh: Mesh<F>,
    pointer: PointerState<F>,
    config: CurtainConfig<F>,
    width: F,
    height: F,
    scale: F,
    last_time: Option<F>,
}

impl<F: Float> Curtain<F> {
    /// Create a curtain for a surface of the given logical size.
    pub fn new(width: F, height: F, config: CurtainConfig<F>) -> Self {
        let mesh = Mesh::build(width, height, &config);
        Curtain {
            mesh,
            pointer: PointerState::new(),
            config,
            width,
            height,
            scale: F::one(),
            last_time: None,
        }
    }

    /// The surface was resized. Rebuilds the mesh from scratch, discarding
    /// all simulation state; `scale` is the device pixel ratio the host
    /// applies uniformly to its drawing transform.
    pub fn resize(&mut self, width: F, height: F, scale: F) {
        self.width = width;
        self.height = height;
        self.scale = scale;
        self.mesh = Mesh::build(width, height, &self.config);
    }

    /// Record a pointer-move event in surface-local coordinates.
    pub fn pointer_move(&mut self, x: F, y: F) {
        self.pointer.move_to(x, y);
    }

    /// The pointer left the surface.
    pub fn pointer_leave(&mut self) {
        self.pointer.leave();
    }

    /// Advance one frame given a monotonically increasing timestamp in
    /// seconds. The time delta is clamped to `config.max_dt` so a long gap
    /// between frames (a backgrounded tab, say) cannot make the integrator
    /// overshoot. The first tick has no reference point and uses dt = 0.
    /// Returns the dt that was stepped.
    pub fn tick<O: StepObserver>(&mut self, now: F, observer: &mut O) -> F {
        let dt = match self.last_time {
            Some(last) => (now - last).min(self.config.max_dt),
            None => F::zero(),
        };
        self.last_time = Some(now);
        self.step(dt, observer);
        dt
    }

    /// One simulation step: integrate every particle, then relax the
    /// sticks. Integration always precedes relaxation, and steps never
    /// overlap.
    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        solver::integrate(&mut self.mesh, &self.pointer, &self.config, dt);
        observer.on_integrate();
        solver::satisfy(&mut self.mesh, self.config.iterations, observer);
        observer.on_step_complete();
    }

    pub fn mesh(&self) -> &Mesh<F> {
        &self.mesh
    }

    pub fn mesh_mut(&mut self) -> &mut Mesh<F> {
        &mut self.mesh
    }

    pub fn pointer(&self) -> &PointerState<F> {
        &self.pointer
    }

    pub fn config(&self) -> &CurtainConfig<F> {
        &self.config
    }

    pub fn width(&self) -> F { self.width }
    pub fn height(&self) -> F { self.height }

    /// Device pixel ratio last reported through [`Curtain::resize`].
    pub fn scale(&self) -> F { self.scale }
}
