//! Step observer trait for monitoring simulation progress.

/// Hooks into the phases of a simulation step. Implement this to profile
/// the solver, drive debug overlays, or log stretch residuals; all methods
/// default to no-ops.
pub trait StepObserver {
    /// Called after every particle has been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass over the sticks.
    fn on_relax_iteration(&mut self, _iteration: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// An observer that does nothing. Use when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
