//! Step observer trait for monitoring the simulation frame by frame.

use crate::input::PointerForce;

/// Trait for observing simulation steps.
///
/// Implement this to watch the solver (debug overlays, logging, tests).
/// All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after the pointer impulse has been applied to the head.
    fn on_pointer_force(&mut self, _force: PointerForce) {}

    /// Called after every segment has been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each full constraint sweep.
    fn on_constraint_pass(&mut self, _pass: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Observer that reports each frame through the `log` facade.
///
/// Passes and forces go to `trace`, one summary line per frame to `debug`.
#[derive(Debug, Default)]
pub struct LogStepObserver {
    frame: u64,
    passes: usize,
    force: Option<PointerForce>,
}

impl LogStepObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed frames seen so far.
    pub fn frames(&self) -> u64 {
        self.frame
    }
}

impl StepObserver for LogStepObserver {
    fn on_pointer_force(&mut self, force: PointerForce) {
        log::trace!("frame {}: pointer force {:?}", self.frame, force);
        self.force = Some(force);
    }

    fn on_integrate(&mut self) {
        log::trace!("frame {}: integrated", self.frame);
    }

    fn on_constraint_pass(&mut self, pass: usize) {
        log::trace!("frame {}: constraint pass {}", self.frame, pass);
        self.passes = pass + 1;
    }

    fn on_step_complete(&mut self) {
        log::debug!(
            "frame {} complete: {:?}, {} constraint passes",
            self.frame,
            self.force.take().unwrap_or(PointerForce::Idle),
            self.passes,
        );
        self.passes = 0;
        self.frame += 1;
    }
}
