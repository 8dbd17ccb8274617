//! Configuration types for the per-frame solver.

use crate::error::ReptileError;
use crate::float::Float;
use crate::input::InputController;
use crate::vec::Vec2;

/// Per-frame simulation settings.
///
/// # Builder Pattern
/// ```
/// use reptile::config::SolverConfig;
/// use reptile::vec::Vec2;
///
/// let config: SolverConfig<f64> = SolverConfig::new()
///     .with_iterations(8)
///     .with_friction(0.95)
///     .with_gravity(Vec2::new(0.0, 0.1));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverConfig<F: Float> {
    /// Constraint passes per frame. Each pass sweeps every adjacent pair
    /// from head to tail. Default: 5.
    pub iterations: usize,
    /// Velocity retained per frame, in [0, 1]. Default: 0.97.
    pub friction: F,
    /// Constant velocity change added to every segment each frame.
    /// Default: zero.
    pub gravity: Vec2<F>,
    /// Pointer forces on the head.
    pub controller: InputController<F>,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            iterations: 5,
            friction: F::from_f64(0.97),
            gravity: Vec2::zero(),
            controller: InputController::default(),
        }
    }

    /// Set the number of constraint passes.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the friction coefficient.
    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Replace the pointer controller.
    pub fn with_controller(mut self, controller: InputController<F>) -> Self {
        self.controller = controller;
        self
    }

    pub fn validate(&self) -> Result<(), ReptileError> {
        if self.iterations == 0 {
            return Err(ReptileError::InvalidIterations);
        }
        if !(self.friction >= F::zero() && self.friction <= F::one()) {
            return Err(ReptileError::InvalidFriction);
        }
        Ok(())
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SolverConfig::<f64>::new().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_iterations() {
        let config = SolverConfig::<f64>::new().with_iterations(0);
        assert_eq!(config.validate(), Err(ReptileError::InvalidIterations));
    }

    #[test]
    fn rejects_amplifying_friction() {
        let config = SolverConfig::<f32>::new().with_friction(1.5);
        assert_eq!(config.validate(), Err(ReptileError::InvalidFriction));
        let config = SolverConfig::<f32>::new().with_friction(f32::NAN);
        assert_eq!(config.validate(), Err(ReptileError::InvalidFriction));
    }
}
