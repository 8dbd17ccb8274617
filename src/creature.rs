//! Owned frame loop tying the chain, pointer input and pose projection together.

use crate::chain::{Chain, ChainConfig};
use crate::config::SolverConfig;
use crate::error::ReptileError;
use crate::float::Float;
use crate::input::{InputState, PointerButton};
use crate::observer::StepObserver;
use crate::pose::{PoseProjector, SegmentPose};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A complete animated reptile.
///
/// Hosts forward pointer events as they arrive and call [`frame`](Self::frame)
/// once per display refresh; the returned poses are ordered tail to head.
pub struct Creature<F: Float> {
    chain: Chain<F>,
    input: InputState<F>,
    solver: SolverConfig<F>,
    projector: PoseProjector<F>,
    poses: AllocVec<SegmentPose<F>>,
}

impl<F: Float> Creature<F> {
    /// Spawn a collapsed reptile at the centre of the surface, with the
    /// pointer resting on its head.
    pub fn new(
        width: F,
        height: F,
        chain_config: &ChainConfig<F>,
        solver: SolverConfig<F>,
        projector: PoseProjector<F>,
    ) -> Result<Self, ReptileError> {
        solver.validate()?;
        let chain = Chain::centered(width, height, chain_config)?;
        let input = InputState::new(chain.head().pos);
        Ok(Creature {
            chain,
            input,
            solver,
            projector,
            poses: AllocVec::with_capacity(chain_config.segment_count),
        })
    }

    pub fn pointer_moved(&mut self, x: F, y: F) {
        self.input.set_pointer(Vec2::new(x, y));
    }

    pub fn button_pressed(&mut self, button: PointerButton) {
        self.input.press(button);
    }

    pub fn button_released(&mut self, button: PointerButton) {
        self.input.release(button);
    }

    /// Step the simulation once and return the fresh poses.
    pub fn frame<O: StepObserver>(&mut self, observer: &mut O) -> &[SegmentPose<F>] {
        self.chain.step(&self.input, &self.solver, observer);
        self.projector.project_into(&self.chain, &mut self.poses);
        &self.poses
    }

    /// Poses from the most recent frame, without stepping.
    pub fn poses(&self) -> &[SegmentPose<F>] {
        &self.poses
    }

    pub fn chain(&self) -> &Chain<F> {
        &self.chain
    }

    pub fn input(&self) -> &InputState<F> {
        &self.input
    }

    pub fn solver_mut(&mut self) -> &mut SolverConfig<F> {
        &mut self.solver
    }
}
