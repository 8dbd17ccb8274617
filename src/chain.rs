//! The reptile body: an ordered chain of segments held at fixed spacing.

use crate::config::SolverConfig;
use crate::constraint::SpacingConstraint;
use crate::error::ReptileError;
use crate::float::Float;
use crate::input::InputState;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::segment::{Segment, SegmentShape};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration for creating a chain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChainConfig<F: Float> {
    pub segment_count: usize,
    /// Target distance between adjacent segments.
    pub segment_length: F,
    pub stiffness: F,
    pub shape: SegmentShape<F>,
    /// Per-segment leg phase speeds are drawn uniformly from
    /// `[leg_phase_speed_min, leg_phase_speed_max)`.
    pub leg_phase_speed_min: F,
    pub leg_phase_speed_max: F,
    /// Seed for the phase speed generator.
    pub seed: u64,
}

impl<F: Float> Default for ChainConfig<F> {
    fn default() -> Self {
        ChainConfig {
            segment_count: 30,
            segment_length: F::from_f64(15.0),
            stiffness: F::one(),
            shape: SegmentShape::default(),
            leg_phase_speed_min: F::from_f64(0.2),
            leg_phase_speed_max: F::from_f64(0.3),
            seed: 0,
        }
    }
}

impl<F: Float> ChainConfig<F> {
    pub fn with_segments(mut self, segment_count: usize, segment_length: F) -> Self {
        self.segment_count = segment_count;
        self.segment_length = segment_length;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_shape(mut self, shape: SegmentShape<F>) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_leg_phase_speed(mut self, min: F, max: F) -> Self {
        self.leg_phase_speed_min = min;
        self.leg_phase_speed_max = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ReptileError> {
        if self.segment_count < 2 {
            return Err(ReptileError::TooFewSegments { count: self.segment_count });
        }
        if !(self.segment_length.is_finite() && self.segment_length > F::zero()) {
            return Err(ReptileError::InvalidSpacing);
        }
        if !(self.stiffness > F::zero() && self.stiffness <= F::one()) {
            return Err(ReptileError::InvalidStiffness);
        }
        let (min, max) = (self.leg_phase_speed_min, self.leg_phase_speed_max);
        if !(min.is_finite() && max.is_finite() && min <= max) {
            return Err(ReptileError::InvalidPhaseSpeedRange);
        }
        Ok(())
    }
}

/// A reptile body built from segments and one shared spacing constraint.
///
/// Index 0 is the head, which follows the pointer; the last index is the tail.
#[derive(Clone, Debug)]
pub struct Chain<F: Float> {
    segments: AllocVec<Segment<F>>,
    constraint: SpacingConstraint<F>,
}

impl<F: Float> Chain<F> {
    /// Build a collapsed chain with every segment at `origin`.
    ///
    /// Leg phase speeds come from a ChaCha8 generator seeded with
    /// `config.seed`, so equal configs always build equal chains.
    pub fn new(origin: Vec2<F>, config: &ChainConfig<F>) -> Result<Self, ReptileError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(origin, config, &mut rng)
    }

    /// Build a collapsed chain at the centre of a `width` x `height` surface.
    pub fn centered(width: F, height: F, config: &ChainConfig<F>) -> Result<Self, ReptileError> {
        Self::new(Vec2::new(width * F::half(), height * F::half()), config)
    }

    /// Build a collapsed chain drawing phase speeds from a caller-provided generator.
    pub fn with_rng<R: Rng>(
        origin: Vec2<F>,
        config: &ChainConfig<F>,
        rng: &mut R,
    ) -> Result<Self, ReptileError> {
        config.validate()?;

        let count = config.segment_count;
        let spread = config.leg_phase_speed_max - config.leg_phase_speed_min;
        let mut segments = AllocVec::with_capacity(count);

        for index in 0..count {
            let t = F::from_f64(rng.gen::<f64>());
            let speed = config.leg_phase_speed_min + spread * t;
            segments.push(Segment::new(origin, index, count, &config.shape, speed));
        }

        log::debug!(
            "built chain: {} segments, spacing {:.2}, origin ({:.1}, {:.1})",
            count,
            config.segment_length.to_f64(),
            origin.x.to_f64(),
            origin.y.to_f64(),
        );

        Ok(Chain {
            segments,
            constraint: SpacingConstraint::new(config.segment_length, config.stiffness),
        })
    }

    /// Advance one frame.
    ///
    /// Applies the pointer impulse to the head, integrates every segment,
    /// then runs `config.iterations` constraint passes.
    pub fn step<O: StepObserver>(
        &mut self,
        input: &InputState<F>,
        config: &SolverConfig<F>,
        observer: &mut O,
    ) {
        let impulse = config.controller.apply(&mut self.segments[0], input);
        observer.on_pointer_force(impulse.kind);

        for s in self.segments.iter_mut() {
            s.apply_impulse(config.gravity);
            s.integrate(config.friction);
        }
        observer.on_integrate();

        self.solve_constraints(config.iterations, observer);

        for s in self.segments.iter_mut() {
            s.refresh_heading();
        }
        observer.on_step_complete();
    }

    /// Pure form of [`step`](Self::step): returns the next state, leaving `self` untouched.
    pub fn advanced(&self, input: &InputState<F>, config: &SolverConfig<F>) -> Self {
        let mut next = self.clone();
        next.step(input, config, &mut NoOpStepObserver);
        next
    }

    /// Run `iterations` full passes over every adjacent pair.
    pub fn solve_constraints<O: StepObserver>(&mut self, iterations: usize, observer: &mut O) {
        for pass in 0..iterations {
            self.constraint_pass();
            observer.on_constraint_pass(pass);
        }
    }

    /// One forward sweep, head to tail. Each pair sees the corrections
    /// already made to the pairs ahead of it.
    pub fn constraint_pass(&mut self) {
        let constraint = self.constraint;
        for i in 0..self.segments.len() - 1 {
            let (lead, trail) = self.segments.split_at_mut(i + 1);
            constraint.solve(&mut lead[i], &mut trail[0]);
        }
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.segments.iter().map(|s| s.pos).collect()
    }

    /// Signed spacing error between segment `index` and the one behind it.
    pub fn spacing_error(&self, index: usize) -> F {
        self.constraint.error(&self.segments[index], &self.segments[index + 1])
    }

    /// Largest absolute spacing error over all adjacent pairs.
    pub fn max_spacing_error(&self) -> F {
        self.segments
            .windows(2)
            .map(|pair| self.constraint.error(&pair[0], &pair[1]).abs())
            .fold(F::zero(), |acc, e| if e > acc { e } else { acc })
    }

    pub fn rest_length(&self) -> F {
        self.constraint.rest_length
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a chain holds at least two segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn head(&self) -> &Segment<F> {
        &self.segments[0]
    }

    pub fn tail(&self) -> &Segment<F> {
        &self.segments[self.segments.len() - 1]
    }

    pub fn segments(&self) -> &[Segment<F>] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> &Segment<F> {
        &self.segments[index]
    }

    pub fn try_segment(&self, index: usize) -> Result<&Segment<F>, ReptileError> {
        self.segments.get(index).ok_or(ReptileError::SegmentOutOfBounds {
            index,
            count: self.segments.len(),
        })
    }

    pub fn segment_mut(&mut self, index: usize) -> &mut Segment<F> {
        &mut self.segments[index]
    }
}
