//! Body segments: damped point masses with a leg-animation phase.

use crate::float::Float;
use crate::vec::Vec2;

/// Displacement below which the heading is treated as undefined.
const HEADING_EPSILON: f64 = 1e-9;

/// Shape of a segment derived from its place in the chain.
///
/// Segments closer to the head are wider and have longer legs; the
/// measurements shrink linearly toward the tail.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentShape<F: Float> {
    pub base_width: F,
    pub width_taper: F,
    pub base_leg_length: F,
    pub leg_taper: F,
}

impl<F: Float> Default for SegmentShape<F> {
    fn default() -> Self {
        SegmentShape {
            base_width: F::from_f64(4.0),
            width_taper: F::from_f64(0.15),
            base_leg_length: F::from_f64(8.0),
            leg_taper: F::from_f64(0.2),
        }
    }
}

impl<F: Float> SegmentShape<F> {
    /// Stroke width for segment `index` of a chain with `count` segments.
    pub fn width(&self, index: usize, count: usize) -> F {
        self.base_width + Self::remaining(index, count) * self.width_taper
    }

    /// Leg length for segment `index` of a chain with `count` segments.
    pub fn leg_length(&self, index: usize, count: usize) -> F {
        self.base_leg_length + Self::remaining(index, count) * self.leg_taper
    }

    fn remaining(index: usize, count: usize) -> F {
        F::from_f64(count.saturating_sub(index) as f64)
    }
}

/// A single node of the reptile body.
///
/// Velocity is explicit rather than implied by `pos - prev_pos`: constraint
/// corrections move `pos` without feeding back into `velocity`.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub velocity: Vec2<F>,
    pub index: usize,
    pub width: F,
    pub leg_length: F,
    pub leg_phase: F,
    pub leg_phase_speed: F,
    heading: F,
}

impl<F: Float> Segment<F> {
    pub fn new(
        pos: Vec2<F>,
        index: usize,
        count: usize,
        shape: &SegmentShape<F>,
        leg_phase_speed: F,
    ) -> Self {
        Segment {
            pos,
            prev_pos: pos,
            velocity: Vec2::zero(),
            index,
            width: shape.width(index, count),
            leg_length: shape.leg_length(index, count),
            leg_phase: F::zero(),
            leg_phase_speed,
            heading: F::zero(),
        }
    }

    /// Add an instantaneous change of velocity.
    pub fn apply_impulse(&mut self, impulse: Vec2<F>) {
        self.velocity += impulse;
    }

    /// Advance one frame: move by `velocity`, then decay it by `friction`.
    pub fn integrate(&mut self, friction: F) {
        self.prev_pos = self.pos;
        self.pos += self.velocity;
        self.velocity = self.velocity.scale(friction);
        self.leg_phase = self.leg_phase + self.leg_phase_speed;
    }

    /// Movement since the last integration step, constraint corrections included.
    pub fn displacement(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Direction of travel in radians.
    ///
    /// Falls back to the last well-defined heading while the segment is at
    /// rest, so callers never see the `atan2(0, 0)` artefact.
    pub fn heading(&self) -> F {
        let d = self.displacement();
        if d.length_sq() > F::from_f64(HEADING_EPSILON * HEADING_EPSILON) {
            d.angle()
        } else {
            self.heading
        }
    }

    /// Remember the current heading so it survives frames without motion.
    pub fn refresh_heading(&mut self) {
        self.heading = self.heading();
    }

    pub fn speed(&self) -> F {
        self.velocity.length()
    }

    /// Even-indexed segments carry a leg pair.
    pub fn has_legs(&self) -> bool {
        self.index % 2 == 0
    }
}
