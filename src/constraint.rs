//! Distance constraint keeping adjacent segments a fixed spacing apart.

use crate::float::Float;
use crate::vec::Vec2;
use crate::segment::Segment;

/// Pair distance below which the correction direction is undefined.
const DEGENERATE_DISTANCE: f64 = 1e-9;

/// Relaxes the distance between a leading segment and the one trailing it.
///
/// One call is a single relaxation step for one pair. The chain invokes it
/// across every pair, several passes per frame, to converge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpacingConstraint<F: Float> {
    pub rest_length: F,
    /// Fraction of the error removed per solve. 1.0 splits the full
    /// correction evenly between both segments.
    pub stiffness: F,
}

impl<F: Float> SpacingConstraint<F> {
    pub fn new(rest_length: F, stiffness: F) -> Self {
        SpacingConstraint { rest_length, stiffness }
    }

    /// Signed deviation from the rest length: positive when stretched.
    pub fn error(&self, lead: &Segment<F>, trail: &Segment<F>) -> F {
        lead.pos.distance(trail.pos) - self.rest_length
    }

    pub fn solve(&self, lead: &mut Segment<F>, trail: &mut Segment<F>) {
        let delta = lead.pos - trail.pos;
        let dist = delta.length();

        if dist.is_near_zero(F::from_f64(DEGENERATE_DISTANCE)) {
            // Stacked segments: lay the trailing one out behind the leader.
            let behind = Vec2::from_angle(lead.heading()).scale(self.rest_length * self.stiffness);
            trail.pos = lead.pos - behind;
            return;
        }

        let percent = (self.rest_length - dist) / dist * F::half() * self.stiffness;
        let offset = delta.scale(percent);

        lead.pos += offset;
        trail.pos -= offset;
    }
}
