//! Renderable geometry derived from chain state.
//!
//! Nothing here mutates the chain, so a frame can be re-projected as often as
//! the renderer likes and always yields the same strokes.

use crate::chain::Chain;
use crate::float::Float;
use crate::segment::Segment;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A straight line segment to be stroked.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stroke<F: Float> {
    pub from: Vec2<F>,
    pub to: Vec2<F>,
}

impl<F: Float> Stroke<F> {
    pub fn new(from: Vec2<F>, to: Vec2<F>) -> Self {
        Stroke { from, to }
    }

    pub fn length(&self) -> F {
        self.from.distance(self.to)
    }

    pub fn midpoint(&self) -> Vec2<F> {
        self.from.midpoint(self.to)
    }
}

/// One leg: a line from the segment to the foot, plus two barbs at the foot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Leg<F: Float> {
    pub root: Vec2<F>,
    pub tip: Vec2<F>,
    /// Direction from root to tip, radians.
    pub angle: F,
    pub barbs: [Stroke<F>; 2],
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LegPair<F: Float> {
    pub left: Leg<F>,
    pub right: Leg<F>,
}

/// Everything a renderer needs to draw one segment.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentPose<F: Float> {
    pub index: usize,
    pub position: Vec2<F>,
    pub heading: F,
    pub width: F,
    /// Link to the leader, or the forward head cap for the head segment.
    pub body: Stroke<F>,
    /// Perpendicular tick between this segment and its leader. `None` for the head.
    pub spine: Option<Stroke<F>>,
    /// Present on even-indexed segments only.
    pub legs: Option<LegPair<F>>,
}

impl<F: Float> SegmentPose<F> {
    pub fn is_head(&self) -> bool {
        self.index == 0
    }
}

/// Derives body, spine and leg geometry from segment state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PoseProjector<F: Float> {
    /// Length of the cap drawn forward from the head along its heading.
    pub head_length: F,
    /// Half the length of a spine tick.
    pub spine_half_length: F,
    /// Peak leg swing away from perpendicular, radians.
    pub leg_swing: F,
    /// Length of each barb at a leg tip.
    pub arrow_size: F,
}

impl<F: Float> Default for PoseProjector<F> {
    fn default() -> Self {
        PoseProjector {
            head_length: F::from_f64(10.0),
            spine_half_length: F::from_f64(4.0),
            leg_swing: F::half(),
            arrow_size: F::from_f64(3.0),
        }
    }
}

impl<F: Float> PoseProjector<F> {
    pub fn with_head_length(mut self, head_length: F) -> Self {
        self.head_length = head_length;
        self
    }

    pub fn with_spine_half_length(mut self, spine_half_length: F) -> Self {
        self.spine_half_length = spine_half_length;
        self
    }

    pub fn with_leg_swing(mut self, leg_swing: F) -> Self {
        self.leg_swing = leg_swing;
        self
    }

    pub fn with_arrow_size(mut self, arrow_size: F) -> Self {
        self.arrow_size = arrow_size;
        self
    }

    /// Poses for every segment, tail first so the head is drawn on top.
    pub fn project(&self, chain: &Chain<F>) -> AllocVec<SegmentPose<F>> {
        let mut out = AllocVec::with_capacity(chain.len());
        self.project_into(chain, &mut out);
        out
    }

    /// Like [`project`](Self::project), reusing `out`'s allocation.
    pub fn project_into(&self, chain: &Chain<F>, out: &mut AllocVec<SegmentPose<F>>) {
        out.clear();
        let segments = chain.segments();
        for i in (0..segments.len()).rev() {
            let leader = if i > 0 { Some(&segments[i - 1]) } else { None };
            out.push(self.project_segment(&segments[i], leader));
        }
    }

    /// Pose for one segment given the segment ahead of it (`None` for the head).
    pub fn project_segment(&self, segment: &Segment<F>, leader: Option<&Segment<F>>) -> SegmentPose<F> {
        let heading = segment.heading();

        let body = match leader {
            Some(leader) => Stroke::new(segment.pos, leader.pos),
            None => Stroke::new(
                segment.pos,
                segment.pos + Vec2::from_angle(heading).scale(self.head_length),
            ),
        };

        let spine = leader.map(|leader| self.spine_tick(segment.pos, leader.pos));

        let legs = if segment.has_legs() {
            Some(self.legs(segment, heading))
        } else {
            None
        };

        SegmentPose {
            index: segment.index,
            position: segment.pos,
            heading,
            width: segment.width,
            body,
            spine,
            legs,
        }
    }

    fn spine_tick(&self, from: Vec2<F>, to: Vec2<F>) -> Stroke<F> {
        let mid = from.midpoint(to);
        let perp = Vec2::from_angle((to - from).angle() + F::frac_pi_2())
            .scale(self.spine_half_length);
        Stroke::new(mid + perp, mid - perp)
    }

    fn legs(&self, segment: &Segment<F>, heading: F) -> LegPair<F> {
        let left_angle = heading + F::frac_pi_2() + segment.leg_phase.sin() * self.leg_swing;
        let right_angle =
            heading - F::frac_pi_2() + (segment.leg_phase + F::pi()).sin() * self.leg_swing;

        LegPair {
            left: self.leg(segment.pos, left_angle, segment.leg_length),
            right: self.leg(segment.pos, right_angle, segment.leg_length),
        }
    }

    fn leg(&self, root: Vec2<F>, angle: F, length: F) -> Leg<F> {
        let tip = root + Vec2::from_angle(angle).scale(length);
        let barb = |offset: F| {
            Stroke::new(tip, tip - Vec2::from_angle(angle + offset).scale(self.arrow_size))
        };
        Leg {
            root,
            tip,
            angle,
            barbs: [barb(-F::frac_pi_4()), barb(F::frac_pi_4())],
        }
    }
}
