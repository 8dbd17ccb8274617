//! Pointer input and the forces it exerts on the head segment.

use crate::float::Float;
use crate::vec::Vec2;
use crate::segment::Segment;

/// Below this pointer distance no direction can be taken, so no force applies.
const DIRECTION_EPSILON: f64 = 1e-9;

/// Pointer buttons tracked by the simulation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code (0, 1, 2) to a button.
    pub fn from_dom_button(code: i16) -> Option<Self> {
        match code {
            0 => Some(PointerButton::Primary),
            1 => Some(PointerButton::Middle),
            2 => Some(PointerButton::Secondary),
            _ => None,
        }
    }
}

/// Held state of each tracked button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub primary: bool,
    pub middle: bool,
    pub secondary: bool,
}

impl ButtonState {
    fn slot(&mut self, button: PointerButton) -> &mut bool {
        match button {
            PointerButton::Primary => &mut self.primary,
            PointerButton::Middle => &mut self.middle,
            PointerButton::Secondary => &mut self.secondary,
        }
    }

    pub fn is_held(&self, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => self.primary,
            PointerButton::Middle => self.middle,
            PointerButton::Secondary => self.secondary,
        }
    }
}

/// Latest pointer state, overwritten by host events and read once per frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InputState<F: Float> {
    pub pointer: Vec2<F>,
    pub buttons: ButtonState,
}

impl<F: Float> InputState<F> {
    pub fn new(pointer: Vec2<F>) -> Self {
        InputState { pointer, buttons: ButtonState::default() }
    }

    pub fn set_pointer(&mut self, pointer: Vec2<F>) {
        self.pointer = pointer;
    }

    pub fn press(&mut self, button: PointerButton) {
        *self.buttons.slot(button) = true;
    }

    pub fn release(&mut self, button: PointerButton) {
        *self.buttons.slot(button) = false;
    }

    pub fn is_held(&self, button: PointerButton) -> bool {
        self.buttons.is_held(button)
    }

    /// Builder form of [`press`](Self::press).
    pub fn with_pressed(mut self, button: PointerButton) -> Self {
        self.press(button);
        self
    }
}

/// Which pointer forces acted on the head during a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerForce {
    /// Pointer on the head (or non-finite): nothing applied.
    Idle,
    /// Pulled toward the pointer.
    Attract,
    /// Pointer inside the dead zone with the primary button held: pushed away only.
    Repel,
    /// Pulled toward the pointer and pushed away by the held primary button.
    AttractRepel,
}

/// Impulse on the head for one frame, split by origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeadImpulse<F: Float> {
    pub attraction: Vec2<F>,
    pub repulsion: Vec2<F>,
    pub kind: PointerForce,
}

impl<F: Float> HeadImpulse<F> {
    pub fn idle() -> Self {
        HeadImpulse {
            attraction: Vec2::zero(),
            repulsion: Vec2::zero(),
            kind: PointerForce::Idle,
        }
    }

    pub fn total(&self) -> Vec2<F> {
        self.attraction + self.repulsion
    }
}

/// Turns pointer state into velocity changes on the head segment.
///
/// The head is pulled toward the pointer with a strength proportional to
/// the distance, capped at `max_influence`. Holding the primary button
/// inside `repel_radius` adds a push away that grows as the pointer gets
/// closer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputController<F: Float> {
    pub influence: F,
    pub max_influence: F,
    /// Distances at or below this apply no attraction.
    pub dead_zone: F,
    pub repel_radius: F,
    pub repel_strength: F,
}

impl<F: Float> Default for InputController<F> {
    fn default() -> Self {
        InputController {
            influence: F::from_f64(0.2),
            max_influence: F::from_f64(10.0),
            dead_zone: F::one(),
            repel_radius: F::from_f64(100.0),
            repel_strength: F::from_f64(0.05),
        }
    }
}

impl<F: Float> InputController<F> {
    pub fn with_influence(mut self, influence: F, max_influence: F) -> Self {
        self.influence = influence;
        self.max_influence = max_influence;
        self
    }

    pub fn with_repulsion(mut self, radius: F, strength: F) -> Self {
        self.repel_radius = radius;
        self.repel_strength = strength;
        self
    }

    pub fn with_dead_zone(mut self, dead_zone: F) -> Self {
        self.dead_zone = dead_zone;
        self
    }

    /// Compute the impulse the pointer exerts on a head at `head`.
    pub fn impulse(&self, head: Vec2<F>, input: &InputState<F>) -> HeadImpulse<F> {
        if !input.pointer.is_finite() {
            log::warn!("ignoring non-finite pointer position {:?}", input.pointer);
            return HeadImpulse::idle();
        }

        let delta = input.pointer - head;
        let distance = delta.length();
        if !(distance > F::from_f64(DIRECTION_EPSILON)) {
            return HeadImpulse::idle();
        }

        let dir = delta.scale(F::one() / distance);
        let attraction = if distance > self.dead_zone {
            dir.scale((distance * self.influence).min(self.max_influence))
        } else {
            Vec2::zero()
        };
        let repulsion = if input.is_held(PointerButton::Primary) && distance < self.repel_radius {
            -dir.scale((self.repel_radius - distance) * self.repel_strength)
        } else {
            Vec2::zero()
        };

        let kind = match (distance > self.dead_zone, repulsion != Vec2::zero()) {
            (true, true) => PointerForce::AttractRepel,
            (true, false) => PointerForce::Attract,
            (false, true) => PointerForce::Repel,
            (false, false) => return HeadImpulse::idle(),
        };

        HeadImpulse { attraction, repulsion, kind }
    }

    /// Apply this frame's pointer impulse to the head segment.
    pub fn apply(&self, head: &mut Segment<F>, input: &InputState<F>) -> HeadImpulse<F> {
        let impulse = self.impulse(head.pos, input);
        if impulse.kind != PointerForce::Idle {
            head.apply_impulse(impulse.total());
        }
        impulse
    }
}
