//! Error types for building a reptile.

use core::fmt;

/// Errors reported when a configuration cannot produce a working chain.
///
/// The per-frame simulation never fails; only construction and explicit
/// validation return these.
#[derive(Debug, Clone, PartialEq)]
pub enum ReptileError {
    /// A chain needs a head and at least one trailing segment.
    TooFewSegments { count: usize },
    /// Segment spacing must be positive and finite.
    InvalidSpacing,
    /// Stiffness must be in (0, 1].
    InvalidStiffness,
    /// Friction must be in [0, 1].
    InvalidFriction,
    /// At least one constraint pass per frame is required.
    InvalidIterations,
    /// Leg phase speed range must be finite with min <= max.
    InvalidPhaseSpeedRange,
    /// Segment index is out of bounds.
    SegmentOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for ReptileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReptileError::TooFewSegments { count } => {
                write!(f, "chain needs at least 2 segments, got {}", count)
            }
            ReptileError::InvalidSpacing => write!(f, "segment spacing must be positive and finite"),
            ReptileError::InvalidStiffness => write!(f, "stiffness must be in (0, 1]"),
            ReptileError::InvalidFriction => write!(f, "friction must be in [0, 1]"),
            ReptileError::InvalidIterations => write!(f, "at least one constraint pass is required"),
            ReptileError::InvalidPhaseSpeedRange => {
                write!(f, "leg phase speed range must be finite with min <= max")
            }
            ReptileError::SegmentOutOfBounds { index, count } => {
                write!(f, "segment index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
