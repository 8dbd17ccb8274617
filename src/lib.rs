//! Procedural reptile animation driven by a pointer.
//!
//! `reptile` simulates a chain of damped segments whose head chases the
//! pointer. Each frame the segments are integrated, then a few passes of
//! distance-constraint relaxation pull them back to a fixed spacing. A pose
//! projector turns the result into strokes: a tapering body, spine ticks and
//! alternating leg pairs that swing with a per-segment phase.
//!
//! # Features
//!
//! - **Damped head chase**: attraction toward the pointer, repulsion while the
//!   primary button is held
//! - **Constraint solver**: forward head-to-tail sweeps, several per frame
//! - **Procedural legs**: seeded, desynchronised phase speeds
//! - **Pure projection**: geometry is re-derivable from chain state at any time
//! - **Observable**: Monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use reptile::{Chain, ChainConfig, InputState, NoOpStepObserver, PoseProjector, SolverConfig, Vec2};
//!
//! let mut chain: Chain<f64> = Chain::new(Vec2::new(400.0, 300.0), &ChainConfig::default()).unwrap();
//! let input = InputState::new(Vec2::new(500.0, 300.0));
//! let config = SolverConfig::new();
//!
//! chain.step(&input, &config, &mut NoOpStepObserver);
//! let poses = PoseProjector::default().project(&chain);
//! assert_eq!(poses.len(), chain.len());
//! assert!(poses.last().unwrap().is_head());
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod segment;
pub mod constraint;
pub mod chain;
pub mod input;
pub mod pose;
pub mod creature;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use segment::{Segment, SegmentShape};
pub use constraint::SpacingConstraint;
pub use chain::{Chain, ChainConfig};
pub use input::{ButtonState, HeadImpulse, InputController, InputState, PointerButton, PointerForce};
pub use pose::{Leg, LegPair, PoseProjector, SegmentPose, Stroke};
pub use creature::Creature;
pub use config::SolverConfig;
pub use observer::{LogStepObserver, NoOpStepObserver, StepObserver};
pub use error::ReptileError;
