//! Physics-driven hanging badge (lanyard) simulation.
//!
//! `lanyard` simulates a badge hanging from a fixed anchor: a chain of
//! rigid bodies joined by rope and ball-and-socket constraints, a
//! jitter-damped Catmull-Rom ribbon threaded through the links, and a
//! pointer drag interaction that picks the card up in 3D.
//!
//! # Features
//!
//! - **Link chain**: One fixed anchor, three swing links, one draggable
//!   card, connected by rope and spherical joints
//! - **Ribbon curve**: Chordal Catmull-Rom through the link positions,
//!   resampled every frame for the host renderer
//! - **Jitter filter**: Distance-proportional lerp on the innermost links
//! - **Drag controller**: Pointer unprojection with constant-depth feel,
//!   kinematic hand-off, hover/cursor affordance signal
//! - **Stabilizer**: Angular-velocity feedback that keeps the card facing
//!   the viewer
//! - **Observable**: Monitor frame phases via the `FrameObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod curve;
pub mod body;
pub mod joint;
pub mod world;
pub mod chain;
pub mod smoothing;
pub mod drag;
pub mod stabilizer;
pub mod band;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec3, Quat};
pub use curve::CatmullRom;
pub use body::{RigidBody, MotionMode, Collider};
pub use joint::{Joint, RopeJoint, SphericalJoint};
pub use world::{PhysicsWorld, WorldConfig, BodyHandle};
pub use chain::{BandChain, ChainConfig};
pub use smoothing::{LinkSmoother, SmoothingConfig};
pub use drag::{Camera, CursorHint, DragController};
pub use stabilizer::Stabilizer;
pub use band::Band;
pub use observer::{FrameObserver, NoOpFrameObserver};
pub use config::BandConfig;
pub use error::LanyardError;
