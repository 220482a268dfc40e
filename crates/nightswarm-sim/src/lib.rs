//! Session engine for NIGHTSWARM.
//!
//! Owns the live entity sets for one level playthrough, runs the per-frame
//! systems in a fixed order, and produces `SessionView`s for the frontend.
//! Completely headless and deterministic for a given seed.

pub mod engine;
pub mod systems;

pub use engine::{SessionConfig, SessionEngine, SessionFrame};
pub use nightswarm_core as core;
