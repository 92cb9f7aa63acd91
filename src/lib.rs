//! Pinned-curtain cloth simulation with Verlet integration.
//!
//! `drape` simulates a curtain: a grid of particles pinned along its top
//! edge, linked by distance constraints ("sticks") and driven by gravity,
//! per-step damping, and a circular pointer drag field. Positions advance
//! with position-based (Verlet) dynamics, then a fixed number of relaxation
//! passes pulls every stick back toward its rest length.
//!
//! # Features
//!
//! - **Verlet integration**: position-based dynamics with implicit velocity
//! - **Constraint relaxation**: fixed-count Gauss-Seidel passes over sticks
//! - **Pointer drag**: linear-falloff force transmitted from pointer motion
//! - **Observable**: monitor simulation steps via the `StepObserver` trait
//! - **`no_std` compatible**: the same code runs native and in WASM

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod stick;
pub mod mesh;
pub mod pointer;
pub mod config;
pub mod solver;
pub mod sim;
pub mod observer;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use stick::Stick;
pub use mesh::Mesh;
pub use pointer::PointerState;
pub use config::CurtainConfig;
pub use sim::Curtain;
pub use observer::{NoOpStepObserver, StepObserver};
