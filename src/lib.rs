//! # gravfield
//!
//! An interactive particle field. Tens of thousands of points are scattered
//! over the window, pushed aside by two attractors that chase the mouse,
//! pulled back toward where they started, bounced off the window edges and
//! colored by how fast they move.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gravfield::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     Simulation::new()
//!         .with_particle_count(75_000)
//!         .run()
//! }
//! ```
//!
//! ## Frame
//!
//! Every frame does the same thing, with no delta time involved:
//!
//! 1. the pointer is projected onto the z = 0 plane
//! 2. each attractor takes one damped step toward it
//! 3. every particle is integrated once (see [`integrator`])
//! 4. positions and colors are handed to a [`RenderSink`]
//!
//! The physics has no dependency on the renderer. [`ParticleField`] can be
//! stepped headless and presented to any [`RenderSink`].

pub mod attractor;
pub mod bounds;
pub mod camera;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
mod gpu;
pub mod input;
pub mod integrator;
pub mod particles;
mod shader;
mod simulation;
pub mod sink;
pub mod time;
pub mod viewport;

pub use attractor::Attractor;
pub use bounds::WorldBounds;
pub use color::SpeedPalette;
pub use config::{FieldConfig, Span};
pub use error::{GpuError, SimulationError};
pub use field::ParticleField;
pub use glam::{Mat4, Vec2, Vec3};
pub use gpu::PointRenderer;
pub use integrator::{integrate, StepParams};
pub use particles::{ParticleBuffer, Tunables};
pub use simulation::Simulation;
pub use sink::RenderSink;
pub use viewport::Viewport;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use gravfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::attractor::Attractor;
    pub use crate::color::SpeedPalette;
    pub use crate::config::FieldConfig;
    pub use crate::error::SimulationError;
    pub use crate::field::ParticleField;
    pub use crate::simulation::Simulation;
    pub use crate::sink::RenderSink;
    pub use crate::{Vec2, Vec3};
}
