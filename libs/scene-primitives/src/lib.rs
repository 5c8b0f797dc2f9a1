//! # Scene Primitives
//!
//! Renderable solid primitives for the scene-core contracts.
//!
//! ## Architecture
//!
//! ```text
//! scene-core (contracts) → scene-primitives (shapes)
//! ```
//!
//! Each primitive keeps an analytic description of itself and derives two
//! views from it on demand: a tessellated triangle mesh for display, and
//! exact ray intersections for picking. The two never mix: picking
//! precision is independent of tessellation resolution.
//!
//! ## Usage
//!
//! ```rust
//! use scene_core::{MeshCollector, Pose, Ray, Renderable};
//! use scene_primitives::Cylinder;
//! use glam::DVec3;
//!
//! let handle = Cylinder::create(1.0, 1.0);
//! let cylinder = handle.read().unwrap();
//!
//! let mut frame = MeshCollector::new();
//! cylinder.render(&mut frame).unwrap();
//! assert!(!frame.meshes()[0].is_empty());
//!
//! let ray = Ray::new(DVec3::new(-5.0, 0.0, 0.5), DVec3::X);
//! let hit = cylinder.trace_ray(&Pose::IDENTITY, &ray);
//! assert!(hit.is_some());
//! ```

pub mod cylinder;
pub mod error;

pub use cylinder::{Cylinder, CylinderHandle};
pub use error::PrimitiveError;

use scene_core::Registry;

/// Registers every primitive in this crate with a persistence registry.
pub fn register_primitives(registry: &mut Registry) {
    registry.register(cylinder::TYPE_TAG, cylinder::revive);
}
