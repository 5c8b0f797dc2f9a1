//! # Scene Core
//!
//! Shared contracts for renderable scene objects.
//!
//! ## Architecture
//!
//! ```text
//! scene-core (contracts) → scene-primitives (shapes)
//! ```
//!
//! A shape crate implements [`Renderable`] for each primitive; the host
//! rendering loop drives those implementations through a [`RenderContext`],
//! and picking/collision queries go through [`Renderable::trace_ray`] with a
//! [`Pose`] placing the object in the world. Persistence is out-of-core: a
//! primitive exposes its parameters as a named [`registry::ParamSet`] and the
//! [`registry::Registry`] revives objects from tagged state, so no shape type
//! ever owns a file format.

pub mod error;
pub mod mesh;
pub mod pose;
pub mod ray;
pub mod registry;
pub mod renderable;

pub use error::SceneError;
pub use mesh::Mesh;
pub use pose::Pose;
pub use ray::Ray;
pub use registry::{ParamSet, ParamValue, Persistable, Registry, TaggedState};
pub use renderable::{MeshCollector, RenderContext, Renderable, SceneObject};
