//! # Renderable Contract
//!
//! The capability trait shared by every primitive shape, plus the narrow
//! seam through which meshes reach the active rendering context.
//!
//! Shapes regenerate their mesh from current parameters on every render
//! call; hosts that need caching wrap the shape rather than the other way
//! around. Ray tracing runs against the analytic surface, never against the
//! tessellated mesh, so picking precision does not depend on tessellation
//! resolution.

use crate::error::SceneError;
use crate::mesh::Mesh;
use crate::pose::Pose;
use crate::ray::Ray;
use crate::registry::Persistable;

/// Sink for generated meshes. The host rendering loop provides one of these
/// per frame; shapes never talk to a graphics API directly.
pub trait RenderContext {
    /// Accepts a mesh for drawing.
    fn submit(&mut self, mesh: &Mesh);
}

/// Capability contract implemented by every renderable scene object.
pub trait Renderable {
    /// Regenerates the object's mesh from its current parameters and emits
    /// it to the rendering context.
    ///
    /// # Errors
    ///
    /// Returns an error if the current parameters describe geometry that
    /// cannot be tessellated (for example non-finite values).
    fn render(&self, ctx: &mut dyn RenderContext) -> Result<(), SceneError>;

    /// Traces a world-space ray against the object placed at `pose`.
    ///
    /// Returns the distance along `ray` to the nearest intersection, or
    /// `None` if the ray misses. The ray is transformed into the object's
    /// local frame internally; the returned parameter is valid along the
    /// original world-space ray.
    fn trace_ray(&self, pose: &Pose, ray: &Ray) -> Option<f64>;
}

/// A scene object is renderable and persistable; the registry revives
/// objects through this combined trait.
pub trait SceneObject: Renderable + Persistable {}

impl<T: Renderable + Persistable> SceneObject for T {}

/// A buffering [`RenderContext`] that retains every submitted mesh.
///
/// Hosts use it to batch a frame's geometry; tests use it to inspect what a
/// shape produced.
#[derive(Debug, Default)]
pub struct MeshCollector {
    meshes: Vec<Mesh>,
}

impl MeshCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the meshes submitted so far.
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Removes and returns all collected meshes.
    pub fn drain(&mut self) -> Vec<Mesh> {
        std::mem::take(&mut self.meshes)
    }
}

impl RenderContext for MeshCollector {
    fn submit(&mut self, mesh: &Mesh) {
        self.meshes.push(mesh.clone());
    }
}
