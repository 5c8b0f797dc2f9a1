//! # Generalized Cylinder Primitive
//!
//! A solid of revolution whose base lies in the XY plane and whose axis runs
//! along Z for `height` units. The radius varies linearly from `base_radius`
//! at `z = 0` to `top_radius` at `z = height`:
//!
//! - `base_radius == top_radius`: a true cylinder
//! - differing radii: a truncated cone
//! - either radius zero: a cone
//!
//! A negative `height` extends the solid downward from the base plane; the
//! sign encodes axis direction, not just magnitude. Flat disk caps at either
//! end are optional.

mod tessellate;
mod trace;

use std::sync::{Arc, RwLock};

use log::debug;

use config::constants::{DEFAULT_HEIGHT, DEFAULT_SLICES, DEFAULT_STACKS};
use scene_core::{
    Mesh, ParamSet, ParamValue, Persistable, Pose, Ray, RenderContext, Renderable, SceneError,
    SceneObject,
};

use crate::error::PrimitiveError;

/// Registry type tag for [`Cylinder`].
pub const TYPE_TAG: &str = "cylinder";

/// Shared, reference-counted handle to a cylinder.
///
/// The lock is the serialization point between a rendering thread and
/// whoever mutates parameters; the primitive itself takes no locks.
pub type CylinderHandle = Arc<RwLock<Cylinder>>;

/// A cylinder, truncated cone, or cone with optional end caps.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    /// Radius of the ring at `z = 0`.
    base_radius: f64,
    /// Radius of the ring at `z = height`.
    top_radius: f64,
    /// Signed extent along the Z axis.
    height: f64,
    /// Angular subdivisions around the axis.
    slices: u32,
    /// Axial subdivisions along the lateral surface.
    stacks: u32,
    /// Whether a flat disk closes the `z = height` end.
    has_top_base: bool,
    /// Whether a flat disk closes the `z = 0` end.
    has_bottom_base: bool,
}

impl Cylinder {
    fn from_parts(base_radius: f64, top_radius: f64, height: f64, slices: u32, stacks: u32) -> Self {
        Self {
            // Radii are kept non-negative.
            base_radius: base_radius.max(0.0),
            top_radius: top_radius.max(0.0),
            height,
            slices,
            stacks,
            has_top_base: true,
            has_bottom_base: true,
        }
    }

    /// Creates a shared cylinder with the default height, resolution, and
    /// both caps enabled.
    pub fn create(base_radius: f64, top_radius: f64) -> CylinderHandle {
        Self::create_with(
            base_radius,
            top_radius,
            DEFAULT_HEIGHT,
            DEFAULT_SLICES,
            DEFAULT_STACKS,
        )
    }

    /// Creates a shared cylinder with every shape parameter explicit.
    pub fn create_with(
        base_radius: f64,
        top_radius: f64,
        height: f64,
        slices: u32,
        stacks: u32,
    ) -> CylinderHandle {
        debug!(
            "creating cylinder: base={base_radius} top={top_radius} height={height} \
             slices={slices} stacks={stacks}"
        );
        Arc::new(RwLock::new(Self::from_parts(
            base_radius,
            top_radius,
            height,
            slices,
            stacks,
        )))
    }

    /// Returns the radius of the ring at `z = 0`.
    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    /// Returns the radius of the ring at `z = height`.
    pub fn top_radius(&self) -> f64 {
        self.top_radius
    }

    /// Returns the signed height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the angular subdivision count.
    pub fn slices(&self) -> u32 {
        self.slices
    }

    /// Returns the axial subdivision count.
    pub fn stacks(&self) -> u32 {
        self.stacks
    }

    /// Returns whether the top cap is enabled.
    pub fn has_top_base(&self) -> bool {
        self.has_top_base
    }

    /// Returns whether the bottom cap is enabled.
    pub fn has_bottom_base(&self) -> bool {
        self.has_bottom_base
    }

    /// Sets both radii to a single value, making the object a true cylinder.
    pub fn set_radius(&mut self, radius: f64) {
        let radius = radius.max(0.0);
        self.base_radius = radius;
        self.top_radius = radius;
    }

    /// Sets both radii independently.
    pub fn set_radii(&mut self, bottom: f64, top: f64) {
        self.base_radius = bottom.max(0.0);
        self.top_radius = top.max(0.0);
    }

    /// Changes the signed height.
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Sets the angular subdivision count. Values below the polygon minimum
    /// are stored as-is and clamped at tessellation time.
    pub fn set_slices(&mut self, slices: u32) {
        self.slices = slices;
    }

    /// Sets the axial subdivision count.
    pub fn set_stacks(&mut self, stacks: u32) {
        self.stacks = stacks;
    }

    /// Toggles both cap flags in one call.
    pub fn set_has_bases(&mut self, top: bool, bottom: bool) {
        self.has_top_base = top;
        self.has_bottom_base = bottom;
    }

    /// Returns the lateral radius at axial coordinate `z`, or `None` when
    /// the solid does not reach that height.
    ///
    /// The radius interpolates linearly between `base_radius` and
    /// `top_radius` over the axial domain.
    pub fn radius_at(&self, z: f64) -> Option<f64> {
        if !self.reaches_height(z) {
            return None;
        }
        if self.height == 0.0 {
            // Flat annulus/disk: only z = 0 is in the domain.
            return Some(self.base_radius);
        }
        Some(self.base_radius + (z / self.height) * (self.top_radius - self.base_radius))
    }

    /// Returns whether axial coordinate `z` lies within the solid's extent.
    ///
    /// The domain is `[0, height]` for non-negative heights and
    /// `[height, 0]` for negative ones.
    pub fn reaches_height(&self, z: f64) -> bool {
        if self.height < 0.0 {
            z >= self.height && z <= 0.0
        } else {
            z >= 0.0 && z <= self.height
        }
    }

    /// Tessellates the current parameters into a triangle mesh.
    ///
    /// The mesh is regenerated from scratch on every call; see
    /// [`Renderable::render`] for the rendering entry point.
    ///
    /// # Errors
    ///
    /// Returns an error when a shape parameter is non-finite.
    pub fn tessellate(&self) -> Result<Mesh, PrimitiveError> {
        tessellate::tessellate(self)
    }

    /// Intersects a ray already expressed in the primitive's local frame.
    ///
    /// Returns the smallest non-negative parameter `t` along the ray, or
    /// `None` on a miss. The intersection runs against the analytic surface,
    /// so its precision does not depend on `slices`/`stacks`.
    pub fn trace_ray_local(&self, ray: &Ray) -> Option<f64> {
        trace::intersect_local(self, ray)
    }
}

impl Renderable for Cylinder {
    fn render(&self, ctx: &mut dyn RenderContext) -> Result<(), SceneError> {
        let mesh = self.tessellate()?;
        ctx.submit(&mesh);
        Ok(())
    }

    fn trace_ray(&self, pose: &Pose, ray: &Ray) -> Option<f64> {
        let local = pose.world_to_local(ray);
        self.trace_ray_local(&local)
    }
}

impl Persistable for Cylinder {
    fn type_tag(&self) -> &'static str {
        TYPE_TAG
    }

    fn save_state(&self) -> ParamSet {
        let mut params = ParamSet::new();
        params.set("base_radius", ParamValue::Float(self.base_radius));
        params.set("top_radius", ParamValue::Float(self.top_radius));
        params.set("height", ParamValue::Float(self.height));
        params.set("slices", ParamValue::UInt(self.slices));
        params.set("stacks", ParamValue::UInt(self.stacks));
        params.set("has_top_base", ParamValue::Bool(self.has_top_base));
        params.set("has_bottom_base", ParamValue::Bool(self.has_bottom_base));
        params
    }

    fn restore_state(&mut self, params: &ParamSet) -> Result<(), SceneError> {
        let base_radius = params.float("base_radius")?;
        let top_radius = params.float("top_radius")?;
        let height = params.float("height")?;
        let slices = params.uint("slices")?;
        let stacks = params.uint("stacks")?;
        let has_top_base = params.boolean("has_top_base")?;
        let has_bottom_base = params.boolean("has_bottom_base")?;

        if !base_radius.is_finite() || !top_radius.is_finite() || !height.is_finite() {
            return Err(SceneError::invalid(
                "cylinder radii and height must be finite",
            ));
        }

        self.set_radii(base_radius, top_radius);
        self.height = height;
        self.slices = slices;
        self.stacks = stacks;
        self.has_top_base = has_top_base;
        self.has_bottom_base = has_bottom_base;
        Ok(())
    }
}

/// Revives a cylinder from a captured parameter set.
///
/// Registered under [`TYPE_TAG`] by [`crate::register_primitives`].
pub fn revive(params: &ParamSet) -> Result<Box<dyn SceneObject>, SceneError> {
    let mut cylinder = Cylinder::from_parts(
        config::constants::DEFAULT_RADIUS,
        config::constants::DEFAULT_RADIUS,
        DEFAULT_HEIGHT,
        DEFAULT_SLICES,
        DEFAULT_STACKS,
    );
    cylinder.restore_state(params)?;
    Ok(Box::new(cylinder))
}

#[cfg(test)]
mod tests;
