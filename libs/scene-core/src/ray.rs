//! # Ray
//!
//! Parametric ray used by picking and collision queries.

use glam::DVec3;

/// A ray with an origin and a direction.
///
/// The direction is not required to be unit length; intersection distances
/// are parameters `t` along `direction`, so callers that want metric
/// distances should pass a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: DVec3,
    /// Ray direction.
    pub direction: DVec3,
}

impl Ray {
    /// Creates a ray from an origin and a direction.
    pub const fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Returns the point at parameter `t` along the ray.
    #[inline]
    pub fn point_at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}
