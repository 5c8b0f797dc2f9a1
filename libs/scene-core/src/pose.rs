//! # Pose
//!
//! Rigid placement transform for scene objects.
//!
//! A [`Pose`] carries the rotation and translation placing an object in the
//! world. Ray queries run in the object's local frame, so the pose also
//! provides the inverse mapping for rays. Rigid transforms preserve lengths,
//! which keeps intersection parameters valid in both frames.

use glam::{DMat4, DQuat, DVec3};

use crate::ray::Ray;

/// Rotation plus translation placing an object in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position of the object origin.
    pub translation: DVec3,
    /// World-space orientation of the object frame.
    pub rotation: DQuat,
}

impl Pose {
    /// The identity placement: object frame coincides with the world frame.
    pub const IDENTITY: Self = Self {
        translation: DVec3::ZERO,
        rotation: DQuat::IDENTITY,
    };

    /// Creates a pose from a rotation and a translation.
    pub const fn new(rotation: DQuat, translation: DVec3) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Creates a pure translation pose.
    pub const fn from_translation(translation: DVec3) -> Self {
        Self {
            translation,
            rotation: DQuat::IDENTITY,
        }
    }

    /// Returns the equivalent 4x4 affine matrix (local → world).
    pub fn to_matrix(&self) -> DMat4 {
        DMat4::from_rotation_translation(self.rotation, self.translation)
    }

    /// Returns the inverse pose (world → local).
    pub fn inverse(&self) -> Self {
        let inv_rotation = self.rotation.conjugate();
        Self {
            rotation: inv_rotation,
            translation: inv_rotation * -self.translation,
        }
    }

    /// Transforms a point from local to world space.
    #[inline]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.rotation * point + self.translation
    }

    /// Transforms a direction from local to world space.
    #[inline]
    pub fn transform_vector(&self, vector: DVec3) -> DVec3 {
        self.rotation * vector
    }

    /// Composes two poses: `self` applied after `other`.
    pub fn compose(&self, other: &Pose) -> Self {
        Self {
            rotation: self.rotation * other.rotation,
            translation: self.rotation * other.translation + self.translation,
        }
    }

    /// Maps a world-space ray into this pose's local frame.
    ///
    /// Direction length is preserved, so a parameter `t` found against local
    /// geometry is the same distance along the original world ray.
    pub fn world_to_local(&self, ray: &Ray) -> Ray {
        let inv = self.inverse();
        Ray::new(
            inv.transform_point(ray.origin),
            inv.transform_vector(ray.direction),
        )
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
