//! Tessellation of the generalized cylinder into a triangle mesh.
//!
//! The lateral surface is a grid of `stacks` bands by `slices` quads, each
//! quad split into two triangles. Lateral normals are the analytic gradient
//! of the implicit cone equation, so shading is smooth at any resolution.
//! Caps are triangle fans around a dedicated center vertex; their ring
//! vertices are re-emitted with the flat cap normal so lateral smoothing
//! never bleeds into the caps.

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};
use log::trace;

use config::constants::{MAX_SLICES, MAX_STACKS, MIN_SLICES, MIN_STACKS};
use scene_core::Mesh;

use super::Cylinder;
use crate::error::PrimitiveError;

pub(super) fn tessellate(cyl: &Cylinder) -> Result<Mesh, PrimitiveError> {
    let base = cyl.base_radius();
    let top = cyl.top_radius();
    let height = cyl.height();

    if !base.is_finite() || !top.is_finite() || !height.is_finite() {
        return Err(PrimitiveError::degenerate(format!(
            "cylinder parameters must be finite: base={base}, top={top}, height={height}"
        )));
    }

    let slices = cyl.slices().clamp(MIN_SLICES, MAX_SLICES) as usize;
    let stacks = cyl.stacks().clamp(MIN_STACKS, MAX_STACKS) as usize;
    // Zero height degenerates to a flat annulus/disk: caps only.
    let flat = height == 0.0;
    // sign(0) = +1 keeps the cap orientation convention stable for disks.
    let sign = if height < 0.0 { -1.0 } else { 1.0 };

    trace!(
        "tessellating cylinder: slices={slices} stacks={stacks} base={base} top={top} \
         height={height}"
    );

    let lateral_vertices = if flat { 0 } else { (stacks + 1) * slices };
    let mut mesh = Mesh::with_capacity(
        lateral_vertices + 2 * (slices + 1),
        2 * stacks * slices + 2 * slices,
    );

    let ring_dirs: Vec<DVec2> = (0..slices)
        .map(|i| {
            let theta = TAU * i as f64 / slices as f64;
            DVec2::new(theta.cos(), theta.sin())
        })
        .collect();

    if !flat {
        // Gradient of x^2 + y^2 = r(z)^2 at a surface point, normalized:
        // (cos t, sin t, -(top - base) / height). Outward for either height
        // sign because the interpolation slope flips with it.
        let slope = -(top - base) / height;

        for k in 0..=stacks {
            let z = height * k as f64 / stacks as f64;
            let r = base + (z / height) * (top - base);
            for dir in &ring_dirs {
                let normal = DVec3::new(dir.x, dir.y, slope).normalize();
                mesh.add_vertex(DVec3::new(r * dir.x, r * dir.y, z), normal);
            }
        }

        for k in 0..stacks {
            let ring = (k * slices) as u32;
            let next_ring = ((k + 1) * slices) as u32;
            for i in 0..slices {
                let j = (i + 1) % slices;
                let b0 = ring + i as u32;
                let b1 = ring + j as u32;
                let t0 = next_ring + i as u32;
                let t1 = next_ring + j as u32;
                emit(&mut mesh, sign, b0, b1, t1);
                emit(&mut mesh, sign, b0, t1, t0);
            }
        }
    }

    // A zero-radius end collapses to a point; no cap is emitted for it.
    if cyl.has_bottom_base() && base > 0.0 {
        emit_cap(&mut mesh, &ring_dirs, base, 0.0, -sign);
    }
    if cyl.has_top_base() && top > 0.0 {
        emit_cap(&mut mesh, &ring_dirs, top, height, sign);
    }

    Ok(mesh)
}

/// Adds a triangle wound counter-clockwise as seen from outside the solid.
///
/// Indices are laid out for an upward-extending solid; a negative height
/// mirrors the geometry through the base plane, so the winding flips.
fn emit(mesh: &mut Mesh, sign: f64, a: u32, b: u32, c: u32) {
    if sign < 0.0 {
        mesh.add_triangle(a, c, b);
    } else {
        mesh.add_triangle(a, b, c);
    }
}

/// Emits a flat disk cap at `z` as a fan around a center vertex.
fn emit_cap(mesh: &mut Mesh, ring_dirs: &[DVec2], radius: f64, z: f64, normal_z: f64) {
    let normal = DVec3::new(0.0, 0.0, normal_z);
    let center = mesh.add_vertex(DVec3::new(0.0, 0.0, z), normal);

    let ring_start = mesh.vertex_count() as u32;
    for dir in ring_dirs {
        mesh.add_vertex(DVec3::new(radius * dir.x, radius * dir.y, z), normal);
    }

    let n = ring_dirs.len() as u32;
    for i in 0..n {
        let j = (i + 1) % n;
        if normal_z < 0.0 {
            mesh.add_triangle(center, ring_start + j, ring_start + i);
        } else {
            mesh.add_triangle(center, ring_start + i, ring_start + j);
        }
    }
}
