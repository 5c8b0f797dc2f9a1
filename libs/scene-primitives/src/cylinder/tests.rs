use super::*;

use approx::assert_relative_eq;
use glam::DVec3;
use scene_core::{MeshCollector, Registry, TaggedState};
use std::f64::consts::FRAC_PI_2;

fn cylinder(base: f64, top: f64, height: f64) -> Cylinder {
    let handle = Cylinder::create_with(base, top, height, 8, 3);
    let cyl = handle.read().expect("fresh handle").clone();
    cyl
}

// ---------------------------------------------------------------------------
// Parameter store & accessors
// ---------------------------------------------------------------------------

#[test]
fn radius_at_matches_linear_interpolation() {
    let cyl = cylinder(2.0, 4.0, 2.0);
    assert_relative_eq!(cyl.radius_at(0.0).expect("in domain"), 2.0);
    assert_relative_eq!(cyl.radius_at(1.0).expect("in domain"), 3.0);
    assert_relative_eq!(cyl.radius_at(2.0).expect("in domain"), 4.0);
    assert!(cyl.radius_at(-0.1).is_none());
    assert!(cyl.radius_at(2.1).is_none());
}

#[test]
fn radius_at_handles_negative_height() {
    let cyl = cylinder(2.0, 4.0, -2.0);
    assert_relative_eq!(cyl.radius_at(-1.0).expect("in domain"), 3.0);
    assert_relative_eq!(cyl.radius_at(-2.0).expect("in domain"), 4.0);
    assert!(cyl.radius_at(0.5).is_none());
}

#[test]
fn reaches_height_is_symmetric_under_sign_flip() {
    let up = cylinder(1.0, 1.0, 2.0);
    assert!(up.reaches_height(0.0));
    assert!(up.reaches_height(2.0));
    assert!(!up.reaches_height(-0.001));
    assert!(!up.reaches_height(2.001));

    let down = cylinder(1.0, 1.0, -2.0);
    assert!(down.reaches_height(0.0));
    assert!(down.reaches_height(-2.0));
    assert!(!down.reaches_height(0.001));
    assert!(!down.reaches_height(-2.001));
}

#[test]
fn zero_height_domain_is_the_base_plane() {
    let disk = cylinder(1.5, 0.5, 0.0);
    assert_relative_eq!(disk.radius_at(0.0).expect("in domain"), 1.5);
    assert!(disk.radius_at(0.001).is_none());
}

#[test]
fn set_radius_makes_a_true_cylinder() {
    let mut cyl = cylinder(1.0, 2.0, 1.0);
    cyl.set_radius(3.0);
    assert_eq!(cyl.base_radius(), 3.0);
    assert_eq!(cyl.top_radius(), 3.0);
}

#[test]
fn negative_radii_clamp_to_zero() {
    let mut cyl = cylinder(1.0, 1.0, 1.0);
    cyl.set_radii(-2.0, -0.5);
    assert_eq!(cyl.base_radius(), 0.0);
    assert_eq!(cyl.top_radius(), 0.0);

    let handle = Cylinder::create(-1.0, 1.0);
    assert_eq!(handle.read().unwrap().base_radius(), 0.0);
}

#[test]
fn mutation_changes_shape_not_identity() {
    let handle = Cylinder::create(1.0, 1.0);
    let before = handle.read().unwrap().tessellate().expect("mesh").vertex_count();
    handle.write().unwrap().set_slices(20);
    let after = handle.read().unwrap().tessellate().expect("mesh").vertex_count();
    assert!(after > before);
}

// ---------------------------------------------------------------------------
// Mesh generator
// ---------------------------------------------------------------------------

/// Lateral vertices for ring `k` given the fixed ring-major layout.
fn ring(mesh: &scene_core::Mesh, slices: usize, k: usize) -> &[DVec3] {
    &mesh.positions()[k * slices..(k + 1) * slices]
}

#[test]
fn vertex_count_follows_the_fixed_convention() {
    // Lateral: (stacks + 1) * slices. Each emitted cap: slices + 1.
    let mut cyl = cylinder(1.0, 2.0, 1.0);
    let lateral = (3 + 1) * 8;

    let mesh = cyl.tessellate().expect("mesh");
    assert_eq!(mesh.vertex_count(), lateral + 2 * (8 + 1));
    assert_eq!(mesh.triangle_count(), 2 * 3 * 8 + 2 * 8);

    cyl.set_has_bases(true, false);
    assert_eq!(cyl.tessellate().expect("mesh").vertex_count(), lateral + 9);

    cyl.set_has_bases(false, false);
    let bare = cyl.tessellate().expect("mesh");
    assert_eq!(bare.vertex_count(), lateral);
    assert_eq!(bare.triangle_count(), 2 * 3 * 8);
}

#[test]
fn equal_radii_produce_equal_rings() {
    let mut cyl = cylinder(1.5, 1.5, 2.0);
    cyl.set_has_bases(false, false);
    let mesh = cyl.tessellate().expect("mesh");
    for k in 0..=3 {
        for v in ring(&mesh, 8, k) {
            assert_relative_eq!(v.truncate().length(), 1.5, epsilon = 1e-12);
        }
    }
}

#[test]
fn zero_top_radius_collapses_the_top_ring() {
    let mut cyl = cylinder(1.0, 0.0, 1.0);
    cyl.set_has_bases(false, false);
    let mesh = cyl.tessellate().expect("mesh");
    for v in ring(&mesh, 8, 3) {
        assert_relative_eq!((*v - DVec3::new(0.0, 0.0, 1.0)).length(), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn resolution_is_clamped_not_rejected() {
    let handle = Cylinder::create_with(1.0, 1.0, 1.0, 1, 0);
    let cyl = handle.read().unwrap();
    // Stored values are untouched; the tessellator clamps to 3 slices and
    // 1 stack.
    assert_eq!(cyl.slices(), 1);
    assert_eq!(cyl.stacks(), 0);
    let mesh = cyl.tessellate().expect("mesh");
    assert_eq!(mesh.vertex_count(), 2 * 3 + 2 * 4);
    mesh.validate().expect("valid mesh");
}

#[test]
fn negative_height_extends_downward() {
    let mut cyl = cylinder(1.0, 1.0, -2.0);
    cyl.set_has_bases(false, false);
    let mesh = cyl.tessellate().expect("mesh");
    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(min.z, -2.0);
    assert_relative_eq!(max.z, 0.0);
}

#[test]
fn lateral_normals_are_the_analytic_gradient() {
    // Cone with slope 1: normal tilts 45 degrees away from the axis.
    let mut cyl = cylinder(1.0, 0.0, 1.0);
    cyl.set_has_bases(false, false);
    let mesh = cyl.tessellate().expect("mesh");
    let expected = DVec3::new(1.0, 0.0, 1.0).normalize();
    // First vertex sits at theta = 0 on the bottom ring.
    assert_relative_eq!((mesh.normal(0) - expected).length(), 0.0, epsilon = 1e-12);
}

#[test]
fn cap_normals_point_away_from_the_solid() {
    let cyl = cylinder(1.0, 1.0, 2.0);
    let mesh = cyl.tessellate().expect("mesh");
    let lateral = (3 + 1) * 8;
    // Bottom cap block comes first, its center vertex leads the fan.
    assert_eq!(mesh.normal(lateral as u32), DVec3::new(0.0, 0.0, -1.0));
    assert_eq!(mesh.normal((lateral + 9) as u32), DVec3::new(0.0, 0.0, 1.0));

    let down = cylinder(1.0, 1.0, -2.0);
    let mesh = down.tessellate().expect("mesh");
    assert_eq!(mesh.normal(lateral as u32), DVec3::new(0.0, 0.0, 1.0));
}

#[test]
fn zero_height_yields_caps_only() {
    let disk = cylinder(1.0, 0.5, 0.0);
    let mesh = disk.tessellate().expect("mesh");
    assert_eq!(mesh.vertex_count(), 2 * (8 + 1));
    mesh.validate().expect("valid mesh");
}

#[test]
fn degenerate_point_yields_an_empty_mesh() {
    let point = cylinder(0.0, 0.0, 0.0);
    let mesh = point.tessellate().expect("mesh");
    assert!(mesh.is_empty());
}

#[test]
fn non_finite_parameters_are_rejected() {
    let mut cyl = cylinder(1.0, 1.0, 1.0);
    cyl.set_height(f64::NAN);
    assert!(cyl.tessellate().is_err());
}

#[test]
fn generated_meshes_validate() {
    for (base, top, height) in [
        (1.0, 1.0, 2.0),
        (1.0, 0.0, 1.0),
        (0.0, 1.0, 1.0),
        (2.0, 0.5, -3.0),
        (1.0, 0.5, 0.0),
    ] {
        let cyl = cylinder(base, top, height);
        cyl.tessellate().expect("mesh").validate().expect("valid mesh");
    }
}

// ---------------------------------------------------------------------------
// Ray intersector
// ---------------------------------------------------------------------------

#[test]
fn axis_parallel_ray_hits_the_bottom_cap_first() {
    let cyl = cylinder(1.0, 1.0, 2.0);
    let ray = Ray::new(DVec3::new(0.5, 0.0, -1.0), DVec3::Z);
    let t = cyl.trace_ray_local(&ray).expect("hit");
    // The cap plane z = 0 is one unit away; the lateral surface is never
    // crossed by a ray parallel to the axis inside the radius.
    assert_relative_eq!(t, 1.0, epsilon = 1e-12);
}

#[test]
fn axis_ray_misses_an_uncapped_cone() {
    let mut cone = cylinder(1.0, 0.0, 1.0);
    cone.set_has_bases(false, false);
    let from_below = Ray::new(DVec3::new(0.0, 0.0, -1.0), DVec3::Z);
    let from_above = Ray::new(DVec3::new(0.0, 0.0, 2.0), DVec3::NEG_Z);
    assert_eq!(cone.trace_ray_local(&from_below), None);
    assert_eq!(cone.trace_ray_local(&from_above), None);
}

#[test]
fn side_ray_hits_a_true_cylinder() {
    let cyl = cylinder(1.0, 1.0, 2.0);
    let ray = Ray::new(DVec3::new(2.0, 0.0, 0.5), DVec3::NEG_X);
    let t = cyl.trace_ray_local(&ray).expect("hit");
    assert_relative_eq!(t, 1.0, epsilon = 1e-12);
}

#[test]
fn side_ray_hits_a_cone_at_the_interpolated_radius() {
    let cone = cylinder(1.0, 0.0, 1.0);
    let ray = Ray::new(DVec3::new(2.0, 0.0, 0.5), DVec3::NEG_X);
    let t = cone.trace_ray_local(&ray).expect("hit");
    // r(0.5) = 0.5, so the surface is crossed at x = 0.5.
    assert_relative_eq!(t, 1.5, epsilon = 1e-12);
}

#[test]
fn lateral_roots_outside_the_axial_domain_are_discarded() {
    let cyl = cylinder(1.0, 1.0, 2.0);
    // Crosses the infinite cylinder, but above the solid.
    let ray = Ray::new(DVec3::new(2.0, 0.0, 5.0), DVec3::NEG_X);
    assert_eq!(cyl.trace_ray_local(&ray), None);
}

#[test]
fn hits_behind_the_origin_are_discarded() {
    let cyl = cylinder(1.0, 1.0, 2.0);
    let ray = Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::Z);
    assert_eq!(cyl.trace_ray_local(&ray), None);
}

#[test]
fn disabled_caps_never_report_cap_hits() {
    let mut cyl = cylinder(1.0, 1.0, 2.0);
    cyl.set_has_bases(false, false);
    // Straight down the open tube.
    let inside = Ray::new(DVec3::new(0.5, 0.0, -1.0), DVec3::Z);
    assert_eq!(cyl.trace_ray_local(&inside), None);
    // The lateral surface still reports.
    let side = Ray::new(DVec3::new(2.0, 0.0, 1.0), DVec3::NEG_X);
    assert!(cyl.trace_ray_local(&side).is_some());
}

#[test]
fn negative_height_intersections_mirror_positive_ones() {
    let cyl = cylinder(1.0, 1.0, -2.0);
    let ray = Ray::new(DVec3::new(2.0, 0.0, -0.5), DVec3::NEG_X);
    let t = cyl.trace_ray_local(&ray).expect("hit");
    assert_relative_eq!(t, 1.0, epsilon = 1e-12);
}

#[test]
fn flat_disk_is_intersectable_from_above() {
    let disk = cylinder(1.0, 1.0, 0.0);
    let ray = Ray::new(DVec3::new(0.2, 0.0, 1.0), DVec3::NEG_Z);
    let t = disk.trace_ray_local(&ray).expect("hit");
    assert_relative_eq!(t, 1.0, epsilon = 1e-12);
}

#[test]
fn intersection_distance_is_independent_of_resolution() {
    let coarse = Cylinder::create_with(1.0, 0.3, 2.0, 3, 1);
    let fine = Cylinder::create_with(1.0, 0.3, 2.0, 256, 64);
    let ray = Ray::new(DVec3::new(3.0, 0.2, 1.1), DVec3::new(-1.0, 0.0, -0.1).normalize());
    let a = coarse.read().unwrap().trace_ray_local(&ray).expect("hit");
    let b = fine.read().unwrap().trace_ray_local(&ray).expect("hit");
    assert_relative_eq!(a, b);
}

#[test]
fn trace_ray_accounts_for_the_pose() {
    let cyl = cylinder(1.0, 1.0, 2.0);

    let translated = Pose::from_translation(DVec3::new(10.0, 0.0, 0.0));
    let ray = Ray::new(DVec3::new(10.5, 0.0, -3.0), DVec3::Z);
    let t = cyl.trace_ray(&translated, &ray).expect("hit");
    assert_relative_eq!(t, 3.0, epsilon = 1e-12);

    // Axis rotated onto -Y: approach along +Y toward the bottom cap.
    let rotated = Pose::new(glam::DQuat::from_rotation_x(FRAC_PI_2), DVec3::ZERO);
    let ray = Ray::new(DVec3::new(0.5, 3.0, 0.0), DVec3::NEG_Y);
    let t = cyl.trace_ray(&rotated, &ray).expect("hit");
    assert_relative_eq!(t, 3.0, epsilon = 1e-12);
}

// ---------------------------------------------------------------------------
// Rendering & persistence
// ---------------------------------------------------------------------------

#[test]
fn render_submits_the_current_mesh() {
    let handle = Cylinder::create(1.0, 1.0);
    let mut frame = MeshCollector::new();
    handle.read().unwrap().render(&mut frame).expect("render");
    assert_eq!(frame.meshes().len(), 1);
    assert_eq!(
        frame.meshes()[0].vertex_count(),
        handle.read().unwrap().tessellate().unwrap().vertex_count()
    );
}

#[test]
fn save_and_revive_round_trip() {
    let mut registry = Registry::new();
    crate::register_primitives(&mut registry);

    let handle = Cylinder::create_with(0.5, 2.5, -3.0, 17, 5);
    handle.write().unwrap().set_has_bases(false, true);

    let state = TaggedState::capture(&*handle.read().unwrap());
    assert_eq!(state.type_tag, TYPE_TAG);

    let revived = registry.revive(&state).expect("revive");
    assert_eq!(revived.save_state(), handle.read().unwrap().save_state());
}

#[test]
fn revive_rejects_incomplete_state() {
    let mut registry = Registry::new();
    crate::register_primitives(&mut registry);

    let mut params = ParamSet::new();
    params.set("base_radius", ParamValue::Float(1.0));
    let state = TaggedState {
        type_tag: TYPE_TAG.to_string(),
        params,
    };
    assert!(matches!(
        registry.revive(&state),
        Err(SceneError::MissingParameter { .. })
    ));
}
