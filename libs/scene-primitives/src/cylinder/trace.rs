//! Exact ray intersection against the analytic cylinder surface.
//!
//! The lateral surface satisfies `x^2 + y^2 = r(z)^2` with `r` the linear
//! radius interpolation; substituting the ray's parametric point yields a
//! quadratic in `t` whose leading coefficient vanishes for axis-parallel
//! rays against a true cylinder. Grazing contact (discriminant within
//! tolerance of zero) is reported as a miss, which also covers a ray running
//! along a cone's axis and touching only the apex.

use config::constants::GEOM_EPSILON;
use scene_core::Ray;

use super::Cylinder;

pub(super) fn intersect_local(cyl: &Cylinder, ray: &Ray) -> Option<f64> {
    let mut best: Option<f64> = None;
    let mut consider = |t: f64| {
        if t >= 0.0 && best.map_or(true, |b| t < b) {
            best = Some(t);
        }
    };

    let base = cyl.base_radius();
    let top = cyl.top_radius();
    let height = cyl.height();
    let o = ray.origin;
    let d = ray.direction;

    // Lateral surface. A zero-height solid has none.
    if height != 0.0 {
        let k = (top - base) / height;
        let r_at_origin = base + k * o.z;

        let a = d.x * d.x + d.y * d.y - (k * d.z) * (k * d.z);
        let b = 2.0 * (o.x * d.x + o.y * d.y - r_at_origin * k * d.z);
        let c = o.x * o.x + o.y * o.y - r_at_origin * r_at_origin;

        if a.abs() <= GEOM_EPSILON {
            // Degenerate to linear: axis-parallel ray against a true
            // cylinder, or a ray parallel to a cone's slant. A vanishing b
            // means the ray lies on (or never meets) the surface.
            if b.abs() > GEOM_EPSILON {
                let t = -c / b;
                if cyl.reaches_height(o.z + t * d.z) {
                    consider(t);
                }
            }
        } else {
            let discriminant = b * b - 4.0 * a * c;
            if discriminant > GEOM_EPSILON {
                let sq = discriminant.sqrt();
                for t in [(-b - sq) / (2.0 * a), (-b + sq) / (2.0 * a)] {
                    if cyl.reaches_height(o.z + t * d.z) {
                        consider(t);
                    }
                }
            }
        }
    }

    // End caps: plane intersection plus a disk membership test. The disk
    // boundary is inclusive.
    if cyl.has_bottom_base() {
        if let Some(t) = cap_hit(ray, 0.0, base) {
            consider(t);
        }
    }
    if cyl.has_top_base() {
        if let Some(t) = cap_hit(ray, height, top) {
            consider(t);
        }
    }

    best
}

fn cap_hit(ray: &Ray, plane_z: f64, radius: f64) -> Option<f64> {
    // A zero-radius cap is a point; never a reportable hit.
    if radius <= 0.0 {
        return None;
    }
    // Rays parallel to the cap plane miss it.
    if ray.direction.z.abs() <= GEOM_EPSILON {
        return None;
    }
    let t = (plane_z - ray.origin.z) / ray.direction.z;
    if t < 0.0 {
        return None;
    }
    let p = ray.point_at(t);
    (p.x * p.x + p.y * p.y <= radius * radius).then_some(t)
}
