use glam::DVec2;
use std::f64::consts::PI;

/// Distances below this are treated as coincident points.
const COINCIDENT_EPSILON: f64 = 1e-9;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wrap any heading into [0, 360).
#[inline]
pub fn normalize_heading(heading: f64) -> f64 {
    let wrapped = heading.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed shortest angle from `from` to `to`, in (-180, 180].
///
/// Positive means `to` lies clockwise (to the right) of `from`.
pub fn heading_difference(from: f64, to: f64) -> f64 {
    let diff = (to - from + 180.0).rem_euclid(360.0) - 180.0;
    if diff <= -180.0 {
        diff + 360.0
    } else {
        diff
    }
}

/// Unsigned shortest angle between two headings, in [0, 180].
#[inline]
pub fn heading_delta(a: f64, b: f64) -> f64 {
    heading_difference(a, b).abs()
}

/// The reciprocal of a heading.
#[inline]
pub fn reciprocal(heading: f64) -> f64 {
    normalize_heading(heading + 180.0)
}

/// Unit vector pointing along an aviation heading (0 = +y/north, 90 = +x/east).
#[inline]
pub fn heading_vector(heading: f64) -> DVec2 {
    let rad = deg_to_rad(heading);
    DVec2::new(rad.sin(), rad.cos())
}

/// Point reached by travelling `distance` from `origin` along `heading`.
#[inline]
pub fn project(origin: DVec2, heading: f64, distance: f64) -> DVec2 {
    origin + heading_vector(heading) * distance
}

/// Planar distance between two points, in local units.
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

/// Bearing from `from` to `to` in degrees [0, 360).
///
/// Returns `None` when the points coincide, since no direction is defined.
pub fn bearing(from: DVec2, to: DVec2) -> Option<f64> {
    let delta = to - from;
    if delta.length() < COINCIDENT_EPSILON {
        return None;
    }
    Some(normalize_heading(rad_to_deg(delta.x.atan2(delta.y))))
}

/// Signed perpendicular offset of `point` from the line through `origin`
/// along `heading`. Positive means the point lies to the right of the line.
pub fn cross_track(point: DVec2, origin: DVec2, heading: f64) -> f64 {
    let right = heading_vector(heading + 90.0);
    (point - origin).dot(right)
}

/// True when bearings `a` and `b` fall strictly on opposite sides of `reference`.
pub fn opposite_sides(a: f64, b: f64, reference: f64) -> bool {
    let side_a = heading_difference(reference, a);
    let side_b = heading_difference(reference, b);
    (side_a > 0.0 && side_b < 0.0) || (side_a < 0.0 && side_b > 0.0)
}

/// Move `current` toward `target` by at most `max_step`, landing exactly on
/// the target when it is within reach.
#[inline]
pub fn approach(current: f64, target: f64, max_step: f64) -> f64 {
    if (target - current).abs() <= max_step {
        target
    } else if target > current {
        current + max_step
    } else {
        current - max_step
    }
}
