//! Circular dot outlines

use kurbo::{BezPath, Point};

/// Control point offset factor for approximating a quarter circle with one cubic
pub const KAPPA: f64 = 0.5522848;

/// Append a closed circle of `radius` around `center` to `path`.
///
/// Four cubic quarter arcs, starting at the top point and running clockwise in a
/// y-up coordinate system: top, right, bottom, left, back to top.
pub fn append_dot(path: &mut BezPath, center: Point, radius: f64) {
    let (cx, cy) = (center.x, center.y);
    let k = KAPPA * radius;

    path.move_to((cx, cy + radius));
    path.curve_to((cx + k, cy + radius), (cx + radius, cy + k), (cx + radius, cy));
    path.curve_to((cx + radius, cy - k), (cx + k, cy - radius), (cx, cy - radius));
    path.curve_to((cx - k, cy - radius), (cx - radius, cy - k), (cx - radius, cy));
    path.curve_to((cx - radius, cy + k), (cx - k, cy + radius), (cx, cy + radius));
    path.close_path();
}

/// A single closed dot
pub fn dot_path(center: Point, radius: f64) -> BezPath {
    let mut path = BezPath::new();
    append_dot(&mut path, center, radius);
    path
}
