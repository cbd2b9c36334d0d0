//! Rotation, perspective projection and painter's-algorithm ordering.

use lnviz_core::{ProjectedPoint, ProjectionConfig, SurfacePoint};

/// Smallest magnitude the perspective denominator may take.
pub const MIN_DENOMINATOR: f64 = 1e-9;

/// Keep `denominator` away from zero, preserving its sign (zero counts as
/// positive).
#[inline]
fn guard_denominator(denominator: f64) -> f64 {
    if denominator.abs() >= MIN_DENOMINATOR {
        denominator
    } else if denominator < 0.0 {
        -MIN_DENOMINATOR
    } else {
        MIN_DENOMINATOR
    }
}

/// Rotate `point` about the z-axis by `rotation` radians, then project it.
///
/// All coordinates are first multiplied by `config.scale`; screen position is
/// `(x, y)·P / (z + P + D)` with `P = config.perspective` and
/// `D = config.distance`. The scaled z becomes the point's depth.
pub fn project_point(
    point: &SurfacePoint,
    rotation: f64,
    config: &ProjectionConfig,
) -> ProjectedPoint {
    let rotated = point.rotated(rotation);

    let x = rotated.x * config.scale;
    let y = rotated.y * config.scale;
    let z = rotated.z * config.scale;

    let denominator = guard_denominator(z + config.perspective + config.distance);

    ProjectedPoint {
        x: x * config.perspective / denominator,
        y: y * config.perspective / denominator,
        depth: z,
        arg: rotated.arg,
        sheet: rotated.sheet,
        radius: rotated.radius,
    }
}

/// Order points for painter's-algorithm drawing: descending depth, so that
/// the last point emitted is drawn on top. Stable for equal depths.
pub fn sort_by_depth(points: &mut [ProjectedPoint]) {
    points.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}

/// Project a whole point set and return it in draw order.
pub fn project_and_sort(
    points: &[SurfacePoint],
    rotation: f64,
    config: &ProjectionConfig,
) -> Vec<ProjectedPoint> {
    let mut projected: Vec<ProjectedPoint> = points
        .iter()
        .map(|p| project_point(p, rotation, config))
        .collect();
    sort_by_depth(&mut projected);
    projected
}
