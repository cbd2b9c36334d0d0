//! Point cloud of the logarithm's Riemann surface.
//!
//! Each sheet is sampled on a polar grid whose angular interval is widened by
//! the overlap fraction on both ends, so neighbouring sheets cover the same
//! angles near the seam and blend instead of meeting at a hard edge. All
//! sheets share the same `(x, y)` footprint; only height, phase and color tell
//! them apart, which is what gives the view its continuous spiral look.

use lnviz_core::{ln_principal, SurfaceParams, SurfacePoint};
use std::f64::consts::TAU;

/// Unwrap a principal argument onto the branch that contains `angle`.
#[inline]
fn unwrap_arg(principal: f64, angle: f64) -> f64 {
    principal + TAU * ((angle - principal) / TAU).round()
}

/// Fractional progress of `theta` through the trailing overlap band.
///
/// Zero everywhere up to 2π, then rising linearly toward 1 at the end of the
/// band, where the next sheet takes over.
#[inline]
fn sheet_transition(theta: f64, band: f64) -> f64 {
    if band <= 0.0 {
        return 0.0;
    }
    ((theta - TAU) / band).clamp(0.0, 1.0)
}

/// Generate the surface samples for `params.sheets()` sheets.
///
/// For sheet `k`, local angle `theta` runs over
/// `[-overlap·2π, (1 + overlap)·2π)`; the sample sits at angle
/// `theta + k·2π`. Height is ln|z| and `arg` is the principal argument lifted
/// onto the same branch as that angle, so it grows monotonically across
/// sheets. Samples where the logarithm is undefined (the origin, reachable
/// only with `r_min = 0`) are left out.
pub fn generate_riemann_surface(params: &SurfaceParams) -> Vec<SurfacePoint> {
    let sheets = params.sheets();
    let radial = params.radial_resolution();
    let angular = params.angular_resolution();
    let (r_min, r_max) = (params.r_min(), params.r_max());

    let band = params.overlap_band();
    let start_theta = -band;
    let end_theta = TAU + band;

    let mut points = Vec::with_capacity(sheets as usize * params.points_per_sheet());

    for sheet in 0..sheets {
        let sheet_offset = TAU * sheet as f64;

        for r in 0..radial {
            let radius = r_min + (r_max - r_min) * (r as f64 / radial as f64);

            for t in 0..angular {
                let theta = start_theta + (end_theta - start_theta) * (t as f64 / angular as f64);
                let angle = theta + sheet_offset;

                let (sin, cos) = angle.sin_cos();
                let x = radius * cos;
                let y = radius * sin;

                let Some(log_z) = ln_principal(x, y) else {
                    continue;
                };

                points.push(SurfacePoint {
                    x,
                    y,
                    z: log_z.re(),
                    arg: unwrap_arg(log_z.im(), angle),
                    sheet: sheet as f64 + sheet_transition(theta, band),
                    radius,
                });
            }
        }
    }

    log::debug!(
        "Generated {} surface points over {} sheet(s) ({}x{} per sheet)",
        points.len(),
        sheets,
        radial,
        angular
    );
    points
}
