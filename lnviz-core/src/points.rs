use serde::{Deserialize, Serialize};

/// A sample of the logarithm's Riemann surface.
///
/// All sheets share the same `(x, y)` footprint; sheets are told apart only by
/// `arg`, `sheet` and the colors derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
    /// Height, ln|z|.
    pub z: f64,
    /// Unwrapped phase: principal argument plus a multiple of 2π.
    pub arg: f64,
    /// Fractional sheet index in [0, sheet count).
    pub sheet: f64,
    /// |z| of the sample.
    pub radius: f64,
}

impl SurfacePoint {
    /// Rotate the footprint about the z-axis by `angle` radians.
    ///
    /// Height, phase, sheet and radius are carried through unchanged.
    pub fn rotated(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
            ..*self
        }
    }
}

/// A surface point after rotation and perspective projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    /// Screen-space x.
    pub x: f64,
    /// Screen-space y.
    pub y: f64,
    /// Scaled height before projection. Only used for draw ordering.
    pub depth: f64,
    pub arg: f64,
    pub sheet: f64,
    pub radius: f64,
}
