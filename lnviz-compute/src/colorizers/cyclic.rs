//! Phase-based HSL coloring for the Riemann surface.

use super::color_space::hsl_to_rgb;
use super::Colorizer;
use lnviz_core::{ProjectedPoint, Rgba};
use std::f64::consts::TAU;

/// Lightness never leaves this band, so deep sheets stay visible.
pub const MIN_LIGHTNESS: f64 = 10.0;
pub const MAX_LIGHTNESS: f64 = 90.0;

/// Opacity of surface markers (0.8).
pub const SURFACE_ALPHA: u8 = 204;

/// HSL components (hue in degrees, saturation and lightness in percent) for
/// a surface sample.
///
/// Hue is the phase as a fraction of a full turn, so the same phase on
/// different sheets shares a hue. Saturation rises mildly with radius;
/// lightness falls with both sheet index and radius.
pub fn phase_hsl(sheet: f64, arg: f64, radius: f64) -> (f64, f64, f64) {
    let hue = (arg / TAU).rem_euclid(1.0) * 360.0;
    let saturation = (70.0 + radius * 10.0).clamp(0.0, 100.0);
    let lightness = (60.0 - sheet * 8.0 - radius * 10.0).clamp(MIN_LIGHTNESS, MAX_LIGHTNESS);
    (hue, saturation, lightness)
}

/// Opaque color for a surface sample.
pub fn color_for_phase(sheet: f64, arg: f64, radius: f64) -> Rgba {
    let (h, s, l) = phase_hsl(sheet, arg, radius);
    Rgba::from_rgb(hsl_to_rgb(h, s / 100.0, l / 100.0), 255)
}

/// Surface colorizer; needs no whole-dataset context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CyclicColorizer {
    pub alpha: u8,
}

impl Default for CyclicColorizer {
    fn default() -> Self {
        Self {
            alpha: SURFACE_ALPHA,
        }
    }
}

impl Colorizer for CyclicColorizer {
    type Input = ProjectedPoint;
    type Context = ();

    fn colorize(&self, data: &ProjectedPoint, _context: &()) -> Rgba {
        color_for_phase(data.sheet, data.arg, data.radius).with_alpha(self.alpha)
    }
}
