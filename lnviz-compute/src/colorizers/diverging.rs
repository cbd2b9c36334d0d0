//! Blue-to-red diverging scale for the heatmap.

use super::Colorizer;
use lnviz_core::{Component, GridSample, Rgba, ValueRange};

/// Normalize `value` into [0, 1] against `[min, max]`.
///
/// A zero-width or non-finite range maps every value to the midpoint.
#[inline]
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if !span.is_finite() || span == 0.0 {
        return 0.5;
    }
    ((value - min) / span).clamp(0.0, 1.0)
}

/// Color a scalar on the diverging scale.
///
/// Blue dominates the lower half and red the upper half; green is always 0.
/// `None` and non-finite values map to [`Rgba::UNDEFINED`] (black), which no
/// defined value produces: blue is non-zero below the top of the range and
/// red is saturated at the top.
pub fn color_for_scalar(value: Option<f64>, min: f64, max: f64) -> Rgba {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return Rgba::UNDEFINED;
    };

    let t = normalize(value, min, max);
    let r = (255.0 * (2.0 * t - 1.0).clamp(0.0, 1.0)) as u8;
    let b = (255.0 * (2.0 * (1.0 - t)).clamp(0.0, 1.0)) as u8;
    Rgba::opaque(r, 0, b)
}

/// Heatmap colorizer for one component of ln(z).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DivergingColorizer {
    pub component: Component,
}

impl DivergingColorizer {
    pub fn new(component: Component) -> Self {
        Self { component }
    }
}

impl Colorizer for DivergingColorizer {
    type Input = GridSample;
    type Context = ValueRange;

    fn preprocess(&self, data: &[GridSample]) -> ValueRange {
        ValueRange::scan(data.iter().map(|s| s.component(self.component))).unwrap_or_default()
    }

    fn colorize(&self, data: &GridSample, context: &ValueRange) -> Rgba {
        color_for_scalar(data.component(self.component), context.min, context.max)
    }
}
