// lnviz-core/src/compute_data.rs

use crate::ComplexValue;
use serde::{Deserialize, Serialize};

/// One cell of the heatmap grid.
///
/// `re`/`im` are `None` where the logarithm is undefined (the origin, or any
/// non-finite evaluation). Both parts are always defined or undefined together.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSample {
    /// Column index, along the real axis.
    pub x: u32,
    /// Row index, along the imaginary axis (0 = most negative).
    pub y: u32,
    pub re: Option<f64>,
    pub im: Option<f64>,
}

impl GridSample {
    /// Create a sample from an optional logarithm value.
    pub fn new(x: u32, y: u32, value: Option<ComplexValue>) -> Self {
        Self {
            x,
            y,
            re: value.map(|v| v.re()),
            im: value.map(|v| v.im()),
        }
    }

    /// The sentinel sample for a cell with no logarithm.
    pub fn undefined(x: u32, y: u32) -> Self {
        Self::new(x, y, None)
    }

    pub fn value(&self) -> Option<ComplexValue> {
        ComplexValue::new(self.re?, self.im?)
    }

    pub fn is_defined(&self) -> bool {
        self.re.is_some() && self.im.is_some()
    }

    /// Read one component of the sample.
    pub fn component(&self, component: Component) -> Option<f64> {
        match component {
            Component::Real => self.re,
            Component::Imaginary => self.im,
        }
    }
}

/// Which part of ln(z) a heatmap displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    /// ln|z|
    Real,
    /// arg(z)
    Imaginary,
}

impl Component {
    pub const ALL: [Component; 2] = [Component::Real, Component::Imaginary];

    pub fn display_name(&self) -> &'static str {
        match self {
            Component::Real => "Real Part",
            Component::Imaginary => "Imaginary Part",
        }
    }
}

/// Observed range of one component over a dataset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Fold a sequence of values into their range, skipping undefined and
    /// non-finite entries. Returns `None` if nothing was defined.
    pub fn scan<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        values
            .into_iter()
            .flatten()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Self>, v| match acc {
                None => Some(Self::new(v, v)),
                Some(r) => Some(Self::new(r.min.min(v), r.max.max(v))),
            })
    }

    /// `max - min` is zero or not a usable number.
    pub fn is_degenerate(&self) -> bool {
        let span = self.max - self.min;
        !span.is_finite() || span == 0.0
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { min: 0.0, max: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_from_value_keeps_both_parts() {
        let sample = GridSample::new(3, 4, ComplexValue::new(1.0, -0.5));
        assert_eq!(sample.re, Some(1.0));
        assert_eq!(sample.im, Some(-0.5));
        assert!(sample.is_defined());
        assert_eq!(sample.component(Component::Imaginary), Some(-0.5));
    }

    #[test]
    fn undefined_sample_has_no_parts() {
        let sample = GridSample::undefined(0, 0);
        assert!(!sample.is_defined());
        assert!(sample.value().is_none());
    }

    #[test]
    fn undefined_sample_serializes_as_null() {
        let json = serde_json::to_string(&GridSample::undefined(1, 2)).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2,"re":null,"im":null}"#);
    }

    #[test]
    fn scan_skips_undefined_values() {
        let range = ValueRange::scan([Some(2.0), None, Some(-1.0), Some(f64::NAN)]).unwrap();
        assert_eq!(range, ValueRange::new(-1.0, 2.0));
    }

    #[test]
    fn scan_of_nothing_is_none() {
        assert!(ValueRange::scan([None, None]).is_none());
    }

    #[test]
    fn degenerate_range_detection() {
        assert!(ValueRange::new(1.0, 1.0).is_degenerate());
        assert!(ValueRange::new(f64::NEG_INFINITY, 1.0).is_degenerate());
        assert!(!ValueRange::new(0.0, 1.0).is_degenerate());
    }
}
