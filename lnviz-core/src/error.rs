//! Parameter validation errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("sheet count {got} outside [{min}, {max}]")]
    SheetCount { got: u32, min: u32, max: u32 },

    #[error("{name} resolution {got} outside [1, {max}]")]
    Resolution {
        name: &'static str,
        got: u32,
        max: u32,
    },

    #[error("radius bounds [{r_min}, {r_max}] must be finite with 0 <= r_min < r_max")]
    RadiusBounds { r_min: f64, r_max: f64 },

    #[error("sheet overlap {0} outside [0, 0.5]")]
    Overlap(f64),

    #[error("grid range {0} must be finite and positive")]
    Range(f64),
}
