//! View configuration and parameter validation.
//!
//! This module contains the canonical parameters for the heatmap and the
//! Riemann surface views, shared by the compute pipelines and the bindings.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Largest per-dimension resolution the surface generator accepts.
pub const MAX_SURFACE_RESOLUTION: u32 = 120;

/// Largest heatmap resolution (cells per side).
pub const MAX_GRID_RESOLUTION: u32 = 1024;

/// Heatmap view configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatmapConfig {
    /// Unique identifier
    pub id: &'static str,
    /// Human-readable name for UI display
    pub display_name: &'static str,
    /// Cells per side of the square grid
    pub resolution: u32,
    /// Full width of the sampled domain; it spans [-range/2, range/2) on both axes
    pub range: f64,
}

impl HeatmapConfig {
    /// Validate a resolution/range pair for grid sampling.
    pub fn grid_params(resolution: u32, range: f64) -> Result<GridParams, ConfigError> {
        if resolution == 0 || resolution > MAX_GRID_RESOLUTION {
            return Err(ConfigError::Resolution {
                name: "grid",
                got: resolution,
                max: MAX_GRID_RESOLUTION,
            });
        }
        if !range.is_finite() || range <= 0.0 {
            return Err(ConfigError::Range(range));
        }
        Ok(GridParams { resolution, range })
    }

    pub fn params(&self) -> Result<GridParams, ConfigError> {
        Self::grid_params(self.resolution, self.range)
    }
}

/// Validated heatmap sampling parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    pub resolution: u32,
    pub range: f64,
}

/// Riemann surface view configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceConfig {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Sheets shown on first render
    pub default_sheets: u32,
    pub min_sheets: u32,
    pub max_sheets: u32,
    /// Samples along both the radial and the angular direction
    pub resolution: u32,
    pub r_min: f64,
    pub r_max: f64,
    /// Fraction of a full turn each sheet extends past [0, 2π) on both ends
    pub sheet_overlap: f64,
    /// Rotation applied by one rotate-left/right step, in radians
    pub rotation_step: f64,
}

impl SurfaceConfig {
    /// Build validated generator parameters for `sheets` sheets.
    pub fn params(&self, sheets: u32) -> Result<SurfaceParams, ConfigError> {
        SurfaceParams::new(
            sheets,
            self.resolution,
            self.resolution,
            self.r_min,
            self.r_max,
        )?
        .with_overlap(self.sheet_overlap)
    }

    /// Clamp a requested sheet count into this view's allowed range.
    pub fn clamp_sheets(&self, sheets: u32) -> u32 {
        sheets.clamp(self.min_sheets, self.max_sheets)
    }
}

/// Validated inputs for Riemann surface generation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceParams {
    sheets: u32,
    radial_resolution: u32,
    angular_resolution: u32,
    r_min: f64,
    r_max: f64,
    overlap: f64,
}

impl SurfaceParams {
    pub const MIN_SHEETS: u32 = 1;
    pub const MAX_SHEETS: u32 = 5;
    pub const DEFAULT_OVERLAP: f64 = 0.1;

    pub fn new(
        sheets: u32,
        radial_resolution: u32,
        angular_resolution: u32,
        r_min: f64,
        r_max: f64,
    ) -> Result<Self, ConfigError> {
        if !(Self::MIN_SHEETS..=Self::MAX_SHEETS).contains(&sheets) {
            return Err(ConfigError::SheetCount {
                got: sheets,
                min: Self::MIN_SHEETS,
                max: Self::MAX_SHEETS,
            });
        }
        for (name, got) in [
            ("radial", radial_resolution),
            ("angular", angular_resolution),
        ] {
            if got == 0 || got > MAX_SURFACE_RESOLUTION {
                return Err(ConfigError::Resolution {
                    name,
                    got,
                    max: MAX_SURFACE_RESOLUTION,
                });
            }
        }
        if !r_min.is_finite() || !r_max.is_finite() || r_min < 0.0 || r_min >= r_max {
            return Err(ConfigError::RadiusBounds { r_min, r_max });
        }

        Ok(Self {
            sheets,
            radial_resolution,
            angular_resolution,
            r_min,
            r_max,
            overlap: Self::DEFAULT_OVERLAP,
        })
    }

    /// Replace the sheet overlap fraction.
    pub fn with_overlap(self, overlap: f64) -> Result<Self, ConfigError> {
        if !overlap.is_finite() || !(0.0..=0.5).contains(&overlap) {
            return Err(ConfigError::Overlap(overlap));
        }
        Ok(Self { overlap, ..self })
    }

    /// Same parameters with a different sheet count.
    pub fn with_sheets(self, sheets: u32) -> Result<Self, ConfigError> {
        Self::new(
            sheets,
            self.radial_resolution,
            self.angular_resolution,
            self.r_min,
            self.r_max,
        )?
        .with_overlap(self.overlap)
    }

    pub fn sheets(&self) -> u32 {
        self.sheets
    }

    pub fn radial_resolution(&self) -> u32 {
        self.radial_resolution
    }

    pub fn angular_resolution(&self) -> u32 {
        self.angular_resolution
    }

    pub fn r_min(&self) -> f64 {
        self.r_min
    }

    pub fn r_max(&self) -> f64 {
        self.r_max
    }

    pub fn overlap(&self) -> f64 {
        self.overlap
    }

    /// Angular width of one overlap band, in radians.
    pub fn overlap_band(&self) -> f64 {
        self.overlap * 2.0 * PI
    }

    /// Number of samples on one sheet.
    pub fn points_per_sheet(&self) -> usize {
        self.radial_resolution as usize * self.angular_resolution as usize
    }
}

/// Perspective camera constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Uniform scale applied before projection
    pub scale: f64,
    /// Camera distance offset added to the denominator
    pub distance: f64,
    /// Perspective constant (focal length)
    pub perspective: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        DEFAULT_PROJECTION
    }
}

/// Heatmap of ln(z): 100×100 cells over [-2, 2)².
pub static HEATMAP_CONFIG: HeatmapConfig = HeatmapConfig {
    id: "heatmap",
    display_name: "Complex Natural Logarithm ln(z)",
    resolution: 100,
    range: 4.0,
};

/// Riemann surface of ln(z).
pub static SURFACE_CONFIG: SurfaceConfig = SurfaceConfig {
    id: "riemann_surface",
    display_name: "Continuous Riemann Surface of ln(z)",
    default_sheets: 3,
    min_sheets: SurfaceParams::MIN_SHEETS,
    max_sheets: SurfaceParams::MAX_SHEETS,
    resolution: MAX_SURFACE_RESOLUTION,
    r_min: 0.1,
    r_max: 2.0,
    sheet_overlap: SurfaceParams::DEFAULT_OVERLAP,
    rotation_step: PI / 24.0,
};

pub const DEFAULT_PROJECTION: ProjectionConfig = ProjectionConfig {
    scale: 100.0,
    distance: 4.0,
    perspective: 1000.0,
};

/// A registered view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewConfig {
    Heatmap(&'static HeatmapConfig),
    Surface(&'static SurfaceConfig),
}

impl ViewConfig {
    pub fn display_name(&self) -> &'static str {
        match self {
            ViewConfig::Heatmap(c) => c.display_name,
            ViewConfig::Surface(c) => c.display_name,
        }
    }
}

/// Look up a view configuration by ID.
pub fn get_view_config(id: &str) -> Option<ViewConfig> {
    match id {
        "heatmap" => Some(ViewConfig::Heatmap(&HEATMAP_CONFIG)),
        "riemann_surface" => Some(ViewConfig::Surface(&SURFACE_CONFIG)),
        _ => None,
    }
}
