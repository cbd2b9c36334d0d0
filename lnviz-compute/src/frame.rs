//! Whole-frame pipelines feeding the presentation layer.
//!
//! Each frame is recomputed from scratch whenever its inputs change.

use crate::colorizers::{Colorizer, CyclicColorizer, DivergingColorizer};
use crate::projector::project_and_sort;
use crate::riemann::generate_riemann_surface;
use crate::sampler::{sample_grid, ComplexLogGrid};
use lnviz_core::{
    Component, ConfigError, GridParams, HeatmapConfig, ProjectionConfig, Rgba, SurfaceConfig,
    ValueRange, ViewState,
};
use serde::{Deserialize, Serialize};

/// Radius of one surface marker in view-box units.
pub const MARKER_RADIUS: f64 = 0.8;

/// SVG view box `[min_x, min_y, width, height]` the surface is drawn into.
pub const SURFACE_VIEW_BOX: [f64; 4] = [-200.0, -200.0, 400.0, 400.0];

/// One colored heatmap, ready to be copied into canvas `ImageData`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeatmapImage {
    pub component: Component,
    /// Caption shown above the image.
    pub title: String,
    /// Range used for normalization; `None` if no cell was defined.
    pub value_range: Option<ValueRange>,
    /// Side length in cells.
    pub size: u32,
    /// Row-major RGBA bytes, top row (highest imaginary value) first.
    pub pixels: Vec<u8>,
}

impl HeatmapImage {
    pub fn from_grid(grid: &ComplexLogGrid, component: Component) -> Self {
        let colorizer = DivergingColorizer::new(component);
        let value_range = grid.component_range(component);
        let range = value_range.unwrap_or_default();

        let mut pixels = Vec::with_capacity(grid.len() * 4);
        for row in grid.rows_top_down() {
            for sample in row {
                pixels.extend_from_slice(&colorizer.colorize(sample, &range).to_array());
            }
        }

        Self {
            component,
            title: component.display_name().to_string(),
            value_range,
            size: grid.resolution(),
            pixels,
        }
    }

    /// Color of the cell at display position `(column, row)`.
    pub fn pixel(&self, column: u32, row: u32) -> Option<Rgba> {
        if column >= self.size || row >= self.size {
            return None;
        }
        let offset = (row as usize * self.size as usize + column as usize) * 4;
        let px = self.pixels.get(offset..offset + 4)?;
        Some(Rgba::new(px[0], px[1], px[2], px[3]))
    }
}

/// Real and imaginary heatmaps of ln(z).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeatmapFrame {
    pub params: GridParams,
    pub real: HeatmapImage,
    pub imaginary: HeatmapImage,
}

impl HeatmapFrame {
    pub fn compute(params: &GridParams) -> Self {
        let grid = sample_grid(params);
        let frame = Self {
            params: *params,
            real: HeatmapImage::from_grid(&grid, Component::Real),
            imaginary: HeatmapImage::from_grid(&grid, Component::Imaginary),
        };
        log::debug!(
            "Heatmap frame {}x{}: real {:?}, imaginary {:?}",
            params.resolution,
            params.resolution,
            frame.real.value_range,
            frame.imaginary.value_range
        );
        frame
    }

    /// Frame for a registered heatmap view, e.g. `HEATMAP_CONFIG`.
    pub fn from_config(config: &HeatmapConfig) -> Result<Self, ConfigError> {
        Ok(Self::compute(&config.params()?))
    }

    pub fn image(&self, component: Component) -> &HeatmapImage {
        match component {
            Component::Real => &self.real,
            Component::Imaginary => &self.imaginary,
        }
    }
}

/// A colored, projected surface sample in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawablePoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
    pub color: Rgba,
}

/// Riemann surface ready to be painted back to front.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceFrame {
    /// The (sanitized) state this frame was computed from.
    pub view: ViewState,
    pub marker_radius: f64,
    pub view_box: [f64; 4],
    /// Sorted by descending depth.
    pub points: Vec<DrawablePoint>,
}

impl SurfaceFrame {
    /// Generate, rotate, project, depth-sort and color the surface.
    pub fn compute(
        view: &ViewState,
        config: &SurfaceConfig,
        projection: &ProjectionConfig,
    ) -> Result<Self, ConfigError> {
        let view = view.sanitized(config);
        let params = config.params(view.sheets)?;

        let surface = generate_riemann_surface(&params);
        let projected = project_and_sort(&surface, view.rotation, projection);

        let colorizer = CyclicColorizer::default();
        let colors = colorizer.run_pipeline(&projected);

        let points: Vec<DrawablePoint> = projected
            .iter()
            .zip(colors)
            .map(|(p, color)| DrawablePoint {
                x: p.x,
                y: p.y,
                depth: p.depth,
                color,
            })
            .collect();

        log::debug!(
            "Surface frame: {} points, {} sheet(s), rotation {:.4}",
            points.len(),
            view.sheets,
            view.rotation
        );

        Ok(Self {
            view,
            marker_radius: MARKER_RADIUS,
            view_box: SURFACE_VIEW_BOX,
            points,
        })
    }
}
