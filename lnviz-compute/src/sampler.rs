//! Dense sampling of ln(z) over a square grid centered on the origin.

use lnviz_core::{ln_principal, Component, GridSample, GridParams, ValueRange};
use serde::{Deserialize, Serialize};

/// N×N matrix of logarithm samples, stored row-major with row 0 at the most
/// negative imaginary value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplexLogGrid {
    resolution: u32,
    range: f64,
    samples: Vec<GridSample>,
}

impl ComplexLogGrid {
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    /// Width of one cell in the complex plane.
    pub fn step(&self) -> f64 {
        self.range / self.resolution as f64
    }

    /// Complex coordinate of cell `(x, y)`.
    pub fn coordinate(&self, x: u32, y: u32) -> (f64, f64) {
        cell_coordinate(x, y, self.resolution, self.range)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&GridSample> {
        if x >= self.resolution || y >= self.resolution {
            return None;
        }
        self.samples
            .get(y as usize * self.resolution as usize + x as usize)
    }

    pub fn samples(&self) -> &[GridSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Rows in display order: highest imaginary value first, so the
    /// imaginary axis points up on screen.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[GridSample]> + '_ {
        let width = self.resolution.max(1) as usize;
        self.samples.chunks(width).rev()
    }

    /// Range of one component over all defined cells.
    pub fn component_range(&self, component: Component) -> Option<ValueRange> {
        ValueRange::scan(self.samples.iter().map(|s| s.component(component)))
    }

    /// Number of cells with no logarithm.
    pub fn undefined_count(&self) -> usize {
        self.samples.iter().filter(|s| !s.is_defined()).count()
    }
}

/// Number of cells in an N×N grid, or `None` if it overflows `usize`
/// (resolutions above 65535 on 32-bit targets).
fn cell_count(resolution: u32) -> Option<usize> {
    let n = usize::try_from(resolution).ok()?;
    n.checked_mul(n)
}

#[inline]
fn cell_coordinate(x: u32, y: u32, resolution: u32, range: f64) -> (f64, f64) {
    let half = resolution as f64 / 2.0;
    let step = range / resolution as f64;
    ((x as f64 - half) * step, (y as f64 - half) * step)
}

/// Evaluate ln(z) on an N×N grid spanning `range` on both axes.
///
/// Cell `(i, j)` maps to `((i − N/2)·R/N, (j − N/2)·R/N)`. Cells where the
/// logarithm is undefined hold a sentinel sample instead of NaN or infinity.
/// A zero resolution, or one whose cell count overflows `usize`, yields an
/// empty grid; a non-finite range yields a grid of sentinels. Callers going
/// through [`sample_grid`] are already bounded by `MAX_GRID_RESOLUTION`.
pub fn sample_complex_log_grid(resolution: u32, range: f64) -> ComplexLogGrid {
    let Some(capacity) = cell_count(resolution) else {
        log::warn!("Grid resolution {} exceeds addressable memory", resolution);
        return ComplexLogGrid {
            resolution: 0,
            range,
            samples: Vec::new(),
        };
    };
    let mut samples = Vec::with_capacity(capacity);

    for y in 0..resolution {
        for x in 0..resolution {
            let (re, im) = cell_coordinate(x, y, resolution, range);
            samples.push(GridSample::new(x, y, ln_principal(re, im)));
        }
    }

    let grid = ComplexLogGrid {
        resolution,
        range,
        samples,
    };
    log::debug!(
        "Sampled ln(z) grid {}x{} over range {} ({} undefined cells)",
        resolution,
        resolution,
        range,
        grid.undefined_count()
    );
    grid
}

/// Sample using validated parameters.
pub fn sample_grid(params: &GridParams) -> ComplexLogGrid {
    sample_complex_log_grid(params.resolution, params.range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn grid_has_n_squared_cells() {
        let grid = sample_complex_log_grid(10, 4.0);
        assert_eq!(grid.len(), 100);
        assert_eq!(grid.rows_top_down().count(), 10);
    }

    #[test]
    fn cell_count_is_checked() {
        assert_eq!(cell_count(0), Some(0));
        assert_eq!(cell_count(100), Some(10_000));
        assert_eq!(
            cell_count(u32::MAX),
            (u32::MAX as usize).checked_mul(u32::MAX as usize)
        );
        #[cfg(target_pointer_width = "32")]
        assert_eq!(cell_count(65_536), None);
    }

    #[test]
    fn center_cell_is_undefined() {
        let grid = sample_complex_log_grid(100, 4.0);
        let center = grid.get(50, 50).unwrap();
        assert_eq!(grid.coordinate(50, 50), (0.0, 0.0));
        assert!(center.re.is_none());
        assert!(center.im.is_none());
        assert_eq!(grid.undefined_count(), 1);
    }

    #[test]
    fn cell_mapping_matches_formula() {
        let grid = sample_complex_log_grid(100, 4.0);
        let (re, im) = grid.coordinate(75, 25);
        assert!((re - 1.0).abs() < 1e-12);
        assert!((im + 1.0).abs() < 1e-12);

        let sample = grid.get(75, 25).unwrap();
        assert!((sample.re.unwrap() - 2.0_f64.sqrt().ln()).abs() < 1e-12);
        assert!((sample.im.unwrap() + PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_bounds_get_is_none() {
        let grid = sample_complex_log_grid(4, 4.0);
        assert!(grid.get(4, 0).is_none());
        assert!(grid.get(0, 4).is_none());
    }

    #[test]
    fn zero_resolution_is_empty() {
        let grid = sample_complex_log_grid(0, 4.0);
        assert!(grid.is_empty());
        assert!(grid.component_range(Component::Real).is_none());
    }

    #[test]
    fn non_finite_range_yields_sentinels() {
        let grid = sample_complex_log_grid(4, f64::NAN);
        assert_eq!(grid.undefined_count(), 16);
    }

    #[test]
    fn rows_top_down_starts_at_highest_imaginary() {
        let grid = sample_complex_log_grid(4, 4.0);
        let first_row = grid.rows_top_down().next().unwrap();
        assert!(first_row.iter().all(|s| s.y == 3));
        let last_row = grid.rows_top_down().last().unwrap();
        assert!(last_row.iter().all(|s| s.y == 0));
    }

    #[test]
    fn imaginary_range_spans_principal_interval() {
        let grid = sample_complex_log_grid(100, 4.0);
        let range = grid.component_range(Component::Imaginary).unwrap();
        assert!(range.min > -PI && range.max <= PI);
        // The negative real axis is sampled, so +π itself appears.
        assert_eq!(range.max, PI);
    }
}
