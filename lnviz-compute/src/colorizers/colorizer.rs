//! Colorizer trait for mapping computed samples to colors.

use lnviz_core::Rgba;

/// A colorizer algorithm with an optional whole-dataset preprocessing stage.
///
/// # Pipeline Flow
/// 1. `preprocess` - scan all samples, build context (e.g. the value range)
/// 2. `colorize` - map each sample to a color using that context
pub trait Colorizer {
    /// Sample type this colorizer understands.
    type Input;

    /// Data passed from preprocess to colorize.
    type Context: Default;

    /// Analyze all samples, build context.
    /// Default: no-op, returns `Default::default()`.
    fn preprocess(&self, _data: &[Self::Input]) -> Self::Context {
        Self::Context::default()
    }

    /// Map a single sample to a color.
    fn colorize(&self, data: &Self::Input, context: &Self::Context) -> Rgba;

    /// Run the full colorization pipeline: preprocess → colorize.
    fn run_pipeline(&self, data: &[Self::Input]) -> Vec<Rgba> {
        let ctx = self.preprocess(data);
        data.iter().map(|d| self.colorize(d, &ctx)).collect()
    }
}
