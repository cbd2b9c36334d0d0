pub mod bindings;
pub mod colorizers;
pub mod error;
pub mod frame;
pub mod messages;
pub mod projector;
pub mod riemann;
pub mod sampler;

pub use colorizers::{
    color_for_phase, color_for_scalar, Colorizer, CyclicColorizer, DivergingColorizer,
};
pub use error::BindingError;
pub use frame::{DrawablePoint, HeatmapFrame, HeatmapImage, SurfaceFrame};
pub use messages::{ComputeToMain, MainToCompute};
pub use projector::{project_and_sort, project_point, sort_by_depth};
pub use riemann::generate_riemann_surface;
pub use sampler::{sample_complex_log_grid, sample_grid, ComplexLogGrid};

// Re-export core types for convenience
pub use lnviz_core::*;
