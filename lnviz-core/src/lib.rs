pub mod color;
pub mod complex_value;
pub mod compute_data;
pub mod config;
pub mod error;
pub mod points;
pub mod view_state;

pub use color::Rgba;
pub use complex_value::{ln_principal, principal_arg, ComplexValue};
pub use compute_data::{Component, GridSample, ValueRange};
pub use config::{
    get_view_config, GridParams, HeatmapConfig, ProjectionConfig, SurfaceConfig, SurfaceParams,
    ViewConfig, DEFAULT_PROJECTION, HEATMAP_CONFIG, MAX_GRID_RESOLUTION, MAX_SURFACE_RESOLUTION,
    SURFACE_CONFIG,
};
pub use error::ConfigError;
pub use points::{ProjectedPoint, SurfacePoint};
pub use view_state::ViewState;
