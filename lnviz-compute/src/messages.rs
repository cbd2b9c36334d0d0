use crate::frame::{HeatmapFrame, SurfaceFrame};
use lnviz_core::ViewState;
use serde::{Deserialize, Serialize};

/// Requests sent from the presentation layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum MainToCompute {
    /// Sample and color both heatmaps.
    Heatmap { resolution: u32, range: f64 },

    /// Both heatmaps at the registered default resolution and range.
    DefaultHeatmap,

    /// Build the Riemann surface for the given rotation and sheet count.
    Surface { view: ViewState },
}

/// Responses sent back to the presentation layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ComputeToMain {
    Heatmap { frame: HeatmapFrame },

    Surface { frame: SurfaceFrame },

    /// The request could not be parsed or its parameters were invalid.
    Error { error: String },
}
