use crate::error::BindingError;
use crate::frame::{HeatmapFrame, SurfaceFrame};
use crate::messages::{ComputeToMain, MainToCompute};
use lnviz_core::{
    get_view_config, HeatmapConfig, ViewState, DEFAULT_PROJECTION, HEATMAP_CONFIG,
    SURFACE_CONFIG,
};
use wasm_bindgen::prelude::*;

/// Module initialization - install panic hook and browser logging.
#[wasm_bindgen]
pub fn init_compute() {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    {
        _ = console_log::init_with_level(log::Level::Debug);
    }
}

/// Handle a JSON-encoded [`MainToCompute`] message.
///
/// Always returns a JSON-encoded [`ComputeToMain`]; failures are reported as
/// its `Error` variant rather than thrown.
#[wasm_bindgen]
pub fn handle_message(message_json: &str) -> String {
    let response = match serde_json::from_str::<MainToCompute>(message_json) {
        Ok(request) => process_request(request),
        Err(e) => {
            log::warn!("Rejected message: {}", e);
            ComputeToMain::Error {
                error: BindingError::from(e).to_string(),
            }
        }
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        log::error!("Failed to serialize response: {}", e);
        error_json(&format!("Serialize error: {}", e))
    })
}

/// `ComputeToMain::Error` as JSON, built without going through the response
/// serializer.
fn error_json(error: &str) -> String {
    serde_json::json!({ "type": "Error", "error": error }).to_string()
}

/// Heatmap frame as JSON.
#[wasm_bindgen]
pub fn heatmap_frame_json(resolution: u32, range: f64) -> Result<String, JsValue> {
    heatmap_json(resolution, range).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Heatmap frame for `HEATMAP_CONFIG` (100×100 cells over [-2, 2)²) as JSON.
#[wasm_bindgen]
pub fn default_heatmap_frame_json() -> Result<String, JsValue> {
    default_heatmap_json().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Surface frame as JSON, from a JSON-encoded [`ViewState`].
#[wasm_bindgen]
pub fn surface_frame_json(view_state_json: &str) -> Result<String, JsValue> {
    surface_json(view_state_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Title for a registered view ID (`heatmap` or `riemann_surface`).
#[wasm_bindgen]
pub fn view_title(id: &str) -> Option<String> {
    get_view_config(id).map(|config| config.display_name().to_string())
}

/// Dispatch a decoded request to the matching frame pipeline.
pub fn process_request(request: MainToCompute) -> ComputeToMain {
    match request {
        MainToCompute::Heatmap { resolution, range } => {
            match HeatmapConfig::grid_params(resolution, range) {
                Ok(params) => ComputeToMain::Heatmap {
                    frame: HeatmapFrame::compute(&params),
                },
                Err(e) => config_error(e.into()),
            }
        }
        MainToCompute::DefaultHeatmap => match HeatmapFrame::from_config(&HEATMAP_CONFIG) {
            Ok(frame) => ComputeToMain::Heatmap { frame },
            Err(e) => config_error(e.into()),
        },
        MainToCompute::Surface { view } => {
            match SurfaceFrame::compute(&view, &SURFACE_CONFIG, &DEFAULT_PROJECTION) {
                Ok(frame) => ComputeToMain::Surface { frame },
                Err(e) => config_error(e.into()),
            }
        }
    }
}

fn config_error(error: BindingError) -> ComputeToMain {
    log::warn!("{}", error);
    ComputeToMain::Error {
        error: error.to_string(),
    }
}

pub fn heatmap_json(resolution: u32, range: f64) -> Result<String, BindingError> {
    let params = HeatmapConfig::grid_params(resolution, range)?;
    Ok(serde_json::to_string(&HeatmapFrame::compute(&params))?)
}

pub fn default_heatmap_json() -> Result<String, BindingError> {
    let frame = HeatmapFrame::from_config(&HEATMAP_CONFIG)?;
    Ok(serde_json::to_string(&frame)?)
}

pub fn surface_json(view_state_json: &str) -> Result<String, BindingError> {
    let view: ViewState = serde_json::from_str(view_state_json)?;
    let frame = SurfaceFrame::compute(&view, &SURFACE_CONFIG, &DEFAULT_PROJECTION)?;
    Ok(serde_json::to_string(&frame)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_message_returns_heatmap_frame() {
        let json = handle_message(r#"{"type":"Heatmap","resolution":8,"range":4.0}"#);
        let response: ComputeToMain = serde_json::from_str(&json).unwrap();
        match response {
            ComputeToMain::Heatmap { frame } => {
                assert_eq!(frame.real.size, 8);
                assert_eq!(frame.real.pixels.len(), 8 * 8 * 4);
            }
            other => panic!("unexpected response {other:?}"),
        }
    }

    #[test]
    fn handle_message_serves_default_heatmap() {
        let json = handle_message(r#"{"type":"DefaultHeatmap"}"#);
        match serde_json::from_str::<ComputeToMain>(&json).unwrap() {
            ComputeToMain::Heatmap { frame } => {
                assert_eq!(frame.params, HEATMAP_CONFIG.params().unwrap());
                assert_eq!(frame.imaginary.size, 100);
                assert_eq!(frame.imaginary.title, "Imaginary Part");
            }
            other => panic!("unexpected response {other:?}"),
        }
    }

    #[test]
    fn default_heatmap_json_uses_registered_config() {
        let json = default_heatmap_json().unwrap();
        let frame: HeatmapFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(frame.real.size, HEATMAP_CONFIG.resolution);
        assert_eq!(frame.params.range, HEATMAP_CONFIG.range);
    }

    #[test]
    fn error_json_escapes_message_text() {
        let json = error_json(r#"bad "quote" and \ backslash"#);
        match serde_json::from_str::<ComputeToMain>(&json).unwrap() {
            ComputeToMain::Error { error } => {
                assert_eq!(error, r#"bad "quote" and \ backslash"#);
            }
            other => panic!("unexpected response {other:?}"),
        }
    }

    #[test]
    fn handle_message_reports_parse_errors() {
        let json = handle_message("not json");
        let response: ComputeToMain = serde_json::from_str(&json).unwrap();
        match response {
            ComputeToMain::Error { error } => assert!(error.starts_with("Parse error")),
            other => panic!("unexpected response {other:?}"),
        }
    }

    #[test]
    fn process_request_reports_invalid_range() {
        let response = process_request(MainToCompute::Heatmap {
            resolution: 10,
            range: -1.0,
        });
        assert!(matches!(response, ComputeToMain::Error { .. }));
    }

    #[test]
    fn surface_json_roundtrips_view_state() {
        let json = surface_json(r#"{"rotation":0.5,"sheets":1}"#).unwrap();
        let frame: SurfaceFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(frame.view, ViewState::new(0.5, 1));
        assert_eq!(frame.points.len(), 120 * 120);
    }

    #[test]
    fn view_title_covers_registered_views() {
        assert_eq!(
            view_title("riemann_surface").as_deref(),
            Some("Continuous Riemann Surface of ln(z)")
        );
        assert!(view_title("heatmap").is_some());
        assert!(view_title("unknown").is_none());
    }

    #[test]
    fn heatmap_json_rejects_zero_resolution() {
        assert!(matches!(
            heatmap_json(0, 4.0),
            Err(BindingError::Config(_))
        ));
    }
}
