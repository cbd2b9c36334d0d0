#![cfg(target_arch = "wasm32")]

use lnviz_compute::bindings::{
    default_heatmap_frame_json, handle_message, heatmap_frame_json, init_compute,
    surface_frame_json,
};
use lnviz_compute::{ComputeToMain, SurfaceFrame};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn heatmap_frame_json_runs_in_browser() {
    let json = heatmap_frame_json(16, 4.0).unwrap();
    assert!(json.contains("\"pixels\""));
}

#[wasm_bindgen_test]
fn surface_frame_json_runs_in_browser() {
    let json = surface_frame_json(r#"{"rotation":0.0,"sheets":1}"#).unwrap();
    let frame: SurfaceFrame = serde_json::from_str(&json).unwrap();
    assert_eq!(frame.points.len(), 120 * 120);
}

#[wasm_bindgen_test]
fn invalid_heatmap_range_is_a_js_error() {
    assert!(heatmap_frame_json(16, -1.0).is_err());
}

#[wasm_bindgen_test]
fn handle_message_reports_errors_as_messages() {
    let json = handle_message(r#"{"type":"Surface"}"#);
    let response: ComputeToMain = serde_json::from_str(&json).unwrap();
    assert!(matches!(response, ComputeToMain::Error { .. }));
}

#[wasm_bindgen_test]
fn init_compute_can_run_twice_before_default_heatmap() {
    init_compute();
    init_compute();
    let json = default_heatmap_frame_json().unwrap();
    assert!(json.contains("\"Real Part\""));
}
