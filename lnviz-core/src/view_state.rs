use crate::SurfaceConfig;
use serde::{Deserialize, Serialize};

/// User-controlled inputs of the Riemann surface view.
///
/// The presentation layer mutates this through the control methods and
/// recomputes the whole frame from it; nothing is updated incrementally.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Rotation about the z-axis, in radians.
    pub rotation: f64,
    /// Number of sheets to generate.
    pub sheets: u32,
}

impl ViewState {
    pub fn new(rotation: f64, sheets: u32) -> Self {
        Self { rotation, sheets }
    }

    /// Initial state for a surface view.
    pub fn for_config(config: &SurfaceConfig) -> Self {
        Self {
            rotation: 0.0,
            sheets: config.default_sheets,
        }
    }

    pub fn rotate_left(&mut self, config: &SurfaceConfig) {
        self.rotation -= config.rotation_step;
    }

    pub fn rotate_right(&mut self, config: &SurfaceConfig) {
        self.rotation += config.rotation_step;
    }

    /// Add a sheet, saturating at the configured maximum.
    pub fn add_sheet(&mut self, config: &SurfaceConfig) {
        self.sheets = config.clamp_sheets(self.sheets.saturating_add(1));
    }

    /// Remove a sheet, saturating at the configured minimum.
    pub fn remove_sheet(&mut self, config: &SurfaceConfig) {
        self.sheets = config.clamp_sheets(self.sheets.saturating_sub(1));
    }

    /// Copy with the sheet count forced into the configured range and a
    /// finite rotation.
    pub fn sanitized(&self, config: &SurfaceConfig) -> Self {
        let sheets = config.clamp_sheets(self.sheets);
        if sheets != self.sheets {
            log::warn!(
                "Sheet count {} outside [{}, {}], using {}",
                self.sheets,
                config.min_sheets,
                config.max_sheets,
                sheets
            );
        }
        let rotation = if self.rotation.is_finite() {
            self.rotation
        } else {
            log::warn!("Non-finite rotation {}, resetting to 0", self.rotation);
            0.0
        };
        Self { rotation, sheets }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::for_config(&crate::SURFACE_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SURFACE_CONFIG;
    use std::f64::consts::PI;

    #[test]
    fn default_state_matches_config() {
        let state = ViewState::default();
        assert_eq!(state.rotation, 0.0);
        assert_eq!(state.sheets, 3);
    }

    #[test]
    fn rotate_steps_by_fifteen_degrees() {
        let mut state = ViewState::default();
        state.rotate_right(&SURFACE_CONFIG);
        assert!((state.rotation - PI / 24.0).abs() < 1e-15);
        state.rotate_left(&SURFACE_CONFIG);
        state.rotate_left(&SURFACE_CONFIG);
        assert!((state.rotation + PI / 24.0).abs() < 1e-15);
    }

    #[test]
    fn add_sheet_saturates_at_five() {
        let mut state = ViewState::new(0.0, 4);
        state.add_sheet(&SURFACE_CONFIG);
        assert_eq!(state.sheets, 5);
        state.add_sheet(&SURFACE_CONFIG);
        assert_eq!(state.sheets, 5);
    }

    #[test]
    fn remove_sheet_saturates_at_one() {
        let mut state = ViewState::new(0.0, 2);
        state.remove_sheet(&SURFACE_CONFIG);
        assert_eq!(state.sheets, 1);
        state.remove_sheet(&SURFACE_CONFIG);
        assert_eq!(state.sheets, 1);
    }

    #[test]
    fn sanitized_clamps_sheets_and_rotation() {
        let state = ViewState::new(f64::NAN, 42).sanitized(&SURFACE_CONFIG);
        assert_eq!(state, ViewState::new(0.0, 5));
    }

    #[test]
    fn view_state_json_roundtrip() {
        let state = ViewState::new(0.5, 2);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"rotation":0.5,"sheets":2}"#);
        let back: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
