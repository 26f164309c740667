use serde::{Deserialize, Serialize};

use crate::core::ColorName;
use crate::error::{CanvasError, CanvasResult};

use super::refresh_scheduler::DEFAULT_REFRESH_THRESHOLD_MS;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load canvas
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasEngineConfig {
    /// Side length of the square canvas view, in the host's view units.
    pub view_size_px: f64,
    #[serde(default = "default_selected_color")]
    pub selected_color: ColorName,
    #[serde(default)]
    pub drawing_mode: bool,
    #[serde(default = "default_refresh_threshold_ms")]
    pub refresh_threshold_ms: u64,
}

impl CanvasEngineConfig {
    /// Creates a config with default color, drawing mode, and throttle.
    #[must_use]
    pub fn new(view_size_px: f64) -> Self {
        Self {
            view_size_px,
            selected_color: default_selected_color(),
            drawing_mode: false,
            refresh_threshold_ms: default_refresh_threshold_ms(),
        }
    }

    /// Sets the initially selected paint color.
    #[must_use]
    pub fn with_selected_color(mut self, color: ColorName) -> Self {
        self.selected_color = color;
        self
    }

    /// Enables pixel painting at the two levels above the terminal one.
    #[must_use]
    pub fn with_drawing_mode(mut self, enabled: bool) -> Self {
        self.drawing_mode = enabled;
        self
    }

    /// Sets the realtime refresh throttle window.
    #[must_use]
    pub fn with_refresh_threshold_ms(mut self, threshold_ms: u64) -> Self {
        self.refresh_threshold_ms = threshold_ms;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> CanvasResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| CanvasError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> CanvasResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| CanvasError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_selected_color() -> ColorName {
    ColorName::Red
}

fn default_refresh_threshold_ms() -> u64 {
    DEFAULT_REFRESH_THRESHOLD_MS
}
