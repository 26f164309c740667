use serde::{Deserialize, Serialize};

use crate::core::{ColorName, FetchParams, HistoryEntry, Level, Pixel};
use crate::error::{CanvasError, CanvasResult};
use crate::service::CanvasService;

use super::CanvasEngine;

/// Serializable view of the engine's externally meaningful state.
///
/// Intended for host-side debugging and session persistence; section data is
/// deliberately excluded because it is replaced wholesale on the next fetch
/// anyway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub level: Level,
    pub fetch_params: FetchParams,
    pub history: Vec<HistoryEntry>,
    pub selected_color: ColorName,
    pub drawing_mode: bool,
    pub overlay: Vec<Pixel>,
    pub pending_refresh_at: Option<u64>,
}

impl<S: CanvasService> CanvasEngine<S> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            level: self.core.nav.level(),
            fetch_params: self.core.nav.fetch_params(),
            history: self.core.nav.history().to_vec(),
            selected_color: self.core.paint.selected_color(),
            drawing_mode: self.core.paint.drawing_mode(),
            overlay: self
                .core
                .paint
                .overlay()
                .iter()
                .map(|(&pixel, &color)| Pixel { pixel, color })
                .collect(),
            pending_refresh_at: self.core.throttle.pending_at(),
        }
    }

    /// Serializes the snapshot to pretty JSON.
    pub fn snapshot_json_pretty(&self) -> CanvasResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| CanvasError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
