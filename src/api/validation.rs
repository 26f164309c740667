use crate::error::{CanvasError, CanvasResult};

use super::CanvasEngineConfig;

pub(super) fn validate_engine_config(config: CanvasEngineConfig) -> CanvasResult<()> {
    if !config.view_size_px.is_finite() || config.view_size_px <= 0.0 {
        return Err(CanvasError::InvalidData(
            "view size must be finite and positive".to_owned(),
        ));
    }
    if config.refresh_threshold_ms == 0 {
        return Err(CanvasError::InvalidData(
            "refresh threshold must be nonzero".to_owned(),
        ));
    }
    Ok(())
}
