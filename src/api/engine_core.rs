use crate::core::{ColorName, NavigationState, SectionGrid};
use crate::interaction::PaintState;

use super::refresh_scheduler::RefreshThrottle;

/// Internal engine state used by the public facade (`CanvasEngine`).
pub(super) struct EngineCore {
    pub(super) nav: NavigationState,
    pub(super) grid: SectionGrid,
    pub(super) paint: PaintState,
    pub(super) throttle: RefreshThrottle,
    pub(super) runtime: RuntimeState,
}

/// Runtime odds and ends grouped separately from navigation/paint state.
pub(super) struct RuntimeState {
    pub(super) palette: Vec<ColorName>,
    pub(super) last_error: Option<String>,
    pub(super) view_size_px: f64,
}
