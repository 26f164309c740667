use tracing::warn;

use crate::core::{
    ColorName, FetchParams, GlobalPixel, Level, LocalCoord, NavigationState, Section, SectionGrid,
    ZoomPath,
};
use crate::error::CanvasResult;
use crate::interaction::PaintState;
use crate::service::CanvasService;

use indexmap::IndexMap;

use super::engine_core::{EngineCore, RuntimeState};
use super::refresh_scheduler::RefreshThrottle;
use super::validation::validate_engine_config;
use super::CanvasEngineConfig;

/// Main orchestration facade consumed by host applications.
///
/// `CanvasEngine` coordinates the navigation state machine, the section
/// grid, paint gestures, and realtime refresh throttling against a
/// [`CanvasService`] transport. All calls are `&mut self`; the host's event
/// loop is the single state owner.
pub struct CanvasEngine<S: CanvasService> {
    pub(super) service: S,
    pub(super) core: EngineCore,
}

impl<S: CanvasService> CanvasEngine<S> {
    /// Builds an engine, loads the palette, and fetches the root view.
    ///
    /// A failed palette load or root fetch is absorbed (logged, recorded as
    /// the last error) so the host still gets a working engine with
    /// last-known-good, initially empty, section data.
    pub fn new(service: S, config: CanvasEngineConfig) -> CanvasResult<Self> {
        validate_engine_config(config)?;

        let mut engine = Self {
            service,
            core: EngineCore {
                nav: NavigationState::new(),
                grid: SectionGrid::empty(),
                paint: PaintState::new(config.selected_color, config.drawing_mode),
                throttle: RefreshThrottle::new(config.refresh_threshold_ms),
                runtime: RuntimeState {
                    palette: Vec::new(),
                    last_error: None,
                    view_size_px: config.view_size_px,
                },
            },
        };

        if let Err(err) = engine.reload_colors() {
            warn!(error = %err, "palette load failed during engine init");
        }
        if let Err(err) = engine.refresh() {
            warn!(error = %err, "initial root fetch failed, starting with an empty canvas");
        }
        Ok(engine)
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.core.nav.level()
    }

    #[must_use]
    pub fn fetch_params(&self) -> FetchParams {
        self.core.nav.fetch_params()
    }

    #[must_use]
    pub fn zoom_path(&self) -> &ZoomPath {
        self.core.nav.zoom_path()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.core.nav.history_len()
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        self.core.grid.sections()
    }

    #[must_use]
    pub fn section(&self, local: LocalCoord) -> Option<&Section> {
        self.core.grid.section(local)
    }

    #[must_use]
    pub fn palette(&self) -> &[ColorName] {
        &self.core.runtime.palette
    }

    #[must_use]
    pub fn selected_color(&self) -> ColorName {
        self.core.paint.selected_color()
    }

    pub fn set_selected_color(&mut self, color: ColorName) {
        self.core.paint.set_selected_color(color);
    }

    #[must_use]
    pub fn drawing_mode(&self) -> bool {
        self.core.paint.drawing_mode()
    }

    pub fn set_drawing_mode(&mut self, enabled: bool) {
        self.core.paint.set_drawing_mode(enabled);
    }

    /// Optimistic paint overlay shown before the service confirms.
    #[must_use]
    pub fn overlay(&self) -> &IndexMap<GlobalPixel, ColorName> {
        self.core.paint.overlay()
    }

    #[must_use]
    pub fn drag_active(&self) -> bool {
        self.core.paint.gesture().is_active()
    }

    #[must_use]
    pub fn view_size_px(&self) -> f64 {
        self.core.runtime.view_size_px
    }

    /// Message of the most recent absorbed service failure, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.core.runtime.last_error.as_deref()
    }

    pub fn clear_last_error(&mut self) {
        self.core.runtime.last_error = None;
    }

    #[must_use]
    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }

    #[must_use]
    pub fn into_service(self) -> S {
        self.service
    }
}
