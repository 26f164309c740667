use tracing::{debug, warn};

use crate::core::{FetchParams, LocalCoord};
use crate::error::CanvasResult;
use crate::service::CanvasService;

use super::CanvasEngine;

impl<S: CanvasService> CanvasEngine<S> {
    /// Drills into the tapped section and fetches its children.
    ///
    /// A silent no-op at the terminal level. Navigation state commits before
    /// the fetch; on fetch failure the previous section data stays in place
    /// and the error is surfaced.
    pub fn zoom_in(&mut self, local: LocalCoord) -> CanvasResult<()> {
        let Some(params) = self.core.nav.zoom_in(local) else {
            return Ok(());
        };
        debug!(
            level = params.level.get(),
            x = local.x(),
            y = local.y(),
            "zoomed in"
        );
        self.fetch_into_grid(params)
    }

    /// Backs out one level and re-fetches the restored view.
    ///
    /// A silent no-op at the root level.
    pub fn go_back(&mut self) -> CanvasResult<()> {
        let Some(params) = self.core.nav.go_back() else {
            return Ok(());
        };
        debug!(level = params.level.get(), "navigated back");
        self.fetch_into_grid(params)
    }

    /// Jumps straight back to the root view.
    pub fn go_to_root(&mut self) -> CanvasResult<()> {
        let params = self.core.nav.go_to_root();
        debug!("navigated to root");
        self.fetch_into_grid(params)
    }

    /// Re-fetches the currently displayed section with the last fetch params.
    pub fn refresh(&mut self) -> CanvasResult<()> {
        let params = self.core.nav.fetch_params();
        self.fetch_into_grid(params)
    }

    /// Reloads the paint palette from the service.
    pub fn reload_colors(&mut self) -> CanvasResult<()> {
        let colors = self.service.colors()?;
        self.core.runtime.palette = colors;
        Ok(())
    }

    fn fetch_into_grid(&mut self, params: FetchParams) -> CanvasResult<()> {
        match self.service.fetch_sections(params) {
            Ok(sections) => {
                self.core.grid.replace(sections);
                self.core.runtime.last_error = None;
                Ok(())
            }
            Err(err) => {
                warn!(
                    error = %err,
                    level = params.level.get(),
                    "section fetch failed, keeping last known sections"
                );
                self.core.runtime.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
