use tracing::warn;

use crate::core::{translator, ColorName, GlobalPixel};
use crate::error::CanvasResult;
use crate::interaction::TouchSample;
use crate::service::CanvasService;

use super::CanvasEngine;

impl<S: CanvasService> CanvasEngine<S> {
    /// Paints one global pixel with an optimistic overlay entry.
    ///
    /// A silent no-op at non-drawable levels. With `immediate_refresh` the
    /// current section is re-fetched right after the paint acknowledges;
    /// without it the mutation stays pending for a later batched refresh.
    /// The overlay is not rolled back when the paint call fails.
    pub fn paint_pixel(
        &mut self,
        pixel: GlobalPixel,
        color: ColorName,
        immediate_refresh: bool,
    ) -> CanvasResult<()> {
        if !self.core.paint.can_paint_at(self.core.nav.level()) {
            return Ok(());
        }

        self.core.paint.overlay_insert(pixel, color);
        if let Err(err) = self.service.paint_pixel(pixel, color) {
            warn!(error = %err, "paint call failed, overlay left in place");
            self.core.runtime.last_error = Some(err.to_string());
            return Err(err);
        }
        if immediate_refresh {
            self.refresh()?;
        }
        Ok(())
    }

    /// Starts a drag-paint gesture, clearing the overlay and dedupe set.
    ///
    /// Does nothing when the current level is not drawable, so a stray
    /// gesture at a navigation level produces no service traffic at all.
    pub fn drag_begin(&mut self) {
        if !self.core.paint.can_paint_at(self.core.nav.level()) {
            return;
        }
        self.core.paint.overlay_clear();
        self.core.paint.gesture_mut().begin();
    }

    /// Feeds one touch sample of an in-progress drag gesture.
    ///
    /// The sample is converted to a global pixel, deduped against pixels
    /// already painted this gesture, and gap-interpolated against the
    /// previous sample when the drag moved more than one pixel. Paint calls
    /// are fire-and-forget here; failures are recorded, not propagated, so a
    /// fast gesture is never interrupted mid-stroke.
    pub fn drag_sample(&mut self, sample: TouchSample) -> CanvasResult<()> {
        if !self.core.paint.gesture().is_active() {
            return Ok(());
        }
        let level = self.core.nav.level();
        if !self.core.paint.can_paint_at(level) {
            return Ok(());
        }
        let Some(parent) = self.core.nav.fetch_params().section else {
            return Ok(());
        };

        let pixel = translator::view_to_pixel(
            level,
            parent,
            sample.x,
            sample.y,
            self.core.runtime.view_size_px,
        )?;
        if self.core.paint.gesture().last_pixel() == Some(pixel) {
            return Ok(());
        }

        let color = self.core.paint.selected_color();
        match self.core.paint.gesture().last_pixel() {
            Some(last) if translator::chebyshev(last, pixel) > 1 => {
                for step in translator::interpolate(last, pixel) {
                    self.paint_gesture_pixel(step, color);
                }
            }
            _ => self.paint_gesture_pixel(pixel, color),
        }
        self.core.paint.gesture_mut().set_last(pixel);
        Ok(())
    }

    /// Ends the gesture: exactly one batched re-fetch of the current
    /// section, then the transient overlay is dropped.
    pub fn drag_end(&mut self) -> CanvasResult<()> {
        if !self.core.paint.gesture().is_active() {
            return Ok(());
        }
        self.core.paint.gesture_mut().finish();
        let result = self.refresh();
        self.core.paint.overlay_clear();
        result
    }

    /// Runs a whole drag gesture over a bounded sequence of touch samples.
    pub fn drag_paint(&mut self, samples: &[TouchSample]) -> CanvasResult<()> {
        self.drag_begin();
        for sample in samples {
            self.drag_sample(*sample)?;
        }
        self.drag_end()
    }

    fn paint_gesture_pixel(&mut self, pixel: GlobalPixel, color: ColorName) {
        if !self.core.paint.gesture_mut().mark_painted(pixel) {
            return;
        }
        self.core.paint.overlay_insert(pixel, color);
        if let Err(err) = self.service.paint_pixel(pixel, color) {
            warn!(error = %err, "drag paint call failed");
            self.core.runtime.last_error = Some(err.to_string());
        }
    }
}
