//! Paint interaction state: selected color, drawing mode, the optimistic
//! overlay shown before the service confirms, and per-gesture drag tracking.
//!
//! Pure state, no I/O; the `api` controllers drive it.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::core::{ColorName, GlobalPixel, Level};

/// One touch sample in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchSample {
    pub x: f64,
    pub y: f64,
}

impl TouchSample {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Tracking for one in-progress drag gesture.
///
/// `painted` dedupes repeated touches of the same global pixel within the
/// gesture; `last` anchors gap interpolation between consecutive samples.
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    active: bool,
    painted: IndexSet<GlobalPixel>,
    last: Option<GlobalPixel>,
}

impl DragGesture {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn begin(&mut self) {
        self.active = true;
        self.painted.clear();
        self.last = None;
    }

    pub fn finish(&mut self) {
        self.active = false;
    }

    #[must_use]
    pub fn last_pixel(&self) -> Option<GlobalPixel> {
        self.last
    }

    pub fn set_last(&mut self, pixel: GlobalPixel) {
        self.last = Some(pixel);
    }

    /// Registers a pixel for this gesture; `false` when it was already painted.
    pub fn mark_painted(&mut self, pixel: GlobalPixel) -> bool {
        self.painted.insert(pixel)
    }

    #[must_use]
    pub fn painted_count(&self) -> usize {
        self.painted.len()
    }
}

/// Paint-side engine state.
#[derive(Debug, Clone)]
pub struct PaintState {
    selected_color: ColorName,
    drawing_mode: bool,
    overlay: IndexMap<GlobalPixel, ColorName>,
    gesture: DragGesture,
}

impl PaintState {
    #[must_use]
    pub fn new(selected_color: ColorName, drawing_mode: bool) -> Self {
        Self {
            selected_color,
            drawing_mode,
            overlay: IndexMap::new(),
            gesture: DragGesture::default(),
        }
    }

    #[must_use]
    pub fn selected_color(&self) -> ColorName {
        self.selected_color
    }

    pub fn set_selected_color(&mut self, color: ColorName) {
        self.selected_color = color;
    }

    #[must_use]
    pub fn drawing_mode(&self) -> bool {
        self.drawing_mode
    }

    pub fn set_drawing_mode(&mut self, enabled: bool) {
        self.drawing_mode = enabled;
    }

    /// Painting is offered at the terminal level always, and at the two
    /// levels above it only while drawing mode is enabled.
    #[must_use]
    pub fn can_paint_at(&self, level: Level) -> bool {
        match level.get() {
            6 => true,
            4 | 5 => self.drawing_mode,
            _ => false,
        }
    }

    #[must_use]
    pub fn overlay(&self) -> &IndexMap<GlobalPixel, ColorName> {
        &self.overlay
    }

    #[must_use]
    pub fn overlay_color(&self, pixel: GlobalPixel) -> Option<ColorName> {
        self.overlay.get(&pixel).copied()
    }

    pub(crate) fn overlay_insert(&mut self, pixel: GlobalPixel, color: ColorName) {
        self.overlay.insert(pixel, color);
    }

    pub(crate) fn overlay_clear(&mut self) {
        self.overlay.clear();
    }

    #[must_use]
    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    pub(crate) fn gesture_mut(&mut self) -> &mut DragGesture {
        &mut self.gesture
    }
}
