//! Stateless coordinate math between per-level local selections and the
//! global 729x729 address space.
//!
//! The hierarchy is base-3 positional: the local coordinate chosen at each
//! level is one digit of the global section address, most significant digit
//! first. All functions are pure and re-derivable; nothing here touches
//! engine state.

use smallvec::SmallVec;

use crate::core::types::{CANVAS_SIDE, GlobalPixel, Level, LocalCoord, SectionAddress};
use crate::core::zoom_path::{PathSlot, ZoomPath};
use crate::error::{CanvasError, CanvasResult};

/// Global section address to request when transitioning to `target`.
///
/// Accumulates the path's local coordinates for levels 1..target as base-3
/// digits. Returns `None` for the root level (a root fetch takes no section
/// coordinates) and when the required path prefix has a gap.
#[must_use]
pub fn section_address(path: &ZoomPath, target: Level) -> Option<SectionAddress> {
    if target.is_root() {
        return None;
    }

    let mut x: u32 = 0;
    let mut y: u32 = 0;
    for level in 1..target.get() {
        match path.slot_at(level) {
            PathSlot::Local(local) => {
                x = x * 3 + u32::from(local.x());
                y = y * 3 + u32::from(local.y());
            }
            PathSlot::Unset => return None,
        }
    }
    Some(SectionAddress::new(x, y))
}

/// Global pixel for a cell painted within the region displayed at `level`.
///
/// `parent` is the section address the current view was fetched with and the
/// cell indices run over the full displayed pixel grid, `pixel_base(level)`
/// cells per side.
pub fn cell_pixel(
    level: Level,
    parent: SectionAddress,
    cell_x: u32,
    cell_y: u32,
) -> CanvasResult<GlobalPixel> {
    let base = level.pixel_base();
    if cell_x >= base || cell_y >= base {
        return Err(CanvasError::InvalidData(format!(
            "cell ({cell_x}, {cell_y}) outside the {base}x{base} paint grid"
        )));
    }

    let x = u64::from(parent.x) * u64::from(base) + u64::from(cell_x);
    let y = u64::from(parent.y) * u64::from(base) + u64::from(cell_y);
    if x >= u64::from(CANVAS_SIDE) || y >= u64::from(CANVAS_SIDE) {
        return Err(CanvasError::InvalidData(format!(
            "section address ({}, {}) out of range for level {}",
            parent.x,
            parent.y,
            level.get()
        )));
    }
    GlobalPixel::new(x as u16, y as u16)
}

/// Global pixel addressed by tapping `child` at the terminal level.
pub fn terminal_pixel(parent: SectionAddress, child: LocalCoord) -> CanvasResult<GlobalPixel> {
    cell_pixel(
        Level::TERMINAL,
        parent,
        u32::from(child.x()),
        u32::from(child.y()),
    )
}

/// Inverse of the view's per-cell rendering size: converts a touch sample in
/// view coordinates into the global pixel under it.
///
/// Samples outside the view are clamped to the nearest edge cell, so a drag
/// that briefly leaves the canvas keeps painting the border.
pub fn view_to_pixel(
    level: Level,
    parent: SectionAddress,
    view_x: f64,
    view_y: f64,
    view_size: f64,
) -> CanvasResult<GlobalPixel> {
    if !view_size.is_finite() || view_size <= 0.0 {
        return Err(CanvasError::InvalidData(
            "view size must be finite and positive".to_owned(),
        ));
    }
    if !view_x.is_finite() || !view_y.is_finite() {
        return Err(CanvasError::InvalidData(
            "touch coordinates must be finite".to_owned(),
        ));
    }

    let cells = f64::from(level.pixel_base());
    let cell_size = view_size / cells;
    let cell_x = (view_x / cell_size).floor().clamp(0.0, cells - 1.0) as u32;
    let cell_y = (view_y / cell_size).floor().clamp(0.0, cells - 1.0) as u32;
    cell_pixel(level, parent, cell_x, cell_y)
}

/// Chessboard distance between two global pixels.
#[must_use]
pub fn chebyshev(a: GlobalPixel, b: GlobalPixel) -> u16 {
    a.x().abs_diff(b.x()).max(a.y().abs_diff(b.y()))
}

/// Integer pixels along the segment from `from` to `to`, excluding `from`
/// and including `to`.
///
/// Used to fill the gaps a fast drag leaves between consecutive touch
/// samples; returns one pixel per Chebyshev step so the painted line has no
/// holes.
#[must_use]
pub fn interpolate(from: GlobalPixel, to: GlobalPixel) -> SmallVec<[GlobalPixel; 16]> {
    let steps = chebyshev(from, to);
    let mut out = SmallVec::new();
    for step in 1..=steps {
        let t = f64::from(step) / f64::from(steps);
        let x = f64::from(from.x()) + (f64::from(to.x()) - f64::from(from.x())) * t;
        let y = f64::from(from.y()) + (f64::from(to.y()) - f64::from(from.y())) * t;
        // Rounded convex combinations of in-range endpoints stay in range.
        out.push(GlobalPixel::from_raw(
            x.round() as u16,
            y.round() as u16,
        ));
    }
    out
}
