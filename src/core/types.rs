use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, CanvasResult};

/// Side length of the 3x3 grid displayed at every level.
pub const GRID_SIDE: u8 = 3;

/// Number of subdivision levels; level 6 sections are single pixels.
pub const LEVEL_COUNT: u8 = 6;

/// Side length of the global pixel address space, 3^6.
pub const CANVAS_SIDE: u16 = 729;

/// Depth in the hierarchical subdivision of the canvas.
///
/// Level 1 is the root view, level 6 the terminal single-pixel view. The
/// pixel span covered by one section shrinks by a factor of 3 per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const ROOT: Self = Self(1);
    pub const TERMINAL: Self = Self(LEVEL_COUNT);

    pub fn new(value: u8) -> CanvasResult<Self> {
        if (1..=LEVEL_COUNT).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CanvasError::InvalidLevel { level: value })
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_root(self) -> bool {
        self.0 == 1
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.0 == LEVEL_COUNT
    }

    /// Level reached by zooming in, or `None` at the terminal level.
    #[must_use]
    pub const fn child(self) -> Option<Self> {
        if self.is_terminal() {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }

    /// Level reached by backing out, or `None` at the root.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        if self.is_root() {
            None
        } else {
            Some(Self(self.0 - 1))
        }
    }

    /// Pixel span covered by one section at this level: 3^(6-L).
    #[must_use]
    pub fn pixel_span(self) -> u32 {
        3u32.pow(u32::from(LEVEL_COUNT - self.0))
    }

    /// Pixel width of the whole displayed 3x3 region at this level.
    ///
    /// Derived as `GRID_SIDE * pixel_span`, never asserted as a literal; this
    /// is the per-level base used when painting individual pixels in drawing
    /// mode (27 at level 4, 9 at level 5, 3 at level 6).
    #[must_use]
    pub fn pixel_base(self) -> u32 {
        u32::from(GRID_SIDE) * self.pixel_span()
    }

    /// Number of valid section addresses per side at this level: 3^(L-1).
    #[must_use]
    pub fn side_sections(self) -> u32 {
        3u32.pow(u32::from(self.0 - 1))
    }
}

impl TryFrom<u8> for Level {
    type Error = CanvasError;

    fn try_from(value: u8) -> CanvasResult<Self> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.get()
    }
}

/// Position tapped within the current 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalCoord {
    x: u8,
    y: u8,
}

impl LocalCoord {
    pub fn new(x: u8, y: u8) -> CanvasResult<Self> {
        if x < GRID_SIDE && y < GRID_SIDE {
            Ok(Self { x, y })
        } else {
            Err(CanvasError::InvalidData(format!(
                "local coordinate ({x}, {y}) outside the 3x3 grid"
            )))
        }
    }

    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }
}

/// Global section address at some level, in [0, 3^(L-1)) per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionAddress {
    pub x: u32,
    pub y: u32,
}

impl SectionAddress {
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn in_range_for(self, level: Level) -> bool {
        let side = level.side_sections();
        self.x < side && self.y < side
    }
}

/// Absolute pixel address in the 729x729 canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlobalPixel {
    x: u16,
    y: u16,
}

impl GlobalPixel {
    pub fn new(x: u16, y: u16) -> CanvasResult<Self> {
        if x < CANVAS_SIDE && y < CANVAS_SIDE {
            Ok(Self { x, y })
        } else {
            Err(CanvasError::InvalidData(format!(
                "pixel ({x}, {y}) outside the {CANVAS_SIDE}x{CANVAS_SIDE} canvas"
            )))
        }
    }

    /// Caller guarantees both components are below `CANVAS_SIDE`.
    pub(crate) const fn from_raw(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn x(self) -> u16 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> u16 {
        self.y
    }
}

/// Parameters of the last section request: level plus global section address.
///
/// The section address is `None` exactly at the root level, where the whole
/// canvas is requested without coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchParams {
    pub level: Level,
    pub section: Option<SectionAddress>,
}

impl FetchParams {
    #[must_use]
    pub const fn root() -> Self {
        Self {
            level: Level::ROOT,
            section: None,
        }
    }
}
