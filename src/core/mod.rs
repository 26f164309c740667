pub mod translator;

mod navigation;
mod palette;
mod section;
mod types;
mod zoom_path;

pub use navigation::{HistoryEntry, NavigationState};
pub use palette::ColorName;
pub use section::{Pixel, Section, SectionGrid};
pub use types::{
    CANVAS_SIDE, FetchParams, GRID_SIDE, GlobalPixel, LEVEL_COUNT, Level, LocalCoord,
    SectionAddress,
};
pub use zoom_path::{PathSlot, ZoomPath};
