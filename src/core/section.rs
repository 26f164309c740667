use serde::{Deserialize, Serialize};

use crate::core::palette::ColorName;
use crate::core::types::{GlobalPixel, LocalCoord};

/// A painted pixel as reported by the canvas service.
///
/// Only painted pixels are materialized; absence means background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixel {
    pub pixel: GlobalPixel,
    pub color: ColorName,
}

/// One of the nine sections returned for the currently displayed region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub local: LocalCoord,
    pub pixels: Vec<Pixel>,
}

impl Section {
    #[must_use]
    pub fn empty(local: LocalCoord) -> Self {
        Self {
            local,
            pixels: Vec::new(),
        }
    }
}

/// Section data for the current view, replaced wholesale on every successful
/// fetch. A missing cell is "no data", rendered as empty background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SectionGrid {
    sections: Vec<Section>,
}

impl SectionGrid {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, local: LocalCoord) -> Option<&Section> {
        self.sections.iter().find(|section| section.local == local)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
