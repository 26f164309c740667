use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::translator;
use crate::core::types::{FetchParams, Level, LocalCoord, SectionAddress};
use crate::core::zoom_path::ZoomPath;

/// Position pushed on every zoom-in and popped on every back-navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub level: Level,
    pub section: Option<SectionAddress>,
}

/// Explicit level/zoom/history state with pure transition methods.
///
/// Transitions mutate navigation state and return the `FetchParams` the
/// caller must execute against the canvas service; they never perform I/O
/// themselves. State is committed before the fetch, so a failed fetch leaves
/// navigation already advanced and only the section data stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    level: Level,
    path: ZoomPath,
    history: SmallVec<[HistoryEntry; 5]>,
    fetch_params: FetchParams,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::ROOT,
            path: ZoomPath::new(),
            history: SmallVec::new(),
            fetch_params: FetchParams::root(),
        }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn zoom_path(&self) -> &ZoomPath {
        &self.path
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn fetch_params(&self) -> FetchParams {
        self.fetch_params
    }

    /// Drills into the tapped section.
    ///
    /// Returns the fetch parameters for the new level, or `None` at the
    /// terminal level where zooming further is a silent no-op.
    pub fn zoom_in(&mut self, local: LocalCoord) -> Option<FetchParams> {
        let next = self.level.child()?;
        // The current level always has a slot when a child level exists.
        self.path.set(self.level, local).ok()?;
        self.history.push(HistoryEntry {
            level: self.level,
            section: self.fetch_params.section,
        });
        let section = translator::section_address(&self.path, next);
        self.level = next;
        self.fetch_params = FetchParams {
            level: next,
            section,
        };
        debug_assert_eq!(self.history.len(), usize::from(self.level.get() - 1));
        Some(self.fetch_params)
    }

    /// Backs out one level.
    ///
    /// Returns the fetch parameters for the restored level, or `None` at the
    /// root where back-navigation is a silent no-op. The section address is
    /// re-derived from the truncated zoom path; the popped entry's stored
    /// section covers the case where the path cannot supply it.
    pub fn go_back(&mut self) -> Option<FetchParams> {
        let popped = self.history.pop()?;
        let returning = popped.level;
        self.path.clear_from(returning);
        let section = if returning.is_root() {
            None
        } else {
            translator::section_address(&self.path, returning).or(popped.section)
        };
        self.level = returning;
        self.fetch_params = FetchParams {
            level: returning,
            section,
        };
        debug_assert_eq!(self.history.len(), usize::from(self.level.get() - 1));
        Some(self.fetch_params)
    }

    /// Jumps straight back to the root view, dropping path and history.
    pub fn go_to_root(&mut self) -> FetchParams {
        self.history.clear();
        self.path.clear();
        self.level = Level::ROOT;
        self.fetch_params = FetchParams::root();
        self.fetch_params
    }
}
