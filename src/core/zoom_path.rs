use serde::{Deserialize, Serialize};

use crate::core::types::{LEVEL_COUNT, Level, LocalCoord};
use crate::error::{CanvasError, CanvasResult};

/// Per-level selection slot.
///
/// A sum type instead of a nullable coordinate so the "contiguous prefix"
/// invariant of the zoom path is explicit at every use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PathSlot {
    #[default]
    Unset,
    Local(LocalCoord),
}

impl PathSlot {
    #[must_use]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::Local(_))
    }
}

/// Ordered record of the local coordinate chosen at levels 1 through 5.
///
/// Entries form a contiguous prefix: a slot is only set while every shallower
/// slot is set, and setting a slot clears everything deeper. Level 6 has no
/// slot because the terminal level offers no further zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ZoomPath {
    slots: [PathSlot; (LEVEL_COUNT - 1) as usize],
}

impl ZoomPath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn index(level: Level) -> Option<usize> {
        if level.get() < LEVEL_COUNT {
            Some(usize::from(level.get() - 1))
        } else {
            None
        }
    }

    /// Slot for the given level; levels without a slot read as `Unset`.
    #[must_use]
    pub fn slot(&self, level: Level) -> PathSlot {
        Self::index(level)
            .map(|i| self.slots[i])
            .unwrap_or(PathSlot::Unset)
    }

    pub(crate) fn slot_at(&self, level: u8) -> PathSlot {
        if (1..LEVEL_COUNT).contains(&level) {
            self.slots[usize::from(level - 1)]
        } else {
            PathSlot::Unset
        }
    }

    /// Records the selection made at `level` and clears all deeper slots,
    /// discarding stale entries from a prior deeper excursion.
    pub fn set(&mut self, level: Level, local: LocalCoord) -> CanvasResult<()> {
        let Some(index) = Self::index(level) else {
            return Err(CanvasError::InvalidLevel { level: level.get() });
        };
        self.slots[index] = PathSlot::Local(local);
        for slot in &mut self.slots[index + 1..] {
            *slot = PathSlot::Unset;
        }
        Ok(())
    }

    /// Clears the slot at `level` and every deeper slot.
    pub fn clear_from(&mut self, level: Level) {
        if let Some(index) = Self::index(level) {
            for slot in &mut self.slots[index..] {
                *slot = PathSlot::Unset;
            }
        }
    }

    pub fn clear(&mut self) {
        self.slots = [PathSlot::Unset; (LEVEL_COUNT - 1) as usize];
    }

    /// True when slots for levels 1..=`level` are all set.
    #[must_use]
    pub fn is_contiguous_through(&self, level: Level) -> bool {
        match Self::index(level) {
            Some(index) => self.slots[..=index].iter().all(|slot| slot.is_set()),
            None => false,
        }
    }

    /// Number of leading set slots.
    #[must_use]
    pub fn depth(&self) -> u8 {
        self.slots
            .iter()
            .take_while(|slot| slot.is_set())
            .count() as u8
    }
}
