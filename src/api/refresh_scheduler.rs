use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CanvasResult;
use crate::service::CanvasService;

use super::CanvasEngine;

/// Default realtime refresh window.
pub const DEFAULT_REFRESH_THRESHOLD_MS: u64 = 1_000;

/// What a change notification resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrottleDecision {
    /// The window has elapsed; refresh right away.
    RefreshNow,
    /// First notification inside the window; a trailing refresh is due at
    /// `fire_at`.
    Scheduled { fire_at: u64 },
    /// A trailing refresh was already pending; this notification folds into
    /// it.
    Coalesced { fire_at: u64 },
}

/// Leading-edge-suppressed trailing throttle with coalescing.
///
/// Time is injected: every operation takes `now_ms` from the host's clock,
/// which keeps burst coalescing deterministic under test. The throttle never
/// spawns timers itself; `pending_at` tells the host when to call back in.
///
/// Under a burst of notifications within one window, at most one refresh
/// fires, no earlier than one full window after the previous refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshThrottle {
    threshold_ms: u64,
    last_refresh_at: u64,
    pending_at: Option<u64>,
}

impl RefreshThrottle {
    #[must_use]
    pub fn new(threshold_ms: u64) -> Self {
        Self {
            threshold_ms,
            last_refresh_at: 0,
            pending_at: None,
        }
    }

    #[must_use]
    pub fn threshold_ms(&self) -> u64 {
        self.threshold_ms
    }

    #[must_use]
    pub fn last_refresh_at(&self) -> u64 {
        self.last_refresh_at
    }

    /// Deadline of the pending trailing refresh, if one is scheduled.
    #[must_use]
    pub fn pending_at(&self) -> Option<u64> {
        self.pending_at
    }

    /// Feeds one change notification into the throttle.
    pub fn on_change(&mut self, now_ms: u64) -> ThrottleDecision {
        if let Some(fire_at) = self.pending_at {
            return ThrottleDecision::Coalesced { fire_at };
        }

        let elapsed = now_ms.saturating_sub(self.last_refresh_at);
        if elapsed >= self.threshold_ms {
            self.last_refresh_at = now_ms;
            ThrottleDecision::RefreshNow
        } else {
            let fire_at = now_ms + (self.threshold_ms - elapsed);
            self.pending_at = Some(fire_at);
            ThrottleDecision::Scheduled { fire_at }
        }
    }

    /// Fires the pending trailing refresh when due; `true` means refresh now.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.pending_at {
            Some(fire_at) if now_ms >= fire_at => {
                self.pending_at = None;
                self.last_refresh_at = now_ms;
                true
            }
            _ => false,
        }
    }

    /// Marks an out-of-band refresh so the window restarts from `now_ms`.
    pub fn mark_refreshed(&mut self, now_ms: u64) {
        self.last_refresh_at = now_ms;
        self.pending_at = None;
    }

    /// Releases the pending trailing refresh, e.g. on component teardown.
    pub fn cancel(&mut self) {
        self.pending_at = None;
    }
}

impl<S: CanvasService> CanvasEngine<S> {
    /// Feeds one change event from the host's subscription stream.
    ///
    /// Returns `true` when the notification triggered an immediate refresh.
    /// Otherwise a trailing refresh is pending; the host should call
    /// [`Self::tick`] at or after [`Self::pending_refresh_at`].
    pub fn notify_remote_change(&mut self, now_ms: u64) -> CanvasResult<bool> {
        match self.core.throttle.on_change(now_ms) {
            ThrottleDecision::RefreshNow => {
                debug!(now_ms, "remote change refreshes immediately");
                self.refresh()?;
                Ok(true)
            }
            ThrottleDecision::Scheduled { fire_at } => {
                debug!(now_ms, fire_at, "remote change scheduled trailing refresh");
                Ok(false)
            }
            ThrottleDecision::Coalesced { .. } => Ok(false),
        }
    }

    /// Drives the host's timer; fires the trailing refresh once it is due.
    pub fn tick(&mut self, now_ms: u64) -> CanvasResult<bool> {
        if self.core.throttle.poll(now_ms) {
            debug!(now_ms, "trailing refresh fired");
            self.refresh()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    #[must_use]
    pub fn pending_refresh_at(&self) -> Option<u64> {
        self.core.throttle.pending_at()
    }

    pub fn cancel_pending_refresh(&mut self) {
        self.core.throttle.cancel();
    }
}
