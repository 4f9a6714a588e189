use std::time::{Duration, Instant};

/// A live schedule. Replacing or cancelling the handle retires it for good.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle {
    pub id: u64,
    pub next_fire: Instant,
}

/// Periodic relocation timer, polled from the event loop.
///
/// Only one handle is live at a time. `arm` replaces whatever was
/// scheduled before, `cancel` drops it, and `poll` fires at most once
/// per call.
#[derive(Debug)]
pub struct RoundTimer {
    period: Duration,
    handle: Option<TimerHandle>,
    next_id: u64,
}

impl RoundTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            handle: None,
            next_id: 1,
        }
    }

    pub fn handle(&self) -> Option<TimerHandle> {
        self.handle
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn arm(&mut self, now: Instant) -> TimerHandle {
        let handle = TimerHandle {
            id: self.next_id,
            next_fire: now + self.period,
        };
        self.next_id += 1;

        if let Some(old) = self.handle.replace(handle) {
            tracing::debug!(old = old.id, new = handle.id, "round timer replaced");
        } else {
            tracing::debug!(id = handle.id, "round timer armed");
        }

        handle
    }

    pub fn cancel(&mut self) {
        if let Some(old) = self.handle.take() {
            tracing::debug!(id = old.id, "round timer cancelled");
        }
    }

    /// Returns true when the deadline has passed. Missed periods collapse
    /// into a single fire and the next deadline lands after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(handle) = self.handle.as_mut() else {
            return false;
        };

        if now < handle.next_fire {
            return false;
        }

        let behind = now.duration_since(handle.next_fire);
        let skipped = (behind.as_nanos() / self.period.as_nanos().max(1)) as u32;
        handle.next_fire += self.period * (skipped + 1);
        true
    }
}
