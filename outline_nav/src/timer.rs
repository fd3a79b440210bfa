// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-driven timing primitives.
//!
//! Nothing here owns a clock. The host reports time as milliseconds since an
//! arbitrary epoch and drives [`Debouncer::poll`] from its own tick, which
//! keeps the crate runtime-agnostic and the tests deterministic.

/// How long filter keystrokes settle before the filter is applied.
pub const FILTER_DEBOUNCE_MS: u64 = 500;

/// Minimum spacing between processed breakpoint changes while resizing.
pub const BREAKPOINT_THROTTLE_MS: u64 = 150;

/// Trailing-edge debouncer: holds the latest value until `delay_ms` passes
/// with no newer one.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    pending: Option<(T, u64)>,
    delay_ms: u64,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given settle delay.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            pending: None,
            delay_ms,
        }
    }

    /// Record a new value at `now_ms`, restarting the settle window and
    /// discarding any value still pending.
    pub fn set(&mut self, value: T, now_ms: u64) {
        self.pending = Some((value, now_ms + self.delay_ms));
    }

    /// Fire the pending value if its window has elapsed by `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now_ms => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Drop the pending value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a value is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Leading-edge throttle: passes the first event, then at most one per
/// interval.
#[derive(Clone, Debug)]
pub struct Throttle {
    last_ms: Option<u64>,
    interval_ms: u64,
}

impl Throttle {
    /// Create a throttle with the given minimum spacing.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            last_ms: None,
            interval_ms,
        }
    }

    /// Whether an event arriving at `now_ms` may be processed. Allowed
    /// events reset the interval.
    pub fn allow(&mut self, now_ms: u64) -> bool {
        let allowed = self
            .last_ms
            .is_none_or(|last| now_ms.saturating_sub(last) >= self.interval_ms);
        if allowed {
            self.last_ms = Some(now_ms);
        }
        allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debouncer_fires_after_the_window() {
        let mut debouncer = Debouncer::new(500);
        debouncer.set("view", 0);
        assert_eq!(debouncer.poll(499), None);
        assert_eq!(debouncer.poll(500), Some("view"));
        assert_eq!(debouncer.poll(501), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn newer_values_restart_the_window() {
        let mut debouncer = Debouncer::new(500);
        debouncer.set("v", 0);
        debouncer.set("vi", 400);
        assert_eq!(debouncer.poll(500), None);
        assert_eq!(debouncer.poll(900), Some("vi"));
    }

    #[test]
    fn cancel_drops_the_pending_value() {
        let mut debouncer = Debouncer::new(500);
        debouncer.set("view", 0);
        debouncer.cancel();
        assert_eq!(debouncer.poll(1_000), None);
    }

    #[test]
    fn throttle_passes_leading_edge_then_spaces() {
        let mut throttle = Throttle::new(150);
        assert!(throttle.allow(0));
        assert!(!throttle.allow(100));
        assert!(throttle.allow(150));
        assert!(!throttle.allow(299));
        assert!(throttle.allow(300));
    }
}
