// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sidebar shell signals: breakpoint tracking and the page scroll lock.

use tracing::debug;

use crate::timer::{BREAKPOINT_THROTTLE_MS, Throttle};

/// The responsive breakpoint reported by the host layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    /// Phone-width: the sidebar overlays the page.
    Small,
    /// Tablet-width: the sidebar overlays the page.
    Medium,
    /// Desktop-width: the sidebar sits beside the page.
    Large,
}

impl Breakpoint {
    /// Whether the sidebar renders beside the content instead of over it.
    pub fn is_large(self) -> bool {
        matches!(self, Self::Large)
    }
}

/// Host capability for freezing page scroll while an overlay sidebar is up.
///
/// `container_id` names the element whose scrolling stays allowed while the
/// rest of the page is frozen.
pub trait ScrollLock {
    /// Freeze page scrolling outside `container_id`.
    fn enable(&mut self, container_id: &str);
    /// Release the freeze for `container_id`.
    fn disable(&mut self, container_id: &str);
}

/// Open/closed and breakpoint state for the sidebar chrome.
///
/// The invariant maintained here: the scroll lock is engaged exactly while
/// the sidebar is open on a non-large breakpoint. Breakpoint changes arrive
/// throttled, since hosts fire them continuously during a resize drag.
#[derive(Debug)]
pub struct SidebarShell {
    container_id: String,
    breakpoint: Breakpoint,
    open: bool,
    locked: bool,
    throttle: Throttle,
}

impl SidebarShell {
    /// Create a closed shell for the sidebar container named `container_id`.
    pub fn new(container_id: impl Into<String>, breakpoint: Breakpoint) -> Self {
        Self {
            container_id: container_id.into(),
            breakpoint,
            open: false,
            locked: false,
            throttle: Throttle::new(BREAKPOINT_THROTTLE_MS),
        }
    }

    /// The breakpoint currently in effect.
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Whether the sidebar is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the sidebar, locking page scroll when it overlays the content.
    pub fn open(&mut self, lock: &mut dyn ScrollLock) {
        self.open = true;
        self.sync_lock(lock);
    }

    /// Close the sidebar, releasing any scroll lock.
    pub fn close(&mut self, lock: &mut dyn ScrollLock) {
        self.open = false;
        self.sync_lock(lock);
    }

    /// Apply a breakpoint change reported at `now_ms`.
    ///
    /// Changes inside the throttle window are dropped; the host keeps
    /// reporting during a resize, so the settled value still lands.
    pub fn set_breakpoint(
        &mut self,
        breakpoint: Breakpoint,
        now_ms: u64,
        lock: &mut dyn ScrollLock,
    ) {
        if breakpoint == self.breakpoint || !self.throttle.allow(now_ms) {
            return;
        }
        debug!(?breakpoint, "sidebar: breakpoint changed");
        self.breakpoint = breakpoint;
        self.sync_lock(lock);
    }

    fn sync_lock(&mut self, lock: &mut dyn ScrollLock) {
        let should_lock = self.open && !self.breakpoint.is_large();
        if should_lock && !self.locked {
            lock.enable(&self.container_id);
            self.locked = true;
        } else if !should_lock && self.locked {
            lock.disable(&self.container_id);
            self.locked = false;
        }
    }
}
