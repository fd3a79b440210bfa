// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigator facade: one owned object a host embeds, wiring the tree,
//! tracker, filter input, debouncer, and persistence together.

use outline_filter::FilterQuery;
use outline_tree::{FlatTree, Uid};
use tracing::debug;

use crate::persist::{self, PersistError, SessionStore};
use crate::timer::{Debouncer, FILTER_DEBOUNCE_MS};
use crate::tracker::Tracker;

/// Terminal outcome of the one-shot tree fetch.
///
/// There is no retry and no partial tree: a technology's index either
/// arrived whole or the navigator stays in the error state.
#[derive(Clone, Debug)]
pub enum FetchOutcome {
    /// The index arrived and was flattened.
    Ready(FlatTree),
    /// The fetch failed; the navigator renders an error state.
    Failed,
}

/// User-facing events a host forwards to [`Navigator::handle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigatorEvent {
    /// Expand or collapse one node.
    Toggle(Uid),
    /// Expand or collapse a node's entire subtree.
    ToggleSubtree(Uid),
    /// The filter text field changed (applied after the debounce settles).
    FilterText(String),
    /// The tag selection changed (applied immediately).
    SetTags(Vec<String>),
    /// The active page changed to the given path segments.
    Navigate(Vec<String>),
    /// The user dismissed the sidebar.
    Close,
}

/// Side effects [`Navigator::handle`] asks the host to perform.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Hide the sidebar chrome.
    Dismiss,
}

/// Why the rendered list is empty.
///
/// Checked in a fixed order: an active filter explains emptiness before a
/// fetch error does, and a tree with no top-level nodes comes last.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EmptyState {
    /// A filter is active and nothing matched.
    NoFilterResults,
    /// The index fetch failed.
    FetchError,
    /// The technology genuinely has no child pages.
    NoChildren,
}

/// The embeddable navigator for one technology.
#[derive(Debug)]
pub struct Navigator {
    technology: String,
    outcome: FetchOutcome,
    tracker: Tracker,
    filter_text: String,
    applied_text: String,
    tags: Vec<String>,
    debouncer: Debouncer<String>,
}

impl Navigator {
    /// Create a navigator over a successfully fetched tree.
    pub fn new(technology: impl Into<String>, tree: FlatTree) -> Self {
        Self::with_outcome(technology, FetchOutcome::Ready(tree))
    }

    /// Create a navigator in the fetch-error state.
    pub fn failed(technology: impl Into<String>) -> Self {
        Self::with_outcome(technology, FetchOutcome::Failed)
    }

    fn with_outcome(technology: impl Into<String>, outcome: FetchOutcome) -> Self {
        Self {
            technology: technology.into(),
            outcome,
            tracker: Tracker::new(),
            filter_text: String::new(),
            applied_text: String::new(),
            tags: Vec::new(),
            debouncer: Debouncer::new(FILTER_DEBOUNCE_MS),
        }
    }

    /// The flattened tree, while the fetch succeeded.
    pub fn tree(&self) -> Option<&FlatTree> {
        match &self.outcome {
            FetchOutcome::Ready(tree) => Some(tree),
            FetchOutcome::Failed => None,
        }
    }

    /// The open-state tracker (visible list, open set, scroll target).
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Mutable tracker access, for hosts driving it directly.
    pub fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.tracker
    }

    /// The live filter field contents (not yet necessarily applied).
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// The selected tag labels.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Initialize state on first render: restore the persisted session if it
    /// validates against this tree, otherwise resolve `segments` and
    /// navigate. Returns whether a persisted session was adopted.
    pub fn mount(&mut self, store: &dyn SessionStore, segments: &[&str]) -> bool {
        let FetchOutcome::Ready(tree) = &self.outcome else {
            return false;
        };
        if let Some(restored) = persist::restore(store, &self.technology, tree) {
            let query = FilterQuery::from_input(
                &restored.filter_text,
                restored.tags.iter().map(String::as_str),
            );
            let active_path = tree.resolve_path(segments);
            self.tracker
                .restore(tree, &query, restored.open, restored.visible, active_path);
            self.filter_text = restored.filter_text;
            self.applied_text = self.filter_text.clone();
            self.tags = restored.tags;
            return true;
        }
        self.navigate(segments);
        false
    }

    /// Resolve `segments` against the tree and make the result the active
    /// path.
    pub fn navigate(&mut self, segments: &[&str]) {
        let FetchOutcome::Ready(tree) = &self.outcome else {
            return;
        };
        let path = tree.resolve_path(segments);
        self.tracker.on_navigate(tree, path);
    }

    /// Apply one user event at `now_ms`.
    pub fn handle(&mut self, event: NavigatorEvent, now_ms: u64) -> Option<Effect> {
        match event {
            NavigatorEvent::Toggle(uid) => {
                if let FetchOutcome::Ready(tree) = &self.outcome {
                    self.tracker.toggle(tree, uid);
                }
            }
            NavigatorEvent::ToggleSubtree(uid) => {
                if let FetchOutcome::Ready(tree) = &self.outcome {
                    self.tracker.toggle_subtree(tree, uid);
                }
            }
            NavigatorEvent::FilterText(text) => {
                self.filter_text = text.clone();
                self.debouncer.set(text, now_ms);
            }
            NavigatorEvent::SetTags(tags) => {
                self.tags = tags;
                // Tag clicks are discrete; only typing is debounced. A
                // pending keystroke burst still applies with the new tags,
                // so flush it now rather than letting it fire later.
                if let Some(text) = self.debouncer.poll(u64::MAX) {
                    self.applied_text = text;
                }
                self.apply_filter();
            }
            NavigatorEvent::Navigate(segments) => {
                let refs: Vec<&str> = segments.iter().map(String::as_str).collect();
                self.navigate(&refs);
            }
            NavigatorEvent::Close => {
                debug!("navigator: dismissed");
                self.debouncer.cancel();
                return Some(Effect::Dismiss);
            }
        }
        None
    }

    /// Advance time to `now_ms`, applying any filter text whose debounce
    /// window has settled.
    pub fn tick(&mut self, now_ms: u64) {
        if let Some(text) = self.debouncer.poll(now_ms) {
            self.applied_text = text;
            self.apply_filter();
        }
    }

    /// Write the session to `store`.
    ///
    /// The serialized filter text is the applied one, not the live field
    /// contents: the stored visible list was produced by the applied query,
    /// and restoring a not-yet-settled keystroke burst next to that list
    /// would hand back an inconsistent pair.
    pub fn persist(&self, store: &mut dyn SessionStore) -> Result<(), PersistError> {
        persist::save(
            store,
            &self.technology,
            &self.tracker,
            &self.applied_text,
            &self.tags,
        )
    }

    /// Why the rendered list is empty, or `None` when it is not.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.tracker.visible().is_empty() {
            return None;
        }
        if self.tracker.is_filtering() {
            Some(EmptyState::NoFilterResults)
        } else if matches!(self.outcome, FetchOutcome::Failed) {
            Some(EmptyState::FetchError)
        } else {
            Some(EmptyState::NoChildren)
        }
    }

    fn apply_filter(&mut self) {
        let FetchOutcome::Ready(tree) = &self.outcome else {
            return;
        };
        let query =
            FilterQuery::from_input(&self.applied_text, self.tags.iter().map(String::as_str));
        self.tracker.on_filter_change(tree, &query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;
    use outline_tree::{RawNode, TopicKind};

    fn tree() -> FlatTree {
        FlatTree::build(&[
            RawNode::new("A", TopicKind::Article).with_path("/docs/a"),
            RawNode::new("B", TopicKind::Class)
                .with_path("/docs/b")
                .with_children(vec![
                    RawNode::new("C", TopicKind::Method).with_path("/docs/b/c"),
                ]),
        ])
    }

    fn titles(nav: &Navigator) -> Vec<String> {
        let tree = nav.tree().unwrap();
        nav.tracker()
            .visible()
            .iter()
            .map(|&uid| tree.get(uid).unwrap().title.clone())
            .collect()
    }

    #[test]
    fn typing_applies_after_the_debounce_settles() {
        let mut nav = Navigator::new("swift", tree());
        nav.navigate(&["/docs/a"]);

        nav.handle(NavigatorEvent::FilterText("c".into()), 0);
        nav.tick(300);
        assert!(!nav.tracker().is_filtering());

        // A newer keystroke restarts the window.
        nav.handle(NavigatorEvent::FilterText("C".into()), 300);
        nav.tick(700);
        assert!(!nav.tracker().is_filtering());
        nav.tick(800);
        assert!(nav.tracker().is_filtering());
        assert_eq!(titles(&nav), vec!["B", "C"]);
    }

    #[test]
    fn tag_selection_applies_immediately() {
        let mut nav = Navigator::new("swift", tree());
        nav.navigate(&["/docs/a"]);

        nav.handle(NavigatorEvent::SetTags(vec!["Articles".into()]), 0);
        assert_eq!(titles(&nav), vec!["A"]);

        // Clearing the tags with no text empties the filter entirely.
        nav.handle(NavigatorEvent::SetTags(Vec::new()), 10);
        assert!(!nav.tracker().is_filtering());
        assert_eq!(titles(&nav), vec!["A", "B"]);
    }

    #[test]
    fn close_dismisses_and_drops_pending_filter_text() {
        let mut nav = Navigator::new("swift", tree());
        nav.navigate(&["/docs/a"]);

        nav.handle(NavigatorEvent::FilterText("C".into()), 0);
        assert_eq!(nav.handle(NavigatorEvent::Close, 10), Some(Effect::Dismiss));
        nav.tick(10_000);
        assert!(!nav.tracker().is_filtering());
    }

    #[test]
    fn mount_prefers_a_valid_persisted_session() {
        let mut store = MemoryStore::new();
        {
            let mut nav = Navigator::new("swift", tree());
            nav.navigate(&["/docs/b", "/docs/b/c"]);
            nav.handle(NavigatorEvent::Toggle(Uid::new(1)), 0); // collapse B
            nav.persist(&mut store).unwrap();
        }

        let mut nav = Navigator::new("swift", tree());
        assert!(nav.mount(&store, &["/docs/b", "/docs/b/c"]));
        // The collapsed list came back verbatim, not recomputed from the
        // navigated path.
        assert_eq!(titles(&nav), vec!["A", "B"]);
        assert_eq!(nav.tracker().active_uid(), Some(Uid::new(2)));
    }

    #[test]
    fn persist_mid_debounce_stores_the_applied_filter() {
        let mut store = MemoryStore::new();
        {
            let mut nav = Navigator::new("swift", tree());
            nav.navigate(&["/docs/a"]);
            // The keystroke has not settled: the visible list is still the
            // unfiltered one, and the snapshot must agree with it.
            nav.handle(NavigatorEvent::FilterText("C".into()), 0);
            nav.persist(&mut store).unwrap();
        }

        let mut nav = Navigator::new("swift", tree());
        assert!(nav.mount(&store, &["/docs/a"]));
        assert_eq!(nav.filter_text(), "");
        assert!(!nav.tracker().is_filtering());
        assert_eq!(titles(&nav), vec!["A", "B"]);
    }

    #[test]
    fn mount_falls_back_to_navigation_on_stale_state() {
        let mut store = MemoryStore::new();
        {
            let mut nav = Navigator::new("swiftui", tree());
            nav.navigate(&["/docs/a"]);
            nav.persist(&mut store).unwrap();
        }

        let mut nav = Navigator::new("swift", tree());
        assert!(!nav.mount(&store, &["/docs/b", "/docs/b/c"]));
        assert_eq!(titles(&nav), vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_state_ranks_filter_over_error_over_childless() {
        let mut filtered = Navigator::new("swift", tree());
        filtered.navigate(&["/docs/a"]);
        filtered.handle(NavigatorEvent::FilterText("zzz".into()), 0);
        filtered.tick(1_000);
        assert_eq!(filtered.empty_state(), Some(EmptyState::NoFilterResults));

        let failed = Navigator::failed("swift");
        assert_eq!(failed.empty_state(), Some(EmptyState::FetchError));

        let barren = Navigator::new("swift", FlatTree::build(&[]));
        assert_eq!(barren.empty_state(), Some(EmptyState::NoChildren));

        let mut populated = Navigator::new("swift", tree());
        populated.navigate(&["/docs/a"]);
        assert_eq!(populated.empty_state(), None);
    }

    #[test]
    fn events_are_inert_in_the_error_state() {
        let mut nav = Navigator::failed("swift");
        nav.navigate(&["/docs/a"]);
        nav.handle(NavigatorEvent::Toggle(Uid::new(0)), 0);
        nav.handle(NavigatorEvent::SetTags(vec!["Articles".into()]), 0);
        assert!(nav.tracker().visible().is_empty());
        assert_eq!(nav.empty_state(), Some(EmptyState::FetchError));
    }
}
