// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The open-state tracker: owns the open set and the visible list, and keeps
//! the two consistent across toggles, navigation, filtering, and restores.

use std::collections::BTreeSet;

use outline_filter::FilterQuery;
use outline_tree::{FlatTree, Uid};
use tracing::debug;

use crate::visible::{FilterContext, child_included, recompute};

/// The reactive core of the navigator.
///
/// A `Tracker` owns the open-node set, the materialized visible list, the
/// resolved active path, and the current filter context. The flat tree is
/// immutable for the session and passed into every operation by reference.
///
/// Toggles patch the visible list in place instead of recomputing it. The
/// invariant, checked by this module's tests including a randomized sequence
/// property, is that after any patch the list equals what a full
/// [`recompute`] from the resulting open set would produce. Per node the
/// state is strictly two-valued: a uid is open iff it is in the open set.
#[derive(Clone, Debug, Default)]
pub struct Tracker {
    open: BTreeSet<Uid>,
    visible: Vec<Uid>,
    active_path: Vec<Uid>,
    filter: Option<FilterContext>,
    scroll_target: Option<Uid>,
}

impl Tracker {
    /// Create an empty tracker (no open nodes, nothing visible).
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered list of rows to render.
    pub fn visible(&self) -> &[Uid] {
        &self.visible
    }

    /// The set of expanded uids.
    pub fn open_nodes(&self) -> &BTreeSet<Uid> {
        &self.open
    }

    /// The resolved root→active chain from the last navigation.
    pub fn active_path(&self) -> &[Uid] {
        &self.active_path
    }

    /// The uid of the currently viewed page, if one resolved.
    pub fn active_uid(&self) -> Option<Uid> {
        self.active_path.last().copied()
    }

    /// Whether a node is currently expanded.
    pub fn is_open(&self, uid: Uid) -> bool {
        self.open.contains(&uid)
    }

    /// Whether a filter is currently shaping the visible list.
    pub fn is_filtering(&self) -> bool {
        self.filter.is_some()
    }

    /// React to the active page changing.
    ///
    /// The ancestors of the new active node are merged into the open set
    /// (nodes the user expanded elsewhere stay expanded) and the visible
    /// list is fully recomputed. The active node becomes the deferred scroll
    /// target.
    pub fn on_navigate(&mut self, tree: &FlatTree, path: Vec<Uid>) {
        debug!(depth = path.len(), "navigator: active page changed");
        if let Some((_, ancestors)) = path.split_last() {
            for &uid in ancestors {
                self.open.insert(uid);
            }
        }
        self.scroll_target = path.last().copied();
        self.active_path = path;
        self.refresh(tree);
    }

    /// React to the debounced filter text or tag selection changing.
    ///
    /// Filtering is a different navigation mode: the open set is *replaced*
    /// with exactly the ancestor set of the current matches (or, when the
    /// query empties, with the active ancestry), then the visible list is
    /// fully recomputed.
    pub fn on_filter_change(&mut self, tree: &FlatTree, query: &FilterQuery) {
        if query.is_empty() {
            debug!("navigator: filter cleared");
            self.filter = None;
            self.open = self.active_ancestors();
        } else {
            let ctx = FilterContext::new(tree, outline_filter::matches(tree, query));
            debug!(matches = ctx.matches().len(), "navigator: filter changed");
            self.open = ctx.ancestors().clone();
            self.filter = Some(ctx);
        }
        self.scroll_target = None;
        self.refresh(tree);
    }

    /// Flip one node between open and closed, patching the visible list.
    ///
    /// Closing collapses the node's entire subtree (breadth-first) out of
    /// the open set and drops its rendered descendants; while filtering,
    /// rows that are matches or ancestors of matches stay. Opening splices
    /// in every row now revealed under the node, including rows under
    /// descendants that stayed open while hidden (the node is found by
    /// linear scan; toggling a node that is not rendered only updates the
    /// open set). Leaves and unknown uids are no-ops.
    pub fn toggle(&mut self, tree: &FlatTree, uid: Uid) {
        let Some(node) = tree.get(uid) else { return };
        if node.is_leaf() {
            return;
        }
        if self.open.contains(&uid) {
            self.close_subtree(tree, uid);
        } else {
            self.open.insert(uid);
            if self.visible.contains(&uid) {
                self.splice_descendants(tree, uid);
            }
        }
    }

    /// Expand or collapse a node's entire subtree in one operation.
    ///
    /// The expand/collapse-all gesture: opening marks every expandable
    /// descendant open and splices all newly visible rows in; closing is the
    /// recursive collapse [`toggle`](Self::toggle) already performs.
    pub fn toggle_subtree(&mut self, tree: &FlatTree, uid: Uid) {
        let Some(node) = tree.get(uid) else { return };
        if node.is_leaf() {
            return;
        }
        if self.open.contains(&uid) {
            self.close_subtree(tree, uid);
            return;
        }
        let members = tree.subtree(uid);
        for &member in &members {
            if !tree.children_of(member).is_empty() {
                self.open.insert(member);
            }
        }
        if !self.visible.contains(&uid) {
            return;
        }
        for &member in &members {
            if member == uid {
                continue;
            }
            let Some(parent) = tree.parent_of(member) else {
                continue;
            };
            if child_included(&self.open, self.filter.as_ref(), parent, member) {
                self.insert_row(tree, member);
            }
        }
    }

    /// Install persisted state without recomputing.
    ///
    /// The stored visible list is already the materialized product of the
    /// operations above; recomputing here would race the restore (and, with
    /// a pending filter, produce the wrong list). The filter context is
    /// rebuilt so later patches stay consistent with the restored query.
    pub fn restore(
        &mut self,
        tree: &FlatTree,
        query: &FilterQuery,
        open: BTreeSet<Uid>,
        visible: Vec<Uid>,
        active_path: Vec<Uid>,
    ) {
        debug!(
            open = open.len(),
            rows = visible.len(),
            "navigator: restoring persisted state"
        );
        self.filter = (!query.is_empty())
            .then(|| FilterContext::new(tree, outline_filter::matches(tree, query)));
        self.open = open;
        self.visible = visible;
        self.scroll_target = active_path.last().copied();
        self.active_path = active_path;
    }

    /// Resolve the deferred scroll-to-active request against the rendered
    /// list, consuming it on success.
    ///
    /// Returns the row index of the pending target once the target is
    /// actually part of the laid-out list. Calling before the list contains
    /// the target leaves the request pending (the too-early scroll is a
    /// silent no-op); navigation overwrites any pending request.
    pub fn take_scroll_target(&mut self) -> Option<usize> {
        let uid = self.scroll_target?;
        let index = self.visible.iter().position(|&v| v == uid)?;
        self.scroll_target = None;
        Some(index)
    }

    fn refresh(&mut self, tree: &FlatTree) {
        self.visible = recompute(tree, &self.open, self.filter.as_ref());
    }

    fn active_ancestors(&self) -> BTreeSet<Uid> {
        match self.active_path.split_last() {
            Some((_, ancestors)) => ancestors.iter().copied().collect(),
            None => BTreeSet::new(),
        }
    }

    /// Collapse `uid`'s subtree: every descendant leaves the open set, and
    /// rendered descendants leave the visible list unless the filter keeps
    /// them (matches and their ancestors survive a collapse).
    fn close_subtree(&mut self, tree: &FlatTree, uid: Uid) {
        let mut descendants: BTreeSet<Uid> = tree.subtree(uid).into_iter().collect();
        for &member in &descendants {
            self.open.remove(&member);
        }
        descendants.remove(&uid);
        let filter = self.filter.as_ref();
        self.visible.retain(|row| {
            !descendants.contains(row) || filter.is_some_and(|ctx| ctx.is_visible(*row))
        });
    }

    /// Insert every row the current open set and filter reveal under `uid`,
    /// walking the same descent as [`recompute`].
    ///
    /// Descendants can be open while hidden (toggled under a collapsed
    /// ancestor), so a single level of children is not enough: rows under
    /// such descendants become visible again the moment `uid` does.
    fn splice_descendants(&mut self, tree: &FlatTree, uid: Uid) {
        let mut stack = vec![uid];
        while let Some(parent) = stack.pop() {
            if self.filter.is_some() || self.open.contains(&parent) {
                for &child in tree.children_of(parent) {
                    if child_included(&self.open, self.filter.as_ref(), parent, child) {
                        self.insert_row(tree, child);
                        stack.push(child);
                    }
                }
            }
        }
    }

    /// Insert a row at its document-order position, skipping duplicates.
    ///
    /// The visible list is always sorted by rank, so the position is a
    /// binary search away.
    fn insert_row(&mut self, tree: &FlatTree, uid: Uid) {
        let Some(rank) = tree.rank(uid) else { return };
        if let Err(position) = self
            .visible
            .binary_search_by_key(&rank, |&row| tree.rank(row).unwrap_or(usize::MAX))
        {
            self.visible.insert(position, uid);
        }
    }
}
