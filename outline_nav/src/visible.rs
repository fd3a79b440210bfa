// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visible-set calculator: from open state and filter results to the
//! ordered list of rows to render.

use std::collections::BTreeSet;

use outline_tree::{FlatTree, Uid};

/// Direct filter matches plus their ancestor closure.
///
/// Built once per filter change and consulted by both the full
/// [`recompute`] and the tracker's incremental patches, so the two can never
/// disagree about what filtering makes visible.
#[derive(Clone, Debug, Default)]
pub struct FilterContext {
    matches: BTreeSet<Uid>,
    ancestors: BTreeSet<Uid>,
}

impl FilterContext {
    /// Build the context from a set of directly matching uids.
    ///
    /// For every match the full parent chain up to ROOT is collected, so a
    /// matching deep node's containing hierarchy is always renderable even
    /// when collapsed.
    pub fn new(tree: &FlatTree, matches: BTreeSet<Uid>) -> Self {
        let mut ancestors = BTreeSet::new();
        for &uid in &matches {
            for ancestor in tree.ancestors(uid) {
                ancestors.insert(ancestor);
            }
        }
        Self { matches, ancestors }
    }

    /// The directly matching uids.
    pub fn matches(&self) -> &BTreeSet<Uid> {
        &self.matches
    }

    /// The ancestor set of all matches (the uids that must be open to reveal
    /// every match).
    pub fn ancestors(&self) -> &BTreeSet<Uid> {
        &self.ancestors
    }

    /// Whether `uid` is a match or lies on the path from a match to ROOT.
    pub fn is_visible(&self, uid: Uid) -> bool {
        self.matches.contains(&uid) || self.ancestors.contains(&uid)
    }

    /// Whether `uid` is a direct match.
    pub fn is_match(&self, uid: Uid) -> bool {
        self.matches.contains(&uid)
    }
}

/// Whether `child` belongs in the visible list, given its parent's state.
///
/// Callers must only ask about children of nodes that are themselves
/// included; the include set is closed under ancestors in both modes, so
/// pruned traversals and local patches stay exact.
pub(crate) fn child_included(
    open: &BTreeSet<Uid>,
    filter: Option<&FilterContext>,
    parent: Uid,
    child: Uid,
) -> bool {
    match filter {
        // Standard expand/collapse: a row shows iff its parent is expanded.
        None => open.contains(&parent),
        // Filtered: matches and their ancestor chains always show; other
        // children show only under an expanded row that is itself a match.
        Some(ctx) => ctx.is_visible(child) || (open.contains(&parent) && ctx.is_match(parent)),
    }
}

/// Compute the full ordered visible list from scratch.
///
/// Output is document order (parents before children, siblings in declared
/// order) and is always a subset of the store. With `filter` absent this is
/// plain expand/collapse semantics; with a filter it is the union of direct
/// matches, their ancestor chains, and the children of expanded matches.
pub fn recompute(
    tree: &FlatTree,
    open: &BTreeSet<Uid>,
    filter: Option<&FilterContext>,
) -> Vec<Uid> {
    let mut out = Vec::new();
    // Depth-first, pushing children in reverse so siblings pop in order.
    // Pruning at excluded nodes is exact: the filtered include set is closed
    // under ancestors, so an excluded node cannot hide an includable one.
    let mut stack: Vec<Uid> = tree
        .roots()
        .iter()
        .rev()
        .copied()
        .filter(|&root| filter.is_none_or(|ctx| ctx.is_visible(root)))
        .collect();
    while let Some(uid) = stack.pop() {
        out.push(uid);
        // Filtered rows can carry includable children even when collapsed
        // (deep matches), so descend unconditionally in that mode.
        if filter.is_some() || open.contains(&uid) {
            for &child in tree.children_of(uid).iter().rev() {
                if child_included(open, filter, uid, child) {
                    stack.push(child);
                }
            }
        }
    }
    out
}
