// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-path resolution: from URL path segments to a root→active uid chain.

use alloc::vec::Vec;

use crate::tree::FlatTree;
use crate::types::Uid;

impl FlatTree {
    /// Resolve navigation path segments into the chain of uids from the
    /// technology root to the active page.
    ///
    /// Walks `segments` from the outermost inward. At each step the current
    /// candidate set (initially the top-level nodes, then the resolved node's
    /// children) is scanned linearly for a node whose `path` equals the
    /// segment. An unmatched segment ends the walk and the prefix resolved so
    /// far is returned; resolution never errors. The active uid is the last
    /// element of the returned chain, or nothing when no segment matched.
    ///
    /// The linear scan per level is O(depth × branching factor), which is
    /// fine for documentation hierarchies (shallow relative to breadth).
    pub fn resolve_path(&self, segments: &[&str]) -> Vec<Uid> {
        let mut resolved = Vec::new();
        let mut candidates = self.roots();
        for segment in segments {
            let Some(uid) = candidates
                .iter()
                .copied()
                .find(|&uid| self.get(uid).and_then(|n| n.path.as_deref()) == Some(*segment))
            else {
                break;
            };
            resolved.push(uid);
            candidates = self.children_of(uid);
        }
        resolved
    }

    /// The active uid for a segment path: the deepest resolved node, if any.
    pub fn resolve_active(&self, segments: &[&str]) -> Option<Uid> {
        self.resolve_path(segments).last().copied()
    }
}
