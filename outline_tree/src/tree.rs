// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flat node store: build, lookups, and traversals.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{NodeFlags, RawNode, TopicKind, Uid};

/// A flat tree element.
///
/// Nodes are produced by [`FlatTree::build`] and are immutable afterwards.
/// `parent` is `None` for top-level nodes (children of the technology root,
/// the ROOT sentinel of the data model).
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Unique identifier within the owning tree.
    pub uid: Uid,
    /// Display title.
    pub title: String,
    /// Canonical page path, if navigable.
    pub path: Option<String>,
    /// Row kind.
    pub kind: TopicKind,
    /// Parent uid, or `None` for ROOT.
    pub parent: Option<Uid>,
    /// Child uids in declared order. Empty for leaves.
    pub children: Vec<Uid>,
    /// Number of ancestors up to ROOT.
    pub depth: u32,
    /// Position among siblings (0-based).
    pub index: usize,
    /// Total number of siblings, including this node.
    pub siblings_count: usize,
    /// Deprecated/beta marks.
    pub flags: NodeFlags,
}

impl Node {
    /// Whether the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// The flat, uid-indexed node store for one technology.
///
/// Built once per technology load via [`FlatTree::build`]; higher layers hold
/// it immutably for the whole session. Alongside the node map it records the
/// top-level uids and each node's document-order rank (see [`FlatTree::rank`]).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatTree {
    nodes: BTreeMap<Uid, Node>,
    roots: Vec<Uid>,
    // Preorder uid sequence; position in this list is a node's rank.
    order: Vec<Uid>,
}

impl FlatTree {
    /// Flatten a nested technology payload into a uid-indexed store.
    ///
    /// Uids are assigned in document order starting at zero. Empty input
    /// yields an empty tree; no error is raised.
    pub fn build(children: &[RawNode]) -> Self {
        let mut tree = Self::default();
        let mut next = 0_u32;
        for (index, raw) in children.iter().enumerate() {
            let uid = tree.flatten(raw, None, 0, index, children.len(), &mut next);
            tree.roots.push(uid);
        }
        tree
    }

    fn flatten(
        &mut self,
        raw: &RawNode,
        parent: Option<Uid>,
        depth: u32,
        index: usize,
        siblings_count: usize,
        next: &mut u32,
    ) -> Uid {
        let uid = Uid::new(*next);
        *next += 1;
        // Claim the preorder slot before descending so children number
        // after their parent; the node itself is inserted once its child
        // uids are known.
        self.order.push(uid);
        let mut children = Vec::with_capacity(raw.children.len());
        for (child_index, child) in raw.children.iter().enumerate() {
            children.push(self.flatten(
                child,
                Some(uid),
                depth + 1,
                child_index,
                raw.children.len(),
                next,
            ));
        }
        self.nodes.insert(
            uid,
            Node {
                uid,
                title: raw.title.clone(),
                path: raw.path.clone(),
                kind: raw.kind,
                parent,
                children,
                depth,
                index,
                siblings_count,
                flags: raw.flags(),
            },
        );
        uid
    }

    /// Number of nodes in the store.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the store holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by uid.
    pub fn get(&self, uid: Uid) -> Option<&Node> {
        self.nodes.get(&uid)
    }

    /// Whether the uid resolves in this store.
    pub fn contains(&self, uid: Uid) -> bool {
        self.nodes.contains_key(&uid)
    }

    /// Top-level uids (children of ROOT) in declared order.
    pub fn roots(&self) -> &[Uid] {
        &self.roots
    }

    /// A node's children in declared order. Empty for unknown uids.
    pub fn children_of(&self, uid: Uid) -> &[Uid] {
        self.get(uid).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// A node's parent uid, or `None` for top-level nodes and unknown uids.
    pub fn parent_of(&self, uid: Uid) -> Option<Uid> {
        self.get(uid).and_then(|n| n.parent)
    }

    /// The chain of ancestors from `uid`'s parent up to ROOT (nearest first).
    pub fn ancestors(&self, uid: Uid) -> Vec<Uid> {
        let mut out = Vec::new();
        let mut cursor = self.parent_of(uid);
        while let Some(parent) = cursor {
            out.push(parent);
            cursor = self.parent_of(parent);
        }
        out
    }

    /// The full subtree rooted at `uid` (including `uid`), breadth-first.
    pub fn subtree(&self, uid: Uid) -> Vec<Uid> {
        if !self.contains(uid) {
            return Vec::new();
        }
        let mut out = Vec::new();
        let mut queue = Vec::new();
        queue.push(uid);
        let mut head = 0;
        while head < queue.len() {
            let current = queue[head];
            head += 1;
            out.push(current);
            queue.extend_from_slice(self.children_of(current));
        }
        out
    }

    /// A node's document-order rank (preorder position), or `None` for
    /// unknown uids.
    ///
    /// Uids are assigned sequentially in document order, so the rank is the
    /// raw uid value for trees built by [`FlatTree::build`]; the lookup keeps
    /// that an implementation detail.
    pub fn rank(&self, uid: Uid) -> Option<usize> {
        self.contains(uid).then(|| uid.get() as usize)
    }

    /// Iterate all uids in document order.
    pub fn document_order(&self) -> impl Iterator<Item = Uid> + '_ {
        self.order.iter().copied()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::TopicKind;
    use alloc::vec;

    /// R → [A, B → [C]]; the fixture shared across the crate's tests.
    pub(crate) fn sample() -> FlatTree {
        FlatTree::build(&[
            RawNode::new("A", TopicKind::Article).with_path("/docs/a"),
            RawNode::new("B", TopicKind::Class)
                .with_path("/docs/b")
                .with_children(vec![
                    RawNode::new("C", TopicKind::Method).with_path("/docs/b/c"),
                ]),
        ])
    }

    #[test]
    fn build_assigns_document_order_uids() {
        let tree = sample();
        let order: Vec<u32> = tree.document_order().map(Uid::get).collect();
        assert_eq!(order, vec![0, 1, 2], "preorder: A, B, C");
        assert_eq!(tree.get(Uid::new(0)).unwrap().title, "A");
        assert_eq!(tree.get(Uid::new(1)).unwrap().title, "B");
        assert_eq!(tree.get(Uid::new(2)).unwrap().title, "C");
    }

    #[test]
    fn build_links_parents_and_children() {
        let tree = sample();
        let b = Uid::new(1);
        let c = Uid::new(2);
        assert_eq!(tree.parent_of(b), None);
        assert_eq!(tree.parent_of(c), Some(b));
        assert_eq!(tree.children_of(b), &[c]);
        for uid in tree.document_order() {
            for &child in tree.children_of(uid) {
                assert_eq!(tree.parent_of(child), Some(uid), "back-link must hold");
            }
        }
    }

    #[test]
    fn build_records_depth_and_sibling_geometry() {
        let tree = sample();
        let a = tree.get(Uid::new(0)).unwrap();
        let c = tree.get(Uid::new(2)).unwrap();
        assert_eq!(a.depth, 0);
        assert_eq!(a.index, 0);
        assert_eq!(a.siblings_count, 2);
        assert_eq!(c.depth, 1);
        assert_eq!(c.index, 0);
        assert_eq!(c.siblings_count, 1);
    }

    #[test]
    fn empty_input_builds_empty_tree() {
        let tree = FlatTree::build(&[]);
        assert!(tree.is_empty());
        assert!(tree.roots().is_empty());
    }

    #[test]
    fn ancestors_walk_to_root() {
        let tree = sample();
        assert_eq!(tree.ancestors(Uid::new(2)), vec![Uid::new(1)]);
        assert!(tree.ancestors(Uid::new(0)).is_empty());
    }

    #[test]
    fn subtree_is_breadth_first() {
        let tree = FlatTree::build(&[RawNode::new("R", TopicKind::Class).with_children(vec![
            RawNode::new("X", TopicKind::Method)
                .with_children(vec![RawNode::new("X1", TopicKind::Property)]),
            RawNode::new("Y", TopicKind::Method),
        ])]);
        let uids: Vec<u32> = tree.subtree(Uid::new(0)).iter().map(|u| u.get()).collect();
        // R, then both children, then the grandchild.
        assert_eq!(uids, vec![0, 1, 3, 2]);
    }

    #[test]
    fn rank_matches_document_order() {
        let tree = sample();
        for (position, uid) in tree.document_order().enumerate() {
            assert_eq!(tree.rank(uid), Some(position));
        }
        assert_eq!(tree.rank(Uid::new(99)), None);
    }
}
