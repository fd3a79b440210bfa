// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=outline_tree --heading-base-level=0

//! Outline Tree: a flat, uid-indexed documentation navigator tree.
//!
//! Outline Tree is the data layer of a sidebar navigator for hierarchical API
//! documentation. A technology payload arrives as nested [`RawNode`]s;
//! [`FlatTree::build`] normalizes it into a flat collection of [`Node`]s keyed
//! by [`Uid`], with parent/child links, depth, sibling position, and a
//! document-order rank per node.
//!
//! - Every node carries its full addressing context: `parent` (or ROOT),
//!   ordered `children`, `depth`, `index`, and `siblings_count`.
//! - [`FlatTree::resolve_path`] walks URL path segments from the technology
//!   root inward and returns the deepest matched prefix (it never fails hard;
//!   an unmatched segment simply ends the walk).
//! - [`FlatTree::rank`] exposes each node's preorder position, which higher
//!   layers use to splice rows into an already-materialized render list
//!   without recomputing it.
//!
//! Expansion state, filtering, and persistence live in higher crates; this
//! crate owns only the immutable shape of the tree. The store is built once
//! per technology load and never mutated afterwards.
//!
//! ## Minimal usage
//!
//! ```
//! use outline_tree::{FlatTree, RawNode, TopicKind};
//!
//! let source = vec![
//!     RawNode::new("Essentials", TopicKind::Article).with_path("/docs/essentials"),
//!     RawNode::new("Parser", TopicKind::Class)
//!         .with_path("/docs/parser")
//!         .with_children(vec![
//!             RawNode::new("init(source:)", TopicKind::Initializer).with_path("/docs/parser/init"),
//!         ]),
//! ];
//!
//! let tree = FlatTree::build(&source);
//! assert_eq!(tree.len(), 3);
//!
//! // Resolve the active page from its path segments.
//! let path = tree.resolve_path(&["/docs/parser", "/docs/parser/init"]);
//! assert_eq!(path.len(), 2);
//! let active = *path.last().unwrap();
//! assert_eq!(tree.get(active).unwrap().title, "init(source:)");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod ancestry;
pub mod tree;
pub mod types;

pub use tree::{FlatTree, Node};
pub use types::{NodeFlags, RawNode, TopicKind, Uid};
