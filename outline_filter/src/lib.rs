// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=outline_filter --heading-base-level=0

//! Outline Filter: text and tag matching over a flat navigator tree.
//!
//! The filter engine answers one question: which nodes of a technology tree
//! directly match the user's filter input? It combines:
//!
//! - [`FilterPattern`]: a case-insensitive pattern built from escaped user
//!   text; only existence-of-match is exposed.
//! - [`Tag`]: coarse category tags (articles, classes, functions, ...) with a
//!   bidirectional mapping to their UI labels.
//! - [`matches`]: evaluates a [`FilterQuery`] against every node and returns
//!   the set of directly matching uids.
//!
//! Group markers are organizational-only rows and never match directly;
//! whether a match's *ancestors* become visible is the concern of the
//! visible-set calculator in the navigator crate, not of this engine.
//!
//! ## Minimal usage
//!
//! ```
//! use outline_filter::{matches, FilterPattern, FilterQuery, Tag};
//! use outline_tree::{FlatTree, RawNode, TopicKind};
//!
//! let tree = FlatTree::build(&[
//!     RawNode::new("Parser", TopicKind::Class),
//!     RawNode::new("parse(input:)", TopicKind::Function),
//! ]);
//!
//! let query = FilterQuery::new(FilterPattern::new("pars"), [Tag::Functions]);
//! let hits = matches(&tree, &query);
//! assert_eq!(hits.len(), 1, "only the function carries the Functions tag");
//! ```

pub mod engine;
pub mod pattern;
pub mod tags;

pub use engine::{FilterQuery, matches};
pub use pattern::FilterPattern;
pub use tags::Tag;
