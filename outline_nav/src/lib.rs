// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=outline_nav --heading-base-level=0

//! Outline Nav: the stateful core of a documentation sidebar navigator.
//!
//! This crate turns an immutable [`outline_tree::FlatTree`] into an
//! interactive navigator. The central type is the [`Tracker`]: it owns the
//! open-node set and the materialized visible list, and keeps them in sync
//! across expand/collapse toggles, active-page navigation, and filtering.
//! Toggles patch the visible list in place; the crate's key invariant is
//! that every patch produces exactly the list a full [`recompute`] from the
//! same open set would.
//!
//! Around the tracker:
//!
//! - [`Navigator`] is the embeddable facade: it routes [`NavigatorEvent`]s,
//!   debounces filter text, applies tag selections, and reports why an empty
//!   list is empty ([`EmptyState`]).
//! - [`persist`] saves and restores the session under fixed `navigator.*`
//!   keys, validating restored uids against the live tree and adopting the
//!   stored visible list verbatim.
//! - [`timer`] provides the host-driven [`Debouncer`](timer::Debouncer) and
//!   [`Throttle`](timer::Throttle); [`shell`] tracks the sidebar breakpoint
//!   and page scroll lock; [`viewport`] does uniform-row virtualization math.
//!
//! ## Minimal usage
//!
//! ```
//! use outline_nav::{Navigator, NavigatorEvent};
//! use outline_tree::{FlatTree, RawNode, TopicKind, Uid};
//!
//! let tree = FlatTree::build(&[
//!     RawNode::new("Essentials", TopicKind::Article).with_path("/docs/essentials"),
//!     RawNode::new("Parser", TopicKind::Class)
//!         .with_path("/docs/parser")
//!         .with_children(vec![
//!             RawNode::new("init(source:)", TopicKind::Initializer).with_path("/docs/parser/init"),
//!         ]),
//! ]);
//!
//! let mut nav = Navigator::new("swift", tree);
//! nav.navigate(&["/docs/parser", "/docs/parser/init"]);
//! // The active page's ancestors opened; all three rows render.
//! assert_eq!(nav.tracker().visible().len(), 3);
//!
//! // Collapsing the parser hides its initializer.
//! nav.handle(NavigatorEvent::Toggle(Uid::new(1)), 0);
//! assert_eq!(nav.tracker().visible().len(), 2);
//! ```

pub mod navigator;
pub mod persist;
pub mod shell;
pub mod timer;
pub mod tracker;
pub mod viewport;
pub mod visible;

pub use navigator::{Effect, EmptyState, FetchOutcome, Navigator, NavigatorEvent};
pub use tracker::Tracker;
pub use visible::{FilterContext, recompute};
