// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persist a navigator session and restore it verbatim, then window the
//! restored list for rendering.
//!
//! Run:
//! - `cargo run -p outline_demos --example navigator_persistence`

use kurbo::Rect;
use outline_nav::persist::MemoryStore;
use outline_nav::viewport::RowViewport;
use outline_nav::{Navigator, NavigatorEvent};
use outline_tree::{FlatTree, RawNode, TopicKind, Uid};

fn tree() -> FlatTree {
    let members: Vec<RawNode> = (0..40)
        .map(|i| {
            RawNode::new(&format!("member{i:02}"), TopicKind::Method)
                .with_path(&format!("/docs/big/member{i:02}"))
        })
        .collect();
    FlatTree::build(&[
        RawNode::new("Overview", TopicKind::Article).with_path("/docs/overview"),
        RawNode::new("BigType", TopicKind::Class)
            .with_path("/docs/big")
            .with_children(members),
    ])
}

fn main() {
    let mut store = MemoryStore::new();

    // First visit: expand BigType, then leave the page.
    {
        let mut nav = Navigator::new("bigkit", tree());
        nav.navigate(&["/docs/overview"]);
        nav.handle(NavigatorEvent::Toggle(Uid::new(1)), 0);
        println!("first visit renders {} rows", nav.tracker().visible().len());
        nav.persist(&mut store).expect("session encodes");
    }

    // Second visit: the session restores without a recompute.
    let mut nav = Navigator::new("bigkit", tree());
    let restored = nav.mount(&store, &["/docs/overview"]);
    println!("restored from session store: {restored}");
    println!("second visit renders {} rows", nav.tracker().visible().len());

    // Virtualize the restored list: a 240px viewport over 24px rows.
    let view = RowViewport::new(24.0, Rect::new(0.0, 120.0, 320.0, 360.0));
    let window = view.visible_range(nav.tracker().visible().len(), 2);
    println!("materialized rows {}..{} of {}", window.start, window.end, nav.tracker().visible().len());
    for index in window {
        let uid = nav.tracker().visible()[index];
        let title = &nav.tree().unwrap().get(uid).unwrap().title;
        println!("  row {index:2}: {title}");
    }
}
