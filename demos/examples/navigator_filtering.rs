// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounced text filtering and tag selection.
//!
//! Run:
//! - `cargo run -p outline_demos --example navigator_filtering`

use outline_nav::{EmptyState, Navigator, NavigatorEvent};
use outline_tree::{FlatTree, RawNode, TopicKind};

fn tree() -> FlatTree {
    FlatTree::build(&[
        RawNode::new("Getting Started", TopicKind::Article).with_path("/docs/start"),
        RawNode::new("Parser", TopicKind::Class)
            .with_path("/docs/parser")
            .with_children(vec![
                RawNode::new("parse(input:)", TopicKind::Method).with_path("/docs/parser/parse"),
                RawNode::new("ParseError", TopicKind::Enumeration)
                    .with_path("/docs/parser/error"),
            ]),
        RawNode::new("Formatter", TopicKind::Structure).with_path("/docs/formatter"),
    ])
}

fn print_rows(nav: &Navigator) {
    let tree = nav.tree().unwrap();
    for &uid in nav.tracker().visible() {
        let node = tree.get(uid).unwrap();
        println!("{}{}", "    ".repeat(node.depth as usize), node.title);
    }
}

fn main() {
    let mut nav = Navigator::new("parsekit", tree());
    nav.navigate(&["/docs/start"]);

    // Keystrokes land at 0ms and 200ms; only the second survives the
    // 500ms debounce, firing at 700ms.
    nav.handle(NavigatorEvent::FilterText("par".into()), 0);
    nav.handle(NavigatorEvent::FilterText("parse".into()), 200);
    nav.tick(400);
    println!("at 400ms (still settling): {} rows", nav.tracker().visible().len());
    nav.tick(700);
    println!("\nat 700ms, filter \"parse\" applied:");
    print_rows(&nav);

    // Tags apply immediately, conjoined with the text.
    nav.handle(NavigatorEvent::SetTags(vec!["Enumerations".into()]), 800);
    println!("\nwith the Enumerations tag:");
    print_rows(&nav);

    // A filter that matches nothing reports why the list is empty.
    nav.handle(NavigatorEvent::FilterText("zebra".into()), 900);
    nav.tick(2_000);
    assert_eq!(nav.empty_state(), Some(EmptyState::NoFilterResults));
    println!("\nfilter \"zebra\": no results (empty state reported)");
}
