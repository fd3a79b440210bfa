// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flatten a technology payload, navigate to a page, and toggle nodes.
//!
//! Run:
//! - `cargo run -p outline_demos --example navigator_walkthrough`

use outline_nav::{Navigator, NavigatorEvent};
use outline_tree::{FlatTree, RawNode, Uid};

const PAYLOAD: &str = r#"[
  {
    "title": "Essentials",
    "type": "article",
    "path": "/docs/slothcreator/essentials"
  },
  {
    "title": "Sloth",
    "type": "class",
    "path": "/docs/slothcreator/sloth",
    "children": [
      { "title": "init(name:color:power:)", "type": "initializer",
        "path": "/docs/slothcreator/sloth/init" },
      { "title": "eat(_:quantity:)", "type": "method",
        "path": "/docs/slothcreator/sloth/eat" },
      { "title": "energyLevel", "type": "property",
        "path": "/docs/slothcreator/sloth/energylevel" }
    ]
  },
  {
    "title": "SlothFood",
    "type": "structure",
    "path": "/docs/slothcreator/slothfood"
  }
]"#;

fn print_rows(nav: &Navigator) {
    let tree = nav.tree().unwrap();
    for &uid in nav.tracker().visible() {
        let node = tree.get(uid).unwrap();
        let marker = if node.is_leaf() {
            "  "
        } else if nav.tracker().is_open(uid) {
            "v "
        } else {
            "> "
        };
        let indent = "    ".repeat(node.depth as usize);
        println!("{indent}{marker}{}", node.title);
    }
}

fn main() {
    let source: Vec<RawNode> = serde_json::from_str(PAYLOAD).expect("payload parses");
    let tree = FlatTree::build(&source);
    let mut nav = Navigator::new("slothcreator", tree);

    // Landing on the eat(_:quantity:) page opens its ancestors.
    nav.navigate(&["/docs/slothcreator/sloth", "/docs/slothcreator/sloth/eat"]);
    println!("after navigating to eat(_:quantity:):");
    print_rows(&nav);

    // Collapse Sloth: its members disappear as one patch.
    let sloth = nav.tree().unwrap().resolve_active(&["/docs/slothcreator/sloth"]);
    nav.handle(NavigatorEvent::Toggle(sloth.unwrap_or(Uid::new(0))), 0);
    println!("\nafter collapsing Sloth:");
    print_rows(&nav);
}
