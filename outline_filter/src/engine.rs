// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The match engine: evaluate a query against every node of a tree.

use std::collections::BTreeSet;

use outline_tree::{FlatTree, Uid};

use crate::pattern::FilterPattern;
use crate::tags::Tag;

/// A complete filter input: optional text pattern plus selected tags.
#[derive(Clone, Debug, Default)]
pub struct FilterQuery {
    /// The compiled text pattern, or `None` when the text filter is off.
    pub pattern: Option<FilterPattern>,
    /// Selected category tags; empty means all categories.
    pub tags: BTreeSet<Tag>,
}

impl FilterQuery {
    /// Build a query from an optional pattern and a tag selection.
    pub fn new(pattern: Option<FilterPattern>, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            pattern,
            tags: tags.into_iter().collect(),
        }
    }

    /// Build a query from raw user text and tag labels, dropping labels that
    /// do not map to a tag.
    pub fn from_input<'a>(text: &str, labels: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            pattern: FilterPattern::new(text),
            tags: labels.into_iter().filter_map(Tag::from_label).collect(),
        }
    }

    /// True when neither a pattern nor tags are set, i.e. filtering is off.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_none() && self.tags.is_empty()
    }
}

/// Evaluate `query` against every node and collect the direct matches.
///
/// A node matches iff the pattern is absent or occurs in its title, its kind
/// maps to a selected tag (or no tags are selected), and it is not a group
/// marker. An empty query yields an empty set: "everything matches" is
/// represented by filtering being off, not by an all-node match set.
pub fn matches(tree: &FlatTree, query: &FilterQuery) -> BTreeSet<Uid> {
    if query.is_empty() {
        return BTreeSet::new();
    }
    tree.document_order()
        .filter(|&uid| {
            let Some(node) = tree.get(uid) else {
                return false;
            };
            if node.kind.is_group_marker() {
                return false;
            }
            if let Some(pattern) = &query.pattern
                && !pattern.is_match(&node.title)
            {
                return false;
            }
            if !query.tags.is_empty() {
                let Some(tag) = Tag::of_kind(node.kind) else {
                    return false;
                };
                if !query.tags.contains(&tag) {
                    return false;
                }
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use outline_tree::{RawNode, TopicKind};

    fn tree() -> FlatTree {
        FlatTree::build(&[
            RawNode::new("Getting Started", TopicKind::Article),
            RawNode::new("Parser", TopicKind::Class).with_children(vec![
                RawNode::new("Instance Methods", TopicKind::GroupMarker),
                RawNode::new("parse(input:)", TopicKind::Method),
                RawNode::new("buffer", TopicKind::Property),
            ]),
        ])
    }

    fn titles(tree: &FlatTree, uids: &BTreeSet<Uid>) -> Vec<String> {
        uids.iter()
            .map(|&uid| tree.get(uid).unwrap().title.clone())
            .collect()
    }

    #[test]
    fn empty_query_matches_nothing() {
        let t = tree();
        assert!(matches(&t, &FilterQuery::default()).is_empty());
    }

    #[test]
    fn text_matches_titles_case_insensitively() {
        let t = tree();
        let q = FilterQuery::new(FilterPattern::new("PARSE"), []);
        assert_eq!(titles(&t, &matches(&t, &q)), vec!["Parser", "parse(input:)"]);
    }

    #[test]
    fn tags_restrict_by_kind() {
        let t = tree();
        let q = FilterQuery::new(None, [Tag::Properties]);
        assert_eq!(titles(&t, &matches(&t, &q)), vec!["buffer"]);
    }

    #[test]
    fn text_and_tags_combine_conjunctively() {
        let t = tree();
        let q = FilterQuery::new(FilterPattern::new("parse"), [Tag::Functions]);
        assert_eq!(titles(&t, &matches(&t, &q)), vec!["parse(input:)"]);
    }

    #[test]
    fn group_markers_never_match() {
        let t = tree();
        // "Instance Methods" contains "methods" but is a group marker.
        let q = FilterQuery::new(FilterPattern::new("methods"), []);
        assert!(matches(&t, &q).is_empty());
    }

    #[test]
    fn from_input_drops_unknown_labels() {
        let q = FilterQuery::from_input("parse", ["Functions", "Widgets"]);
        assert_eq!(q.tags.len(), 1);
        assert!(q.tags.contains(&Tag::Functions));
    }
}
