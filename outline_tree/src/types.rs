// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identifiers, row kinds, flags, and the nested source form of the tree.

use alloc::string::String;
use alloc::vec::Vec;
use bitflags::bitflags;

/// Identifier for a node in the flat tree.
///
/// Uids are assigned by [`FlatTree::build`](crate::FlatTree::build) in
/// document order (preorder, parents before children, siblings in declared
/// order), so they are stable for a given technology payload. They are only
/// meaningful within the tree that assigned them; persistence layers must
/// re-validate stored uids against a freshly built tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Uid(u32);

impl Uid {
    /// Create a uid from its raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw value, e.g. for serialization.
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// The kind of page or symbol a navigator row stands for.
///
/// Kinds drive icon selection and tag filtering in higher layers.
/// [`GroupMarker`](Self::GroupMarker) is the one structural pseudo-kind: it
/// labels a run of sibling rows, is not navigable, and never matches a
/// filter directly.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TopicKind {
    /// A free-form documentation article.
    Article,
    /// A step-by-step tutorial page.
    Tutorial,
    /// A downloadable sample-code project.
    SampleCode,
    /// A class symbol.
    Class,
    /// A structure symbol.
    Structure,
    /// An enumeration symbol.
    Enumeration,
    /// An enumeration case.
    Case,
    /// A protocol symbol.
    Protocol,
    /// A free function or global operator.
    Function,
    /// A method on a type.
    Method,
    /// An initializer.
    Initializer,
    /// A property or instance variable.
    Property,
    /// A type alias.
    TypeAlias,
    /// A macro.
    Macro,
    /// A structural, non-navigable label for a section of siblings.
    GroupMarker,
}

impl TopicKind {
    /// Whether this kind is the organizational-only pseudo-kind.
    pub const fn is_group_marker(self) -> bool {
        matches!(self, Self::GroupMarker)
    }
}

bitflags! {
    /// Per-node marks carried through from the technology payload.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// The symbol or page is deprecated.
        const DEPRECATED = 0b0000_0001;
        /// The symbol or page is in beta.
        const BETA       = 0b0000_0010;
    }
}

/// A node in the nested source form of a technology tree.
///
/// This is the shape the tree source delivers (one sequence per
/// interface-language variant); [`FlatTree::build`](crate::FlatTree::build)
/// flattens it. With the `serde` feature enabled it deserializes directly
/// from a technology JSON payload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RawNode {
    /// Display title of the row.
    pub title: String,
    /// Canonical page path, if the row is navigable.
    #[cfg_attr(feature = "serde", serde(default))]
    pub path: Option<String>,
    /// Row kind.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: TopicKind,
    /// Whether the symbol is deprecated.
    #[cfg_attr(feature = "serde", serde(default))]
    pub deprecated: bool,
    /// Whether the symbol is in beta.
    #[cfg_attr(feature = "serde", serde(default))]
    pub beta: bool,
    /// Child nodes in declared order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<RawNode>,
}

impl RawNode {
    /// Create a leaf source node with a title and kind.
    pub fn new(title: impl Into<String>, kind: TopicKind) -> Self {
        Self {
            title: title.into(),
            path: None,
            kind,
            deprecated: false,
            beta: false,
            children: Vec::new(),
        }
    }

    /// Set the canonical page path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Replace the children list.
    #[must_use]
    pub fn with_children(mut self, children: Vec<RawNode>) -> Self {
        self.children = children;
        self
    }

    /// Mark the node deprecated.
    #[must_use]
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    pub(crate) fn flags(&self) -> NodeFlags {
        let mut flags = NodeFlags::empty();
        if self.deprecated {
            flags |= NodeFlags::DEPRECATED;
        }
        if self.beta {
            flags |= NodeFlags::BETA;
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_marker_is_structural() {
        assert!(TopicKind::GroupMarker.is_group_marker());
        assert!(!TopicKind::Class.is_group_marker());
    }

    #[test]
    fn raw_node_builder_sets_flags() {
        let n = RawNode::new("Old API", TopicKind::Function).deprecated();
        assert_eq!(n.flags(), NodeFlags::DEPRECATED);
        let plain = RawNode::new("New API", TopicKind::Function);
        assert!(plain.flags().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn raw_node_deserializes_from_payload_json() {
        let json = r#"{
            "title": "Parser",
            "path": "/docs/parser",
            "type": "class",
            "deprecated": false,
            "children": [
                { "title": "Initializers", "type": "groupMarker" },
                { "title": "init(source:)", "path": "/docs/parser/init", "type": "initializer" }
            ]
        }"#;
        let node: RawNode = serde_json::from_str(json).expect("payload should deserialize");
        assert_eq!(node.kind, TopicKind::Class);
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].kind, TopicKind::GroupMarker);
        assert_eq!(node.children[0].path, None);
    }
}
