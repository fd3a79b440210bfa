// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category tags and their bidirectional label mapping.

use outline_tree::TopicKind;

/// A coarse filter category offered next to the filter input.
///
/// Tags are the internal identifiers; the UI shows [`Tag::label`] and maps
/// selections back through [`Tag::from_label`]. Canonical matching always
/// happens on the internal identifier.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Tag {
    /// Free-form articles.
    Articles,
    /// Step-by-step tutorials.
    Tutorials,
    /// Sample-code projects.
    SampleCode,
    /// Class symbols.
    Classes,
    /// Structure symbols.
    Structures,
    /// Enumeration symbols and their cases.
    Enumerations,
    /// Protocol symbols.
    Protocols,
    /// Functions, methods, and initializers.
    Functions,
    /// Properties and instance variables.
    Properties,
    /// Type aliases.
    TypeAliases,
    /// Macros.
    Macros,
}

impl Tag {
    /// Every tag, in presentation order.
    pub const ALL: [Self; 11] = [
        Self::Articles,
        Self::Tutorials,
        Self::SampleCode,
        Self::Classes,
        Self::Structures,
        Self::Enumerations,
        Self::Protocols,
        Self::Functions,
        Self::Properties,
        Self::TypeAliases,
        Self::Macros,
    ];

    /// The label shown in the filter UI.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Articles => "Articles",
            Self::Tutorials => "Tutorials",
            Self::SampleCode => "Sample Code",
            Self::Classes => "Classes",
            Self::Structures => "Structures",
            Self::Enumerations => "Enumerations",
            Self::Protocols => "Protocols",
            Self::Functions => "Functions",
            Self::Properties => "Properties",
            Self::TypeAliases => "Type Aliases",
            Self::Macros => "Macros",
        }
    }

    /// Map a UI label back to its tag.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.label() == label)
    }

    /// The tag a row kind belongs to.
    ///
    /// Group markers belong to no tag: they are structural and never
    /// directly matchable.
    pub const fn of_kind(kind: TopicKind) -> Option<Self> {
        Some(match kind {
            TopicKind::Article => Self::Articles,
            TopicKind::Tutorial => Self::Tutorials,
            TopicKind::SampleCode => Self::SampleCode,
            TopicKind::Class => Self::Classes,
            TopicKind::Structure => Self::Structures,
            TopicKind::Enumeration | TopicKind::Case => Self::Enumerations,
            TopicKind::Protocol => Self::Protocols,
            TopicKind::Function | TopicKind::Method | TopicKind::Initializer => Self::Functions,
            TopicKind::Property => Self::Properties,
            TopicKind::TypeAlias => Self::TypeAliases,
            TopicKind::Macro => Self::Macros,
            TopicKind::GroupMarker => return None,
        })
    }
}
